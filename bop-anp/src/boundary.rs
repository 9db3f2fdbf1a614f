//! Production-field boundary lookup.
//!
//! The ANP publishes field polygons as a GeoJSON FeatureCollection whose
//! features carry the field name in the `NOM_CAMPO` property. The
//! aggregation core never reads geometry; the lookup exists so the
//! map-rendering collaborator can join computed volumes onto polygons by
//! canonical field name.

use crate::normalize::canonical_field_name;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    properties: FeatureProperties,
    geometry: Value,
}

#[derive(Debug, Deserialize)]
struct FeatureProperties {
    #[serde(rename = "NOM_CAMPO")]
    nom_campo: String,
}

/// Field polygons keyed by canonical field name.
#[derive(Debug, Default)]
pub struct FieldBoundaries {
    boundaries: HashMap<String, Value>,
}

impl FieldBoundaries {
    /// Parse a GeoJSON FeatureCollection string.
    ///
    /// Feature names are collapsed through the alias table on load, so a
    /// polygon published under a legacy field name is found under the
    /// canonical one.
    pub fn parse_geojson(geojson: &str) -> Result<Self, serde_json::Error> {
        let collection: FeatureCollection = serde_json::from_str(geojson)?;
        let mut boundaries = HashMap::new();
        for feature in collection.features {
            let name = canonical_field_name(&feature.properties.nom_campo).to_string();
            boundaries.insert(name, feature.geometry);
        }
        log::info!("boundary: {} field polygons loaded", boundaries.len());
        Ok(Self { boundaries })
    }

    /// Geometry for a field, resolved through the alias table.
    pub fn lookup(&self, field: &str) -> Option<&Value> {
        self.boundaries.get(canonical_field_name(field))
    }

    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }
}
