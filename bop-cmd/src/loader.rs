//! Dataset and boundary loading for the CLI commands.
//!
//! Production CSVs come in two shapes: the comma-delimited normalized
//! export and the semicolon-delimited raw ANP download; the delimiter is
//! sniffed from the header line. ANP bulk downloads are large, so
//! gzip-compressed files (`.csv.gz`) are accepted and decompressed on the
//! fly.

use anyhow::Context;
use bop_anp::boundary::FieldBoundaries;
use bop_anp::dataset::ProductionDataset;
use bop_anp::record::{EXPORT_DELIMITER, RAW_DELIMITER};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read a production CSV (plain or `.gz`) into a dataset.
///
/// A bad row rejects the file wholesale; there is no partial load.
pub fn load_production_csv(path: &str) -> anyhow::Result<ProductionDataset> {
    let contents = read_maybe_gzip(path)?;
    let delimiter = sniff_delimiter(&contents);
    let dataset = ProductionDataset::from_csv_delimited(&contents, delimiter)
        .with_context(|| format!("rejecting production data from {path}"))?;
    log::info!(
        "Loaded {} production records from {}",
        dataset.records().len(),
        path
    );
    Ok(dataset)
}

/// Load from a path, or fall back to the embedded sample dataset.
pub fn load_production_or_sample(path: Option<&str>) -> anyhow::Result<ProductionDataset> {
    match path {
        Some(path) => load_production_csv(path),
        None => {
            log::info!("No production CSV given, using the embedded sample");
            Ok(ProductionDataset::sample())
        }
    }
}

/// Load a GeoJSON FeatureCollection of field boundary polygons.
pub fn load_boundaries(path: &str) -> anyhow::Result<FieldBoundaries> {
    let geojson = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read boundaries file {path}"))?;
    let boundaries = FieldBoundaries::parse_geojson(&geojson)
        .with_context(|| format!("failed to parse GeoJSON from {path}"))?;
    Ok(boundaries)
}

fn read_maybe_gzip(path: &str) -> anyhow::Result<String> {
    let mut raw = Vec::new();
    File::open(path)
        .with_context(|| format!("failed to open {path}"))?
        .read_to_end(&mut raw)?;
    if Path::new(path).extension().is_some_and(|ext| ext == "gz") {
        let mut contents = String::new();
        GzDecoder::new(raw.as_slice())
            .read_to_string(&mut contents)
            .with_context(|| format!("failed to decompress {path}"))?;
        Ok(contents)
    } else {
        Ok(String::from_utf8(raw)?)
    }
}

/// The raw ANP download is semicolon-delimited; the normalized export uses
/// commas.
fn sniff_delimiter(contents: &str) -> u8 {
    match contents.lines().next() {
        Some(header) if header.contains(';') => RAW_DELIMITER,
        _ => EXPORT_DELIMITER,
    }
}

#[cfg(test)]
mod tests {
    use super::sniff_delimiter;
    use bop_anp::record::{EXPORT_DELIMITER, RAW_DELIMITER};

    #[test]
    fn test_sniff_delimiter() {
        assert_eq!(
            sniff_delimiter("Basin;Field;Well;Year;Oil (m³)\n"),
            RAW_DELIMITER
        );
        assert_eq!(
            sniff_delimiter("Basin,Field,Well,Year,Oil (m³)\n"),
            EXPORT_DELIMITER
        );
        assert_eq!(sniff_delimiter(""), EXPORT_DELIMITER);
    }
}
