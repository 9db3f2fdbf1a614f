use crate::normalize::CollapseFieldAliases;
use crate::record::{ProductionRecord, RecordError};
use crate::selector::BasinFilter;

/// Embedded sample of ANP production data for the Campos and Santos basins.
pub static CSV_SAMPLE: &str = include_str!("../fixtures/sample-production.csv");

/// Immutable store of normalized production records.
///
/// Built once at startup; every aggregation pass reads it through
/// [`filter_by_basin`](ProductionDataset::filter_by_basin). There are no
/// mutation operations after construction.
#[derive(Debug, Clone)]
pub struct ProductionDataset {
    records: Vec<ProductionRecord>,
    basins: Vec<String>,
}

impl ProductionDataset {
    /// Build a dataset from a normalized (comma-delimited) production CSV.
    pub fn from_csv(csv_object: &str) -> Result<Self, RecordError> {
        let records = ProductionRecord::parse_production_csv(csv_object)?;
        Ok(Self::from_records(records))
    }

    /// Build a dataset from a production CSV with an explicit delimiter.
    pub fn from_csv_delimited(csv_object: &str, delimiter: u8) -> Result<Self, RecordError> {
        let records = ProductionRecord::parse_production_csv_delimited(csv_object, delimiter)?;
        Ok(Self::from_records(records))
    }

    /// Build a dataset from already-parsed records, collapsing field aliases.
    pub fn from_records(mut records: Vec<ProductionRecord>) -> Self {
        records.collapse_field_aliases();
        let mut basins: Vec<String> = Vec::new();
        for record in &records {
            if !basins.iter().any(|basin| basin == &record.basin) {
                basins.push(record.basin.clone());
            }
        }
        log::info!(
            "dataset: {} records across {} basins",
            records.len(),
            basins.len()
        );
        Self { records, basins }
    }

    /// Get the embedded sample dataset.
    pub fn sample() -> Self {
        if let Ok(dataset) = Self::from_csv(CSV_SAMPLE) {
            dataset
        } else {
            panic!("failed to parse embedded sample csv")
        }
    }

    /// All records, in input order.
    pub fn records(&self) -> &[ProductionRecord] {
        &self.records
    }

    /// Distinct basin names, in order of first appearance.
    pub fn basins(&self) -> &[String] {
        &self.basins
    }

    /// Records matching the basin filter. `All` is the full set.
    pub fn filter_by_basin(&self, filter: &BasinFilter) -> Vec<&ProductionRecord> {
        match filter {
            BasinFilter::All => self.records.iter().collect(),
            BasinFilter::Basin(name) => self
                .records
                .iter()
                .filter(|record| &record.basin == name)
                .collect(),
        }
    }

    /// Distinct canonical field names under the filter, first-appearance order.
    pub fn fields(&self, filter: &BasinFilter) -> Vec<String> {
        let mut fields: Vec<String> = Vec::new();
        for record in self.filter_by_basin(filter) {
            if !fields.iter().any(|field| field == &record.field) {
                fields.push(record.field.clone());
            }
        }
        fields
    }
}
