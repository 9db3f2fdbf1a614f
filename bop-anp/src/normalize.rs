//! Field-name normalization for production records.
//!
//! ANP reports carry legacy identifiers for some fields: rows recorded under
//! an old name and rows recorded under the current one refer to the same
//! physical field. Aggregating without collapsing them would split one
//! field's production across two keys, so the alias pass runs before any
//! grouping. Collapsing is idempotent.

use crate::record::ProductionRecord;

/// Known alias pairs: legacy name to canonical name.
///
/// ANC_LULA and LULA are historical names of the field renamed TUPI.
pub const FIELD_ALIASES: &[(&str, &str)] = &[("ANC_LULA", "TUPI"), ("LULA", "TUPI")];

/// Resolve a field name to its canonical form.
pub fn canonical_field_name(field: &str) -> &str {
    for (alias, canonical) in FIELD_ALIASES {
        if field == *alias {
            return canonical;
        }
    }
    field
}

/// Trait for collapsing known field aliases across a record collection.
pub trait CollapseFieldAliases {
    fn collapse_field_aliases(&mut self);
}

impl CollapseFieldAliases for Vec<ProductionRecord> {
    fn collapse_field_aliases(&mut self) {
        let mut collapsed = 0usize;
        for record in self.iter_mut() {
            let canonical = canonical_field_name(&record.field);
            if canonical != record.field {
                record.field = canonical.to_string();
                collapsed += 1;
            }
        }
        if collapsed > 0 {
            log::info!("normalize: collapsed {collapsed} aliased field rows");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{canonical_field_name, CollapseFieldAliases};
    use crate::record::ProductionRecord;

    fn record(field: &str) -> ProductionRecord {
        ProductionRecord {
            basin: "Santos".to_string(),
            field: field.to_string(),
            well: "7-LL-11-RJS".to_string(),
            year: 2018,
            volume: 100.0,
        }
    }

    #[test]
    fn test_canonical_field_name() {
        assert_eq!(canonical_field_name("LULA"), "TUPI");
        assert_eq!(canonical_field_name("ANC_LULA"), "TUPI");
        assert_eq!(canonical_field_name("TUPI"), "TUPI");
        assert_eq!(canonical_field_name("BUZIOS"), "BUZIOS");
    }

    #[test]
    fn test_collapse_field_aliases() {
        let mut records = vec![record("LULA"), record("ANC_LULA"), record("BUZIOS")];
        records.collapse_field_aliases();
        assert_eq!(records[0].field, "TUPI");
        assert_eq!(records[1].field, "TUPI");
        assert_eq!(records[2].field, "BUZIOS");
    }

    #[test]
    fn test_collapse_is_idempotent() {
        let mut once = vec![record("LULA"), record("TUPI"), record("SAPINHOA")];
        once.collapse_field_aliases();
        let mut twice = once.clone();
        twice.collapse_field_aliases();
        assert_eq!(once, twice);
    }
}
