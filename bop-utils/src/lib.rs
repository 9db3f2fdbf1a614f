//! Shared utility functions for BOP crates.

/// Volume display formatting
pub mod volume {
    /// Unit suffix for oil volumes.
    pub const UNIT_SUFFIX: &str = "m³";

    /// Format a volume rounded to whole m³ with `.`-grouped thousands and
    /// the unit suffix, the Brazilian convention: 1234567.0 -> "1.234.567 m³".
    pub fn format_volume(value: f64) -> String {
        format!("{} {}", group_digits(value.round() as i64), UNIT_SUFFIX)
    }

    /// Format the top-field card shape: "TUPI: 1.234.567 m³".
    pub fn format_field_volume(field: &str, value: f64) -> String {
        format!("{}: {}", field, format_volume(value))
    }

    fn group_digits(value: i64) -> String {
        let digits = value.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }
        if value < 0 {
            format!("-{grouped}")
        } else {
            grouped
        }
    }

    #[cfg(test)]
    mod tests {
        use super::{format_field_volume, format_volume};

        #[test]
        fn test_format_volume_grouping() {
            assert_eq!(format_volume(1234567.0), "1.234.567 m³");
            assert_eq!(format_volume(48123456.7), "48.123.457 m³");
        }

        #[test]
        fn test_format_volume_small_values() {
            // no spurious separators below 1000
            assert_eq!(format_volume(0.0), "0 m³");
            assert_eq!(format_volume(999.4), "999 m³");
            assert_eq!(format_volume(1000.0), "1.000 m³");
        }

        #[test]
        fn test_format_volume_rounds() {
            assert_eq!(format_volume(1499.5), "1.500 m³");
            assert_eq!(format_volume(1499.4), "1.499 m³");
        }

        #[test]
        fn test_format_field_volume() {
            assert_eq!(
                format_field_volume("TUPI", 9865330.6),
                "TUPI: 9.865.331 m³"
            );
        }
    }
}

/// Report year helpers
pub mod years {
    use chrono::{Datelike, Local};

    /// Earliest year with systematic ANP production reports.
    pub const FIRST_REPORT_YEAR: i32 = 1941;

    /// The latest year a report can cover (the current calendar year).
    pub fn max_report_year() -> i32 {
        Local::now().year()
    }

    /// Parse and validate a report year argument.
    pub fn parse_report_year(s: &str) -> anyhow::Result<i32> {
        let year: i32 = s.trim().parse()?;
        if year < FIRST_REPORT_YEAR || year > max_report_year() {
            anyhow::bail!(
                "year {} outside {}..={}",
                year,
                FIRST_REPORT_YEAR,
                max_report_year()
            );
        }
        Ok(year)
    }

}
