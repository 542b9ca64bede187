//! Shared utility functions for crop survey crates.

/// Date utility functions
pub mod dates {
    use chrono::NaiveDate;

    /// Date format used for display, CLI arguments and CSV export: "YYYY-MM-DD"
    pub const DATE_FORMAT: &str = "%Y-%m-%d";

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format(DATE_FORMAT).to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)?)
    }

}

/// Numeric helpers
pub mod numeric {
    /// Round a value to two decimal places (NDVI precision).
    pub fn round2(value: f64) -> f64 {
        (value * 100.0).round() / 100.0
    }

    /// Arithmetic mean rounded to two decimals. An empty slice yields `0.0`.
    pub fn mean_round2(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        let sum: f64 = values.iter().sum();
        round2(sum / values.len() as f64)
    }

}

/// Error types
pub mod error {
    use std::fmt;

    /// A name that does not match any known crop or survey status.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ParseError {
        pub kind: &'static str,
        pub value: String,
    }

    impl ParseError {
        pub fn new(kind: &'static str, value: &str) -> Self {
            Self {
                kind,
                value: value.to_string(),
            }
        }
    }

    impl fmt::Display for ParseError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Unknown {}: {:?}", self.kind, self.value)
        }
    }

    impl std::error::Error for ParseError {}
}
