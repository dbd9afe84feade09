//! Renumbering configuration
//!
//! A [`RerangeConfig`] is built once, validated, and then shared read-only by
//! every renumbering call.

use crate::error::{Error, Result};

/// Default separator between members of a page series
pub const DEFAULT_SERIES_DELIMITER: &str = ", ";

/// Default separator between the two ends of a range
pub const DEFAULT_RANGE_DELIMITER: &str = "--";

/// Default separator between entry text and its page series
pub const DEFAULT_ENTRY_DELIMITER: &str = "|";

/// Settings shared by all renumbering operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RerangeConfig {
    /// Separates tokens in a series, eg. ", "
    pub series_delimiter: String,
    /// Separates the two parts of a range, eg. "--" or ".."
    pub range_delimiter: String,
    /// Pages to add (negative to remove)
    pub increment: i64,
    /// Pages at or below this number are never shifted
    pub min_page: i64,
    /// Marker for notes/reference pages, eg. "(r)"
    pub reference_suffix: String,
    /// Reject non-numeric tokens that are not roman prelims
    pub strict_literals: bool,
}

impl RerangeConfig {
    /// Create a configuration with a pivot of 0 and no reference suffix
    pub fn new(
        series_delimiter: impl Into<String>,
        range_delimiter: impl Into<String>,
        increment: i64,
    ) -> Self {
        Self {
            series_delimiter: series_delimiter.into(),
            range_delimiter: range_delimiter.into(),
            increment,
            min_page: 0,
            reference_suffix: String::new(),
            strict_literals: false,
        }
    }

    /// Set the pivot page
    pub fn with_min_page(mut self, min_page: i64) -> Self {
        self.min_page = min_page;
        self
    }

    /// Set the notes/reference marker
    pub fn with_reference_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.reference_suffix = suffix.into();
        self
    }

    /// Reject non-numeric literals other than roman prelims
    pub fn with_strict_literals(mut self, strict: bool) -> Self {
        self.strict_literals = strict;
        self
    }

    /// Check that both delimiters are usable for splitting
    ///
    /// Overlap between the two delimiters is not checked.
    pub fn validate(&self) -> Result<()> {
        if self.series_delimiter.is_empty() {
            return Err(Error::InvalidConfig(
                "series delimiter must not be empty".to_string(),
            ));
        }
        if self.range_delimiter.is_empty() {
            return Err(Error::InvalidConfig(
                "range delimiter must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for RerangeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SERIES_DELIMITER, DEFAULT_RANGE_DELIMITER, 0)
    }
}
