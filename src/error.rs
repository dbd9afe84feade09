//! Error types for the reranger library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the reranger library
#[derive(Error, Debug)]
pub enum Error {
    /// Series with an empty member, or a member that failed to renumber
    #[error("bad number series: '{series}'{}", .source.as_ref().map(|e| format!(" ({e})")).unwrap_or_default())]
    MalformedSeries {
        series: String,
        #[source]
        source: Option<Box<Error>>,
    },

    /// Token is not a base-10 integer
    #[error("not a page number: '{0}'")]
    NotNumeric(String),

    /// Range without exactly one delimiter, or with end <= start
    #[error("bad range: '{0}'")]
    MalformedRange(String),

    /// Pages removed from inside a range that spans the pivot
    #[error("cannot decrement range '{range}' by {increment}: page {min_page} lies inside it")]
    PivotInsideShrinkingRange {
        range: String,
        min_page: i64,
        increment: i64,
    },

    /// Range ends that cannot be abbreviated
    #[error(
        "cannot collapse range {start} to {end} (dropped: {dropped_start:?} / {dropped_end:?}, left: {rest_start:?} / {rest_end:?})"
    )]
    RangeCollapse {
        start: String,
        end: String,
        dropped_start: Vec<char>,
        dropped_end: Vec<char>,
        rest_start: Vec<char>,
        rest_end: Vec<char>,
    },

    /// Stepped page does not fit in an i64
    #[error("page {page} overflows when stepped by {increment}")]
    PageOverflow { page: i64, increment: i64 },

    /// Range splitting recursed deeper than a pivot allows
    #[error("range '{0}' keeps splitting around the pivot")]
    SplitDepthExceeded(String),

    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Index line that failed to renumber
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<Error>,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Invalid glob pattern
    #[error("Invalid glob pattern: {0}")]
    InvalidGlob(String),

    /// No files matched pattern
    #[error("No index files found matching pattern: {0}")]
    NoFilesMatched(String),
}

impl Error {
    /// The innermost error, looking through series and line wrappers
    pub fn root(&self) -> &Error {
        match self {
            Error::MalformedSeries {
                source: Some(inner),
                ..
            } => inner.root(),
            Error::Line { source, .. } => source.root(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_unwraps_nested_errors() {
        let err = Error::Line {
            line: 3,
            source: Box::new(Error::MalformedSeries {
                series: "12, x--".to_string(),
                source: Some(Box::new(Error::MalformedRange("x--".to_string()))),
            }),
        };

        assert!(matches!(err.root(), Error::MalformedRange(r) if r == "x--"));
    }

    #[test]
    fn test_series_message_includes_cause() {
        let err = Error::MalformedSeries {
            series: "52, 6a".to_string(),
            source: Some(Box::new(Error::NotNumeric("6a".to_string()))),
        };
        assert_eq!(
            err.to_string(),
            "bad number series: '52, 6a' (not a page number: '6a')"
        );

        let bare = Error::MalformedSeries {
            series: "92,, 106".to_string(),
            source: None,
        };
        assert_eq!(bare.to_string(), "bad number series: '92,, 106'");
    }
}
