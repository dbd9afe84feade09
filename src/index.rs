//! Index documents
//!
//! An index is line oriented. Lines that carry page numbers look like
//! `Air Force Weapons Laboratory|208--9, 302`: the entry text, the entry
//! delimiter, then the page series. Everything else (blank lines, "see"
//! cross-references) is passed through unchanged.

use std::path::Path;

use tracing::{debug, warn};

use crate::config::DEFAULT_ENTRY_DELIMITER;
use crate::error::{Error, Result};
use crate::renumber::Renumberer;

/// What to do when a line fails to renumber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop at the first failing line
    #[default]
    Abort,
    /// Keep the failing line as it was and carry on
    KeepGoing,
}

/// Options for renumbering a whole index
#[derive(Debug, Clone)]
pub struct IndexOptions {
    /// Separates entry text from its page series
    pub entry_delimiter: String,
    /// Failure handling
    pub on_error: ErrorPolicy,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            entry_delimiter: DEFAULT_ENTRY_DELIMITER.to_string(),
            on_error: ErrorPolicy::default(),
        }
    }
}

/// Result of renumbering one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// No page series on this line
    Unchanged(String),
    /// Page series renumbered
    Renumbered(String),
}

impl LineOutcome {
    /// The output line
    pub fn as_str(&self) -> &str {
        match self {
            LineOutcome::Unchanged(line) | LineOutcome::Renumbered(line) => line,
        }
    }
}

/// A line that could not be renumbered
#[derive(Debug)]
pub struct LineFailure {
    /// 1-based line number
    pub line_number: usize,
    /// The line as it appeared in the input
    pub line: String,
    /// Why the line could not be renumbered
    pub error: Error,
}

/// Summary of a renumbered index
#[derive(Debug, Default)]
pub struct IndexReport {
    /// The renumbered document
    pub output: String,
    /// Number of lines whose page series was renumbered
    pub renumbered: usize,
    /// Lines left unchanged because they failed (only with `KeepGoing`)
    pub failures: Vec<LineFailure>,
}

/// Renumber the page series of a single index line
pub fn renumber_line(
    renumberer: &Renumberer,
    line: &str,
    entry_delimiter: &str,
) -> Result<LineOutcome> {
    let Some((entry, pages)) = line.split_once(entry_delimiter) else {
        return Ok(LineOutcome::Unchanged(line.to_string()));
    };

    let series = pages.trim();
    if series.is_empty() {
        return Ok(LineOutcome::Unchanged(line.to_string()));
    }

    let leading = &pages[..pages.len() - pages.trim_start().len()];
    let trailing = &pages[pages.trim_end().len()..];
    let renumbered = renumberer.process_series(series)?;

    Ok(LineOutcome::Renumbered(format!(
        "{entry}{entry_delimiter}{leading}{renumbered}{trailing}"
    )))
}

/// Split a line from its "\n" or "\r\n" ending
fn split_line_ending(raw: &str) -> (&str, &str) {
    if let Some(line) = raw.strip_suffix("\r\n") {
        (line, "\r\n")
    } else if let Some(line) = raw.strip_suffix('\n') {
        (line, "\n")
    } else {
        (raw, "")
    }
}

/// Renumber every line of an index document
///
/// Line endings are preserved as they appear in the input.
pub fn renumber_index(
    renumberer: &Renumberer,
    text: &str,
    options: &IndexOptions,
) -> Result<IndexReport> {
    if options.entry_delimiter.is_empty() {
        return Err(Error::InvalidConfig(
            "entry delimiter must not be empty".to_string(),
        ));
    }

    let mut report = IndexReport {
        output: String::with_capacity(text.len()),
        ..IndexReport::default()
    };

    for (idx, raw) in text.split_inclusive('\n').enumerate() {
        let line_number = idx + 1;
        let (line, ending) = split_line_ending(raw);

        match renumber_line(renumberer, line, &options.entry_delimiter) {
            Ok(LineOutcome::Renumbered(new_line)) => {
                debug!(line_number, "renumbered");
                report.output.push_str(&new_line);
                report.renumbered += 1;
            }
            Ok(LineOutcome::Unchanged(_)) => report.output.push_str(line),
            Err(error) => match options.on_error {
                ErrorPolicy::Abort => {
                    return Err(Error::Line {
                        line: line_number,
                        source: Box::new(error),
                    });
                }
                ErrorPolicy::KeepGoing => {
                    warn!(line_number, %error, "line left unchanged");
                    report.output.push_str(line);
                    report.failures.push(LineFailure {
                        line_number,
                        line: line.to_string(),
                        error,
                    });
                }
            },
        }

        report.output.push_str(ending);
    }

    Ok(report)
}

/// Read an index file and renumber it
pub fn renumber_file(
    renumberer: &Renumberer,
    path: &Path,
    options: &IndexOptions,
) -> Result<IndexReport> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let text = std::fs::read_to_string(path)?;
    renumber_index(renumberer, &text, options)
}
