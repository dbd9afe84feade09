//! Page series renumbering
//!
//! A [`Renumberer`] takes the page part of an index entry, eg.
//! `"52, 60, 91--8, 532(r)"`, and shifts every page above the pivot by the
//! configured increment while keeping abbreviated ranges, reference
//! suffixes and prelim pages in their original notation.

mod range;

use tracing::debug;

use crate::config::RerangeConfig;
use crate::error::{Error, Result};
use crate::prelim::is_prelim;

/// Renumbers page series against a fixed configuration
///
/// # Example
///
/// ```
/// use reranger::{RerangeConfig, Renumberer};
///
/// let config = RerangeConfig::new(", ", "--", -2)
///     .with_min_page(1)
///     .with_reference_suffix("(r)");
/// let renumberer = Renumberer::new(config).unwrap();
///
/// assert_eq!(
///     renumberer.process_series("532(r), 544--6(r)").unwrap(),
///     "530(r), 542--4(r)"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Renumberer {
    config: RerangeConfig,
}

/// Parse an optionally signed base-10 page number
fn parse_page(token: &str) -> Option<i64> {
    token.parse().ok()
}

impl Renumberer {
    /// Create a renumberer, validating the configuration
    pub fn new(config: RerangeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration in use
    pub fn config(&self) -> &RerangeConfig {
        &self.config
    }

    /// Renumber a delimited series of pages and ranges
    ///
    /// Members keep their order. Any failure is reported as
    /// [`Error::MalformedSeries`] carrying the whole series, with the
    /// underlying error as its source when there is one.
    pub fn process_series(&self, series: &str) -> Result<String> {
        let delimiter = self.config.series_delimiter.as_str();
        // a doubled ", " leaves a stray "," on one side of a member
        let remnant = delimiter.trim();

        let mut out = Vec::new();
        for chunk in series.split(delimiter) {
            let chunk = chunk.trim();

            let doubled = !remnant.is_empty()
                && (chunk.starts_with(remnant) || chunk.ends_with(remnant));
            if chunk.is_empty() || doubled {
                return Err(Error::MalformedSeries {
                    series: series.to_string(),
                    source: None,
                });
            }

            let renumbered = self
                .process_token(chunk)
                .map_err(|e| Error::MalformedSeries {
                    series: series.to_string(),
                    source: Some(Box::new(e)),
                })?;
            out.push(renumbered);
        }

        Ok(out.join(delimiter))
    }

    /// Renumber one series member, keeping its reference suffix
    fn process_token(&self, token: &str) -> Result<String> {
        let suffix = self.config.reference_suffix.as_str();
        let (body, suffix) = match token.strip_suffix(suffix) {
            Some(body) if !suffix.is_empty() => (body, suffix),
            _ => (token, ""),
        };

        let renumbered = if body.contains(self.config.range_delimiter.as_str()) {
            self.process_range(body)?
        } else {
            self.process_single(body)?
        };

        if suffix.is_empty() {
            return Ok(renumbered);
        }

        // a split range comes back as several members; each one is a note page
        let delimiter = self.config.series_delimiter.as_str();
        Ok(renumbered
            .split(delimiter)
            .map(|member| format!("{member}{suffix}"))
            .collect::<Vec<_>>()
            .join(delimiter))
    }

    /// Step a lone page, passing non-numeric literals through
    fn process_single(&self, token: &str) -> Result<String> {
        if let Some(page) = parse_page(token) {
            return Ok(self.step_page(page)?.to_string());
        }

        if is_prelim(token) {
            debug!(token, "prelim page left as is");
            Ok(token.to_string())
        } else if self.config.strict_literals {
            Err(Error::NotNumeric(token.to_string()))
        } else {
            debug!(token, "non-numeric token left as is");
            Ok(token.to_string())
        }
    }

    /// Step a single page number
    ///
    /// Pages above the pivot are shifted by the increment; the rest are
    /// returned unchanged. The result is canonical decimal.
    pub fn step(&self, token: &str) -> Result<String> {
        let page = parse_page(token).ok_or_else(|| Error::NotNumeric(token.to_string()))?;
        Ok(self.step_page(page)?.to_string())
    }

    fn step_page(&self, page: i64) -> Result<i64> {
        if page <= self.config.min_page {
            return Ok(page);
        }

        page.checked_add(self.config.increment)
            .ok_or(Error::PageOverflow {
                page,
                increment: self.config.increment,
            })
    }
}
