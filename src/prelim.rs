//! Front-matter (prelim) page detection
//!
//! Prelim pages are numbered in lowercase roman numerals and are not
//! renumbered.

use regex::Regex;
use std::sync::LazyLock;

/// Lowercase roman numerals from i to xxxix.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PRELIM_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^x{0,3}(ix|iv|v?i{0,3})$").expect("valid regex"));

/// Whether a token is a lowercase roman prelim page, eg. "xiv"
///
/// Uppercase numerals and anything outside i, v, x are not prelims.
///
/// ```
/// use reranger::prelim::is_prelim;
///
/// assert!(is_prelim("xiv"));
/// assert!(!is_prelim("XIV"));
/// assert!(!is_prelim("12"));
/// ```
pub fn is_prelim(token: &str) -> bool {
    !token.is_empty() && PRELIM_PATTERN.is_match(token)
}
