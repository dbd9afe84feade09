//! Book index renumbering
//!
//! When whole pages are added to or removed from a manuscript, every page
//! reference in its index past that point has to move. This library
//! provides functionality to:
//! - Renumber a series of page citations ("52, 60, 91--8, 532(r)")
//! - Expand and re-abbreviate printed ranges ("239--43")
//! - Split ranges that straddle the insertion point
//! - Leave roman-numeral prelim pages alone
//! - Apply all of the above to every line of an index document
//!
//! # Example
//!
//! ```
//! use reranger::{RerangeConfig, Renumberer};
//!
//! let config = RerangeConfig::new(", ", "--", 6).with_min_page(68);
//! let renumberer = Renumberer::new(config).expect("valid config");
//!
//! let series = renumberer.process_series("52, 60, 91--8, 472--85").expect("renumbered");
//! assert_eq!(series, "52, 60, 97--104, 478--91");
//! ```

pub mod config;
pub mod digits;
pub mod error;
pub mod index;
pub mod prelim;
pub mod renumber;

// Re-export commonly used items
pub use config::RerangeConfig;
pub use error::{Error, Result};
pub use index::{renumber_file, renumber_index, ErrorPolicy, IndexOptions, IndexReport};
pub use renumber::Renumberer;
