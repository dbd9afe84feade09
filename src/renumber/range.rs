//! Abbreviated range renumbering

use tracing::debug;

use super::{parse_page, Renumberer};
use crate::digits::{collapse_range_end, expand_range_end};
use crate::error::{Error, Result};
use crate::prelim::is_prelim;

/// A range can split once around the pivot; its halves never split again.
const MAX_SPLIT_DEPTH: usize = 2;

impl Renumberer {
    /// Renumber a range such as "91--8" or "239--43"
    ///
    /// Both ends are stepped and the end is abbreviated again against the
    /// new start. When the pivot falls inside the range it is split in two
    /// and a series fragment is returned instead, eg. "49--50, 57--60".
    ///
    /// A range starting with a non-numeric (roman) page is left alone,
    /// except that an arabic end above the pivot is still stepped.
    pub fn process_range(&self, range: &str) -> Result<String> {
        self.process_range_at(range, 0)
    }

    fn process_range_at(&self, range: &str, depth: usize) -> Result<String> {
        let delimiter = self.config.range_delimiter.as_str();
        let mut parts = range.split(delimiter);
        let (Some(start), Some(end), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(Error::MalformedRange(range.to_string()));
        };

        let Some(first) = parse_page(start) else {
            return self.process_prelim_range(start, end);
        };

        let full_end = expand_range_end(start, end);
        let last = parse_page(&full_end).ok_or_else(|| Error::NotNumeric(full_end.clone()))?;

        if last <= first {
            return Err(Error::MalformedRange(format!("{start}{delimiter}{full_end}")));
        }

        let min_page = self.config.min_page;
        if (first..last).contains(&min_page) {
            if self.config.increment < 0 {
                return Err(Error::PivotInsideShrinkingRange {
                    range: range.to_string(),
                    min_page,
                    increment: self.config.increment,
                });
            }
            debug!(range, min_page, "splitting range at pivot");
            return self.split_range_at(first, last, depth);
        }

        let stepped_start = self.step_page(first)?.to_string();
        let stepped_end = self.step_page(last)?.to_string();
        let collapsed = collapse_range_end(&stepped_start, &stepped_end)?;

        Ok(format!("{stepped_start}{delimiter}{collapsed}"))
    }

    /// Range with a non-numeric start, eg. "xi--xv" or "xv--3"
    fn process_prelim_range(&self, start: &str, end: &str) -> Result<String> {
        let delimiter = self.config.range_delimiter.as_str();

        if !is_prelim(start) {
            if self.config.strict_literals {
                return Err(Error::NotNumeric(start.to_string()));
            }
            debug!(start, "range start is neither arabic nor a prelim");
        }

        match parse_page(end) {
            Some(last) if last > self.config.min_page => {
                let stepped = self.step_page(last)?;
                Ok(format!("{start}{delimiter}{stepped}"))
            }
            _ => Ok(format!("{start}{delimiter}{end}")),
        }
    }

    /// Split a full range around the pivot
    ///
    /// The pivot must lie in `[start, end)`. The part up to the pivot keeps
    /// its numbers; the part after it is shifted. The two halves are joined
    /// with the series delimiter.
    pub fn split_range(&self, start: &str, end: &str) -> Result<String> {
        let first = parse_page(start).ok_or_else(|| Error::NotNumeric(start.to_string()))?;
        let last = parse_page(end).ok_or_else(|| Error::NotNumeric(end.to_string()))?;

        let min_page = self.config.min_page;
        if !(first..last).contains(&min_page) {
            return Err(Error::MalformedRange(format!(
                "{start}{}{end}",
                self.config.range_delimiter
            )));
        }

        self.split_range_at(first, last, 0)
    }

    fn split_range_at(&self, first: i64, last: i64, depth: usize) -> Result<String> {
        let delimiter = self.config.range_delimiter.as_str();
        let min_page = self.config.min_page;

        if depth >= MAX_SPLIT_DEPTH {
            return Err(Error::SplitDepthExceeded(format!("{first}{delimiter}{last}")));
        }

        let lower = if first == min_page {
            first.to_string()
        } else {
            self.process_range_at(&format!("{first}{delimiter}{min_page}"), depth + 1)?
        };

        let out_of_range = || Error::MalformedRange(format!("{first}{delimiter}{last}"));
        let above_pivot = last.checked_sub(min_page).ok_or_else(out_of_range)?;

        let upper = if above_pivot == 1 {
            self.step_page(last)?.to_string()
        } else {
            let next = min_page.checked_add(1).ok_or_else(out_of_range)?;
            self.process_range_at(&format!("{next}{delimiter}{last}"), depth + 1)?
        };

        Ok(format!("{lower}{}{upper}", self.config.series_delimiter))
    }
}

#[cfg(test)]
mod tests {
    use crate::config::RerangeConfig;
    use crate::error::Error;
    use crate::renumber::Renumberer;

    fn renumberer(increment: i64, min_page: i64) -> Renumberer {
        Renumberer::new(RerangeConfig::new(", ", "--", increment).with_min_page(min_page)).unwrap()
    }

    #[test]
    fn test_range_decrement() {
        let r = renumberer(-2, 1);
        assert_eq!(r.process_range("91--8").unwrap(), "89--96");
        assert_eq!(r.process_range("472--85").unwrap(), "470--83");
        assert_eq!(r.process_range("544--6").unwrap(), "542--4");
    }

    #[test]
    fn test_range_increment_crosses_hundred() {
        let r = renumberer(6, 68);
        assert_eq!(r.process_range("91--8").unwrap(), "97--104");
        assert_eq!(r.process_range("472--85").unwrap(), "478--91");
        assert_eq!(r.process_range("544--6").unwrap(), "550--2");
    }

    #[test]
    fn test_range_below_pivot_untouched() {
        let r = renumberer(6, 100);
        assert_eq!(r.process_range("53--78").unwrap(), "53--78");
        assert_eq!(r.process_range("45--9").unwrap(), "45--9");
    }

    #[test]
    fn test_range_keeps_span() {
        let r = renumberer(13, 10);
        for (range, expected) in [("230--41", "243--54"), ("12--14", "25--7"), ("325--7", "338--40")] {
            assert_eq!(r.process_range(range).unwrap(), expected, "{range}");
        }
    }

    #[test]
    fn test_range_teens_kept() {
        let r = renumberer(100, 0);
        assert_eq!(r.process_range("412--14").unwrap(), "512--14");
    }

    #[test]
    fn test_range_wrong_delimiter_count() {
        let r = renumberer(6, 0);
        for range in ["12", "12--14--16", "----"] {
            assert!(
                matches!(r.process_range(range), Err(Error::MalformedRange(_))),
                "{range}"
            );
        }
    }

    #[test]
    fn test_range_end_not_after_start() {
        let r = renumberer(6, 0);
        assert!(matches!(r.process_range("45--3"), Err(Error::MalformedRange(ref m)) if m == "45--43"));
        assert!(matches!(r.process_range("45--5"), Err(Error::MalformedRange(_))));
    }

    #[test]
    fn test_range_end_not_numeric() {
        let r = renumberer(6, 0);
        assert!(matches!(r.process_range("12--x"), Err(Error::NotNumeric(ref t)) if t == "1x"));
    }

    #[test]
    fn test_prelim_ranges() {
        let r = renumberer(6, 1);
        assert_eq!(r.process_range("xi--xv").unwrap(), "xi--xv");
        assert_eq!(r.process_range("xv--3").unwrap(), "xv--9");

        let r = renumberer(6, 10);
        assert_eq!(r.process_range("xv--3").unwrap(), "xv--3");
    }

    #[test]
    fn test_split_at_pivot() {
        let r = renumberer(6, 50);
        assert_eq!(r.process_range("49--54").unwrap(), "49--50, 57--60");
        assert_eq!(r.process_range("50--4").unwrap(), "50, 57--60");
        assert_eq!(r.process_range("45--51").unwrap(), "45--50, 57");
        assert_eq!(r.process_range("50--1").unwrap(), "50, 57");
    }

    #[test]
    fn test_split_covers_interval() {
        let r = renumberer(6, 120);
        // 115..=120 stays, 121..=130 moves to 127..=136
        assert_eq!(r.process_range("115--30").unwrap(), "115--20, 127--36");
    }

    #[test]
    fn test_split_refused_when_decrementing() {
        let r = renumberer(-2, 50);
        match r.process_range("49--54") {
            Err(Error::PivotInsideShrinkingRange { range, min_page, increment }) => {
                assert_eq!(range, "49--54");
                assert_eq!(min_page, 50);
                assert_eq!(increment, -2);
            }
            other => panic!("expected PivotInsideShrinkingRange, got {other:?}"),
        }
    }

    #[test]
    fn test_split_range_direct() {
        let r = renumberer(6, 50);
        assert_eq!(r.split_range("49", "54").unwrap(), "49--50, 57--60");
        assert!(matches!(r.split_range("51", "54"), Err(Error::MalformedRange(_))));
        assert!(matches!(r.split_range("40", "50"), Err(Error::MalformedRange(_))));
        assert!(matches!(r.split_range("x", "54"), Err(Error::NotNumeric(_))));
    }

    #[test]
    fn test_split_with_negative_pivot() {
        let r = renumberer(6, -10);
        let err = r.process_series("-20--9223372036854775807").unwrap_err();
        assert!(
            matches!(err.root(), Error::MalformedRange(m) if m == "-20--9223372036854775807"),
            "got {err:?}"
        );
    }

    #[test]
    fn test_strict_prelim_ranges() {
        let config = RerangeConfig::new(", ", "--", 6)
            .with_min_page(1)
            .with_strict_literals(true);
        let r = Renumberer::new(config).unwrap();

        assert_eq!(r.process_range("xv--3").unwrap(), "xv--9");
        assert!(matches!(r.process_range("5l2--9"), Err(Error::NotNumeric(ref t)) if t == "5l2"));

        let err = r.process_series("5l2--9").unwrap_err();
        assert!(matches!(err.root(), Error::NotNumeric(t) if t == "5l2"));
    }

    #[test]
    fn test_split_depth_guard() {
        let r = renumberer(6, 50);
        assert!(matches!(r.split_range_at(49, 54, 2), Err(Error::SplitDepthExceeded(_))));
    }
}
