//! Abbreviated range ends
//!
//! Printed indexes shorten the end of a range by leaving out the digits it
//! shares with the start: "239--43" is 239 to 243, "73--9" is 73 to 79.
//! [`expand_range_end`] restores the full end and [`collapse_range_end`]
//! shortens it again once both ends have been renumbered.
//!
//! Both work on digit arrays, most significant digit first.

use crate::error::{Error, Result};

fn digits(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Fill out an abbreviated range end with the leading digits of its start
///
/// An end that is already as long as the start (or longer) comes back as is.
///
/// ```
/// use reranger::digits::expand_range_end;
///
/// assert_eq!(expand_range_end("73", "9"), "79");
/// assert_eq!(expand_range_end("225", "36"), "236");
/// assert_eq!(expand_range_end("64", "85"), "85");
/// assert_eq!(expand_range_end("94", "121"), "121");
/// ```
pub fn expand_range_end(start: &str, end: &str) -> String {
    let mut start_low_first = digits(start);
    start_low_first.reverse();
    let mut end_low_first = digits(end);
    end_low_first.reverse();

    // borrow the start's digit at each missing position
    while end_low_first.len() < start_low_first.len() {
        let borrowed = start_low_first[end_low_first.len()];
        end_low_first.push(borrowed);
    }

    end_low_first.iter().rev().collect()
}

/// Drop the leading digits a range end shares with its start
///
/// Only applies when `start` has more than one digit and at least as many
/// digits as `end`. Two cases stop the collapse early:
///
/// - a shared `1` with two digits left, so 512 to 514 stays "512--14";
/// - a start that continues with `0` where the end does not, so 105 to 124
///   becomes "105--24" rather than "105--4".
///
/// Fails when both ends run out of digits, which means they were equal.
pub fn collapse_range_end(start: &str, end: &str) -> Result<String> {
    let full_start = digits(start);
    let full_end = digits(end);

    if full_start.len() <= 1 || full_start.len() < full_end.len() {
        return Ok(end.to_string());
    }

    let mut rest_start: &[char] = &full_start;
    let mut rest_end: &[char] = &full_end;
    let mut dropped_start = Vec::new();
    let mut dropped_end = Vec::new();

    while rest_start.len() != rest_end.len() {
        dropped_start.push(rest_start[0]);
        rest_start = &rest_start[1..];
    }

    while let (Some(&s), Some(&e)) = (rest_start.first(), rest_end.first()) {
        if s != e {
            break;
        }

        // teens
        if s == '1' && rest_start.len() == 2 {
            break;
        }

        dropped_start.push(s);
        dropped_end.push(e);
        rest_start = &rest_start[1..];
        rest_end = &rest_end[1..];

        if rest_start.first() == Some(&'0') && rest_end.first() != Some(&'0') {
            break;
        }

        if rest_start.is_empty() || rest_end.is_empty() {
            return Err(Error::RangeCollapse {
                start: start.to_string(),
                end: end.to_string(),
                dropped_start,
                dropped_end,
                rest_start: rest_start.to_vec(),
                rest_end: rest_end.to_vec(),
            });
        }
    }

    Ok(rest_end.iter().collect())
}
