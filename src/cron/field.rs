//! Numeric set parser for a single cron field
//!
//! Turns the raw syntax of one field into the list of integers it selects:
//!
//! ```text
//! 5        -> [5]
//! 1-4      -> [1, 2, 3, 4]
//! 0-10/5   -> [0, 5, 10]
//! */20     -> [0, 20, 40]      (with wildcard "0-59")
//! 5,1,3    -> [5, 1, 3]        (order kept, nothing sorted or deduplicated)
//! ```
//!
//! Bounds are not checked here; see [`super::validate`].

use super::types::{CronError, Result};

/// Upper limit on the number of values a single range expands to.
///
/// No field domain is wider than 60 values, so anything longer is rejected
/// by the bound check regardless of where it is cut.
const RANGE_EXPANSION_LIMIT: usize = 1024;

/// Parse one field into its sequence of values.
///
/// `wildcard` is the `first-last` range a `*` stands for in this field; it
/// is only consulted for `*/step`.
pub fn parse_field(raw: &str, wildcard: &str) -> Result<Vec<i64>> {
    if raw.ends_with(',') || raw.ends_with('-') {
        return Err(CronError::HangingRangeOrList);
    }

    if raw.contains(',') {
        let mut values = Vec::new();
        for item in raw.split(',') {
            values.extend(parse_field(item, wildcard)?);
        }
        return Ok(values);
    }

    let mut body = raw;
    let mut step = 1;
    if let Some((lhs, rhs)) = raw.rsplit_once('/') {
        if lhs.contains('/') {
            return Err(CronError::BadRangeStep);
        }
        step = match rhs.parse::<i64>() {
            Ok(n) if n > 0 => n,
            _ => return Err(CronError::BadRangeStep),
        };

        if lhs == "*" {
            return parse_field(&format!("{wildcard}/{rhs}"), wildcard);
        }
        body = lhs;
    }

    if let Some((start, stop)) = body.split_once('-') {
        let start = range_bound(start, wildcard)?;
        let stop = range_bound(stop, wildcard)?;
        if start > stop {
            return Err(CronError::BadRange);
        }
        return Ok((start..=stop)
            .step_by(usize::try_from(step).unwrap_or(usize::MAX))
            .take(RANGE_EXPANSION_LIMIT)
            .collect());
    }

    Ok(vec![body.parse::<i64>()?])
}

/// One side of `a-b`; a second hyphen means `a-b-c`
fn range_bound(part: &str, wildcard: &str) -> Result<i64> {
    if part.contains('-') {
        return Err(CronError::BadRange);
    }
    parse_field(part, wildcard)?
        .first()
        .copied()
        .ok_or(CronError::BadRange)
}
