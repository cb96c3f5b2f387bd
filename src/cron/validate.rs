//! Field validation: syntax gate, name resolution and domain bounds

use std::sync::OnceLock;

use regex::Regex;

use super::field::parse_field;
use super::types::{CronError, Field, RawFields, Result};

fn field_syntax() -> &'static Regex {
    // The first character is mandatory; separators may only follow it
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^[0-9a-z*/][0-9a-z*/,\-]*$").unwrap())
}

/// Read-only month and weekday name tables.
///
/// Month index 1-12 maps to `jan`..`dec`. Weekday index 0-7 maps to full day
/// names, with both 0 and 7 meaning Sunday.
#[derive(Debug, Clone)]
pub struct NameTables {
    months: [&'static str; 12],
    weekdays: [&'static str; 8],
}

impl Default for NameTables {
    fn default() -> Self {
        Self {
            months: [
                "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
            ],
            weekdays: [
                "sunday",
                "monday",
                "tuesday",
                "wednesday",
                "thursday",
                "friday",
                "saturday",
                "sunday",
            ],
        }
    }
}

impl NameTables {
    /// Capitalized month abbreviation for 1-12 (`Jan`)
    pub fn month(&self, value: i64) -> Option<String> {
        let idx = usize::try_from(value).ok()?.checked_sub(1)?;
        self.months.get(idx).map(|m| capitalize(m))
    }

    /// Capitalized day name for 0-7 (`Sunday`)
    pub fn weekday(&self, value: i64) -> Option<String> {
        let idx = usize::try_from(value).ok()?;
        self.weekdays.get(idx).map(|d| capitalize(d))
    }

    /// 1-based table index for a single name, case-sensitive.
    ///
    /// Months match the full three letter abbreviation; weekdays match the
    /// first three letters of the day name, so `sun` is 1 and `sat` is 7.
    fn lookup(&self, field: Field, token: &str) -> Option<i64> {
        let idx = match field {
            Field::Month => self.months.iter().position(|m| *m == token)?,
            Field::DayOfWeek => self.weekdays.iter().position(|d| &d[..3] == token)?,
            _ => return None,
        };
        i64::try_from(idx + 1).ok()
    }

    /// Replace every name item in `raw` with its numeric value.
    ///
    /// Items are the pieces between `,`, `-` and `/`. Each must be all
    /// digits or a known name; anything mixed (`1jan`) is rejected. Returns
    /// `None` on a rejected item or when there was nothing to replace.
    pub fn resolve(&self, field: Field, raw: &str) -> Option<String> {
        let is_separator = |c: char| matches!(c, ',' | '-' | '/');

        let mut out = String::with_capacity(raw.len());
        let mut replaced = false;

        for piece in raw.split_inclusive(is_separator) {
            let item = piece.trim_end_matches(is_separator);
            if item.chars().all(|c| c.is_ascii_digit()) {
                out.push_str(item);
            } else if item.chars().all(|c| c.is_ascii_alphabetic()) {
                out.push_str(&self.lookup(field, item)?.to_string());
                replaced = true;
            } else {
                return None;
            }
            out.push_str(&piece[item.len()..]);
        }

        replaced.then_some(out)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Coarse character check on every field, then reject letters in the
/// fields that never take names.
pub fn check_syntax(raw: &RawFields) -> Result<()> {
    if !raw.iter().all(|(_, text)| field_syntax().is_match(text)) {
        return Err(CronError::Unparsable);
    }

    for (field, text) in raw.iter() {
        if !field.allows_names() && text.chars().any(|c| c.is_ascii_alphabetic()) {
            return Err(CronError::Unparsable);
        }
    }

    Ok(())
}

/// A bare `*` becomes the field's full range so it parses like `first-last`
pub fn expand_wildcard(field: Field, raw: &str) -> &str {
    if raw == "*" {
        field.wildcard()
    } else {
        raw
    }
}

/// Parse a (wildcard expanded) field, falling back to name resolution for
/// month and day of week when the text is not numeric.
pub fn parse_values(field: Field, text: &str, names: &NameTables) -> Result<Vec<i64>> {
    match parse_field(text, field.wildcard()) {
        Err(CronError::InvalidNumber(_)) if field.allows_names() => {
            let resolved = names.resolve(field, text).ok_or(CronError::Unparsable)?;
            tracing::trace!(%field, from = text, to = %resolved, "resolved names");
            parse_field(&resolved, field.wildcard())
        }
        other => other,
    }
}

/// Every value must lie inside the field's domain
pub fn check_bounds(field: Field, values: &[i64]) -> Result<()> {
    match values.iter().find(|v| !field.contains(**v)) {
        Some(v) => {
            tracing::debug!(%field, value = v, "value out of bounds");
            Err(field.bound_error())
        }
        None => Ok(()),
    }
}
