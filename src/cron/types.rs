//! Core types for the cron subsystem

use serde::Serialize;
use std::num::ParseIntError;
use thiserror::Error;

/// Result type alias for cron operations
pub type Result<T> = std::result::Result<T, CronError>;

/// Cron parsing and rendering errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CronError {
    /// Structural failure: wrong field count, disallowed characters,
    /// letters in a numeric-only field or an unknown name
    #[error("Could not parse input")]
    Unparsable,

    /// A field ends in `,` or `-`
    #[error("Ranges and/or lists are hanging, meaning a comma or a hyphen isn't followed by a number: ie: N- or N,")]
    HangingRangeOrList,

    /// A range with more than a start and an end
    #[error("Ranges can only contain 2 numbers, a start and an end. One of the ranges received was incorrectly formatted")]
    BadRange,

    /// Missing, zero, non-numeric or duplicated `/step`
    #[error("Bad step provided for range syntax. The step could not be parsed, was not greater than zero, or more than one '/' was found")]
    BadRangeStep,

    #[error("Bad minute field. The value received is not a number between 0-59")]
    BadMinuteField,

    #[error("Bad hour field. The value received is not a number between 0-23")]
    BadHourField,

    #[error("Bad day of month field. The value received is not a number between 1-31")]
    BadDomField,

    #[error("Bad month field. The value received is not a number between 1-12")]
    BadMonthField,

    #[error("Bad day of week field. The value received is not a number between 0-7")]
    BadDowField,

    /// A field fragment that should have been a plain integer
    #[error("Invalid number: {0}")]
    InvalidNumber(#[from] ParseIntError),

    /// Human text back into a cron expression
    #[error("Not yet implemented")]
    NotYetImplemented,
}

/// One of the five space separated fields of a cron expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl Field {
    /// Fields in expression order
    pub const ALL: [Field; 5] = [
        Field::Minute,
        Field::Hour,
        Field::DayOfMonth,
        Field::Month,
        Field::DayOfWeek,
    ];

    /// Inclusive bounds of the field's domain
    pub fn bounds(self) -> (i64, i64) {
        match self {
            Field::Minute => (0, 59),
            Field::Hour => (0, 23),
            Field::DayOfMonth => (1, 31),
            Field::Month => (1, 12),
            Field::DayOfWeek => (0, 7),
        }
    }

    /// The range a bare `*` stands for
    pub fn wildcard(self) -> &'static str {
        match self {
            Field::Minute => "0-59",
            Field::Hour => "0-23",
            Field::DayOfMonth => "1-31",
            Field::Month => "1-12",
            Field::DayOfWeek => "0-7",
        }
    }

    /// Number of distinct values in the domain.
    ///
    /// Day of week counts both 0 and 7 as Sunday, so its width is 8.
    pub fn domain_size(self) -> usize {
        let (lo, hi) = self.bounds();
        (hi - lo + 1) as usize
    }

    /// Whether the field accepts month or weekday names
    pub fn allows_names(self) -> bool {
        matches!(self, Field::Month | Field::DayOfWeek)
    }

    /// The error reported when a value falls outside the domain
    pub fn bound_error(self) -> CronError {
        match self {
            Field::Minute => CronError::BadMinuteField,
            Field::Hour => CronError::BadHourField,
            Field::DayOfMonth => CronError::BadDomField,
            Field::Month => CronError::BadMonthField,
            Field::DayOfWeek => CronError::BadDowField,
        }
    }

    pub fn contains(self, value: i64) -> bool {
        let (lo, hi) = self.bounds();
        (lo..=hi).contains(&value)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Minute => write!(f, "minute"),
            Field::Hour => write!(f, "hour"),
            Field::DayOfMonth => write!(f, "day of month"),
            Field::Month => write!(f, "month"),
            Field::DayOfWeek => write!(f, "day of week"),
        }
    }
}

/// The five raw field strings exactly as written in the expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawFields {
    pub minute: String,
    pub hour: String,
    pub day_of_month: String,
    pub month: String,
    pub day_of_week: String,
}

impl RawFields {
    /// Split an expression on single spaces; exactly five fields are required
    pub fn split(input: &str) -> Result<Self> {
        let parts: Vec<&str> = input.split(' ').collect();
        match parts.as_slice() {
            [minute, hour, dom, month, dow] => Ok(Self {
                minute: minute.to_string(),
                hour: hour.to_string(),
                day_of_month: dom.to_string(),
                month: month.to_string(),
                day_of_week: dow.to_string(),
            }),
            _ => Err(CronError::Unparsable),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Minute => &self.minute,
            Field::Hour => &self.hour,
            Field::DayOfMonth => &self.day_of_month,
            Field::Month => &self.month,
            Field::DayOfWeek => &self.day_of_week,
        }
    }

    /// Iterate `(field, raw)` pairs in expression order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}

/// Validated numeric occurrences for every field.
///
/// Lists keep the order they were written in; ranges are ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedSchedule {
    pub minutes: Vec<i64>,
    pub hours: Vec<i64>,
    pub days_of_month: Vec<i64>,
    pub months: Vec<i64>,
    pub days_of_week: Vec<i64>,
}

impl ParsedSchedule {
    pub fn get(&self, field: Field) -> &[i64] {
        match field {
            Field::Minute => &self.minutes,
            Field::Hour => &self.hours,
            Field::DayOfMonth => &self.days_of_month,
            Field::Month => &self.months,
            Field::DayOfWeek => &self.days_of_week,
        }
    }
}

/// A successful parse: the numeric sets plus the raw text they came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    pub raw: RawFields,
    pub parsed: ParsedSchedule,
}

/// How a field was written, decided once from its raw text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum FieldShape {
    /// A bare `*`
    All,
    /// A single value such as `5` or `jan`
    Singular { value: i64 },
    /// `start-stop`
    Range { start: i64, stop: i64 },
    /// Comma separated values, in the order written
    List { values: Vec<i64> },
    /// `*/n` or `a-b/n`; `values` holds every selected occurrence
    Step { every: i64, values: Vec<i64> },
}

/// Classification of one field, ready for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldComponent {
    pub field: Field,
    pub shape: FieldShape,
    /// The parsed set is as large as the field's whole domain
    pub covers_domain: bool,
}

/// Components for all five fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Components {
    pub minute: FieldComponent,
    pub hour: FieldComponent,
    pub day_of_month: FieldComponent,
    pub month: FieldComponent,
    pub day_of_week: FieldComponent,
}

impl Components {
    pub fn iter(&self) -> impl Iterator<Item = &FieldComponent> {
        [
            &self.minute,
            &self.hour,
            &self.day_of_month,
            &self.month,
            &self.day_of_week,
        ]
        .into_iter()
    }
}
