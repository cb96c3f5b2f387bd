//! Cron expression parser
//!
//! Supports the standard 5-field syntax:
//! ```text
//! ┌───────────── minute (0-59)
//! │ ┌───────────── hour (0-23)
//! │ │ ┌───────────── day of month (1-31)
//! │ │ │ ┌───────────── month (1-12 or jan-dec)
//! │ │ │ │ ┌───────────── day of week (0-7, 0 and 7 are Sunday, or sun-sat)
//! │ │ │ │ │
//! * * * * *
//! ```
//!
//! Parsing runs in fixed stages. Each stage must pass for all five fields
//! (checked in expression order) before the next one starts, and the first
//! failure is returned as is.
//!
//! Wildcard expansion and name resolution are not separate stages: they run
//! per field inside the numeric stage, right before each field is parsed.

use super::types::{CronError, Field, ParsedSchedule, RawFields, Result, Schedule};
use super::validate::{self, NameTables};

/// Pipeline stages, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Splitting,
    SyntaxChecking,
    NumericParsing,
    BoundChecking,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Splitting => write!(f, "splitting"),
            Stage::SyntaxChecking => write!(f, "syntax"),
            Stage::NumericParsing => write!(f, "numeric"),
            Stage::BoundChecking => write!(f, "bounds"),
        }
    }
}

/// Parse `input` into a validated [`Schedule`].
pub fn parse_schedule(input: &str, names: &NameTables) -> Result<Schedule> {
    let raw = run(Stage::Splitting, || RawFields::split(input))?;
    run(Stage::SyntaxChecking, || validate::check_syntax(&raw))?;

    let values = run(Stage::NumericParsing, || {
        raw.iter()
            .map(|(field, text)| {
                let expanded = validate::expand_wildcard(field, text);
                validate::parse_values(field, expanded, names)
            })
            .collect::<Result<Vec<_>>>()
    })?;

    run(Stage::BoundChecking, || {
        Field::ALL
            .iter()
            .zip(&values)
            .try_for_each(|(field, v)| validate::check_bounds(*field, v))
    })?;

    let [minutes, hours, days_of_month, months, days_of_week]: [Vec<i64>; 5] = values
        .try_into()
        .map_err(|_| CronError::Unparsable)?;

    Ok(Schedule {
        raw,
        parsed: ParsedSchedule {
            minutes,
            hours,
            days_of_month,
            months,
            days_of_week,
        },
    })
}

fn run<T>(stage: Stage, f: impl FnOnce() -> Result<T>) -> Result<T> {
    f().inspect_err(|e| tracing::debug!(%stage, error = %e, "cron parse failed"))
}
