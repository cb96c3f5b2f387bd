//! Field classification
//!
//! Labels each field as all / singular / range / list / step from its raw
//! text, carrying the parsed values the renderer needs.

use super::types::{Components, Field, FieldComponent, FieldShape, Schedule};

/// Classify one field.
///
/// When several separators appear, a step wins over a list, and a list
/// wins over a range. Range boundaries are the first and last parsed
/// values, and lists keep the order they were written in.
pub fn classify(field: Field, raw: &str, values: &[i64]) -> FieldComponent {
    let covers_domain = values.len() == field.domain_size();
    let first = values.first().copied().unwrap_or_default();
    let last = values.last().copied().unwrap_or(first);

    let shape = if let Some(every) = step_of(raw) {
        FieldShape::Step {
            every,
            values: values.to_vec(),
        }
    } else if raw.contains(',') {
        FieldShape::List {
            values: values.to_vec(),
        }
    } else if raw.contains('-') {
        FieldShape::Range {
            start: first,
            stop: last,
        }
    } else if raw == "*" {
        FieldShape::All
    } else {
        FieldShape::Singular { value: first }
    };

    FieldComponent {
        field,
        shape,
        covers_domain,
    }
}

/// Step of the first item written with a `/`, so `*/5,1` steps by 5
fn step_of(raw: &str) -> Option<i64> {
    let (_, step) = raw.split(',').find_map(|item| item.rsplit_once('/'))?;
    step.parse().ok()
}

/// Classify all five fields of a parsed schedule
pub fn classify_schedule(schedule: &Schedule) -> Components {
    let component =
        |field: Field| classify(field, schedule.raw.get(field), schedule.parsed.get(field));

    Components {
        minute: component(Field::Minute),
        hour: component(Field::Hour),
        day_of_month: component(Field::DayOfMonth),
        month: component(Field::Month),
        day_of_week: component(Field::DayOfWeek),
    }
}
