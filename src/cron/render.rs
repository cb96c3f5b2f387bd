//! English rendering of classified cron fields
//!
//! The sentence is built from three segments, always in this order and
//! joined without extra separators:
//!
//! - time: minute and hour (`"on minutes 1 through 4 past 2"`)
//! - day: day of month and day of week (`" on the 1st and on Mondays"`)
//! - month (`" of Jan through Mar"`)
//!
//! Fields that cover their whole domain are left for the reader to infer.

use super::types::{Components, FieldComponent, FieldShape};
use super::validate::NameTables;

/// Render the classified components of a schedule as one English sentence
pub fn render(components: &Components, names: &NameTables) -> String {
    if components.iter().all(|c| c.covers_domain) {
        return "every minute".to_string();
    }

    let mut out = time_segment(&components.minute, &components.hour);
    out.push_str(&day_segment(
        &components.day_of_month,
        &components.day_of_week,
        names,
    ));
    out.push_str(&month_segment(&components.month, names));
    out
}

fn time_segment(minute: &FieldComponent, hour: &FieldComponent) -> String {
    let mut out = match &minute.shape {
        FieldShape::All => "every minute ".to_string(),
        FieldShape::Singular { value } => format!("at minute {value} "),
        FieldShape::Range { start, stop } => format!("on minutes {start} through {stop} "),
        FieldShape::List { values } => format!("on minutes {} ", numbers(values)),
        FieldShape::Step { every, .. } => format!("every {every} minutes "),
    };

    if hour.covers_domain {
        out.truncate(out.trim_end().len());
        return out;
    }

    match &hour.shape {
        FieldShape::All => out.truncate(out.trim_end().len()),
        FieldShape::Singular { value } => out.push_str(&format!("past {value}")),
        FieldShape::Step { every, .. } => out.push_str(&format!("past every {every} hours")),
        FieldShape::Range { start, stop } => {
            out.push_str(&format!("past the hours of {start} through {stop}"))
        }
        FieldShape::List { values } => {
            out.push_str(&format!("past the hours of {}", numbers(values)))
        }
    }
    out
}

fn day_segment(dom: &FieldComponent, dow: &FieldComponent, names: &NameTables) -> String {
    if dom.covers_domain && dow.covers_domain {
        return String::new();
    }

    let mut out = match &dom.shape {
        FieldShape::All => String::new(),
        FieldShape::Step { every, .. } => format!(" every {every} days"),
        FieldShape::Singular { value } => format!(" on the {}", ordinal(*value)),
        FieldShape::Range { start, stop } => {
            format!(" on the {} through the {}", ordinal(*start), ordinal(*stop))
        }
        FieldShape::List { values } => match values.split_last() {
            Some((last, [])) => format!(" on the {}", ordinal(*last)),
            Some((last, rest)) => {
                let rest: Vec<String> = rest.iter().map(|v| ordinal(*v)).collect();
                format!(" on the {} and the {}", rest.join(", "), ordinal(*last))
            }
            None => String::new(),
        },
    };

    let joiner = if dom.covers_domain { "on" } else { "and on" };
    let day = |v: i64| names.weekday(v).unwrap_or_else(|| v.to_string());

    match &dow.shape {
        FieldShape::All => {}
        FieldShape::Singular { value } => out.push_str(&format!(" {joiner} {}s", day(*value))),
        FieldShape::Range { start, stop } => {
            out.push_str(&format!(" {joiner} {} through {}", day(*start), day(*stop)))
        }
        FieldShape::List { values } => {
            let days: Vec<String> = values.iter().map(|v| format!("{}s", day(*v))).collect();
            out.push_str(&format!(" {joiner} {}", series(&days)))
        }
        FieldShape::Step { every, .. } => {
            out.push_str(&format!(" {joiner} every {every} days of the week"))
        }
    }
    out
}

fn month_segment(month: &FieldComponent, names: &NameTables) -> String {
    if month.covers_domain {
        return String::new();
    }

    let name = |v: i64| names.month(v).unwrap_or_else(|| v.to_string());

    match &month.shape {
        FieldShape::All => String::new(),
        FieldShape::Singular { value } => format!(" of {}", name(*value)),
        FieldShape::Range { start, stop } => {
            format!(" of {} through {}", name(*start), name(*stop))
        }
        // A month step is spelled out as the months it selects
        FieldShape::List { values } | FieldShape::Step { values, .. } => {
            let months: Vec<String> = values.iter().map(|v| name(*v)).collect();
            format!(" of {}", series(&months))
        }
    }
}

/// `a, b, and c`; a single item is returned as is
fn series(items: &[String]) -> String {
    match items.split_last() {
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{}, and {}", rest.join(", "), last),
        None => String::new(),
    }
}

fn numbers(values: &[i64]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    series(&items)
}

/// Suffix from the last digit alone, so 11 is `11st`
fn ordinal(n: i64) -> String {
    let suffix = match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
