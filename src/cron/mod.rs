//! Cron expressions into English
//!
//! Parses the standard 5-field syntax (minute, hour, day of month, month,
//! day of week) into validated numeric sets and renders them as a sentence:
//!
//! ```
//! use human::cron::Cron;
//!
//! let cron = Cron::new();
//! assert_eq!(cron.describe("*/2 * * * *").unwrap(), "every 2 minutes");
//! assert_eq!(
//!     cron.describe("* * 1-25 * 1-3").unwrap(),
//!     "every minute on the 1st through the 25th and on Monday through Wednesday"
//! );
//! ```
//!
//! Only the machine to human direction exists; the reverse reports
//! [`CronError::NotYetImplemented`].

mod classify;
mod field;
mod parser;
mod render;
mod types;
mod validate;

pub use classify::{classify, classify_schedule};
pub use field::parse_field;
pub use types::{
    Components, CronError, Field, FieldComponent, FieldShape, ParsedSchedule, RawFields, Result,
    Schedule,
};
pub use validate::NameTables;

/// Cron parser and renderer.
///
/// Holds only the read-only name tables, so one instance can be shared
/// across threads and reused for any number of inputs.
#[derive(Debug, Clone, Default)]
pub struct Cron {
    names: NameTables,
}

impl Cron {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate an expression
    pub fn parse(&self, input: &str) -> Result<Schedule> {
        parser::parse_schedule(input, &self.names)
    }

    /// Validation only: can this input be parsed?
    pub fn can_parse_from_machine(&self, input: &str) -> Result<()> {
        self.parse(input).map(|_| ())
    }

    /// Parse, classify and render an expression as English
    pub fn describe(&self, input: &str) -> Result<String> {
        let schedule = self.parse(input)?;
        let components = classify_schedule(&schedule);
        let sentence = render::render(&components, &self.names);
        tracing::trace!(input, %sentence, "rendered cron expression");
        Ok(sentence)
    }

    /// English back into an expression is not supported
    pub fn into_machine(&self, _input: &str) -> Result<String> {
        Err(CronError::NotYetImplemented)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_parse_from_machine() {
        let cases: &[(&str, Option<CronError>)] = &[
            ("A B C", Some(CronError::Unparsable)),
            ("A B C D E F", Some(CronError::Unparsable)),
            (", B , D ,", Some(CronError::Unparsable)),
            ("A - C - E", Some(CronError::Unparsable)),
            ("0, * * * *", Some(CronError::HangingRangeOrList)),
            ("59- * * * *", Some(CronError::HangingRangeOrList)),
            ("* 0, * * *", Some(CronError::HangingRangeOrList)),
            ("* 59- * * *", Some(CronError::HangingRangeOrList)),
            ("* * 0, * *", Some(CronError::HangingRangeOrList)),
            ("* * 59- * *", Some(CronError::HangingRangeOrList)),
            ("* * * 0, *", Some(CronError::HangingRangeOrList)),
            ("* * * 59- *", Some(CronError::HangingRangeOrList)),
            ("* * * * 0,", Some(CronError::HangingRangeOrList)),
            ("* * * * 59-", Some(CronError::HangingRangeOrList)),
            ("2-4-6 * * * *", Some(CronError::BadRange)),
            ("1-2,2-4-6 * * * *", Some(CronError::BadRange)),
            ("* 7-5-6 * * *", Some(CronError::BadRange)),
            ("* 10-14,9-10-12 * * *", Some(CronError::BadRange)),
            ("* * 7-5-6 * *", Some(CronError::BadRange)),
            ("* * 7-5-6,5-9 * *", Some(CronError::BadRange)),
            ("* * * 1-2-3 *", Some(CronError::BadRange)),
            ("* * * 1-2-3,6-9 *", Some(CronError::BadRange)),
            ("* * * * 1-2-3", Some(CronError::BadRange)),
            ("* * * * 1-2-3,6-9", Some(CronError::BadRange)),
            ("60 * * * *", Some(CronError::BadMinuteField)),
            ("* 60 * * *", Some(CronError::BadHourField)),
            ("* * 60 * *", Some(CronError::BadDomField)),
            ("* * * 60 *", Some(CronError::BadMonthField)),
            ("* * * * 60", Some(CronError::BadDowField)),
            ("*//2 * * * *", Some(CronError::BadRangeStep)),
            ("* *//2 * * *", Some(CronError::BadRangeStep)),
            ("* * *//2 * *", Some(CronError::BadRangeStep)),
            ("* * * *//2 *", Some(CronError::BadRangeStep)),
            ("* * * * *//2", Some(CronError::BadRangeStep)),
            ("* * */0 * *", Some(CronError::BadRangeStep)),
            ("* * * */0 *", Some(CronError::BadRangeStep)),
            ("59/* * * * *", Some(CronError::BadRangeStep)),
            ("* 23/* * * *", Some(CronError::BadRangeStep)),
            ("* * 1/* * *", Some(CronError::BadRangeStep)),
            ("* * * 1/* *", Some(CronError::BadRangeStep)),
            ("* * * * 7/*", Some(CronError::BadRangeStep)),
            ("* 0-23/0 * * *", Some(CronError::BadRangeStep)),
            ("a * * * *", Some(CronError::Unparsable)),
            ("* a * * *", Some(CronError::Unparsable)),
            ("* * a * *", Some(CronError::Unparsable)),
            ("* * * abc *", Some(CronError::Unparsable)),
            ("* * * * abc", Some(CronError::Unparsable)),
            ("* * * * *", None),
            ("* * * aug *", None),
            ("* * * * mon", None),
            ("* * * * 0", None),
            ("0 * * * *", None),
            ("* 0 * * *", None),
            ("* 3-23/100 * * *", None),
            ("* 3-23/3 * * *", None),
            ("1,2,3,4,5 * * * *", None),
            ("1-59 * * * *", None),
        ];

        let cron = Cron::new();
        for (input, expected) in cases {
            let got = cron.can_parse_from_machine(input).err();
            assert_eq!(&got, expected, "input: {input}");
        }
    }

    #[test]
    fn test_describe_bubbles_up_parse_errors() {
        let cron = Cron::new();
        assert_eq!(cron.describe("1 2 3"), Err(CronError::Unparsable));
    }

    #[test]
    fn test_into_machine_not_implemented() {
        let cron = Cron::new();
        assert_eq!(
            cron.into_machine("every minute"),
            Err(CronError::NotYetImplemented)
        );
    }

    #[test]
    fn test_shared_across_threads() {
        let cron = std::sync::Arc::new(Cron::new());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let cron = cron.clone();
                std::thread::spawn(move || cron.describe(&format!("{i} * * * *")))
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap().unwrap(), format!("at minute {i}"));
        }
    }
}
