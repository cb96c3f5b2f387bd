use std::io::Write;

use serde::Serialize;

use crate::cron::{classify_schedule, Components, Cron, Schedule};
use crate::error::Result;

/// What `human cron` should do with each expression
#[derive(Debug, Clone, Copy, Default)]
pub struct CronOptions {
    pub into: bool,
    pub check: bool,
    pub json: bool,
}

#[derive(Serialize)]
struct CronReport<'a> {
    expression: &'a str,
    schedule: Schedule,
    components: Components,
    description: String,
}

/// Execute the `cron` command on every input, one result per line.
pub fn execute(inputs: &[String], opts: CronOptions, out: &mut impl Write) -> Result<()> {
    let cron = Cron::new();

    for input in inputs {
        if opts.into {
            writeln!(out, "{}", cron.into_machine(input)?)?;
        } else if opts.check {
            cron.can_parse_from_machine(input)?;
            writeln!(out, "valid")?;
        } else if opts.json {
            let schedule = cron.parse(input)?;
            let report = CronReport {
                expression: input,
                components: classify_schedule(&schedule),
                description: cron.describe(input)?,
                schedule,
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        } else {
            writeln!(out, "{}", cron.describe(input)?)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cron::CronError;
    use crate::error::HumanError;

    fn run(input: &str, opts: CronOptions) -> Result<String> {
        let mut out = Vec::new();
        execute(&[input.to_string()], opts, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            run("*/5 * * * *", CronOptions::default()).unwrap(),
            "every 5 minutes\n"
        );
    }

    #[test]
    fn test_check() {
        let opts = CronOptions {
            check: true,
            ..Default::default()
        };
        assert_eq!(run("0 12 * * mon", opts).unwrap(), "valid\n");
        assert!(matches!(
            run("60 * * * *", opts),
            Err(HumanError::Cron(CronError::BadMinuteField))
        ));
    }

    #[test]
    fn test_json() {
        let opts = CronOptions {
            json: true,
            ..Default::default()
        };
        let out = run("0 12 * * *", opts).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["expression"], "0 12 * * *");
        assert_eq!(value["schedule"]["parsed"]["hours"], serde_json::json!([12]));
        assert_eq!(value["components"]["minute"]["shape"]["shape"], "singular");
        assert_eq!(value["description"], "at minute 0 past 12");
    }

    #[test]
    fn test_into_not_implemented() {
        let opts = CronOptions {
            into: true,
            ..Default::default()
        };
        assert!(matches!(
            run("every minute", opts),
            Err(HumanError::Cron(CronError::NotYetImplemented))
        ));
    }
}
