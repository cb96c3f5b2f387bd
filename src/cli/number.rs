use std::io::Write;

use crate::config::NumberStyle;
use crate::error::Result;
use crate::format::{Converter, Direction};
use crate::number::{NumberGroup, NumberWord};

/// Execute the `number` command in the given style.
pub fn execute(
    inputs: &[String],
    style: NumberStyle,
    direction: Direction,
    out: &mut impl Write,
) -> Result<()> {
    let converter: &dyn Converter = match style {
        NumberStyle::Group => &NumberGroup,
        NumberStyle::Words => &NumberWord,
    };
    tracing::debug!(converter = converter.name(), ?direction, "converting numbers");

    for input in inputs {
        writeln!(out, "{}", converter.convert(direction, input)?)?;
    }
    Ok(())
}

/// Command-line flags win over the configured style.
pub fn resolve_style(words: bool, group: bool, configured: NumberStyle) -> NumberStyle {
    if words {
        NumberStyle::Words
    } else if group {
        NumberStyle::Group
    } else {
        configured
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HumanError;
    use crate::number::NumberError;

    fn run(input: &str, style: NumberStyle, direction: Direction) -> Result<String> {
        let mut out = Vec::new();
        execute(&[input.to_string()], style, direction, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_group_both_ways() {
        assert_eq!(
            run("1000000", NumberStyle::Group, Direction::FromMachine).unwrap(),
            "1,000,000\n"
        );
        assert_eq!(
            run("1,000,000", NumberStyle::Group, Direction::IntoMachine).unwrap(),
            "1000000\n"
        );
    }

    #[test]
    fn test_words_both_ways() {
        assert_eq!(
            run("1300000", NumberStyle::Words, Direction::FromMachine).unwrap(),
            "1.3 million\n"
        );
        assert_eq!(
            run("250 thousand", NumberStyle::Words, Direction::IntoMachine).unwrap(),
            "250000\n"
        );
    }

    #[test]
    fn test_error_propagates() {
        assert!(matches!(
            run("12", NumberStyle::Group, Direction::FromMachine),
            Err(HumanError::Number(NumberError::TooSmall))
        ));
    }

    #[test]
    fn test_resolve_style() {
        assert_eq!(resolve_style(false, false, NumberStyle::Words), NumberStyle::Words);
        assert_eq!(resolve_style(false, true, NumberStyle::Words), NumberStyle::Group);
        assert_eq!(resolve_style(true, false, NumberStyle::Group), NumberStyle::Words);
    }
}
