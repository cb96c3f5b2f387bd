//! Number converters
//!
//! - [`NumberGroup`]: `1000000` <-> `1,000,000`
//! - [`NumberWord`]: `1300000` <-> `1.3 million`
//!
//! Both work on digit strings, so inputs far beyond `u128` are fine.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::error::Result;
use crate::format::Converter;

/// Scale words for each additional group of three digits
const SCALES: [&str; 21] = [
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
    "nonillion",
    "decillion",
    "undecillion",
    "duodecillion",
    "tredecillion",
    "quattuordecillion",
    "quindecillion",
    "sexdecillion",
    "septendecillion",
    "octodecillion",
    "novemdecillion",
    "vigintillion",
];

/// Smallest input either converter will touch
const MIN_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    #[error("Input is not a number")]
    NotANumber,

    #[error("Number is too small to bother, it should be at least 1000")]
    TooSmall,

    #[error("Number is too large, the biggest known name is vigintillion")]
    TooLarge,

    #[error("Input is not a grouped number, ie: 1,000")]
    NotHumanGroup,

    #[error("Input should be a number followed by a scale word, ie: 1.5 million")]
    NotADigitWordCombo,
}

fn grouped_number() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]{1,3}(,[0-9]{3})+$").unwrap())
}

fn delimited_number() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(([0-9]+)|([0-9]{1,3}[., ])+[0-9]{1,3})$").unwrap())
}

fn digit_word() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^([0-9]+)(?:\.([0-9]{1,2}))? ([a-z]+)$").unwrap())
}

/// Split a digit string into groups of three, counting from the right
fn group_digits(digits: &str) -> Vec<&str> {
    let head = match digits.len() % 3 {
        0 => 3usize.min(digits.len()),
        n => n,
    };
    let mut groups = vec![&digits[..head]];
    let mut rest = &digits[head..];
    while !rest.is_empty() {
        groups.push(&rest[..3]);
        rest = &rest[3..];
    }
    groups
}

/// Thousands separators: `1000000` -> `1,000,000`
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberGroup;

impl NumberGroup {
    pub fn group(&self, input: &str) -> std::result::Result<String, NumberError> {
        if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
            return Err(NumberError::NotANumber);
        }
        if input.len() < MIN_LEN {
            return Err(NumberError::TooSmall);
        }
        Ok(group_digits(input).join(","))
    }

    pub fn ungroup(&self, input: &str) -> std::result::Result<String, NumberError> {
        if input.len() < MIN_LEN {
            return Err(NumberError::TooSmall);
        }
        if !input.contains(',') {
            return Err(NumberError::NotHumanGroup);
        }
        if !grouped_number().is_match(input) {
            return Err(NumberError::NotANumber);
        }
        Ok(input.replace(',', ""))
    }
}

impl Converter for NumberGroup {
    fn name(&self) -> &'static str {
        "group"
    }

    fn from_machine(&self, input: &str) -> Result<String> {
        Ok(self.group(input)?)
    }

    fn into_machine(&self, input: &str) -> Result<String> {
        Ok(self.ungroup(input)?)
    }
}

/// Scale words: `250000` -> `250 thousand`, `1300000` -> `1.3 million`
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberWord;

impl NumberWord {
    pub fn to_words(&self, input: &str) -> std::result::Result<String, NumberError> {
        if !delimited_number().is_match(input) {
            return Err(NumberError::NotANumber);
        }
        if input.len() < MIN_LEN {
            return Err(NumberError::TooSmall);
        }

        let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
        let digits = digits.trim_start_matches('0');
        let groups = group_digits(digits);
        if groups.len() < 2 {
            return Err(NumberError::TooSmall);
        }
        if groups.len() > SCALES.len() + 1 {
            return Err(NumberError::TooLarge);
        }

        // Tenths of the leading group, rounded half up
        let lead: u64 = groups[0].parse().map_err(|_| NumberError::NotANumber)?;
        let next: u64 = groups[1].parse().map_err(|_| NumberError::NotANumber)?;
        let mut tenths = (lead * 1000 + next + 50) / 100;
        let mut scale = groups.len() - 2;

        if tenths >= 10_000 && scale + 1 < SCALES.len() {
            tenths = 10;
            scale += 1;
        }

        let (whole, fraction) = (tenths / 10, tenths % 10);
        let mut out = whole.to_string();
        if fraction > 0 {
            out.push_str(&format!(".{fraction}"));
        }
        out.push(' ');
        out.push_str(SCALES[scale]);
        Ok(out)
    }

    pub fn from_words(&self, input: &str) -> std::result::Result<String, NumberError> {
        let caps = digit_word()
            .captures(input)
            .ok_or(NumberError::NotADigitWordCombo)?;

        let word = caps[3].to_lowercase();
        let scale = SCALES
            .iter()
            .position(|s| *s == word)
            .ok_or(NumberError::NotADigitWordCombo)?;
        let zeros = (scale + 1) * 3;

        let whole = &caps[1];
        let fraction = caps.get(2).map(|m| m.as_str()).unwrap_or("");

        let mut digits = format!("{whole}{fraction}");
        digits.push_str(&"0".repeat(zeros - fraction.len()));

        let trimmed = digits.trim_start_matches('0');
        Ok(if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        })
    }
}

impl Converter for NumberWord {
    fn name(&self) -> &'static str {
        "words"
    }

    fn from_machine(&self, input: &str) -> Result<String> {
        Ok(self.to_words(input)?)
    }

    fn into_machine(&self, input: &str) -> Result<String> {
        Ok(self.from_words(input)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("1000"), vec!["1", "000"]);
        assert_eq!(group_digits("100000"), vec!["100", "000"]);
        assert_eq!(
            group_digits("abcdefghijklmnopqrstuvwxyz"),
            vec!["ab", "cde", "fgh", "ijk", "lmn", "opq", "rst", "uvw", "xyz"]
        );
    }

    #[test]
    fn test_group_validation() {
        let g = NumberGroup;
        assert_eq!(g.group("aba"), Err(NumberError::NotANumber));
        assert_eq!(g.group("12af"), Err(NumberError::NotANumber));
        assert_eq!(g.group("1"), Err(NumberError::TooSmall));
        assert_eq!(g.group("999"), Err(NumberError::TooSmall));
    }

    #[test]
    fn test_group() {
        let g = NumberGroup;
        let cases = [
            ("1000", "1,000"),
            ("10000", "10,000"),
            ("100000", "100,000"),
            ("1000000", "1,000,000"),
            ("100000000000", "100,000,000,000"),
            ("1338054622987", "1,338,054,622,987"),
        ];
        for (input, expected) in cases {
            assert_eq!(g.group(input).unwrap(), expected, "input: {input}");
        }
    }

    #[test]
    fn test_ungroup() {
        let g = NumberGroup;
        assert_eq!(g.ungroup("999"), Err(NumberError::TooSmall));
        assert_eq!(g.ungroup("1000"), Err(NumberError::NotHumanGroup));
        assert_eq!(g.ungroup("1,00f"), Err(NumberError::NotANumber));
        assert_eq!(g.ungroup("1,000").unwrap(), "1000");
        assert_eq!(g.ungroup("100,000,000,000").unwrap(), "100000000000");
    }

    #[test]
    fn test_words_validation() {
        let w = NumberWord;
        assert_eq!(w.to_words("aba"), Err(NumberError::NotANumber));
        assert_eq!(w.to_words("12af"), Err(NumberError::NotANumber));
        assert_eq!(w.to_words("123,afb,$$@"), Err(NumberError::NotANumber));
        assert_eq!(w.to_words("1a000a000"), Err(NumberError::NotANumber));
        assert_eq!(w.to_words("999"), Err(NumberError::TooSmall));
        assert!(w
            .to_words("100,000,000,000,000,000,000,000,000,000,000,000,000,000,000,000,000,000,000,000,000,000")
            .is_ok());
        assert_eq!(
            w.to_words("1,000,000,000,000,000,000,000,000,000,000,000,000,000,000,000,000,000,000,000,000,000,000"),
            Err(NumberError::TooLarge)
        );
    }

    #[test]
    fn test_to_words() {
        let w = NumberWord;
        let cases = [
            ("1000", "1 thousand"),
            ("250000", "250 thousand"),
            ("1300000", "1.3 million"),
            ("1,000,000", "1 million"),
            ("1.000.000", "1 million"),
            ("1 000 000", "1 million"),
            ("1338054622987", "1.3 trillion"),
            ("999999", "1 million"),
        ];
        for (input, expected) in cases {
            assert_eq!(w.to_words(input).unwrap(), expected, "input: {input}");
        }
    }

    #[test]
    fn test_from_words() {
        let w = NumberWord;
        assert_eq!(w.from_words("250 thousand").unwrap(), "250000");
        assert_eq!(w.from_words("1.3 million").unwrap(), "1300000");
        assert_eq!(w.from_words("1 MiLlIon").unwrap(), "1000000");
        assert_eq!(w.from_words("10 million").unwrap(), "10000000");
    }

    #[test]
    fn test_from_words_rejects() {
        let w = NumberWord;
        for input in [
            "1",
            "million",
            "one million",
            "1 million!",
            "1 foo",
            "100,000 million",
            "100.000 million",
            "100 000 million",
            "1 centillion",
            "1 googol",
        ] {
            assert_eq!(
                w.from_words(input),
                Err(NumberError::NotADigitWordCombo),
                "input: {input}"
            );
        }
    }
}
