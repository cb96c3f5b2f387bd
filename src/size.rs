//! Byte size converter
//!
//! `1024` -> `1.0Ki` (IEC, the default) or `1000` -> `1.0Kb` (SI), and back.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::Result;
use crate::format::Converter;

/// Longest byte count with a unit (yotta/yobi)
const MAX_DIGITS: usize = 27;

const MIN_DIGITS: usize = 4;

const IEC_SUFFIXES: [&str; 9] = ["B", "Ki", "Mi", "Gi", "Ti", "Pi", "Ei", "Zi", "Yi"];
const SI_SUFFIXES: [&str; 9] = ["B", "Kb", "Mb", "Gb", "Tb", "Pb", "Eb", "Zb", "Yb"];

/// Accepted spellings per power, starting at kilo
const IEC_NAMES: [[&str; 2]; 8] = [
    ["ki", "kibi"],
    ["mi", "mebi"],
    ["gi", "gibi"],
    ["ti", "tebi"],
    ["pi", "pebi"],
    ["ei", "exbi"],
    ["zi", "zebi"],
    ["yi", "yobi"],
];
const SI_NAMES: [[&str; 3]; 8] = [
    ["k", "kb", "kilo"],
    ["m", "mb", "mega"],
    ["g", "gb", "giga"],
    ["t", "tb", "tera"],
    ["p", "pb", "peta"],
    ["e", "eb", "exa"],
    ["z", "zb", "zetta"],
    ["y", "yb", "yotta"],
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SizeError {
    #[error("Input is not a number")]
    NotANumber,

    #[error("Size is too small to bother, it should be at least 1000 bytes")]
    TooSmall,

    #[error("Size is too large, the biggest known unit is yotta")]
    TooLarge,

    #[error("Unknown unit suffix")]
    UnknownSuffix,

    #[error("Could not parse input")]
    Unparsable,
}

/// Unit system used for sizes
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Powers of 1024 (Ki, Mi, Gi, ...)
    #[default]
    Iec,
    /// Powers of 1000 (Kb, Mb, Gb, ...)
    Si,
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Units::Iec => write!(f, "iec"),
            Units::Si => write!(f, "si"),
        }
    }
}

fn size_with_suffix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^([0-9]+(?:\.[0-9]+)?)([a-z]+)$").unwrap())
}

/// Byte size converter for one unit system
#[derive(Debug, Clone, Copy, Default)]
pub struct Size {
    units: Units,
}

impl Size {
    pub fn new(units: Units) -> Self {
        Self { units }
    }

    pub fn units(&self) -> Units {
        self.units
    }

    fn base(&self) -> f64 {
        match self.units {
            Units::Iec => 1024.0,
            Units::Si => 1000.0,
        }
    }

    /// Power of the base a suffix stands for (`b` is 0)
    fn power_of(&self, suffix: &str) -> Option<i32> {
        if suffix == "b" {
            return Some(0);
        }
        let idx = match self.units {
            Units::Iec => IEC_NAMES.iter().position(|n| n.contains(&suffix)),
            Units::Si => SI_NAMES.iter().position(|n| n.contains(&suffix)),
        }?;
        i32::try_from(idx + 1).ok()
    }

    /// `2097152` -> `2.0Mi`
    pub fn humanize(&self, input: &str) -> std::result::Result<String, SizeError> {
        if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
            return Err(SizeError::NotANumber);
        }
        if input.len() < MIN_DIGITS {
            return Err(SizeError::TooSmall);
        }
        if input.len() > MAX_DIGITS {
            return Err(SizeError::TooLarge);
        }

        let power = (input.len() - 1) / 3;
        let suffix = match self.units {
            Units::Iec => IEC_SUFFIXES[power],
            Units::Si => SI_SUFFIXES[power],
        };
        let bytes: f64 = input.parse().map_err(|_| SizeError::NotANumber)?;
        let value = bytes / self.base().powi(power as i32);

        Ok(format!("{value:.1}{suffix}"))
    }

    /// `1Mi` -> `1048576`
    pub fn to_bytes(&self, input: &str) -> std::result::Result<String, SizeError> {
        let caps = size_with_suffix()
            .captures(input)
            .ok_or(SizeError::Unparsable)?;

        let power = self
            .power_of(&caps[2].to_lowercase())
            .ok_or(SizeError::UnknownSuffix)?;
        let amount: f64 = caps[1].parse().map_err(|_| SizeError::NotANumber)?;
        let bytes = (amount * self.base().powi(power)).round();

        Ok(format!("{bytes:.0}"))
    }
}

impl Converter for Size {
    fn name(&self) -> &'static str {
        "size"
    }

    fn from_machine(&self, input: &str) -> Result<String> {
        Ok(self.humanize(input)?)
    }

    fn into_machine(&self, input: &str) -> Result<String> {
        Ok(self.to_bytes(input)?)
    }
}
