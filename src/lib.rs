//! # human
//!
//! Translate machine values into text a person can read, and back.
//!
//! ## Overview
//!
//! `human` ships a handful of converters behind one [`Converter`] trait:
//! cron expressions into English, digit grouping, number words and byte
//! sizes. The cron converter is the interesting one; the rest are small
//! table and regex driven conversions.
//!
//! ## Quick Start
//!
//! ```rust
//! use human::cron::Cron;
//! use human::{Converter, Direction};
//! use human::number::NumberGroup;
//!
//! let cron = Cron::new();
//! assert_eq!(cron.describe("*/5 * * * *").unwrap(), "every 5 minutes");
//!
//! let group = NumberGroup;
//! assert_eq!(group.convert(Direction::FromMachine, "1000000").unwrap(), "1,000,000");
//! ```
//!
//! ## Converters
//!
//! - **cron**: five-field schedule expressions into English
//! - **group**: `1000000` <-> `1,000,000`
//! - **words**: `1300000` <-> `1.3 million`
//! - **size**: `1048576` <-> `1.0Mi` (IEC) or `1.0Mb` (SI)

pub mod cli;
pub mod config;
pub mod cron;
pub mod dirs;
pub mod error;
pub mod format;
pub mod number;
pub mod size;

// Re-export core types
pub use config::{HumanConfig, NumberStyle};
pub use error::{HumanError, Result};
pub use format::{default_converters, Converter, ConverterRegistry, Direction};
pub use size::Units;
