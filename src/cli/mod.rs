pub mod all;
pub mod cron;
pub mod number;
pub mod size;

use std::io::BufRead;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::error::Result;
use crate::size::Units;

/// human - Translate machine values into human text and back
#[derive(Debug, Parser)]
#[command(name = "human", version, about)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file to use instead of $HUMAN_HOME/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Describe a cron expression in English
    Cron {
        /// Expression to describe, quoted (e.g. "*/5 * * * *"); stdin if omitted
        expr: Option<String>,

        /// Convert English back into an expression
        #[arg(long)]
        into: bool,

        /// Only validate the expression
        #[arg(long, conflicts_with = "json")]
        check: bool,

        /// Print the parsed schedule and description as JSON
        #[arg(long)]
        json: bool,
    },

    /// Group digits or turn a number into scale words
    Number {
        /// Number to convert; stdin if omitted
        input: Option<String>,

        /// Convert human text back into digits
        #[arg(long)]
        into: bool,

        /// Use scale words (1.3 million)
        #[arg(short, long, conflicts_with = "group")]
        words: bool,

        /// Use thousands separators (1,300,000)
        #[arg(short, long)]
        group: bool,
    },

    /// Show a byte count with units
    Size {
        /// Byte count or size to convert; stdin if omitted
        input: Option<String>,

        /// Convert a size with units back into bytes
        #[arg(long)]
        into: bool,

        /// Unit system (defaults to the config value)
        #[arg(long, value_enum)]
        units: Option<Units>,
    },

    /// Try every converter on the input
    All {
        /// Value to convert; stdin if omitted
        input: Option<String>,

        /// Convert human text back into machine values
        #[arg(long)]
        into: bool,
    },
}

/// The values a command works on: the argument if given, otherwise every
/// non-empty line read from `reader`.
pub fn collect_inputs(arg: Option<String>, reader: impl BufRead) -> Result<Vec<String>> {
    if let Some(arg) = arg {
        return Ok(vec![arg]);
    }

    let mut inputs = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if !line.is_empty() {
            inputs.push(line.to_string());
        }
    }
    tracing::debug!(count = inputs.len(), "read inputs from stdin");
    Ok(inputs)
}
