use std::io::{self, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use human::cli::cron::CronOptions;
use human::cli::{collect_inputs, Cli, Commands};
use human::{default_converters, Direction, HumanConfig};

/// Filter used when `RUST_LOG` is not set: `-v` flags, then the config value.
fn log_filter(verbose: u8, configured: &str) -> String {
    match verbose {
        0 => configured.to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = HumanConfig::load(cli.config.as_deref())?;

    // Initialize tracing on stderr so converted values own stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(log_filter(cli.verbose, &config.log_level))),
        )
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Cron {
            expr,
            into,
            check,
            json,
        } => {
            let inputs = collect_inputs(expr, stdin.lock())?;
            let opts = CronOptions { into, check, json };
            human::cli::cron::execute(&inputs, opts, &mut stdout)?;
        }
        Commands::Number {
            input,
            into,
            words,
            group,
        } => {
            let inputs = collect_inputs(input, stdin.lock())?;
            let style = human::cli::number::resolve_style(words, group, config.number_style);
            human::cli::number::execute(
                &inputs,
                style,
                Direction::from_into_flag(into),
                &mut stdout,
            )?;
        }
        Commands::Size { input, into, units } => {
            let inputs = collect_inputs(input, stdin.lock())?;
            human::cli::size::execute(
                &inputs,
                units.unwrap_or(config.units),
                Direction::from_into_flag(into),
                &mut stdout,
            )?;
        }
        Commands::All { input, into } => {
            let inputs = collect_inputs(input, stdin.lock())?;
            let registry = default_converters(config.units);
            human::cli::all::execute(
                &inputs,
                &registry,
                Direction::from_into_flag(into),
                &mut stdout,
            )?;
        }
    }

    stdout.flush()?;
    Ok(())
}
