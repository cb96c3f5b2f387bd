use std::io::Write;

use crate::error::{HumanError, Result};
use crate::format::{ConverterRegistry, Direction};

/// Execute the `all` command: print `<name>: <output>` for every converter
/// that accepts each input.
pub fn execute(
    inputs: &[String],
    registry: &ConverterRegistry,
    direction: Direction,
    out: &mut impl Write,
) -> Result<()> {
    for input in inputs {
        let results = registry.convert_all(direction, input);
        if results.is_empty() {
            return Err(HumanError::NoConverter(input.clone()));
        }
        for (name, output) in results {
            writeln!(out, "{name}: {output}")?;
        }
    }
    Ok(())
}
