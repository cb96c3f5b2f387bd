use std::io::Write;

use crate::error::Result;
use crate::format::{Converter, Direction};
use crate::size::{Size, Units};

/// Execute the `size` command with the given unit system.
pub fn execute(
    inputs: &[String],
    units: Units,
    direction: Direction,
    out: &mut impl Write,
) -> Result<()> {
    let size = Size::new(units);
    tracing::debug!(%units, ?direction, "converting sizes");

    for input in inputs {
        writeln!(out, "{}", size.convert(direction, input)?)?;
    }
    Ok(())
}
