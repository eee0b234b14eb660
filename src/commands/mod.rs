pub mod greet;

use std::io::Write;

use crate::cli::Args;
use crate::error::CommandResult;

/// Dispatches execution to the root command's action.
pub fn execute<W: Write>(args: &Args, out: &mut W) -> CommandResult<()> {
    tracing::debug!(rest = ?args.rest, "dispatching root command");
    writeln!(out, "{}", greet::message())?;
    out.flush()?;
    Ok(())
}
