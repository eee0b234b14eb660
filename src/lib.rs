use std::ffi::OsString;
use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;

pub mod cli;
pub mod commands;
pub mod error;

use error::CommandError;

pub type Result<T> = anyhow::Result<T>;

/// Entry point used by the binary crate.
pub fn run() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_from(std::env::args_os(), &mut out)
}

/// Parses `args` against the root command and runs it, writing to `out`.
///
/// Help requests are written to `out` and count as success.
pub fn run_from<I, T, W>(args: I, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    init_tracing();

    let args = match cli::Args::try_parse_from(args) {
        Ok(args) => args,
        Err(err) if !err.use_stderr() => {
            write!(out, "{}", err.render()).context("failed to write help")?;
            return Ok(());
        }
        Err(err) => return Err(CommandError::from(err).into()),
    };

    commands::execute(&args, out)?;
    Ok(())
}

fn init_tracing() {
    use std::sync::Once;
    use tracing_subscriber::{fmt, EnvFilter};

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    });
}
