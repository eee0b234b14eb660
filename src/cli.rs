use std::ffi::OsString;

use clap::Parser;

/// Command-line arguments for the `binary` root command.
#[derive(Debug, Parser)]
#[command(
    name = "binary",
    about = "A simple CLI application",
    long_about = "A simple CLI application built with Cobra and Bazel."
)]
pub struct Args {
    /// Positional arguments. The root command takes any and ignores them.
    #[arg(hide = true)]
    pub rest: Vec<OsString>,
}
