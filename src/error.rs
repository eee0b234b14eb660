use thiserror::Error;

pub type CommandResult<T> = Result<T, CommandError>;

/// Failure while dispatching or running the root command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Dispatch(#[from] clap::Error),
    #[error("failed to write greeting")]
    Output(#[from] std::io::Error),
}
