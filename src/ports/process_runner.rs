use crate::domain::{AppError, CommandSpec, ProcessEvents};

/// Port for running external commands.
pub trait ProcessRunner {
    /// Start `spec` and return its event stream.
    ///
    /// Output events arrive while the child runs. The stream always ends with exactly one
    /// `Finished` event; a child that outlives its deadline is killed and reported as
    /// `TimedOut`.
    fn start(&self, spec: &CommandSpec) -> Result<ProcessEvents, AppError>;
}
