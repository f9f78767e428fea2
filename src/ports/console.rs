use crate::domain::OutputChunk;

/// Port for user-facing console output.
pub trait Console {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    /// Forward one line of child process output as it arrives.
    fn output(&self, chunk: &OutputChunk);
}
