use colored::Colorize;

use crate::domain::{OutputChunk, OutputStream};
use crate::ports::Console;

/// Styled terminal output. Child output keeps its original stream.
#[derive(Debug, Clone, Default)]
pub struct TerminalConsole;

impl TerminalConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for TerminalConsole {
    fn info(&self, message: &str) {
        println!("{}", message.green());
    }

    fn warn(&self, message: &str) {
        eprintln!("{}", message.yellow());
    }

    fn error(&self, message: &str) {
        eprintln!("{}", message.red());
    }

    fn output(&self, chunk: &OutputChunk) {
        match chunk.stream {
            OutputStream::Stdout => println!("{}", chunk.line),
            OutputStream::Stderr => eprintln!("{}", chunk.line),
        }
    }
}
