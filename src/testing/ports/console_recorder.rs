use std::sync::Mutex;

use crate::domain::OutputChunk;
use crate::ports::Console;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

/// Console that keeps every message for assertions.
#[derive(Default)]
pub struct RecordingConsole {
    pub messages: Mutex<Vec<(Level, String)>>,
    pub output: Mutex<Vec<OutputChunk>>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    fn at(&self, level: Level) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn infos(&self) -> Vec<String> {
        self.at(Level::Info)
    }

    pub fn warnings(&self) -> Vec<String> {
        self.at(Level::Warn)
    }
}

impl Console for RecordingConsole {
    fn info(&self, message: &str) {
        self.messages.lock().unwrap().push((Level::Info, message.to_string()));
    }

    fn warn(&self, message: &str) {
        self.messages.lock().unwrap().push((Level::Warn, message.to_string()));
    }

    fn error(&self, message: &str) {
        self.messages.lock().unwrap().push((Level::Error, message.to_string()));
    }

    fn output(&self, chunk: &OutputChunk) {
        self.output.lock().unwrap().push(chunk.clone());
    }
}
