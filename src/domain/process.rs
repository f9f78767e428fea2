//! External command descriptions and the events a running command produces.

use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;
use std::time::Duration;

use super::license::REDACTED;

/// Deadline applied to every external command unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);

#[derive(Debug, Clone, PartialEq, Eq)]
struct CommandArg {
    value: String,
    secret: bool,
}

/// A program invocation: program, arguments, working directory, deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<CommandArg>,
    cwd: Option<PathBuf>,
    timeout: Duration,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into(), args: Vec::new(), cwd: None, timeout: DEFAULT_TIMEOUT }
    }

    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.args.push(CommandArg { value: value.into(), secret: false });
        self
    }

    pub fn args<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args
            .extend(values.into_iter().map(|v| CommandArg { value: v.into(), secret: false }));
        self
    }

    /// An argument that is passed to the program but never displayed.
    pub fn secret_arg(mut self, value: impl Into<String>) -> Self {
        self.args.push(CommandArg { value: value.into(), secret: true });
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arg_values(&self) -> impl Iterator<Item = &str> {
        self.args.iter().map(|a| a.value.as_str())
    }

    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    pub fn deadline(&self) -> Duration {
        self.timeout
    }

    /// Printable command line with secret arguments redacted.
    pub fn display(&self) -> String {
        let mut out = self.program.clone();
        for arg in &self.args {
            out.push(' ');
            out.push_str(if arg.secret { REDACTED } else { arg.value.as_str() });
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStream {
    Stdout,
    Stderr,
}

/// One line written by a child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputChunk {
    pub stream: OutputStream,
    pub line: String,
}

/// How a child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// Exit code, or `None` when terminated by a signal.
    Exited(Option<i32>),
    TimedOut,
}

impl ProcessOutcome {
    pub fn success(&self) -> bool {
        matches!(self, ProcessOutcome::Exited(Some(0)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessEvent {
    Output(OutputChunk),
    Finished(ProcessOutcome),
}

/// Events of one running command, in the order they happened.
///
/// Output arrives while the child runs; `Finished` is always the last event. Lines a
/// lingering descendant writes after a timeout are never yielded.
pub struct ProcessEvents {
    rx: Receiver<ProcessEvent>,
    finished: bool,
}

impl ProcessEvents {
    pub fn new(rx: Receiver<ProcessEvent>) -> Self {
        Self { rx, finished: false }
    }
}

impl Iterator for ProcessEvents {
    type Item = ProcessEvent;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let event = self.rx.recv().ok()?;
        self.finished = matches!(event, ProcessEvent::Finished(_));
        Some(event)
    }
}
