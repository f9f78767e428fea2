use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::mpsc;

use crate::domain::{
    AppError, CommandSpec, OutputChunk, OutputStream, ProcessEvent, ProcessEvents, ProcessOutcome,
};
use crate::ports::ProcessRunner;

type StartHook = Box<dyn Fn(&CommandSpec)>;

/// Process runner that records every command instead of spawning it.
///
/// Each start emits one stdout line followed by the next scripted outcome (success when
/// the script is exhausted). An optional hook runs first, e.g. to fake a scaffold.
#[derive(Default)]
pub struct FakeProcessRunner {
    pub spawned: Mutex<Vec<CommandSpec>>,
    outcomes: Mutex<VecDeque<ProcessOutcome>>,
    hook: Option<StartHook>,
}

impl FakeProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hook(mut self, hook: impl Fn(&CommandSpec) + 'static) -> Self {
        self.hook = Some(Box::new(hook));
        self
    }

    /// Queue the outcome of the next unscripted start.
    pub fn then(self, outcome: ProcessOutcome) -> Self {
        self.outcomes.lock().unwrap().push_back(outcome);
        self
    }

    pub fn spawn_count(&self) -> usize {
        self.spawned.lock().unwrap().len()
    }

    pub fn displays(&self) -> Vec<String> {
        self.spawned.lock().unwrap().iter().map(CommandSpec::display).collect()
    }
}

impl ProcessRunner for FakeProcessRunner {
    fn start(&self, spec: &CommandSpec) -> Result<ProcessEvents, AppError> {
        self.spawned.lock().unwrap().push(spec.clone());
        if let Some(hook) = &self.hook {
            hook(spec);
        }

        let outcome =
            self.outcomes.lock().unwrap().pop_front().unwrap_or(ProcessOutcome::Exited(Some(0)));
        let (tx, rx) = mpsc::channel();
        tx.send(ProcessEvent::Output(OutputChunk {
            stream: OutputStream::Stdout,
            line: format!("ran {}", spec.program()),
        }))
        .unwrap();
        tx.send(ProcessEvent::Finished(outcome)).unwrap();
        Ok(ProcessEvents::new(rx))
    }
}
