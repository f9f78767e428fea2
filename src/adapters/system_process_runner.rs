use std::io::{BufRead, BufReader, Read};
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crate::domain::{
    AppError, CommandSpec, OutputChunk, OutputStream, ProcessEvent, ProcessEvents, ProcessFailure,
    ProcessOutcome,
};
use crate::ports::ProcessRunner;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs commands as child processes of the installer.
///
/// Each stream is read on its own thread and forwarded line by line over a channel; a
/// supervisor thread enforces the deadline and sends the final `Finished` event. The
/// deadline covers both the child and any descendant still holding its output pipes.
#[derive(Debug, Clone, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn start(&self, spec: &CommandSpec) -> Result<ProcessEvents, AppError> {
        let mut command = Command::new(spec.program());
        command
            .args(spec.arg_values())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = spec.cwd() {
            command.current_dir(dir);
        }

        tracing::debug!(command = %spec.display(), cwd = ?spec.cwd(), "spawning");
        let started = Instant::now();
        let mut child = command.spawn().map_err(|e| {
            AppError::process_failed(spec.display(), ProcessFailure::Spawn(e.to_string()))
        })?;

        let (tx, rx) = mpsc::channel();
        let (closed_tx, closed_rx) = mpsc::channel();
        let mut open_streams = 0;
        if let Some(stdout) = child.stdout.take() {
            forward_lines(stdout, OutputStream::Stdout, tx.clone(), closed_tx.clone());
            open_streams += 1;
        }
        if let Some(stderr) = child.stderr.take() {
            forward_lines(stderr, OutputStream::Stderr, tx.clone(), closed_tx.clone());
            open_streams += 1;
        }
        drop(closed_tx);

        let deadline = started + spec.deadline();
        let shown = spec.display();
        thread::spawn(move || {
            let mut outcome = supervise(&mut child, deadline);
            // Descendants may inherit the pipes and outlive the child.
            if outcome != ProcessOutcome::TimedOut
                && !drain_until(&closed_rx, open_streams, deadline)
            {
                tracing::warn!(command = %shown, "output still open at deadline");
                outcome = ProcessOutcome::TimedOut;
            }
            tracing::debug!(command = %shown, ?outcome, "finished");
            let _ = tx.send(ProcessEvent::Finished(outcome));
        });

        Ok(ProcessEvents::new(rx))
    }
}

fn forward_lines<R>(
    source: R,
    stream: OutputStream,
    tx: Sender<ProcessEvent>,
    closed: Sender<OutputStream>,
) where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let mut reader = BufReader::new(source);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {
                    let line = String::from_utf8_lossy(&buf);
                    let line = line.trim_end_matches(['\n', '\r']).to_string();
                    if tx.send(ProcessEvent::Output(OutputChunk { stream, line })).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    tracing::debug!(error = %err, ?stream, "stopped reading child output");
                    break;
                }
            }
        }
        let _ = closed.send(stream);
    });
}

/// Wait for `open` streams to close. `false` when the deadline passes first.
fn drain_until(closed: &Receiver<OutputStream>, mut open: usize, deadline: Instant) -> bool {
    while open > 0 {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match closed.recv_timeout(remaining) {
            Ok(_) => open -= 1,
            Err(RecvTimeoutError::Timeout) => return false,
            Err(RecvTimeoutError::Disconnected) => return true,
        }
    }
    true
}

fn supervise(child: &mut Child, deadline: Instant) -> ProcessOutcome {
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return ProcessOutcome::Exited(status.code()),
            Ok(None) if Instant::now() >= deadline => {
                let _ = child.kill();
                let _ = child.wait();
                return ProcessOutcome::TimedOut;
            }
            Ok(None) => thread::sleep(POLL_INTERVAL),
            Err(err) => {
                tracing::warn!(error = %err, "lost track of child process");
                let _ = child.kill();
                let _ = child.wait();
                return ProcessOutcome::Exited(None);
            }
        }
    }
}
