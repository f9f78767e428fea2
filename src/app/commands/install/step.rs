//! Running one external command as a pipeline step.

use crate::app::AppContext;
use crate::domain::{
    AppError, CommandSpec, ExitStatusPolicy, ProcessEvent, ProcessFailure, ProcessOutcome,
};
use crate::ports::{Console, LicenseService, ProcessRunner};

/// Run `spec` with the configured deadline, streaming its output to the console.
///
/// Timeouts are always fatal. A non-zero exit is fatal under `Strict` and a console
/// warning under `Lenient`.
pub(super) fn run_command<L, R, C>(
    ctx: &AppContext<L, R, C>,
    spec: CommandSpec,
) -> Result<(), AppError>
where
    L: LicenseService,
    R: ProcessRunner,
    C: Console,
{
    let process = &ctx.config().process;
    let spec = spec.timeout(process.timeout());
    let display = spec.display();

    let mut outcome = None;
    for event in ctx.runner().start(&spec)? {
        match event {
            ProcessEvent::Output(chunk) => ctx.console().output(&chunk),
            ProcessEvent::Finished(done) => {
                outcome = Some(done);
                break;
            }
        }
    }

    match outcome {
        Some(outcome) if outcome.success() => Ok(()),
        Some(ProcessOutcome::TimedOut) => {
            Err(AppError::process_failed(display, ProcessFailure::TimedOut(process.timeout_secs)))
        }
        Some(ProcessOutcome::Exited(code)) => match process.exit_status {
            ExitStatusPolicy::Strict => {
                Err(AppError::process_failed(display, ProcessFailure::ExitStatus(code)))
            }
            ExitStatusPolicy::Lenient => {
                let failure = ProcessFailure::ExitStatus(code);
                ctx.console().warn(&format!("'{display}' {failure}; continuing"));
                Ok(())
            }
        },
        None => Err(AppError::process_failed(
            display,
            ProcessFailure::Spawn("output closed before the command finished".to_string()),
        )),
    }
}
