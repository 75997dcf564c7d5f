//! Background check worker
//!
//! Runs a [`CheckDirectoryUseCase`] on its own thread. The caller only
//! submits the job and listens for [`CheckEvent`]s on a channel.

use crate::application::cancellation::CancellationToken;
use crate::application::check_directory::{CheckDirectoryUseCase, CheckEvent};
use crate::application::dto::{CheckOptions, CheckSummary};
use crate::core::error::CheckError;
use crate::domain::repositories::{FileMover, FileSource};
use crossbeam_channel::{Receiver, unbounded};
use std::path::PathBuf;
use std::thread::{self, JoinHandle};

/// Handle on a running check
pub struct CheckHandle {
    events: Receiver<CheckEvent>,
    thread: JoinHandle<()>,
}

impl CheckHandle {
    /// Blocks until the run ends and returns its outcome
    pub fn wait(self) -> Result<CheckSummary, CheckError> {
        self.wait_with(|_| {})
    }

    /// Like [`wait`](Self::wait), passing every event to `on_event` first
    pub fn wait_with<F>(self, mut on_event: F) -> Result<CheckSummary, CheckError>
    where
        F: FnMut(&CheckEvent),
    {
        let mut outcome = Err(CheckError::WorkerLost);
        for event in self.events.iter() {
            on_event(&event);
            match event {
                CheckEvent::Finished(summary) => outcome = Ok(summary),
                CheckEvent::Failed(message) => outcome = Err(CheckError::Aborted(message)),
                CheckEvent::Progress(_) | CheckEvent::FileChecked(_) => {}
            }
        }
        if self.thread.join().is_err() {
            tracing::error!("Check worker panicked");
        }
        outcome
    }
}

/// Starts checking `dir` on a background thread
pub fn spawn_check<S, M>(
    use_case: CheckDirectoryUseCase<S, M>,
    dir: PathBuf,
    options: CheckOptions,
    cancel: CancellationToken,
) -> CheckHandle
where
    S: FileSource + 'static,
    M: FileMover + 'static,
{
    let (tx, rx) = unbounded();

    let thread = thread::spawn(move || {
        let progress_tx = tx.clone();
        let result = use_case.execute(&dir, &options, &cancel, |event| {
            let _ = progress_tx.send(event);
        });
        let last = match result {
            Ok(summary) => CheckEvent::Finished(summary),
            Err(e) => CheckEvent::Failed(e.to_string()),
        };
        let _ = tx.send(last);
    });

    CheckHandle {
        events: rx,
        thread,
    }
}
