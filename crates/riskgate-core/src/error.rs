use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop a gate run.
///
/// Undecodable content is never one of these: it becomes a failing
/// `FileOutcome` instead (fail-closed).
#[derive(Debug, Error)]
pub enum GateError {
    #[error("failed to read source file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("worker thread panicked while evaluating sources")]
    WorkerPanicked,
}
