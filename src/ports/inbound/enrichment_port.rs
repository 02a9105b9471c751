use crate::application::dto::EnrichmentRequest;
use crate::application::{RunError, RunHandle};

/// EnrichmentPort - Inbound port for starting and cancelling enrichment runs
///
/// This is the boundary offered to presentation layers (CLI, GUI, service).
/// A run executes in the background; progress and the final status arrive
/// as `RunEvent`s on the returned handle.
pub trait EnrichmentPort {
    /// Starts a run for the CSV file named in `request`
    ///
    /// # Errors
    /// Returns `RunError::AlreadyRunning` if a run is still active
    fn start_run(&self, request: EnrichmentRequest) -> Result<RunHandle, RunError>;

    /// Requests cooperative cancellation of a run
    ///
    /// Records processed so far are still written.
    fn cancel(&self, handle: &RunHandle) {
        handle.cancel();
    }

    /// Returns true while a run is active
    fn is_running(&self) -> bool;
}
