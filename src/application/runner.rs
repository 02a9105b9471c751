use crate::adapters::outbound::channel::ChannelProgressReporter;
use crate::application::dto::EnrichmentRequest;
use crate::application::use_cases::EnrichCvesUseCase;
use crate::application::{CancellationToken, RunStatus};
use crate::ports::inbound::EnrichmentPort;
use crate::ports::outbound::{CveRepository, InputReader, LookupProgress, ResultSink};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use thiserror::Error;
use uuid::Uuid;

/// Events emitted by a background run, in order
///
/// Every run ends with exactly one `Finished` or `Failed` event.
#[derive(Debug, Clone, PartialEq)]
pub enum RunEvent {
    /// Input validated; `total` CVE IDs will be processed
    Started { run_id: Uuid, total: usize },
    /// Informational message (input loaded, etc.)
    Message(String),
    /// Warning that does not stop the run (e.g. input rows skipped)
    Warning(String),
    /// One CVE ID processed
    Progress(LookupProgress),
    /// Closing summary, sent right before `Finished`
    Completion(String),
    /// Output written; `status` is `Completed` or `Cancelled`
    Finished {
        status: RunStatus,
        output_path: PathBuf,
        processed: usize,
        total: usize,
    },
    /// Setup or output failure; nothing (or nothing complete) was written
    Failed { message: String },
}

impl RunEvent {
    /// Final status carried by a terminal event, `None` for every other event
    pub fn terminal_status(&self) -> Option<RunStatus> {
        match self {
            RunEvent::Finished { status, .. } => Some(*status),
            RunEvent::Failed { .. } => Some(RunStatus::Failed),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("An enrichment run is already in progress\n\n💡 Hint: Wait for it to finish or cancel it before starting another")]
    AlreadyRunning,

    #[error("Failed to start worker thread: {0}")]
    Spawn(String),
}

/// Caller-side handle to a background run
pub struct RunHandle {
    run_id: Uuid,
    cancellation: CancellationToken,
    events: Receiver<RunEvent>,
    worker: JoinHandle<()>,
}

impl RunHandle {
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Requests cooperative cancellation; takes effect before the next lookup
    pub fn cancel(&self) {
        self.cancellation.cancel();
    }

    /// Token that can be moved elsewhere (e.g. a Ctrl-C handler)
    pub fn cancellation(&self) -> CancellationToken {
        self.cancellation.clone()
    }

    /// Blocks until the terminal event arrives, passing every event to `on_event`
    ///
    /// Returns the terminal event, or a `Failed` event if the worker went
    /// away without sending one.
    pub fn wait_with<F>(self, mut on_event: F) -> RunEvent
    where
        F: FnMut(&RunEvent),
    {
        let mut terminal = None;
        for event in self.events.iter() {
            on_event(&event);
            if event.terminal_status().is_some() {
                terminal = Some(event);
                break;
            }
        }
        let _ = self.worker.join();

        terminal.unwrap_or_else(|| RunEvent::Failed {
            message: "Enrichment worker stopped unexpectedly".to_string(),
        })
    }
}

/// Releases the Idle/Running gate when the worker finishes or unwinds
struct ActiveRunGuard(Arc<AtomicBool>);

impl Drop for ActiveRunGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// EnrichmentRunner - runs the enrichment use case on a dedicated worker thread
///
/// At most one run is active per runner; a second `start_run` while one is
/// in progress is rejected.
pub struct EnrichmentRunner<IR, CR, RS> {
    use_case: Arc<EnrichCvesUseCase<IR, CR, RS>>,
    active: Arc<AtomicBool>,
}

impl<IR, CR, RS> EnrichmentRunner<IR, CR, RS>
where
    IR: InputReader + 'static,
    CR: CveRepository + 'static,
    RS: ResultSink + 'static,
{
    pub fn new(use_case: EnrichCvesUseCase<IR, CR, RS>) -> Self {
        Self {
            use_case: Arc::new(use_case),
            active: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl<IR, CR, RS> EnrichmentPort for EnrichmentRunner<IR, CR, RS>
where
    IR: InputReader + 'static,
    CR: CveRepository + 'static,
    RS: ResultSink + 'static,
{
    fn start_run(&self, request: EnrichmentRequest) -> Result<RunHandle, RunError> {
        if self
            .active
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(RunError::AlreadyRunning);
        }
        let guard = ActiveRunGuard(Arc::clone(&self.active));

        let run_id = Uuid::new_v4();
        let cancellation = CancellationToken::new();
        let (sender, events) = mpsc::channel();

        let use_case = Arc::clone(&self.use_case);
        let token = cancellation.clone();

        let worker = thread::Builder::new()
            .name(format!("cve-run-{}", run_id))
            .spawn(move || {
                let span = tracing::info_span!("run", %run_id);
                let _entered = span.enter();

                let reporter = ChannelProgressReporter::new(run_id, sender.clone());
                let terminal = match use_case.execute(request, token, &reporter) {
                    Ok(response) => RunEvent::Finished {
                        status: response.status,
                        processed: response.processed(),
                        total: response.total,
                        output_path: response.output_path,
                    },
                    Err(e) => {
                        let message = format!("{:#}", e);
                        tracing::error!(error = %message, "enrichment run failed");
                        RunEvent::Failed { message }
                    }
                };

                // Reopen the gate before the caller can observe the terminal event
                drop(guard);
                let _ = sender.send(terminal);
            })
            .map_err(|e| RunError::Spawn(e.to_string()))?;

        Ok(RunHandle {
            run_id,
            cancellation,
            events,
            worker,
        })
    }

    fn is_running(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}
