use crate::enrichment::domain::EnrichedRecord;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cooperative cancellation flag shared between a run and its caller
///
/// Cloning yields another handle to the same flag. The orchestrator polls it
/// once per step; an in-flight lookup is never interrupted.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Lifecycle of a run: `Idle -> Running -> {Completed, Cancelled, Failed}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Idle,
    Running,
    Completed,
    Cancelled,
    Failed,
}

impl RunStatus {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            RunStatus::Completed | RunStatus::Cancelled | RunStatus::Failed
        )
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunStatus::Idle => write!(f, "idle"),
            RunStatus::Running => write!(f, "running"),
            RunStatus::Completed => write!(f, "completed"),
            RunStatus::Cancelled => write!(f, "cancelled"),
            RunStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Per-run mutable state, owned by the orchestrator for the duration of a run
#[derive(Debug)]
pub struct RunState {
    status: RunStatus,
    index: usize,
    records: Vec<EnrichedRecord>,
    cancellation: CancellationToken,
}

impl RunState {
    pub fn new(cancellation: CancellationToken) -> Self {
        Self {
            status: RunStatus::Idle,
            index: 0,
            records: Vec::new(),
            cancellation,
        }
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    /// Index of the next CVE ID to process
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn records(&self) -> &[EnrichedRecord] {
        &self.records
    }

    pub fn is_cancel_requested(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    pub fn start(&mut self) {
        debug_assert_eq!(self.status, RunStatus::Idle);
        self.status = RunStatus::Running;
    }

    /// Appends the record for the current index and advances
    pub fn push(&mut self, record: EnrichedRecord) {
        debug_assert_eq!(self.status, RunStatus::Running);
        self.records.push(record);
        self.index += 1;
    }

    pub fn finish(&mut self, status: RunStatus) {
        debug_assert!(status.is_terminal());
        self.status = status;
    }

    pub fn into_records(self) -> Vec<EnrichedRecord> {
        self.records
    }
}
