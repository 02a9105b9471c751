use crate::enrichment::domain::{CveId, LookupOutcome};

/// Progress of one processed CVE ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupProgress {
    /// 1-based position in the run
    pub index: usize,
    pub total: usize,
    pub cve_id: CveId,
    pub outcome: LookupOutcome,
}

/// ProgressReporter port for reporting progress during a run
///
/// This port abstracts progress reporting (e.g., to stderr or to the
/// event channel of a background run).
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports that `total` CVE IDs are about to be processed
    fn report_started(&self, total: usize);

    /// Reports the outcome of one lookup
    fn report_progress(&self, progress: &LookupProgress);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}
