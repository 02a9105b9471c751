use crate::application::RunStatus;
use crate::enrichment::domain::EnrichedRecord;
use std::path::PathBuf;

/// EnrichmentResponse - Result of a run that reached the output stage
///
/// Only `Completed` and `Cancelled` runs produce a response; setup and
/// output failures surface as errors instead.
#[derive(Debug, Clone)]
pub struct EnrichmentResponse {
    pub status: RunStatus,
    pub output_path: PathBuf,
    pub records: Vec<EnrichedRecord>,
    /// Number of valid CVE IDs in the input
    pub total: usize,
}

impl EnrichmentResponse {
    pub fn processed(&self) -> usize {
        self.records.len()
    }
}
