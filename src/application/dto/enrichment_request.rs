use std::path::PathBuf;
use std::time::Duration;

/// Default minimum delay between two consecutive lookups
pub const DEFAULT_PACING: Duration = Duration::from_millis(500);

/// EnrichmentRequest - Internal request DTO for the enrichment use case
#[derive(Debug, Clone)]
pub struct EnrichmentRequest {
    /// CSV file whose first column holds candidate CVE IDs
    pub input_path: PathBuf,
    /// Minimum delay between consecutive lookups
    pub pacing: Duration,
}

impl EnrichmentRequest {
    pub fn new(input_path: PathBuf) -> Self {
        Self {
            input_path,
            pacing: DEFAULT_PACING,
        }
    }

    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }
}
