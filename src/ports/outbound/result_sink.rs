use crate::enrichment::domain::EnrichedRecord;
use crate::shared::Result;
use chrono::{DateTime, Local};
use std::path::PathBuf;

/// ResultSink port for persisting the enriched records
pub trait ResultSink: Send + Sync {
    /// Writes the header row and one row per record, in order
    ///
    /// # Arguments
    /// * `headers` - Original input headers; enrichment column names are appended
    /// * `records` - Records in accumulation order
    /// * `captured_at` - Run start time, embedded in the artifact name
    ///
    /// # Returns
    /// Path of the written artifact
    ///
    /// # Errors
    /// Any write failure. Callers treat it as fatal and do not retry.
    fn write(
        &self,
        headers: &[String],
        records: &[EnrichedRecord],
        captured_at: DateTime<Local>,
    ) -> Result<PathBuf>;
}
