use crate::enrichment::domain::{CveId, LookupDocument};
use crate::shared::Result;

/// CveRepository port for looking up a single CVE record
///
/// This port abstracts the remote lookup service. Implementations own
/// their retry policy; callers see either a document or a final failure.
pub trait CveRepository: Send + Sync {
    /// Fetches the raw record for one CVE ID
    ///
    /// # Returns
    /// The response body as a loosely typed document. A reachable service
    /// that returns an empty or unparseable body yields an empty document,
    /// not an error.
    ///
    /// # Errors
    /// Returns an error if every attempt failed at the transport level
    /// (connection error, timeout, non-2xx status). The error text is used
    /// verbatim in the output row, so it should be human readable.
    fn fetch_cve(&self, cve_id: &CveId) -> Result<LookupDocument>;
}
