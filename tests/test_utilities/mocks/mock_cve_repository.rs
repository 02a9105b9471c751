use cve_info_fetcher::prelude::*;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Mock CveRepository for testing
///
/// IDs without a configured response resolve to an empty document
/// (the lookup service's "unknown ID" answer).
#[derive(Default)]
pub struct MockCveRepository {
    documents: HashMap<String, Value>,
    failures: HashMap<String, String>,
    cancel_after: Option<(usize, CancellationToken)>,
    pub calls: Arc<AtomicUsize>,
    pub requested: Arc<Mutex<Vec<String>>>,
}

impl MockCveRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, cve_id: &str, document: Value) -> Self {
        self.documents.insert(cve_id.to_string(), document);
        self
    }

    pub fn with_failure(mut self, cve_id: &str, message: &str) -> Self {
        self.failures.insert(cve_id.to_string(), message.to_string());
        self
    }

    /// Cancels `token` while serving the `k`-th lookup
    pub fn cancelling_after(mut self, k: usize, token: CancellationToken) -> Self {
        self.cancel_after = Some((k, token));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested_ids(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl CveRepository for MockCveRepository {
    fn fetch_cve(&self, cve_id: &CveId) -> Result<LookupDocument> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.requested
            .lock()
            .unwrap()
            .push(cve_id.as_str().to_string());

        if let Some((k, token)) = &self.cancel_after {
            if call == *k {
                token.cancel();
            }
        }

        if let Some(message) = self.failures.get(cve_id.as_str()) {
            anyhow::bail!("{}", message);
        }

        Ok(self
            .documents
            .get(cve_id.as_str())
            .cloned()
            .map(LookupDocument::new)
            .unwrap_or_else(LookupDocument::empty))
    }
}
