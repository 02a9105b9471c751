use chrono::{DateTime, Local};
use cve_info_fetcher::prelude::*;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock ResultSink for testing that captures the written table
#[derive(Default, Clone)]
pub struct MockResultSink {
    pub headers: Arc<Mutex<Vec<String>>>,
    pub rows: Arc<Mutex<Vec<Vec<String>>>>,
    pub writes: Arc<Mutex<usize>>,
    should_fail: bool,
}

impl MockResultSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn written_headers(&self) -> Vec<String> {
        self.headers.lock().unwrap().clone()
    }

    pub fn written_rows(&self) -> Vec<Vec<String>> {
        self.rows.lock().unwrap().clone()
    }

    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }
}

impl ResultSink for MockResultSink {
    fn write(
        &self,
        headers: &[String],
        records: &[EnrichedRecord],
        captured_at: DateTime<Local>,
    ) -> Result<PathBuf> {
        if self.should_fail {
            anyhow::bail!("Mock result sink failure");
        }
        *self.writes.lock().unwrap() += 1;
        *self.headers.lock().unwrap() = headers.to_vec();
        *self.rows.lock().unwrap() = records.iter().map(|r| r.to_row()).collect();
        Ok(PathBuf::from(CsvResultSink::file_name(captured_at)))
    }
}
