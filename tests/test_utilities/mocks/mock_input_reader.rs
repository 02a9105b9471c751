use cve_info_fetcher::prelude::*;
use std::path::Path;

/// Mock InputReader for testing
pub struct MockInputReader {
    rows: Vec<Vec<String>>,
    should_fail: bool,
}

impl MockInputReader {
    pub fn new(rows: &[&[&str]]) -> Self {
        Self {
            rows: rows
                .iter()
                .map(|row| row.iter().map(|cell| cell.to_string()).collect())
                .collect(),
            should_fail: false,
        }
    }

    /// Single-column input with an "ID" header
    pub fn with_ids(ids: &[&str]) -> Self {
        let mut rows = vec![vec!["ID".to_string()]];
        rows.extend(ids.iter().map(|id| vec![id.to_string()]));
        Self {
            rows,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            rows: Vec::new(),
            should_fail: true,
        }
    }
}

impl InputReader for MockInputReader {
    fn read_rows(&self, _path: &Path) -> Result<Vec<Vec<String>>> {
        if self.should_fail {
            anyhow::bail!("Mock input reader failure");
        }
        Ok(self.rows.clone())
    }
}
