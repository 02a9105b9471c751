use crate::ports::outbound::InputReader;
use crate::shared::error::FetcherError;
use crate::shared::security::{validate_input_file, MAX_INPUT_FILE_SIZE};
use crate::shared::Result;
use std::path::Path;

/// CsvInputReader adapter for reading the CVE list from a CSV file
///
/// Records are returned raw, header first; rows may have any number of
/// cells. Identifier validation happens in the domain layer.
pub struct CsvInputReader {
    max_file_size: u64,
}

impl CsvInputReader {
    pub fn new() -> Self {
        Self {
            max_file_size: MAX_INPUT_FILE_SIZE,
        }
    }
}

impl Default for CsvInputReader {
    fn default() -> Self {
        Self::new()
    }
}

impl InputReader for CsvInputReader {
    fn read_rows(&self, path: &Path) -> Result<Vec<Vec<String>>> {
        // Security checks: regular file, no symlink, bounded size
        validate_input_file(path, self.max_file_size)?;

        let read_error = |details: String| FetcherError::FileReadError {
            path: path.to_path_buf(),
            details,
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .map_err(|e| read_error(e.to_string()))?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| read_error(e.to_string()))?;
            rows.push(record.iter().map(|cell| cell.to_string()).collect());
        }

        tracing::debug!(path = %path.display(), rows = rows.len(), "input file read");
        Ok(rows)
    }
}
