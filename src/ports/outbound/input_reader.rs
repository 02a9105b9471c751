use crate::shared::Result;
use std::path::Path;

/// InputReader port for reading the tabular CVE list
pub trait InputReader: Send + Sync {
    /// Reads every record of the input file, header row first
    ///
    /// # Errors
    /// Returns an error if the file is missing, unsafe to read, or not
    /// valid delimited text
    fn read_rows(&self, path: &Path) -> Result<Vec<Vec<String>>>;
}
