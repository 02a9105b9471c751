use crate::enrichment::domain::{EnrichedRecord, ENRICHMENT_HEADERS};
use crate::ports::outbound::ResultSink;
use crate::shared::error::FetcherError;
use crate::shared::security::validate_output_path;
use crate::shared::Result;
use chrono::{DateTime, Local};
use std::fs::{File, OpenOptions};
use std::io;
use std::path::PathBuf;

/// Upper bound on `Output_<ts>_<n>.csv` names tried for one timestamp
const MAX_NAME_ATTEMPTS: usize = 100;

/// CsvResultSink adapter for writing enriched records to a timestamped CSV file
///
/// Files are named `Output_<YYYYMMDD_HHMMSS>.csv` after the run start time.
/// Existing files are never truncated: when two runs start in the same
/// second, the later one gets `Output_<YYYYMMDD_HHMMSS>_2.csv` and so on.
pub struct CsvResultSink {
    output_dir: PathBuf,
}

impl CsvResultSink {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// Output file name for a run started at `captured_at`
    pub fn file_name(captured_at: DateTime<Local>) -> String {
        format!("Output_{}.csv", captured_at.format("%Y%m%d_%H%M%S"))
    }

    /// Name for the `attempt`-th candidate; the first one carries no suffix
    fn numbered_file_name(captured_at: DateTime<Local>, attempt: usize) -> String {
        match attempt {
            1 => Self::file_name(captured_at),
            n => format!("Output_{}_{}.csv", captured_at.format("%Y%m%d_%H%M%S"), n),
        }
    }

    /// Creates a fresh output file, moving to the next numbered name while
    /// the candidate already exists
    fn create_output_file(&self, captured_at: DateTime<Local>) -> Result<(PathBuf, File)> {
        for attempt in 1..=MAX_NAME_ATTEMPTS {
            let path = self
                .output_dir
                .join(Self::numbered_file_name(captured_at, attempt));

            // Security validations
            validate_output_path(&path)?;

            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => return Ok((path, file)),
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    tracing::debug!(path = %path.display(), "output file exists, trying next name");
                }
                Err(e) => {
                    return Err(FetcherError::FileWriteError {
                        path,
                        details: e.to_string(),
                    }
                    .into())
                }
            }
        }

        Err(FetcherError::FileWriteError {
            path: self.output_dir.join(Self::file_name(captured_at)),
            details: format!(
                "{} output files for this timestamp already exist",
                MAX_NAME_ATTEMPTS
            ),
        }
        .into())
    }

    fn write_rows(
        file: File,
        headers: &[String],
        records: &[EnrichedRecord],
    ) -> std::result::Result<(), csv::Error> {
        let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(file);

        let header_row = headers
            .iter()
            .map(String::as_str)
            .chain(ENRICHMENT_HEADERS.iter().copied());
        writer.write_record(header_row)?;

        for record in records {
            writer.write_record(record.to_row())?;
        }

        writer.flush()?;
        Ok(())
    }
}

impl ResultSink for CsvResultSink {
    fn write(
        &self,
        headers: &[String],
        records: &[EnrichedRecord],
        captured_at: DateTime<Local>,
    ) -> Result<PathBuf> {
        let (path, file) = self.create_output_file(captured_at)?;

        Self::write_rows(file, headers, records).map_err(|e| FetcherError::FileWriteError {
            path: path.clone(),
            details: e.to_string(),
        })?;

        tracing::info!(path = %path.display(), rows = records.len(), "output written");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrichment::domain::{CveId, EnrichmentFields, LookupOutcome};
    use chrono::TimeZone;
    use std::fs;
    use tempfile::TempDir;

    fn captured_at() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 8, 15, 9, 5, 7).unwrap()
    }

    fn record(id: &str, passthrough: &[&str], fields: EnrichmentFields) -> EnrichedRecord {
        EnrichedRecord::new(
            CveId::new(id).unwrap(),
            passthrough.iter().map(|s| s.to_string()).collect(),
            fields,
            LookupOutcome::Success,
        )
    }

    #[test]
    fn test_file_name_embeds_timestamp() {
        assert_eq!(
            CsvResultSink::file_name(captured_at()),
            "Output_20250815_090507.csv"
        );
    }

    #[test]
    fn test_write_success() {
        let temp_dir = TempDir::new().unwrap();
        let sink = CsvResultSink::new(temp_dir.path().to_path_buf());
        let records = vec![
            record(
                "CVE-2021-44228",
                &["web-01"],
                EnrichmentFields {
                    title: "Log4Shell".to_string(),
                    description: "JNDI, LDAP and \"lookups\"".to_string(),
                    cvss_score: "10.0".to_string(),
                    exploit_available: "Yes".to_string(),
                    cwe: "CWE-502".to_string(),
                    references: "https://a.example;https://b.example".to_string(),
                },
            ),
            record("CVE-2099-0001", &["db-01"], EnrichmentFields::not_found()),
        ];

        let path = sink
            .write(
                &["ID".to_string(), "Asset".to_string()],
                &records,
                captured_at(),
            )
            .unwrap();

        assert_eq!(path, temp_dir.path().join("Output_20250815_090507.csv"));

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(
            headers,
            vec![
                "ID",
                "Asset",
                "Title",
                "Description",
                "CVSS Score",
                "Exploit Available",
                "CWE",
                "References"
            ]
        );

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "CVE-2021-44228");
        assert_eq!(&rows[0][3], "JNDI, LDAP and \"lookups\"");
        assert_eq!(&rows[1][2], "Not Found");
    }

    #[test]
    fn test_write_header_only_when_no_records() {
        let temp_dir = TempDir::new().unwrap();
        let sink = CsvResultSink::new(temp_dir.path().to_path_buf());

        let path = sink.write(&["ID".to_string()], &[], captured_at()).unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert_eq!(
            content,
            "ID,Title,Description,CVSS Score,Exploit Available,CWE,References\n"
        );
    }

    #[test]
    fn test_write_same_timestamp_keeps_earlier_output() {
        let temp_dir = TempDir::new().unwrap();
        let sink = CsvResultSink::new(temp_dir.path().to_path_buf());
        let headers = ["ID".to_string()];

        let first = sink
            .write(
                &headers,
                &[record("CVE-2021-44228", &[], EnrichmentFields::not_found())],
                captured_at(),
            )
            .unwrap();
        let second = sink.write(&headers, &[], captured_at()).unwrap();
        let third = sink.write(&headers, &[], captured_at()).unwrap();

        assert_eq!(first, temp_dir.path().join("Output_20250815_090507.csv"));
        assert_eq!(second, temp_dir.path().join("Output_20250815_090507_2.csv"));
        assert_eq!(third, temp_dir.path().join("Output_20250815_090507_3.csv"));

        let mut reader = csv::Reader::from_path(&first).unwrap();
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "CVE-2021-44228");
    }

    #[test]
    fn test_write_missing_directory() {
        let sink = CsvResultSink::new(PathBuf::from("/nonexistent/output/dir"));
        let result = sink.write(&["ID".to_string()], &[], captured_at());

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Parent directory does not exist"));
    }
}
