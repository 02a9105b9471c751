use crate::enrichment::domain::{CveId, InputRow, InputTable};
use crate::shared::error::FetcherError;
use crate::shared::Result;
use std::path::Path;

/// IdentifierValidator - filters raw tabular input down to valid CVE IDs
///
/// The first row is the header, whatever its cells hold. Every following row
/// whose first cell is a well-formed CVE ID is kept (normalized), the rest
/// are dropped silently.
pub struct IdentifierValidator;

impl IdentifierValidator {
    /// Validates raw rows read from `source`
    ///
    /// # Errors
    /// Returns an error if there is no header row at all, or if no row
    /// carries a valid CVE ID. Both are setup errors: the run never starts.
    pub fn validate(source: &Path, rows: Vec<Vec<String>>) -> Result<InputTable> {
        let mut rows = rows.into_iter();

        let headers = match rows.next() {
            Some(header) if !header.is_empty() => header,
            _ => {
                return Err(FetcherError::MissingHeader {
                    path: source.to_path_buf(),
                }
                .into())
            }
        };

        let width = headers.len();
        let valid_rows: Vec<InputRow> = rows
            .filter_map(|row| Self::validate_row(row, width))
            .collect();

        let table = InputTable::new(headers, valid_rows);
        if table.is_empty() {
            return Err(FetcherError::NoValidIdentifiers {
                path: source.to_path_buf(),
            }
            .into());
        }

        Ok(table)
    }

    /// Keeps a row only if its first cell is a CVE ID; the remaining cells are
    /// padded or truncated to the header width
    fn validate_row(row: Vec<String>, width: usize) -> Option<InputRow> {
        let mut cells = row.into_iter();
        let cve_id = CveId::new(&cells.next()?).ok()?;

        let extra_width = width.saturating_sub(1);
        let mut passthrough: Vec<String> = cells.take(extra_width).collect();
        passthrough.resize(extra_width, String::new());

        Some(InputRow::new(cve_id, passthrough))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    fn source() -> &'static Path {
        Path::new("ids.csv")
    }

    #[test]
    fn test_validate_filters_malformed_ids() {
        let input = rows(&[
            &["ID"],
            &["CVE-2021-44228"],
            &["not-an-id"],
            &["CVE-1999-0001"],
        ]);

        let table = IdentifierValidator::validate(source(), input).unwrap();
        let ids: Vec<&str> = table.rows().iter().map(|row| row.cve_id.as_str()).collect();
        assert_eq!(ids, vec!["CVE-2021-44228", "CVE-1999-0001"]);
        assert_eq!(table.headers(), &["ID".to_string()]);
    }

    #[test]
    fn test_validate_normalizes_ids() {
        let input = rows(&[&["ID"], &["cve-2023-4863"]]);
        let table = IdentifierValidator::validate(source(), input).unwrap();
        assert_eq!(table.rows()[0].cve_id.as_str(), "CVE-2023-4863");
    }

    #[test]
    fn test_validate_excludes_space_padded_ids() {
        let input = rows(&[
            &["ID"],
            &[" CVE-2021-44228 "],
            &["CVE-2014-0160"],
            &["\tcve-2022-22965"],
        ]);
        let table = IdentifierValidator::validate(source(), input).unwrap();
        let ids: Vec<&str> = table.rows().iter().map(|row| row.cve_id.as_str()).collect();
        assert_eq!(ids, vec!["CVE-2014-0160"]);

        let only_padded = rows(&[&["ID"], &[" CVE-2021-44228 "]]);
        let err = IdentifierValidator::validate(source(), only_padded).unwrap_err();
        assert!(err.to_string().contains("No valid CVE IDs found"));
    }

    #[test]
    fn test_validate_keeps_input_order_and_duplicates() {
        let input = rows(&[
            &["ID"],
            &["CVE-2020-0002"],
            &["CVE-2020-0001"],
            &["CVE-2020-0002"],
        ]);
        let table = IdentifierValidator::validate(source(), input).unwrap();
        let ids: Vec<&str> = table.rows().iter().map(|row| row.cve_id.as_str()).collect();
        assert_eq!(ids, vec!["CVE-2020-0002", "CVE-2020-0001", "CVE-2020-0002"]);
    }

    #[test]
    fn test_validate_passthrough_columns_padded_and_truncated() {
        let input = rows(&[
            &["ID", "Asset", "Owner"],
            &["CVE-2021-44228", "web-01"],
            &["CVE-2014-0160", "lb-02", "ops", "extra"],
        ]);
        let table = IdentifierValidator::validate(source(), input).unwrap();
        assert_eq!(
            table.rows()[0].passthrough,
            vec!["web-01".to_string(), String::new()]
        );
        assert_eq!(
            table.rows()[1].passthrough,
            vec!["lb-02".to_string(), "ops".to_string()]
        );
    }

    #[test]
    fn test_validate_skips_empty_rows() {
        let input = rows(&[&["ID"], &[], &[""], &["CVE-2021-44228"]]);
        let table = IdentifierValidator::validate(source(), input).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_validate_no_header() {
        let err = IdentifierValidator::validate(source(), vec![]).unwrap_err();
        assert!(err.to_string().contains("at least one header"));
    }

    #[test]
    fn test_validate_empty_header_row() {
        let err = IdentifierValidator::validate(source(), rows(&[&[], &["CVE-2021-44228"]]))
            .unwrap_err();
        assert!(err.to_string().contains("at least one header"));
    }

    #[test]
    fn test_validate_accepts_header_of_empty_cells() {
        let input = rows(&[&["", ""], &["CVE-2021-44228", "web-01"]]);
        let table = IdentifierValidator::validate(source(), input).unwrap();
        assert_eq!(table.headers(), &[String::new(), String::new()]);
        assert_eq!(table.rows()[0].passthrough, vec!["web-01".to_string()]);
    }

    #[test]
    fn test_validate_no_valid_ids() {
        let input = rows(&[&["ID"], &["foo"], &["CVE-21-1"]]);
        let err = IdentifierValidator::validate(source(), input).unwrap_err();
        assert!(err.to_string().contains("No valid CVE IDs found"));
    }

    #[test]
    fn test_validate_header_only() {
        let err = IdentifierValidator::validate(source(), rows(&[&["ID"]])).unwrap_err();
        assert!(err.to_string().contains("No valid CVE IDs found"));
    }
}
