use super::CveId;

/// A validated input row: the CVE ID plus the remaining cells of the row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRow {
    pub cve_id: CveId,
    pub passthrough: Vec<String>,
}

impl InputRow {
    pub fn new(cve_id: CveId, passthrough: Vec<String>) -> Self {
        Self {
            cve_id,
            passthrough,
        }
    }
}

/// Header row plus the rows whose first cell is a valid CVE ID, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputTable {
    headers: Vec<String>,
    rows: Vec<InputRow>,
}

impl InputTable {
    pub fn new(headers: Vec<String>, rows: Vec<InputRow>) -> Self {
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[InputRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
