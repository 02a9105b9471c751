use super::CveId;

pub const NOT_AVAILABLE: &str = "N/A";
pub const NONE: &str = "None";
pub const NOT_FOUND: &str = "Not Found";
pub const EXPLOIT_YES: &str = "Yes";
pub const EXPLOIT_NO: &str = "No";

/// Column names appended after the original input headers
pub const ENRICHMENT_HEADERS: [&str; 6] = [
    "Title",
    "Description",
    "CVSS Score",
    "Exploit Available",
    "CWE",
    "References",
];

/// How a single lookup ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Success,
    NotFound,
    /// Transport failure after all retries; carries the error text
    Error(String),
}

impl LookupOutcome {
    /// Label shown in progress output
    pub fn label(&self) -> String {
        match self {
            LookupOutcome::Success => "Success".to_string(),
            LookupOutcome::NotFound => NOT_FOUND.to_string(),
            LookupOutcome::Error(message) => format!("Error: {}", message),
        }
    }
}

/// The six enrichment columns, always populated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichmentFields {
    pub title: String,
    pub description: String,
    pub cvss_score: String,
    pub exploit_available: String,
    pub cwe: String,
    pub references: String,
}

impl EnrichmentFields {
    pub fn not_found() -> Self {
        Self {
            title: NOT_FOUND.to_string(),
            description: NOT_FOUND.to_string(),
            cvss_score: NOT_AVAILABLE.to_string(),
            exploit_available: EXPLOIT_NO.to_string(),
            cwe: NONE.to_string(),
            references: NONE.to_string(),
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            title: "Error".to_string(),
            description: message.to_string(),
            cvss_score: NOT_AVAILABLE.to_string(),
            exploit_available: EXPLOIT_NO.to_string(),
            cwe: NONE.to_string(),
            references: NONE.to_string(),
        }
    }

    pub fn to_vec(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.description.clone(),
            self.cvss_score.clone(),
            self.exploit_available.clone(),
            self.cwe.clone(),
            self.references.clone(),
        ]
    }
}

/// One output row: the input row's cells followed by the enrichment fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedRecord {
    cve_id: CveId,
    passthrough: Vec<String>,
    fields: EnrichmentFields,
    outcome: LookupOutcome,
}

impl EnrichedRecord {
    pub fn new(
        cve_id: CveId,
        passthrough: Vec<String>,
        fields: EnrichmentFields,
        outcome: LookupOutcome,
    ) -> Self {
        Self {
            cve_id,
            passthrough,
            fields,
            outcome,
        }
    }

    pub fn cve_id(&self) -> &CveId {
        &self.cve_id
    }

    pub fn outcome(&self) -> &LookupOutcome {
        &self.outcome
    }

    /// Full output row: normalized ID, passthrough cells, enrichment fields
    pub fn to_row(&self) -> Vec<String> {
        let mut row = Vec::with_capacity(1 + self.passthrough.len() + ENRICHMENT_HEADERS.len());
        row.push(self.cve_id.to_string());
        row.extend(self.passthrough.iter().cloned());
        row.extend(self.fields.to_vec());
        row
    }
}
