use crate::enrichment::domain::enriched_record::{EXPLOIT_NO, EXPLOIT_YES, NONE, NOT_AVAILABLE};
use crate::enrichment::domain::{EnrichmentFields, JsonNode, LookupDocument, LookupOutcome};
use regex::Regex;
use std::sync::LazyLock;

static NEWLINE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n+").expect("newline pattern is a valid regex"));

/// RecordExtractor - maps a CVE JSON 5 lookup document onto the output schema
///
/// Pure and stateless: the same document always yields the same fields.
///
/// Fields read from the document:
/// - `containers.cna.title`
/// - `containers.cna.descriptions[0].value`
/// - `containers.cna.metrics[*].cvssV3_1.baseScore`
/// - `containers.adp[*].metrics[*].other.content.options[*].Exploitation`
/// - `containers.cna.problemTypes[*].descriptions[*].cweId`
/// - `containers.cna.references[*].url`
pub struct RecordExtractor;

impl RecordExtractor {
    /// Extracts the enrichment fields from a successful lookup
    pub fn extract(document: &LookupDocument) -> (EnrichmentFields, LookupOutcome) {
        let root = document.root();
        let cna = root.get("containers").get("cna");

        // an "error" key marks the response as an error, whatever its value
        let has_error_marker = !root.get("error").is_absent();

        if !root.is_object() || !root.is_truthy() || has_error_marker || !cna.is_truthy() {
            return (EnrichmentFields::not_found(), LookupOutcome::NotFound);
        }

        let fields = EnrichmentFields {
            title: Self::title(cna),
            description: Self::description(cna),
            cvss_score: Self::cvss_score(cna),
            exploit_available: Self::exploit_available(root.get("containers").get("adp")),
            cwe: Self::cwe(cna),
            references: Self::references(cna),
        };

        (fields, LookupOutcome::Success)
    }

    /// Fields for a lookup that failed at the transport level
    pub fn from_error(message: &str) -> (EnrichmentFields, LookupOutcome) {
        (
            EnrichmentFields::error(message),
            LookupOutcome::Error(message.to_string()),
        )
    }

    fn title(cna: JsonNode<'_>) -> String {
        non_empty_or(cna.get("title").as_str().map(str::to_string), NOT_AVAILABLE)
    }

    fn description(cna: JsonNode<'_>) -> String {
        let raw = cna.get("descriptions").at(0).get("value").as_str();
        non_empty_or(raw.map(normalize_description), NOT_AVAILABLE)
    }

    /// First metric carrying a CVSS v3.1 base score wins
    fn cvss_score(cna: JsonNode<'_>) -> String {
        cna.get("metrics")
            .items()
            .map(|metric| metric.get("cvssV3_1").get("baseScore"))
            .find(|score| score.is_truthy())
            .and_then(|score| score.to_text())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    /// "Yes" if any option of any ADP metric reports active exploitation
    fn exploit_available(adp: JsonNode<'_>) -> String {
        let active = adp.items().any(|entry| {
            entry.get("metrics").items().any(|metric| {
                metric
                    .get("other")
                    .get("content")
                    .get("options")
                    .items()
                    .any(|option| option.get("Exploitation").as_str() == Some("active"))
            })
        });

        let label = if active { EXPLOIT_YES } else { EXPLOIT_NO };
        label.to_string()
    }

    fn cwe(cna: JsonNode<'_>) -> String {
        cna.get("problemTypes")
            .items()
            .flat_map(|problem_type| problem_type.get("descriptions").items())
            .map(|desc| desc.get("cweId"))
            .find(|cwe_id| cwe_id.is_truthy())
            .and_then(|cwe_id| cwe_id.to_text())
            .unwrap_or_else(|| NONE.to_string())
    }

    fn references(cna: JsonNode<'_>) -> String {
        let urls: Vec<String> = cna
            .get("references")
            .items()
            .map(|reference| reference.get("url"))
            .filter(|url| url.is_truthy())
            .filter_map(|url| url.to_text())
            .collect();

        if urls.is_empty() {
            NONE.to_string()
        } else {
            urls.join(";")
        }
    }
}

/// Collapses every run of newlines into a single space and trims the result
///
/// `"Line1\n\n\nLine2  "` becomes `"Line1 Line2"`.
pub fn normalize_description(text: &str) -> String {
    NEWLINE_RUNS.replace_all(text, " ").trim().to_string()
}

fn non_empty_or(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => fallback.to_string(),
    }
}
