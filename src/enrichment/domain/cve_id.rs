use crate::shared::Result;
use regex::Regex;
use std::sync::LazyLock;

/// `CVE-<year>-<sequence>`: four year digits, at least four sequence digits
static CVE_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^CVE-\d{4}-\d{4,}$").expect("CVE ID pattern is a valid regex")
});

/// NewType wrapper for a validated, normalized CVE identifier
///
/// The pattern is matched against the cell as read, so padded cells such as
/// `" CVE-2021-44228 "` are rejected. A single trailing line feed is
/// tolerated. Accepted values are trimmed and uppercased, so
/// `"cve-2021-44228"` and `"CVE-2021-44228"` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CveId(String);

impl CveId {
    pub fn new(raw: &str) -> Result<Self> {
        if !Self::is_valid(raw) {
            anyhow::bail!(
                "Invalid CVE ID '{}'. Expected the form CVE-YYYY-NNNN (at least 4 sequence digits).",
                raw.escape_debug()
            );
        }

        Ok(Self(raw.trim().to_uppercase()))
    }

    /// Returns true if `candidate` matches the CVE ID pattern (case-insensitive)
    ///
    /// Surrounding whitespace is not stripped, except for one trailing `\n`.
    pub fn is_valid(candidate: &str) -> bool {
        let candidate = candidate.strip_suffix('\n').unwrap_or(candidate);
        CVE_ID_PATTERN.is_match(candidate)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CveId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
