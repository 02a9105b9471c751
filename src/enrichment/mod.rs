/// Enrichment domain - CVE identifiers, lookup documents and output records
///
/// Pure business logic: validating input identifiers and turning a raw
/// lookup response into the fixed output schema. No I/O happens here.
pub mod domain;
pub mod services;
