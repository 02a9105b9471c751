pub mod cve_id;
pub mod enriched_record;
pub mod input_table;
pub mod lookup_document;

pub use cve_id::CveId;
pub use enriched_record::{EnrichedRecord, EnrichmentFields, LookupOutcome, ENRICHMENT_HEADERS};
pub use input_table::{InputRow, InputTable};
pub use lookup_document::{JsonNode, LookupDocument};
