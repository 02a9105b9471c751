/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod enrichment_request;
mod enrichment_response;

pub use enrichment_request::{EnrichmentRequest, DEFAULT_PACING};
pub use enrichment_response::EnrichmentResponse;
