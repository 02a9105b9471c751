//! cve-info-fetcher - batch CVE enrichment from a CSV list
//!
//! This library reads CVE IDs from the first column of a CSV file, looks each
//! one up in a vulnerability lookup service and writes a timestamped CSV with
//! the original columns plus six enrichment columns, following hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`enrichment`): CVE ID validation and record extraction
//! - **Application Layer** (`application`): The enrichment use case and the background runner
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): CSV files, HTTP lookup client, console and channel reporters
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use cve_info_fetcher::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let input_reader = CsvInputReader::new();
//! let cve_repository = CirclClient::new()?;
//! let result_sink = CsvResultSink::new(PathBuf::from("."));
//!
//! // Create use case and runner
//! let use_case = EnrichCvesUseCase::new(input_reader, cve_repository, result_sink);
//! let runner = EnrichmentRunner::new(use_case);
//!
//! // Start a background run and wait for it
//! let handle = runner.start_run(EnrichmentRequest::new(PathBuf::from("cves.csv")))?;
//! match handle.wait_with(|event| println!("{:?}", event)) {
//!     RunEvent::Finished { output_path, .. } => println!("{}", output_path.display()),
//!     other => eprintln!("{:?}", other),
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod enrichment;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::channel::ChannelProgressReporter;
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{CsvInputReader, CsvResultSink};
    pub use crate::adapters::outbound::network::{CirclClient, LookupClientSettings, RetryPolicy};
    pub use crate::application::dto::{EnrichmentRequest, EnrichmentResponse};
    pub use crate::application::use_cases::EnrichCvesUseCase;
    pub use crate::application::{
        CancellationToken, EnrichmentRunner, RunError, RunEvent, RunHandle, RunStatus,
    };
    pub use crate::enrichment::domain::{
        CveId, EnrichedRecord, EnrichmentFields, LookupDocument, LookupOutcome,
    };
    pub use crate::enrichment::services::{IdentifierValidator, RecordExtractor};
    pub use crate::ports::inbound::EnrichmentPort;
    pub use crate::ports::outbound::{
        CveRepository, InputReader, LookupProgress, ProgressReporter, ResultSink,
    };
    pub use crate::shared::Result;
}
