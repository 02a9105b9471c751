/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (lookup service, file system, console).
pub mod cve_repository;
pub mod input_reader;
pub mod progress_reporter;
pub mod result_sink;

pub use cve_repository::CveRepository;
pub use input_reader::InputReader;
pub use progress_reporter::{LookupProgress, ProgressReporter};
pub use result_sink::ResultSink;
