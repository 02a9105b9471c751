/// Mock implementations for testing
mod mock_cve_repository;
mod mock_input_reader;
mod mock_progress_reporter;
mod mock_result_sink;

pub use mock_cve_repository::MockCveRepository;
pub use mock_input_reader::MockInputReader;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_result_sink::MockResultSink;
