/// Application layer - Use cases, run lifecycle and DTOs
///
/// This layer contains the application logic that orchestrates
/// domain services and coordinates with infrastructure through ports.
pub mod dto;
pub mod run_state;
pub mod runner;
pub mod use_cases;

pub use run_state::{CancellationToken, RunState, RunStatus};
pub use runner::{EnrichmentRunner, RunError, RunEvent, RunHandle};
