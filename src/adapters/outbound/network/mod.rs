/// Network adapters for the CVE lookup service
mod circl_client;
mod retry;

pub use circl_client::{CirclClient, LookupClientSettings};
pub use retry::{retry_with_backoff, RetryPolicy};
