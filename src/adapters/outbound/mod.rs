/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod channel;
pub mod console;
pub mod filesystem;
pub mod network;
