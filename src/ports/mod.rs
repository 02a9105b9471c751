/// Ports module defining interfaces for hexagonal architecture
///
/// This module contains both inbound ports (driving ports - the run API
/// offered to callers) and outbound ports (driven ports - network, files, console).
pub mod inbound;
pub mod outbound;
