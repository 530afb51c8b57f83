/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) are the only seams between the audit
/// core and the outside world: lockfile storage, the package registry,
/// request pacing, progress output and the result sink.
pub mod outbound;
