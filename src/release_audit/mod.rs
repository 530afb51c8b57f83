/// Release audit domain layer
///
/// Pure business logic for turning a lockfile tree into an ordered
/// package list and classifying release dates against a cutoff.
/// Nothing in this module performs I/O.
pub mod domain;
pub mod services;
