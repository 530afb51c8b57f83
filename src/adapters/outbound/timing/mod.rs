/// Timing adapters for request pacing
mod fixed_interval_pacer;

pub use fixed_interval_pacer::{FixedIntervalPacer, REQUEST_INTERVAL};
