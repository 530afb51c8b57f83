use crate::ports::outbound::RequestPacer;
use async_trait::async_trait;
use std::time::Duration;

/// Rate limiting: delay between registry requests
/// This limits requests to ~10 per second (100ms delay = 10 requests/second)
pub const REQUEST_INTERVAL: Duration = Duration::from_millis(100);

/// FixedIntervalPacer adapter sleeping a constant interval between requests
///
/// The interval is not adaptive: it is applied after failures and
/// successes alike.
pub struct FixedIntervalPacer {
    interval: Duration,
}

impl FixedIntervalPacer {
    pub fn new() -> Self {
        Self {
            interval: REQUEST_INTERVAL,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for FixedIntervalPacer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RequestPacer for FixedIntervalPacer {
    async fn pause(&self) {
        tokio::time::sleep(self.interval).await;
    }
}
