use npm_release_audit::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock RequestPacer that never sleeps and counts pauses
#[derive(Default, Clone)]
pub struct MockRequestPacer {
    pub pauses: Arc<AtomicUsize>,
}

impl MockRequestPacer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pause_count(&self) -> usize {
        self.pauses.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl RequestPacer for MockRequestPacer {
    async fn pause(&self) {
        self.pauses.fetch_add(1, Ordering::SeqCst);
    }
}
