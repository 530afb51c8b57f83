use async_trait::async_trait;

/// RequestPacer port controlling the gap between registry requests
///
/// The resolution pipeline awaits [`RequestPacer::pause`] between two
/// consecutive lookups. Since lookups are strictly sequential this keeps
/// at most one request in flight at a fixed maximum rate.
#[async_trait]
pub trait RequestPacer: Send + Sync {
    /// Waits until the next request may be sent
    async fn pause(&self);
}
