use crate::shared::error::LookupError;
use async_trait::async_trait;

/// ReleaseDateRepository port for resolving publication timestamps
///
/// This port abstracts the package registry used to find out when an
/// exact package version was published.
#[async_trait]
pub trait ReleaseDateRepository: Send + Sync {
    /// Fetches the raw publication timestamp of `package_name@version`
    ///
    /// # Arguments
    /// * `package_name` - Name of the package (scoped names included)
    /// * `version` - Exact version string
    ///
    /// # Returns
    /// The timestamp exactly as the registry reported it
    ///
    /// # Errors
    /// Returns a [`LookupError`] if:
    /// - The network request fails or times out
    /// - The registry returns a non-success status
    /// - The response cannot be parsed
    /// - The registry has no publication time for this version
    async fn fetch_release_date(
        &self,
        package_name: &str,
        version: &str,
    ) -> std::result::Result<String, LookupError>;
}
