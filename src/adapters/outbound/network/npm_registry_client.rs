use crate::ports::outbound::ReleaseDateRepository;
use crate::shared::error::LookupError;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Public npm registry
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// Upper bound for a single metadata request, connection included
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// The part of an npm package document we care about
///
/// `time` maps every published version (plus `created` / `modified`)
/// to an ISO-8601 timestamp.
#[derive(Debug, Deserialize)]
struct NpmPackageDocument {
    #[serde(default)]
    time: HashMap<String, serde_json::Value>,
}

/// NpmRegistryClient adapter for fetching publication times from an npm registry
///
/// This adapter implements the ReleaseDateRepository port. It downloads the
/// full package document (`GET {registry}/{name}`) and reads `time[version]`.
pub struct NpmRegistryClient {
    client: reqwest::Client,
    base_url: String,
}

impl NpmRegistryClient {
    /// Creates a client for the registry at `base_url`
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    /// Creates a client whose requests give up after `timeout`
    ///
    /// A request that runs out of time fails with [`LookupError::Network`].
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let user_agent = format!("npm-release-audit/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Rejects names that could escape the package path of the registry URL
    fn validate_package_name(package_name: &str) -> std::result::Result<(), LookupError> {
        let invalid = |reason: &str| LookupError::InvalidPackageName {
            name: package_name.to_string(),
            reason: reason.to_string(),
        };

        if package_name.is_empty() {
            return Err(invalid("name is empty"));
        }

        // Dots inside a name are fine (`lodash.merge`, `a..b`); a segment
        // that starts with one could read as a relative path
        if package_name
            .trim_start_matches('@')
            .split('/')
            .any(|segment| segment.starts_with('.'))
        {
            return Err(invalid("name segments must not start with '.'"));
        }

        if package_name.contains(['\\', '?', '#']) {
            return Err(invalid("contains URL-unsafe characters"));
        }

        match package_name.strip_prefix('@') {
            Some(scoped) => match scoped.split_once('/') {
                Some((scope, name))
                    if !scope.is_empty() && !name.is_empty() && !name.contains(['/', '@']) => {}
                _ => return Err(invalid("scoped names must look like @scope/name")),
            },
            None if package_name.contains(['/', '@']) => {
                return Err(invalid("'/' and '@' are only allowed in scoped names"));
            }
            None => {}
        }

        Ok(())
    }

    /// Encodes a package name for the URL path
    ///
    /// Scoped packages keep the leading `@` and escape the separator:
    /// `@types/node` becomes `@types%2Fnode`.
    fn encode_package_name(package_name: &str) -> String {
        match package_name.strip_prefix('@') {
            Some(scoped) => format!("@{}", urlencoding::encode(scoped)),
            None => urlencoding::encode(package_name).into_owned(),
        }
    }
}

#[async_trait]
impl ReleaseDateRepository for NpmRegistryClient {
    async fn fetch_release_date(
        &self,
        package_name: &str,
        version: &str,
    ) -> std::result::Result<String, LookupError> {
        Self::validate_package_name(package_name)?;

        let url = format!(
            "{}/{}",
            self.base_url,
            Self::encode_package_name(package_name)
        );
        debug!(%url, "fetching package document");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LookupError::PackageNotFound(package_name.to_string()));
        }

        if !status.is_success() {
            return Err(LookupError::UnexpectedStatus(status.as_u16()));
        }

        let document: NpmPackageDocument = response
            .json()
            .await
            .map_err(|e| LookupError::InvalidResponse(e.to_string()))?;

        document
            .time
            .get(version)
            .and_then(serde_json::Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| LookupError::VersionNotPublished {
                package: package_name.to_string(),
                version: version.to_string(),
            })
    }
}
