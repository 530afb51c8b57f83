use npm_release_audit::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock ReleaseDateRepository for testing
///
/// Versions that were not registered with [`MockReleaseDateRepository::with_release`]
/// resolve to `VersionNotPublished`.
#[derive(Default, Clone)]
pub struct MockReleaseDateRepository {
    pub release_dates: HashMap<String, String>,
    pub should_fail: bool,
    pub requested: Arc<Mutex<Vec<String>>>,
}

impl MockReleaseDateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_release(mut self, package: &str, version: &str, release_date: &str) -> Self {
        self.release_dates
            .insert(format!("{}@{}", package, version), release_date.to_string());
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ReleaseDateRepository for MockReleaseDateRepository {
    async fn fetch_release_date(
        &self,
        package_name: &str,
        version: &str,
    ) -> std::result::Result<String, LookupError> {
        let key = format!("{}@{}", package_name, version);
        self.requested.lock().unwrap().push(key.clone());

        if self.should_fail {
            return Err(LookupError::UnexpectedStatus(503));
        }

        self.release_dates
            .get(&key)
            .cloned()
            .ok_or_else(|| LookupError::VersionNotPublished {
                package: package_name.to_string(),
                version: version.to_string(),
            })
    }
}
