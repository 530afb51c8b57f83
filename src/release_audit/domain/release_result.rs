use super::timestamp::{format_utc, parse_utc};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Publication record for one resolved package
///
/// Serializes to `{package, version, release_date, formatted_date}`.
/// When the registry timestamp cannot be parsed, `formatted_date` falls
/// back to the raw string and the record has no instant, so it can never
/// be classified as newer than a cutoff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseResult {
    package: String,
    version: String,
    release_date: String,
    formatted_date: String,
    #[serde(skip)]
    published_at: Option<DateTime<Utc>>,
}

impl ReleaseResult {
    pub fn new(package: String, version: String, release_date: String) -> Self {
        let published_at = parse_utc(&release_date);
        let formatted_date = published_at
            .as_ref()
            .map(format_utc)
            .unwrap_or_else(|| release_date.clone());

        Self {
            package,
            version,
            release_date,
            formatted_date,
            published_at,
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn release_date(&self) -> &str {
        &self.release_date
    }

    pub fn formatted_date(&self) -> &str {
        &self.formatted_date
    }

    pub fn published_at(&self) -> Option<&DateTime<Utc>> {
        self.published_at.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_new_parses_registry_timestamp() {
        let result = ReleaseResult::new(
            "a".to_string(),
            "1.0.0".to_string(),
            "2020-01-01T00:00:00.000Z".to_string(),
        );

        assert_eq!(result.formatted_date(), "2020-01-01 00:00:00 UTC");
        assert_eq!(
            result.published_at(),
            Some(&Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_new_falls_back_to_raw_string() {
        let result = ReleaseResult::new(
            "a".to_string(),
            "1.0.0".to_string(),
            "sometime in 2020".to_string(),
        );

        assert_eq!(result.release_date(), "sometime in 2020");
        assert_eq!(result.formatted_date(), "sometime in 2020");
        assert!(result.published_at().is_none());
    }

    #[test]
    fn test_serialized_shape() {
        let result = ReleaseResult::new(
            "@types/node".to_string(),
            "20.1.0".to_string(),
            "2023-05-02T12:30:45.123Z".to_string(),
        );

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({
                "package": "@types/node",
                "version": "20.1.0",
                "release_date": "2023-05-02T12:30:45.123Z",
                "formatted_date": "2023-05-02 12:30:45 UTC"
            })
        );
    }
}
