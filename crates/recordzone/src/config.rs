use std::{env, time::Duration};

use crate::storage::inmemory::DEFAULT_PAGE_SIZE;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the SQLite file holding local settings (default: "recordzone-settings.db")
    pub settings_path: String,
    /// DynamoDB table name (default: "recordzone")
    pub table_name: String,
    /// Custom endpoint URL, for DynamoDB Local
    pub endpoint_url: Option<String>,
    /// AWS region (default: "us-east-1")
    pub region: String,
    /// Records requested per backend page (default: 100)
    pub page_size: usize,
    /// Per-operation timeout applied by the CLI, in seconds (default: 60)
    pub operation_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `RECORDZONE_SETTINGS_PATH` - Settings database path (default: "recordzone-settings.db")
    /// - `DYNAMODB_TABLE_NAME` - DynamoDB table name (default: "recordzone")
    /// - `AWS_ENDPOINT_URL` - Custom DynamoDB endpoint (optional)
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    /// - `RECORDZONE_PAGE_SIZE` - Records per page (default: 100)
    /// - `RECORDZONE_OPERATION_TIMEOUT_SECONDS` - Operation timeout (default: 60)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    ///
    /// Unparseable numbers fall back to their defaults. A page size of zero is raised to one.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            settings_path: lookup("RECORDZONE_SETTINGS_PATH")
                .unwrap_or_else(|| "recordzone-settings.db".to_string()),
            table_name: lookup("DYNAMODB_TABLE_NAME").unwrap_or_else(|| "recordzone".to_string()),
            endpoint_url: lookup("AWS_ENDPOINT_URL").filter(|url| !url.is_empty()),
            region: lookup("AWS_REGION").unwrap_or_else(|| "us-east-1".to_string()),
            page_size: lookup("RECORDZONE_PAGE_SIZE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .max(1),
            operation_timeout_seconds: lookup("RECORDZONE_OPERATION_TIMEOUT_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }

    /// Get the operation timeout as a Duration.
    pub fn operation_timeout(&self) -> Duration {
        Duration::from_secs(self.operation_timeout_seconds)
    }

    /// Returns a display string for the remote backend.
    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("Local DynamoDB ({url})"),
            None => format!("AWS DynamoDB (region: {})", self.region),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = config_from(&[]);

        assert_eq!(config.settings_path, "recordzone-settings.db");
        assert_eq!(config.table_name, "recordzone");
        assert_eq!(config.endpoint_url, None);
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.page_size, 100);
        assert_eq!(config.operation_timeout_seconds, 60);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("RECORDZONE_SETTINGS_PATH", "/tmp/settings.db"),
            ("DYNAMODB_TABLE_NAME", "customers-test"),
            ("AWS_ENDPOINT_URL", "http://localhost:8000"),
            ("AWS_REGION", "eu-west-1"),
            ("RECORDZONE_PAGE_SIZE", "25"),
            ("RECORDZONE_OPERATION_TIMEOUT_SECONDS", "5"),
        ]);

        assert_eq!(config.settings_path, "/tmp/settings.db");
        assert_eq!(config.table_name, "customers-test");
        assert_eq!(
            config.endpoint_url.as_deref(),
            Some("http://localhost:8000")
        );
        assert_eq!(config.region, "eu-west-1");
        assert_eq!(config.page_size, 25);
        assert_eq!(config.operation_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let config = config_from(&[
            ("RECORDZONE_PAGE_SIZE", "lots"),
            ("RECORDZONE_OPERATION_TIMEOUT_SECONDS", "-1"),
        ]);

        assert_eq!(config.page_size, 100);
        assert_eq!(config.operation_timeout_seconds, 60);
    }

    #[test]
    fn test_zero_page_size_is_raised() {
        let config = config_from(&[("RECORDZONE_PAGE_SIZE", "0")]);
        assert_eq!(config.page_size, 1);
    }

    #[test]
    fn test_target_display() {
        let local = config_from(&[("AWS_ENDPOINT_URL", "http://localhost:8000")]);
        assert_eq!(local.target_display(), "Local DynamoDB (http://localhost:8000)");

        let remote = config_from(&[("AWS_REGION", "eu-west-1")]);
        assert_eq!(remote.target_display(), "AWS DynamoDB (region: eu-west-1)");
    }
}
