//! Console configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Default admin service root.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:1219/";

/// Configuration for the admin console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    /// Admin API root. Endpoint paths are appended verbatim.
    pub base_url: String,

    /// Log filter (trace, debug, info, warn, error or an `EnvFilter` directive)
    pub log_level: String,

    /// Write logs here instead of stderr
    pub log_file: Option<PathBuf>,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl AdminConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SNUBA_ADMIN_URL`: Admin API root (default: http://127.0.0.1:1219/)
    /// - `SNUBA_ADMIN_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `SNUBA_ADMIN_LOG_FILE`: Log file path (default: unset)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            base_url: lookup("SNUBA_ADMIN_URL")
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.base_url),

            log_level: lookup("SNUBA_ADMIN_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.log_level),

            log_file: lookup("SNUBA_ADMIN_LOG_FILE")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }

    /// Apply command-line overrides on top of this configuration.
    pub fn with_overrides(
        mut self,
        base_url: Option<String>,
        log_level: Option<String>,
        log_file: Option<PathBuf>,
    ) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        if let Some(log_level) = log_level {
            self.log_level = log_level;
        }
        if log_file.is_some() {
            self.log_file = log_file;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = AdminConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:1219/");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_from_env_values() {
        let config = AdminConfig::from_lookup(lookup(&[
            ("SNUBA_ADMIN_URL", "http://snuba-admin:1219/"),
            ("RUST_LOG", "debug"),
            ("SNUBA_ADMIN_LOG_FILE", "/tmp/snuba-admin.log"),
        ]));
        assert_eq!(config.base_url, "http://snuba-admin:1219/");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/snuba-admin.log")));
    }

    #[test]
    fn test_specific_log_level_wins() {
        let config = AdminConfig::from_lookup(lookup(&[
            ("SNUBA_ADMIN_LOG_LEVEL", "warn"),
            ("RUST_LOG", "trace"),
        ]));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_empty_values_fall_back() {
        let config = AdminConfig::from_lookup(lookup(&[("SNUBA_ADMIN_URL", "")]));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_overrides() {
        let config = AdminConfig::default().with_overrides(
            Some("http://other:8080/".to_string()),
            None,
            Some(PathBuf::from("admin.log")),
        );
        assert_eq!(config.base_url, "http://other:8080/");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_file, Some(PathBuf::from("admin.log")));
    }
}
