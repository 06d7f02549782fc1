use std::path::PathBuf;
use std::time::Duration;

use catalog_client::{ClientConfig, DEFAULT_ENDPOINT};

use crate::catalog::filter::{ContentFilter, DEFAULT_DENYLIST};
use crate::catalog::view::DEFAULT_PAGE_SIZE;
use crate::utils::debounce::DEFAULT_DEBOUNCE;

/// Console configuration
///
/// # Environment variables
///
/// Every field can be overridden from the environment (or a `.env` file):
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | CATALOG_API_URL | https://api.escuelajs.co/api/v1/products | collection endpoint |
/// | CATALOG_TIMEOUT_SECS | 30 | HTTP request timeout |
/// | CATALOG_PAGE_SIZE | 10 | initial page size |
/// | CATALOG_SEARCH_DEBOUNCE_MS | 250 | search quiet period |
/// | CATALOG_DENYLIST | adult,sex,porn,nude,toy,xxx | content filter terms |
/// | CATALOG_EXPORT_DIR | . | where `products_view.csv` is written |
/// | CATALOG_LOG_LEVEL | info | log level |
/// | CATALOG_LOG_JSON | false | JSON console logs |
/// | CATALOG_LOG_DIR | (unset) | rotating file logs |
///
/// # Example
///
/// ```ignore
/// CATALOG_API_URL=http://localhost:3000/products CATALOG_PAGE_SIZE=20 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Collection endpoint of the catalog API
    pub api_url: String,
    /// HTTP request timeout (seconds)
    pub timeout_secs: u64,
    /// Initial page size
    pub page_size: usize,
    /// Quiet period before a search is applied
    pub search_debounce: Duration,
    /// Content filter terms
    pub denylist: Vec<String>,
    /// Directory receiving CSV exports
    pub export_dir: PathBuf,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable values fall back to the defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a map)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            api_url: lookup("CATALOG_API_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.api_url),
            timeout_secs: lookup("CATALOG_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
            page_size: lookup("CATALOG_PAGE_SIZE")
                .and_then(|v| v.parse().ok())
                .filter(|n: &usize| *n > 0)
                .unwrap_or(defaults.page_size),
            search_debounce: lookup("CATALOG_SEARCH_DEBOUNCE_MS")
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.search_debounce),
            denylist: lookup("CATALOG_DENYLIST")
                .map(|v| ContentFilter::from_csv_list(&v).terms().to_vec())
                .unwrap_or(defaults.denylist),
            export_dir: lookup("CATALOG_EXPORT_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.export_dir),
            log_level: lookup("CATALOG_LOG_LEVEL").unwrap_or(defaults.log_level),
            log_json: lookup("CATALOG_LOG_JSON")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.log_json),
            log_dir: lookup("CATALOG_LOG_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.api_url).with_timeout(self.timeout_secs)
    }

    pub fn content_filter(&self) -> ContentFilter {
        ContentFilter::new(&self.denylist)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 30,
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce: DEFAULT_DEBOUNCE,
            denylist: DEFAULT_DENYLIST.iter().map(|t| t.to_string()).collect(),
            export_dir: PathBuf::from("."),
            log_level: "info".to_string(),
            log_json: false,
            log_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config.api_url, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.page_size, 10);
        assert_eq!(config.search_debounce, Duration::from_millis(250));
        assert_eq!(config.denylist.len(), 6);
        assert_eq!(config.export_dir, PathBuf::from("."));
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("CATALOG_API_URL", "http://localhost:3000/products"),
            ("CATALOG_TIMEOUT_SECS", "5"),
            ("CATALOG_PAGE_SIZE", "20"),
            ("CATALOG_SEARCH_DEBOUNCE_MS", "100"),
            ("CATALOG_DENYLIST", "Spam, junk"),
            ("CATALOG_EXPORT_DIR", "/tmp/exports"),
            ("CATALOG_LOG_JSON", "true"),
            ("CATALOG_LOG_DIR", "/tmp/logs"),
        ]));
        assert_eq!(config.api_url, "http://localhost:3000/products");
        assert_eq!(config.client_config().timeout, 5);
        assert_eq!(config.page_size, 20);
        assert_eq!(config.search_debounce, Duration::from_millis(100));
        assert_eq!(config.denylist, vec!["spam".to_string(), "junk".to_string()]);
        assert_eq!(config.export_dir, PathBuf::from("/tmp/exports"));
        assert!(config.log_json);
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/logs")));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = Config::from_lookup(lookup(&[
            ("CATALOG_PAGE_SIZE", "0"),
            ("CATALOG_TIMEOUT_SECS", "soon"),
            ("CATALOG_API_URL", "  "),
        ]));
        assert_eq!(config.page_size, 10);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.api_url, DEFAULT_ENDPOINT);
    }
}
