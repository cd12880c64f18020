use std::path::PathBuf;

use mtc_client::ClientConfig;

/// Portal configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | MTC_API_URL | http://localhost:5000 | Backend base URL |
/// | MTC_SESSION_DIR | . | Directory holding `userData.json` |
/// | MTC_EXPORT_DIR | . | Directory for CSV exports |
/// | MTC_TIMEOUT_SECS | 30 | Request timeout (seconds) |
/// | MTC_LOG_LEVEL | info | Log level |
/// | MTC_LOG_DIR | (none) | Enables daily rolling log files |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    pub api_url: String,
    pub session_dir: PathBuf,
    pub export_dir: PathBuf,
    pub timeout_secs: u64,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
}

impl PortalConfig {
    /// Load from the process environment, defaults for unset variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            api_url: lookup("MTC_API_URL").unwrap_or_else(|| "http://localhost:5000".into()),
            session_dir: lookup("MTC_SESSION_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            export_dir: lookup("MTC_EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            timeout_secs: lookup("MTC_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            log_level: lookup("MTC_LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: lookup("MTC_LOG_DIR")
                .filter(|d| !d.is_empty())
                .map(PathBuf::from),
        }
    }

    /// Client transport settings derived from this config
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api_url.clone()).with_timeout(self.timeout_secs)
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
