// config.rs - environment-driven settings
use anyhow::anyhow;
use std::path::{Path, PathBuf};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_LOG_FILE: &str = "vnsum_requests.log";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Base URL of the summarization API (`/health`, `/demo`, `/summarize`)
    pub api_base_url: String,
    /// Full URL of the generic inference endpoint
    pub inference_url: String,
    /// Bearer token for the inference endpoint
    pub hf_token: Option<String>,
    /// Request log written alongside stderr output
    pub log_file: PathBuf,
    /// Whether `INFERENCE_URL` was set, or `inference_url` follows the base URL
    inference_url_explicit: bool,
}

impl Config {
    /// Load `.env` from the working directory. A missing file is fine, a
    /// malformed one is an error. Returns the path that was loaded.
    pub fn load_dotenv() -> anyhow::Result<Option<PathBuf>> {
        let path = Path::new(".env");
        match dotenvy::from_filename(path) {
            Ok(loaded) => Ok(Some(loaded)),
            Err(dotenvy::Error::Io(_)) => Ok(None),
            Err(e) => Err(anyhow!("malformed .env at {}: {}", path.display(), e)),
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|v| normalize_secret(&v))
                .filter(|v| !v.is_empty())
        };

        let api_base_url = get("API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let explicit_inference_url = get("INFERENCE_URL");

        Self {
            inference_url_explicit: explicit_inference_url.is_some(),
            inference_url: explicit_inference_url.unwrap_or_else(|| api_base_url.clone()),
            hf_token: get("HF_TOKEN"),
            log_file: get("VNSUM_LOG_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
            api_base_url,
        }
    }

    /// Point at another summarization API. An inference URL that was only
    /// defaulted from the base URL moves with it.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.api_base_url = base_url.trim_end_matches('/').to_string();
        if !self.inference_url_explicit {
            self.inference_url = self.api_base_url.clone();
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// Strip whitespace and one pair of surrounding quotes
fn normalize_secret(raw: &str) -> String {
    let trimmed = raw.trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| trimmed.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')))
        .unwrap_or(trimmed);
    unquoted.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.inference_url, "http://localhost:8000");
        assert_eq!(config.hf_token, None);
        assert_eq!(config.log_file, PathBuf::from("vnsum_requests.log"));
    }

    #[test]
    fn test_inference_url_falls_back_to_base() {
        let config = config_from(&[("API_BASE_URL", "http://api:9000/")]);
        assert_eq!(config.api_base_url, "http://api:9000");
        assert_eq!(config.inference_url, "http://api:9000");
    }

    #[test]
    fn test_explicit_values() {
        let config = config_from(&[
            ("API_BASE_URL", "http://api:9000"),
            ("INFERENCE_URL", "https://hf.example/models/vit5"),
            ("HF_TOKEN", " \"hf_abc\" "),
            ("VNSUM_LOG_FILE", "/tmp/req.log"),
        ]);
        assert_eq!(config.inference_url, "https://hf.example/models/vit5");
        assert_eq!(config.hf_token.as_deref(), Some("hf_abc"));
        assert_eq!(config.log_file, PathBuf::from("/tmp/req.log"));
    }

    #[test]
    fn test_blank_token_is_unset() {
        let config = config_from(&[("HF_TOKEN", "   ")]);
        assert_eq!(config.hf_token, None);
    }

    #[test]
    fn test_base_url_override() {
        let config = Config::default().with_base_url("http://other:8000/");
        assert_eq!(config.api_base_url, "http://other:8000");
        assert_eq!(config.inference_url, "http://other:8000");
    }

    #[test]
    fn test_base_url_override_keeps_explicit_inference_url() {
        let config = config_from(&[("INFERENCE_URL", "https://hf.example/models/vit5")])
            .with_base_url("http://other:8000");
        assert_eq!(config.api_base_url, "http://other:8000");
        assert_eq!(config.inference_url, "https://hf.example/models/vit5");
    }
}
