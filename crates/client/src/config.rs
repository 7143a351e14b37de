//! Client configuration.

use anyhow::{bail, Context};

/// Environment variable naming the backend base URL.
pub const API_URL_ENV: &str = "SIGNUP_API_URL";

/// Backend used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3333";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every API path is joined onto.
    pub api_base_url: String,
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>) -> anyhow::Result<Self> {
        let api_base_url = api_base_url.into();
        let parsed = url::Url::parse(&api_base_url)
            .with_context(|| format!("invalid API base URL `{api_base_url}`"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            bail!("API base URL must be http or https, got `{}`", parsed.scheme());
        }
        Ok(Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve the configuration for this build.
    ///
    /// Order: runtime env var (native only), value baked in at compile time,
    /// then [`DEFAULT_API_URL`].
    pub fn load() -> anyhow::Result<Self> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Ok(url) = std::env::var(API_URL_ENV) {
                if !url.trim().is_empty() {
                    return Self::new(url.trim());
                }
            }
        }

        match option_env!("SIGNUP_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::new(DEFAULT_API_URL),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash() {
        let config = ClientConfig::new("https://api.example.com/").unwrap();
        assert_eq!(config.api_base_url, "https://api.example.com");
    }

    #[test]
    fn rejects_non_http_schemes() {
        assert!(ClientConfig::new("ftp://example.com").is_err());
        assert!(ClientConfig::new("not a url").is_err());
    }

    #[test]
    fn default_points_at_local_backend() {
        assert_eq!(ClientConfig::default().api_base_url, DEFAULT_API_URL);
        assert!(ClientConfig::new(DEFAULT_API_URL).is_ok());
    }
}
