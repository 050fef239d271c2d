//! Layered configuration for congress-mcp.
//!
//! Reads configuration from multiple sources with precedence:
//! CLI flags > env vars > config file > defaults

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use congress_api::{
    ClientConfig, DEFAULT_BASE_URL, DEFAULT_ENRICH_CONCURRENCY, DEFAULT_LIMIT, DEFAULT_TIMEOUT,
    MAX_LIMIT, RetryConfig,
};
use congress_types::ConfigError;
use serde::{Deserialize, Serialize};

/// Where to get a key.
pub const SIGN_UP_URL: &str = "https://api.congress.gov/sign-up/";

/// Resolved configuration for a server session.
#[derive(Clone)]
pub struct CongressConfig {
    pub api_key: String,
    pub base_url: String,
    pub default_limit: u32,
    pub max_limit: u32,
    pub timeout: Duration,
    pub max_retries: u32,
    pub enrich_concurrency: usize,
    pub config_dir: PathBuf,
}

impl std::fmt::Debug for CongressConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CongressConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("default_limit", &self.default_limit)
            .field("max_limit", &self.max_limit)
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .field("enrich_concurrency", &self.enrich_concurrency)
            .field("config_dir", &self.config_dir)
            .finish()
    }
}

/// Settings that can be read from a TOML config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsFile {
    #[serde(default)]
    pub api: ApiSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiSettings {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub default_limit: Option<u32>,
    pub max_limit: Option<u32>,
    pub timeout_secs: Option<f64>,
    pub max_retries: Option<u32>,
    pub enrich_concurrency: Option<usize>,
}

/// CLI overrides that take highest precedence.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<f64>,
}

impl CongressConfig {
    /// Load configuration from all sources, applying precedence rules.
    ///
    /// Precedence (highest to lowest):
    /// 1. CLI flags
    /// 2. Environment variables
    /// 3. Config file (~/.congress-mcp/config.toml)
    /// 4. Defaults
    pub fn load(overrides: CliOverrides) -> Result<Self, ConfigError> {
        let config_dir = config_dir();
        let settings = load_settings_file(&config_dir.join("config.toml"));
        Self::from_sources(overrides, |key| std::env::var(key).ok(), settings, config_dir)
    }

    /// Resolve from explicit sources. `env` looks up one variable.
    pub fn from_sources(
        overrides: CliOverrides,
        env: impl Fn(&str) -> Option<String>,
        settings: SettingsFile,
        config_dir: PathBuf,
    ) -> Result<Self, ConfigError> {
        let api = settings.api;

        // Resolve API key: CLI > env > config file
        let api_key = overrides
            .api_key
            .or_else(|| env("CONGRESS_API_KEY"))
            .or(api.api_key)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| ConfigError::MissingKey {
                key: format!(
                    "api_key (set CONGRESS_API_KEY or add it to ~/.congress-mcp/config.toml; \
                     get a free key at {SIGN_UP_URL})"
                ),
            })?;

        let base_url = overrides
            .base_url
            .or_else(|| env("CONGRESS_API_BASE_URL"))
            .or(api.base_url)
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let max_limit = parse_env(&env, "CONGRESS_MAX_LIMIT")?
            .or(api.max_limit)
            .unwrap_or(MAX_LIMIT);
        if max_limit == 0 {
            return Err(invalid("max_limit", "must be at least 1"));
        }

        let default_limit = parse_env(&env, "CONGRESS_DEFAULT_LIMIT")?
            .or(api.default_limit)
            .unwrap_or(DEFAULT_LIMIT.min(max_limit));
        if default_limit == 0 || default_limit > max_limit {
            return Err(invalid(
                "default_limit",
                format!("{default_limit} must be between 1 and max_limit ({max_limit})"),
            ));
        }

        let timeout_secs = match overrides.timeout_secs {
            Some(secs) => Some(secs),
            None => parse_env(&env, "CONGRESS_TIMEOUT")?,
        }
        .or(api.timeout_secs);
        let timeout = match timeout_secs {
            None => DEFAULT_TIMEOUT,
            Some(secs) if secs.is_finite() && secs > 0.0 => Duration::try_from_secs_f64(secs)
                .map_err(|e| invalid("timeout", format!("{secs} is out of range: {e}")))?,
            Some(secs) => return Err(invalid("timeout", format!("{secs} must be positive"))),
        };

        let max_retries = parse_env(&env, "CONGRESS_MAX_RETRIES")?
            .or(api.max_retries)
            .unwrap_or(RetryConfig::default().max_retries);

        let enrich_concurrency = parse_env(&env, "CONGRESS_ENRICH_CONCURRENCY")?
            .or(api.enrich_concurrency)
            .unwrap_or(DEFAULT_ENRICH_CONCURRENCY);
        if enrich_concurrency == 0 {
            return Err(invalid("enrich_concurrency", "must be at least 1"));
        }

        Ok(CongressConfig {
            api_key,
            base_url,
            default_limit,
            max_limit,
            timeout,
            max_retries,
            enrich_concurrency,
            config_dir,
        })
    }

    /// Client settings derived from this configuration.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api_key.clone())
            .with_base_url(self.base_url.clone())
            .with_limits(self.default_limit, self.max_limit)
            .with_timeout(self.timeout)
            .with_retry(RetryConfig {
                max_retries: self.max_retries,
                ..RetryConfig::default()
            })
            .with_enrich_concurrency(self.enrich_concurrency)
    }
}

/// Get the config directory path (~/.congress-mcp/).
pub fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("CONGRESS_MCP_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    dirs_next::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".congress-mcp")
}

/// Load and parse a TOML settings file, returning defaults on any error.
pub fn load_settings_file(path: &Path) -> SettingsFile {
    match std::fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!("Failed to parse {}: {}", path.display(), e);
            SettingsFile::default()
        }),
        Err(_) => SettingsFile::default(),
    }
}

fn parse_env<T>(env: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| invalid(key, format!("'{raw}': {e}"))),
    }
}

fn invalid(key: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn resolve(
        overrides: CliOverrides,
        env: &[(&str, &str)],
        toml_str: &str,
    ) -> Result<CongressConfig, ConfigError> {
        let env: HashMap<String, String> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let settings: SettingsFile = toml::from_str(toml_str).unwrap();
        CongressConfig::from_sources(
            overrides,
            |key| env.get(key).cloned(),
            settings,
            PathBuf::from("/tmp/congress-mcp-test"),
        )
    }

    #[test]
    fn test_default_settings() {
        let settings = SettingsFile::default();
        assert!(settings.api.api_key.is_none());
        assert!(settings.api.base_url.is_none());
    }

    #[test]
    fn test_settings_toml_parse() {
        let toml_str = r#"
[api]
base_url = "http://localhost:8080/v3"
default_limit = 50
timeout_secs = 12.5
enrich_concurrency = 4
"#;
        let settings: SettingsFile = toml::from_str(toml_str).unwrap();
        assert_eq!(
            settings.api.base_url.as_deref(),
            Some("http://localhost:8080/v3")
        );
        assert_eq!(settings.api.default_limit, Some(50));
        assert_eq!(settings.api.timeout_secs, Some(12.5));
        assert_eq!(settings.api.enrich_concurrency, Some(4));
    }

    #[test]
    fn test_defaults_with_env_key() {
        let config = resolve(
            CliOverrides::default(),
            &[("CONGRESS_API_KEY", "env-key")],
            "",
        )
        .unwrap();
        assert_eq!(config.api_key, "env-key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.default_limit, 20);
        assert_eq!(config.max_limit, 250);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.max_retries, 2);
        assert_eq!(config.enrich_concurrency, 8);
    }

    #[test]
    fn test_missing_key_points_to_sign_up() {
        let err = resolve(CliOverrides::default(), &[], "").unwrap_err();
        match err {
            ConfigError::MissingKey { key } => assert!(key.contains(SIGN_UP_URL)),
            other => panic!("expected MissingKey, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_key_is_missing() {
        let err = resolve(
            CliOverrides::default(),
            &[("CONGRESS_API_KEY", "   ")],
            "",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingKey { .. }));
    }

    #[test]
    fn test_precedence_cli_over_env_over_file() {
        let file = r#"
[api]
api_key = "file-key"
base_url = "http://file/v3"
timeout_secs = 5.0
"#;
        let env = [
            ("CONGRESS_API_KEY", "env-key"),
            ("CONGRESS_API_BASE_URL", "http://env/v3/"),
            ("CONGRESS_TIMEOUT", "10"),
        ];

        let config = resolve(CliOverrides::default(), &env, file).unwrap();
        assert_eq!(config.api_key, "env-key");
        assert_eq!(config.base_url, "http://env/v3");
        assert_eq!(config.timeout, Duration::from_secs(10));

        let config = resolve(
            CliOverrides {
                api_key: Some("cli-key".into()),
                base_url: Some("http://cli/v3".into()),
                timeout_secs: Some(2.5),
            },
            &env,
            file,
        )
        .unwrap();
        assert_eq!(config.api_key, "cli-key");
        assert_eq!(config.base_url, "http://cli/v3");
        assert_eq!(config.timeout, Duration::from_millis(2500));

        let config = resolve(CliOverrides::default(), &[], file).unwrap();
        assert_eq!(config.api_key, "file-key");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_unparsable_env_number_is_invalid() {
        let err = resolve(
            CliOverrides::default(),
            &[("CONGRESS_API_KEY", "k"), ("CONGRESS_DEFAULT_LIMIT", "lots")],
            "",
        )
        .unwrap_err();
        match err {
            ConfigError::InvalidValue { key, message } => {
                assert_eq!(key, "CONGRESS_DEFAULT_LIMIT");
                assert!(message.contains("lots"));
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_limit_bounds_validated() {
        let err = resolve(
            CliOverrides::default(),
            &[("CONGRESS_API_KEY", "k")],
            "[api]\ndefault_limit = 300\n",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "default_limit"));

        let err = resolve(
            CliOverrides::default(),
            &[("CONGRESS_API_KEY", "k"), ("CONGRESS_MAX_LIMIT", "0")],
            "",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "max_limit"));
    }

    #[test]
    fn test_small_max_limit_lowers_default() {
        let config = resolve(
            CliOverrides::default(),
            &[("CONGRESS_API_KEY", "k"), ("CONGRESS_MAX_LIMIT", "10")],
            "",
        )
        .unwrap();
        assert_eq!(config.default_limit, 10);
    }

    #[test]
    fn test_non_positive_timeout_rejected() {
        let err = resolve(
            CliOverrides {
                timeout_secs: Some(0.0),
                ..CliOverrides::default()
            },
            &[("CONGRESS_API_KEY", "k")],
            "",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "timeout"));
    }

    #[test]
    fn test_huge_timeout_rejected() {
        let err = resolve(
            CliOverrides {
                timeout_secs: Some(1e30),
                ..CliOverrides::default()
            },
            &[("CONGRESS_API_KEY", "k")],
            "",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "timeout"));

        let err = resolve(
            CliOverrides::default(),
            &[("CONGRESS_API_KEY", "k"), ("CONGRESS_TIMEOUT", "1e30")],
            "",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "timeout"));
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let err = resolve(
            CliOverrides::default(),
            &[("CONGRESS_API_KEY", "k"), ("CONGRESS_ENRICH_CONCURRENCY", "0")],
            "",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_client_config_carries_settings() {
        let config = resolve(
            CliOverrides::default(),
            &[
                ("CONGRESS_API_KEY", "k"),
                ("CONGRESS_MAX_RETRIES", "5"),
                ("CONGRESS_ENRICH_CONCURRENCY", "3"),
            ],
            "",
        )
        .unwrap();
        let client = config.client_config();
        assert_eq!(client.api_key, "k");
        assert_eq!(client.retry.max_retries, 5);
        assert_eq!(client.enrich_concurrency, 3);
        assert_eq!(client.max_limit, 250);
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = resolve(
            CliOverrides::default(),
            &[("CONGRESS_API_KEY", "hidden-key")],
            "",
        )
        .unwrap();
        assert!(!format!("{config:?}").contains("hidden-key"));
    }

    #[test]
    fn test_missing_or_malformed_file_falls_back() {
        let missing = load_settings_file(Path::new("/nonexistent/congress-mcp/config.toml"));
        assert!(missing.api.api_key.is_none());

        let path = std::env::temp_dir().join(format!(
            "congress-mcp-malformed-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "[api\napi_key = ").unwrap();
        let malformed = load_settings_file(&path);
        assert!(malformed.api.api_key.is_none());
        let _ = std::fs::remove_file(&path);
    }
}
