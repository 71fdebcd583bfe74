//! Startup configuration
//!
//! Settings are resolved once in `main` and handed to the diagnosis client.
//! Precedence (lowest first): built-in defaults, the optional JSON file in
//! the user's config directory, then environment variables.

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::diagnosis::Language;
use crate::error::ConfigError;

/// Response ceiling sent with every request (token-equivalent units)
pub const MAX_RESPONSE_TOKENS: u32 = 512;

/// Model used when nothing else is configured
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// OpenAI-compatible API root
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

const ENV_API_KEY: &str = "OPENAI_API_KEY";
const ENV_MODEL: &str = "PLANT_DOC_MODEL";
const ENV_BASE_URL: &str = "PLANT_DOC_BASE_URL";
const ENV_TIMEOUT: &str = "PLANT_DOC_TIMEOUT_SECS";
const ENV_LANGUAGE: &str = "PLANT_DOC_LANGUAGE";
const ENV_CONFIG_DIR: &str = "PLANT_DOC_CONFIG_DIR";

/// On-disk config file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct FileConfig {
    api_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
    request_timeout_secs: Option<u64>,
    language: Option<Language>,
}

/// Fully resolved settings for the inference provider
#[derive(Clone, PartialEq)]
pub struct Config {
    /// Bearer credential for the provider
    pub api_key: String,
    /// Model identifier sent with each request
    pub model: String,
    /// API root, without trailing slash
    pub base_url: String,
    /// Optional ceiling on a single request; `None` waits indefinitely
    pub request_timeout: Option<Duration>,
    /// UI language the window opens with
    pub language: Language,
}

impl Config {
    /// Load the config from the user's config file and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path();
        let file = match &path {
            Some(path) => read_file_config(path)?,
            None => FileConfig::default(),
        };

        let location = path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "the config file".to_string());

        Self::resolve(file, |key| std::env::var(key).ok(), &location)
    }

    /// Merge file values with environment overrides.
    ///
    /// `env` is injected so tests do not have to touch the real environment.
    fn resolve<F>(file: FileConfig, env: F, location: &str) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = |key: &str| env(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_key = env(ENV_API_KEY)
            .or_else(|| file.api_key.filter(|k| !k.trim().is_empty()))
            .ok_or_else(|| ConfigError::MissingCredential(location.to_string()))?;

        let model = env(ENV_MODEL)
            .or(file.model)
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let base_url = env(ENV_BASE_URL)
            .or(file.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs = match env(ENV_TIMEOUT) {
            Some(raw) => Some(raw.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                key: ENV_TIMEOUT,
                value: raw.clone(),
            })?),
            None => file.request_timeout_secs,
        };

        let language = match env(ENV_LANGUAGE) {
            Some(raw) => raw.parse::<Language>().map_err(|_| ConfigError::InvalidValue {
                key: ENV_LANGUAGE,
                value: raw.clone(),
            })?,
            None => file.language.unwrap_or_default(),
        };

        Ok(Config {
            api_key,
            model,
            base_url,
            request_timeout: timeout_secs.filter(|s| *s > 0).map(Duration::from_secs),
            language,
        })
    }

    /// Full URL of the chat completions endpoint
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

// The credential must never end up in logs
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .field("language", &self.language)
            .finish()
    }
}

/// Where the config file lives:
/// - `$PLANT_DOC_CONFIG_DIR/config.json` when set
/// - Linux: ~/.config/plant-doc/config.json
/// - macOS: ~/Library/Application Support/plant-doc/config.json
/// - Windows: %APPDATA%\plant-doc\config.json
fn config_path() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        return Some(PathBuf::from(dir).join("config.json"));
    }

    let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
    path.push("plant-doc");
    path.push("config.json");
    Some(path)
}

/// Read the config file; a missing file just means "use defaults"
fn read_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
    if !path.exists() {
        log::debug!("No config file at {}, using defaults", path.display());
        return Ok(FileConfig::default());
    }

    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::File {
        path: path.to_path_buf(),
        source,
    })?;

    let file = serde_json::from_str(&raw).map_err(|source| ConfigError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("📁 Loaded config from {}", path.display());
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_credential_is_an_error() {
        let result = Config::resolve(FileConfig::default(), env_of(&[]), "config.json");
        assert!(matches!(result, Err(ConfigError::MissingCredential(_))));
    }

    #[test]
    fn test_blank_credential_counts_as_missing() {
        let result = Config::resolve(
            FileConfig::default(),
            env_of(&[(ENV_API_KEY, "   ")]),
            "config.json",
        );
        assert!(matches!(result, Err(ConfigError::MissingCredential(_))));
    }

    #[test]
    fn test_defaults_with_env_credential() {
        let config = Config::resolve(
            FileConfig::default(),
            env_of(&[(ENV_API_KEY, "sk-test")]),
            "config.json",
        )
        .unwrap();

        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout, None);
        assert_eq!(config.language, Language::En);
        assert_eq!(
            config.completions_url(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_env_overrides_file() {
        let file = FileConfig {
            api_key: Some("from-file".to_string()),
            model: Some("file-model".to_string()),
            base_url: Some("http://file.local/v1/".to_string()),
            request_timeout_secs: Some(10),
            language: Some(Language::Pt),
        };
        let config = Config::resolve(
            file,
            env_of(&[
                (ENV_MODEL, "env-model"),
                (ENV_TIMEOUT, "30"),
                (ENV_LANGUAGE, "es"),
            ]),
            "config.json",
        )
        .unwrap();

        assert_eq!(config.api_key, "from-file");
        assert_eq!(config.model, "env-model");
        assert_eq!(config.base_url, "http://file.local/v1");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.language, Language::Es);
    }

    #[test]
    fn test_unknown_language_is_rejected() {
        let result = Config::resolve(
            FileConfig::default(),
            env_of(&[(ENV_API_KEY, "sk"), (ENV_LANGUAGE, "fr")]),
            "config.json",
        );
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { key: ENV_LANGUAGE, .. })
        ));
    }

    #[test]
    fn test_invalid_timeout_is_rejected() {
        let result = Config::resolve(
            FileConfig::default(),
            env_of(&[(ENV_API_KEY, "sk"), (ENV_TIMEOUT, "soon")]),
            "config.json",
        );
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { key: ENV_TIMEOUT, .. })
        ));
    }

    #[test]
    fn test_debug_redacts_credential() {
        let config = Config::resolve(
            FileConfig::default(),
            env_of(&[(ENV_API_KEY, "sk-secret")]),
            "config.json",
        )
        .unwrap();
        let printed = format!("{:?}", config);
        assert!(!printed.contains("sk-secret"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn test_read_file_config() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");

        // Missing file falls back to defaults
        let file = read_file_config(&path).unwrap();
        assert!(file.api_key.is_none());

        std::fs::write(&path, r#"{"apiKey": "sk-file", "requestTimeoutSecs": 45, "language": "pt"}"#).unwrap();
        let file = read_file_config(&path).unwrap();
        assert_eq!(file.api_key.as_deref(), Some("sk-file"));
        assert_eq!(file.request_timeout_secs, Some(45));
        assert_eq!(file.language, Some(Language::Pt));

        std::fs::write(&path, "{broken").unwrap();
        assert!(matches!(
            read_file_config(&path),
            Err(ConfigError::Malformed { .. })
        ));
    }
}
