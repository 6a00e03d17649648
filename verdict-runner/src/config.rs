//! Runner configuration
//!
//! Defines the secrets and tunables of the bot. Everything comes from the
//! environment; there are no command-line flags.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use verdict_client::DEFAULT_TELEGRAM_API_URL;

/// Review API statuses endpoint
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Pause between two polls
pub const DEFAULT_RETRY_PERIOD: Duration = Duration::from_secs(600);

/// Size at which the log file is rotated
pub const DEFAULT_LOG_FILE_MAX_BYTES: u64 = 50 * 1024 * 1024;

/// Number of rotated log files kept
pub const DEFAULT_LOG_FILE_BACKUPS: usize = 5;

/// Environment variables that must be set and non-empty
pub const REQUIRED_VARIABLES: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

/// Configuration problems; all of them are fatal at startup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Size-rotated log file settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFileConfig {
    pub path: PathBuf,
    pub max_bytes: u64,
    pub backups: usize,
}

/// Runner configuration
#[derive(Clone)]
pub struct Config {
    /// OAuth token for the review API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Chat the notifications go to
    pub telegram_chat_id: String,

    /// Review API statuses endpoint
    pub endpoint: String,

    /// Telegram Bot API base URL
    pub telegram_api_url: String,

    /// How long to sleep after every poll, successful or not
    pub retry_period: Duration,

    /// Optional log file in addition to stdout
    pub log_file: Option<LogFileConfig>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("endpoint", &self.endpoint)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("retry_period", &self.retry_period)
            .field("log_file", &self.log_file)
            .finish()
    }
}

impl Config {
    /// Creates configuration from environment variables
    ///
    /// Call [`load_dotenv`] first to pick up a `.env` file.
    ///
    /// Expected environment variables:
    /// - PRACTICUM_TOKEN (required)
    /// - TELEGRAM_TOKEN (required)
    /// - TELEGRAM_CHAT_ID (required)
    /// - RETRY_PERIOD (optional, seconds, default: 600)
    /// - PRACTICUM_ENDPOINT (optional)
    /// - TELEGRAM_API_URL (optional, default: https://api.telegram.org)
    /// - LOG_FILE (optional, enables the rotated log file)
    /// - LOG_FILE_MAX_BYTES (optional, default: 50 MiB)
    /// - LOG_FILE_BACKUPS (optional, default: 5)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Creates configuration from an arbitrary variable lookup
    ///
    /// Empty or blank values count as unset. Every missing required
    /// variable is reported at once.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let missing: Vec<&'static str> = REQUIRED_VARIABLES
            .into_iter()
            .filter(|&name| get(name).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let required = |name: &'static str| get(name).ok_or_else(|| ConfigError::Missing(vec![name]));

        let retry_period = parse_optional::<u64>(&get, "RETRY_PERIOD")?
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_RETRY_PERIOD);

        let log_file = match get("LOG_FILE") {
            Some(path) => Some(LogFileConfig {
                path: PathBuf::from(path),
                max_bytes: parse_optional(&get, "LOG_FILE_MAX_BYTES")?
                    .unwrap_or(DEFAULT_LOG_FILE_MAX_BYTES),
                backups: parse_optional(&get, "LOG_FILE_BACKUPS")?
                    .unwrap_or(DEFAULT_LOG_FILE_BACKUPS),
            }),
            None => None,
        };

        Ok(Self {
            practicum_token: required("PRACTICUM_TOKEN")?,
            telegram_token: required("TELEGRAM_TOKEN")?,
            telegram_chat_id: required("TELEGRAM_CHAT_ID")?,
            endpoint: get("PRACTICUM_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            telegram_api_url: get("TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
            retry_period,
            log_file,
        })
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, url) in [
            ("PRACTICUM_ENDPOINT", &self.endpoint),
            ("TELEGRAM_API_URL", &self.telegram_api_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::Invalid {
                    name,
                    reason: "must start with http:// or https://".to_string(),
                });
            }
        }

        if self.retry_period.is_zero() {
            return Err(ConfigError::Invalid {
                name: "RETRY_PERIOD",
                reason: "must be greater than 0".to_string(),
            });
        }

        if let Some(log_file) = &self.log_file {
            if log_file.max_bytes == 0 {
                return Err(ConfigError::Invalid {
                    name: "LOG_FILE_MAX_BYTES",
                    reason: "must be greater than 0".to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Loads a `.env` file from the working directory or one of its parents
///
/// Variables already present in the process environment are kept. A missing
/// file is not an error.
pub fn load_dotenv() -> Result<Option<PathBuf>, ConfigError> {
    dotenv_outcome(dotenvy::dotenv())
}

fn dotenv_outcome(
    result: Result<PathBuf, dotenvy::Error>,
) -> Result<Option<PathBuf>, ConfigError> {
    match result {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(ConfigError::Invalid {
            name: ".env",
            reason: e.to_string(),
        }),
    }
}

fn parse_optional<T>(
    get: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    get(name)
        .map(|raw| {
            raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
                name,
                reason: e.to_string(),
            })
        })
        .transpose()
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
        move |name| vars.get(name).cloned()
    }

    fn required() -> Vec<(&'static str, &'static str)> {
        vec![
            ("PRACTICUM_TOKEN", "y0_practicum"),
            ("TELEGRAM_TOKEN", "123:abc"),
            ("TELEGRAM_CHAT_ID", "42"),
        ]
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&required())).unwrap();

        assert_eq!(config.practicum_token, "y0_practicum");
        assert_eq!(config.telegram_chat_id, "42");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.telegram_api_url, DEFAULT_TELEGRAM_API_URL);
        assert_eq!(config.retry_period, Duration::from_secs(600));
        assert!(config.log_file.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_each_required_variable_is_fatal() {
        for name in REQUIRED_VARIABLES {
            let vars: Vec<_> = required().into_iter().filter(|(k, _)| *k != name).collect();
            assert_eq!(
                Config::from_lookup(lookup(&vars)).unwrap_err(),
                ConfigError::Missing(vec![name])
            );
        }
    }

    #[test]
    fn test_empty_values_count_as_missing() {
        let vars = [
            ("PRACTICUM_TOKEN", ""),
            ("TELEGRAM_TOKEN", "123:abc"),
            ("TELEGRAM_CHAT_ID", "  "),
        ];

        let err = Config::from_lookup(lookup(&vars)).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Missing(vec!["PRACTICUM_TOKEN", "TELEGRAM_CHAT_ID"])
        );
        assert_eq!(
            err.to_string(),
            "missing required environment variables: PRACTICUM_TOKEN, TELEGRAM_CHAT_ID"
        );
    }

    #[test]
    fn test_optional_overrides() {
        let mut vars = required();
        vars.extend([
            ("RETRY_PERIOD", "30"),
            ("PRACTICUM_ENDPOINT", "http://localhost:8080/statuses/"),
            ("LOG_FILE", "/var/log/verdict.log"),
            ("LOG_FILE_BACKUPS", "2"),
        ]);

        let config = Config::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(config.retry_period, Duration::from_secs(30));
        assert_eq!(config.endpoint, "http://localhost:8080/statuses/");
        assert_eq!(
            config.log_file,
            Some(LogFileConfig {
                path: PathBuf::from("/var/log/verdict.log"),
                max_bytes: DEFAULT_LOG_FILE_MAX_BYTES,
                backups: 2,
            })
        );
    }

    #[test]
    fn test_unparseable_override() {
        let mut vars = required();
        vars.push(("RETRY_PERIOD", "ten minutes"));

        let err = Config::from_lookup(lookup(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "RETRY_PERIOD", .. }));
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::from_lookup(lookup(&required())).unwrap();

        config.endpoint = "practicum.yandex.ru".to_string();
        assert!(config.validate().is_err());
        config.endpoint = DEFAULT_ENDPOINT.to_string();

        config.retry_period = Duration::ZERO;
        assert!(config.validate().is_err());
        config.retry_period = DEFAULT_RETRY_PERIOD;

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_dotenv_file_feeds_the_environment() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "VERDICT_DOTENV_CHAT_ID=4242\n").unwrap();

        let loaded = dotenv_outcome(dotenvy::from_path(&path).map(|()| path.clone())).unwrap();

        assert_eq!(loaded, Some(path));
        assert_eq!(std::env::var("VERDICT_DOTENV_CHAT_ID").unwrap(), "4242");
    }

    #[test]
    fn test_missing_dotenv_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");

        let loaded = dotenv_outcome(dotenvy::from_path(&path).map(|()| path.clone()));
        assert_eq!(loaded, Ok(None));
    }

    #[test]
    fn test_malformed_dotenv_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "NOT A VALID LINE\n").unwrap();

        let loaded = dotenv_outcome(dotenvy::from_path(&path).map(|()| path.clone()));
        assert!(matches!(loaded, Err(ConfigError::Invalid { name: ".env", .. })));
    }

    #[test]
    fn test_debug_redacts_tokens() {
        let config = Config::from_lookup(lookup(&required())).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("y0_practicum"));
        assert!(!debug.contains("123:abc"));
    }
}
