//! Runtime configuration for the dashboard.
//!
//! Defaults are embedded in the bundle. A TOML document stored under the
//! `app_config` localStorage key replaces them, which is how a deployment points
//! the client at a different API host without rebuilding.

use once_cell::sync::OnceCell;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Full origin of the REST server. Empty means "same host as the page".
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl LoggingConfig {
    /// Unknown level names fall back to `Debug`.
    pub fn level(&self) -> log::Level {
        self.level.parse().unwrap_or(log::Level::Debug)
    }
}

fn default_port() -> u16 {
    8080
}

fn default_level() -> String {
    "debug".to_string()
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
port = 8080

[logging]
level = "debug"
"#;

pub const CONFIG_STORAGE_KEY: &str = "app_config";

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

/// Parse a configuration document.
pub fn parse_config(contents: &str) -> anyhow::Result<AppConfig> {
    let config: AppConfig = toml::from_str(contents)?;
    Ok(config)
}

/// Result of loading configuration, with the messages produced on the way.
///
/// Loading runs before the logger exists, so messages are returned to the caller
/// instead of being logged here.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub messages: Vec<(log::Level, String)>,
}

fn fallback_config() -> AppConfig {
    AppConfig {
        api: ApiConfig {
            base_url: String::new(),
            port: default_port(),
        },
        logging: LoggingConfig::default(),
    }
}

/// Picks the stored override when it parses, the embedded defaults otherwise.
pub fn select_config(stored: Option<&str>) -> LoadedConfig {
    let mut messages = Vec::new();
    if let Some(contents) = stored {
        match parse_config(contents) {
            Ok(config) => {
                messages.push((
                    log::Level::Info,
                    format!("Loading config from localStorage[{}]", CONFIG_STORAGE_KEY),
                ));
                return LoadedConfig { config, messages };
            }
            Err(e) => messages.push((
                log::Level::Warn,
                format!("Ignoring invalid stored config: {}", e),
            )),
        }
    }

    let config = parse_config(DEFAULT_CONFIG).unwrap_or_else(|e| {
        messages.push((log::Level::Error, format!("Failed to load config: {}", e)));
        fallback_config()
    });
    LoadedConfig { config, messages }
}

/// Load configuration
///
/// Search order:
/// 1. `localStorage["app_config"]`
/// 2. Falls back to embedded default config
pub fn load_config() -> LoadedConfig {
    select_config(stored_override().as_deref())
}

fn stored_override() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(CONFIG_STORAGE_KEY)
        .ok()?
        .filter(|s| !s.trim().is_empty())
}

/// Loads and pins the process-wide configuration. Returns the messages to log
/// once a logger is installed.
pub fn init_config() -> Vec<(log::Level, String)> {
    let loaded = load_config();
    let mut messages = loaded.messages;
    if CONFIG.set(loaded.config).is_err() {
        messages.push((log::Level::Debug, "Config already initialized".to_string()));
    }
    messages
}

/// Process-wide configuration, loaded on first use.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| load_config().config)
}

/// API origin for a page served from `protocol//hostname`.
pub fn resolve_base(api: &ApiConfig, protocol: &str, hostname: &str) -> String {
    let configured = api.base_url.trim().trim_end_matches('/');
    if !configured.is_empty() {
        return configured.to_string();
    }
    format!("{}//{}:{}", protocol, hostname, api.port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.base_url, "");
        assert_eq!(config.api.port, 8080);
        assert_eq!(config.logging.level(), log::Level::Debug);
    }

    #[test]
    fn partial_override_keeps_defaults() {
        let config = parse_config("[api]\nbase_url = \"https://wms.example.com/\"\n").unwrap();
        assert_eq!(config.api.port, 8080);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(
            resolve_base(&config.api, "http:", "localhost"),
            "https://wms.example.com"
        );
    }

    #[test]
    fn base_derived_from_location_when_blank() {
        let config = parse_config("[api]\nport = 9000\n[logging]\nlevel = \"warn\"\n").unwrap();
        assert_eq!(
            resolve_base(&config.api, "https:", "10.0.0.5"),
            "https://10.0.0.5:9000"
        );
        assert_eq!(config.logging.level(), log::Level::Warn);
    }

    #[test]
    fn unknown_level_is_debug() {
        let logging = LoggingConfig {
            level: "chatty".into(),
        };
        assert_eq!(logging.level(), log::Level::Debug);
    }

    #[test]
    fn broken_document_is_rejected() {
        assert!(parse_config("[api\nport = ").is_err());
    }

    #[test]
    fn invalid_override_falls_back_with_warning() {
        let loaded = select_config(Some("[api\nport = "));
        assert_eq!(loaded.config, parse_config(DEFAULT_CONFIG).unwrap());
        assert_eq!(loaded.messages.len(), 1);
        assert_eq!(loaded.messages[0].0, log::Level::Warn);
        assert!(loaded.messages[0].1.starts_with("Ignoring invalid stored config"));
    }

    #[test]
    fn valid_override_is_used() {
        let loaded = select_config(Some("[api]\nport = 9100\n"));
        assert_eq!(loaded.config.api.port, 9100);
        assert_eq!(loaded.messages[0].0, log::Level::Info);

        let defaults = select_config(None);
        assert_eq!(defaults.config.api.port, 8080);
        assert!(defaults.messages.is_empty());
    }
}
