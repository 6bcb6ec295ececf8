//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and `TANDEM_*` environment variable overrides.
//! The browser build never reads files; it starts from [`Config::default`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::audience::AudienceConfig;
use crate::state::{Page, Timing};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub preview: PreviewConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Site behaviour shared by the UI and the CLI
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Page shown on first load
    #[serde(default)]
    pub default_page: Page,

    #[serde(default)]
    pub timing: Timing,

    #[serde(default)]
    pub audience: AudienceConfig,
}

/// Local preview server configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PreviewConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Built UI bundle to serve
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8084
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from("tandem-ui/dist")
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dist_dir: default_dist_dir(),
        }
    }
}

impl PreviewConfig {
    /// `host:port` for binding
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `pretty` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Config for a binary: `path` if given, else the default locations.
    /// Nothing is logged, so this can run before the subscriber exists;
    /// report the returned [`ConfigSource`] once logging is up.
    #[cfg(feature = "native")]
    pub fn resolve(path: Option<&Path>) -> Result<(Self, ConfigSource), ConfigError> {
        match path {
            Some(path) => Ok((Self::load_with_env(path)?, ConfigSource::File(path.to_path_buf()))),
            None => Ok(Self::search_default()),
        }
    }

    #[cfg(feature = "native")]
    fn search_default() -> (Self, ConfigSource) {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("tandem").join("config.toml")),
            Some(PathBuf::from("/etc/tandem/config.toml")),
            Some(PathBuf::from("./tandem.toml")),
        ];

        let mut skipped = Vec::new();
        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => return (config, ConfigSource::File(path.clone())),
                    Err(e) => skipped.push(e),
                }
            }
        }

        (Self::from_env(), ConfigSource::Defaults { skipped })
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup; unparsable values are ignored
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(page) = lookup("TANDEM_DEFAULT_PAGE") {
            match page.parse() {
                Ok(p) => self.site.default_page = p,
                Err(e) => tracing::warn!("Ignoring TANDEM_DEFAULT_PAGE: {}", e),
            }
        }

        if let Some(host) = lookup("TANDEM_PREVIEW_HOST") {
            self.preview.host = host;
        }
        if let Some(port) = lookup("TANDEM_PREVIEW_PORT") {
            if let Ok(p) = port.parse() {
                self.preview.port = p;
            }
        }
        if let Some(dir) = lookup("TANDEM_DIST_DIR") {
            self.preview.dist_dir = PathBuf::from(dir);
        }

        if let Some(level) = lookup("TANDEM_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("TANDEM_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Where a resolved config came from
#[derive(Debug)]
pub enum ConfigSource {
    File(PathBuf),
    /// Built-in defaults; files that existed but failed to load
    Defaults { skipped: Vec<ConfigError> },
}

impl ConfigSource {
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => tracing::debug!("Loaded config from {:?}", path),
            ConfigSource::Defaults { skipped } => {
                for e in skipped {
                    tracing::warn!("Skipped config file: {}", e);
                }
                tracing::debug!("Using default config with environment overrides");
            }
        }
    }
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Tandem Configuration
#
# Environment variables override these settings:
# - TANDEM_DEFAULT_PAGE
# - TANDEM_PREVIEW_HOST
# - TANDEM_PREVIEW_PORT
# - TANDEM_DIST_DIR
# - TANDEM_LOG_LEVEL
# - TANDEM_LOG_FORMAT

[site]
# Page shown on first load: "home" or "retro"
default_page = "retro"

[site.timing]
# How long a prompt button pulses after a click (ms)
pulse_ms = 500

# Delay before scrolling to the prompt display (ms)
scroll_delay_ms = 100

# Space kept above the prompt display when scrolled into view (px)
scroll_offset_px = 100.0

[site.audience]
# URL keyword (path, hash or query) that switches on the spotlight
keyword = "valtina"
spotlight_name = "Valtina"
mentee_name = "Mentee"
mentor_name = "Golden"
hero_image = "/assets/tandem-2025.png"

[preview]
# Address of the local preview server
host = "127.0.0.1"
port = 8084

# Built UI bundle
dist_dir = "tandem-ui/dist"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty, json
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.site.default_page, Page::Retro);
        assert_eq!(config.site.timing.pulse_ms, 500);
        assert_eq!(config.preview.addr(), "127.0.0.1:8084");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.site, SiteConfig::default());
        assert_eq!(config.preview, PreviewConfig::default());
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::parse("[site]\ndefault_page = \"home\"\n").unwrap();
        assert_eq!(config.site.default_page, Page::Home);
        assert_eq!(config.site.timing, Timing::default());
        assert_eq!(config.preview.port, 8084);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[preview]\nport = 9000\n\n[logging]\nformat = \"json\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.preview.port, 9000);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_load_errors() {
        let missing = Config::load(Path::new("/nonexistent/tandem.toml"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[site]\ndefault_page = \"blog\"").unwrap();
        assert!(matches!(Config::load(file.path()), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("TANDEM_DEFAULT_PAGE", "home"),
            ("TANDEM_PREVIEW_PORT", "9100"),
            ("TANDEM_DIST_DIR", "/srv/tandem"),
            ("TANDEM_LOG_LEVEL", "debug"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.site.default_page, Page::Home);
        assert_eq!(config.preview.port, 9100);
        assert_eq!(config.preview.dist_dir, PathBuf::from("/srv/tandem"));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_bad_overrides_are_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|k| match k {
            "TANDEM_DEFAULT_PAGE" => Some("blog".to_string()),
            "TANDEM_PREVIEW_PORT" => Some("not-a-port".to_string()),
            _ => None,
        });
        assert_eq!(config.site.default_page, Page::Retro);
        assert_eq!(config.preview.port, 8084);
    }
}
