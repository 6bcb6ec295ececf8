//! Log subscriber setup for the binaries

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Default directives when `RUST_LOG` is unset
pub fn default_directives(config: &LoggingConfig) -> String {
    format!("tandem={level},tower_http={level}", level = config.level)
}

/// Install the global subscriber on stderr. `RUST_LOG` wins over the
/// configured level; `format = "json"` switches to one JSON object per line.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(config)));

    let registry = tracing_subscriber::registry().with(filter);

    if config.format.eq_ignore_ascii_case("json") {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ConfigSource};
    use std::io::{self, Write};
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_default_directives() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            ..LoggingConfig::default()
        };
        assert_eq!(default_directives(&config), "tandem=debug,tower_http=debug");
    }

    #[test]
    fn test_file_logging_reaches_directives() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"debug\"\nformat = \"json\"").unwrap();

        let (config, source) = Config::resolve(Some(file.path())).unwrap();
        assert!(matches!(source, ConfigSource::File(ref p) if p == file.path()));
        assert_eq!(config.logging.format, "json");
        assert_eq!(default_directives(&config.logging), "tandem=debug,tower_http=debug");
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        assert!(Config::resolve(Some(Path::new("/nonexistent/tandem.toml"))).is_err());
    }

    #[test]
    fn test_config_source_is_quiet_at_info() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            ConfigSource::File(PathBuf::from("tandem.toml")).log();
            ConfigSource::Defaults { skipped: Vec::new() }.log();
        });

        assert!(captured.0.lock().unwrap().is_empty());
    }
}
