//! Structured logging for the globe workspace.
//!
//! Console output with uptime timestamps and module paths, plus an optional
//! JSON log file in debug builds. `RUST_LOG` takes precedence over the level
//! configured in `config.ron`.

use std::fs::File;
use std::path::{Path, PathBuf};

use globe_config::Config;
use tracing::Subscriber;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config provide one.
pub const DEFAULT_FILTER: &str = "info";

/// Log file name written inside `log_dir`.
pub const LOG_FILE_NAME: &str = "globe.log";

/// Pick the filter directives: a parseable `RUST_LOG` value first, then the
/// configured level, then [`DEFAULT_FILTER`].
pub fn resolve_filter(env: Option<&str>, config: Option<&Config>) -> String {
    if let Some(env) = env.map(str::trim).filter(|e| !e.is_empty())
        && EnvFilter::try_new(env).is_ok()
    {
        return env.to_string();
    }
    match config {
        Some(config) if !config.debug.log_level.trim().is_empty() => {
            config.debug.log_level.trim().to_string()
        }
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// Open the JSON log file, creating `log_dir` if needed.
pub fn open_log_file(log_dir: &Path) -> std::io::Result<(File, PathBuf)> {
    std::fs::create_dir_all(log_dir)?;
    let path = log_dir.join(LOG_FILE_NAME);
    Ok((File::create(&path)?, path))
}

/// One JSON object per event, without ANSI colour codes.
pub fn json_file_layer<S>(file: File) -> Box<dyn Layer<S> + Send + Sync + 'static>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_timer(fmt::time::uptime())
        .json()
        .boxed()
}

/// Install the global subscriber.
///
/// Returns the JSON log path when file logging was enabled and the file could
/// be opened. A failure to open the file is reported on stderr and logging
/// continues on the console only.
///
/// ```no_run
/// use globe_config::Config;
///
/// let config = Config::default();
/// globe_log::init_logging(None, false, Some(&config)).ok();
/// ```
pub fn init_logging(
    log_dir: Option<&Path>,
    file_logging: bool,
    config: Option<&Config>,
) -> Result<Option<PathBuf>, TryInitError> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = EnvFilter::new(resolve_filter(env.as_deref(), config));

    let console = fmt::layer()
        .with_target(true)
        .with_thread_names(true)
        .with_timer(fmt::time::uptime());

    let log_file = match log_dir.filter(|_| file_logging).map(open_log_file) {
        Some(Ok(opened)) => Some(opened),
        Some(Err(e)) => {
            eprintln!("JSON log file disabled: {e}");
            None
        }
        None => None,
    };

    let (file, path) = log_file.unzip();
    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file.map(json_file_layer))
        .try_init()?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_level(level: &str) -> Config {
        let mut config = Config::default();
        config.debug.log_level = level.to_string();
        config
    }

    #[test]
    fn test_env_beats_config() {
        let config = config_with_level("warn");
        assert_eq!(
            resolve_filter(Some("debug,globe_orbits=trace"), Some(&config)),
            "debug,globe_orbits=trace"
        );
    }

    #[test]
    fn test_config_used_without_env() {
        let config = config_with_level("warn,globe_demo=debug");
        assert_eq!(resolve_filter(None, Some(&config)), "warn,globe_demo=debug");
        assert_eq!(resolve_filter(Some("   "), Some(&config)), "warn,globe_demo=debug");
    }

    #[test]
    fn test_unparseable_env_falls_through_to_config() {
        let config = config_with_level("error");
        assert_eq!(resolve_filter(Some("globe=notalevel"), Some(&config)), "error");
    }

    #[test]
    fn test_default_when_nothing_set() {
        assert_eq!(resolve_filter(None, None), DEFAULT_FILTER);
        assert_eq!(resolve_filter(None, Some(&config_with_level(""))), DEFAULT_FILTER);
    }

    #[test]
    fn test_open_log_file_creates_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("logs").join("run");
        let (_file, path) = open_log_file(&nested).unwrap();
        assert!(path.exists());
        assert_eq!(path, nested.join(LOG_FILE_NAME));
    }

    #[test]
    fn test_json_layer_writes_structured_events() {
        let temp_dir = tempfile::tempdir().unwrap();
        let (file, path) = open_log_file(temp_dir.path()).unwrap();
        let subscriber = tracing_subscriber::registry().with(json_file_layer(file));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(particles = 2000, "scene ready");
        });

        let contents = std::fs::read_to_string(path).unwrap();
        let line = contents.lines().next().expect("one event written");
        let event: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(event["level"], "INFO");
        assert_eq!(event["fields"]["message"], "scene ready");
        assert_eq!(event["fields"]["particles"], 2000);
        assert!(!line.contains('\u{1b}'), "ANSI escape in file output");
    }
}
