//! Run configuration: the core's construction contract plus the optional
//! TOML overlay that fills in values the CLI left unset.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::args::ProbeArgs;
use crate::error::{AppError, AppResult, ConfigError, ValidationError};

pub const MIN_WORKERS: usize = 10;
pub const MAX_WORKERS: usize = 250;
pub const DEFAULT_WORKERS: usize = 100;
pub const DEFAULT_PORT: u16 = 80;

/// Default config filename checked when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "wafprobe.toml";

/// Default usage-log path for authorization confirmations.
pub const DEFAULT_USAGE_LOG: &str = "usage_log.txt";

/// Construction contract of the request-generation core. The core performs
/// no parsing or prompting; it receives this structure pre-validated and
/// fails fast when it is not.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub host: String,
    pub port: u16,
    pub use_tls: bool,
    /// Must be within [`MIN_WORKERS`, `MAX_WORKERS`]; the args layer clamps
    /// before the core ever sees the value.
    pub worker_count: usize,
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub run: RunConfig,
    pub authorized: bool,
    pub usage_log: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub tls: Option<bool>,
    #[serde(alias = "concurrency")]
    pub workers: Option<usize>,
    pub authorized: Option<bool>,
    pub usage_log: Option<String>,
}

impl ConfigFile {
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|err| {
            AppError::config(ConfigError::Read {
                path: path.to_path_buf(),
                source: err,
            })
        })?;
        toml::from_str(&content).map_err(|err| {
            AppError::config(ConfigError::Parse {
                path: path.to_path_buf(),
                source: err,
            })
        })
    }
}

/// Merges CLI args over the optional config file and clamps the worker
/// count into the supported range.
///
/// # Errors
///
/// Returns a validation error when no target host is supplied anywhere.
pub fn resolve(args: &ProbeArgs, file: &ConfigFile) -> AppResult<Settings> {
    let host = args
        .host
        .clone()
        .or_else(|| file.host.clone())
        .ok_or_else(|| AppError::validation(ValidationError::TargetHostEmpty))?;
    let port = args.port.or(file.port).unwrap_or(DEFAULT_PORT);
    let use_tls = args.tls || file.tls.unwrap_or(false);
    let worker_count = clamp_workers(args.workers.or(file.workers).unwrap_or(DEFAULT_WORKERS));
    let authorized = args.authorized || file.authorized.unwrap_or(false);
    let usage_log = args
        .usage_log
        .clone()
        .or_else(|| file.usage_log.clone().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_USAGE_LOG));

    Ok(Settings {
        run: RunConfig {
            host,
            port,
            use_tls,
            worker_count,
        },
        authorized,
        usage_log,
    })
}

/// Out-of-range worker counts are clamped here, in the input layer; the
/// core itself rejects rather than clamps.
#[must_use]
pub fn clamp_workers(requested: usize) -> usize {
    let clamped = requested.clamp(MIN_WORKERS, MAX_WORKERS);
    if clamped != requested {
        warn!(requested, clamped, "worker count clamped into supported range");
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn bare_args() -> ProbeArgs {
        ProbeArgs {
            host: None,
            port: None,
            tls: false,
            workers: None,
            config: None,
            authorized: false,
            usage_log: None,
            verbose: false,
        }
    }

    #[test]
    fn clamps_low_and_high_worker_counts() {
        assert_eq!(clamp_workers(5), 10);
        assert_eq!(clamp_workers(10), 10);
        assert_eq!(clamp_workers(100), 100);
        assert_eq!(clamp_workers(250), 250);
        assert_eq!(clamp_workers(1000), 250);
    }

    #[test]
    fn cli_wins_over_config_file() -> AppResult<()> {
        let mut args = bare_args();
        args.host = Some("cli.test".to_owned());
        args.port = Some(8443);
        args.tls = true;
        let file = ConfigFile {
            host: Some("file.test".to_owned()),
            port: Some(9000),
            tls: Some(false),
            workers: Some(10),
            authorized: None,
            usage_log: None,
        };
        let settings = resolve(&args, &file)?;
        assert_eq!(settings.run.host, "cli.test");
        assert_eq!(settings.run.port, 8443);
        assert!(settings.run.use_tls);
        assert_eq!(settings.run.worker_count, 10);
        Ok(())
    }

    #[test]
    fn defaults_apply_when_nothing_set() -> AppResult<()> {
        let mut args = bare_args();
        args.host = Some("defaults.test".to_owned());
        let settings = resolve(&args, &ConfigFile::default())?;
        assert_eq!(settings.run.port, DEFAULT_PORT);
        assert!(!settings.run.use_tls);
        assert_eq!(settings.run.worker_count, DEFAULT_WORKERS);
        assert!(!settings.authorized);
        assert_eq!(settings.usage_log, PathBuf::from(DEFAULT_USAGE_LOG));
        Ok(())
    }

    #[test]
    fn missing_host_is_a_validation_error() {
        assert!(resolve(&bare_args(), &ConfigFile::default()).is_err());
    }

    #[test]
    fn loads_toml_file() -> AppResult<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(
            file,
            "host = \"10.0.0.5\"\nport = 8080\nworkers = 42\nauthorized = true"
        )?;
        let config = ConfigFile::load(file.path())?;
        assert_eq!(config.host.as_deref(), Some("10.0.0.5"));
        assert_eq!(config.port, Some(8080));
        assert_eq!(config.workers, Some(42));
        assert_eq!(config.authorized, Some(true));
        Ok(())
    }
}
