//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.ctable/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::core::projection::ProjectionMode;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CtableConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub escape_timeout_ms: Option<u64>,
    pub align_missing: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ESCAPE_TIMEOUT_MS: u64 = 25;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub escape_timeout: Duration,
    pub projection: ProjectionMode,
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

/// Values given on the command line (None / false = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub escape_timeout_ms: Option<u64>,
    pub align_missing: bool,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.ctable/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".ctable"))
}

/// Returns the path to `~/.ctable/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.ctable/config.toml`.
pub fn load_config() -> Result<CtableConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(CtableConfig::default())
        }
    }
}

/// Load config from `path`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `CtableConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<CtableConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(CtableConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: CtableConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# ctable Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# escape_timeout_ms = 25     # Wait after Esc before treating it as quit (CTABLE_ESCAPE_TIMEOUT_MS)
# align_missing = false      # Pad records lacking a column with a blank cell

# [logging]
# level = "info"             # "off", "error", "warn", "info", "debug", "trace" (CTABLE_LOG)
# file = "/path/to/ctable.log"  # Default: ~/.ctable/ctable.log (CTABLE_LOG_FILE)
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &CtableConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &CtableConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Escape timeout: CLI → env → config → default
    let escape_timeout_ms = cli
        .escape_timeout_ms
        .or_else(|| {
            env("CTABLE_ESCAPE_TIMEOUT_MS").and_then(|v| match v.trim().parse() {
                Ok(ms) => Some(ms),
                Err(_) => {
                    warn!("Ignoring invalid CTABLE_ESCAPE_TIMEOUT_MS: {v}");
                    None
                }
            })
        })
        .or(config.general.escape_timeout_ms)
        .unwrap_or(DEFAULT_ESCAPE_TIMEOUT_MS);

    // Missing-cell padding: CLI flag can only turn it on
    let projection = if cli.align_missing || config.general.align_missing.unwrap_or(false) {
        ProjectionMode::Aligned
    } else {
        ProjectionMode::Ragged
    };

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| env("CTABLE_LOG"))
        .or_else(|| config.logging.level.clone())
        .and_then(|level| match LevelFilter::from_str(level.trim()) {
            Ok(filter) => Some(filter),
            Err(_) => {
                warn!("Unknown log level {level:?}, using {DEFAULT_LOG_LEVEL}");
                None
            }
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Log file: CLI → env → config → ~/.ctable/ctable.log
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| env("CTABLE_LOG_FILE").map(PathBuf::from))
        .or_else(|| config.logging.file.clone())
        .or_else(|| config_dir().map(|d| d.join("ctable.log")));

    ResolvedConfig {
        escape_timeout: Duration::from_millis(escape_timeout_ms),
        projection,
        log_level,
        log_file,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = CtableConfig::default();
        assert!(config.general.escape_timeout_ms.is_none());
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&CtableConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(
            resolved.escape_timeout,
            Duration::from_millis(DEFAULT_ESCAPE_TIMEOUT_MS)
        );
        assert_eq!(resolved.projection, ProjectionMode::Ragged);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = CtableConfig {
            general: GeneralConfig {
                escape_timeout_ms: Some(100),
                align_missing: Some(true),
            },
            logging: LoggingConfig {
                level: Some("debug".to_string()),
                file: Some(PathBuf::from("/tmp/ctable-test.log")),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.escape_timeout, Duration::from_millis(100));
        assert_eq!(resolved.projection, ProjectionMode::Aligned);
        assert_eq!(resolved.log_level, LevelFilter::Debug);
        assert_eq!(resolved.log_file, Some(PathBuf::from("/tmp/ctable-test.log")));
    }

    #[test]
    fn test_env_beats_config_and_cli_beats_env() {
        let config = CtableConfig {
            general: GeneralConfig {
                escape_timeout_ms: Some(100),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = |key: &str| match key {
            "CTABLE_ESCAPE_TIMEOUT_MS" => Some("50".to_string()),
            "CTABLE_LOG" => Some("warn".to_string()),
            _ => None,
        };

        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.escape_timeout, Duration::from_millis(50));
        assert_eq!(resolved.log_level, LevelFilter::Warn);

        let cli = CliOverrides {
            escape_timeout_ms: Some(0),
            log_level: Some("trace".to_string()),
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &cli, env);
        assert_eq!(resolved.escape_timeout, Duration::ZERO);
        assert_eq!(resolved.log_level, LevelFilter::Trace);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let env = |key: &str| match key {
            "CTABLE_ESCAPE_TIMEOUT_MS" => Some("soon".to_string()),
            "CTABLE_LOG" => Some("loud".to_string()),
            _ => None,
        };
        let resolved = resolve_with_env(&CtableConfig::default(), &CliOverrides::default(), env);
        assert_eq!(
            resolved.escape_timeout,
            Duration::from_millis(DEFAULT_ESCAPE_TIMEOUT_MS)
        );
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[general]
align_missing = true
"#;
        let config: CtableConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.align_missing, Some(true));
        assert!(config.general.escape_timeout_ms.is_none());
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_missing_file_generates_commented_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = load_config_from(&path).unwrap();
        assert!(config.general.escape_timeout_ms.is_none());
        assert!(path.exists());

        // The generated file is all comments, so it loads back as defaults.
        let reloaded = load_config_from(&path).unwrap();
        assert!(reloaded.general.align_missing.is_none());
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general]\nescape_timeout_ms = \"fast\"\n").unwrap();

        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_full_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[general]\nescape_timeout_ms = 10\n\n[logging]\nlevel = \"error\"\nfile = \"/var/tmp/x.log\"\n",
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.general.escape_timeout_ms, Some(10));
        assert_eq!(config.logging.level.as_deref(), Some("error"));
        assert_eq!(config.logging.file, Some(PathBuf::from("/var/tmp/x.log")));
    }
}
