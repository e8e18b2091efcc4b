//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.taskpad/config.toml` unless `--config` points
//! elsewhere. If the default file is missing on first run, a commented-out
//! default is generated so users can discover all options.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::LogLevel;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TaskpadConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<LogLevel>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiConfig {
    pub title: Option<String>,
    pub striped_rows: Option<bool>,
    pub mouse: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "taskpad.log";
pub const DEFAULT_TITLE: &str = "to.do";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub log_level: LogLevel,
    pub log_file: PathBuf,
    pub title: String,
    pub striped_rows: bool,
    pub mouse: bool,
    /// Problems found while resolving. The logger isn't up yet at that
    /// point, so `main` logs these after init.
    pub warnings: Vec<String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve(&TaskpadConfig::default(), &CliOverrides::default())
    }
}

/// Values given on the command line. `None` means "not specified".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub log_level: Option<LogLevel>,
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

/// Returns the path to `~/.taskpad/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".taskpad").join("config.toml"))
}

/// Where the config came from, for logging once the logger is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Generated(PathBuf),
    /// The default file was missing and writing the template failed.
    GenerateFailed { path: PathBuf, reason: String },
    Defaults,
}

/// Load config from `explicit` or `~/.taskpad/config.toml`.
///
/// An explicit path must exist. A missing default file gets a commented-out
/// template written and yields `TaskpadConfig::default()`. Malformed files
/// return `ConfigError::Parse`.
pub fn load_config(explicit: Option<&Path>) -> Result<(TaskpadConfig, ConfigSource), ConfigError> {
    if let Some(path) = explicit {
        let config = read_config(path)?;
        return Ok((config, ConfigSource::File(path.to_path_buf())));
    }

    let Some(path) = config_path() else {
        return Ok((TaskpadConfig::default(), ConfigSource::Defaults));
    };

    if !path.exists() {
        let source = match generate_default_config(&path) {
            Ok(()) => ConfigSource::Generated(path),
            Err(e) => ConfigSource::GenerateFailed {
                path,
                reason: e.to_string(),
            },
        };
        return Ok((TaskpadConfig::default(), source));
    }

    let config = read_config(&path)?;
    Ok((config, ConfigSource::File(path)))
}

fn read_config(path: &Path) -> Result<TaskpadConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    let default_content = r#"# taskpad configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "info"             # "error", "warn", "info", "debug", "trace"
#                                # or set TASKPAD_LOG_LEVEL
# log_file = "taskpad.log"       # or set TASKPAD_LOG_FILE

# [ui]
# title = "to.do"                # header title
# striped_rows = true            # alternate row background
# mouse = true                   # clickable markers and buttons
"#;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_content)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &TaskpadConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &TaskpadConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let mut warnings = Vec::new();

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .or_else(|| {
            env("TASKPAD_LOG_LEVEL").and_then(|raw| match LogLevel::from_str(raw.trim(), true) {
                Ok(level) => Some(level),
                Err(_) => {
                    warnings.push(format!("Ignoring unknown TASKPAD_LOG_LEVEL {:?}", raw));
                    None
                }
            })
        })
        .or(config.general.log_level)
        .unwrap_or_default();

    // Log file: CLI → env → config → default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| env("TASKPAD_LOG_FILE").map(PathBuf::from))
        .or_else(|| config.general.log_file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    ResolvedConfig {
        log_level,
        log_file,
        title: config
            .ui
            .title
            .clone()
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        striped_rows: config.ui.striped_rows.unwrap_or(true),
        mouse: config.ui.mouse.unwrap_or(true),
        warnings,
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
        let config = TaskpadConfig::default();
        assert!(config.general.log_level.is_none());
        assert!(config.ui.title.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&TaskpadConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.log_level, LogLevel::Info);
        assert_eq!(resolved.log_file, PathBuf::from(DEFAULT_LOG_FILE));
        assert_eq!(resolved.title, DEFAULT_TITLE);
        assert!(resolved.striped_rows);
        assert!(resolved.mouse);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = TaskpadConfig {
            general: GeneralConfig {
                log_level: Some(LogLevel::Debug),
                log_file: Some("/tmp/tasks.log".to_string()),
            },
            ui: UiConfig {
                title: Some("chores".to_string()),
                striped_rows: Some(false),
                mouse: Some(false),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.log_level, LogLevel::Debug);
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/tasks.log"));
        assert_eq!(resolved.title, "chores");
        assert!(!resolved.striped_rows);
        assert!(!resolved.mouse);
    }

    #[test]
    fn test_env_beats_config_file() {
        let config = TaskpadConfig {
            general: GeneralConfig {
                log_level: Some(LogLevel::Warn),
                log_file: Some("file.log".to_string()),
            },
            ..Default::default()
        };
        let env = |key: &str| match key {
            "TASKPAD_LOG_LEVEL" => Some("TRACE".to_string()),
            "TASKPAD_LOG_FILE" => Some("env.log".to_string()),
            _ => None,
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.log_level, LogLevel::Trace);
        assert_eq!(resolved.log_file, PathBuf::from("env.log"));
    }

    #[test]
    fn test_unknown_env_level_falls_through() {
        let config = TaskpadConfig {
            general: GeneralConfig {
                log_level: Some(LogLevel::Error),
                log_file: None,
            },
            ..Default::default()
        };
        let env = |key: &str| (key == "TASKPAD_LOG_LEVEL").then(|| "loud".to_string());
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.log_level, LogLevel::Error);
        assert_eq!(resolved.warnings.len(), 1);
        assert!(resolved.warnings[0].contains("\"loud\""));
    }

    #[test]
    fn test_valid_env_level_has_no_warnings() {
        let env = |key: &str| (key == "TASKPAD_LOG_LEVEL").then(|| "Debug".to_string());
        let resolved = resolve_with_env(&TaskpadConfig::default(), &CliOverrides::default(), env);
        assert_eq!(resolved.log_level, LogLevel::Debug);
        assert!(resolved.warnings.is_empty());
    }

    #[test]
    fn test_unwritable_default_returns_error() {
        // A regular file where the config directory should be
        let blocker = std::env::temp_dir().join(format!("taskpad-blocker-{}", std::process::id()));
        fs::write(&blocker, "").unwrap();
        let path = blocker.join("config.toml");

        let result = generate_default_config(&path);
        assert!(result.is_err());

        fs::remove_file(&blocker).unwrap();
    }

    #[test]
    fn test_cli_wins() {
        let cli = CliOverrides {
            log_level: Some(LogLevel::Error),
            log_file: Some(PathBuf::from("cli.log")),
        };
        let env = |_: &str| Some("debug".to_string());
        let resolved = resolve_with_env(&TaskpadConfig::default(), &cli, env);
        assert_eq!(resolved.log_level, LogLevel::Error);
        assert_eq!(resolved.log_file, PathBuf::from("cli.log"));
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
log_level = "debug"
log_file = "/var/tmp/taskpad.log"

[ui]
title = "Groceries"
striped_rows = false
mouse = true
"#;
        let config: TaskpadConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level, Some(LogLevel::Debug));
        assert_eq!(config.general.log_file.as_deref(), Some("/var/tmp/taskpad.log"));
        assert_eq!(config.ui.title.as_deref(), Some("Groceries"));
        assert_eq!(config.ui.striped_rows, Some(false));
        assert_eq!(config.ui.mouse, Some(true));
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[ui]
striped_rows = false
"#;
        let config: TaskpadConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ui.striped_rows, Some(false));
        assert!(config.ui.title.is_none());
        assert!(config.general.log_level.is_none());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("taskpad-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        fs::write(&path, "[general\nlog_level = ").unwrap();

        let result = load_config(Some(&path));
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_explicit_file_is_io_error() {
        let path = std::env::temp_dir().join("taskpad-definitely-missing.toml");
        let result = load_config(Some(&path));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_explicit_file_loads() {
        let dir = std::env::temp_dir().join(format!("taskpad-config-ok-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[ui]\ntitle = \"mine\"\n").unwrap();

        let (config, source) = load_config(Some(&path)).unwrap();
        assert_eq!(config.ui.title.as_deref(), Some("mine"));
        assert_eq!(source, ConfigSource::File(path.clone()));

        fs::remove_dir_all(&dir).unwrap();
    }
}
