//! Configuration system for the `TermTask` client.
//!
//! Supports layered configuration with the following priority (highest first):
//! 1. CLI arguments
//! 2. Environment variables (via clap `env` attribute)
//! 3. TOML config file (`~/.config/termtask/config.toml`)
//! 4. Compiled defaults
//!
//! Missing config file is not an error (defaults are used). An explicit
//! `--config` path that doesn't exist is an error.

use std::path::PathBuf;
use std::time::Duration;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),

    /// Could not determine the user's data directory.
    #[error("could not determine data directory (no HOME or XDG_DATA_HOME)")]
    NoDataDir,
}

// ---------------------------------------------------------------------------
// TOML file structs (all fields Option for partial overrides)
// ---------------------------------------------------------------------------

/// Top-level TOML config file structure.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ConfigFile {
    storage: StorageFileConfig,
    sweep: SweepFileConfig,
    reminders: RemindersFileConfig,
    ui: UiFileConfig,
}

/// `[storage]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct StorageFileConfig {
    data_file: Option<String>,
}

/// `[sweep]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct SweepFileConfig {
    interval_secs: Option<u64>,
}

/// `[reminders]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct RemindersFileConfig {
    window_hours: Option<i64>,
}

/// `[ui]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct UiFileConfig {
    poll_timeout_ms: Option<u64>,
    date_format: Option<String>,
    categories: Option<Vec<String>>,
    assignees: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Resolved configuration (concrete types, all fields populated)
// ---------------------------------------------------------------------------

/// Fully resolved application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    // -- Storage --
    /// Snapshot file path; `None` falls back to the platform data dir.
    pub data_file: Option<PathBuf>,

    // -- Sweeps --
    /// Interval between reminder / rollover sweeps.
    pub sweep_interval: Duration,
    /// Reminder look-ahead window in hours.
    pub reminder_window_hours: i64,

    // -- UI --
    /// Poll timeout for the TUI event loop.
    pub poll_timeout: Duration,
    /// Due-date entry/display format string (chrono).
    pub date_format: String,
    /// Category presets offered by the entry form and filter panel.
    pub categories: Vec<String>,
    /// Assignee presets offered by the entry form and filter panel.
    pub assignees: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            sweep_interval: Duration::from_secs(3600),
            reminder_window_hours: 24,
            poll_timeout: Duration::from_millis(50),
            date_format: "%Y-%m-%d".to_owned(),
            categories: vec![
                "Personal".to_owned(),
                "Work".to_owned(),
                "Shopping".to_owned(),
                "Health".to_owned(),
            ],
            assignees: vec![
                "Me".to_owned(),
                "John".to_owned(),
                "Sarah".to_owned(),
                "Mike".to_owned(),
            ],
        }
    }
}

impl AppConfig {
    /// Load configuration by merging CLI args and a TOML file.
    ///
    /// If `--config` is given and the file does not exist, returns an
    /// error. If no `--config` is given, the default path
    /// (`~/.config/termtask/config.toml`) is tried and silently ignored
    /// if missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the explicit config file cannot be read
    /// or parsed.
    pub fn load(cli: &CliArgs) -> Result<Self, ConfigError> {
        let file = load_config_file(cli.config.as_deref())?;
        Ok(Self::resolve(cli, &file))
    }

    /// Resolve an `AppConfig` from CLI args and a parsed config file.
    ///
    /// Priority: CLI > file > default. This is separated from `load()` to
    /// enable unit testing without CLI parsing.
    #[must_use]
    fn resolve(cli: &CliArgs, file: &ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            data_file: cli
                .data_file
                .clone()
                .or_else(|| file.storage.data_file.clone().map(PathBuf::from)),
            sweep_interval: file
                .sweep
                .interval_secs
                .map_or(defaults.sweep_interval, Duration::from_secs),
            reminder_window_hours: file
                .reminders
                .window_hours
                .unwrap_or(defaults.reminder_window_hours),
            poll_timeout: file
                .ui
                .poll_timeout_ms
                .map_or(defaults.poll_timeout, Duration::from_millis),
            date_format: file
                .ui
                .date_format
                .clone()
                .unwrap_or(defaults.date_format),
            categories: file.ui.categories.clone().unwrap_or(defaults.categories),
            assignees: file.ui.assignees.clone().unwrap_or(defaults.assignees),
        }
    }

    /// Resolves the snapshot file path, falling back to
    /// `<data_dir>/termtask/tasks.json`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoDataDir`] if no explicit path is
    /// configured and the platform data directory cannot be determined.
    pub fn data_file_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.data_file {
            return Ok(path.clone());
        }
        let data_dir = dirs::data_dir().ok_or(ConfigError::NoDataDir)?;
        Ok(data_dir.join("termtask").join("tasks.json"))
    }

    /// Resolves the notification permission file path: a sibling of the
    /// snapshot file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoDataDir`] under the same conditions as
    /// [`data_file_path`](Self::data_file_path).
    pub fn permission_file_path(&self) -> Result<PathBuf, ConfigError> {
        Ok(self.data_file_path()?.with_file_name("notify-permission"))
    }
}

/// CLI arguments parsed by clap.
#[derive(clap::Parser, Debug, Default)]
#[command(version, about = "Terminal-native task tracker")]
pub struct CliArgs {
    /// Path to the task snapshot file (default: `<data_dir>/termtask/tasks.json`).
    #[arg(long, env = "TERMTASK_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Path to config file (default: `~/.config/termtask/config.toml`).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", env = "TERMTASK_LOG")]
    pub log_level: String,

    /// Path to log file (default: `$TMPDIR/termtask.log`).
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Load and parse a TOML config file.
///
/// If `explicit_path` is `Some`, the file must exist (error if not).
/// If `explicit_path` is `None`, the default path is tried and missing file
/// is treated as empty config.
fn load_config_file(explicit_path: Option<&std::path::Path>) -> Result<ConfigFile, ConfigError> {
    let path = if let Some(p) = explicit_path {
        let contents = std::fs::read_to_string(p).map_err(|e| ConfigError::ReadFile {
            path: p.to_path_buf(),
            source: e,
        })?;
        return Ok(toml::from_str(&contents)?);
    } else {
        let Some(config_dir) = dirs::config_dir() else {
            // No config dir available — use defaults.
            return Ok(ConfigFile::default());
        };
        config_dir.join("termtask").join("config.toml")
    };

    match std::fs::read_to_string(&path) {
        Ok(contents) => Ok(toml::from_str(&contents)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ConfigFile::default()),
        Err(e) => Err(ConfigError::ReadFile { path, source: e }),
    }
}
