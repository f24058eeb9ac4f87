use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use progress_core::course::DEFAULT_ESTIMATED_LABS;
use progress_core::options::DEFAULT_STORAGE_KEY;
use progress_core::{Course, CourseError, InitTiming, ModulePolicy, NotificationStyle, TrackerOptions};
use thiserror::Error;

/// Course progress tracker: records completed modules and shows overall progress.
#[derive(Parser, Debug)]
#[command(name = "progress-tracker", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// SQLite URL or path of the progress database
    #[arg(long, global = true, env = "PROGRESS_DB_URL", default_value = "sqlite://progress.sqlite3")]
    pub db: String,

    /// Storage scope, one per site or origin
    #[arg(long, global = true, env = "PROGRESS_SCOPE", default_value = "local")]
    pub scope: String,

    /// Key the progress record is stored under
    #[arg(long, global = true, env = "PROGRESS_STORAGE_KEY", default_value = DEFAULT_STORAGE_KEY)]
    pub key: String,

    /// Assumed number of labs in the course
    #[arg(long, global = true, env = "PROGRESS_ESTIMATED_LABS", default_value_t = DEFAULT_ESTIMATED_LABS)]
    pub estimated_labs: u32,

    /// Completion notice style: visual or log
    #[arg(long, global = true, env = "PROGRESS_NOTIFY", default_value_t = NotificationStyle::Visual)]
    pub notify: NotificationStyle,

    /// Render the indicator after a fixed delay instead of on mount
    #[arg(long, global = true, env = "PROGRESS_INIT_DELAY_MS", value_name = "MS")]
    pub init_delay_ms: Option<u64>,

    /// Reject module ids that are not part of the course
    #[arg(
        long,
        global = true,
        env = "PROGRESS_STRICT_MODULES",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub strict_modules: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the desktop window (default)
    Ui,
    /// Print overall progress and per-module state
    Status,
    /// Mark a module complete without opening the window
    Complete {
        /// Module id, e.g. networking
        module_id: String,
    },
    /// Erase stored progress
    Reset,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("--{flag} cannot be empty")]
    EmptyValue { flag: &'static str },
    #[error("invalid --db value: {raw}")]
    InvalidDbUrl { raw: String },
    #[error(transparent)]
    Course(#[from] CourseError),
}

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_url: String,
    pub scope: String,
    pub course: Course,
    pub options: TrackerOptions,
}

impl Cli {
    /// Validate the parsed arguments and split off the subcommand.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for blank values or a zero lab estimate.
    pub fn into_parts(self) -> Result<(Command, Config), ConfigError> {
        if self.key.trim().is_empty() {
            return Err(ConfigError::EmptyValue { flag: "key" });
        }
        if self.scope.trim().is_empty() {
            return Err(ConfigError::EmptyValue { flag: "scope" });
        }
        if self.db.trim().is_empty() {
            return Err(ConfigError::InvalidDbUrl { raw: self.db });
        }

        let course = Course::vsphere8().with_estimated_labs(self.estimated_labs)?;
        let init_timing = self
            .init_delay_ms
            .map_or(InitTiming::EventDriven, |ms| {
                InitTiming::FixedDelay(Duration::from_millis(ms))
            });
        let module_policy = if self.strict_modules {
            ModulePolicy::KnownOnly
        } else {
            ModulePolicy::AcceptUnknown
        };

        let config = Config {
            db_url: normalize_sqlite_url(&self.db),
            scope: self.scope,
            course,
            options: TrackerOptions {
                storage_key: self.key,
                notification_style: self.notify,
                init_timing,
                module_policy,
                ..TrackerOptions::default()
            },
        };
        Ok((self.command.unwrap_or(Command::Ui), config))
    }
}

/// Turn a bare or relative path into an absolute `sqlite://` URL.
#[must_use]
pub fn normalize_sqlite_url(raw: &str) -> String {
    let raw = raw.trim();
    if raw == "sqlite::memory:" {
        return raw.to_owned();
    }

    let path_str = raw
        .strip_prefix("sqlite://")
        .or_else(|| raw.strip_prefix("sqlite:"))
        .unwrap_or(raw);
    let path = Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}
