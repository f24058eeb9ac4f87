use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Storage key the legacy page used; kept so existing progress is picked up.
pub const DEFAULT_STORAGE_KEY: &str = "vsphere8-progress";

/// Delay used when the fixed-delay initial render is selected without a value.
pub const DEFAULT_INIT_DELAY: Duration = Duration::from_millis(100);

/// How long a visual completion notice stays up before it removes itself.
pub const NOTICE_TTL: Duration = Duration::from_secs(5);

/// How a completed module is announced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationStyle {
    /// Dismissible toast that expires after [`NOTICE_TTL`].
    #[default]
    Visual,
    /// A log line only.
    LogOnly,
}

impl FromStr for NotificationStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "visual" | "toast" => Ok(Self::Visual),
            "log" | "log-only" | "logonly" => Ok(Self::LogOnly),
            other => Err(format!("unknown notification style: {other}")),
        }
    }
}

impl fmt::Display for NotificationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Visual => f.write_str("visual"),
            Self::LogOnly => f.write_str("log"),
        }
    }
}

/// When the first render of the progress indicator happens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InitTiming {
    /// As soon as the surrounding view is mounted.
    #[default]
    EventDriven,
    /// After a fixed delay.
    FixedDelay(Duration),
}

/// What to do with module ids outside the course table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModulePolicy {
    /// Record them with the default time estimate.
    #[default]
    AcceptUnknown,
    /// Refuse them.
    KnownOnly,
}

/// Per-deployment knobs for the tracker widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackerOptions {
    pub storage_key: String,
    pub notification_style: NotificationStyle,
    pub init_timing: InitTiming,
    pub module_policy: ModulePolicy,
    /// Lifetime of a visual completion notice.
    pub notice_ttl: Duration,
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            notification_style: NotificationStyle::default(),
            init_timing: InitTiming::default(),
            module_policy: ModulePolicy::default(),
            notice_ttl: NOTICE_TTL,
        }
    }
}

impl TrackerOptions {
    /// The simplified variant: log-only notices and a fixed-delay first render.
    #[must_use]
    pub fn degraded() -> Self {
        Self {
            notification_style: NotificationStyle::LogOnly,
            init_timing: InitTiming::FixedDelay(DEFAULT_INIT_DELAY),
            ..Self::default()
        }
    }
}
