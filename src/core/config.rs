//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.quakewatch/config.toml` unless `--config` points
//! elsewhere. A missing file is fine and is never created; everything has
//! a default. The resolved value is built once at startup and never changes.

use log::{debug, info, warn};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono_tz::Tz;

use crate::core::layout::ScreenLayout;
use crate::feed::{DEFAULT_FEED_URL, MmiFilter};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct QuakeConfig {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct FeedConfig {
    pub url: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DisplayConfig {
    pub rows: Option<usize>,
    pub poll_minutes: Option<u64>,
    pub precision: Option<u8>,
    pub mmi_threshold: Option<i8>,
    pub highlight_depth: Option<bool>,
    pub highlight_locality: Option<String>,
    pub timezone: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoggingConfig {
    pub file: Option<PathBuf>,
    pub level: Option<String>,
}

/// Values given on the command line. `None` means "not specified".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub mmi_threshold: Option<i8>,
    pub rows: Option<usize>,
    pub poll_minutes: Option<u64>,
    pub precision: Option<u8>,
    pub highlight_depth: Option<bool>,
    pub highlight_locality: Option<String>,
    pub feed_url: Option<String>,
    pub timezone: Option<String>,
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ROWS: usize = 20;
pub const DEFAULT_POLL_MINUTES: u64 = 5;
/// One week.
pub const MAX_POLL_MINUTES: u64 = 10_080;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PRECISION: u8 = 1;
pub const MAX_PRECISION: u8 = 6;
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Pacific::Auckland;
pub const DEFAULT_LOG_LEVEL: &str = "info";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub feed_url: String,
    pub request_timeout: Duration,
    pub mmi_filter: MmiFilter,
    pub rows: usize,
    pub poll_minutes: u64,
    pub precision: u8,
    pub highlight_depth: bool,
    pub highlight_locality: String,
    pub timezone: Tz,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
    pub layout: ScreenLayout,
}

impl ResolvedConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_minutes.saturating_mul(60))
    }

    /// True when the poll interval differs from the default and should be
    /// called out in the header.
    pub fn custom_interval(&self) -> bool {
        self.poll_minutes != DEFAULT_POLL_MINUTES
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve(&QuakeConfig::default(), &CliOverrides::default())
    }
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

/// Returns the path to `~/.quakewatch/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".quakewatch").join("config.toml"))
}

/// Load config from `explicit` or, failing that, `~/.quakewatch/config.toml`.
///
/// A file that does not exist yields `QuakeConfig::default()`. A file that
/// exists but is malformed yields `ConfigError::Parse`.
pub fn load_config(explicit: Option<&Path>) -> Result<QuakeConfig, ConfigError> {
    let path = match explicit.map(Path::to_path_buf).or_else(config_path) {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(QuakeConfig::default());
        }
    };

    if !path.exists() {
        debug!("No config file at {}", path.display());
        return Ok(QuakeConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: QuakeConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &QuakeConfig, cli: &CliOverrides) -> ResolvedConfig {
    let display = &config.display;

    // Feed URL: CLI → env → config → default
    let feed_url = cli
        .feed_url
        .clone()
        .or_else(|| std::env::var("QUAKEWATCH_FEED_URL").ok())
        .or_else(|| config.feed.url.clone())
        .unwrap_or_else(|| DEFAULT_FEED_URL.to_string());

    // Timezone: CLI → env → config → default
    let timezone = cli
        .timezone
        .clone()
        .or_else(|| std::env::var("QUAKEWATCH_TIMEZONE").ok())
        .or_else(|| display.timezone.clone())
        .map(|name| parse_timezone(&name))
        .unwrap_or(DEFAULT_TIMEZONE);

    // Log file: CLI → env → config (none by default)
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| std::env::var("QUAKEWATCH_LOG_FILE").ok().map(PathBuf::from))
        .or_else(|| config.logging.file.clone());

    let precision = cli
        .precision
        .or(display.precision)
        .unwrap_or(DEFAULT_PRECISION);
    let precision = if precision > MAX_PRECISION {
        warn!("Decimal precision {} capped at {}", precision, MAX_PRECISION);
        MAX_PRECISION
    } else {
        precision
    };

    let rows = match cli.rows.or(display.rows) {
        Some(0) | None => DEFAULT_ROWS,
        Some(n) => n,
    };

    let poll_minutes = match cli.poll_minutes.or(display.poll_minutes) {
        Some(0) | None => DEFAULT_POLL_MINUTES,
        Some(n) if n > MAX_POLL_MINUTES => {
            warn!("Update frequency {} min capped at {}", n, MAX_POLL_MINUTES);
            MAX_POLL_MINUTES
        }
        Some(n) => n,
    };

    let request_timeout = match config.feed.request_timeout_secs {
        Some(0) | None => DEFAULT_REQUEST_TIMEOUT_SECS,
        Some(n) => n,
    };

    ResolvedConfig {
        feed_url,
        request_timeout: Duration::from_secs(request_timeout),
        mmi_filter: parse_mmi_filter(cli.mmi_threshold.or(display.mmi_threshold)),
        rows,
        poll_minutes,
        precision,
        highlight_depth: cli
            .highlight_depth
            .or(display.highlight_depth)
            .unwrap_or(false),
        highlight_locality: cli
            .highlight_locality
            .clone()
            .or_else(|| display.highlight_locality.clone())
            .unwrap_or_default(),
        timezone,
        log_file,
        log_level: config
            .logging
            .level
            .clone()
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        layout: ScreenLayout::DEFAULT,
    }
}

/// Keeps thresholds the feed understands, dropping anything else to "no filter".
fn parse_mmi_filter(threshold: Option<i8>) -> MmiFilter {
    match threshold {
        Some(mmi) if !(MmiFilter::SENTINEL..=MmiFilter::MAX).contains(&mmi) => {
            warn!(
                "MMI threshold {} outside {}..={}, showing all quakes",
                mmi,
                MmiFilter::SENTINEL,
                MmiFilter::MAX
            );
            MmiFilter(None)
        }
        other => MmiFilter(other),
    }
}

/// Parses an IANA timezone name, falling back to the default on error.
fn parse_timezone(name: &str) -> Tz {
    name.parse::<Tz>().unwrap_or_else(|e| {
        warn!("Unknown timezone {:?} ({}), using {}", name, e, DEFAULT_TIMEZONE);
        DEFAULT_TIMEZONE
    })
}
