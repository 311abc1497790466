//! # Row Formatting
//!
//! Turns a [`Quake`] into the seven display cells of one table row.
//! Everything here is pure: the current time is passed in, and colours are
//! expressed as [`Tone`]s that the TUI theme maps onto terminal colours.
//!
//! ## Colour Ladders
//!
//! Magnitude and MMI share one ascending ladder, depth uses a descending
//! one (shallow quakes are felt harder):
//!
//! ```text
//! Severity     magnitude/MMI   depth (km)
//! Negligible   < 3             >= 200
//! Minor        < 4             >= 100
//! Light        < 5             >= 50
//! Moderate     < 6             >= 25
//! Strong       < 7             >= 10
//! Major        < 8             >= 5
//! Great        < 9             >= 3
//! Extreme      >= 9            < 3
//! ```

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::core::config::ResolvedConfig;
use crate::core::layout::FieldWidths;
use crate::feed::Quake;

/// Shown in place of a value the feed did not provide.
pub const PLACEHOLDER: &str = "-";

/// Quality tag the feed uses for retracted events.
pub const DELETED_QUALITY: &str = "deleted";

const CTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Step on the shared eight-colour palette, least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Negligible,
    Minor,
    Light,
    Moderate,
    Strong,
    Major,
    Great,
    Extreme,
}

impl Severity {
    pub const LADDER: [Severity; 8] = [
        Severity::Negligible,
        Severity::Minor,
        Severity::Light,
        Severity::Moderate,
        Severity::Strong,
        Severity::Major,
        Severity::Great,
        Severity::Extreme,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Severity for a magnitude or MMI value.
pub fn magnitude_severity(value: f64) -> Severity {
    const THRESHOLDS: [f64; 7] = [3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];

    if value.is_nan() {
        return Severity::Negligible;
    }
    let step = THRESHOLDS.iter().take_while(|&&t| value >= t).count();
    Severity::LADDER[step]
}

/// Severity for a depth in km. Always `Negligible` unless `enabled`.
pub fn depth_severity(depth: f64, enabled: bool) -> Severity {
    const THRESHOLDS: [f64; 7] = [200.0, 100.0, 50.0, 25.0, 10.0, 5.0, 3.0];

    if !enabled || depth.is_nan() {
        return Severity::Negligible;
    }
    THRESHOLDS
        .iter()
        .position(|&t| depth >= t)
        .map(|step| Severity::LADDER[step])
        .unwrap_or(Severity::Extreme)
}

/// Rounds to `precision` decimals and left-pads with spaces to `width`.
/// Longer values are returned whole rather than cut.
pub fn justify(value: f64, precision: usize, width: usize) -> String {
    format!("{value:>width$.precision$}")
}

/// Case-insensitive substring match. An empty needle never matches.
pub fn locality_matches(locality: &str, needle: &str) -> bool {
    !needle.is_empty() && locality.to_lowercase().contains(&needle.to_lowercase())
}

/// Parses the feed timestamp (`2021-03-04T10:15:30.000000Z`) as UTC.
pub fn parse_feed_time(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Absolute time in `tz`, laid out like C's `ctime` (`Thu Mar  4 23:15:30 2021`).
pub fn local_time(utc: DateTime<Utc>, tz: Tz) -> String {
    utc.with_timezone(&tz).format(CTIME_FORMAT).to_string()
}

/// Relative time in words, e.g. "5 minutes ago" or "an hour from now".
pub fn humanize_since(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(then);
    let secs = delta.num_seconds();
    let span = humanize_span(secs.unsigned_abs());

    match span {
        None => "now".to_string(),
        Some(span) if secs >= 0 => format!("{span} ago"),
        Some(span) => format!("{span} from now"),
    }
}

fn humanize_span(secs: u64) -> Option<String> {
    const MINUTE: u64 = 60;
    const HOUR: u64 = 60 * MINUTE;
    const DAY: u64 = 24 * HOUR;

    let span = match secs {
        0 => return None,
        1 => "a second".to_string(),
        s if s < MINUTE => format!("{s} seconds"),
        s if s < 2 * MINUTE => "a minute".to_string(),
        s if s < HOUR => format!("{} minutes", s / MINUTE),
        s if s < 2 * HOUR => "an hour".to_string(),
        s if s < DAY => format!("{} hours", s / HOUR),
        s if s < 2 * DAY => "a day".to_string(),
        s => {
            let days = s / DAY;
            // 30.5-day months, 365-day years
            let months = days * 10 / 305;
            let years = days / 365;
            match (years, months) {
                (0, 0) => format!("{days} days"),
                (0, 1) => "a month".to_string(),
                (0, m) => format!("{m} months"),
                (1, _) => "a year".to_string(),
                (y, _) => format!("{y} years"),
            }
        }
    };
    Some(span)
}

/// How a cell should be coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Scale(Severity),
    /// Terminal default foreground.
    Plain,
    /// De-emphasised text (timestamps, ordinary quality tags).
    Muted,
    /// Locality matched the highlight string.
    Highlight,
    /// Retracted event.
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayCell {
    pub text: String,
    pub tone: Tone,
    pub bold: bool,
}

impl DisplayCell {
    fn new(text: impl Into<String>, tone: Tone, bold: bool) -> Self {
        Self {
            text: text.into(),
            tone,
            bold,
        }
    }
}

/// One formatted table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuakeRow {
    pub occurred: DisplayCell,
    pub ago: DisplayCell,
    pub locality: DisplayCell,
    pub magnitude: DisplayCell,
    pub mmi: DisplayCell,
    pub depth: DisplayCell,
    pub quality: DisplayCell,
}

/// Settings that affect how a row is formatted.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    pub precision: usize,
    pub highlight_depth: bool,
    /// Empty disables locality highlighting.
    pub highlight_locality: String,
    pub timezone: Tz,
    pub widths: FieldWidths,
}

impl FormatOptions {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            precision: config.precision as usize,
            highlight_depth: config.highlight_depth,
            highlight_locality: config.highlight_locality.to_lowercase(),
            timezone: config.timezone,
            widths: config.layout.widths,
        }
    }
}

pub fn format_quake(quake: &Quake, options: &FormatOptions, now: DateTime<Utc>) -> QuakeRow {
    let (occurred, ago) = match parse_feed_time(&quake.time) {
        Some(utc) => (local_time(utc, options.timezone), humanize_since(utc, now)),
        None => (PLACEHOLDER.to_string(), PLACEHOLDER.to_string()),
    };

    let locality = if locality_matches(&quake.locality, &options.highlight_locality) {
        DisplayCell::new(&quake.locality, Tone::Highlight, true)
    } else {
        DisplayCell::new(&quake.locality, Tone::Plain, false)
    };

    let mmi = match quake.mmi {
        Some(mmi) if mmi >= 0.0 => DisplayCell::new(
            justify(mmi, 0, options.widths.mmi),
            Tone::Scale(magnitude_severity(mmi)),
            true,
        ),
        _ => DisplayCell::new(
            format!("{PLACEHOLDER:>width$}", width = options.widths.mmi),
            Tone::Scale(Severity::Negligible),
            true,
        ),
    };

    let quality = if quake.quality == DELETED_QUALITY {
        DisplayCell::new(&quake.quality, Tone::Warning, false)
    } else {
        DisplayCell::new(&quake.quality, Tone::Muted, true)
    };

    QuakeRow {
        occurred: DisplayCell::new(occurred, Tone::Muted, true),
        ago: DisplayCell::new(ago, Tone::Plain, false),
        locality,
        magnitude: DisplayCell::new(
            justify(quake.magnitude, options.precision, options.widths.magnitude),
            Tone::Scale(magnitude_severity(quake.magnitude)),
            true,
        ),
        mmi,
        depth: DisplayCell::new(
            justify(quake.depth, options.precision, options.widths.depth),
            Tone::Scale(depth_severity(quake.depth, options.highlight_depth)),
            true,
        ),
        quality,
    }
}
