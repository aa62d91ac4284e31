//! Recorded run-time codec
//!
//! Benchmark run times are recorded as `HH:MM:SS:mmm` strings. This module
//! converts them into a flat millisecond count for comparison and renders
//! millisecond counts back into short human-readable labels.
//!
//! The encoding is a flattened total, not a clock time: no field is range
//! checked, so `00:70:00:000` is simply seventy minutes and a millisecond
//! field of `1500` contributes 1.5 seconds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const MS_PER_HOUR: u64 = 3_600_000;
pub const MS_PER_MINUTE: u64 = 60_000;
pub const MS_PER_SECOND: u64 = 1_000;

const FIELD_NAMES: [&str; 4] = ["hours", "minutes", "seconds", "milliseconds"];
const FIELD_WEIGHTS: [u64; 4] = [MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND, 1];

/// Error raised when a run-time string is not `HH:MM:SS:mmm`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Input did not split into exactly four fields
    #[error("expected 4 colon-separated fields in '{input}', found {found}")]
    FieldCount { input: String, found: usize },

    /// A field was empty or contained something other than ASCII digits
    #[error("{name} field '{field}' in '{input}' is not a non-negative integer")]
    InvalidField {
        input: String,
        name: &'static str,
        field: String,
    },

    /// The weighted total does not fit in 64 bits
    #[error("duration '{input}' exceeds the representable millisecond range")]
    Overflow { input: String },
}

/// Total elapsed time in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DurationMs(u64);

impl DurationMs {
    pub const ZERO: DurationMs = DurationMs(0);

    pub const fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// Whole hours contained in this duration
    pub const fn hours(self) -> u64 {
        self.0 / MS_PER_HOUR
    }
}

impl From<u64> for DurationMs {
    fn from(ms: u64) -> Self {
        Self(ms)
    }
}

impl fmt::Display for DurationMs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

impl FromStr for DurationMs {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parse an `HH:MM:SS:mmm` string into total milliseconds.
pub fn parse(input: &str) -> Result<DurationMs, FormatError> {
    let fields: Vec<&str> = input.split(':').collect();
    if fields.len() != FIELD_NAMES.len() {
        return Err(FormatError::FieldCount {
            input: input.to_string(),
            found: fields.len(),
        });
    }

    let mut total: u64 = 0;
    for ((field, name), weight) in fields.iter().zip(FIELD_NAMES).zip(FIELD_WEIGHTS) {
        let value = parse_field(input, name, field)?;
        total = value
            .checked_mul(weight)
            .and_then(|weighted| total.checked_add(weighted))
            .ok_or_else(|| FormatError::Overflow { input: input.to_string() })?;
    }

    Ok(DurationMs(total))
}

fn parse_field(input: &str, name: &'static str, field: &str) -> Result<u64, FormatError> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatError::InvalidField {
            input: input.to_string(),
            name,
            field: field.to_string(),
        });
    }
    // Digits only, so the sole failure left is a value wider than u64.
    field
        .parse::<u64>()
        .map_err(|_| FormatError::Overflow { input: input.to_string() })
}

/// Render milliseconds as `"{m}m {s}s {ms}ms"`.
///
/// Minutes wrap at 60 and whole hours are dropped, so this is a
/// display-only inverse of [`parse`]: `format(3_661_000)` is `"1m 1s 0ms"`.
/// Use [`format_extended`] when durations may reach an hour.
pub fn format(ms: DurationMs) -> String {
    let ms = ms.as_millis();
    let minutes = (ms / MS_PER_MINUTE) % 60;
    let seconds = (ms / MS_PER_SECOND) % 60;
    let millis = ms % MS_PER_SECOND;
    format!("{}m {}s {}ms", minutes, seconds, millis)
}

/// Like [`format`], but keeps whole hours as an `"{h}h "` prefix.
pub fn format_extended(ms: DurationMs) -> String {
    let hours = ms.hours();
    if hours == 0 {
        format(ms)
    } else {
        format!("{}h {}", hours, format(ms))
    }
}

/// How durations are labelled in reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationStyle {
    /// Minutes wrap at 60, hours are dropped
    #[default]
    Compatible,
    /// Hours are shown when present
    Extended,
}

impl DurationStyle {
    pub fn from_show_hours(show_hours: bool) -> Self {
        if show_hours {
            Self::Extended
        } else {
            Self::Compatible
        }
    }

    pub fn render(self, ms: DurationMs) -> String {
        match self {
            Self::Compatible => format(ms),
            Self::Extended => format_extended(ms),
        }
    }

    /// True when rendering `ms` in this style loses elapsed time
    pub fn is_lossy_for(self, ms: DurationMs) -> bool {
        self == Self::Compatible && ms.hours() > 0
    }
}

#[cfg(test)]
mod comprehensive_tests;
