//! Date range filter values submitted from list pages.
//!
//! List pages post a single text field such as `January 12, 2025 - January 13, 2025`.
//! [`DateRangeFormat`] decides which date patterns and which separator are
//! accepted and renders ranges back into the same text form.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{Days, NaiveDate};
use essentials_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Patterns accepted for each side of a range when nothing else is configured.
pub const DEFAULT_DATE_PATTERNS: &[&str] = &["%B %d, %Y", "%b %d, %Y", "%Y-%m-%d"];

/// Separator between the start and end date when nothing else is configured.
pub const DEFAULT_RANGE_SEPARATOR: &str = " - ";

const SAMPLE_YEAR: i32 = 2025;
const SAMPLE_MONTH: u32 = 10;
const SAMPLE_DAY: u32 = 28;

/// Reasons a submitted date range cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateRangeParseError {
    /// The text does not contain the range separator.
    #[error("date range must contain the '{0}' separator")]
    MissingSeparator(String),

    /// One side of the range matches none of the accepted patterns.
    #[error("'{0}' is not a recognized date")]
    InvalidDate(String),

    /// The start date falls after the end date.
    #[error("date range starts on {start} which is after its end {end}")]
    Reversed {
        /// Parsed start date.
        start: NaiveDate,
        /// Parsed end date.
        end: NaiveDate,
    },
}

impl From<DateRangeParseError> for AppError {
    fn from(value: DateRangeParseError) -> Self {
        AppError::Validation(value.to_string())
    }
}

/// Inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting a start after the end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeParseError> {
        if start > end {
            return Err(DateRangeParseError::Reversed { start, end });
        }

        Ok(Self { start, end })
    }

    /// Creates the range covering `lookback_days` days before `today` through `today`.
    #[must_use]
    pub fn trailing(today: NaiveDate, lookback_days: u32) -> Self {
        let start = today
            .checked_sub_days(Days::new(u64::from(lookback_days)))
            .unwrap_or(NaiveDate::MIN);

        Self { start, end: today }
    }

    /// Returns the first day of the range.
    #[must_use]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the last day of the range.
    #[must_use]
    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

/// Accepted textual shape of a date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRangeFormat {
    patterns: Vec<String>,
    separator: String,
}

impl DateRangeFormat {
    /// Creates a validated format.
    ///
    /// The first pattern is also the one used to render ranges.
    pub fn new(patterns: Vec<String>, separator: impl Into<String>) -> AppResult<Self> {
        let separator = separator.into();
        if separator.trim().is_empty() {
            return Err(AppError::Validation(
                "date range separator must contain a visible character".to_owned(),
            ));
        }

        if patterns.is_empty() {
            return Err(AppError::Validation(
                "at least one date pattern is required".to_owned(),
            ));
        }

        let sample = NaiveDate::from_ymd_opt(SAMPLE_YEAR, SAMPLE_MONTH, SAMPLE_DAY)
            .ok_or_else(|| AppError::Internal("sample date is out of range".to_owned()))?;
        for pattern in &patterns {
            check_pattern(pattern, separator.as_str(), sample)?;
        }

        Ok(Self {
            patterns,
            separator,
        })
    }

    /// Returns the accepted patterns, rendering pattern first.
    #[must_use]
    pub fn patterns(&self) -> &[String] {
        self.patterns.as_slice()
    }

    /// Returns the range separator.
    #[must_use]
    pub fn separator(&self) -> &str {
        self.separator.as_str()
    }

    /// Parses submitted text into a range.
    pub fn parse(&self, value: &str) -> Result<DateRange, DateRangeParseError> {
        let (start, end) = value
            .split_once(self.separator.as_str())
            .ok_or_else(|| DateRangeParseError::MissingSeparator(self.separator.clone()))?;

        DateRange::new(self.parse_date(start)?, self.parse_date(end)?)
    }

    /// Renders a range in the text form accepted by [`Self::parse`].
    #[must_use]
    pub fn format(&self, range: &DateRange) -> String {
        let pattern = self.rendering_pattern();
        format!(
            "{}{}{}",
            range.start.format(pattern),
            self.separator,
            range.end.format(pattern)
        )
    }

    fn parse_date(&self, value: &str) -> Result<NaiveDate, DateRangeParseError> {
        let value = value.trim();
        self.patterns
            .iter()
            .find_map(|pattern| NaiveDate::parse_from_str(value, pattern).ok())
            .ok_or_else(|| DateRangeParseError::InvalidDate(value.to_owned()))
    }

    fn rendering_pattern(&self) -> &str {
        self.patterns
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_DATE_PATTERNS[0])
    }
}

/// Renders a sample date and requires it to parse back unchanged without
/// containing the range separator.
fn check_pattern(pattern: &str, separator: &str, sample: NaiveDate) -> AppResult<()> {
    let invalid = |reason: &str| {
        AppError::Validation(format!("invalid date pattern '{pattern}': {reason}"))
    };

    if pattern.trim().is_empty() || StrftimeItems::new(pattern).any(|item| item == Item::Error) {
        return Err(invalid("unknown or empty specifier"));
    }

    let mut rendered = String::new();
    write!(rendered, "{}", sample.format(pattern))
        .map_err(|_| invalid("uses fields a calendar date cannot render"))?;

    if rendered.contains(separator) {
        return Err(invalid("rendered dates contain the range separator"));
    }

    match NaiveDate::parse_from_str(rendered.as_str(), pattern) {
        Ok(parsed) if parsed == sample => Ok(()),
        _ => Err(invalid("rendered dates do not parse back")),
    }
}

impl Default for DateRangeFormat {
    fn default() -> Self {
        Self {
            patterns: DEFAULT_DATE_PATTERNS
                .iter()
                .map(|pattern| (*pattern).to_owned())
                .collect(),
            separator: DEFAULT_RANGE_SEPARATOR.to_owned(),
        }
    }
}
