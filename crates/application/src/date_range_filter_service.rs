use chrono::NaiveDate;
use essentials_domain::{DateRange, DateRangeFormat, DateRangeParseError};
use serde::{Deserialize, Serialize};

use crate::FlashMessage;

/// Flash text shown when a submitted date range cannot be parsed.
pub const DATE_RANGE_FORMAT_ERROR: &str = "Date range not properly formatted.";

/// Length of the default window ending today.
pub const DEFAULT_LOOKBACK_DAYS: u32 = 365;

/// Filter values submitted from a list page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterParams {
    /// Free-text range, e.g. `January 12, 2025 - January 13, 2025`.
    pub date_range: Option<String>,
    /// Label chosen in the picker, e.g. `since 2025-01-12`.
    pub date_range_label: Option<String>,
}

/// Request parameters relevant to the date range picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestParams {
    /// Submitted filters.
    #[serde(default)]
    pub filters: FilterParams,
    /// Controller that rendered the list page.
    pub controller: String,
    /// Action that rendered the list page.
    pub action: String,
}

/// Page a rejected filter sends the user back to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectTarget {
    /// Controller name.
    pub controller: String,
    /// Action name.
    pub action: String,
}

impl RedirectTarget {
    /// Returns the request path for the controller and action.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/{}/{}", self.controller, self.action)
    }
}

/// Result of running the date range picker over request parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateRangeOutcome {
    /// The submitted range, or the default when nothing was submitted.
    Applied(DateRange),
    /// The submitted range was malformed and the default was put in its place.
    Rejected {
        /// Default range now stored in the filters.
        range: DateRange,
        /// Error to show on the next page.
        flash: FlashMessage,
        /// Page to send the user back to.
        redirect: RedirectTarget,
        /// Why the submitted text was not accepted.
        error: DateRangeParseError,
    },
}

impl DateRangeOutcome {
    /// Returns the range downstream queries should use.
    #[must_use]
    pub fn range(&self) -> DateRange {
        match self {
            Self::Applied(range) | Self::Rejected { range, .. } => *range,
        }
    }
}

/// Configuration for the date range picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRangeFilterConfig {
    /// Accepted text shape.
    pub format: DateRangeFormat,
    /// Days before today covered by the default range.
    pub default_lookback_days: u32,
}

impl Default for DateRangeFilterConfig {
    fn default() -> Self {
        Self {
            format: DateRangeFormat::default(),
            default_lookback_days: DEFAULT_LOOKBACK_DAYS,
        }
    }
}

/// Application service validating date range filters on list pages.
#[derive(Debug, Clone)]
pub struct DateRangeFilterService {
    config: DateRangeFilterConfig,
}

impl DateRangeFilterService {
    /// Creates a date range filter service.
    #[must_use]
    pub fn new(config: DateRangeFilterConfig) -> Self {
        Self { config }
    }

    /// Returns the range applied when no usable range was submitted.
    #[must_use]
    pub fn default_range(&self, today: NaiveDate) -> DateRange {
        DateRange::trailing(today, self.config.default_lookback_days)
    }

    /// Returns the default range in submitted-text form.
    #[must_use]
    pub fn default_date(&self, today: NaiveDate) -> String {
        self.config.format.format(&self.default_range(today))
    }

    /// Parses the submitted filter, replacing it with the default when absent or malformed.
    ///
    /// A blank filter silently falls back to the default. A malformed one also
    /// produces the error flash and a redirect back to the originating page.
    pub fn setup_date_range_picker(
        &self,
        params: &mut RequestParams,
        today: NaiveDate,
    ) -> DateRangeOutcome {
        let submitted = params
            .filters
            .date_range
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty());

        let Some(submitted) = submitted else {
            params.filters.date_range = Some(self.default_date(today));
            return DateRangeOutcome::Applied(self.default_range(today));
        };

        match self.config.format.parse(submitted) {
            Ok(range) => DateRangeOutcome::Applied(range),
            Err(error) => {
                params.filters.date_range = Some(self.default_date(today));
                DateRangeOutcome::Rejected {
                    range: self.default_range(today),
                    flash: FlashMessage::error(DATE_RANGE_FORMAT_ERROR),
                    redirect: RedirectTarget {
                        controller: params.controller.clone(),
                        action: params.action.clone(),
                    },
                    error,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
