//! Application services and ports.

#![forbid(unsafe_code)]

mod date_range_filter_service;
mod directory_ports;
mod flash;
mod session_context_service;

pub use date_range_filter_service::{
    DATE_RANGE_FORMAT_ERROR, DEFAULT_LOOKBACK_DAYS, DateRangeFilterConfig,
    DateRangeFilterService, DateRangeOutcome, FilterParams, RedirectTarget, RequestParams,
};
pub use directory_ports::{TenantRepository, UserRepository};
pub use flash::{FlashKind, FlashMessage};
pub use session_context_service::{SessionContext, SessionContextService, SessionSummary};
