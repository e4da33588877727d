use essentials_application::{DateRangeFilterService, SessionContextService};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub session_context_service: SessionContextService,
    pub date_range_filter_service: DateRangeFilterService,
}
