use std::collections::HashMap;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use chrono::Local;
use essentials_application::{DateRangeOutcome, FilterParams, RequestParams};
use tower_sessions::Session;
use tracing::{debug, info};

use crate::dto::{FilteredIndexResponse, FlashResponse};
use crate::error::ApiResult;
use crate::session;
use crate::state::AppState;

const DATE_RANGE_PARAM: &str = "filters[date_range]";
const DATE_RANGE_LABEL_PARAM: &str = "filters[date_range_label]";

pub async fn filtered_index_handler(
    State(state): State<AppState>,
    Path((controller, action)): Path<(String, String)>,
    Query(query): Query<HashMap<String, String>>,
    session: Session,
) -> ApiResult<Response> {
    let mut params = request_params(controller, action, &query);
    let today = Local::now().date_naive();

    match state
        .date_range_filter_service
        .setup_date_range_picker(&mut params, today)
    {
        DateRangeOutcome::Applied(range) => {
            let flash = session::take_flash(&session).await?;

            Ok(Json(FilteredIndexResponse {
                controller: params.controller,
                action: params.action,
                date_range: params.filters.date_range.unwrap_or_default(),
                date_range_label: params.filters.date_range_label,
                start_date: range.start().to_string(),
                end_date: range.end().to_string(),
                flash: flash.map(FlashResponse::from),
            })
            .into_response())
        }
        DateRangeOutcome::Rejected {
            flash,
            redirect,
            error,
            ..
        } => {
            debug!(%error, "date range filter did not parse");
            info!(
                controller = %redirect.controller,
                action = %redirect.action,
                "rejected malformed date range filter"
            );
            session::set_flash(&session, flash).await?;

            Ok(Redirect::to(redirect.path().as_str()).into_response())
        }
    }
}

fn request_params(
    controller: String,
    action: String,
    query: &HashMap<String, String>,
) -> RequestParams {
    RequestParams {
        filters: FilterParams {
            date_range: query.get(DATE_RANGE_PARAM).cloned(),
            date_range_label: query.get(DATE_RANGE_LABEL_PARAM).cloned(),
        },
        controller,
        action,
    }
}
