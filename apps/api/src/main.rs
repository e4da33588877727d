//! Essentials API composition root.

#![forbid(unsafe_code)]

mod api_config;
mod api_router;
mod dev_seed;
mod dto;
mod error;
mod handlers;
mod middleware;
mod session;
mod state;

use std::sync::Arc;

use essentials_application::{DateRangeFilterService, SessionContextService};
use essentials_core::AppError;
use essentials_infrastructure::InMemoryDirectory;
use tracing::info;

use crate::api_config::{ApiConfig, init_tracing};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ApiConfig::load()?;

    let directory = Arc::new(InMemoryDirectory::new());
    if config.dev_seed {
        let seed = dev_seed::run(&directory).await?;
        info!(
            organization_id = %seed.organization.id(),
            partner_id = %seed.partner.id(),
            super_admin_id = %seed.super_admin.id(),
            org_user_id = %seed.org_user.id(),
            partner_user_id = %seed.partner_user.id(),
            "development seed applied; sign in through POST /dev/sign-in"
        );
    }

    let app_state = AppState {
        session_context_service: SessionContextService::new(directory.clone(), directory),
        date_range_filter_service: DateRangeFilterService::new(config.date_range.clone()),
    };

    let session_layer = session::build_session_layer(config.cookie_secure);
    let app = api_router::build_router(app_state, session_layer, config.dev_seed);

    let address = config.socket_address()?;
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    info!(%address, "essentials-api listening");

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("api server error: {error}")))
}
