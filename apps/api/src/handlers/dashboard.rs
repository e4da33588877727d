use axum::Json;
use axum::extract::{Extension, State};
use axum::response::Redirect;
use essentials_application::SessionContext;
use essentials_core::AppError;
use essentials_domain::RoleKind;
use tower_sessions::Session;

use crate::dto::{AdminDashboardResponse, DashboardResponse, FlashResponse, RoleResponse};
use crate::error::ApiResult;
use crate::session;
use crate::state::AppState;

pub async fn root_handler(Extension(context): Extension<SessionContext>) -> Redirect {
    Redirect::to(context.dashboard_path())
}

pub async fn dashboard_handler(
    State(state): State<AppState>,
    Extension(context): Extension<SessionContext>,
    session: Session,
) -> ApiResult<Json<DashboardResponse>> {
    let summary = state.session_context_service.summarize(&context).await?;
    let flash = session::take_flash(&session).await?;

    Ok(Json(DashboardResponse {
        display_name: context.user().display_name().as_str().to_owned(),
        current_role: summary.current_role.as_ref().map(RoleResponse::from),
        organization_name: summary
            .organization
            .map(|organization| organization.name().as_str().to_owned()),
        partner_name: summary
            .partner
            .map(|partner| partner.name().as_str().to_owned()),
        flash: flash.map(FlashResponse::from),
    }))
}

pub async fn admin_dashboard_handler(
    Extension(context): Extension<SessionContext>,
    session: Session,
) -> ApiResult<Json<AdminDashboardResponse>> {
    let is_super_admin = context
        .current_role()
        .is_some_and(|role| role.kind() == RoleKind::SuperAdmin);
    if !is_super_admin {
        return Err(AppError::Forbidden(
            "the admin dashboard requires the super admin role".to_owned(),
        )
        .into());
    }

    let flash = session::take_flash(&session).await?;

    Ok(Json(AdminDashboardResponse {
        display_name: context.user().display_name().as_str().to_owned(),
        flash: flash.map(FlashResponse::from),
    }))
}
