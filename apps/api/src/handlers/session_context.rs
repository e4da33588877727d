use axum::Json;
use axum::extract::{Extension, State};
use axum::response::Redirect;
use essentials_application::{FlashMessage, SessionContext};
use essentials_core::{AppError, UserIdentity};
use essentials_domain::RoleId;
use tower_sessions::Session;
use tracing::info;
use uuid::Uuid;

use crate::dto::{SessionContextResponse, SwitchRoleRequest};
use crate::error::ApiResult;
use crate::session;
use crate::state::AppState;

pub async fn session_context_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<UserIdentity>,
    Extension(context): Extension<SessionContext>,
) -> ApiResult<Json<SessionContextResponse>> {
    let summary = state.session_context_service.summarize(&context).await?;

    Ok(Json(SessionContextResponse::from_summary(
        &identity,
        context.user(),
        summary,
    )))
}

pub async fn switch_role_handler(
    State(state): State<AppState>,
    Extension(context): Extension<SessionContext>,
    session: Session,
    Json(payload): Json<SwitchRoleRequest>,
) -> ApiResult<Redirect> {
    let role_id = Uuid::parse_str(payload.role_id.as_str())
        .map(RoleId::from_uuid)
        .map_err(|error| AppError::Validation(format!("invalid role_id: {error}")))?;

    let switched = state.session_context_service.switch_role(&context, role_id)?;
    session::store_current_role(&session, role_id).await?;

    if let Some(role) = switched.current_role() {
        info!(user_id = %switched.user().id(), role = role.kind().as_str(), "current role switched");
        session::set_flash(
            &session,
            FlashMessage::notice(format!("Now acting as {}.", role.kind().as_str())),
        )
        .await?;
    }

    Ok(Redirect::to(switched.dashboard_path()))
}
