use axum::extract::{Extension, Request, State};
use axum::middleware::Next;
use axum::response::Response;
use essentials_core::{AppError, UserIdentity};
use essentials_domain::UserId;
use tower_sessions::Session;
use tracing::warn;

use crate::error::ApiResult;
use crate::session;
use crate::state::AppState;

pub async fn require_auth(
    session: Session,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let identity = session::read_identity(&session)
        .await?
        .ok_or_else(|| AppError::Unauthorized("authentication required".to_owned()))?;

    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}

/// Resolves the signed-in user and stored role selection into a `SessionContext`.
pub async fn load_session_context(
    State(state): State<AppState>,
    Extension(identity): Extension<UserIdentity>,
    session: Session,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let stored_role = session::read_current_role(&session).await?;
    let context = state
        .session_context_service
        .load_context(UserId::from_uuid(identity.user_id()), stored_role)
        .await?;

    if let (Some(role_id), None) = (stored_role, context.current_role()) {
        warn!(
            %role_id,
            user_id = %identity.user_id(),
            "stored role no longer belongs to user; clearing selection"
        );
        session::clear_current_role(&session).await?;
    }

    request.extensions_mut().insert(context);
    Ok(next.run(request).await)
}
