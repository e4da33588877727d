use axum::Json;
use axum::extract::State;
use axum::response::Redirect;
use essentials_application::SessionContextService;
use essentials_core::{AppError, UserIdentity};
use essentials_domain::UserId;
use tower_sessions::Session;
use tracing::info;
use uuid::Uuid;

use crate::dto::DevSignInRequest;
use crate::error::ApiResult;
use crate::session;
use crate::state::AppState;

/// Signs in as a seeded user. Only mounted when the development seed is enabled.
pub async fn dev_sign_in_handler(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<DevSignInRequest>,
) -> ApiResult<Redirect> {
    let user_id = Uuid::parse_str(payload.user_id.as_str())
        .map(UserId::from_uuid)
        .map_err(|error| AppError::Validation(format!("invalid user_id: {error}")))?;

    let context = state
        .session_context_service
        .load_context(user_id, None)
        .await?;
    let default_role = SessionContextService::default_role(context.user());
    let identity = UserIdentity::new(
        user_id.as_uuid(),
        context.user().display_name().as_str(),
        Some(context.user().email().as_str().to_owned()),
    );

    session::sign_in(&session, &identity, default_role).await?;
    info!(%user_id, "development sign-in");

    let signed_in = state
        .session_context_service
        .load_context(user_id, default_role)
        .await?;

    Ok(Redirect::to(signed_in.dashboard_path()))
}

#[cfg(test)]
mod tests {
    use axum::Json;
    use axum::extract::State;
    use axum::http::StatusCode;
    use axum::http::header::LOCATION;
    use axum::response::IntoResponse;
    use essentials_domain::RoleAssignment;

    use super::dev_sign_in_handler;
    use crate::dto::DevSignInRequest;
    use crate::handlers::test_support::{SeededDirectory, session};
    use crate::session::{read_current_role, read_identity};

    #[tokio::test]
    async fn sign_in_selects_first_role() {
        let seeded = SeededDirectory::new().await;
        let session = session();

        let response = dev_sign_in_handler(
            State(seeded.state.clone()),
            session.clone(),
            Json(DevSignInRequest {
                user_id: seeded.org_user.id().to_string(),
            }),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response
                .headers()
                .get(LOCATION)
                .and_then(|value| value.to_str().ok()),
            Some("/dashboard")
        );
        assert_eq!(
            read_current_role(&session).await.ok().flatten(),
            seeded.org_user.first_role().map(RoleAssignment::id)
        );
        assert_eq!(
            read_identity(&session)
                .await
                .ok()
                .flatten()
                .map(|identity| identity.user_id()),
            Some(seeded.org_user.id().as_uuid())
        );
    }

    #[tokio::test]
    async fn unknown_user_cannot_sign_in() {
        let seeded = SeededDirectory::new().await;

        let response = dev_sign_in_handler(
            State(seeded.state.clone()),
            session(),
            Json(DevSignInRequest {
                user_id: uuid::Uuid::new_v4().to_string(),
            }),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
