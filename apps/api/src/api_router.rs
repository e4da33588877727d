use axum::Router;
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::state::AppState;
use crate::{handlers, middleware};

pub fn build_router(
    app_state: AppState,
    session_layer: SessionManagerLayer<MemoryStore>,
    dev_seed: bool,
) -> Router {
    let mut app = Router::new()
        .route("/health", get(handlers::health::health_handler))
        .merge(protected_routes(app_state.clone()));

    if dev_seed {
        app = app.route("/dev/sign-in", post(handlers::dev::dev_sign_in_handler));
    }

    app.layer(TraceLayer::new_for_http())
        .layer(session_layer)
        .with_state(app_state)
}

/// Routes that need a signed-in user. The resolved `SessionContext` is
/// available to every handler as an extension.
fn protected_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::dashboard::root_handler))
        .route("/dashboard", get(handlers::dashboard::dashboard_handler))
        .route(
            "/admin/dashboard",
            get(handlers::dashboard::admin_dashboard_handler),
        )
        .route(
            "/api/session/context",
            get(handlers::session_context::session_context_handler),
        )
        .route(
            "/session/role",
            post(handlers::session_context::switch_role_handler),
        )
        .route(
            "/{controller}/{action}",
            get(handlers::filtered_index::filtered_index_handler),
        )
        .route_layer(from_fn_with_state(
            app_state,
            middleware::load_session_context,
        ))
        .route_layer(from_fn(middleware::require_auth))
}

#[cfg(test)]
mod tests {
    use axum::Extension;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use axum::Router;
    use essentials_core::UserIdentity;
    use essentials_domain::RoleAssignment;
    use serde_json::Value;
    use tower::ServiceExt;
    use tower_sessions::Session;

    use super::{build_router, protected_routes};
    use crate::handlers::test_support::{SeededDirectory, session};
    use crate::session::{build_session_layer, read_current_role, sign_in};

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap_or_else(|error| panic!("request should build: {error}"))
    }

    async fn send(router: Router, request: Request<Body>) -> Response {
        router
            .oneshot(request)
            .await
            .unwrap_or_else(|error| match error {})
    }

    fn app(seeded: &SeededDirectory) -> Router {
        build_router(seeded.state.clone(), build_session_layer(false), true)
    }

    fn with_session(seeded: &SeededDirectory, session: Session) -> Router {
        protected_routes(seeded.state.clone())
            .layer(Extension(session))
            .with_state(seeded.state.clone())
    }

    #[tokio::test]
    async fn protected_routes_require_a_signed_in_user() {
        let seeded = SeededDirectory::new().await;

        for uri in [
            "/",
            "/dashboard",
            "/admin/dashboard",
            "/api/session/context",
            "/distributions/index",
        ] {
            let response = send(app(&seeded), get(uri)).await;
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");
        }
    }

    #[tokio::test]
    async fn health_is_public() {
        let seeded = SeededDirectory::new().await;

        let response = send(app(&seeded), get("/health")).await;

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn stored_role_of_another_user_is_cleared() {
        let seeded = SeededDirectory::new().await;
        let session = session();
        let identity = UserIdentity::new(
            seeded.org_user.id().as_uuid(),
            seeded.org_user.display_name().as_str(),
            None,
        );
        let foreign_role = seeded.partner_user.first_role().map(RoleAssignment::id);
        assert!(sign_in(&session, &identity, foreign_role).await.is_ok());

        let response = send(with_session(&seeded, session.clone()), get("/api/session/context")).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await;
        let payload = body
            .ok()
            .and_then(|body| serde_json::from_slice::<Value>(&body).ok())
            .unwrap_or_default();
        assert_eq!(payload["current_role"], Value::Null);
        assert_eq!(payload["current_partner"], Value::Null);
        assert_eq!(payload["dashboard_path"], "/dashboard");
        assert_eq!(read_current_role(&session).await.ok(), Some(None));
    }

    #[tokio::test]
    async fn stored_role_of_the_user_is_kept() {
        let seeded = SeededDirectory::new().await;
        let session = session();
        let identity = UserIdentity::new(
            seeded.partner_user.id().as_uuid(),
            seeded.partner_user.display_name().as_str(),
            None,
        );
        let own_role = seeded.partner_user.first_role().map(RoleAssignment::id);
        assert!(sign_in(&session, &identity, own_role).await.is_ok());

        let response = send(with_session(&seeded, session.clone()), get("/dashboard")).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_current_role(&session).await.ok(), Some(own_role));
    }
}
