//! Session keys and helpers for identity, role selection and flash messages.

use essentials_application::FlashMessage;
use essentials_core::{AppError, UserIdentity};
use essentials_domain::RoleId;
use tower_sessions::cookie::SameSite;
use tower_sessions::cookie::time::Duration;
use tower_sessions::{Expiry, MemoryStore, Session, SessionManagerLayer};

pub const SESSION_USER_KEY: &str = "user_identity";
pub const SESSION_CURRENT_ROLE_KEY: &str = "current_role";
pub const SESSION_FLASH_KEY: &str = "flash";

pub fn build_session_layer(cookie_secure: bool) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_secure(cookie_secure)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::minutes(30)))
}

pub async fn read_identity(session: &Session) -> Result<Option<UserIdentity>, AppError> {
    session
        .get::<UserIdentity>(SESSION_USER_KEY)
        .await
        .map_err(|error| AppError::Internal(format!("failed to read session identity: {error}")))
}

/// Stores a fresh identity and role selection under a new session id.
pub async fn sign_in(
    session: &Session,
    identity: &UserIdentity,
    current_role: Option<RoleId>,
) -> Result<(), AppError> {
    session
        .cycle_id()
        .await
        .map_err(|error| AppError::Internal(format!("failed to rotate session id: {error}")))?;
    session
        .insert(SESSION_USER_KEY, identity)
        .await
        .map_err(|error| AppError::Internal(format!("failed to store session identity: {error}")))?;

    match current_role {
        Some(role_id) => store_current_role(session, role_id).await,
        None => clear_current_role(session).await,
    }
}

pub async fn read_current_role(session: &Session) -> Result<Option<RoleId>, AppError> {
    session
        .get::<RoleId>(SESSION_CURRENT_ROLE_KEY)
        .await
        .map_err(|error| AppError::Internal(format!("failed to read current role: {error}")))
}

pub async fn store_current_role(session: &Session, role_id: RoleId) -> Result<(), AppError> {
    session
        .insert(SESSION_CURRENT_ROLE_KEY, role_id)
        .await
        .map_err(|error| AppError::Internal(format!("failed to store current role: {error}")))
}

pub async fn clear_current_role(session: &Session) -> Result<(), AppError> {
    session
        .remove::<RoleId>(SESSION_CURRENT_ROLE_KEY)
        .await
        .map(|_| ())
        .map_err(|error| AppError::Internal(format!("failed to clear current role: {error}")))
}

pub async fn set_flash(session: &Session, flash: FlashMessage) -> Result<(), AppError> {
    session
        .insert(SESSION_FLASH_KEY, flash)
        .await
        .map_err(|error| AppError::Internal(format!("failed to store flash message: {error}")))
}

/// Returns the pending flash and removes it, so it renders exactly once.
pub async fn take_flash(session: &Session) -> Result<Option<FlashMessage>, AppError> {
    session
        .remove::<FlashMessage>(SESSION_FLASH_KEY)
        .await
        .map_err(|error| AppError::Internal(format!("failed to read flash message: {error}")))
}
