use std::sync::Arc;

use essentials_application::{
    DateRangeFilterConfig, DateRangeFilterService, SessionContext, SessionContextService,
};
use essentials_domain::{Organization, Partner, RoleAssignment, RoleKind, User};
use essentials_infrastructure::InMemoryDirectory;
use tower_sessions::{MemoryStore, Session};

use crate::dev_seed;
use crate::state::AppState;

pub struct SeededDirectory {
    pub state: AppState,
    pub organization: Organization,
    pub partner: Partner,
    pub admin: User,
    pub org_user: User,
    pub partner_user: User,
}

impl SeededDirectory {
    pub async fn new() -> Self {
        let directory = Arc::new(InMemoryDirectory::new());
        let seed = dev_seed::run(&directory)
            .await
            .unwrap_or_else(|error| panic!("dev seed should succeed: {error}"));

        Self {
            state: AppState {
                session_context_service: SessionContextService::new(
                    directory.clone(),
                    directory,
                ),
                date_range_filter_service: DateRangeFilterService::new(
                    DateRangeFilterConfig::default(),
                ),
            },
            organization: seed.organization,
            partner: seed.partner,
            admin: seed.super_admin,
            org_user: seed.org_user,
            partner_user: seed.partner_user,
        }
    }

    pub fn context_for_kind(&self, user: &User, kind: RoleKind) -> SessionContext {
        SessionContext::new(
            user.clone(),
            user.find_role_by_kind(kind).map(RoleAssignment::id),
        )
    }
}

pub fn session() -> Session {
    Session::new(None, Arc::new(MemoryStore::default()), None)
}
