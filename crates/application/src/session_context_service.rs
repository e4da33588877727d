use std::sync::Arc;

use essentials_core::{AppError, AppResult};
use essentials_domain::{
    Organization, OrganizationId, Partner, PartnerId, RoleAssignment, RoleId, User, UserId,
    dashboard_path_from_current_role,
};

use crate::{TenantRepository, UserRepository};

/// Per-request view of who is signed in and which of their roles is active.
///
/// The current role is always one of the user's own assignments; a selection
/// that does not belong to the user is dropped on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    user: User,
    current_role_id: Option<RoleId>,
}

impl SessionContext {
    /// Creates a context for a user and an optional role selection.
    #[must_use]
    pub fn new(user: User, current_role_id: Option<RoleId>) -> Self {
        let current_role_id = current_role_id.filter(|role_id| user.role(*role_id).is_some());

        Self {
            user,
            current_role_id,
        }
    }

    /// Returns the signed-in user.
    #[must_use]
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Returns the active role assignment.
    #[must_use]
    pub fn current_role(&self) -> Option<&RoleAssignment> {
        self.current_role_id
            .and_then(|role_id| self.user.role(role_id))
    }

    /// Returns the organization the active role is scoped to.
    #[must_use]
    pub fn current_organization_id(&self) -> Option<OrganizationId> {
        self.current_role().and_then(RoleAssignment::organization_id)
    }

    /// Returns the partner the active role is scoped to.
    #[must_use]
    pub fn current_partner_id(&self) -> Option<PartnerId> {
        self.current_role().and_then(RoleAssignment::partner_id)
    }

    /// Returns the dashboard path for the active role.
    #[must_use]
    pub fn dashboard_path(&self) -> &'static str {
        dashboard_path_from_current_role(self.current_role())
    }
}

/// Resolved tenants for the active role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    /// Active role, if one is selected.
    pub current_role: Option<RoleAssignment>,
    /// Organization of the active role.
    pub organization: Option<Organization>,
    /// Partner of the active role.
    pub partner: Option<Partner>,
    /// Dashboard the active role lands on.
    pub dashboard_path: &'static str,
}

/// Application service resolving session context from directory data.
#[derive(Clone)]
pub struct SessionContextService {
    user_repository: Arc<dyn UserRepository>,
    tenant_repository: Arc<dyn TenantRepository>,
}

impl SessionContextService {
    /// Creates a session context service from repository implementations.
    #[must_use]
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        tenant_repository: Arc<dyn TenantRepository>,
    ) -> Self {
        Self {
            user_repository,
            tenant_repository,
        }
    }

    /// Loads the signed-in user and binds the stored role selection.
    pub async fn load_context(
        &self,
        user_id: UserId,
        current_role_id: Option<RoleId>,
    ) -> AppResult<SessionContext> {
        let user = self
            .user_repository
            .find_user(user_id)
            .await?
            .ok_or_else(|| {
                AppError::Unauthorized(format!("user '{user_id}' is no longer registered"))
            })?;

        Ok(SessionContext::new(user, current_role_id))
    }

    /// Returns the role selected when a user signs in without a stored choice.
    #[must_use]
    pub fn default_role(user: &User) -> Option<RoleId> {
        user.first_role().map(RoleAssignment::id)
    }

    /// Switches the active role to another of the user's assignments.
    pub fn switch_role(&self, context: &SessionContext, role_id: RoleId) -> AppResult<SessionContext> {
        if context.user().role(role_id).is_none() {
            return Err(AppError::Forbidden(format!(
                "role '{role_id}' is not assigned to user '{}'",
                context.user().id()
            )));
        }

        Ok(SessionContext::new(context.user().clone(), Some(role_id)))
    }

    /// Returns the organization of the active role.
    pub async fn current_organization(
        &self,
        context: &SessionContext,
    ) -> AppResult<Option<Organization>> {
        let Some(organization_id) = context.current_organization_id() else {
            return Ok(None);
        };

        self.tenant_repository
            .find_organization(organization_id)
            .await?
            .map(Some)
            .ok_or_else(|| {
                AppError::NotFound(format!("organization '{organization_id}' does not exist"))
            })
    }

    /// Returns the partner of the active role.
    pub async fn current_partner(&self, context: &SessionContext) -> AppResult<Option<Partner>> {
        let Some(partner_id) = context.current_partner_id() else {
            return Ok(None);
        };

        self.tenant_repository
            .find_partner(partner_id)
            .await?
            .map(Some)
            .ok_or_else(|| AppError::NotFound(format!("partner '{partner_id}' does not exist")))
    }

    /// Resolves the active role together with its tenant entities.
    pub async fn summarize(&self, context: &SessionContext) -> AppResult<SessionSummary> {
        Ok(SessionSummary {
            current_role: context.current_role().cloned(),
            organization: self.current_organization(context).await?,
            partner: self.current_partner(context).await?,
            dashboard_path: context.dashboard_path(),
        })
    }
}
