use async_trait::async_trait;
use essentials_core::AppResult;
use essentials_domain::{Organization, OrganizationId, Partner, PartnerId, User, UserId};

/// Port for user lookups, including each user's ordered role assignments.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user with all role assignments in insertion order.
    async fn find_user(&self, user_id: UserId) -> AppResult<Option<User>>;
}

/// Port for tenant lookups.
#[async_trait]
pub trait TenantRepository: Send + Sync {
    /// Finds an organization by identifier.
    async fn find_organization(
        &self,
        organization_id: OrganizationId,
    ) -> AppResult<Option<Organization>>;

    /// Finds a partner by identifier.
    async fn find_partner(&self, partner_id: PartnerId) -> AppResult<Option<Partner>>;
}
