use std::collections::HashMap;

use async_trait::async_trait;
use essentials_application::{TenantRepository, UserRepository};
use essentials_core::{AppError, AppResult};
use essentials_domain::{
    Organization, OrganizationId, Partner, PartnerId, RoleAssignment, TenantRef, User, UserId,
};
use tokio::sync::RwLock;
use tracing::debug;

/// In-memory user and tenant directory.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    users: RwLock<HashMap<UserId, User>>,
    organizations: RwLock<HashMap<OrganizationId, Organization>>,
    partners: RwLock<HashMap<PartnerId, Partner>>,
}

impl InMemoryDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            organizations: RwLock::new(HashMap::new()),
            partners: RwLock::new(HashMap::new()),
        }
    }

    /// Stores a new organization.
    pub async fn insert_organization(&self, organization: Organization) -> AppResult<()> {
        let mut organizations = self.organizations.write().await;
        if organizations.contains_key(&organization.id()) {
            return Err(AppError::Conflict(format!(
                "organization '{}' already exists",
                organization.id()
            )));
        }

        debug!(organization_id = %organization.id(), "organization stored");
        organizations.insert(organization.id(), organization);
        Ok(())
    }

    /// Stores a new partner served by an existing organization.
    pub async fn insert_partner(&self, partner: Partner) -> AppResult<()> {
        if !self
            .organizations
            .read()
            .await
            .contains_key(&partner.organization_id())
        {
            return Err(AppError::NotFound(format!(
                "organization '{}' does not exist",
                partner.organization_id()
            )));
        }

        let mut partners = self.partners.write().await;
        if partners.contains_key(&partner.id()) {
            return Err(AppError::Conflict(format!(
                "partner '{}' already exists",
                partner.id()
            )));
        }

        debug!(partner_id = %partner.id(), "partner stored");
        partners.insert(partner.id(), partner);
        Ok(())
    }

    /// Stores a new user together with any roles already attached.
    pub async fn insert_user(&self, user: User) -> AppResult<()> {
        for role in user.roles() {
            self.ensure_tenant_exists(role).await?;
        }

        let mut users = self.users.write().await;
        if users.contains_key(&user.id()) {
            return Err(AppError::Conflict(format!(
                "user '{}' already exists",
                user.id()
            )));
        }

        debug!(user_id = %user.id(), roles = user.roles().len(), "user stored");
        users.insert(user.id(), user);
        Ok(())
    }

    /// Appends a role to an existing user.
    pub async fn assign_role(&self, user_id: UserId, role: RoleAssignment) -> AppResult<()> {
        self.ensure_tenant_exists(&role).await?;

        let mut users = self.users.write().await;
        let user = users
            .get_mut(&user_id)
            .ok_or_else(|| AppError::NotFound(format!("user '{user_id}' does not exist")))?;

        debug!(%user_id, role = role.kind().as_str(), "role assigned");
        user.add_role(role)
    }

    async fn ensure_tenant_exists(&self, role: &RoleAssignment) -> AppResult<()> {
        let exists = match role.tenant() {
            Some(TenantRef::Organization(organization_id)) => self
                .organizations
                .read()
                .await
                .contains_key(&organization_id),
            Some(TenantRef::Partner(partner_id)) => {
                self.partners.read().await.contains_key(&partner_id)
            }
            None => true,
        };

        if !exists {
            return Err(AppError::NotFound(format!(
                "tenant for role '{}' does not exist",
                role.id()
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryDirectory {
    async fn find_user(&self, user_id: UserId) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(&user_id).cloned())
    }
}

#[async_trait]
impl TenantRepository for InMemoryDirectory {
    async fn find_organization(
        &self,
        organization_id: OrganizationId,
    ) -> AppResult<Option<Organization>> {
        Ok(self
            .organizations
            .read()
            .await
            .get(&organization_id)
            .cloned())
    }

    async fn find_partner(&self, partner_id: PartnerId) -> AppResult<Option<Partner>> {
        Ok(self.partners.read().await.get(&partner_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use essentials_application::{TenantRepository, UserRepository};
    use essentials_core::AppError;
    use essentials_domain::{
        Organization, OrganizationId, Partner, PartnerId, RoleAssignment, RoleId, RoleKind,
        TenantRef, User, UserId,
    };

    use super::InMemoryDirectory;

    fn organization() -> Organization {
        Organization::new(OrganizationId::new(), "Pawnee Diaper Bank", "pawnee")
            .unwrap_or_else(|_| panic!("organization should be valid"))
    }

    fn org_role(id: RoleId, organization_id: OrganizationId) -> RoleAssignment {
        RoleAssignment::new(
            id,
            RoleKind::OrgUser,
            Some(TenantRef::Organization(organization_id)),
        )
        .unwrap_or_else(|_| panic!("organization role should be valid"))
    }

    fn partner_role(id: RoleId, partner_id: PartnerId) -> RoleAssignment {
        RoleAssignment::new(id, RoleKind::Partner, Some(TenantRef::Partner(partner_id)))
            .unwrap_or_else(|_| panic!("partner role should be valid"))
    }

    fn user() -> User {
        User::new(UserId::new(), "ann@pawnee.gov", "Ann Perkins")
            .unwrap_or_else(|_| panic!("user should be valid"))
    }

    #[tokio::test]
    async fn assigned_roles_keep_insertion_order() {
        let directory = InMemoryDirectory::new();
        let first_org = organization();
        let second_org = organization();
        let user = user();
        let user_id = user.id();

        assert!(directory.insert_organization(first_org.clone()).await.is_ok());
        assert!(directory.insert_organization(second_org.clone()).await.is_ok());
        assert!(directory.insert_user(user).await.is_ok());
        assert!(
            directory
                .assign_role(user_id, org_role(RoleId::new(), first_org.id()))
                .await
                .is_ok()
        );
        assert!(
            directory
                .assign_role(user_id, org_role(RoleId::new(), second_org.id()))
                .await
                .is_ok()
        );

        let stored = directory.find_user(user_id).await.ok().flatten();
        let organizations: Vec<_> = stored
            .iter()
            .flat_map(|user| user.roles())
            .filter_map(RoleAssignment::organization_id)
            .collect();

        assert_eq!(organizations, vec![first_org.id(), second_org.id()]);
    }

    #[tokio::test]
    async fn role_for_unknown_tenant_is_rejected() {
        let directory = InMemoryDirectory::new();
        let user = user();
        let user_id = user.id();
        assert!(directory.insert_user(user).await.is_ok());

        let result = directory
            .assign_role(user_id, partner_role(RoleId::new(), PartnerId::new()))
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn partner_requires_existing_organization() {
        let directory = InMemoryDirectory::new();
        let partner = Partner::new(PartnerId::new(), "Eagleton Shelter", OrganizationId::new())
            .unwrap_or_else(|_| panic!("partner should be valid"));

        let result = directory.insert_partner(partner).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn duplicate_user_is_rejected() {
        let directory = InMemoryDirectory::new();
        let user = user();

        assert!(directory.insert_user(user.clone()).await.is_ok());
        assert!(matches!(
            directory.insert_user(user).await,
            Err(AppError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn tenants_are_found_by_identifier() {
        let directory = InMemoryDirectory::new();
        let organization = organization();
        let partner = Partner::new(PartnerId::new(), "Eagleton Shelter", organization.id())
            .unwrap_or_else(|_| panic!("partner should be valid"));

        assert!(directory.insert_organization(organization.clone()).await.is_ok());
        assert!(directory.insert_partner(partner.clone()).await.is_ok());

        assert_eq!(
            directory.find_organization(organization.id()).await.ok(),
            Some(Some(organization))
        );
        assert_eq!(
            directory.find_partner(partner.id()).await.ok(),
            Some(Some(partner))
        );
        assert_eq!(
            directory.find_partner(PartnerId::new()).await.ok(),
            Some(None)
        );
    }
}
