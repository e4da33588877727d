use std::str::FromStr;

use essentials_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::tenant::{OrganizationId, PartnerId, TenantRef};

/// Unique identifier for one role assignment row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleId(Uuid);

impl RoleId {
    /// Creates a new random role identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a role identifier from an existing UUID value.
    #[must_use]
    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    /// Returns the underlying UUID value.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for RoleId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RoleId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Kinds of roles a user can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleKind {
    /// Platform operator with access to the admin area.
    SuperAdmin,
    /// Member of an organization.
    OrgUser,
    /// Member of a partner agency.
    Partner,
}

impl RoleKind {
    /// Returns the storage string for this role kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::OrgUser => "org_user",
            Self::Partner => "partner",
        }
    }
}

impl FromStr for RoleKind {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "super_admin" => Ok(Self::SuperAdmin),
            "org_user" => Ok(Self::OrgUser),
            "partner" => Ok(Self::Partner),
            _ => Err(AppError::Validation(format!("unknown role kind '{value}'"))),
        }
    }
}

/// A role held by a user, optionally scoped to one tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    id: RoleId,
    kind: RoleKind,
    tenant: Option<TenantRef>,
}

impl RoleAssignment {
    /// Creates a validated role assignment.
    ///
    /// Super admins are never tenant scoped, organization users must point at an
    /// organization and partner users must point at a partner.
    pub fn new(id: RoleId, kind: RoleKind, tenant: Option<TenantRef>) -> AppResult<Self> {
        let valid = matches!(
            (kind, tenant),
            (RoleKind::SuperAdmin, None)
                | (RoleKind::OrgUser, Some(TenantRef::Organization(_)))
                | (RoleKind::Partner, Some(TenantRef::Partner(_)))
        );

        if !valid {
            return Err(AppError::Validation(format!(
                "role '{}' cannot be scoped to {}",
                kind.as_str(),
                describe_tenant(tenant)
            )));
        }

        Ok(Self { id, kind, tenant })
    }

    /// Returns the role identifier.
    #[must_use]
    pub fn id(&self) -> RoleId {
        self.id
    }

    /// Returns the role kind.
    #[must_use]
    pub fn kind(&self) -> RoleKind {
        self.kind
    }

    /// Returns the tenant this role is scoped to.
    #[must_use]
    pub fn tenant(&self) -> Option<TenantRef> {
        self.tenant
    }

    /// Returns the organization this role is scoped to, if any.
    #[must_use]
    pub fn organization_id(&self) -> Option<OrganizationId> {
        match self.tenant {
            Some(TenantRef::Organization(organization_id)) => Some(organization_id),
            Some(TenantRef::Partner(_)) | None => None,
        }
    }

    /// Returns the partner this role is scoped to, if any.
    #[must_use]
    pub fn partner_id(&self) -> Option<PartnerId> {
        match self.tenant {
            Some(TenantRef::Partner(partner_id)) => Some(partner_id),
            Some(TenantRef::Organization(_)) | None => None,
        }
    }

    /// Returns whether this assignment grants the same access as another.
    #[must_use]
    pub fn grants_same_access_as(&self, other: &Self) -> bool {
        self.kind == other.kind && self.tenant == other.tenant
    }
}

fn describe_tenant(tenant: Option<TenantRef>) -> String {
    match tenant {
        Some(TenantRef::Organization(organization_id)) => {
            format!("organization '{organization_id}'")
        }
        Some(TenantRef::Partner(partner_id)) => format!("partner '{partner_id}'"),
        None => "no tenant".to_owned(),
    }
}
