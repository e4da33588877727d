use essentials_application::{FlashKind, FlashMessage, SessionSummary};
use essentials_core::UserIdentity;
use essentials_domain::{Organization, Partner, RoleAssignment, TenantRef, User};

use super::{
    FlashResponse, OrganizationResponse, PartnerResponse, RoleResponse, SessionContextResponse,
};

impl From<&RoleAssignment> for RoleResponse {
    fn from(role: &RoleAssignment) -> Self {
        let (tenant_type, tenant_id) = match role.tenant() {
            Some(TenantRef::Organization(organization_id)) => (
                Some("organization".to_owned()),
                Some(organization_id.to_string()),
            ),
            Some(TenantRef::Partner(partner_id)) => {
                (Some("partner".to_owned()), Some(partner_id.to_string()))
            }
            None => (None, None),
        };

        Self {
            id: role.id().to_string(),
            kind: role.kind().as_str().to_owned(),
            tenant_type,
            tenant_id,
        }
    }
}

impl From<Organization> for OrganizationResponse {
    fn from(organization: Organization) -> Self {
        Self {
            id: organization.id().to_string(),
            name: organization.name().as_str().to_owned(),
            short_name: organization.short_name().as_str().to_owned(),
        }
    }
}

impl From<Partner> for PartnerResponse {
    fn from(partner: Partner) -> Self {
        Self {
            id: partner.id().to_string(),
            name: partner.name().as_str().to_owned(),
            organization_id: partner.organization_id().to_string(),
        }
    }
}

impl From<FlashMessage> for FlashResponse {
    fn from(flash: FlashMessage) -> Self {
        let kind = match flash.kind {
            FlashKind::Error => "error",
            FlashKind::Notice => "notice",
        };

        Self {
            kind: kind.to_owned(),
            message: flash.message,
        }
    }
}

impl SessionContextResponse {
    /// Creates a response from the session identity, directory user and resolved tenants.
    #[must_use]
    pub fn from_summary(identity: &UserIdentity, user: &User, summary: SessionSummary) -> Self {
        Self {
            user_id: identity.user_id().to_string(),
            display_name: identity.display_name().to_owned(),
            email: identity.email().map(ToOwned::to_owned),
            roles: user.roles().iter().map(RoleResponse::from).collect(),
            current_role: summary.current_role.as_ref().map(RoleResponse::from),
            current_organization: summary.organization.map(OrganizationResponse::from),
            current_partner: summary.partner.map(PartnerResponse::from),
            dashboard_path: summary.dashboard_path.to_owned(),
        }
    }
}
