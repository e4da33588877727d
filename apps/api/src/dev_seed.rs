use std::str::FromStr;

use essentials_application::UserRepository;
use essentials_core::{AppError, AppResult};
use essentials_domain::{
    Organization, OrganizationId, Partner, PartnerId, RoleAssignment, RoleId, RoleKind,
    TenantRef, User, UserId,
};
use essentials_infrastructure::InMemoryDirectory;
use tracing::info;
use uuid::Uuid;

const DEV_SEED_ORGANIZATION_ID: &str = "11111111-1111-1111-1111-111111111111";
const DEV_SEED_ORGANIZATION_NAME: &str = "Pawnee Diaper Bank";
const DEV_SEED_ORGANIZATION_SHORT_NAME: &str = "pawnee";
const DEV_SEED_SECOND_ORGANIZATION_ID: &str = "22222222-2222-2222-2222-222222222222";
const DEV_SEED_SECOND_ORGANIZATION_NAME: &str = "Eagleton Diaper Bank";
const DEV_SEED_SECOND_ORGANIZATION_SHORT_NAME: &str = "eagleton";
const DEV_SEED_PARTNER_ID: &str = "33333333-3333-3333-3333-333333333333";
const DEV_SEED_PARTNER_NAME: &str = "Pawnee Family Shelter";

const DEV_SEED_SUPER_ADMIN_ID: &str = "a2c8ea5f-4f39-4724-97f5-932f97f54f76";
const DEV_SEED_SUPER_ADMIN_EMAIL: &str = "superadmin@essentials.local";
const DEV_SEED_ORG_USER_ID: &str = "96d11e90-7403-4654-9727-cb1043f8bd31";
const DEV_SEED_ORG_USER_EMAIL: &str = "org_user@essentials.local";
const DEV_SEED_PARTNER_USER_ID: &str = "5b0f3c44-58a9-4f0e-9d8e-1f7b7c0e2a61";
const DEV_SEED_PARTNER_USER_EMAIL: &str = "partner@essentials.local";

/// Role grant for a seeded user: storage value of the kind and the tenant id constant.
struct SeedRole {
    kind: &'static str,
    tenant: Option<SeedTenant>,
}

enum SeedTenant {
    Organization(&'static str),
    Partner(&'static str),
}

impl SeedRole {
    fn assignment(&self) -> AppResult<RoleAssignment> {
        let kind = RoleKind::from_str(self.kind)?;
        let tenant = match self.tenant {
            Some(SeedTenant::Organization(id)) => Some(TenantRef::Organization(
                OrganizationId::from_uuid(parse_uuid_const(id, "seed role organization")?),
            )),
            Some(SeedTenant::Partner(id)) => Some(TenantRef::Partner(PartnerId::from_uuid(
                parse_uuid_const(id, "seed role partner")?,
            ))),
            None => None,
        };

        RoleAssignment::new(RoleId::new(), kind, tenant)
    }
}

// Roles in assignment order. The super admin's first role is an organization
// role, so signing in lands on the general dashboard until the admin role is
// selected.
const DEV_SEED_SUPER_ADMIN_ROLES: &[SeedRole] = &[
    SeedRole {
        kind: "org_user",
        tenant: Some(SeedTenant::Organization(DEV_SEED_ORGANIZATION_ID)),
    },
    SeedRole {
        kind: "super_admin",
        tenant: None,
    },
];
const DEV_SEED_ORG_USER_ROLES: &[SeedRole] = &[
    SeedRole {
        kind: "org_user",
        tenant: Some(SeedTenant::Organization(DEV_SEED_ORGANIZATION_ID)),
    },
    SeedRole {
        kind: "org_user",
        tenant: Some(SeedTenant::Organization(DEV_SEED_SECOND_ORGANIZATION_ID)),
    },
];
const DEV_SEED_PARTNER_USER_ROLES: &[SeedRole] = &[SeedRole {
    kind: "partner",
    tenant: Some(SeedTenant::Partner(DEV_SEED_PARTNER_ID)),
}];

/// Entities created by the development seed.
pub struct DevSeed {
    pub organization: Organization,
    pub partner: Partner,
    pub super_admin: User,
    pub org_user: User,
    pub partner_user: User,
}

/// Seeds two organizations, one partner and a user for each role kind.
///
/// The organization user belongs to both organizations.
pub async fn run(directory: &InMemoryDirectory) -> AppResult<DevSeed> {
    let organization = Organization::new(
        OrganizationId::from_uuid(parse_uuid_const(
            DEV_SEED_ORGANIZATION_ID,
            "DEV_SEED_ORGANIZATION_ID",
        )?),
        DEV_SEED_ORGANIZATION_NAME,
        DEV_SEED_ORGANIZATION_SHORT_NAME,
    )?;
    let second_organization = Organization::new(
        OrganizationId::from_uuid(parse_uuid_const(
            DEV_SEED_SECOND_ORGANIZATION_ID,
            "DEV_SEED_SECOND_ORGANIZATION_ID",
        )?),
        DEV_SEED_SECOND_ORGANIZATION_NAME,
        DEV_SEED_SECOND_ORGANIZATION_SHORT_NAME,
    )?;
    let partner = Partner::new(
        PartnerId::from_uuid(parse_uuid_const(DEV_SEED_PARTNER_ID, "DEV_SEED_PARTNER_ID")?),
        DEV_SEED_PARTNER_NAME,
        organization.id(),
    )?;

    directory.insert_organization(organization.clone()).await?;
    directory
        .insert_organization(second_organization.clone())
        .await?;
    directory.insert_partner(partner.clone()).await?;

    let super_admin = seed_user(
        directory,
        DEV_SEED_SUPER_ADMIN_ID,
        "DEV_SEED_SUPER_ADMIN_ID",
        DEV_SEED_SUPER_ADMIN_EMAIL,
        "Super Admin",
        DEV_SEED_SUPER_ADMIN_ROLES,
    )
    .await?;
    let org_user = seed_user(
        directory,
        DEV_SEED_ORG_USER_ID,
        "DEV_SEED_ORG_USER_ID",
        DEV_SEED_ORG_USER_EMAIL,
        "Organization User",
        DEV_SEED_ORG_USER_ROLES,
    )
    .await?;
    let partner_user = seed_user(
        directory,
        DEV_SEED_PARTNER_USER_ID,
        "DEV_SEED_PARTNER_USER_ID",
        DEV_SEED_PARTNER_USER_EMAIL,
        "Partner User",
        DEV_SEED_PARTNER_USER_ROLES,
    )
    .await?;

    Ok(DevSeed {
        organization,
        partner,
        super_admin,
        org_user,
        partner_user,
    })
}

async fn seed_user(
    directory: &InMemoryDirectory,
    id: &str,
    name: &str,
    email: &str,
    display_name: &str,
    roles: &[SeedRole],
) -> AppResult<User> {
    let user = User::new(
        UserId::from_uuid(parse_uuid_const(id, name)?),
        email,
        display_name,
    )?;
    let user_id = user.id();
    directory.insert_user(user).await?;

    for role in roles {
        directory.assign_role(user_id, role.assignment()?).await?;
    }

    let user = directory
        .find_user(user_id)
        .await?
        .ok_or_else(|| AppError::Internal(format!("seeded user '{user_id}' was not stored")))?;
    info!(%user_id, email = user.email().as_str(), roles = user.roles().len(), "seeded development user");

    Ok(user)
}

fn parse_uuid_const(value: &str, name: &str) -> AppResult<Uuid> {
    Uuid::parse_str(value)
        .map_err(|error| AppError::Internal(format!("invalid {name} constant: {error}")))
}
