use serde::{Deserialize, Serialize};
use ts_rs::TS;

mod conversions;

/// Health response payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/health-response.ts"
)]
pub struct HealthResponse {
    pub status: String,
}

/// API representation of a role assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-response.ts"
)]
pub struct RoleResponse {
    pub id: String,
    pub kind: String,
    pub tenant_type: Option<String>,
    pub tenant_id: Option<String>,
}

/// API representation of an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/organization-response.ts"
)]
pub struct OrganizationResponse {
    pub id: String,
    pub name: String,
    pub short_name: String,
}

/// API representation of a partner agency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/partner-response.ts"
)]
pub struct PartnerResponse {
    pub id: String,
    pub name: String,
    pub organization_id: String,
}

/// Pending one-request notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/flash-response.ts"
)]
pub struct FlashResponse {
    pub kind: String,
    pub message: String,
}

/// Resolved session context for the signed-in user.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/session-context-response.ts"
)]
pub struct SessionContextResponse {
    pub user_id: String,
    pub display_name: String,
    pub email: Option<String>,
    pub roles: Vec<RoleResponse>,
    pub current_role: Option<RoleResponse>,
    pub current_organization: Option<OrganizationResponse>,
    pub current_partner: Option<PartnerResponse>,
    pub dashboard_path: String,
}

/// Landing page payload for organization and partner users.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/dashboard-response.ts"
)]
pub struct DashboardResponse {
    pub display_name: String,
    pub current_role: Option<RoleResponse>,
    pub organization_name: Option<String>,
    pub partner_name: Option<String>,
    pub flash: Option<FlashResponse>,
}

/// Landing page payload for super admins.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/admin-dashboard-response.ts"
)]
pub struct AdminDashboardResponse {
    pub display_name: String,
    pub flash: Option<FlashResponse>,
}

/// Incoming payload for switching the active role.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/switch-role-request.ts"
)]
pub struct SwitchRoleRequest {
    pub role_id: String,
}

/// Incoming payload for development sign-in.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/dev-sign-in-request.ts"
)]
pub struct DevSignInRequest {
    pub user_id: String,
}

/// Filter values applied to a list page.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/filtered-index-response.ts"
)]
pub struct FilteredIndexResponse {
    pub controller: String,
    pub action: String,
    pub date_range: String,
    pub date_range_label: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub flash: Option<FlashResponse>,
}
