use crate::role::{RoleAssignment, RoleKind};

/// Landing page for platform operators.
pub const ADMIN_DASHBOARD_PATH: &str = "/admin/dashboard";

/// Landing page for organization and partner users.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Returns the dashboard a user lands on for the active role.
#[must_use]
pub fn dashboard_path_from_current_role(current_role: Option<&RoleAssignment>) -> &'static str {
    match current_role.map(RoleAssignment::kind) {
        Some(RoleKind::SuperAdmin) => ADMIN_DASHBOARD_PATH,
        Some(RoleKind::OrgUser | RoleKind::Partner) | None => DASHBOARD_PATH,
    }
}
