//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod dashboard;
mod date_range;
mod role;
mod tenant;
mod user;

pub use dashboard::{ADMIN_DASHBOARD_PATH, DASHBOARD_PATH, dashboard_path_from_current_role};
pub use date_range::{
    DEFAULT_DATE_PATTERNS, DEFAULT_RANGE_SEPARATOR, DateRange, DateRangeFormat,
    DateRangeParseError,
};
pub use role::{RoleAssignment, RoleId, RoleKind};
pub use tenant::{Organization, OrganizationId, Partner, PartnerId, TenantRef};
pub use user::{EmailAddress, User, UserId};
