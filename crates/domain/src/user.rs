//! User domain types and their ordered role assignments.

use essentials_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::role::{RoleAssignment, RoleId, RoleKind};

/// Unique identifier for a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(Uuid);

impl UserId {
    /// Creates a new random user identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a user identifier from an existing UUID value.
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

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Validated email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// Performs basic structural validation: non-empty, contains exactly one `@`,
    /// local part and domain are non-empty, domain contains at least one `.`.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        let trimmed = value.trim().to_lowercase();

        if trimmed.is_empty() {
            return Err(AppError::Validation(
                "email address must not be empty".to_owned(),
            ));
        }

        let Some((local, domain)) = trimmed.split_once('@') else {
            return Err(AppError::Validation(
                "email address must contain exactly one '@'".to_owned(),
            ));
        };

        if local.is_empty() {
            return Err(AppError::Validation(
                "email local part must not be empty".to_owned(),
            ));
        }

        if domain.is_empty() || !domain.contains('.') || domain.contains('@') {
            return Err(AppError::Validation(
                "email domain must contain at least one '.' and no further '@'".to_owned(),
            ));
        }

        Ok(Self(trimmed))
    }

    /// Returns the validated email string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// A person signing in to the bank, holding one or more roles.
///
/// Role order is insertion order; the first role is the default selection at
/// sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    email: EmailAddress,
    display_name: NonEmptyString,
    roles: Vec<RoleAssignment>,
}

impl User {
    /// Creates a user without any roles.
    pub fn new(
        id: UserId,
        email: impl Into<String>,
        display_name: impl Into<String>,
    ) -> AppResult<Self> {
        Ok(Self {
            id,
            email: EmailAddress::new(email)?,
            display_name: NonEmptyString::new(display_name)?,
            roles: Vec::new(),
        })
    }

    /// Returns the user identifier.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Returns the validated email.
    #[must_use]
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the display name.
    #[must_use]
    pub fn display_name(&self) -> &NonEmptyString {
        &self.display_name
    }

    /// Returns all role assignments in insertion order.
    #[must_use]
    pub fn roles(&self) -> &[RoleAssignment] {
        self.roles.as_slice()
    }

    /// Returns the earliest assigned role.
    #[must_use]
    pub fn first_role(&self) -> Option<&RoleAssignment> {
        self.roles.first()
    }

    /// Returns the most recently assigned role.
    #[must_use]
    pub fn last_role(&self) -> Option<&RoleAssignment> {
        self.roles.last()
    }

    /// Finds one of this user's roles by identifier.
    #[must_use]
    pub fn role(&self, role_id: RoleId) -> Option<&RoleAssignment> {
        self.roles.iter().find(|role| role.id() == role_id)
    }

    /// Finds the first role of the given kind.
    #[must_use]
    pub fn find_role_by_kind(&self, kind: RoleKind) -> Option<&RoleAssignment> {
        self.roles.iter().find(|role| role.kind() == kind)
    }

    /// Appends a role assignment.
    pub fn add_role(&mut self, role: RoleAssignment) -> AppResult<()> {
        if self.roles.iter().any(|existing| existing.id() == role.id()) {
            return Err(AppError::Conflict(format!(
                "role '{}' is already assigned to user '{}'",
                role.id(),
                self.id
            )));
        }

        if self
            .roles
            .iter()
            .any(|existing| existing.grants_same_access_as(&role))
        {
            return Err(AppError::Conflict(format!(
                "user '{}' already holds an equivalent '{}' role",
                self.id,
                role.kind().as_str()
            )));
        }

        self.roles.push(role);
        Ok(())
    }
}
