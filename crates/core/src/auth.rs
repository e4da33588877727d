use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User information persisted in the authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    user_id: Uuid,
    display_name: String,
    email: Option<String>,
}

impl UserIdentity {
    /// Creates a user identity from directory data.
    #[must_use]
    pub fn new(user_id: Uuid, display_name: impl Into<String>, email: Option<String>) -> Self {
        Self {
            user_id,
            display_name: display_name.into(),
            email,
        }
    }

    /// Returns the directory identifier of the signed-in user.
    #[must_use]
    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    /// Returns the display name for the current user.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.display_name.as_str()
    }

    /// Returns the email, if one is known.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::UserIdentity;

    #[test]
    fn identity_survives_session_serialization() {
        let identity = UserIdentity::new(
            Uuid::new_v4(),
            "Leslie Knope",
            Some("leslie@pawnee.gov".to_owned()),
        );

        let encoded = serde_json::to_value(&identity).unwrap_or_default();
        let decoded = serde_json::from_value::<UserIdentity>(encoded);

        assert!(decoded.is_ok());
        assert_eq!(decoded.ok(), Some(identity));
    }
}
