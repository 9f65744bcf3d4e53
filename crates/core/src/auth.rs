use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::AppError;

/// Permission tier assigned to every authenticated user.
///
/// Roles form a flat set. No role implies another one: a gate that lists
/// only `HR` rejects a `CEO` session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Platform administrator.
    Admin,
    /// Human resources staff.
    Hr,
    /// Line manager.
    Manager,
    /// Finance department.
    Finance,
    /// Chief executive.
    Ceo,
    /// Head of the HR department.
    HodHr,
}

impl Role {
    /// Returns the stable transport value for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Hr => "HR",
            Self::Manager => "MANAGER",
            Self::Finance => "FINANCE",
            Self::Ceo => "CEO",
            Self::HodHr => "HOD_HR",
        }
    }

    /// Returns all known roles.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Role] = &[
            Role::Admin,
            Role::Hr,
            Role::Manager,
            Role::Finance,
            Role::Ceo,
            Role::HodHr,
        ];

        ALL
    }

    /// Parses a transport value into a role.
    pub fn from_transport(value: &str) -> Result<Self, AppError> {
        Self::from_str(value)
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ADMIN" => Ok(Self::Admin),
            "HR" => Ok(Self::Hr),
            "MANAGER" => Ok(Self::Manager),
            "FINANCE" => Ok(Self::Finance),
            "CEO" => Ok(Self::Ceo),
            "HOD_HR" => Ok(Self::HodHr),
            _ => Err(AppError::Validation(format!("unknown role value '{value}'"))),
        }
    }
}

impl Display for Role {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// User information persisted in the authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    id: String,
    role: Role,
    display_name: Option<String>,
}

impl SessionUser {
    /// Creates a session user from identity and role data.
    #[must_use]
    pub fn new(id: impl Into<String>, role: Role, display_name: Option<String>) -> Self {
        Self {
            id: id.into(),
            role,
            display_name,
        }
    }

    /// Returns the stable user identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Returns the role assigned to the user.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the display name, falling back to the identifier.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(self.id.as_str())
    }
}

/// Reason a session could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionError {
    message: String,
}

impl SessionError {
    /// Creates a session error with a diagnostic message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the diagnostic message.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl Display for SessionError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.message.as_str())
    }
}

/// Per-request view of the caller's authentication state.
///
/// A session may carry both a user and an error; consumers must treat any
/// error as unauthenticated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    user: Option<SessionUser>,
    error: Option<SessionError>,
}

impl Session {
    /// Creates a session from raw resolver output.
    #[must_use]
    pub fn new(user: Option<SessionUser>, error: Option<SessionError>) -> Self {
        Self { user, error }
    }

    /// Creates a session for an authenticated user.
    #[must_use]
    pub fn authenticated(user: SessionUser) -> Self {
        Self {
            user: Some(user),
            error: None,
        }
    }

    /// Creates a session with no user and no error.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Creates a session whose resolution failed.
    #[must_use]
    pub fn failed(error: SessionError) -> Self {
        Self {
            user: None,
            error: Some(error),
        }
    }

    /// Returns the resolved user, if any.
    #[must_use]
    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    /// Returns the resolution error, if any.
    #[must_use]
    pub fn error(&self) -> Option<&SessionError> {
        self.error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{Role, SessionUser};

    #[test]
    fn role_roundtrip_transport_value() {
        for role in Role::all() {
            let restored = Role::from_str(role.as_str());
            assert!(restored.is_ok());
            assert_eq!(restored.unwrap_or(Role::Admin), *role);
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!(Role::from_str("EMPLOYEE").is_err());
        assert!(Role::from_str("hr").is_err());
    }

    #[test]
    fn role_serializes_as_transport_value() {
        let encoded = serde_json::to_string(&Role::HodHr).unwrap_or_default();
        assert_eq!(encoded, "\"HOD_HR\"");
    }

    #[test]
    fn display_name_falls_back_to_id() {
        let user = SessionUser::new("u1", Role::Hr, None);
        assert_eq!(user.display_name(), "u1");
    }
}
