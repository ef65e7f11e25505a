//! Roles and the authentication context.
//!
//! The login flow (outside this workspace) stores a role string and a user
//! blob in browser storage. They are read once, at the dashboard root, into
//! an [`AuthContext`] that the shell hands down to its pages.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::id::TeacherId;

/// Storage key holding the role string.
pub const ROLE_KEY: &str = "userRole";
/// Storage key holding the user JSON blob.
pub const USER_KEY: &str = "user";

/// Access level that picks the dashboard shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Teacher,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Teacher => "teacher",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for role strings other than `admin` and `teacher`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "teacher" => Ok(Self::Teacher),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// The subset of the stored user blob the dashboard reads.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoredUser {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Who is signed in, as far as the dashboard is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub role: Role,
    pub user: Option<StoredUser>,
}

impl AuthContext {
    /// Build the context from raw storage values.
    ///
    /// Returns `None` when the role is absent or not recognised, which the
    /// router treats as "not authenticated". A user blob that fails to parse
    /// is dropped rather than failing the whole context.
    #[must_use]
    pub fn from_storage(role: Option<&str>, user_json: Option<&str>) -> Option<Self> {
        let role = role?.parse().ok()?;
        let user = user_json.and_then(|raw| serde_json::from_str(raw).ok());
        Some(Self { role, user })
    }

    /// The signed-in teacher's id, only when the user blob says `teacher`.
    #[must_use]
    pub fn teacher_id(&self) -> Option<TeacherId> {
        let user = self.user.as_ref()?;
        (user.role.as_deref() == Some(Role::Teacher.as_str())).then(|| TeacherId::new(&user.id))
    }

    /// Display name from the user blob, if any.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.user.as_ref()?.name.as_deref()
    }
}

/// Where the dashboard root sends the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleRoute {
    AdminShell,
    TeacherShell,
    Login,
}

impl RoleRoute {
    #[must_use]
    pub fn for_context(context: Option<&AuthContext>) -> Self {
        match context.map(|c| c.role) {
            Some(Role::Admin) => Self::AdminShell,
            Some(Role::Teacher) => Self::TeacherShell,
            None => Self::Login,
        }
    }
}
