//! User accounts managed from the admin surface.
//!
//! Passwords are held and compared in plaintext; the login gate is a
//! placeholder and hardening it is out of scope.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::record_id::RecordId;

/// Access role attached to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    /// Wire spelling of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UserValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            other => Err(UserValidationError::InvalidRole {
                value: other.to_owned(),
            }),
        }
    }
}

/// Stored user record, password included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// User without the password, as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserSummary {
    #[schema(value_type = String, example = "u1")]
    pub id: RecordId,
    #[schema(example = "Admin")]
    pub name: String,
    #[schema(example = "admin@example.com")]
    pub email: String,
    pub role: Role,
}

impl From<&User> for UserSummary {
    fn from(value: &User) -> Self {
        Self {
            id: value.id.clone(),
            name: value.name.clone(),
            email: value.email.clone(),
            role: value.role,
        }
    }
}

/// Submitted user fields for creation and partial updates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct UserFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    #[schema(example = "user")]
    pub role: Option<String>,
}

/// Reasons submitted user fields are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// Creation requires a name, an email and a password.
    MissingRequired,
    /// An update supplied an empty value for a required field.
    BlankField { field: &'static str },
    /// The role is neither `admin` nor `user`.
    InvalidRole { value: String },
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequired => write!(f, "name, email and password are required"),
            Self::BlankField { field } => write!(f, "{field} must not be empty"),
            Self::InvalidRole { value } => {
                write!(f, "role `{value}` is not one of admin or user")
            }
        }
    }
}

impl std::error::Error for UserValidationError {}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_role(raw: Option<&str>) -> Result<Option<Role>, UserValidationError> {
    raw.filter(|r| !r.trim().is_empty())
        .map(Role::from_str)
        .transpose()
}

impl User {
    /// Build a new user from submitted fields; the role defaults to `user`.
    pub fn from_fields(id: RecordId, fields: UserFields) -> Result<Self, UserValidationError> {
        let role = parse_role(fields.role.as_deref())?.unwrap_or_default();
        let (Some(name), Some(email), Some(password)) = (
            non_blank(fields.name),
            non_blank(fields.email),
            non_blank(fields.password),
        ) else {
            return Err(UserValidationError::MissingRequired);
        };

        Ok(Self {
            id,
            name,
            email: email.trim().to_owned(),
            password,
            role,
        })
    }

    /// Overwrite the supplied fields, keeping the id and everything absent.
    pub fn apply_fields(&mut self, fields: UserFields) -> Result<(), UserValidationError> {
        for (field, value) in [
            ("name", &fields.name),
            ("email", &fields.email),
            ("password", &fields.password),
        ] {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(UserValidationError::BlankField { field });
            }
        }
        let role = parse_role(fields.role.as_deref())?;

        if let Some(value) = fields.name {
            self.name = value;
        }
        if let Some(value) = fields.email {
            self.email = value.trim().to_owned();
        }
        if let Some(value) = fields.password {
            self.password = value;
        }
        if let Some(value) = role {
            self.role = value;
        }
        Ok(())
    }
}
