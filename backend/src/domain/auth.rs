//! Login credentials and the session projection of a signed-in user.
//!
//! Handlers turn raw payload strings into [`LoginCredentials`] before calling
//! the login port, so services never see blank input.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use zeroize::Zeroizing;

use super::user::{Role, User};

/// Identifier stored for guest sessions.
pub const GUEST_ID: &str = "guest";

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Email was missing or blank once trimmed.
    EmptyEmail,
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Validated login credentials.
///
/// ## Invariants
/// - `email` is trimmed and non-empty.
/// - `password` is non-empty and compared exactly as supplied.
///
/// # Examples
/// ```
/// use scholar::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" admin@example.com ", "password")
///     .expect("valid credentials");
/// assert_eq!(creds.email(), "admin@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, LoginValidationError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(LoginValidationError::EmptyEmail);
        }
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }
        Ok(Self {
            email: email.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Email used to look the account up.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password supplied by the caller.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Signed-in user as kept in the session cookie.
///
/// Guests carry no role, which keeps them out of every admin view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SessionUser {
    #[schema(example = "u1")]
    pub id: String,
    #[schema(example = "Admin")]
    pub name: String,
    #[schema(example = "admin@example.com")]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl SessionUser {
    /// Projection stored by guest login.
    #[must_use]
    pub fn guest() -> Self {
        Self {
            id: GUEST_ID.to_owned(),
            name: "Guest".to_owned(),
            email: String::new(),
            role: None,
        }
    }

    /// Whether the session grants admin access.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Some(Role::Admin)
    }
}

impl From<&User> for SessionUser {
    fn from(value: &User) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name.clone(),
            email: value.email.clone(),
            role: Some(value.role),
        }
    }
}
