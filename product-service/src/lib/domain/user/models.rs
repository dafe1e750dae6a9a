use std::fmt;
use std::str::FromStr;

use auth::PasswordHasher;
use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::user::errors::EmailError;
use crate::user::errors::UserError;
use crate::user::errors::UserIdError;
use crate::user::errors::UserValidationError;

/// User aggregate entity.
///
/// Holds only the Argon2 hash of the password; the plaintext is consumed by
/// [`User::new`] and never stored.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: EmailAddress,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build a new user from raw registration input.
    ///
    /// # Arguments
    /// * `name` - Display name
    /// * `email` - Login email address
    /// * `password` - Plaintext password, hashed before it is stored
    /// * `hasher` - Credential hasher
    ///
    /// # Returns
    /// User with a fresh ID and hashed password
    ///
    /// # Errors
    /// * `Validation(NameRequired | EmailRequired | PasswordRequired)` - A field is empty
    /// * `InvalidEmail` - Email is not a valid address
    /// * `Password` - Hashing failed
    pub fn new(
        name: String,
        email: String,
        password: &str,
        hasher: &PasswordHasher,
    ) -> Result<Self, UserError> {
        if name.is_empty() {
            return Err(UserValidationError::NameRequired.into());
        }
        if email.is_empty() {
            return Err(UserValidationError::EmailRequired.into());
        }
        if password.is_empty() {
            return Err(UserValidationError::PasswordRequired.into());
        }

        let email = EmailAddress::new(email)?;
        let password_hash = hasher.hash(password)?;

        Ok(Self {
            id: UserId::new(),
            name,
            email,
            password_hash,
            created_at: Utc::now(),
        })
    }
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new user.
///
/// Carries raw input; validation happens in [`User::new`].
#[derive(Debug)]
pub struct CreateUserCommand {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl CreateUserCommand {
    pub fn new(name: String, email: String, password: String) -> Self {
        Self {
            name,
            email,
            password,
        }
    }
}
