use chrono::Utc;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::jwt::SigningKeys;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and tokens.
///
/// Acts as the token issuer (after a successful password check) and as the
/// token verifier behind protected routes. Holds only read-only key material,
/// so one instance can be shared across all request tasks.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
}

/// Result of successful authentication.
#[derive(Debug)]
pub struct AuthenticationResult {
    /// Signed access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `keys` - Signing and verification keys loaded at startup
    pub fn new(keys: SigningKeys) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(keys),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue an access token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Identity the token is issued for
    /// * `lifetime_seconds` - Token lifetime
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash is corrupt
    /// * `JwtError` - Token signing failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: impl ToString,
        lifetime_seconds: i64,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash)? {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.issue_token(subject, lifetime_seconds)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Issue a token that expires `lifetime_seconds` from now.
    ///
    /// Performs no authentication of its own; callers must have verified the
    /// subject's credentials first.
    pub fn issue_token(
        &self,
        subject: impl ToString,
        lifetime_seconds: i64,
    ) -> Result<String, JwtError> {
        self.issue_token_at(subject, Utc::now().timestamp(), lifetime_seconds)
    }

    /// Issue a token with an explicit issue time (Unix timestamp).
    pub fn issue_token_at(
        &self,
        subject: impl ToString,
        issued_at: i64,
        lifetime_seconds: i64,
    ) -> Result<String, JwtError> {
        let claims = Claims::for_subject(subject, issued_at, lifetime_seconds);
        self.jwt_handler.encode(&claims)
    }

    /// Verify a token against the current time.
    ///
    /// # Errors
    /// See [`verify_token_at`](Self::verify_token_at).
    pub fn verify_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.verify_token_at(token, Utc::now().timestamp())
    }

    /// Verify signature, algorithm and expiry of a token.
    ///
    /// # Arguments
    /// * `token` - Compact JWT from the bearer header
    /// * `now` - Current time (Unix timestamp)
    ///
    /// # Returns
    /// Verified claims; `sub` and `exp` are guaranteed present
    ///
    /// # Errors
    /// * `InvalidSignature` / `AlgorithmMismatch` / `DecodingFailed` - Token not trustworthy
    /// * `MissingClaim` - `sub` or `exp` absent
    /// * `TokenExpired` - `exp` lies before `now`
    pub fn verify_token_at(&self, token: &str, now: i64) -> Result<Claims, JwtError> {
        let claims: Claims = self.jwt_handler.decode(token)?;

        if claims.sub.is_none() {
            return Err(JwtError::MissingClaim("sub".to_string()));
        }
        if claims.exp.is_none() {
            return Err(JwtError::MissingClaim("exp".to_string()));
        }
        if claims.is_expired(now) {
            return Err(JwtError::TokenExpired);
        }

        Ok(claims)
    }
}
