//! Credential and token primitives for the product service.
//!
//! - Password hashing (Argon2id) for storing user credentials
//! - Signed access tokens (JWT) carrying a subject and an expiry
//! - An [`Authenticator`] that issues tokens only after a password match and
//!   verifies them on protected routes
//!
//! The signing algorithm is chosen by the caller through [`SigningKeys`]:
//! a shared secret (HS256) or an RSA key pair (RS256).
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! assert!(!hasher.verify("other_password", &hash).unwrap());
//! ```
//!
//! ## Issuing and verifying tokens
//! ```
//! use auth::{Authenticator, SigningKeys};
//!
//! let authenticator = Authenticator::new(SigningKeys::hs256(b"secret_key_at_least_32_bytes_long!"));
//!
//! let hash = authenticator.hash_password("password123").unwrap();
//! let result = authenticator
//!     .authenticate("password123", &hash, "user123", 300)
//!     .unwrap();
//!
//! let claims = authenticator.verify_token(&result.access_token).unwrap();
//! assert_eq!(claims.sub.as_deref(), Some("user123"));
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::SigningKeys;
pub use password::PasswordError;
pub use password::PasswordHasher;
