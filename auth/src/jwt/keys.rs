use std::fmt;

use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;

use super::errors::JwtError;

/// Key material for signing and verifying access tokens.
///
/// Loaded once before the server accepts traffic and never mutated afterwards.
/// The algorithm travels with the keys, so a verifier built from these keys
/// only accepts tokens signed with that same algorithm.
#[derive(Clone)]
pub struct SigningKeys {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl SigningKeys {
    /// Shared-secret keys (HMAC with SHA-256).
    ///
    /// # Arguments
    /// * `secret` - Secret used both to sign and to verify
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes)
    /// - Load it from configuration or the environment, never from code
    pub fn hs256(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Asymmetric keys (RSASSA-PKCS1-v1_5 with SHA-256).
    ///
    /// # Arguments
    /// * `private_key_pem` - PEM encoded RSA private key (PKCS#1 or PKCS#8)
    /// * `public_key_pem` - PEM encoded RSA public key
    ///
    /// # Errors
    /// * `InvalidKey` - One of the PEM documents could not be parsed
    pub fn rs256(private_key_pem: &[u8], public_key_pem: &[u8]) -> Result<Self, JwtError> {
        let encoding_key = EncodingKey::from_rsa_pem(private_key_pem)
            .map_err(|e| JwtError::InvalidKey(format!("private key: {}", e)))?;
        let decoding_key = DecodingKey::from_rsa_pem(public_key_pem)
            .map_err(|e| JwtError::InvalidKey(format!("public key: {}", e)))?;

        Ok(Self {
            encoding_key,
            decoding_key,
            algorithm: Algorithm::RS256,
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub(crate) fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    pub(crate) fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }
}

// Key bytes stay out of logs.
impl fmt::Debug for SigningKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKeys")
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}
