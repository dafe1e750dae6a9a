use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::errors::JwtError;
use super::keys::SigningKeys;

/// Signs claims into compact JWTs and verifies them again.
///
/// Verification here covers structure, algorithm and signature, plus the
/// presence of `sub` and `exp`. Expiry is judged by the caller against its own
/// clock (see [`crate::Authenticator::verify_token_at`]).
pub struct JwtHandler {
    keys: SigningKeys,
}

impl JwtHandler {
    /// Create a handler around the configured keys.
    pub fn new(keys: SigningKeys) -> Self {
        Self { keys }
    }

    /// Encode claims into a JWT token.
    ///
    /// # Arguments
    /// * `claims` - Claims to encode (must implement Serialize)
    ///
    /// # Returns
    /// JWT token string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        let header = Header::new(self.keys.algorithm());

        encode(&header, claims, self.keys.encoding_key())
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode a JWT token after checking its algorithm and signature.
    ///
    /// # Arguments
    /// * `token` - JWT token string to decode
    ///
    /// # Returns
    /// Decoded claims
    ///
    /// # Errors
    /// * `InvalidSignature` - Signed with a different key
    /// * `AlgorithmMismatch` - Header names another algorithm than the configured one
    /// * `MissingClaim` - `sub` or `exp` is absent
    /// * `DecodingFailed` - Token is malformed
    pub fn decode<T: DeserializeOwned>(&self, token: &str) -> Result<T, JwtError> {
        let mut validation = Validation::new(self.keys.algorithm());
        validation.set_required_spec_claims(&["exp", "sub"]);
        validation.validate_exp = false;
        validation.leeway = 0;

        let token_data =
            decode::<T>(token, self.keys.decoding_key(), &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                    ErrorKind::InvalidAlgorithm => JwtError::AlgorithmMismatch,
                    ErrorKind::MissingRequiredClaim(claim) => JwtError::MissingClaim(claim.clone()),
                    _ => JwtError::DecodingFailed(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}
