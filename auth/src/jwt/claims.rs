use serde::Deserialize;
use serde::Serialize;

/// Access token claims.
///
/// Carries the authenticated subject and the validity window as Unix
/// timestamps. Fields are optional so that foreign or truncated tokens still
/// deserialize and can be rejected with a precise error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration time (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Issued at (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl Claims {
    /// Create new empty claims.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create claims for an authenticated subject.
    ///
    /// # Arguments
    /// * `subject` - Identifier of the authenticated user
    /// * `issued_at` - Issue time (Unix timestamp)
    /// * `lifetime_seconds` - Seconds until the token expires
    ///
    /// # Returns
    /// Claims with `sub`, `iat` and `exp = iat + lifetime_seconds`
    pub fn for_subject(subject: impl ToString, issued_at: i64, lifetime_seconds: i64) -> Self {
        Self {
            sub: Some(subject.to_string()),
            exp: Some(issued_at.saturating_add(lifetime_seconds)),
            iat: Some(issued_at),
        }
    }

    /// Set subject.
    pub fn with_subject(mut self, sub: impl ToString) -> Self {
        self.sub = Some(sub.to_string());
        self
    }

    /// Set expiration (Unix timestamp).
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }

    /// Set issued at (Unix timestamp).
    pub fn with_issued_at(mut self, iat: i64) -> Self {
        self.iat = Some(iat);
        self
    }

    /// Check if token is expired.
    ///
    /// A token stays valid up to and including its `exp` second.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp.map_or(false, |exp| exp < current_timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims() {
        let claims = Claims::new().with_subject("user123");
        assert_eq!(claims.sub, Some("user123".to_string()));
        assert!(claims.exp.is_none());
        assert!(claims.iat.is_none());
    }

    #[test]
    fn test_for_subject() {
        let claims = Claims::for_subject("user123", 1_700_000_000, 300);

        assert_eq!(claims.sub, Some("user123".to_string()));
        assert_eq!(claims.iat, Some(1_700_000_000));
        assert_eq!(claims.exp, Some(1_700_000_300));
    }

    #[test]
    fn test_builder_pattern() {
        let claims = Claims::new()
            .with_subject("user123")
            .with_expiration(1234567890)
            .with_issued_at(1234567800);

        assert_eq!(claims.sub, Some("user123".to_string()));
        assert_eq!(claims.exp, Some(1234567890));
        assert_eq!(claims.iat, Some(1234567800));
    }

    #[test]
    fn test_is_expired() {
        let claims = Claims::new().with_expiration(1000);

        assert!(!claims.is_expired(999));
        assert!(!claims.is_expired(1000)); // Exactly at expiration
        assert!(claims.is_expired(1001));
    }

    #[test]
    fn test_serialization_skips_missing_claims() {
        let claims = Claims::new().with_subject("user123");
        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json, serde_json::json!({ "sub": "user123" }));
    }
}
