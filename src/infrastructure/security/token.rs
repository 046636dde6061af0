//! Signed bearer tokens issued at sign-in.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::AuthUser;

const ISSUER: &str = "opencdms-gateway";

/// Identity claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Username
    pub sub: String,
    /// Account id
    pub uid: i64,
    pub iat: i64,
    pub exp: i64,
    pub iss: String,
}

/// A freshly signed access token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    /// Lifetime in seconds.
    pub expires_in: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    Expired,
    #[error("Invalid token: {0}")]
    Invalid(String),
    #[error("Failed to sign token: {0}")]
    Signing(String),
}

/// Issues and verifies HS256 access tokens.
///
/// Tokens are stateless: there is no server-side revocation, a token stays
/// valid until `exp`.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    /// Creates a token service.
    ///
    /// # Arguments
    ///
    /// - `secret` - HMAC signing key shared by every gateway instance
    /// - `ttl_minutes` - access token lifetime
    pub fn new(secret: &str, ttl_minutes: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::minutes(ttl_minutes),
        }
    }

    /// Signs a token for `user`.
    pub fn issue(&self, user: &AuthUser) -> Result<IssuedToken, TokenError> {
        let now = Utc::now();
        let exp = now + self.ttl;

        let claims = Claims {
            sub: user.username.clone(),
            uid: user.id,
            iat: now.timestamp(),
            exp: exp.timestamp(),
            iss: ISSUER.to_string(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))?;

        Ok(IssuedToken {
            token,
            expires_in: self.ttl.num_seconds(),
        })
    }

    /// Checks signature, issuer and expiry and returns the claims.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[ISSUER]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> AuthUser {
        AuthUser {
            id: 7,
            username: "testuser".to_string(),
            password_hash: String::new(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: "test@example.org".to_string(),
            is_active: true,
            date_joined: Utc::now(),
            last_login: None,
        }
    }

    #[test]
    fn test_issue_and_verify() {
        let service = TokenService::new("secret", 30);

        let issued = service.issue(&user()).unwrap();
        assert_eq!(issued.expires_in, 30 * 60);

        let claims = service.verify(&issued.token).unwrap();
        assert_eq!(claims.sub, "testuser");
        assert_eq!(claims.uid, 7);
        assert_eq!(claims.iss, ISSUER);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = TokenService::new("secret", -10);

        let issued = service.issue(&user()).unwrap();

        assert!(matches!(
            service.verify(&issued.token),
            Err(TokenError::Expired)
        ));
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let issued = TokenService::new("secret-a", 30).issue(&user()).unwrap();

        assert!(matches!(
            TokenService::new("secret-b", 30).verify(&issued.token),
            Err(TokenError::Invalid(_))
        ));
    }

    #[test]
    fn test_garbage_is_rejected() {
        let service = TokenService::new("secret", 30);

        assert!(service.verify("not-a-jwt").is_err());
        assert!(service.verify("").is_err());
    }
}
