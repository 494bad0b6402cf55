use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::models::UserId;

/// Default token lifetime: 6 hours
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 6 * 60 * 60;

const ALGORITHM: Algorithm = Algorithm::HS256;

/// Errors that can occur when issuing or verifying tokens
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("JWT error: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),

    #[error("Invalid subject claim: {0}")]
    InvalidSubject(String),
}

/// JWT claims carried by an access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
}

/// Issues and verifies stateless, signed access tokens
///
/// Tokens are never stored; a token stays valid until its `exp` passes.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        let mut validation = Validation::new(ALGORITHM);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    pub fn with_default_ttl(secret: &str) -> Self {
        Self::new(secret, Duration::seconds(DEFAULT_TOKEN_TTL_SECS))
    }

    /// Issue a token for `user_id`, expiring `ttl` from now
    pub fn issue(&self, user_id: UserId) -> Result<String, TokenError> {
        self.issue_at(user_id, Utc::now())
    }

    fn issue_at(&self, user_id: UserId, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = Claims {
            sub: user_id.to_string(),
            exp: (now + self.ttl).timestamp(),
        };

        Ok(encode(&Header::new(ALGORITHM), &claims, &self.encoding_key)?)
    }

    /// Verify signature, algorithm and expiry, returning the subject
    pub fn verify(&self, token: &str) -> Result<UserId, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;

        data.claims
            .sub
            .parse::<UserId>()
            .map_err(|_| TokenError::InvalidSubject(data.claims.sub.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_verify() {
        let tokens = TokenService::with_default_ttl("test-secret");

        let token = tokens.issue(42).unwrap();
        assert_eq!(tokens.verify(&token).unwrap(), 42);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = TokenService::with_default_ttl("secret-a");
        let verifier = TokenService::with_default_ttl("secret-b");

        let token = issuer.issue(1).unwrap();
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let tokens = TokenService::with_default_ttl("test-secret");

        let token = tokens.issue_at(7, Utc::now() - Duration::hours(7)).unwrap();
        assert!(matches!(tokens.verify(&token), Err(TokenError::JwtError(_))));
    }

    #[test]
    fn test_algorithm_mismatch_rejected() {
        let tokens = TokenService::with_default_ttl("test-secret");
        let claims = Claims {
            sub: "3".to_string(),
            exp: (Utc::now() + Duration::hours(1)).timestamp(),
        };
        let token = encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(tokens.verify(&token).is_err());
    }

    #[test]
    fn test_non_numeric_subject_rejected() {
        let tokens = TokenService::with_default_ttl("test-secret");
        let claims = Claims {
            sub: "alice".to_string(),
            exp: (Utc::now() + Duration::hours(1)).timestamp(),
        };
        let token = encode(
            &Header::new(ALGORITHM),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(matches!(tokens.verify(&token), Err(TokenError::InvalidSubject(_))));
    }

    #[test]
    fn test_garbage_rejected() {
        let tokens = TokenService::with_default_ttl("test-secret");
        assert!(tokens.verify("not-a-token").is_err());
    }
}
