//! Session token issuance and verification.
//!
//! Tokens are HS256 JWTs carrying the user-identifying claims plus `iat`
//! and `exp`. The service is pure computation over the configured signing
//! secret; it stores nothing.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use sharebite_core::Email;

use crate::models::SessionUser;

/// Errors that can occur when issuing or verifying a session token.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The token's expiry has passed.
    #[error("token expired")]
    Expired,

    /// The signature does not verify against the configured secret.
    #[error("invalid token signature")]
    InvalidSignature,

    /// The token is not a decodable JWT or its claims are invalid.
    #[error("malformed token: {0}")]
    Malformed(String),

    /// Signing failed.
    #[error("token issuance failed: {0}")]
    Issuance(String),
}

/// JWT claims for a session.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Subject: the user's email.
    sub: Email,
    /// Display name carried alongside the subject.
    #[serde(default)]
    name: String,
    /// Issued-at, seconds since epoch.
    iat: i64,
    /// Expiry, seconds since epoch.
    exp: i64,
}

/// Issues and verifies signed session tokens.
///
/// Constructed once at startup from the validated signing secret and shared
/// through [`crate::state::AppState`].
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Create a token service from the signing secret.
    #[must_use]
    pub fn new(secret: &SecretString) -> Self {
        let bytes = secret.expose_secret().as_bytes();

        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is exact: a token is rejected the second its ttl elapses.
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(bytes),
            decoding_key: DecodingKey::from_secret(bytes),
            validation,
        }
    }

    /// Issue a signed token for `user`, valid for `ttl`.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Issuance` if signing fails.
    pub fn issue(&self, user: &SessionUser, ttl: Duration) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.email.clone(),
            name: user.name.clone(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Issuance(e.to_string()))
    }

    /// Verify a token and return the identity it encodes.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Expired` past the token's expiry,
    /// `TokenError::InvalidSignature` when the signature does not check out,
    /// and `TokenError::Malformed` for anything that is not a valid JWT.
    pub fn verify(&self, token: &str) -> Result<SessionUser, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed(e.to_string()),
            }
        })?;

        Ok(SessionUser {
            email: data.claims.sub,
            name: data.claims.name,
        })
    }
}
