use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::database::models::Role;

/// Claims carried inside a session token.
///
/// Tokens are self-contained and stateless: there is no server-side session
/// store and no revocation list. A role change or password change does not
/// invalidate already-issued tokens until their natural expiry. That is a
/// deliberate simplicity tradeoff, not an oversight.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,  // subject (user id)
    pub role: String, // role at issuance time
    pub exp: i64,     // expiration time
    pub iat: i64,     // issued at
}

/// Why a token failed verification. Callers collapse both cases to an
/// unauthenticated response; the distinction exists for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token is malformed or its signature is invalid")]
    Malformed,
    #[error("token has expired")]
    Expired,
}

/// Issue a signed session token for a user.
///
/// `exp` is `now + ttl_hours`; the TTL is process-wide configuration
/// (24 hours by default).
pub fn issue(
    subject_id: &str,
    role: Role,
    secret: &str,
    ttl_hours: i64,
) -> Result<String, String> {
    let now = Utc::now();
    let exp = now + Duration::hours(ttl_hours);

    let claims = Claims {
        sub: subject_id.to_string(),
        role: role.as_str().to_string(),
        exp: exp.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| format!("Failed to encode JWT: {}", e))
}

/// Decode and validate a session token.
pub fn verify(token: &str, secret: &str) -> Result<Claims, TokenError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Malformed,
    })
}
