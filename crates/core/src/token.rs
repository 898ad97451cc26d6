//! Bearer token claims and time-to-live arithmetic
//!
//! Tokens are JWTs issued by the identity provider. The client never checks
//! the signature; it only reads the `exp` claim to decide whether a token is
//! worth sending to the provider for validation.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

/// Claims carried in the payload segment of a token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    #[serde(default)]
    pub sub: Option<String>,
    /// Expiration time in seconds since the epoch; may be fractional
    #[serde(default)]
    pub exp: Option<f64>,
    /// Issued at, in seconds since the epoch
    #[serde(default)]
    pub iat: Option<f64>,
    /// Issuer
    #[serde(default)]
    pub iss: Option<String>,
}

impl Claims {
    /// Expiry as a timestamp, if the claim is present and in range
    #[allow(clippy::cast_possible_truncation)]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp
            .filter(|exp| exp.is_finite())
            .and_then(|exp| DateTime::from_timestamp(exp.trunc() as i64, 0))
    }
}

/// Decode the payload segment of a token without verifying it
pub fn decode_claims(token: &str) -> CoreResult<Claims> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next()) {
        (Some(_header), Some(payload), Some(_signature)) if !payload.is_empty() => payload,
        _ => return Err(CoreError::serialization_error("token is not a JWT")),
    };

    // Some issuers pad the segment even though the encoding forbids it
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| CoreError::serialization_error(format!("invalid token payload: {e}")))?;

    Ok(serde_json::from_slice(&bytes)?)
}

/// Remaining validity of `token` at `now`, clamped to zero.
///
/// Missing tokens, tokens that fail to decode and tokens without an `exp`
/// claim all have a TTL of zero.
pub fn token_ttl(token: Option<&str>, now: DateTime<Utc>) -> Duration {
    let Some(token) = token.filter(|t| !t.is_empty()) else {
        return Duration::zero();
    };

    let Some(expires_at) = decode_claims(token).ok().and_then(|c| c.expires_at()) else {
        return Duration::zero();
    };

    (expires_at - now).max(Duration::zero())
}
