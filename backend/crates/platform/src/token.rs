//! Signed Bearer Tokens
//!
//! Compact stateless credentials: a base64url JSON payload carrying the
//! user identity plus an HMAC-SHA256 signature over the payload, joined
//! with a dot. Tokens expire after a fixed TTL (1 hour by default).
//!
//! Signature verification is constant-time (via `hmac::Mac::verify_slice`).

use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;
use uuid::Uuid;

/// Default token lifetime
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(3600);

/// Token errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Malformed token, bad signature, or undecodable claims
    #[error("Invalid token")]
    Invalid,

    /// Signature is valid but the token has expired
    #[error("Token expired")]
    Expired,

    /// Signing failed while issuing a token
    #[error("Token signing failed: {0}")]
    Signing(String),
}

/// Claims carried by a token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject: the user's internal UUID
    pub sub: Uuid,
    /// The user's email at issue time
    pub email: String,
    /// Expiry as unix seconds
    pub exp: i64,
}

/// Issues and verifies signed bearer tokens
///
/// Holds the process-wide signing secret; read-only after startup.
#[derive(Clone)]
pub struct TokenService {
    secret: [u8; 32],
    ttl: Duration,
}

impl TokenService {
    /// Create a service with the given secret and the default 1-hour TTL
    pub fn new(secret: [u8; 32]) -> Self {
        Self {
            secret,
            ttl: DEFAULT_TOKEN_TTL,
        }
    }

    /// Override the token TTL
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Create a service with a random secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rngs::OsRng.fill_bytes(&mut secret);
        Self::new(secret)
    }

    /// Token TTL in seconds
    pub fn ttl_secs(&self) -> u64 {
        self.ttl.as_secs()
    }

    /// Issue a signed token for the given identity
    pub fn issue(&self, user_id: Uuid, email: &str) -> Result<String, TokenError> {
        let claims = TokenClaims {
            sub: user_id,
            email: email.to_string(),
            exp: Utc::now().timestamp() + self.ttl.as_secs() as i64,
        };

        let payload = serde_json::to_vec(&claims).map_err(|e| TokenError::Signing(e.to_string()))?;
        let payload_b64 = URL_SAFE_NO_PAD.encode(&payload);

        let signature = self.sign(payload_b64.as_bytes());

        Ok(format!(
            "{}.{}",
            payload_b64,
            URL_SAFE_NO_PAD.encode(signature)
        ))
    }

    /// Verify a token's signature and expiry, returning its claims
    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let (payload_b64, signature_b64) = token.split_once('.').ok_or(TokenError::Invalid)?;

        let signature = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| TokenError::Invalid)?;

        let mut mac = Hmac::<Sha256>::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(payload_b64.as_bytes());
        mac.verify_slice(&signature).map_err(|_| TokenError::Invalid)?;

        let payload = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|_| TokenError::Invalid)?;
        let claims: TokenClaims =
            serde_json::from_slice(&payload).map_err(|_| TokenError::Invalid)?;

        if claims.exp < Utc::now().timestamp() {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    fn sign(&self, data: &[u8]) -> [u8; 32] {
        let mut mac = Hmac::<Sha256>::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(data);
        mac.finalize().into_bytes().into()
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("secret", &"[REDACTED]")
            .field("ttl", &self.ttl)
            .finish()
    }
}
