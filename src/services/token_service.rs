//! Access token service - Signs and verifies bearer tokens.
//!
//! Tokens are signed with `SECRET_KEY` using the configured HMAC `ALGORITHM`
//! and expire after `ACCESS_TOKEN_EXPIRE_MINUTES`.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::{SecurityConfig, TOKEN_TYPE_BEARER};
use crate::errors::{AppError, AppResult};

/// JWT claims payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

/// Issued access token
#[derive(Debug, Serialize, Deserialize)]
pub struct AccessToken {
    /// JWT access token
    pub access_token: String,
    /// Token type (always "Bearer")
    pub token_type: String,
    /// Token lifetime in seconds
    pub expires_in: i64,
}

/// Issues and verifies access tokens for one signing configuration.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    expire_minutes: i64,
}

impl TokenService {
    pub fn from_settings(config: &SecurityConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret_bytes()),
            algorithm: config.algorithm,
            expire_minutes: config.access_token_expire_minutes,
        }
    }

    /// Sign a token for `subject`.
    pub fn issue(&self, subject: &str) -> AppResult<AccessToken> {
        let subject = subject.trim();
        if subject.is_empty() {
            return Err(AppError::validation("Token subject must not be empty"));
        }

        let now = Utc::now();
        let ttl = chrono::Duration::try_minutes(self.expire_minutes)
            .filter(|ttl| *ttl > chrono::Duration::zero())
            .ok_or_else(|| AppError::internal("Access token lifetime out of range"))?;
        let expires_at = now
            .checked_add_signed(ttl)
            .ok_or_else(|| AppError::internal("Access token lifetime out of range"))?;

        let claims = Claims {
            sub: subject.to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(&Header::new(self.algorithm), &claims, &self.encoding_key)?;

        tracing::debug!(sub = %claims.sub, exp = claims.exp, "Issued access token");

        Ok(AccessToken {
            access_token: token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: ttl.num_seconds(),
        })
    }

    /// Verify signature, algorithm and expiry, then return the claims.
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &Validation::new(self.algorithm))?;
        Ok(token_data.claims)
    }
}
