/**
 * Token Service
 *
 * This module issues and validates the JWTs that authenticate API calls.
 * Two kinds of token exist, both bound to a username subject:
 *
 * - **access** tokens authorize API calls and expire after a short interval
 * - **refresh** tokens are only accepted by `GET /auth/refresh` to mint a new
 *   access token and expire after a longer interval
 *
 * The kind is carried in the `type` claim; validating an access token as a
 * refresh token (or the reverse) fails.
 */

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::config::{AppConfig, ConfigError};

/// Kind of token, stored in the `type` claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Access => f.write_str("access"),
            Self::Refresh => f.write_str("refresh"),
        }
    }
}

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Username
    pub sub: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Not valid before (Unix timestamp)
    pub nbf: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Unique token id
    pub jti: String,
    #[serde(rename = "type")]
    pub kind: TokenKind,
}

/// Token issuing and validation failures
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("failed to sign token: {0}")]
    Encoding(jsonwebtoken::errors::Error),

    #[error("token rejected: {0}")]
    Invalid(jsonwebtoken::errors::Error),

    #[error("expected {expected} token, found {found} token")]
    WrongType { expected: TokenKind, found: TokenKind },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Signs and verifies access and refresh tokens with a shared secret
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("algorithm", &self.algorithm)
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    /// Create a token service from raw parameters
    ///
    /// # Arguments
    /// * `secret` - HMAC secret shared by issuer and verifier
    /// * `algorithm` - HMAC algorithm
    /// * `access_ttl` - Lifetime of access tokens
    /// * `refresh_ttl` - Lifetime of refresh tokens
    pub fn new(secret: &[u8], algorithm: Algorithm, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm,
            access_ttl,
            refresh_ttl,
        }
    }

    /// Create a token service from the application configuration
    pub fn from_config(config: &AppConfig) -> Result<Self, TokenError> {
        let algorithm = Algorithm::from_str(&config.jwt_algorithm)
            .map_err(|_| ConfigError::UnsupportedAlgorithm(config.jwt_algorithm.clone()))?;

        Ok(Self::new(
            config.jwt_secret.as_bytes(),
            algorithm,
            Duration::seconds(config.access_token_ttl_secs),
            Duration::seconds(config.refresh_token_ttl_secs),
        ))
    }

    /// Issue an access token for `subject`
    pub fn issue_access(&self, subject: &str) -> Result<String, TokenError> {
        self.issue(subject, TokenKind::Access)
    }

    /// Issue a refresh token for `subject`
    pub fn issue_refresh(&self, subject: &str) -> Result<String, TokenError> {
        self.issue(subject, TokenKind::Refresh)
    }

    /// Validate an access token and return its subject
    pub fn validate_access(&self, token: &str) -> Result<String, TokenError> {
        self.claims(token, TokenKind::Access).map(|claims| claims.sub)
    }

    /// Validate a refresh token and return its subject
    pub fn validate_refresh(&self, token: &str) -> Result<String, TokenError> {
        self.claims(token, TokenKind::Refresh).map(|claims| claims.sub)
    }

    /// Decode and verify a token, requiring the given kind
    pub fn claims(&self, token: &str, expected: TokenKind) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;
        validation.validate_nbf = true;
        validation.set_required_spec_claims(&["exp", "nbf", "sub"]);

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(TokenError::Invalid)?
            .claims;

        if claims.kind != expected {
            return Err(TokenError::WrongType {
                expected,
                found: claims.kind,
            });
        }

        Ok(claims)
    }

    fn issue(&self, subject: &str, kind: TokenKind) -> Result<String, TokenError> {
        let now = Utc::now();
        let ttl = match kind {
            TokenKind::Access => self.access_ttl,
            TokenKind::Refresh => self.refresh_ttl,
        };

        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            exp: (now + ttl).timestamp(),
            jti: uuid::Uuid::new_v4().to_string(),
            kind,
        };

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key).map_err(TokenError::Encoding)
    }
}
