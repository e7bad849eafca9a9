use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::models::{Role, UserInfo};

// Payload embedded in a session credential.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

// Issues and verifies signed session credentials (HS256). Validity is
// determined solely by signature and expiry; there is no server-side
// session table.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_seconds: i64,
}

impl TokenService {
    pub fn new(secret: &str, ttl_days: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_seconds: ttl_days * 24 * 60 * 60,
        }
    }

    // Issue a credential for an already-authenticated user.
    pub fn issue(&self, user: &UserInfo) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user.username.clone(),
            role: user.role,
            iat: now,
            exp: now + self.ttl_seconds,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
    }

    // Any failure (bad signature, malformed token, expired) degrades to
    // an anonymous caller; the reason is logged but never surfaced.
    pub fn verify(&self, token: &str) -> Option<UserInfo> {
        match decode::<Claims>(token, &self.decoding_key, &Validation::default()) {
            Ok(data) => Some(UserInfo {
                username: data.claims.sub,
                role: data.claims.role,
            }),
            Err(err) => {
                tracing::debug!("Rejected credential: {}", err);
                None
            }
        }
    }
}
