use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    models::user::User,
    services::token_service::{Token, TokenIssuer},
};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: i32,      // Subject (user id)
    email: String, // User email
    exp: i64,      // Expiration time
    iat: i64,      // Issued at
}

#[derive(Clone)]
pub struct JwtTokenIssuer {
    secret: String,
    expiration_hours: i64,
}

impl JwtTokenIssuer {
    pub fn new(secret: String) -> Self {
        Self {
            secret,
            expiration_hours: 1, // 1h
        }
    }

    pub fn with_expiration(secret: String, expiration_hours: i64) -> Self {
        Self {
            secret,
            expiration_hours,
        }
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn sign(&self, user: &User) -> Result<Token, DomainError> {
        let now = Utc::now();
        let exp = now + Duration::hours(self.expiration_hours);

        let claims = Claims {
            sub: user.id(),
            email: user.email().to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| DomainError::Signing(e.to_string()))
    }
}
