//! JWT-backed session tokens.
//!
//! The web layer stores the token in an HTTP-only cookie; the
//! signature is what makes the cookie tamper-proof.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use quill_core::domain::User;
use quill_core::ports::{AuthError, SessionClaims, SessionService};

/// Session token configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub secret: String,
    pub lifetime_hours: i64,
    pub issuer: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: "change-me-in-production".to_string(),
            lifetime_hours: 24,
            issuer: "quill".to_string(),
        }
    }
}

/// Internal claims structure for serialization.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: i32, // user id
    name: String,
    email: String,
    admin: bool,
    exp: i64, // expiration timestamp
    iat: i64, // issued at
    iss: String,
}

/// JWT-based session service.
pub struct JwtSessionService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    config: SessionConfig,
}

impl JwtSessionService {
    pub fn new(config: SessionConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            encoding_key,
            decoding_key,
            config,
        }
    }

    pub fn from_env() -> Self {
        let secret = std::env::var("SESSION_SECRET")
            .unwrap_or_else(|_| "change-me-in-production".to_string());

        if secret == "change-me-in-production" {
            tracing::warn!("Using default session secret. Set SESSION_SECRET for production use.");
        }

        let config = SessionConfig {
            secret,
            lifetime_hours: std::env::var("SESSION_LIFETIME_HOURS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(24),
            issuer: std::env::var("SESSION_ISSUER").unwrap_or_else(|_| "quill".to_string()),
        };
        Self::new(config)
    }
}

impl SessionService for JwtSessionService {
    fn issue(&self, user: &User) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = now + TimeDelta::hours(self.config.lifetime_hours);

        let claims = Claims {
            sub: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            admin: user.is_admin,
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }

    fn validate(&self, token: &str) -> Result<SessionClaims, AuthError> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.config.issuer]);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::SessionExpired,
                _ => AuthError::InvalidToken(e.to_string()),
            })?;

        Ok(SessionClaims {
            user_id: token_data.claims.sub,
            name: token_data.claims.name,
            email: token_data.claims.email,
            is_admin: token_data.claims.admin,
            exp: token_data.claims.exp,
        })
    }

    fn expiration_seconds(&self) -> i64 {
        self.config.lifetime_hours * 3600
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SessionConfig {
        SessionConfig {
            secret: "test-secret-key".to_string(),
            lifetime_hours: 1,
            issuer: "test-issuer".to_string(),
        }
    }

    fn test_user(is_admin: bool) -> User {
        User {
            id: 7,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "$argon2id$irrelevant".to_string(),
            is_admin,
        }
    }

    #[test]
    fn issue_then_validate_round_trips_claims() {
        let service = JwtSessionService::new(test_config());

        let token = service.issue(&test_user(true)).unwrap();
        let claims = service.validate(&token).unwrap();

        assert_eq!(claims.user_id, 7);
        assert_eq!(claims.name, "Ada");
        assert_eq!(claims.email, "ada@example.com");
        assert!(claims.is_admin);
    }

    #[test]
    fn admin_flag_is_preserved_when_false() {
        let service = JwtSessionService::new(test_config());

        let token = service.issue(&test_user(false)).unwrap();
        assert!(!service.validate(&token).unwrap().is_admin);
    }

    #[test]
    fn tampered_token_is_rejected() {
        let service = JwtSessionService::new(test_config());

        let mut token = service.issue(&test_user(false)).unwrap();
        token.pop();
        token.push('x');

        assert!(matches!(
            service.validate(&token),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn token_from_other_issuer_is_rejected() {
        let issuing = JwtSessionService::new(SessionConfig {
            secret: "same-secret".to_string(),
            lifetime_hours: 1,
            issuer: "other-app".to_string(),
        });
        let validating = JwtSessionService::new(SessionConfig {
            secret: "same-secret".to_string(),
            lifetime_hours: 1,
            issuer: "quill".to_string(),
        });

        let token = issuing.issue(&test_user(false)).unwrap();
        assert!(validating.validate(&token).is_err());
    }

    #[test]
    fn expiration_seconds_follows_config() {
        let service = JwtSessionService::new(SessionConfig {
            secret: "s".to_string(),
            lifetime_hours: 24,
            issuer: "quill".to_string(),
        });

        assert_eq!(service.expiration_seconds(), 86400);
    }
}
