use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::http::header::AUTHORIZATION;
use actix_web::web::Data;
use actix_web::{FromRequest, HttpRequest};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::Error;

pub mod endpoints;
pub use endpoints::*;

/// How long an issued bearer token stays valid.
const TOKEN_TTL_HOURS: i64 = 24;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// HS256 signing material derived from the configured secret. The
/// token is structural proof only; there is no user store behind it.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    pub fn from_secret(secret: &[u8]) -> TokenKeys {
        TokenKeys {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    pub fn sign(&self, username: &str) -> Result<String, Error> {
        let now = Utc::now();
        let claims = Claims {
            sub: username.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding).map_err(Error::FailedToSignToken)
    }

    pub fn verify(&self, token: &str) -> Result<Claims, Error> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())
            .map_err(Error::InvalidAuthToken)?;

        Ok(data.claims)
    }
}

/// Extractor guarding protected endpoints. Pulls the bearer token from
/// the Authorization header and verifies signature and expiry.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub username: String,
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<AuthenticatedUser, Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, Error> {
    let keys = req
        .app_data::<Data<TokenKeys>>()
        .ok_or_else(|| Error::ExistentialState("token keys are not configured".to_string()))?;

    let header = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or(Error::MissingAuthToken)?;
    let token = header
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(Error::MissingAuthToken)?;

    let claims = keys.verify(token)?;

    Ok(AuthenticatedUser {
        username: claims.sub,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_and_verify_roundtrip() {
        let keys = TokenKeys::from_secret(b"test-secret");

        let token = keys.sign("wyatt").unwrap();
        let claims = keys.verify(&token).unwrap();

        assert_eq!(claims.sub, "wyatt");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn verify_rejects_token_signed_with_other_secret() {
        let keys = TokenKeys::from_secret(b"test-secret");
        let other = TokenKeys::from_secret(b"other-secret");

        let token = other.sign("wyatt").unwrap();

        assert!(matches!(
            keys.verify(&token),
            Err(Error::InvalidAuthToken(_))
        ));
    }

    #[test]
    fn verify_rejects_garbage() {
        let keys = TokenKeys::from_secret(b"test-secret");

        assert!(matches!(
            keys.verify("not-a-token"),
            Err(Error::InvalidAuthToken(_))
        ));
    }
}
