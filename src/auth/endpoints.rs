use actix_web::post;
use actix_web::web::{Data, Json};
use serde::{Deserialize, Serialize};

use crate::error::Error;

use super::TokenKeys;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LoginBody {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TokenBody {
    pub token: String,
    pub user: UserBody,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UserBody {
    pub username: String,
}

// No credential store exists; any non-empty pair is accepted and the
// username becomes the token's claimed identity.
#[post("/api/auth/login")]
#[tracing::instrument(skip(keys, body))]
async fn login(keys: Data<TokenKeys>, body: Json<LoginBody>) -> Result<Json<TokenBody>, Error> {
    let body = body.into_inner();

    if body.username.is_empty() || body.password.is_empty() {
        return Err(Error::InvalidCredentials);
    }

    let token = keys.sign(&body.username)?;

    Ok(Json(TokenBody {
        token,
        user: UserBody {
            username: body.username,
        },
    }))
}
