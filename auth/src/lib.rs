#[macro_use]
extern crate log;

use std::env;

use actix_identity::{CookieIdentityPolicy, Identity, IdentityService};
use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use errors::Error;

const SESSION_NAME: &str = "auth";
const SESSION_HOURS: i64 = 3;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PrivateClaim {
    pub id: i32,
    pub username: String,
    exp: i64,
}

impl PrivateClaim {
    pub fn new(id: i32, username: String) -> Self {
        PrivateClaim {
            id,
            username,
            exp: (Utc::now() + Duration::hours(SESSION_HOURS)).timestamp(),
        }
    }

    pub fn set_exp(&mut self, exp: i64) {
        self.exp = exp;
    }
}

fn jwt_key() -> Result<String, Error> {
    env::var("JWT_KEY").map_err(|_| Error::MissingConfig("JWT_KEY must be set".into()))
}

/// Fails when sessions could not be signed, so the server can refuse to start.
pub fn check_jwt_key() -> Result<(), Error> {
    jwt_key().map(|_| ())
}

pub fn create_jwt(private_claim: PrivateClaim) -> Result<String, Error> {
    let jwt_key = jwt_key()?;
    let encoding_key = EncodingKey::from_secret(jwt_key.as_bytes());
    encode(&Header::default(), &private_claim, &encoding_key)
        .map_err(|e| Error::CannotEncodeJwtToken(e.to_string()))
}

pub fn decode_jwt(token: &str) -> Result<PrivateClaim, Error> {
    let jwt_key = jwt_key()?;
    let decoding_key = DecodingKey::from_secret(jwt_key.as_bytes());
    decode::<PrivateClaim>(token, &decoding_key, &Validation::default())
        .map(|data| data.claims)
        .map_err(|e| Error::CannotDecodeJwtToken(e.to_string()))
}

/// Cookie backed identity. The cookie value is the session JWT, signed with `session_key`
/// which must be at least 64 bytes long.
pub fn get_identity_service(session_key: &[u8]) -> IdentityService<CookieIdentityPolicy> {
    IdentityService::new(
        CookieIdentityPolicy::new(session_key)
            .name(SESSION_NAME)
            .path("/")
            .max_age_secs(SESSION_HOURS * 60 * 60)
            // allow to transmit over http
            .secure(false),
    )
}

pub fn get_claim_from_identity(id: &Identity) -> Result<PrivateClaim, Error> {
    if let Some(token) = id.identity() {
        return decode_jwt(&token).map_err(|err| {
            debug!("Discarding session token - {}", err);
            Error::Unauthorized
        });
    }
    Err(Error::Unauthorized)
}

pub fn start_session(id: &Identity, user_id: i32, username: String) -> Result<PrivateClaim, Error> {
    let claim = PrivateClaim::new(user_id, username);
    let token = create_jwt(claim.clone())?;
    id.remember(token);
    Ok(claim)
}

pub fn end_session(id: &Identity) {
    id.forget();
}

pub fn hash_password(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut rand::thread_rng());
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| Error::CannotHashPassword(e.to_string()))
}

pub fn verify_password(password: &str, password_hash: &str) -> bool {
    match PasswordHash::new(password_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(err) => {
            warn!("Stored password hash is unreadable - {}", err);
            false
        }
    }
}
