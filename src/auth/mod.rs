use crate::cli::Args;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::OnceLock;
use thiserror::Error;

pub mod extractors;
pub mod handlers;
pub mod passcode;
pub mod responses;

static JWT_SIGNING_KEY: OnceLock<Hmac<Sha256>> = OnceLock::new();

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid JWT signing key")]
    InvalidKey,
    #[error("the JWT signing key was not initialized")]
    KeyNotInitialized,
    #[error("passcode error: {0}")]
    Jwt(#[from] jwt::Error),
}

pub fn init(args: &Args) -> Result<(), AuthError> {
    let key = Hmac::new_from_slice(args.jwt_signing_key.as_bytes())
        .map_err(|_invalid_length| AuthError::InvalidKey)?;
    // A repeated init keeps the first key.
    let _ = JWT_SIGNING_KEY.set(key);
    Ok(())
}
