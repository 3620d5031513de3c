use crate::auth::{AuthError, JWT_SIGNING_KEY};
use jwt::{SignWithKey, VerifyWithKey};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct JwtPayload {
    pub session_id: String,
}

pub fn encode(payload: &JwtPayload) -> Result<String, AuthError> {
    let key = JWT_SIGNING_KEY.get().ok_or(AuthError::KeyNotInitialized)?;
    let passcode: String = payload.sign_with_key(key)?;
    Ok(passcode)
}

pub fn decode(passcode: &str) -> Result<JwtPayload, AuthError> {
    let key = JWT_SIGNING_KEY.get().ok_or(AuthError::KeyNotInitialized)?;
    let payload: JwtPayload = passcode.verify_with_key(key)?;
    Ok(payload)
}
