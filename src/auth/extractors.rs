use crate::auth::passcode;
use crate::auth::responses::{PasscodeExtractionError, PasscodeExtractionReason};
use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::Json;

/// Identity carried by the `Passcode` header.
pub struct Session {
    pub session_id: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<PasscodeExtractionError>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(passcode) = parts.headers.get("Passcode") else {
            return Err(rejection(PasscodeExtractionReason::NoPasscodeHeaderProvided));
        };
        let decoded = passcode
            .to_str()
            .ok()
            .and_then(|value| passcode::decode(value).ok());
        match decoded {
            Some(jwt_payload) => Ok(Session {
                session_id: jwt_payload.session_id,
            }),
            None => Err(rejection(PasscodeExtractionReason::InvalidPasscode)),
        }
    }
}

fn rejection(reason: PasscodeExtractionReason) -> (StatusCode, Json<PasscodeExtractionError>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(PasscodeExtractionError {
            error: true,
            reason,
        }),
    )
}
