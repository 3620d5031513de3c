use crate::auth::extractors::Session;
use crate::auth::passcode::{self, JwtPayload};
use crate::auth::responses::{CreateSessionResponse, DecodePasscodeResponse, SessionCreationError};
use axum::http::StatusCode;
use axum::response::Json;
use uuid::Uuid;

#[axum::debug_handler]
pub async fn create_session(
) -> Result<Json<CreateSessionResponse>, (StatusCode, Json<SessionCreationError>)> {
    let session_id = Uuid::new_v4().to_string();
    let payload = JwtPayload {
        session_id: session_id.clone(),
    };
    match passcode::encode(&payload) {
        Ok(passcode) => {
            tracing::info!(task = "session_created", session_id = %session_id);
            Ok(Json(CreateSessionResponse {
                error: false,
                session_id,
                passcode,
            }))
        }
        Err(error) => {
            tracing::error!(%error, "Failed to sign a session passcode.");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SessionCreationError { error: true }),
            ))
        }
    }
}

#[axum::debug_handler]
pub async fn decode_passcode(session: Session) -> Json<DecodePasscodeResponse> {
    Json(DecodePasscodeResponse {
        error: false,
        session_id: session.session_id,
    })
}
