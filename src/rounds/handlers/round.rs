use crate::app_context::{AppContext, RequestContext};
use crate::auth::extractors::Session;
use crate::map::models::LngLat;
use crate::rounds::handlers::http::RoundsHttpHandler;
use crate::rounds::handlers::responses::{
    CurrentRoundResponse, GuessResponse, GuessingError, ScoreResponse, StartRoundResponse,
};
use crate::storage::rounds::HashMapRoundsStorage;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Json;

#[axum::debug_handler]
pub async fn start(
    session: Session,
    State(app_context): State<AppContext<HashMapRoundsStorage>>,
) -> Json<StartRoundResponse> {
    let request_context = RequestContext {
        session_id: session.session_id,
    };
    let response = RoundsHttpHandler::new(app_context, &request_context)
        .start()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn current(
    session: Session,
    State(app_context): State<AppContext<HashMapRoundsStorage>>,
) -> Json<CurrentRoundResponse> {
    let request_context = RequestContext {
        session_id: session.session_id,
    };
    let response = RoundsHttpHandler::new(app_context, &request_context)
        .current()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn guess(
    session: Session,
    State(app_context): State<AppContext<HashMapRoundsStorage>>,
    guess: Result<Json<LngLat>, JsonRejection>,
) -> Json<GuessResponse> {
    let Json(guess) = match guess {
        Ok(guess) => guess,
        Err(rejection) => {
            tracing::debug!(
                session_id = %session.session_id,
                %rejection,
                "Rejected a malformed guess body."
            );
            return Json(GuessResponse {
                error: true,
                error_code: Some(GuessingError::MalformedGuess),
            });
        }
    };
    let request_context = RequestContext {
        session_id: session.session_id,
    };
    let response = RoundsHttpHandler::new(app_context, &request_context)
        .guess(guess)
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn score(
    session: Session,
    State(app_context): State<AppContext<HashMapRoundsStorage>>,
) -> Json<ScoreResponse> {
    let request_context = RequestContext {
        session_id: session.session_id,
    };
    let response = RoundsHttpHandler::new(app_context, &request_context)
        .score()
        .await;
    Json(response)
}
