use crate::app_context::{AppContext, RequestContext};
use crate::map::models::LngLat;
use crate::rounds::errors::{GuessError, ScoreError};
use crate::rounds::handlers::responses::{
    CurrentRoundError, CurrentRoundResponse, GuessResponse, GuessingError, ScoreResponse,
    ScoringError, StartRoundResponse,
};
use crate::storage::interface::IRoundStorage;

pub struct RoundsHttpHandler<'a, RS: IRoundStorage> {
    app_context: AppContext<RS>,
    request_context: &'a RequestContext,
}

impl<'a, RS> RoundsHttpHandler<'a, RS>
where
    RS: IRoundStorage,
{
    pub fn new(app_context: AppContext<RS>, request_context: &'a RequestContext) -> Self {
        Self {
            app_context,
            request_context,
        }
    }

    pub async fn start(&self) -> StartRoundResponse {
        let target = self.app_context.locations.random();
        let round = self
            .app_context
            .rounds
            .start(&self.request_context.session_id, target)
            .await;
        let rounds_in_progress = self.app_context.rounds.in_progress().await;
        tracing::info!(
            task = "round_started",
            session_id = %self.request_context.session_id,
            target_lng = target.lng,
            target_lat = target.lat,
            rounds_in_progress,
        );
        StartRoundResponse {
            error: false,
            round,
        }
    }

    pub async fn current(&self) -> CurrentRoundResponse {
        match self
            .app_context
            .rounds
            .current(&self.request_context.session_id)
            .await
        {
            Some(round) => CurrentRoundResponse {
                error: false,
                error_code: None,
                round: Some(round),
            },
            None => CurrentRoundResponse {
                error: true,
                error_code: Some(CurrentRoundError::RoundNotFound),
                round: None,
            },
        }
    }

    pub async fn guess(&self, guess: LngLat) -> GuessResponse {
        let result = self
            .app_context
            .rounds
            .make_guess(&self.request_context.session_id, guess)
            .await;
        let error_code = match result {
            Ok(_round) => {
                tracing::info!(
                    task = "guess_made",
                    session_id = %self.request_context.session_id,
                    guess_lng = guess.lng,
                    guess_lat = guess.lat,
                );
                return GuessResponse {
                    error: false,
                    error_code: None,
                };
            }
            Err(GuessError::RoundNotFound) => GuessingError::RoundNotFound,
            Err(GuessError::AlreadyMade) => GuessingError::GuessAlreadyMade,
            Err(GuessError::InvalidCoordinate(_)) => GuessingError::InvalidCoordinate,
        };
        tracing::debug!(
            session_id = %self.request_context.session_id,
            error = ?error_code,
            "Rejected a guess."
        );
        GuessResponse {
            error: true,
            error_code: Some(error_code),
        }
    }

    pub async fn score(&self) -> ScoreResponse {
        let Some(round) = self
            .app_context
            .rounds
            .current(&self.request_context.session_id)
            .await
        else {
            return ScoreResponse {
                error: true,
                error_code: Some(ScoringError::RoundNotFound),
                score: None,
            };
        };
        match round.score() {
            Ok(score) => {
                tracing::info!(
                    task = "round_scored",
                    session_id = %self.request_context.session_id,
                    distance_meters = score.distance_meters,
                );
                ScoreResponse {
                    error: false,
                    error_code: None,
                    score: Some(score),
                }
            }
            Err(ScoreError::NotComputable) => ScoreResponse {
                error: true,
                error_code: Some(ScoringError::NotComputable),
                score: None,
            },
        }
    }
}
