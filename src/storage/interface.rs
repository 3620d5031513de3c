use crate::map::models::LngLat;
use crate::rounds::errors::GuessError;
use crate::rounds::models::Round;

pub trait IRoundStorage: RoundRepo + RoundGuessRepo {}

pub trait RoundRepo {
    /// Starts a round for the session, replacing whatever round it had before.
    /// Rounds of other sessions left idle for too long are dropped.
    async fn start(&self, session_id: &str, target: LngLat) -> Round;

    async fn current(&self, session_id: &str) -> Option<Round>;

    /// Rounds still waiting for a guess.
    async fn in_progress(&self) -> usize;
}

pub trait RoundGuessRepo {
    async fn make_guess(&self, session_id: &str, guess: LngLat) -> Result<Round, GuessError>;
}
