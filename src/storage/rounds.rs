use crate::map::models::LngLat;
use crate::rounds::errors::GuessError;
use crate::rounds::models::Round;
use crate::storage::consts::ROUND_IDLE_TIMEOUT;
use crate::storage::interface::{IRoundStorage, RoundGuessRepo, RoundRepo};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::time::Instant;

#[derive(Clone, Copy, Debug)]
struct StoredRound {
    round: Round,
    last_touched: Instant,
}

#[derive(Clone, Default)]
pub struct HashMapRoundsStorage {
    storage: Arc<RwLock<HashMap<String, StoredRound>>>,
}

impl IRoundStorage for HashMapRoundsStorage {}

impl RoundRepo for HashMapRoundsStorage {
    async fn start(&self, session_id: &str, target: LngLat) -> Round {
        let round = Round::new(target);
        let now = Instant::now();
        let mut storage_guard = self.storage.write().await;
        let rounds_before = storage_guard.len();
        storage_guard
            .retain(|_, stored| now.duration_since(stored.last_touched) < ROUND_IDLE_TIMEOUT);
        let evicted = rounds_before - storage_guard.len();
        if evicted > 0 {
            tracing::info!(task = "rounds_evicted", evicted, "Dropped idle rounds.");
        }
        storage_guard.insert(
            session_id.to_string(),
            StoredRound {
                round,
                last_touched: now,
            },
        );
        round
    }

    async fn current(&self, session_id: &str) -> Option<Round> {
        self.storage
            .read()
            .await
            .get(session_id)
            .map(|stored| stored.round)
    }

    async fn in_progress(&self) -> usize {
        self.storage
            .read()
            .await
            .values()
            .filter(|stored| stored.round.guess.is_none())
            .count()
    }
}

impl RoundGuessRepo for HashMapRoundsStorage {
    async fn make_guess(&self, session_id: &str, guess: LngLat) -> Result<Round, GuessError> {
        let mut storage_guard = self.storage.write().await;
        let stored = storage_guard
            .get_mut(session_id)
            .ok_or(GuessError::RoundNotFound)?;
        stored.round.make_guess(guess)?;
        stored.last_touched = Instant::now();
        Ok(stored.round)
    }
}

#[cfg(test)]
mod tests {
    use super::HashMapRoundsStorage;
    use crate::map::consts::TOKYO_LOCATIONS;
    use crate::rounds::errors::GuessError;
    use crate::storage::consts::ROUND_IDLE_TIMEOUT;
    use crate::storage::interface::{RoundGuessRepo, RoundRepo};

    #[tokio::test]
    async fn test_unknown_session_has_no_round() {
        let storage = HashMapRoundsStorage::default();
        assert_eq!(storage.current("nobody").await, None);
        assert_eq!(
            storage.make_guess("nobody", TOKYO_LOCATIONS[0]).await,
            Err(GuessError::RoundNotFound)
        );
    }

    #[tokio::test]
    async fn test_new_round_replaces_previous_one() {
        let storage = HashMapRoundsStorage::default();
        storage.start("session", TOKYO_LOCATIONS[0]).await;
        storage
            .make_guess("session", TOKYO_LOCATIONS[1])
            .await
            .unwrap();

        let round = storage.start("session", TOKYO_LOCATIONS[2]).await;

        assert_eq!(round.target, TOKYO_LOCATIONS[2]);
        assert_eq!(round.guess, None);
        assert_eq!(storage.current("session").await, Some(round));
        assert_eq!(storage.in_progress().await, 1);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let storage = HashMapRoundsStorage::default();
        storage.start("first", TOKYO_LOCATIONS[0]).await;
        storage.start("second", TOKYO_LOCATIONS[1]).await;

        storage
            .make_guess("first", TOKYO_LOCATIONS[3])
            .await
            .unwrap();

        assert_eq!(
            storage.current("second").await.and_then(|round| round.guess),
            None
        );
        assert_eq!(storage.in_progress().await, 1);
    }

    #[tokio::test]
    async fn test_second_guess_is_rejected() {
        let storage = HashMapRoundsStorage::default();
        storage.start("session", TOKYO_LOCATIONS[0]).await;
        storage
            .make_guess("session", TOKYO_LOCATIONS[1])
            .await
            .unwrap();
        assert_eq!(
            storage.make_guess("session", TOKYO_LOCATIONS[2]).await,
            Err(GuessError::AlreadyMade)
        );
        assert_eq!(
            storage.current("session").await.and_then(|round| round.guess),
            Some(TOKYO_LOCATIONS[1])
        );
    }

    #[tokio::test]
    async fn test_guessed_rounds_are_not_in_progress() {
        let storage = HashMapRoundsStorage::default();
        for session_id in ["first", "second", "third"] {
            storage.start(session_id, TOKYO_LOCATIONS[0]).await;
        }
        storage
            .make_guess("second", TOKYO_LOCATIONS[1])
            .await
            .unwrap();
        storage
            .make_guess("third", TOKYO_LOCATIONS[2])
            .await
            .unwrap();

        assert_eq!(storage.in_progress().await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_rounds_are_dropped_on_start() {
        let storage = HashMapRoundsStorage::default();
        for index in 0..50 {
            let session_id = format!("finished-{index}");
            storage.start(&session_id, TOKYO_LOCATIONS[0]).await;
            storage
                .make_guess(&session_id, TOKYO_LOCATIONS[1])
                .await
                .unwrap();
        }
        storage.start("abandoned", TOKYO_LOCATIONS[0]).await;
        tokio::time::advance(ROUND_IDLE_TIMEOUT / 2).await;
        storage.start("recent", TOKYO_LOCATIONS[0]).await;
        tokio::time::advance(ROUND_IDLE_TIMEOUT / 2).await;

        storage.start("newcomer", TOKYO_LOCATIONS[3]).await;

        assert_eq!(storage.current("finished-0").await, None);
        assert_eq!(storage.current("abandoned").await, None);
        assert!(storage.current("recent").await.is_some());
        assert!(storage.current("newcomer").await.is_some());
        assert_eq!(storage.storage.read().await.len(), 2);
        assert_eq!(storage.in_progress().await, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_guess_keeps_round_alive() {
        let storage = HashMapRoundsStorage::default();
        storage.start("slow", TOKYO_LOCATIONS[0]).await;
        tokio::time::advance(ROUND_IDLE_TIMEOUT - std::time::Duration::from_secs(1)).await;
        storage
            .make_guess("slow", TOKYO_LOCATIONS[1])
            .await
            .unwrap();
        tokio::time::advance(ROUND_IDLE_TIMEOUT / 2).await;

        storage.start("other", TOKYO_LOCATIONS[2]).await;

        assert!(storage.current("slow").await.is_some());
    }
}
