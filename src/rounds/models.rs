use crate::map::models::LngLat;
use crate::rounds::errors::{GuessError, ScoreError};
use crate::rounds::scoring::{self, Score};
use serde::{Deserialize, Serialize};

/// One play-through: a target fixed at creation and at most one guess.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub target: LngLat,
    pub guess: Option<LngLat>,
}

impl Round {
    pub fn new(target: LngLat) -> Self {
        Self {
            target,
            guess: None,
        }
    }

    pub fn make_guess(&mut self, guess: LngLat) -> Result<(), GuessError> {
        if self.guess.is_some() {
            return Err(GuessError::AlreadyMade);
        }
        if !guess.is_valid() {
            return Err(GuessError::InvalidCoordinate(guess));
        }
        self.guess = Some(guess);
        Ok(())
    }

    pub fn score(&self) -> Result<Score, ScoreError> {
        scoring::score(Some(self.target), self.guess)
    }
}

#[cfg(test)]
mod tests {
    use super::Round;
    use crate::map::consts::TOKYO_LOCATIONS;
    use crate::map::models::LngLat;
    use crate::rounds::errors::{GuessError, ScoreError};

    #[test]
    fn test_new_round_has_no_guess() {
        let round = Round::new(TOKYO_LOCATIONS[2]);
        assert_eq!(round.guess, None);
        assert_eq!(round.score(), Err(ScoreError::NotComputable));
    }

    #[test]
    fn test_guess_is_set_once() {
        let mut round = Round::new(TOKYO_LOCATIONS[2]);
        round.make_guess(TOKYO_LOCATIONS[5]).unwrap();
        assert_eq!(
            round.make_guess(TOKYO_LOCATIONS[6]),
            Err(GuessError::AlreadyMade)
        );
        assert_eq!(round.guess, Some(TOKYO_LOCATIONS[5]));
    }

    #[test]
    fn test_invalid_guess_leaves_round_open() {
        let mut round = Round::new(TOKYO_LOCATIONS[2]);
        let bogus = LngLat::new(500.0, 35.0);
        assert_eq!(
            round.make_guess(bogus),
            Err(GuessError::InvalidCoordinate(bogus))
        );
        assert_eq!(round.guess, None);
        assert!(round.make_guess(TOKYO_LOCATIONS[0]).is_ok());
    }

    #[test]
    fn test_scoring_does_not_change_the_round() {
        let mut round = Round::new(TOKYO_LOCATIONS[0]);
        round.make_guess(TOKYO_LOCATIONS[0]).unwrap();
        let before = round;
        assert_eq!(round.score().unwrap().display, "0m");
        assert_eq!(round, before);
    }
}
