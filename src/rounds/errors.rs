use crate::map::models::LngLat;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GuessError {
    #[error("no round was started for this session")]
    RoundNotFound,
    #[error("a guess was already made in this round")]
    AlreadyMade,
    #[error("guessed coordinate {0} is out of range")]
    InvalidCoordinate(LngLat),
}

#[derive(Debug, Error, PartialEq)]
pub enum ScoreError {
    /// Either the target or the guess is missing.
    #[error("distance can only be computed once both the target and the guess are known")]
    NotComputable,
}
