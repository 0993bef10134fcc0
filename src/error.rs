use thiserror::Error;

/// The result of attempting to perform an invalid operation on a game or session.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("game does not exist")]
    GameNotFound,
    #[error("no player exists with the given id")]
    PlayerNotFound,
    #[error("this action cannot be performed during this phase of the game")]
    InvalidPhase,
    #[error("card number is outside the target's hand")]
    CardOutOfRange,
    #[error("only the current investigator may perform this action")]
    NotYourTurn,
    #[error("this player cannot be chosen for this action")]
    InvalidTarget,
    #[error("round must be between 1 and 4")]
    InvalidRound,
    #[error("an invalid card was chosen")]
    InvalidCard,
}
