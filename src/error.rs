use blackjack::GameError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Balance store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Balance record is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum TableError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Insufficient funds: need {needed}, have {available}")]
    InsufficientFunds { needed: u64, available: u64 },

    #[error("Bet must be greater than zero")]
    InvalidBet,

    #[error("A round is already in progress")]
    RoundInProgress,

    #[error("No round in progress")]
    NoRound,
}

impl TableError {
    /// Rejections that leave the table untouched, as opposed to store or deck failures.
    pub fn is_rejection(&self) -> bool {
        !matches!(
            self,
            TableError::Store(_) | TableError::Game(GameError::DeckExhausted)
        )
    }
}
