use thiserror::Error;

use crate::GamePhase;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("The deck is exhausted")]
    DeckExhausted,
    #[error("No bet placed")]
    NoBetPlaced,
    #[error("Split not allowed")]
    SplitNotAllowed,
    #[error("Action not allowed during {0:?}")]
    WrongPhase(GamePhase),
    #[error("Dealer has not finished drawing")]
    DealerNotFinished,
}
