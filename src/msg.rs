use blackjack::{ActiveHand, Card, GamePhase, HandResult, OptimalMove, Seat};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BetAmount {
    Chips(u64),
    /// The table limit, or the whole balance if that is smaller.
    Max,
}

/// Everything the presentation layer can ask the table to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    PlaceBet(BetAmount),
    Deal,
    Hit,
    Stand,
    Double,
    Split,
    NewRound,
}

/// Cues for sound and animation hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableEvent {
    CardDealt(Seat),
    Blackjack,
    Bust,
    Win,
    Lose,
    Push,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actions {
    pub place_bet: bool,
    pub deal: bool,
    pub hit: bool,
    pub stand: bool,
    pub double: bool,
    pub split: bool,
    pub new_round: bool,
}

/// What the presentation layer renders. The dealer hole card is `None` while hidden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub dealer_hand: Vec<Option<Card>>,
    pub player_hand: Vec<Card>,
    pub split_hand: Option<Vec<Card>>,
    pub is_split: bool,
    pub active_hand: ActiveHand,
    pub dealer_total: Option<u8>,
    pub player_total: u8,
    pub split_total: Option<u8>,
    pub balance: u64,
    pub current_bet: u64,
    pub actions: Actions,
    pub hint: Option<OptimalMove>,
    pub results: Vec<HandResult>,
    pub events: Vec<TableEvent>,
}
