//! Single-deck blackjack rules: cards, hand scoring, turn flow, dealer play and payouts.
//! No I/O happens here; callers own the deck source and the bankroll.

mod card;
mod dealer;
mod deck;
mod error;
mod hand;
mod payout;
mod round;
mod strategy;

pub use card::{Card, Rank, Suit};
pub use dealer::DealerPolicy;
pub use deck::{Deck, DeckSource, ShuffledDecks, DECK_SIZE};
pub use error::GameError;
pub use hand::{calculate_hand_value, can_split_cards, is_blackjack, is_busted, is_soft_hand, Hand};
pub use payout::{outcome, HandOutcome, HandResult, Settlement};
pub use round::{ActiveHand, GamePhase, RoundEvent, RoundState, Seat};
pub use strategy::{hint_for, optimal_move, OptimalMove};
