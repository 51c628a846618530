//! The game controller: owns the bankroll and the current round, and turns
//! intents into ordered snapshots for the presentation layer.

mod execute;
mod instantiate;
mod query;

use blackjack::{DeckSource, RoundState, Settlement};

use crate::config::TableConfig;
use crate::state::Bankroll;

pub struct Table {
    config: TableConfig,
    bankroll: Bankroll,
    decks: Box<dyn DeckSource>,
    round: Option<RoundState>,
    settlement: Option<Settlement>,
}

impl Table {
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn bankroll(&self) -> &Bankroll {
        &self.bankroll
    }

    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }
}
