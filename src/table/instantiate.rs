use blackjack::{DeckSource, ShuffledDecks};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::Table;
use crate::config::TableConfig;
use crate::error::TableError;
use crate::state::{BalanceStore, Bankroll};

impl Table {
    /// Restores the persisted balance, or starts from `config.starting_balance`.
    pub fn open(
        config: TableConfig,
        store: Box<dyn BalanceStore>,
        decks: Box<dyn DeckSource>,
    ) -> Result<Self, TableError> {
        let bankroll = Bankroll::load(store, config.starting_balance)?;
        log::info!("table open with balance {}", bankroll.balance());
        Ok(Self {
            config,
            bankroll,
            decks,
            round: None,
            settlement: None,
        })
    }

    /// Opens a table shuffling with ChaCha8, seeded when a seed is given.
    pub fn with_seed(
        config: TableConfig,
        store: Box<dyn BalanceStore>,
        seed: Option<u64>,
    ) -> Result<Self, TableError> {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::open(config, store, Box::new(ShuffledDecks::new(rng)))
    }
}
