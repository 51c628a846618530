use serde::{Deserialize, Serialize};

pub const DEFAULT_STARTING_BALANCE: u64 = 50_000;
pub const DEFAULT_MAX_BET: u64 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Balance used when no record has been persisted yet
    pub starting_balance: u64,
    /// Ceiling applied when a bet of "max" is placed
    pub max_bet: u64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            starting_balance: DEFAULT_STARTING_BALANCE,
            max_bet: DEFAULT_MAX_BET,
        }
    }
}
