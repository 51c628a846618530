pub mod config;
pub mod error;
pub mod msg;
pub mod state;
pub mod table;

pub use crate::config::TableConfig;
pub use crate::error::{StoreError, TableError};
pub use crate::msg::{Actions, BetAmount, Intent, Snapshot, TableEvent};
pub use crate::state::{BalanceRecord, BalanceStore, Bankroll, JsonFileStore, MemoryStore};
pub use crate::table::Table;
