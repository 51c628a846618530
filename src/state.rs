use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Deserialize, Serialize};

use crate::error::{StoreError, TableError};

/// The single persisted record. Stored as an absolute value so rewrites are idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceRecord {
    pub balance: u64,
}

pub trait BalanceStore {
    fn load(&self) -> Result<Option<BalanceRecord>, StoreError>;
    fn save(&mut self, record: &BalanceRecord) -> Result<(), StoreError>;
}

/// JSON file on disk, replaced atomically on every save.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "balance".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl BalanceStore for JsonFileStore {
    fn load(&self) -> Result<Option<BalanceRecord>, StoreError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&mut self, record: &BalanceRecord) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let temp = self.temp_path();
        {
            let mut file = File::create(&temp)?;
            file.write_all(&serde_json::to_vec(record)?)?;
            file.sync_all()?;
        }
        fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

/// In-process store. Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    record: Arc<Mutex<Option<BalanceRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_balance(balance: u64) -> Self {
        Self {
            record: Arc::new(Mutex::new(Some(BalanceRecord { balance }))),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<BalanceRecord>> {
        self.record.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn record(&self) -> Option<BalanceRecord> {
        *self.lock()
    }
}

impl BalanceStore for MemoryStore {
    fn load(&self) -> Result<Option<BalanceRecord>, StoreError> {
        Ok(*self.lock())
    }

    fn save(&mut self, record: &BalanceRecord) -> Result<(), StoreError> {
        *self.lock() = Some(*record);
        Ok(())
    }
}

/// Coin balance plus the amount currently staked on the table.
///
/// Every balance change is written to the store before it is applied in memory,
/// so a failed write leaves the bankroll as it was.
pub struct Bankroll {
    balance: u64,
    current_bet: u64,
    store: Box<dyn BalanceStore>,
}

impl Bankroll {
    pub fn load(mut store: Box<dyn BalanceStore>, default_balance: u64) -> Result<Self, StoreError> {
        let balance = match store.load()? {
            Some(record) => record.balance,
            None => {
                log::warn!("no saved balance, starting with {default_balance}");
                store.save(&BalanceRecord {
                    balance: default_balance,
                })?;
                default_balance
            }
        };
        Ok(Self {
            balance,
            current_bet: 0,
            store,
        })
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn current_bet(&self) -> u64 {
        self.current_bet
    }

    /// Balance plus the pending bet, which a replacement bet may reuse.
    pub fn available(&self) -> u64 {
        self.balance.saturating_add(self.current_bet)
    }

    fn commit(&mut self, balance: u64, current_bet: u64) -> Result<(), StoreError> {
        if balance != self.balance {
            self.store.save(&BalanceRecord { balance })?;
        }
        self.balance = balance;
        self.current_bet = current_bet;
        Ok(())
    }

    /// Replaces the pending bet with `amount`, returning the old one first.
    pub fn place_bet(&mut self, amount: u64) -> Result<(), TableError> {
        if amount == 0 {
            return Err(TableError::InvalidBet);
        }
        let available = self.available();
        if amount > available {
            return Err(TableError::InsufficientFunds {
                needed: amount,
                available,
            });
        }
        self.commit(available - amount, amount)?;
        Ok(())
    }

    /// Adds to the stake mid-round (double down, split).
    pub fn raise(&mut self, amount: u64) -> Result<(), TableError> {
        if amount > self.balance {
            return Err(TableError::InsufficientFunds {
                needed: amount,
                available: self.balance,
            });
        }
        self.commit(self.balance - amount, self.current_bet.saturating_add(amount))?;
        Ok(())
    }

    /// Credits the round's winnings in one write and clears the stake.
    pub fn settle(&mut self, payout: u64) -> Result<(), StoreError> {
        self.commit(self.balance.saturating_add(payout), 0)
    }

    /// Returns the whole stake, as when a round is aborted.
    pub fn refund(&mut self) -> Result<(), StoreError> {
        self.commit(self.available(), 0)
    }
}

impl std::fmt::Debug for Bankroll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bankroll")
            .field("balance", &self.balance)
            .field("current_bet", &self.current_bet)
            .finish()
    }
}
