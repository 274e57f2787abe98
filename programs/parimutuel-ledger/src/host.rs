//! Host-environment collaborators
//!
//! The ledger consumes spendable balances and time through the narrow
//! contracts below; what actually backs them (a token program, a bank
//! database, a simulation) is the embedding application's business.

use std::collections::HashMap;

use chrono::Utc;

use crate::error::{LedgerError, LedgerResult};
use crate::state::AccountId;
use crate::vault::Asset;

/// External asset ledger holding participants' spendable balances.
///
/// `debit` is the only fallible external call an operation makes, and it is
/// always made before any ledger state is written.
pub trait AssetLedger {
    /// Remove `amount` from `account`'s spendable balance.
    fn debit(&mut self, account: &AccountId, amount: u64) -> LedgerResult<Asset>;

    /// Add `asset` to `account`'s spendable balance.
    fn credit(&mut self, account: &AccountId, asset: Asset);
}

/// Source of the current time, in unix seconds. Used only for the
/// betting-window check.
pub trait ClockSource {
    fn unix_timestamp(&self) -> i64;
}

/// Wall-clock time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn unix_timestamp(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// Fixed time, for deterministic hosts and tests.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub i64);

impl ClockSource for FixedClock {
    fn unix_timestamp(&self) -> i64 {
        self.0
    }
}

/// Reference [`AssetLedger`] backed by an in-memory balance table.
#[derive(Debug, Default)]
pub struct InMemoryAssetLedger {
    balances: HashMap<AccountId, u64>,
}

impl InMemoryAssetLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `account` with a spendable balance.
    pub fn fund(&mut self, account: AccountId, amount: u64) {
        *self.balances.entry(account).or_insert(0) += amount;
    }

    pub fn balance_of(&self, account: &AccountId) -> u64 {
        self.balances.get(account).copied().unwrap_or(0)
    }
}

impl AssetLedger for InMemoryAssetLedger {
    fn debit(&mut self, account: &AccountId, amount: u64) -> LedgerResult<Asset> {
        let balance = self.balances.entry(*account).or_insert(0);
        if *balance < amount {
            return Err(LedgerError::InsufficientFunds);
        }
        *balance -= amount;
        Ok(Asset::new(amount))
    }

    fn credit(&mut self, account: &AccountId, asset: Asset) {
        *self.balances.entry(*account).or_insert(0) += asset.amount();
    }
}
