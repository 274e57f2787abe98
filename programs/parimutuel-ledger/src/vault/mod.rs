//! Escrow vault
//!
//! Shared custodial balance holding all deposited funds pending payout.

use borsh::{BorshDeserialize, BorshSerialize};
use log::warn;

use crate::error::{LedgerError, LedgerResult};

/// A quantity of the native asset in custody transit.
///
/// Neither `Clone` nor `Copy`: an `Asset` is consumed when deposited, so
/// the same funds cannot enter the vault twice. The ledger never inspects
/// an asset beyond its amount.
#[derive(Debug, PartialEq, Eq)]
#[must_use]
pub struct Asset {
    amount: u64,
}

impl Asset {
    pub fn new(amount: u64) -> Self {
        Self { amount }
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }
}

/// Pooled custodial balance, shared across all slots.
///
/// The balance is `u128` over `u64` flows, so the lifetime pool cannot
/// overflow no matter how many slots feed it.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct EscrowVault {
    balance: u128,
}

impl EscrowVault {
    pub fn new() -> Self {
        Self { balance: 0 }
    }

    /// Merge `asset` into the pooled balance.
    pub fn deposit(&mut self, asset: Asset) {
        self.balance += asset.amount() as u128;
    }

    /// Remove exactly `amount` from the pooled balance.
    ///
    /// Failing here means per-slot accounting is broken somewhere upstream:
    /// every reward is bounded by its slot's recorded pool, which already
    /// sits in the vault.
    pub fn withdraw(&mut self, amount: u64) -> LedgerResult<Asset> {
        if amount as u128 > self.balance {
            warn!(
                "vault balance {} cannot cover withdrawal of {}",
                self.balance, amount
            );
            return Err(LedgerError::InsufficientVaultBalance);
        }
        self.balance -= amount as u128;
        Ok(Asset::new(amount))
    }

    pub fn balance(&self) -> u128 {
        self.balance
    }
}
