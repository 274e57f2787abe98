//! Root ledger state
//!
//! Single owner of every table in the system: slot registry, prediction
//! ledger, participant index, and the escrow vault. Constructed explicitly
//! by the embedding application; exactly one instance per deployment.

use std::collections::HashMap;

use borsh::{BorshDeserialize, BorshSerialize};

use crate::error::{LedgerError, LedgerResult};
use crate::state::accounts::{AccountId, Slot, SlotId, StakeKey, StakeRecord};
use crate::vault::EscrowVault;

/// Root state of the ledger.
///
/// Every operation takes `&mut LedgerState` and applies either completely
/// or not at all, so the borrow checker serializes mutations in-process.
/// Hosts with concurrent callers wrap the state in their own
/// synchronization (a mutex or a single-writer task).
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq)]
pub struct LedgerState {
    /// Administrator identity; the only caller allowed to create and
    /// resolve slots.
    pub(crate) admin: AccountId,

    /// Shared custodial balance across all slots.
    pub(crate) vault: EscrowVault,

    /// Slot registry.
    pub(crate) slots: HashMap<SlotId, Slot>,

    /// Prediction ledger: at most one stake record per (participant, slot).
    pub(crate) stakes: HashMap<StakeKey, StakeRecord>,

    /// Per-slot participant index, in staking order.
    pub(crate) participants: HashMap<SlotId, Vec<AccountId>>,
}

impl LedgerState {
    /// Bootstrap a fresh ledger bound to `admin`.
    pub fn new(admin: AccountId) -> Self {
        Self {
            admin,
            vault: EscrowVault::new(),
            slots: HashMap::new(),
            stakes: HashMap::new(),
            participants: HashMap::new(),
        }
    }

    /// The administrator identity this ledger was bootstrapped with.
    pub fn admin(&self) -> AccountId {
        self.admin
    }

    /// Current pooled escrow balance.
    pub fn vault_balance(&self) -> u128 {
        self.vault.balance()
    }

    /// Look up a slot.
    pub fn get_slot(&self, slot_id: SlotId) -> LedgerResult<&Slot> {
        self.slots.get(&slot_id).ok_or(LedgerError::SlotNotFound)
    }

    /// Look up a participant's stake record for a slot.
    pub fn get_stake(
        &self,
        participant: &AccountId,
        slot_id: SlotId,
    ) -> LedgerResult<&StakeRecord> {
        self.stakes
            .get(&(*participant, slot_id))
            .ok_or(LedgerError::PredictionNotFound)
    }

    /// Participants who staked in a slot, in staking order. Empty when the
    /// slot has no stakes (or does not exist).
    pub fn slot_participants(&self, slot_id: SlotId) -> &[AccountId] {
        self.participants
            .get(&slot_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
