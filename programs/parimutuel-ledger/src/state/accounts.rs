//! Core account records: slots and stake records

use std::fmt;

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

/// Slot identifier, unique across the ledger's lifetime.
pub type SlotId = u128;

/// Composite key of the prediction ledger.
pub type StakeKey = (AccountId, SlotId);

/// Opaque 32-byte identity of a participant or the administrator.
///
/// The ledger only ever compares identities for equality; what the bytes
/// mean (a public key, a user id hash, ...) is the host's business.
#[derive(
    BorshSerialize,
    BorshDeserialize,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
pub struct AccountId(pub [u8; 32]);

impl AccountId {
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl From<[u8; 32]> for AccountId {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", bs58::encode(self.0).into_string())
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId({})", self)
    }
}

/// Resolution state of a slot.
///
/// A slot transitions `Open` -> `Resolved` exactly once and never back.
/// The winners' aggregate stake lives inside `Resolved`, so it exists
/// precisely from resolution onward and cannot be set independently.
#[derive(BorshSerialize, BorshDeserialize, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum SlotOutcome {
    /// No winning option declared yet.
    Open,
    /// Terminal state: winning option declared, winners' stake frozen.
    Resolved {
        /// Index into the slot's option list.
        winning_option: u8,
        /// Aggregate stake held by participants who chose the winning
        /// option, computed once at resolution time.
        winners_pool: u64,
    },
}

/// A time-bounded prediction event with a fixed option set.
#[derive(BorshSerialize, BorshDeserialize, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Slot {
    /// Slot identifier.
    pub slot_id: SlotId,

    /// Time the slot opens (unix seconds). Descriptive; staking is gated
    /// only on the close time.
    pub open_time: i64,

    /// Betting cutoff (unix seconds); stakes at or past this time are
    /// rejected.
    pub close_time: i64,

    /// Reference value the slot is anchored to (e.g. an asset price).
    /// Opaque to the ledger.
    pub anchor_value: i64,

    /// Ordered outcome labels; stake options index into this list.
    pub options: Vec<String>,

    /// Aggregate stake across all participants. Only ever increases;
    /// payouts draw from the shared vault, not from this field.
    pub total_pool: u64,

    /// Lifecycle state.
    pub outcome: SlotOutcome,
}

impl Slot {
    pub fn is_resolved(&self) -> bool {
        matches!(self.outcome, SlotOutcome::Resolved { .. })
    }

    /// Winning option index, if resolved.
    pub fn winning_option(&self) -> Option<u8> {
        match self.outcome {
            SlotOutcome::Resolved { winning_option, .. } => Some(winning_option),
            SlotOutcome::Open => None,
        }
    }

    /// Winners' aggregate stake, if resolved.
    pub fn winners_pool(&self) -> Option<u64> {
        match self.outcome {
            SlotOutcome::Resolved { winners_pool, .. } => Some(winners_pool),
            SlotOutcome::Open => None,
        }
    }
}

/// A participant's single bet on one option within one slot.
///
/// At most one record ever exists per (participant, slot) pair.
#[derive(BorshSerialize, BorshDeserialize, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct StakeRecord {
    /// Amount staked, in native asset units.
    pub amount: u64,

    /// Index into the slot's option list.
    pub option: u8,

    /// Set once the reward for this stake has been paid out; never unset.
    pub claimed: bool,
}
