//! Ledger state: account records and the root state object

pub mod accounts;
pub mod ledger;

pub use accounts::{AccountId, Slot, SlotId, SlotOutcome, StakeKey, StakeRecord};
pub use ledger::LedgerState;
