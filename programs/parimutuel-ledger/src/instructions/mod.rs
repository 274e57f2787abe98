//! Ledger operations
//!
//! One module per operation; each extends [`crate::state::LedgerState`].

mod claim_reward;
mod create_slot;
mod place_stake;
mod resolve_slot;
