//! Pooled-stake prediction-market ledger
//!
//! An administrator opens time-bounded betting slots with a fixed option
//! set; participants lock funds against one option per slot; once the
//! administrator declares the winning option, winners claim a proportional
//! share of the pooled stake, exactly once.
//!
//! The crate is a library of synchronous operations over [`LedgerState`],
//! not a service: identity, spendable balances, and time come from the
//! embedding application through the seams in [`host`]. Every operation
//! takes `&mut LedgerState` and applies either completely or not at all,
//! so the borrow checker enforces the sequential state-machine model
//! in-process; hosts with concurrent callers serialize access themselves
//! (a mutex or a single-writer task per ledger).
//!
//! ```
//! use parimutuel_ledger::host::{FixedClock, InMemoryAssetLedger};
//! use parimutuel_ledger::{AccountId, LedgerState};
//!
//! let admin = AccountId::new([0; 32]);
//! let alice = AccountId::new([1; 32]);
//! let mut assets = InMemoryAssetLedger::new();
//! assets.fund(alice, 500);
//!
//! let mut ledger = LedgerState::new(admin);
//! ledger.create_slot(&admin, 1, 0, 100, 0, vec!["up".into(), "down".into()])?;
//! ledger.place_stake(&alice, 1, 500, 0, &mut assets, &FixedClock(10))?;
//! ledger.resolve_slot(&admin, 1, 0)?;
//!
//! let reward = ledger.claim_reward(&alice, 1, &mut assets)?;
//! assert_eq!(reward, 500);
//! # Ok::<(), parimutuel_ledger::LedgerError>(())
//! ```

pub mod constants;
pub mod error;
pub mod events;
pub mod host;
pub mod math;
pub mod resolution;
pub mod state;
pub mod vault;

mod instructions;

pub use error::{LedgerError, LedgerResult};
pub use events::LedgerEvent;
pub use state::{AccountId, LedgerState, Slot, SlotId, SlotOutcome, StakeKey, StakeRecord};
pub use vault::{Asset, EscrowVault};
