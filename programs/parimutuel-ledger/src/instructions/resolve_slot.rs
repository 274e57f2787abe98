//! Slot resolution

use crate::error::{LedgerError, LedgerResult};
use crate::events::{self, LedgerEvent};
use crate::resolution;
use crate::state::{AccountId, LedgerState, SlotId, SlotOutcome};

impl LedgerState {
    /// Declare `winning_option` for slot `slot_id` and freeze the winners'
    /// aggregate stake.
    ///
    /// Terminal, one-shot transition: a slot resolves at most once, and the
    /// winners' pool is derived here and nowhere else. Resolution may
    /// happen before the betting window closes; once it has, further
    /// staking on the slot is rejected.
    pub fn resolve_slot(
        &mut self,
        caller: &AccountId,
        slot_id: SlotId,
        winning_option: u8,
    ) -> LedgerResult<()> {
        if *caller != self.admin {
            return Err(LedgerError::Unauthorized);
        }
        let slot = self
            .slots
            .get_mut(&slot_id)
            .ok_or(LedgerError::SlotNotFound)?;
        if slot.is_resolved() {
            return Err(LedgerError::SlotAlreadyResolved);
        }
        if winning_option as usize >= slot.options.len() {
            return Err(LedgerError::InvalidOption);
        }

        let participants = self
            .participants
            .get(&slot_id)
            .map(Vec::as_slice)
            .unwrap_or_default();
        let winners_pool =
            resolution::compute_winners_pool(participants, &self.stakes, slot_id, winning_option)?;

        slot.outcome = SlotOutcome::Resolved {
            winning_option,
            winners_pool,
        };

        events::emit(&LedgerEvent::SlotResolved {
            slot_id,
            winning_option,
            winners_pool,
            total_pool: slot.total_pool,
        });
        Ok(())
    }
}
