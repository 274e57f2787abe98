//! Slot creation

use crate::constants::{MAX_SLOT_OPTIONS, MIN_SLOT_OPTIONS};
use crate::error::{LedgerError, LedgerResult};
use crate::events::{self, LedgerEvent};
use crate::state::{AccountId, LedgerState, Slot, SlotId, SlotOutcome};

impl LedgerState {
    /// Register a new betting slot.
    ///
    /// Only the administrator may create slots. The betting window must be
    /// non-empty (`close_time > open_time`) and the slot id unused. The new
    /// slot starts unresolved with an empty pool.
    pub fn create_slot(
        &mut self,
        caller: &AccountId,
        slot_id: SlotId,
        open_time: i64,
        close_time: i64,
        anchor_value: i64,
        options: Vec<String>,
    ) -> LedgerResult<()> {
        if *caller != self.admin {
            return Err(LedgerError::Unauthorized);
        }
        if close_time <= open_time {
            return Err(LedgerError::InvalidTimeWindow);
        }
        if options.len() < MIN_SLOT_OPTIONS || options.len() > MAX_SLOT_OPTIONS {
            return Err(LedgerError::InvalidOptionList);
        }
        if self.slots.contains_key(&slot_id) {
            return Err(LedgerError::SlotAlreadyExists);
        }

        let option_count = options.len() as u8;
        self.slots.insert(
            slot_id,
            Slot {
                slot_id,
                open_time,
                close_time,
                anchor_value,
                options,
                total_pool: 0,
                outcome: SlotOutcome::Open,
            },
        );

        events::emit(&LedgerEvent::SlotCreated {
            slot_id,
            open_time,
            close_time,
            option_count,
        });
        Ok(())
    }
}
