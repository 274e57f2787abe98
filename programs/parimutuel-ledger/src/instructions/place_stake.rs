//! Staking

use crate::error::{LedgerError, LedgerResult};
use crate::events::{self, LedgerEvent};
use crate::host::{AssetLedger, ClockSource};
use crate::state::{AccountId, LedgerState, SlotId, StakeRecord};

impl LedgerState {
    /// Lock `amount` of `participant`'s external funds against `option` in
    /// slot `slot_id`.
    ///
    /// Moves the funds into the escrow vault, grows the slot's pool, writes
    /// the stake record, and appends the participant to the slot's index —
    /// all or nothing. Validation and the external debit both complete
    /// before the first state write, so no failure leaves a partial stake.
    pub fn place_stake(
        &mut self,
        participant: &AccountId,
        slot_id: SlotId,
        amount: u64,
        option: u8,
        assets: &mut impl AssetLedger,
        clock: &impl ClockSource,
    ) -> LedgerResult<()> {
        let slot = self
            .slots
            .get_mut(&slot_id)
            .ok_or(LedgerError::SlotNotFound)?;
        if slot.is_resolved() {
            return Err(LedgerError::SlotAlreadyResolved);
        }
        if clock.unix_timestamp() >= slot.close_time {
            return Err(LedgerError::BettingWindowClosed);
        }
        if option as usize >= slot.options.len() {
            return Err(LedgerError::InvalidOption);
        }
        if amount == 0 {
            return Err(LedgerError::InvalidStakeAmount);
        }
        let key = (*participant, slot_id);
        if self.stakes.contains_key(&key) {
            return Err(LedgerError::DuplicateStake);
        }

        // Last fallible steps, before anything is written.
        let new_total = slot
            .total_pool
            .checked_add(amount)
            .ok_or(LedgerError::ArithmeticOverflow)?;
        let asset = assets.debit(participant, amount)?;

        self.vault.deposit(asset);
        slot.total_pool = new_total;
        self.stakes.insert(
            key,
            StakeRecord {
                amount,
                option,
                claimed: false,
            },
        );
        self.participants.entry(slot_id).or_default().push(*participant);

        events::emit(&LedgerEvent::StakePlaced {
            participant: *participant,
            slot_id,
            amount,
            option,
        });
        Ok(())
    }
}
