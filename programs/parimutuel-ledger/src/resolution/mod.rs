//! Winner-set computation
//!
//! The winners' aggregate stake is recomputed from scratch at resolution
//! time by scanning the slot's full participant index, rather than being
//! maintained incrementally. Resolution happens once per slot, so the O(n)
//! scan buys freedom from incremental-update drift.

use std::collections::HashMap;

use crate::error::{LedgerError, LedgerResult};
use crate::state::{AccountId, SlotId, StakeKey, StakeRecord};

/// True when `record` backs the winning option.
pub fn is_winning_stake(record: &StakeRecord, winning_option: u8) -> bool {
    record.option == winning_option
}

/// Sum the stake held by participants whose recorded option matches
/// `winning_option`.
///
/// An empty participant list or no matching stake sums to zero; neither is
/// an error.
pub fn compute_winners_pool(
    participants: &[AccountId],
    stakes: &HashMap<StakeKey, StakeRecord>,
    slot_id: SlotId,
    winning_option: u8,
) -> LedgerResult<u64> {
    let mut winners_pool: u64 = 0;
    for participant in participants {
        if let Some(record) = stakes.get(&(*participant, slot_id)) {
            if is_winning_stake(record, winning_option) {
                winners_pool = winners_pool
                    .checked_add(record.amount)
                    .ok_or(LedgerError::ArithmeticOverflow)?;
            }
        }
    }
    Ok(winners_pool)
}
