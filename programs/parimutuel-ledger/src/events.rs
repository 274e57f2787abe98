//! Ledger events
//!
//! One event per completed state transition, emitted through the `log`
//! facade once the operation's writes are in place. Observability only;
//! nothing inside the core consumes them.

use borsh::{BorshDeserialize, BorshSerialize};
use log::info;
use serde::{Deserialize, Serialize};

use crate::state::{AccountId, SlotId};

/// Emitted after each completed state transition.
#[derive(BorshSerialize, BorshDeserialize, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum LedgerEvent {
    SlotCreated {
        slot_id: SlotId,
        open_time: i64,
        close_time: i64,
        option_count: u8,
    },
    StakePlaced {
        participant: AccountId,
        slot_id: SlotId,
        amount: u64,
        option: u8,
    },
    SlotResolved {
        slot_id: SlotId,
        winning_option: u8,
        winners_pool: u64,
        total_pool: u64,
    },
    RewardClaimed {
        participant: AccountId,
        slot_id: SlotId,
        reward: u64,
    },
}

/// Log `event` on the crate's target.
pub fn emit(event: &LedgerEvent) {
    match event {
        LedgerEvent::SlotCreated {
            slot_id,
            open_time,
            close_time,
            option_count,
        } => {
            info!(
                "slot {} created: window [{}, {}), {} options",
                slot_id, open_time, close_time, option_count
            );
        }
        LedgerEvent::StakePlaced {
            participant,
            slot_id,
            amount,
            option,
        } => {
            info!(
                "stake placed: participant={} slot={} amount={} option={}",
                participant, slot_id, amount, option
            );
        }
        LedgerEvent::SlotResolved {
            slot_id,
            winning_option,
            winners_pool,
            total_pool,
        } => {
            info!(
                "slot {} resolved: winning_option={} winners_pool={} total_pool={}",
                slot_id, winning_option, winners_pool, total_pool
            );
        }
        LedgerEvent::RewardClaimed {
            participant,
            slot_id,
            reward,
        } => {
            info!(
                "reward claimed: participant={} slot={} reward={}",
                participant, slot_id, reward
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_borsh_round_trip() {
        let event = LedgerEvent::SlotResolved {
            slot_id: 3,
            winning_option: 1,
            winners_pool: 200,
            total_pool: 500,
        };
        let bytes = event.try_to_vec().unwrap();
        assert_eq!(LedgerEvent::try_from_slice(&bytes).unwrap(), event);
    }
}
