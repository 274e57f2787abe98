//! Reward claiming

use crate::error::{LedgerError, LedgerResult};
use crate::events::{self, LedgerEvent};
use crate::host::AssetLedger;
use crate::math;
use crate::state::{AccountId, LedgerState, SlotId, SlotOutcome};

impl LedgerState {
    /// Pay out `participant`'s proportional share of slot `slot_id`'s pool.
    ///
    /// `reward = floor(stake * total_pool / winners_pool)`, computed through
    /// a `u128` intermediate. The shares of all winners sum to the total
    /// pool under exact arithmetic, so floor division can only leave a
    /// small remainder in the vault, never overdraw it.
    ///
    /// The claimed flag flips in the same operation as the payout; a second
    /// claim for the same (participant, slot) always fails with
    /// [`LedgerError::AlreadyClaimed`]. Returns the amount paid.
    pub fn claim_reward(
        &mut self,
        participant: &AccountId,
        slot_id: SlotId,
        assets: &mut impl AssetLedger,
    ) -> LedgerResult<u64> {
        let slot = self.slots.get(&slot_id).ok_or(LedgerError::SlotNotFound)?;
        let (winning_option, winners_pool) = match slot.outcome {
            SlotOutcome::Resolved {
                winning_option,
                winners_pool,
            } => (winning_option, winners_pool),
            SlotOutcome::Open => return Err(LedgerError::SlotNotResolved),
        };
        if winners_pool == 0 {
            return Err(LedgerError::NoWinners);
        }

        let key = (*participant, slot_id);
        let record = self
            .stakes
            .get_mut(&key)
            .ok_or(LedgerError::PredictionNotFound)?;
        if record.claimed {
            return Err(LedgerError::AlreadyClaimed);
        }
        if record.option != winning_option {
            return Err(LedgerError::NotAWinner);
        }

        let reward = math::mul_div_floor(record.amount, slot.total_pool, winners_pool)?;
        let payout = self.vault.withdraw(reward)?;
        record.claimed = true;
        assets.credit(participant, payout);

        events::emit(&LedgerEvent::RewardClaimed {
            participant: *participant,
            slot_id,
            reward,
        });
        Ok(reward)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::LedgerError;
    use crate::host::{FixedClock, InMemoryAssetLedger};
    use crate::state::{AccountId, LedgerState};

    fn acct(n: u8) -> AccountId {
        AccountId::new([n; 32])
    }

    /// Slot 1 with options [a, b]: 100 on a, 300 on b, 100 on a.
    fn setup() -> (LedgerState, InMemoryAssetLedger) {
        let mut ledger = LedgerState::new(acct(0));
        ledger
            .create_slot(&acct(0), 1, 0, 100, 0, vec!["a".into(), "b".into()])
            .unwrap();

        let mut assets = InMemoryAssetLedger::new();
        let clock = FixedClock(10);
        for (n, amount, option) in [(1, 100, 0), (2, 300, 1), (3, 100, 0)] {
            assets.fund(acct(n), amount);
            ledger
                .place_stake(&acct(n), 1, amount, option, &mut assets, &clock)
                .unwrap();
        }
        (ledger, assets)
    }

    #[test]
    fn test_winners_paid_proportionally() {
        let (mut ledger, mut assets) = setup();
        ledger.resolve_slot(&acct(0), 1, 0).unwrap();

        assert_eq!(ledger.claim_reward(&acct(1), 1, &mut assets).unwrap(), 250);
        assert_eq!(ledger.claim_reward(&acct(3), 1, &mut assets).unwrap(), 250);

        assert_eq!(assets.balance_of(&acct(1)), 250);
        assert_eq!(assets.balance_of(&acct(3)), 250);
        assert_eq!(ledger.vault_balance(), 0);
        assert!(ledger.get_stake(&acct(1), 1).unwrap().claimed);
    }

    #[test]
    fn test_loser_cannot_claim() {
        let (mut ledger, mut assets) = setup();
        ledger.resolve_slot(&acct(0), 1, 0).unwrap();

        assert_eq!(
            ledger.claim_reward(&acct(2), 1, &mut assets).unwrap_err(),
            LedgerError::NotAWinner
        );
        assert_eq!(assets.balance_of(&acct(2)), 0);
        assert!(!ledger.get_stake(&acct(2), 1).unwrap().claimed);
    }

    #[test]
    fn test_second_claim_rejected() {
        let (mut ledger, mut assets) = setup();
        ledger.resolve_slot(&acct(0), 1, 0).unwrap();

        ledger.claim_reward(&acct(1), 1, &mut assets).unwrap();
        assert_eq!(
            ledger.claim_reward(&acct(1), 1, &mut assets).unwrap_err(),
            LedgerError::AlreadyClaimed
        );
        // Exactly one payout happened.
        assert_eq!(assets.balance_of(&acct(1)), 250);
        assert_eq!(ledger.vault_balance(), 250);
    }

    #[test]
    fn test_unresolved_slot_rejected() {
        let (mut ledger, mut assets) = setup();
        assert_eq!(
            ledger.claim_reward(&acct(1), 1, &mut assets).unwrap_err(),
            LedgerError::SlotNotResolved
        );
    }

    #[test]
    fn test_unknown_slot_rejected() {
        let (mut ledger, mut assets) = setup();
        assert_eq!(
            ledger.claim_reward(&acct(1), 9, &mut assets).unwrap_err(),
            LedgerError::SlotNotFound
        );
    }

    #[test]
    fn test_empty_winners_pool_rejected_before_record_lookup() {
        let mut ledger = LedgerState::new(acct(0));
        ledger
            .create_slot(&acct(0), 1, 0, 100, 0, vec!["a".into(), "b".into()])
            .unwrap();
        ledger.resolve_slot(&acct(0), 1, 0).unwrap();

        let mut assets = InMemoryAssetLedger::new();
        // Nobody staked at all; the claim fails with NoWinners rather than
        // paying zero or reporting a missing record.
        assert_eq!(
            ledger.claim_reward(&acct(1), 1, &mut assets).unwrap_err(),
            LedgerError::NoWinners
        );
    }

    #[test]
    fn test_participant_without_stake_rejected() {
        let (mut ledger, mut assets) = setup();
        ledger.resolve_slot(&acct(0), 1, 0).unwrap();

        assert_eq!(
            ledger.claim_reward(&acct(9), 1, &mut assets).unwrap_err(),
            LedgerError::PredictionNotFound
        );
    }

    #[test]
    fn test_floor_remainder_stays_in_vault() {
        let mut ledger = LedgerState::new(acct(0));
        ledger
            .create_slot(&acct(0), 1, 0, 100, 0, vec!["a".into(), "b".into()])
            .unwrap();

        let mut assets = InMemoryAssetLedger::new();
        let clock = FixedClock(10);
        for (n, amount, option) in [(1, 1, 0), (2, 1, 0), (3, 1, 1)] {
            assets.fund(acct(n), amount);
            ledger
                .place_stake(&acct(n), 1, amount, option, &mut assets, &clock)
                .unwrap();
        }
        ledger.resolve_slot(&acct(0), 1, 0).unwrap();

        // total_pool = 3, winners_pool = 2: each winner gets floor(3/2) = 1.
        assert_eq!(ledger.claim_reward(&acct(1), 1, &mut assets).unwrap(), 1);
        assert_eq!(ledger.claim_reward(&acct(2), 1, &mut assets).unwrap(), 1);
        assert_eq!(ledger.vault_balance(), 1);
    }
}
