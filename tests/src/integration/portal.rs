//! # Public Wave Flows
//!
//! Two participants wave at a freshly funded portal.

#[cfg(test)]
mod tests {
    use crate::fixtures::{participant, Portal, DEPLOY_FUNDING};
    use shared_types::entities::Amount;
    use wave_ledger::domain::{
        EntropyError, LedgerConfig, LedgerError, PayoutOutcome, RewardRandomizer,
        DEFAULT_AWARD_THRESHOLD, DEFAULT_PAYOUT_UNIT,
    };
    use wave_ledger::ports::WaveLedgerApi;

    const T0: u64 = 1_700_000_000;

    fn deployed() -> Portal<wave_ledger::adapters::InMemoryLedgerStore> {
        Portal::in_memory(LedgerConfig::default())
    }

    fn send_two_waves(portal: &Portal<wave_ledger::adapters::InMemoryLedgerStore>) {
        portal.wave(participant(1), "This is wave #1", T0).unwrap();
        portal.wave(participant(2), "This is wave #2", T0 + 1).unwrap();
    }

    #[test]
    fn test_portal_starts_with_deploy_funding() {
        let portal = deployed();
        assert_eq!(portal.ledger.balance(), DEPLOY_FUNDING);
        assert_eq!(portal.ledger.total_waves(), 0);
        assert!(portal.ledger.all_waves().is_empty());
    }

    #[test]
    fn test_total_waves() {
        let portal = deployed();
        send_two_waves(&portal);
        assert_eq!(portal.ledger.total_waves(), 2);
    }

    #[test]
    fn test_all_waves_in_submission_order() {
        let portal = deployed();
        send_two_waves(&portal);

        let waves = portal.ledger.all_waves();
        assert_eq!(waves[0].sender, participant(1));
        assert_eq!(waves[0].message, "This is wave #1");
        assert_eq!(waves[1].sender, participant(2));
        assert_eq!(waves[1].message, "This is wave #2");
    }

    #[test]
    fn test_balance_drops_by_one_unit_per_awarded_seed() {
        let portal = deployed();
        send_two_waves(&portal);

        let awarded = portal
            .ledger
            .all_waves()
            .iter()
            .filter(|w| w.seed <= DEFAULT_AWARD_THRESHOLD)
            .count() as Amount;

        assert_eq!(
            portal.ledger.balance(),
            DEPLOY_FUNDING - awarded * DEFAULT_PAYOUT_UNIT
        );
        assert_eq!(portal.treasury.total_paid(), awarded * DEFAULT_PAYOUT_UNIT);
    }

    #[test]
    fn test_resubmit_within_fifteen_minutes_reverts() {
        let portal = deployed();
        let user1 = participant(1);

        portal.wave(user1, "This is wave #1", T0).unwrap();
        let again = portal.wave(user1, "This is wave #2", T0 + 60);

        assert_eq!(again, Err(LedgerError::Denied { remaining_secs: 840 }));
        assert_eq!(portal.ledger.total_waves(), 1);
    }

    #[test]
    fn test_returning_after_cooldown_is_accepted() {
        let portal = deployed();
        let user1 = participant(1);

        portal.wave(user1, "morning", T0).unwrap();
        let later = portal.wave(user1, "afternoon", T0 + 900).unwrap();

        assert_eq!(later.total_waves, 2);
        assert_eq!(portal.ledger.waves_by(&user1).len(), 2);
        assert_eq!(portal.ledger.cooldown_remaining(&user1, T0 + 900), 900);
    }

    #[test]
    fn test_pool_drains_then_reports_underfunded() {
        let unit = DEFAULT_PAYOUT_UNIT;
        let portal = Portal::in_memory(LedgerConfig {
            initial_funding: unit,
            ..LedgerConfig::default()
        });
        let lucky = participant(7);
        let also_lucky = participant(8);

        let first = portal.time_where(&lucky, true, T0);
        let paid = portal.ledger.submit_wave(lucky, "first", first).unwrap();
        assert_eq!(paid.payout, PayoutOutcome::Transferred { amount: unit });
        assert_eq!(portal.ledger.balance(), 0);

        let second = portal.time_where(&also_lucky, true, T0);
        let dry = portal.ledger.submit_wave(also_lucky, "second", second).unwrap();
        assert_eq!(dry.payout, PayoutOutcome::InsufficientFunds);
        assert_eq!(portal.ledger.total_waves(), 2);
        assert_eq!(portal.treasury.paid(&also_lucky), 0);

        // Topping up lets the next awarded wave pay again
        portal.ledger.fund(unit).unwrap();
        let third = portal.time_where(&lucky, true, first + 900);
        let again = portal.ledger.submit_wave(lucky, "third", third).unwrap();
        assert!(again.payout.is_paid());
        assert_eq!(portal.treasury.paid(&lucky), 2 * unit);
    }

    #[test]
    fn test_one_round_decides_one_wave() {
        let portal = deployed();
        let round = portal.publish_round();

        portal
            .ledger
            .submit_wave(participant(1), "first on this round", T0)
            .unwrap();
        let late = portal.ledger.submit_wave(participant(2), "same round", T0 + 1);

        assert_eq!(
            late,
            Err(LedgerError::Entropy(EntropyError::RoundConsumed { round }))
        );
        assert_eq!(portal.ledger.total_waves(), 1);
        assert_eq!(portal.ledger.last_waved_at(&participant(2)), None);

        // The refused sender is not cooling down and goes through on the next round
        let next = portal.wave(participant(2), "next round", T0 + 2).unwrap();
        assert_eq!(next.total_waves, 2);
    }

    #[test]
    fn test_timing_against_a_public_round_pays_once() {
        let portal = deployed();
        portal.publish_round();
        let beacon = portal.entropy.unspent_beacon().unwrap();
        let randomizer = RewardRandomizer::new(DEFAULT_AWARD_THRESHOLD);

        // Every sender reads the published round and waits for a winning second
        let mut paid = 0;
        for n in 1..=50u8 {
            let sender = participant(n);
            let winning = (T0..)
                .find(|&t| randomizer.decide(&sender, t, &beacon.randomness).awarded)
                .unwrap();
            if let Ok(receipt) = portal.ledger.submit_wave(sender, "timed", winning) {
                if receipt.payout.is_paid() {
                    paid += 1;
                }
            }
        }

        assert_eq!(paid, 1);
        assert_eq!(portal.ledger.total_waves(), 1);
        assert_eq!(portal.ledger.balance(), DEPLOY_FUNDING - DEFAULT_PAYOUT_UNIT);
    }
}
