//! # Ledger Properties
//!
//! Property tests over arbitrary submission sequences.
//!
//! Properties verified:
//! - Wave count equals the number of submissions that did not fail
//! - Accepted waves from one sender are at least one cooldown apart
//! - `all_waves` lists accepted waves in submission order
//! - Pool balance plus everything paid out equals what was put in
//! - Reward decisions are deterministic and within range

#[cfg(test)]
mod tests {
    use crate::fixtures::{participant, Portal};
    use proptest::prelude::*;
    use shared_types::entities::{Address, Amount};
    use std::collections::HashMap;
    use wave_ledger::domain::{LedgerConfig, PayoutOutcome, RewardRandomizer, WaveRecord};
    use wave_ledger::ports::WaveLedgerApi;

    const COOLDOWN: u64 = 900;
    const UNIT: Amount = 10;

    /// One step: which participant, how far the clock moves, and which message.
    fn step() -> impl Strategy<Value = (u8, u64, usize)> {
        (0u8..4, 0u64..1_200, 0usize..4)
    }

    fn message(choice: usize) -> &'static str {
        match choice {
            0 => "",
            1 => "gm",
            2 => "waving at you",
            _ => "👋",
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_sequence_invariants(
            steps in prop::collection::vec(step(), 1..60),
            funding in 0u128..100,
        ) {
            let portal = Portal::in_memory(LedgerConfig {
                payout_unit: UNIT,
                initial_funding: funding,
                ..LedgerConfig::default()
            });

            let mut now = 1_700_000_000u64;
            let mut accepted: Vec<WaveRecord> = Vec::new();
            let mut last: HashMap<Address, u64> = HashMap::new();
            let mut paid: Amount = 0;

            for (who, dt, msg) in steps {
                now += dt;
                let sender = participant(who);
                let balance_before = portal.ledger.balance();

                match portal.wave(sender, message(msg), now) {
                    Ok(receipt) => {
                        if let Some(prev) = last.get(&sender) {
                            prop_assert!(now - prev >= COOLDOWN);
                        }
                        last.insert(sender, now);
                        accepted.push(portal.ledger.wave(receipt.total_waves - 1).unwrap());
                        prop_assert_eq!(receipt.total_waves, accepted.len());

                        match receipt.payout {
                            PayoutOutcome::Transferred { amount } => {
                                prop_assert_eq!(amount, UNIT);
                                prop_assert_eq!(portal.ledger.balance(), balance_before - UNIT);
                                paid += amount;
                            }
                            _ => prop_assert_eq!(portal.ledger.balance(), balance_before),
                        }
                    }
                    Err(_) => prop_assert_eq!(portal.ledger.balance(), balance_before),
                }
            }

            prop_assert_eq!(portal.ledger.total_waves(), accepted.len());
            prop_assert_eq!(portal.ledger.all_waves(), accepted);
            prop_assert_eq!(portal.ledger.balance() + paid, funding);
            prop_assert_eq!(portal.treasury.total_paid(), paid);
        }

        #[test]
        fn prop_decide_is_pure(
            sender in any::<[u8; 20]>(),
            now in any::<u64>(),
            entropy in any::<[u8; 32]>(),
            threshold in 0u8..100,
        ) {
            let randomizer = RewardRandomizer::new(threshold);
            let first = randomizer.decide(&sender, now, &entropy);
            let second = randomizer.decide(&sender, now, &entropy);

            prop_assert_eq!(first, second);
            prop_assert!(first.seed < 100);
            prop_assert_eq!(first.awarded, first.seed <= threshold);
        }

        #[test]
        fn prop_cooldown_remaining_matches_denial(
            offset in 0u64..2_000,
        ) {
            let portal = Portal::in_memory(LedgerConfig::default());
            let sender = participant(9);
            let t0 = 1_700_000_000u64;
            portal.wave(sender, "first", t0).unwrap();

            let remaining = portal.ledger.cooldown_remaining(&sender, t0 + offset);
            let result = portal.wave(sender, "second", t0 + offset);

            prop_assert_eq!(remaining, COOLDOWN.saturating_sub(offset));
            prop_assert_eq!(result.is_ok(), remaining == 0);
        }
    }
}
