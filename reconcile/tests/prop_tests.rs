use proptest::prelude::*;

use stakewatch_reconcile::StakeTransactions;
use stakewatch_types::{Amount, StakeTransaction, Timestamp, TxId};

fn stakes_from(times: &[u64]) -> StakeTransactions {
    times
        .iter()
        .enumerate()
        .map(|(i, &t)| {
            StakeTransaction::new(
                format!("tx{i}"),
                Timestamp::new(t),
                Amount::from_units(1),
                "RStakeAddress",
            )
        })
        .collect()
}

proptest! {
    /// sorted_ascending() is non-decreasing and keeps every record.
    #[test]
    fn sorted_ascending_is_ordered(times in proptest::collection::vec(0u64..1_000, 0..40)) {
        let stakes = stakes_from(&times);
        let sorted = stakes.sorted_ascending();
        prop_assert_eq!(sorted.len(), times.len());
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].timestamp() <= pair[1].timestamp());
        }
    }

    /// new_since() returns exactly the stakes newer than the anchor, oldest first.
    #[test]
    fn new_since_is_strictly_newer(
        times in proptest::collection::vec(0u64..1_000, 1..40),
        pick in any::<prop::sample::Index>(),
    ) {
        let stakes = stakes_from(&times);
        let anchor_idx = pick.index(times.len());
        let anchor_time = Timestamp::new(times[anchor_idx]);
        let fresh = stakes.new_since(&TxId::new(format!("tx{anchor_idx}")));

        let expected = times.iter().filter(|&&t| Timestamp::new(t) > anchor_time).count();
        prop_assert_eq!(fresh.len(), expected);
        for pair in fresh.windows(2) {
            prop_assert!(pair[0].timestamp() <= pair[1].timestamp());
        }
        prop_assert!(fresh.iter().all(|s| s.timestamp() > anchor_time));
    }

    /// An anchor that is not in the collection never yields new stakes.
    #[test]
    fn unknown_anchor_yields_nothing(
        times in proptest::collection::vec(0u64..1_000, 0..40),
        anchor in "[a-z]{1,12}",
    ) {
        let stakes = stakes_from(&times);
        prop_assert!(stakes.new_since(&TxId::new(anchor)).is_empty());
    }

    /// last_id() names a record with the greatest timestamp.
    #[test]
    fn last_id_is_the_newest(times in proptest::collection::vec(0u64..1_000, 1..40)) {
        let stakes = stakes_from(&times);
        let last = stakes.last_id();
        let newest = stakes.find_by_id(&last).unwrap().timestamp();
        prop_assert!(stakes.iter().all(|s| s.timestamp() <= newest));
    }
}
