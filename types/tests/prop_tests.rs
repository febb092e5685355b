use proptest::prelude::*;

use stakewatch_types::{Amount, Timestamp, TxId};

proptest! {
    /// Timestamp ordering: new(a) <= new(b) iff a <= b.
    #[test]
    fn timestamp_ordering(a in 0u64..u64::MAX, b in 0u64..u64::MAX) {
        let ta = Timestamp::new(a);
        let tb = Timestamp::new(b);
        prop_assert_eq!(ta <= tb, a <= b);
        prop_assert_eq!(ta == tb, a == b);
    }

    /// Whole-unit amounts survive the coin conversion exactly.
    #[test]
    fn amount_units_survive_coin_conversion(units in -10_000_000_000_000i64..10_000_000_000_000i64) {
        let amount = Amount::from_units(units);
        let back = Amount::from_coins(amount.as_coins()).unwrap();
        prop_assert_eq!(back, amount);
    }

    /// Amount display always carries exactly eight decimals.
    #[test]
    fn amount_display_has_eight_decimals(units in any::<i64>()) {
        let shown = Amount::from_units(units).to_string();
        let decimals = shown.rsplit('.').next().unwrap();
        prop_assert_eq!(decimals.len(), 8);
    }

    /// TxId is transparent on the wire.
    #[test]
    fn txid_serializes_as_plain_string(raw in "[0-9a-f]{0,64}") {
        let id = TxId::new(raw.clone());
        prop_assert_eq!(serde_json::to_string(&id).unwrap(), serde_json::to_string(&raw).unwrap());
        prop_assert_eq!(id.is_empty(), raw.is_empty());
    }
}
