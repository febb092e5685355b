use proptest::prelude::*;

use stakewatch_store::{Checkpoint, CheckpointStore};
use stakewatch_store_file::FileCheckpointStore;
use stakewatch_types::TxId;

proptest! {
    /// save() followed by load() reproduces the same anchor and counter.
    #[test]
    fn checkpoint_file_round_trip(count in 0u64..u64::MAX, anchor in "[0-9a-f]{0,64}") {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCheckpointStore::open(dir.path().join("tx_history.json"));
        let cp = Checkpoint::new(count.to_string(), TxId::new(anchor));
        store.save(&cp).unwrap();
        prop_assert_eq!(store.load().unwrap(), cp);
    }

    /// Arbitrary garbage never makes load() fail; it resets to defaults.
    #[test]
    fn garbage_resets_to_defaults(garbage in proptest::collection::vec(any::<u8>(), 0..256)) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tx_history.json");
        std::fs::write(&path, &garbage).unwrap();
        let store = FileCheckpointStore::open(path);
        let loaded = store.load().unwrap();
        // A random byte string that happens to be a valid document is astronomically unlikely.
        prop_assert_eq!(loaded, Checkpoint::default());
    }
}
