//! Property tests for the insertion-ordered keyed store.

use proptest::prelude::*;

use athenaeum::infrastructure::repositories::KeyedStore;

#[derive(Debug, Clone)]
enum Op {
    Upsert(u8, u32),
    Remove(u8),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0u8..16, any::<u32>()).prop_map(|(k, v)| Op::Upsert(k, v)),
        1 => (0u8..16).prop_map(Op::Remove),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the store behaves like an ordered association list.
    #[test]
    fn property_matches_association_list(ops in proptest::collection::vec(op(), 0..64)) {
        let mut store: KeyedStore<u8, (u8, u32)> = KeyedStore::new();
        let mut model: Vec<(u8, u32)> = Vec::new();

        for op in ops {
            match op {
                Op::Upsert(k, v) => {
                    let prev = store.upsert(k, (k, v));
                    match model.iter_mut().find(|(mk, _)| *mk == k) {
                        Some(slot) => {
                            prop_assert_eq!(prev, Some(*slot));
                            slot.1 = v;
                        }
                        None => {
                            prop_assert_eq!(prev, None);
                            model.push((k, v));
                        }
                    }
                }
                Op::Remove(k) => {
                    let removed = store.remove(&k);
                    let pos = model.iter().position(|(mk, _)| *mk == k);
                    prop_assert_eq!(removed, pos.map(|i| model.remove(i)));
                }
            }

            prop_assert_eq!(store.values(), model.as_slice());
            prop_assert_eq!(store.len(), model.len());
            for (k, v) in &model {
                prop_assert_eq!(store.get(k), Some(&(*k, *v)));
            }
        }
    }
}
