use graphremap_core::{remap, DenseId, RawId};
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

fn raw_ids() -> impl Strategy<Value = Vec<RawId>> {
    // Small value space so duplicates are common.
    proptest::collection::vec(-50i64..50, 0..200)
}

proptest! {
    #[test]
    fn dense_ids_are_contiguous_from_start(ids in raw_ids(), start in 0u64..1_000_000) {
        let (dense, lookup) = remap(ids.iter().copied(), start);

        let distinct: BTreeSet<RawId> = ids.iter().copied().collect();
        prop_assert_eq!(lookup.len(), distinct.len());
        prop_assert_eq!(dense.len(), ids.len());

        let assigned: BTreeSet<DenseId> = lookup.iter().map(|(_, d)| d).collect();
        let expected: BTreeSet<DenseId> = (start..start + distinct.len() as DenseId).collect();
        prop_assert_eq!(assigned, expected);
    }

    #[test]
    fn first_seen_gets_the_lower_id(ids in raw_ids()) {
        let (dense, lookup) = remap(ids.iter().copied(), 0);

        let mut first_seen: HashMap<RawId, usize> = HashMap::new();
        for (pos, raw) in ids.iter().enumerate() {
            first_seen.entry(*raw).or_insert(pos);
        }
        for (x, px) in &first_seen {
            for (y, py) in &first_seen {
                if px < py {
                    prop_assert!(lookup.get(*x).unwrap() < lookup.get(*y).unwrap());
                }
            }
        }
        for (raw, id) in ids.iter().zip(&dense) {
            prop_assert_eq!(lookup.get(*raw), Some(*id));
        }
    }

    #[test]
    fn remapping_dense_output_preserves_structure(ids in raw_ids()) {
        let (dense, _) = remap(ids.iter().copied(), 0);
        let (again, _) = remap(dense.iter().map(|&d| d as RawId), 0);
        prop_assert_eq!(again, dense);
    }
}
