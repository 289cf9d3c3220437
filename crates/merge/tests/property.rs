use lattice_merge::{merge_override, merge_with};
use proptest::prelude::*;
use std::collections::BTreeMap;

fn mapping() -> impl Strategy<Value = BTreeMap<u8, i64>> {
    proptest::collection::btree_map(any::<u8>(), -1000i64..1000, 0..16)
}

proptest! {
    #[test]
    fn override_result_holds_every_key_exactly_once(a in mapping(), b in mapping(), c in mapping()) {
        let merged = merge_override([&a, &b, &c]);

        for key in a.keys().chain(b.keys()).chain(c.keys()) {
            prop_assert!(merged.contains_key(key));
        }
        for key in merged.keys() {
            prop_assert!(a.contains_key(key) || b.contains_key(key) || c.contains_key(key));
        }
    }

    #[test]
    fn override_takes_the_rightmost_occurrence(a in mapping(), b in mapping(), c in mapping()) {
        let merged = merge_override([&a, &b, &c]);

        for (key, value) in &merged {
            let expected = c.get(key).or_else(|| b.get(key)).or_else(|| a.get(key));
            prop_assert_eq!(Some(value), expected);
        }
    }

    #[test]
    fn override_equals_merge_with_override_combiner(a in mapping(), b in mapping()) {
        prop_assert_eq!(merge_override([&a, &b]), merge_with(|_, new| new, [&a, &b]));
    }

    #[test]
    fn additive_combiner_sums_across_all_occurrences(a in mapping(), b in mapping(), c in mapping()) {
        let merged = merge_with(|old, new| old + new, [&a, &b, &c]);

        for (key, value) in &merged {
            let expected: i64 = [&a, &b, &c].into_iter().filter_map(|m| m.get(key)).sum();
            prop_assert_eq!(*value, expected);
        }
    }

    #[test]
    fn merge_is_a_left_fold(maps in proptest::collection::vec(mapping(), 0..5)) {
        // Reference: naive pairwise fold with a non-commutative combiner.
        let combiner = |old: i64, new: i64| old.wrapping_mul(31).wrapping_add(new);

        let mut expected: BTreeMap<u8, i64> = BTreeMap::new();
        for map in &maps {
            for (key, value) in map {
                let resolved = match expected.remove(key) {
                    Some(accumulated) => combiner(accumulated, *value),
                    None => *value,
                };
                expected.insert(*key, resolved);
            }
        }

        prop_assert_eq!(merge_with(combiner, &maps), expected);
    }

    #[test]
    fn inputs_survive_merging_untouched(a in mapping(), b in mapping()) {
        let (a_before, b_before) = (a.clone(), b.clone());

        let _ = merge_with(|old, new| old.min(new), [&a, &b]);

        prop_assert_eq!(a, a_before);
        prop_assert_eq!(b, b_before);
    }
}
