use combinate::combination::rank::{binomial, rank, unrank};
use combinate::{combinations, power_set};
use proptest::prelude::*;

/// `(n, k, rank)` with `k <= n` and `rank < C(n, k)`.
fn ranked_combination() -> impl Strategy<Value = (usize, usize, u64)> {
    (0usize..40)
        .prop_flat_map(|n| (Just(n), 0..=n))
        .prop_flat_map(|(n, k)| {
            let len = binomial(n, k).expect("C(n, k) fits for n < 40");
            (Just(n), Just(k), 0..len)
        })
}

proptest! {
    #[test]
    fn power_set_is_a_bijection_onto_masks(n in 0usize..11) {
        let source: Vec<usize> = (0..n).collect();
        let powers = power_set(&source).expect("power set builds");

        let mut expected = 0u64;
        for view in powers.iter() {
            let bits: Vec<usize> = (0..n).filter(|&i| (expected >> i) & 1 == 1).collect();
            let elements: Vec<usize> = view.iter().copied().collect();
            prop_assert_eq!(elements, bits);
            prop_assert_eq!(view.to_mask(), Some(expected));
            expected += 1;
        }
        prop_assert_eq!(expected, 1u64 << n);
    }

    #[test]
    fn combinations_are_strictly_lexicographic(n in 0usize..10, k in 0usize..11) {
        let source: Vec<u8> = vec![0; n];
        let combos = combinations(&source, k).expect("combinations build");

        let tuples: Vec<Vec<usize>> = combos.iter().map(|view| view.indices().collect()).collect();
        prop_assert_eq!(tuples.len() as u64, binomial(n, k).expect("fits"));
        for tuple in &tuples {
            prop_assert_eq!(tuple.len(), k);
            prop_assert!(tuple.windows(2).all(|pair| pair[0] < pair[1]));
        }
        for pair in tuples.windows(2) {
            prop_assert!(pair[0] < pair[1], "{:?} !< {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn power_set_advance_retreat_round_trip(n in 1usize..62, seed in any::<u64>()) {
        let source = vec![0u8; n];
        let powers = power_set(&source).expect("power set builds");
        let mask = seed % powers.len();

        let original = powers.cursor_at(mask).expect("in range");
        let mut cursor = original;
        cursor.advance().expect("not at end");
        cursor.retreat().expect("not at begin");
        prop_assert_eq!(cursor, original);

        if mask > 0 {
            cursor.retreat().expect("not at begin");
            cursor.advance().expect("not at end");
            prop_assert_eq!(cursor, original);
        }
    }

    #[test]
    fn power_set_distance_and_jump_agree(n in 0usize..62, a in any::<u64>(), b in any::<u64>()) {
        let source = vec![0u8; n];
        let powers = power_set(&source).expect("power set builds");
        let from = powers.cursor_at(a % (powers.len() + 1)).expect("in range");
        let to = powers.cursor_at(b % (powers.len() + 1)).expect("in range");

        let distance = from.distance_to(&to).expect("same source");
        prop_assert_eq!(distance, to.mask() as i64 - from.mask() as i64);

        let mut jumped = from;
        jumped.advance_by(distance).expect("target is in range");
        prop_assert_eq!(jumped, to);
    }

    #[test]
    fn combination_advance_retreat_round_trip((n, k, position) in ranked_combination()) {
        let source = vec![0u8; n];
        let combos = combinations(&source, k).expect("combinations build");
        let original = combos.cursor_at(position).expect("in range");

        let mut cursor = original.clone();
        cursor.advance().expect("not at end");
        cursor.retreat().expect("not at begin");
        prop_assert_eq!(&cursor, &original);

        if position > 0 {
            cursor.retreat().expect("not at begin");
            prop_assert_eq!(cursor.rank(), Some(position - 1));
            cursor.advance().expect("not at end");
            prop_assert_eq!(&cursor, &original);
        }
    }

    #[test]
    fn rank_inverts_unrank((n, k, position) in ranked_combination()) {
        let indices = unrank(n, k, position).expect("rank in range");
        prop_assert_eq!(indices.len(), k);
        prop_assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert_eq!(rank(n, &indices), Some(position));
    }
}
