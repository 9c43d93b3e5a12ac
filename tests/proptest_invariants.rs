//! Property-based invariant tests for tiles and groups.
//!
//! Generates random pip pairs, seeds, and operation inputs and verifies
//! the structural invariants: flip involution, orientation-insensitive
//! equality, full-set composition, sort ordering, and partition
//! conservation.

use domino_core::{DominoGroup, Tile};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn pip() -> impl Strategy<Value = u8> {
    0u8..=6
}

/// A group of up to 24 arbitrary tiles.
fn group() -> impl Strategy<Value = DominoGroup> {
    prop::collection::vec((pip(), pip()), 0..24).prop_map(|pairs| {
        DominoGroup::from(
            pairs
                .into_iter()
                .map(|(l, r)| Tile::new(l, r).unwrap())
                .collect::<Vec<_>>(),
        )
    })
}

proptest! {
    #[test]
    fn construction_preserves_pips(l in pip(), r in pip()) {
        let t = Tile::new(l, r).unwrap();
        prop_assert_eq!(t.left(), l);
        prop_assert_eq!(t.right(), r);
    }

    #[test]
    fn out_of_range_pips_rejected(l in 7u8..=255, r in pip()) {
        prop_assert!(Tile::new(l, r).is_err());
        prop_assert!(Tile::new(r, l).is_err());
        let mut t = Tile::new(r, r).unwrap();
        prop_assert!(t.set_left(l).is_err());
        prop_assert!(t.set_right(l).is_err());
        prop_assert_eq!(t.left(), r);
        prop_assert_eq!(t.right(), r);
    }

    #[test]
    fn flip_is_involution(l in pip(), r in pip()) {
        let t = Tile::new(l, r).unwrap();
        let twice = t.flipped().flipped();
        prop_assert_eq!(twice.left(), t.left());
        prop_assert_eq!(twice.right(), t.right());
    }

    #[test]
    fn tile_matches_its_flip(l in pip(), r in pip()) {
        let t = Tile::new(l, r).unwrap();
        prop_assert!(t.matches(&t.flipped()));
        prop_assert_eq!(t, t.flipped());
    }

    #[test]
    fn matching_is_symmetric(a in (pip(), pip()), b in (pip(), pip())) {
        let x = Tile::new(a.0, a.1).unwrap();
        let y = Tile::new(b.0, b.1).unwrap();
        prop_assert_eq!(x.matches(&y), y.matches(&x));
    }

    #[test]
    fn render_parse_agree(l in pip(), r in pip()) {
        let t = Tile::new(l, r).unwrap();
        prop_assert_eq!(t.to_string(), format!("({}|{})", l, r));
        let parsed: Tile = format!("{} {}", l, r).parse().unwrap();
        prop_assert_eq!(parsed.left(), l);
        prop_assert_eq!(parsed.right(), r);
    }

    #[test]
    fn full_set_size_scales_with_repeat(repeat in 1usize..4) {
        let set = DominoGroup::full_set(repeat);
        prop_assert_eq!(set.len(), 28 * repeat);
        // Every tile appears exactly `repeat` times (orientation-insensitive)
        let mut set = set;
        for i in 0..=6u8 {
            for j in i..=6u8 {
                for _ in 0..repeat {
                    prop_assert!(set.remove_matching(i, j).is_ok());
                }
                prop_assert!(set.remove_matching(i, j).is_err());
            }
        }
        prop_assert!(set.is_empty());
    }

    #[test]
    fn random_group_size_and_range(n in 0usize..64, seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let g = DominoGroup::random(n, &mut rng);
        prop_assert_eq!(g.len(), n);
        for t in &g {
            prop_assert!(t.left() <= 6 && t.right() <= 6);
        }
    }

    #[test]
    fn sort_yields_non_decreasing_sums(g in group()) {
        let mut g = g;
        let before = g.len();
        g.sort();
        prop_assert_eq!(g.len(), before);
        let sums: Vec<u8> = g.iter().map(Tile::pip_sum).collect();
        prop_assert!(sums.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn partition_conserves_tiles(g in group(), value in pip()) {
        let mut receiver = g.clone();
        let extracted = receiver.extract_with_pip(value);

        prop_assert_eq!(extracted.len() + receiver.len(), g.len());
        for t in &extracted {
            prop_assert!(t.has_pip(value));
        }
        for t in &receiver {
            prop_assert!(!t.has_pip(value));
        }

        // Both halves preserve original relative order: merging them back
        // by the original predicate reproduces the source sequence.
        let mut ex = extracted.iter();
        let mut kept = receiver.iter();
        for t in &g {
            let side = if t.has_pip(value) { ex.next() } else { kept.next() };
            let side = side.expect("partition lost a tile");
            prop_assert_eq!(side.left(), t.left());
            prop_assert_eq!(side.right(), t.right());
        }
    }

    #[test]
    fn remove_at_drops_exactly_one(g in group(), index in 0usize..24) {
        let mut g = g;
        let len = g.len();
        let result = g.remove_at(index);
        if index < len {
            prop_assert!(result.is_ok());
            prop_assert_eq!(g.len(), len - 1);
        } else {
            prop_assert!(result.is_err());
            prop_assert_eq!(g.len(), len);
        }
    }

    #[test]
    fn remove_random_accounting(seed in any::<u64>(), n in 1usize..32) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut g = DominoGroup::random(n, &mut rng);
        let removed = g.remove_random(&mut rng).unwrap();
        prop_assert_eq!(g.len(), n - 1);
        prop_assert!(removed.left() <= 6 && removed.right() <= 6);
    }
}
