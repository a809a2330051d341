//! Property tests for the comparison core.
//!
//! These check the invariants that must hold for any item set and any
//! sequence of edits, rather than hand-picked examples:
//! 1. N items always yield N(N-1)/2 pairs, each unordered pair once
//! 2. Every decided cell is the exact inverse of its mirror
//! 3. Accepted input renders back as typed
//! 4. Recording judgments never lowers completion

use proptest::prelude::*;

use pairwise_engine::domain::comparison::{
    ComparisonError, ComparisonMatrix, ItemSet, JudgmentValue, PairGenerator, ValueError,
};

// =============================================================================
// Strategies
// =============================================================================

fn item_set(n: usize) -> ItemSet {
    ItemSet::from_labels((0..n).map(|i| format!("item-{}", i))).unwrap()
}

/// A judgment as (value, favor the first item?)
fn judgment() -> impl Strategy<Value = (JudgmentValue, bool)> {
    let value = prop_oneof![
        (1u32..=9).prop_map(JudgmentValue::integer),
        (2u64..=50, 1u64..=10)
            .prop_filter("fraction must exceed 1", |(n, d)| n > d)
            .prop_map(|(numerator, denominator)| JudgmentValue::Fraction {
                numerator,
                denominator,
            }),
    ];
    (value, any::<bool>())
}

// =============================================================================
// Pair generation
// =============================================================================

proptest! {
    #[test]
    fn pair_count_is_n_choose_two(n in 2usize..16) {
        let set = item_set(n);
        let pairs = PairGenerator::for_set(&set);

        prop_assert_eq!(pairs.len(), n * (n - 1) / 2);
        prop_assert_eq!(pairs.len(), PairGenerator::pair_count(n));

        for (index, pair) in pairs.iter().enumerate() {
            prop_assert_eq!(pair.index, index);
            let a = set.position(&pair.item_a.id).unwrap();
            let b = set.position(&pair.item_b.id).unwrap();
            prop_assert!(a < b, "pair {} is not in item order", index);
        }
        for (i, first) in pairs.iter().enumerate() {
            for second in &pairs[i + 1..] {
                prop_assert!(!first.joins(&second.item_a.id, &second.item_b.id));
            }
        }
    }
}

#[test]
fn fewer_than_two_items_is_rejected() {
    assert!(matches!(
        ItemSet::from_labels(["solo"]),
        Err(ComparisonError::InvalidItemSet { count: 1 })
    ));
}

// =============================================================================
// Reciprocal invariant
// =============================================================================

proptest! {
    #[test]
    fn decided_cells_are_reciprocal(
        n in 2usize..8,
        picks in prop::collection::vec(judgment(), 1..40),
    ) {
        let mut matrix = ComparisonMatrix::new(item_set(n));
        let total = matrix.total_pairs();

        for (step, (value, favor_first)) in picks.into_iter().enumerate() {
            let index = step % total;
            let pair = matrix.pair(index).unwrap().clone();
            let favored = if favor_first { pair.item_a.id } else { pair.item_b.id };
            matrix.set_judgment(index, value, &favored).unwrap();
        }

        let grid = matrix.dense();
        for i in 0..n {
            prop_assert_eq!(grid[i][i], Some(1.0));
            for j in (i + 1)..n {
                match (grid[i][j], grid[j][i]) {
                    (Some(x), Some(y)) => prop_assert!((x * y - 1.0).abs() < 1e-12),
                    (None, None) => {}
                    other => prop_assert!(false, "half-decided cell {:?}", other),
                }
            }
        }
    }

    #[test]
    fn favored_item_sees_the_value_as_entered((value, _) in judgment()) {
        let mut matrix = ComparisonMatrix::new(item_set(2));
        let pair = matrix.pair(0).unwrap().clone();
        matrix.set_judgment(0, value, &pair.item_b.id).unwrap();

        prop_assert_eq!(matrix.value_from(&pair.item_b.id, 0).unwrap(), value.magnitude());
        prop_assert_eq!(matrix.value_from(&pair.item_a.id, 0).unwrap(), value.reciprocal());
    }
}

// =============================================================================
// Value codec
// =============================================================================

proptest! {
    #[test]
    fn fractions_render_as_typed(denominator in 1u64..500, extra in 1u64..500) {
        let numerator = denominator + extra;
        let raw = format!("{}/{}", numerator, denominator);
        let value = JudgmentValue::parse(&raw).unwrap();

        prop_assert_eq!(value, JudgmentValue::Fraction { numerator, denominator });
        prop_assert_eq!(value.format(), raw);
    }

    #[test]
    fn padded_integers_parse(n in 2u32..=9, left in 0usize..3, right in 0usize..3) {
        let raw = format!("{}{}{}", " ".repeat(left), n, " ".repeat(right));
        let value = JudgmentValue::parse(&raw).unwrap();
        prop_assert_eq!(value.format(), n.to_string());
    }

    #[test]
    fn values_at_or_below_one_are_out_of_range(hundredths in 0u32..=100) {
        let raw = format!("{}.{:02}", hundredths / 100, hundredths % 100);
        let is_out_of_range = matches!(
            JudgmentValue::parse(&raw),
            Err(ValueError::OutOfRange { .. })
        );
        prop_assert!(is_out_of_range);
    }

    #[test]
    fn zero_denominator_is_division_by_zero(numerator in 0u64..1000) {
        let is_division_by_zero = matches!(
            JudgmentValue::parse(&format!("{}/0", numerator)),
            Err(ValueError::DivisionByZero { .. })
        );
        prop_assert!(is_division_by_zero);
    }

    #[test]
    fn letters_are_syntax_errors(raw in "[a-zA-Z]{1,8}") {
        let is_syntax = matches!(JudgmentValue::parse(&raw), Err(ValueError::Syntax { .. }));
        prop_assert!(is_syntax);
    }
}

// =============================================================================
// Completion
// =============================================================================

proptest! {
    #[test]
    fn completion_never_decreases(
        n in 2usize..7,
        picks in prop::collection::vec((0usize..64, judgment()), 0..60),
    ) {
        let mut matrix = ComparisonMatrix::new(item_set(n));
        let total = matrix.total_pairs();
        let mut decided = 0;
        let mut progress = matrix.progress();

        for (slot, (value, favor_first)) in picks {
            let index = slot % total;
            let pair = matrix.pair(index).unwrap().clone();
            let favored = if favor_first { pair.item_a.id } else { pair.item_b.id };
            let first_time = matrix.set_judgment(index, value, &favored).unwrap();

            let now = matrix.decided_count();
            prop_assert_eq!(now, if first_time { decided + 1 } else { decided });
            prop_assert!(matrix.progress() >= progress);
            decided = now;
            progress = matrix.progress();
        }

        prop_assert_eq!(matrix.is_complete(), decided == total);
        prop_assert_eq!(matrix.progress().value() == 100, decided == total);
    }
}
