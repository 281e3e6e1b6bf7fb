//! Property tests for count analysis.

use chainsynth_hal::{BellProbabilities, CoherenceProfile, Counts, ExecutionResult};
use proptest::prelude::*;

fn two_bit_counts() -> impl Strategy<Value = Counts> {
    prop::array::uniform4(0u64..10_000)
        .prop_filter("at least one shot", |c| c.iter().sum::<u64>() > 0)
        .prop_map(|[a, b, c, d]| Counts::from_pairs([("00", a), ("01", b), ("10", c), ("11", d)]))
}

proptest! {
    #[test]
    fn bell_split_is_complete(counts in two_bit_counts()) {
        let result = ExecutionResult::from_counts(counts);
        let probs = BellProbabilities::from_result(&result).unwrap();
        prop_assert!((probs.bell + probs.not_bell - 1.0).abs() < 1e-12);
        prop_assert!((0.0..=1.0).contains(&probs.bell));
    }

    #[test]
    fn correlators_are_bounded(
        outcomes in prop::collection::vec((0u32..64, 1u64..100), 1..20),
    ) {
        let counts = Counts::from_pairs(
            outcomes.iter().map(|(bits, n)| (format!("{bits:06b}"), *n)),
        );
        let profile = CoherenceProfile::from_counts(&counts, 6).unwrap();
        prop_assert_eq!(profile.correlators.len(), 5);
        for c in &profile.correlators {
            prop_assert!((-1.0..=1.0).contains(c));
        }
    }
}
