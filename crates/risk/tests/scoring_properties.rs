use leasecheck_core::{ContractType, ScanInput};
use leasecheck_risk::{classify, RiskScorer, RiskTier};
use proptest::prelude::*;

const FRAGMENTS: &[&str] = &[
    "mold",
    "water leak",
    "defect",
    "odor",
    "smell",
    "floor noise",
    "insect",
    "cockroach",
    "electrical",
    "wall crack",
    "haunted",
    "sunny balcony",
    "quiet street",
];

fn contract_type() -> impl Strategy<Value = ContractType> {
    prop_oneof![
        Just(ContractType::FullDeposit),
        Just(ContractType::PartialDeposit),
        Just(ContractType::Monthly),
    ]
}

fn memo_parts() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..8)
}

proptest! {
    #[test]
    fn zero_deposit_always_scores_zero(
        rent in 0u64..10_000,
        kind in contract_type(),
        memo in ".*",
    ) {
        let scorer = RiskScorer::default();
        let result = scorer.score(&ScanInput::new(0, rent, kind, Some(&memo)));
        prop_assert_eq!(result.score, 0);
        prop_assert!(result.detected_issues.is_empty());
    }

    #[test]
    fn score_stays_in_range(
        deposit in any::<u64>(),
        rent in any::<u64>(),
        kind in contract_type(),
        parts in memo_parts(),
    ) {
        let scorer = RiskScorer::default();
        let result = scorer.score(&ScanInput::new(deposit, rent, kind, Some(&parts.join(" "))));
        prop_assert!(result.score <= 100);
    }

    #[test]
    fn score_is_monotonic_in_deposit(
        low in 0u64..20_000,
        bump in 0u64..20_000,
        rent in 0u64..200,
        kind in contract_type(),
        parts in memo_parts(),
    ) {
        let scorer = RiskScorer::default();
        let memo = parts.join(" ");
        let a = scorer.score(&ScanInput::new(low, rent, kind, Some(&memo)));
        let b = scorer.score(&ScanInput::new(low + bump, rent, kind, Some(&memo)));
        prop_assert!(a.score <= b.score);
    }

    #[test]
    fn keyword_order_does_not_matter(
        deposit in 1u64..20_000,
        rent in 0u64..200,
        kind in contract_type(),
        parts in memo_parts(),
    ) {
        let scorer = RiskScorer::default();
        let mut reversed = parts.clone();
        reversed.reverse();
        let forward = scorer.score(&ScanInput::new(deposit, rent, kind, Some(&parts.join(" | "))));
        let backward = scorer.score(&ScanInput::new(deposit, rent, kind, Some(&reversed.join(" | "))));
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn scoring_is_idempotent(
        deposit in any::<u64>(),
        rent in any::<u64>(),
        kind in contract_type(),
        memo in ".*",
    ) {
        let scorer = RiskScorer::default();
        let input = ScanInput::new(deposit, rent, kind, Some(&memo));
        prop_assert_eq!(scorer.score(&input), scorer.score(&input));
    }

    #[test]
    fn classification_is_monotonic(a in 0u32..=100, b in 0u32..=100) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(classify(lo).tier <= classify(hi).tier);
    }
}

#[test]
fn worked_examples() {
    let scorer = RiskScorer::default();

    let leaky = scorer.score(&ScanInput::new(
        3000,
        0,
        ContractType::FullDeposit,
        Some("mold on the wall and a water leak"),
    ));
    assert_eq!(leaky.score, 90);
    assert_eq!(
        leaky.issues().collect::<Vec<_>>(),
        vec!["mold", "water-leak"]
    );
    assert_eq!(classify(leaky.score).tier, RiskTier::High);

    let empty = scorer.score(&ScanInput::new(0, 120, ContractType::Monthly, Some("mold")));
    assert_eq!(empty.score, 0);
    assert!(empty.detected_issues.is_empty());

    let big = scorer.score(&ScanInput::new(9000, 50, ContractType::Monthly, None));
    assert_eq!(big.score, 85);
    assert_eq!(classify(big.score).tier, RiskTier::High);
}
