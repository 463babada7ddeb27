// Unit tests for risk classification and summary statistics.
//
// Tests isolated pure functions: RiskLevel and PlagiarismBadge boundary
// conditions, SummaryStats aggregation, and threshold parsing fallbacks.

use simcheck::config::{parse_threshold, DEFAULT_THRESHOLD};
use simcheck::scoring::risk::{PlagiarismBadge, RiskLevel, ThresholdTable, RISK_TABLE};
use simcheck::scoring::summary::SummaryStats;
use simcheck::similarity::ranking::{sort_by_score, PairResult};

// ============================================================
// RiskLevel::from_score — boundary conditions
// ============================================================

#[test]
fn risk_exact_boundary_high() {
    assert_eq!(RiskLevel::from_score(85.0), RiskLevel::High);
}

#[test]
fn risk_just_below_high() {
    assert_eq!(RiskLevel::from_score(84.999), RiskLevel::Medium);
}

#[test]
fn risk_exact_boundary_medium() {
    assert_eq!(RiskLevel::from_score(70.0), RiskLevel::Medium);
}

#[test]
fn risk_just_below_medium() {
    assert_eq!(RiskLevel::from_score(69.999), RiskLevel::Mild);
}

#[test]
fn risk_exact_boundary_mild() {
    assert_eq!(RiskLevel::from_score(50.0), RiskLevel::Mild);
}

#[test]
fn risk_just_below_mild() {
    assert_eq!(RiskLevel::from_score(49.999), RiskLevel::Safe);
}

#[test]
fn risk_extremes() {
    assert_eq!(RiskLevel::from_score(0.0), RiskLevel::Safe);
    assert_eq!(RiskLevel::from_score(100.0), RiskLevel::High);
}

#[test]
fn risk_nan_falls_to_safe() {
    // NaN fails every >= comparison, so it lands on the floor label
    assert_eq!(RiskLevel::from_score(f64::NAN), RiskLevel::Safe);
}

#[test]
fn risk_is_monotonic() {
    let mut previous = RiskLevel::Safe;
    for tenth in 0..=1000 {
        let level = RiskLevel::from_score(tenth as f64 / 10.0);
        assert!(level >= previous, "risk dropped at {}", tenth as f64 / 10.0);
        previous = level;
    }
}

#[test]
fn risk_labels() {
    assert_eq!(RiskLevel::High.to_string(), "HIGH RISK");
    assert_eq!(RiskLevel::Medium.to_string(), "MEDIUM RISK");
    assert_eq!(RiskLevel::Mild.to_string(), "MILD SIMILARITY");
    assert_eq!(RiskLevel::Safe.to_string(), "SAFE");
}

#[test]
fn risk_table_is_what_from_score_uses() {
    for score in [0.0, 49.9, 50.0, 70.0, 84.9, 85.0, 99.0] {
        assert_eq!(RISK_TABLE.classify(score), RiskLevel::from_score(score));
    }
}

// ============================================================
// PlagiarismBadge::from_score — separate cutoffs for the top match
// ============================================================

#[test]
fn badge_boundaries() {
    assert_eq!(PlagiarismBadge::from_score(90.0), PlagiarismBadge::Plagiarized);
    assert_eq!(PlagiarismBadge::from_score(89.99), PlagiarismBadge::HighlySimilar);
    assert_eq!(PlagiarismBadge::from_score(75.0), PlagiarismBadge::HighlySimilar);
    assert_eq!(PlagiarismBadge::from_score(74.99), PlagiarismBadge::PossiblyInspired);
    assert_eq!(PlagiarismBadge::from_score(50.0), PlagiarismBadge::PossiblyInspired);
    assert_eq!(PlagiarismBadge::from_score(49.99), PlagiarismBadge::LikelyOriginal);
}

#[test]
fn badge_and_risk_disagree_between_85_and_90() {
    // 87% is already HIGH RISK per pair, but not yet "Plagiarized" as a badge
    assert_eq!(RiskLevel::from_score(87.0), RiskLevel::High);
    assert_eq!(PlagiarismBadge::from_score(87.0), PlagiarismBadge::HighlySimilar);
}

#[test]
fn custom_threshold_table() {
    static STRICT: [(f64, RiskLevel); 1] = [(30.0, RiskLevel::High)];
    let table = ThresholdTable::new(&STRICT, RiskLevel::Safe);
    assert_eq!(table.classify(30.0), RiskLevel::High);
    assert_eq!(table.classify(29.0), RiskLevel::Safe);
}

// ============================================================
// SummaryStats::compute
// ============================================================

fn pair(a: &str, b: &str, score: f64) -> PairResult {
    PairResult::new(a, b, score)
}

#[test]
fn summary_of_three_scores() {
    let mut results = vec![
        pair("a", "b", 20.0),
        pair("a", "c", 60.0),
        pair("b", "c", 100.0),
    ];
    sort_by_score(&mut results);

    let s = SummaryStats::compute(3, &results).unwrap();
    assert_eq!(s.total_documents, 3);
    assert_eq!(s.total_comparisons, 3);
    assert!((s.average - 60.0).abs() < 1e-9);
    assert_eq!(s.highest.score, 100.0);
    assert_eq!(s.lowest.score, 20.0);
    assert_eq!(s.highest, results[0]);
    assert_eq!(s.lowest, results[2]);
}

#[test]
fn summary_unsorted_input_still_finds_extremes() {
    let results = vec![
        pair("a", "b", 20.0),
        pair("a", "c", 60.0),
        pair("b", "c", 100.0),
    ];
    let s = SummaryStats::compute(3, &results).unwrap();
    assert_eq!(s.highest.score, 100.0);
    assert_eq!(s.lowest.score, 20.0);
    assert!((s.average - 60.0).abs() < 1e-9);
}

#[test]
fn summary_ties_pick_first_highest_and_last_lowest() {
    let results = vec![
        pair("a", "b", 90.0),
        pair("a", "c", 90.0),
        pair("b", "c", 10.0),
        pair("b", "d", 10.0),
    ];
    let s = SummaryStats::compute(4, &results).unwrap();
    assert_eq!((s.highest.doc_a.as_str(), s.highest.doc_b.as_str()), ("a", "b"));
    assert_eq!((s.lowest.doc_a.as_str(), s.lowest.doc_b.as_str()), ("b", "d"));
}

#[test]
fn summary_of_nothing_is_none() {
    assert!(SummaryStats::compute(1, &[]).is_none());
    assert!(SummaryStats::compute(0, &[]).is_none());
}

// ============================================================
// parse_threshold — invalid input falls back to 50
// ============================================================

#[test]
fn threshold_fallbacks() {
    for bad in ["", "fifty", "101", "-0.5", "inf", "1e9"] {
        assert_eq!(parse_threshold(bad), DEFAULT_THRESHOLD, "input {bad:?}");
    }
    assert_eq!(DEFAULT_THRESHOLD, 50.0);
}

#[test]
fn threshold_accepts_percent_sign() {
    assert_eq!(parse_threshold("72.5%"), 72.5);
}
