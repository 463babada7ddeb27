// Risk classification — score (percent) to label via threshold tables.
//
// One classifier, two tables. The per-pair risk level and the "most similar
// pair" badge use different cutoffs on purpose: the badge only ever describes
// the top match. Both go through ThresholdTable so the cutoffs live in exactly
// one place each.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordered (minimum score, label) tiers plus a floor label.
///
/// Tiers must be listed from the highest minimum to the lowest. A score
/// belongs to the first tier whose minimum it meets (`>=`), so boundary values
/// land in the higher-risk tier. NaN meets no minimum and gets the floor.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdTable<'a, T> {
    tiers: &'a [(f64, T)],
    floor: T,
}

impl<'a, T: Copy> ThresholdTable<'a, T> {
    pub const fn new(tiers: &'a [(f64, T)], floor: T) -> Self {
        Self { tiers, floor }
    }

    pub fn classify(&self, score: f64) -> T {
        self.tiers
            .iter()
            .find(|(min, _)| score >= *min)
            .map(|(_, label)| *label)
            .unwrap_or(self.floor)
    }

    pub fn tiers(&self) -> &'a [(f64, T)] {
        self.tiers
    }
}

/// Risk level for a single document pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Safe,
    Mild,
    Medium,
    High,
}

pub const RISK_TABLE: ThresholdTable<'static, RiskLevel> = ThresholdTable::new(
    &[
        (85.0, RiskLevel::High),
        (70.0, RiskLevel::Medium),
        (50.0, RiskLevel::Mild),
    ],
    RiskLevel::Safe,
);

impl RiskLevel {
    /// Classify a similarity percentage (0-100).
    pub fn from_score(score: f64) -> Self {
        RISK_TABLE.classify(score)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::High => "HIGH RISK",
            RiskLevel::Medium => "MEDIUM RISK",
            RiskLevel::Mild => "MILD SIMILARITY",
            RiskLevel::Safe => "SAFE",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Verdict shown next to the single most similar pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlagiarismBadge {
    LikelyOriginal,
    PossiblyInspired,
    HighlySimilar,
    Plagiarized,
}

pub const BADGE_TABLE: ThresholdTable<'static, PlagiarismBadge> = ThresholdTable::new(
    &[
        (90.0, PlagiarismBadge::Plagiarized),
        (75.0, PlagiarismBadge::HighlySimilar),
        (50.0, PlagiarismBadge::PossiblyInspired),
    ],
    PlagiarismBadge::LikelyOriginal,
);

impl PlagiarismBadge {
    pub fn from_score(score: f64) -> Self {
        BADGE_TABLE.classify(score)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlagiarismBadge::Plagiarized => "Plagiarized",
            PlagiarismBadge::HighlySimilar => "Highly Similar",
            PlagiarismBadge::PossiblyInspired => "Possibly Inspired",
            PlagiarismBadge::LikelyOriginal => "Likely Original",
        }
    }
}

impl fmt::Display for PlagiarismBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
