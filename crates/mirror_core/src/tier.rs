/// Minimum score for the top tier.
pub const GOLD_THRESHOLD: i64 = 80;
/// Minimum score for the middle tier.
pub const SILVER_THRESHOLD: i64 = 50;

/// Three-level quality classification derived from a numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Gold,
    Silver,
    NeedsImprovement,
}

impl Tier {
    pub fn label(self) -> &'static str {
        match self {
            Tier::Gold => "Gold Standard",
            Tier::Silver => "Silver Standard",
            Tier::NeedsImprovement => "Needs Improvement",
        }
    }
}

/// Maps a score to its tier.
///
/// Total over every integer: out-of-range scores still classify, range checks
/// belong to the analysis service.
pub fn classify(score: i64) -> Tier {
    if score >= GOLD_THRESHOLD {
        Tier::Gold
    } else if score >= SILVER_THRESHOLD {
        Tier::Silver
    } else {
        Tier::NeedsImprovement
    }
}
