use serde::{Deserialize, Serialize};
use std::fmt;

const MODERATE_FLOOR: u32 = 45;
const HIGH_FLOOR: u32 = 70;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    pub fn advisory(self) -> &'static str {
        match self {
            Self::Low => "low risk",
            Self::Moderate => "moderate, caution advised",
            Self::High => "high risk, expert consultation advised",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub tier: RiskTier,
    pub advisory: &'static str,
}

/// Bands are lower-inclusive: `[0,45)`, `[45,70)`, `[70,100]`.
pub fn classify(score: u32) -> Classification {
    let tier = if score >= HIGH_FLOOR {
        RiskTier::High
    } else if score >= MODERATE_FLOOR {
        RiskTier::Moderate
    } else {
        RiskTier::Low
    };
    Classification {
        tier,
        advisory: tier.advisory(),
    }
}
