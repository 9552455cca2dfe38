//! Plan strategy tags

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Truck selection policy used to build one candidate plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlanStrategy {
    Recommended,
    LegalOnly,
    Fastest,
    MaxSafety,
    BestPlacement,
}

impl PlanStrategy {
    /// Every strategy, in presentation order
    pub const ALL: [PlanStrategy; 5] = [
        PlanStrategy::Recommended,
        PlanStrategy::LegalOnly,
        PlanStrategy::Fastest,
        PlanStrategy::MaxSafety,
        PlanStrategy::BestPlacement,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PlanStrategy::Recommended => "Recommended",
            PlanStrategy::LegalOnly => "Legal Only",
            PlanStrategy::Fastest => "Fastest",
            PlanStrategy::MaxSafety => "Max Safety",
            PlanStrategy::BestPlacement => "Best Placement",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PlanStrategy::Recommended => "Best overall fit for each item across the catalog",
            PlanStrategy::LegalOnly => "Smallest truck that keeps each item within legal limits",
            PlanStrategy::Fastest => "Common flatbed and step-deck trailers that are quick to book",
            PlanStrategy::MaxSafety => "Most clearance, weight margin and deck slack per item",
            PlanStrategy::BestPlacement => "Trailer type and loading method matched to the cargo",
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            PlanStrategy::Recommended => "recommended",
            PlanStrategy::LegalOnly => "legal-only",
            PlanStrategy::Fastest => "fastest",
            PlanStrategy::MaxSafety => "max-safety",
            PlanStrategy::BestPlacement => "best-placement",
        }
    }
}

impl std::fmt::Display for PlanStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for PlanStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        PlanStrategy::ALL
            .into_iter()
            .find(|st| st.tag() == normalized)
            .ok_or_else(|| format!("unknown strategy '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags() {
        assert_eq!("legal-only".parse::<PlanStrategy>(), Ok(PlanStrategy::LegalOnly));
        assert_eq!("Max_Safety".parse::<PlanStrategy>(), Ok(PlanStrategy::MaxSafety));
        assert_eq!("best placement".parse::<PlanStrategy>(), Ok(PlanStrategy::BestPlacement));
        assert!("cheapest".parse::<PlanStrategy>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for strategy in PlanStrategy::ALL {
            assert_eq!(strategy.to_string().parse::<PlanStrategy>(), Ok(strategy));
        }
    }
}
