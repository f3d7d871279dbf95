mod config;
mod rules;

pub use config::ScoringConfig;

use crate::inventory::Unit;

use super::domain::{ClientCriteria, MatchResult};
use super::typology::TypologyMatch;

/// Axes contributing to a compatibility score, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MatchFactor {
    ProjectPreference,
    Typology,
    AreaFit,
    PriceFit,
}

/// Discrete contribution to a unit's score, one entry per factor.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScoreFactor {
    pub(crate) factor: MatchFactor,
    pub(crate) points: u8,
    pub(crate) reason: Option<String>,
}

/// Stateless calculator applying the configured weights to one unit.
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Score one unit against the criteria. The total is clamped to 100 and
    /// the reasons keep factor order, one line per non-zero factor except the
    /// open typology credit.
    pub fn score(
        &self,
        unit: &Unit,
        criteria: &ClientCriteria,
        typology: &TypologyMatch,
    ) -> MatchResult {
        let (factors, total) = rules::score_unit(unit, criteria, typology, &self.config);

        MatchResult {
            score: total.min(100) as u8,
            reasons: factors
                .into_iter()
                .filter_map(|factor| factor.reason)
                .collect(),
        }
    }

    #[cfg(test)]
    pub(crate) fn factors_for_tests(
        &self,
        unit: &Unit,
        criteria: &ClientCriteria,
        typology: &TypologyMatch,
    ) -> Vec<ScoreFactor> {
        rules::score_unit(unit, criteria, typology, &self.config).0
    }
}
