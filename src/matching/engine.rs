use serde::Serialize;
use tracing::debug;

use crate::catalog::store::CreatureCatalog;
use crate::core::configuration::Configuration;
use crate::core::creature::KnownCreature;
use crate::core::types::CreatureId;
use crate::matching::scoring::MatchScore;

/// Result of judging a candidate against one catalog creature
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    /// The creature doing the judging
    pub creature: KnownCreature,

    /// Match score details
    pub score: MatchScore,
}

impl MatchResult {
    pub fn new(creature: &KnownCreature, candidate: &Configuration, catalog: &CreatureCatalog) -> Self {
        let score = MatchScore::calculate(&creature.configuration, candidate, &catalog.compatibility);
        Self {
            creature: creature.clone(),
            score,
        }
    }
}

/// Default minimum score threshold for matches
pub const DEFAULT_MIN_SCORE: f64 = 0.1;

/// Default number of results returned by `find_matches` callers
pub const DEFAULT_LIMIT: usize = 5;

/// Configuration for the matching engine
#[derive(Debug, Clone)]
pub struct MatchingConfig {
    /// Results must score strictly above this to be reported
    pub min_score: f64,
    /// Maximum number of results
    pub limit: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Ranks catalog creatures by how strongly each one accepts a candidate look
pub struct MatchingEngine<'a> {
    catalog: &'a CreatureCatalog,
    config: MatchingConfig,
}

impl<'a> MatchingEngine<'a> {
    /// Create a new matching engine with default configuration
    pub fn new(catalog: &'a CreatureCatalog) -> Self {
        Self {
            catalog,
            config: MatchingConfig::default(),
        }
    }

    /// Create a new matching engine with custom configuration
    pub fn with_config(catalog: &'a CreatureCatalog, config: MatchingConfig) -> Self {
        Self { catalog, config }
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Score `candidate` against every creature, best first, using the configured limit
    pub fn find_matches(&self, candidate: &Configuration) -> Vec<MatchResult> {
        let mut results: Vec<MatchResult> = self
            .catalog
            .creatures
            .iter()
            .map(|creature| MatchResult::new(creature, candidate, self.catalog))
            .collect();

        debug!(scored = results.len(), "scored candidate against catalog");

        // Stable sort keeps catalog order among equal scores
        results.sort_by(|a, b| {
            b.score
                .best
                .partial_cmp(&a.score.best)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        results
            .into_iter()
            .filter(|r| r.score.best > self.config.min_score)
            .take(self.config.limit)
            .collect()
    }

    /// Find the single best match
    pub fn find_best_match(&self, candidate: &Configuration) -> Option<MatchResult> {
        self.find_matches(candidate).into_iter().next()
    }

    /// Score `candidate` against one creature, ignoring the threshold
    pub fn judge(&self, id: &CreatureId, candidate: &Configuration) -> Option<MatchResult> {
        self.catalog
            .get(id)
            .map(|creature| MatchResult::new(creature, candidate, self.catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::compatibility::CompatibilityTable;

    fn make_test_catalog() -> CreatureCatalog {
        let mut catalog = CreatureCatalog::new();
        catalog.compatibility = CompatibilityTable::new().with_entry(1, 2, 0.5);
        catalog.add_creature(KnownCreature::new("cyclops", "Cyclops", "1@1-2@0.5^0.4-3@0"));
        catalog.add_creature(KnownCreature::new(
            "horned",
            "Horned One",
            "1@2-2@0.3^0.2-3@0;1@2-2@0.7^0.2-3@0",
        ));
        catalog.add_creature(KnownCreature::new("wisp", "Wisp", "1@7-2@0^0-3@0"));
        catalog
    }

    #[test]
    fn test_exact_disguise_ranks_first() {
        let catalog = make_test_catalog();
        let engine = MatchingEngine::new(&catalog);

        let candidate = Configuration::parse("1@2-2@0.3^0.2-3@0;1@2-2@0.7^0.2-3@0");
        let matches = engine.find_matches(&candidate);

        assert!(!matches.is_empty());
        assert_eq!(matches[0].creature.id, CreatureId::new("horned"));
        assert!((matches[0].score.best - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_min_score_filters_unrelated_creatures() {
        let catalog = make_test_catalog();
        let engine = MatchingEngine::new(&catalog);

        let candidate = Configuration::parse("1@1-2@0.5^0.4-3@0");
        let matches = engine.find_matches(&candidate);

        // The wisp's category has no compatibility with the eye
        assert!(matches.iter().all(|m| m.creature.id != CreatureId::new("wisp")));
        assert!(matches.iter().all(|m| m.score.best > DEFAULT_MIN_SCORE));
    }

    #[test]
    fn test_limit_and_sorting() {
        let catalog = make_test_catalog();
        let config = MatchingConfig {
            min_score: 0.0,
            limit: 2,
        };
        let engine = MatchingEngine::with_config(&catalog, config);

        let candidate = Configuration::parse("1@1-2@0.5^0.4-3@0");
        let matches = engine.find_matches(&candidate);
        assert_eq!(matches.len(), 2);
        assert!(matches[0].score.best >= matches[1].score.best);
        assert_eq!(matches[0].creature.id, CreatureId::new("cyclops"));
    }

    #[test]
    fn test_find_best_match_on_empty_catalog() {
        let catalog = CreatureCatalog::new();
        let engine = MatchingEngine::new(&catalog);
        assert!(engine
            .find_best_match(&Configuration::parse("1@1"))
            .is_none());
    }

    #[test]
    fn test_candidate_without_main_unit_matches_nothing() {
        let catalog = make_test_catalog();
        let engine = MatchingEngine::new(&catalog);
        assert!(engine.find_matches(&Configuration::new()).is_empty());
    }

    #[test]
    fn test_judge_single_creature() {
        let catalog = make_test_catalog();
        let engine = MatchingEngine::new(&catalog);
        let candidate = Configuration::parse("1@7-2@0^0-3@0");

        let result = engine.judge(&CreatureId::new("wisp"), &candidate).unwrap();
        assert!((result.score.best - 1.5).abs() < 1e-9);
        assert_eq!(result.score.best_unit, Some(0));

        assert!(engine.judge(&CreatureId::new("nobody"), &candidate).is_none());
    }
}
