use serde::Serialize;
use tracing::warn;

use crate::core::configuration::Configuration;
use crate::core::element::{Element, FULL_TURN};
use crate::core::unit::ConfigurationUnit;
use crate::matching::compatibility::CompatibilityTable;

/// Baseline the position distance is subtracted from
///
/// Scores are therefore not confined to [0, 1]: two identical, compatible
/// elements score 1.5.
pub const POSITION_BASELINE: f64 = 1.5;

/// Convert usize to f64 for averaging
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Orientation term of the element similarity
///
/// The smallest `|a.orientation + offset - b.orientation|` over all of `a`'s
/// equivalence offsets is not folded modulo 360, so degenerate inputs can
/// drive the factor below zero.
#[must_use]
pub fn orientation_factor(a: &Element, b: &Element) -> f64 {
    if !a.consider_orientation() {
        return 1.0;
    }

    let min_delta = a
        .orientation_equivalences()
        .iter()
        .map(|offset| (a.orientation() + offset - b.orientation()).abs())
        .fold(f64::INFINITY, f64::min);

    1.0 - min_delta / FULL_TURN
}

/// Score element `a` against element `b`
///
/// Product of the type factor, `1.5 - distance` and the orientation factor.
/// Asymmetric: only `a`'s orientation flag and equivalences are used.
#[must_use]
pub fn element_similarity(a: &Element, b: &Element, table: &CompatibilityTable) -> f64 {
    let type_factor = table.lookup(a.category(), b.category());
    let position_factor = POSITION_BASELINE - a.position().distance(&b.position());
    type_factor * position_factor * orientation_factor(a, b)
}

/// Greedy, size-penalizing comparison of two element sets
///
/// 1. For each element of `other`, take its best similarity against any
///    element of `this` (0 if `this` is empty). Elements of `this` are not
///    reserved once matched.
/// 2. If `other` is larger, zero the lowest excess scores.
/// 3. If `this` is larger, pad with zeros.
/// 4. Average, or 0 for an empty list.
///
/// `this` fixes the reference size and `other` drives iteration, so swapping
/// the arguments generally changes the result.
#[must_use]
pub fn unit_similarity(
    this: &ConfigurationUnit,
    other: &ConfigurationUnit,
    table: &CompatibilityTable,
) -> f64 {
    let mine = this.elements();

    let mut best: Vec<f64> = other
        .elements()
        .iter()
        .map(|candidate| {
            mine.iter()
                .map(|own| element_similarity(own, candidate, table))
                .reduce(f64::max)
                .unwrap_or(0.0)
        })
        .collect();

    if best.len() > mine.len() {
        let excess = best.len() - mine.len();
        let mut order: Vec<usize> = (0..best.len()).collect();
        order.sort_by(|&i, &j| {
            best[i]
                .partial_cmp(&best[j])
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        for &index in order.iter().take(excess) {
            best[index] = 0.0;
        }
    } else if best.len() < mine.len() {
        best.resize(mine.len(), 0.0);
    }

    if best.is_empty() {
        0.0
    } else {
        best.iter().sum::<f64>() / count_to_f64(best.len())
    }
}

/// Per-unit breakdown of a configuration comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchScore {
    /// Score of each of the judging configuration's units, in unit order
    pub unit_scores: Vec<f64>,

    /// Index of the highest-scoring unit, if any unit was scored
    pub best_unit: Option<usize>,

    /// Highest unit score, 0 when nothing could be scored
    pub best: f64,

    /// Whether the judged configuration had a main unit to compare against
    pub candidate_has_main: bool,
}

impl MatchScore {
    /// Compare every unit of `judge` against the main unit of `candidate`
    #[must_use]
    pub fn calculate(
        judge: &Configuration,
        candidate: &Configuration,
        table: &CompatibilityTable,
    ) -> Self {
        let Some(target) = candidate.main_unit() else {
            warn!(
                source = candidate.source(),
                "candidate configuration has no main unit; scoring as 0"
            );
            return Self::empty(false);
        };

        let unit_scores: Vec<f64> = judge
            .units()
            .iter()
            .map(|unit| unit_similarity(unit, target, table))
            .collect();

        let best_unit = unit_scores
            .iter()
            .enumerate()
            .reduce(|best, current| if current.1 > best.1 { current } else { best })
            .map(|(index, _)| index);

        let best = best_unit.map_or(0.0, |index| unit_scores[index]);

        Self {
            unit_scores,
            best_unit,
            best,
            candidate_has_main: true,
        }
    }

    fn empty(candidate_has_main: bool) -> Self {
        Self {
            unit_scores: Vec::new(),
            best_unit: None,
            best: 0.0,
            candidate_has_main,
        }
    }
}
