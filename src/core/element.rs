use crate::core::types::{CategoryId, Position};
use crate::matching::compatibility::CompatibilityTable;

/// Upper bound of the orientation range, in degrees
pub const FULL_TURN: f64 = 360.0;

/// Equivalence offsets every element carries regardless of its input
pub const SENTINEL_EQUIVALENCES: [f64; 2] = [0.0, FULL_TURN];

/// Whether an offset may join an element's equivalence set
#[inline]
pub(crate) fn is_inner_offset(value: f64) -> bool {
    value > 0.0 && value < FULL_TURN
}

/// A single placed part: category, normalized position and orientation
///
/// Elements are immutable once built. A unit changes by adding or removing
/// whole elements, never by editing one in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub(crate) category: CategoryId,
    pub(crate) position: Position,
    pub(crate) orientation: f64,
    pub(crate) consider_orientation: bool,
    pub(crate) orientation_equivalences: Vec<f64>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            category: CategoryId::default(),
            position: Position::default(),
            orientation: 0.0,
            consider_orientation: true,
            orientation_equivalences: SENTINEL_EQUIVALENCES.to_vec(),
        }
    }
}

impl Element {
    /// Create an element, clamping position into [0, 1]² and orientation into [0, 360]
    #[must_use]
    pub fn new(category: impl Into<CategoryId>, position: Position, orientation: f64) -> Self {
        Self {
            category: category.into(),
            position: Position::clamped(position.x, position.y),
            orientation: orientation.clamp(0.0, FULL_TURN),
            ..Self::default()
        }
    }

    /// Parse an element token; never fails, see [`crate::parsing::element`]
    #[must_use]
    pub fn parse(token: &str) -> Self {
        crate::parsing::element::parse_element(token)
    }

    #[must_use]
    pub fn with_consider_orientation(mut self, consider: bool) -> Self {
        self.consider_orientation = consider;
        self
    }

    /// Replace the equivalence offsets; values outside (0, 360) are dropped
    #[must_use]
    pub fn with_orientation_equivalences(mut self, offsets: impl IntoIterator<Item = f64>) -> Self {
        self.orientation_equivalences = SENTINEL_EQUIVALENCES.to_vec();
        for offset in offsets {
            self.push_equivalence(offset);
        }
        self
    }

    pub(crate) fn push_equivalence(&mut self, offset: f64) {
        if is_inner_offset(offset) && !self.orientation_equivalences.contains(&offset) {
            self.orientation_equivalences.push(offset);
        }
    }

    #[must_use]
    pub fn category(&self) -> CategoryId {
        self.category
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn orientation(&self) -> f64 {
        self.orientation
    }

    #[must_use]
    pub fn consider_orientation(&self) -> bool {
        self.consider_orientation
    }

    /// Offsets treated as equivalent to no rotation, sentinels 0 and 360 included
    #[must_use]
    pub fn orientation_equivalences(&self) -> &[f64] {
        &self.orientation_equivalences
    }

    /// Offsets strictly inside (0, 360), i.e. everything but the sentinels
    pub fn inner_equivalences(&self) -> impl Iterator<Item = f64> + '_ {
        self.orientation_equivalences
            .iter()
            .copied()
            .filter(|v| is_inner_offset(*v))
    }

    /// Exact equality on category, position and orientation (no tolerance)
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn matches_exactly(&self, category: CategoryId, position: Position, orientation: f64) -> bool {
        self.category == category && self.position == position && self.orientation == orientation
    }

    /// Score this element against `other`; see [`crate::matching::scoring::element_similarity`]
    #[must_use]
    pub fn similarity(&self, other: &Element, table: &CompatibilityTable) -> f64 {
        crate::matching::scoring::element_similarity(self, other, table)
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::parsing::element::write_element(f, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_element() {
        let e = Element::default();
        assert_eq!(e.category(), CategoryId(0));
        assert_eq!(e.position(), Position::new(0.0, 0.0));
        assert!(e.orientation().abs() < f64::EPSILON);
        assert!(e.consider_orientation());
        assert_eq!(e.orientation_equivalences(), &[0.0, 360.0]);
    }

    #[test]
    fn test_new_clamps_ranges() {
        let e = Element::new(3, Position::new(1.4, -0.2), 400.0);
        assert_eq!(e.position(), Position::new(1.0, 0.0));
        assert!((e.orientation() - 360.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_equivalences_keep_sentinels_and_drop_bounds() {
        let e = Element::default().with_orientation_equivalences([0.0, 90.0, 360.0, -10.0, 90.0, 270.0]);
        assert_eq!(e.orientation_equivalences(), &[0.0, 360.0, 90.0, 270.0]);
        assert_eq!(e.inner_equivalences().collect::<Vec<_>>(), vec![90.0, 270.0]);
    }

    #[test]
    fn test_matches_exactly_has_no_tolerance() {
        let e = Element::new(1, Position::new(0.25, 0.75), 90.0);
        assert!(e.matches_exactly(CategoryId(1), Position::new(0.25, 0.75), 90.0));
        assert!(!e.matches_exactly(CategoryId(1), Position::new(0.25, 0.75), 90.0001));
        assert!(!e.matches_exactly(CategoryId(2), Position::new(0.25, 0.75), 90.0));
    }
}
