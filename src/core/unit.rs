use crate::core::element::Element;
use crate::core::types::{CategoryId, Position};
use crate::matching::compatibility::CompatibilityTable;

/// One concrete configuration ("one graph"): an unordered bag of elements
///
/// Elements keep insertion order but order has no meaning for comparison.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigurationUnit {
    elements: Vec<Element>,
}

impl ConfigurationUnit {
    /// Create an empty unit
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_elements(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    /// Parse a unit token; see [`crate::parsing::configuration::parse_unit`]
    #[must_use]
    pub fn parse(token: &str) -> Self {
        crate::parsing::configuration::parse_unit(token)
    }

    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn add(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Remove the first element equal on category, position and orientation
    ///
    /// Returns false when nothing matches exactly; no float tolerance is applied.
    pub fn remove_exact(
        &mut self,
        category: CategoryId,
        position: Position,
        orientation: f64,
    ) -> bool {
        match self
            .elements
            .iter()
            .position(|e| e.matches_exactly(category, position, orientation))
        {
            Some(index) => {
                self.elements.remove(index);
                true
            }
            None => false,
        }
    }

    /// Score how well this unit accounts for `other`; see [`crate::matching::scoring::unit_similarity`]
    #[must_use]
    pub fn compare(&self, other: &ConfigurationUnit, table: &CompatibilityTable) -> f64 {
        crate::matching::scoring::unit_similarity(self, other, table)
    }
}

impl std::fmt::Display for ConfigurationUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::parsing::configuration::write_unit(f, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_exact_first_match_only() {
        let part = Element::new(1, Position::new(0.5, 0.5), 90.0);
        let mut unit = ConfigurationUnit::from_elements(vec![part.clone(), part.clone()]);

        assert!(unit.remove_exact(CategoryId(1), Position::new(0.5, 0.5), 90.0));
        assert_eq!(unit.len(), 1);
        assert!(unit.remove_exact(CategoryId(1), Position::new(0.5, 0.5), 90.0));
        assert!(unit.is_empty());
        assert!(!unit.remove_exact(CategoryId(1), Position::new(0.5, 0.5), 90.0));
    }

    #[test]
    fn test_display_joins_elements() {
        let unit = ConfigurationUnit::parse("1@1;1@2-3@0");
        assert_eq!(unit.to_string(), "1@1-2@0^0-3@1-4@0;1@2-2@0^0-3@0-4@0");
    }
}
