use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::element::Element;
use crate::core::types::{CategoryId, Position};
use crate::core::unit::ConfigurationUnit;
use crate::matching::compatibility::CompatibilityTable;
use crate::matching::scoring::MatchScore;
use crate::parsing::configuration::parse_units;

/// The full appearance record of one owner: every acceptable look plus the live one
///
/// The main unit is tracked as an index into `units`. It is the only unit that
/// is mutated at runtime; the others are read-only reference patterns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Configuration {
    units: Vec<ConfigurationUnit>,
    main: Option<usize>,
    source: String,
}

impl Configuration {
    /// Create a configuration with no units and no main unit
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration string; the first unit becomes the main unit
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut configuration = Self::new();
        configuration.reparse(text, false);
        configuration
    }

    /// Replace all units with the ones parsed from `text`
    ///
    /// Without `force`, an existing main handle is kept (clamped to the new
    /// unit count) and a configuration without one selects the first unit.
    /// With `force`, every parsed unit claims the main slot in turn, so the
    /// last parsed unit ends up as main.
    pub fn reparse(&mut self, text: &str, force: bool) {
        self.units = parse_units(text);
        self.source = text.to_string();

        let last = self.units.len().saturating_sub(1);
        self.main = if self.units.is_empty() {
            None
        } else if force {
            Some(last)
        } else {
            Some(self.main.map_or(0, |index| index.min(last)))
        };
    }

    #[must_use]
    pub fn units(&self) -> &[ConfigurationUnit] {
        &self.units
    }

    #[must_use]
    pub fn unit(&self, index: usize) -> Option<&ConfigurationUnit> {
        self.units.get(index)
    }

    #[must_use]
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    #[must_use]
    pub fn main_index(&self) -> Option<usize> {
        self.main
    }

    #[must_use]
    pub fn main_unit(&self) -> Option<&ConfigurationUnit> {
        self.main.and_then(|index| self.units.get(index))
    }

    /// Raw text this configuration was last parsed from
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Append an element to the main unit, creating it from an empty token if needed
    pub fn add_element_to_main(&mut self, element: Element) {
        let index = match self.main {
            Some(index) => index,
            None => {
                self.units.push(ConfigurationUnit::parse(""));
                let index = self.units.len() - 1;
                self.main = Some(index);
                debug!(index, "created main unit for first attached element");
                index
            }
        };
        self.units[index].add(element);
    }

    /// Remove the first main-unit element that matches all three fields exactly
    ///
    /// A miss returns false and is an ordinary outcome, not a fault.
    pub fn try_remove_element_from_main(
        &mut self,
        category: CategoryId,
        position: Position,
        orientation: f64,
    ) -> bool {
        match self.main.and_then(|index| self.units.get_mut(index)) {
            Some(unit) => unit.remove_exact(category, position, orientation),
            None => false,
        }
    }

    /// Best score of any of this configuration's units against `other`'s main unit
    ///
    /// Returns 0 (and logs a warning) when `other` has no main unit.
    #[must_use]
    pub fn compare(&self, other: &Configuration, table: &CompatibilityTable) -> f64 {
        self.compare_detailed(other, table).best
    }

    /// Like [`Configuration::compare`] but keeps every per-unit score
    #[must_use]
    pub fn compare_detailed(&self, other: &Configuration, table: &CompatibilityTable) -> MatchScore {
        MatchScore::calculate(self, other, table)
    }
}

impl From<String> for Configuration {
    fn from(text: String) -> Self {
        Self::parse(&text)
    }
}

impl From<&str> for Configuration {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl From<Configuration> for String {
    fn from(configuration: Configuration) -> Self {
        configuration.to_string()
    }
}

impl std::fmt::Display for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::parsing::configuration::write_configuration(f, self)
    }
}
