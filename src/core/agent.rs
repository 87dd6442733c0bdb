//! Boundary traits for entities that own or evaluate configurations.

use tracing::debug;

use crate::core::configuration::Configuration;
use crate::core::element::Element;
use crate::core::part::PartTemplate;
use crate::core::types::Position;
use crate::matching::compatibility::CompatibilityTable;

/// Anything that carries an appearance configuration
pub trait ProvidesConfiguration {
    fn configuration(&self) -> &Configuration;
}

/// Anything that evaluates another entity's configuration against its own
pub trait JudgesConfiguration: ProvidesConfiguration {
    /// Score `candidate` against this judge's reference looks
    ///
    /// Every unit of the judge's configuration is compared to the candidate's
    /// main unit and the best score wins.
    fn judge_configuration(&self, candidate: &Configuration, table: &CompatibilityTable) -> f64 {
        self.configuration().compare(candidate, table)
    }
}

/// An actor that wears parts and whose live look lives in the main unit
#[derive(Debug, Clone, Default)]
pub struct Wearer {
    configuration: Configuration,
}

impl Wearer {
    /// Start from an initial configuration string (may be empty)
    #[must_use]
    pub fn new(initial: &str) -> Self {
        Self {
            configuration: Configuration::parse(initial),
        }
    }

    /// Attach a part and return the element that was added to the live look
    pub fn attach(&mut self, part: &PartTemplate, position: Position, orientation: f64) -> Element {
        let element = part.place(position, orientation);
        debug!(part = %part.name, category = %part.category, %position, orientation, "attaching part");
        self.configuration.add_element_to_main(element.clone());
        element
    }

    /// Detach the part described by `element`; false if the live look does not hold it
    pub fn detach(&mut self, element: &Element) -> bool {
        let removed = self.configuration.try_remove_element_from_main(
            element.category(),
            element.position(),
            element.orientation(),
        );
        if !removed {
            debug!(category = %element.category(), "no exact match to detach");
        }
        removed
    }
}

impl ProvidesConfiguration for Wearer {
    fn configuration(&self) -> &Configuration {
        &self.configuration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::creature::KnownCreature;

    #[test]
    fn test_attach_and_detach_round_trip() {
        let mut wearer = Wearer::new("");
        let horn = PartTemplate::new(2, "horn").with_orientation([180.0]);

        let before = wearer.configuration().main_unit().unwrap().len();
        let element = wearer.attach(&horn, Position::new(0.5, 0.2), 180.0);
        assert_eq!(wearer.configuration().main_unit().unwrap().len(), before + 1);

        assert!(wearer.detach(&element));
        assert_eq!(wearer.configuration().main_unit().unwrap().len(), before);
        assert!(!wearer.detach(&element));
    }

    #[test]
    fn test_disguise_improves_judgement() {
        let table = CompatibilityTable::new();
        let horned = KnownCreature::new("horned", "Horned", "1@2-2@0.5^0.2-3@0;1@2-2@0.5^0.8-3@0");
        let horn = PartTemplate::new(2, "horn");

        let mut wearer = Wearer::new("1@2-2@0.5^0.2-3@0");
        let partial = horned.judge_configuration(wearer.configuration(), &table);

        wearer.attach(&horn, Position::new(0.5, 0.8), 0.0);
        let full = horned.judge_configuration(wearer.configuration(), &table);

        assert!(full > partial, "expected {full} > {partial}");
        assert!((full - 1.5).abs() < 1e-9);
    }
}
