use serde::{Deserialize, Serialize};

use crate::core::element::Element;
use crate::core::types::{CategoryId, Position};

/// Authoring defaults for one part category
///
/// When a part of this category is attached, its element inherits the
/// template's orientation flag and equivalence offsets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartTemplate {
    /// Category the template describes
    pub category: CategoryId,

    /// Human-readable part name
    pub name: String,

    /// Whether orientation matters when matching this part
    #[serde(default)]
    pub consider_orientation: bool,

    /// Offsets (degrees) that look identical to no rotation, e.g. 180 for a symmetric part
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub orientation_equivalences: Vec<f64>,
}

impl PartTemplate {
    pub fn new(category: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
            consider_orientation: false,
            orientation_equivalences: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_orientation(mut self, equivalences: impl IntoIterator<Item = f64>) -> Self {
        self.consider_orientation = true;
        self.orientation_equivalences = equivalences.into_iter().collect();
        self
    }

    /// Build the element for this part placed at `position` with `orientation`
    #[must_use]
    pub fn place(&self, position: Position, orientation: f64) -> Element {
        Element::new(self.category, position, orientation)
            .with_consider_orientation(self.consider_orientation)
            .with_orientation_equivalences(self.orientation_equivalences.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_inherits_template() {
        let horn = PartTemplate::new(2, "horn").with_orientation([180.0, 360.0]);
        let e = horn.place(Position::new(0.4, 0.6), 30.0);
        assert_eq!(e.category(), CategoryId(2));
        assert_eq!(e.position(), Position::new(0.4, 0.6));
        assert!(e.consider_orientation());
        assert_eq!(e.orientation_equivalences(), &[0.0, 360.0, 180.0]);
    }

    #[test]
    fn test_place_without_orientation() {
        let eye = PartTemplate::new(1, "eye");
        let e = eye.place(Position::new(0.5, 0.5), 90.0);
        assert!(!e.consider_orientation());
        assert_eq!(e.inner_equivalences().count(), 0);
    }
}
