use serde::{Deserialize, Serialize};

use crate::core::agent::{JudgesConfiguration, ProvidesConfiguration};
use crate::core::configuration::Configuration;
use crate::core::types::CreatureId;

/// A known creature type in the catalog and the looks it accepts as its own kind
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnownCreature {
    /// Unique identifier
    pub id: CreatureId,

    /// Human-readable display name
    pub display_name: String,

    /// Description/notes about this creature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Tags for filtering (e.g. "undead", "flying")
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Reference configuration, stored as its serialized string
    pub configuration: Configuration,
}

impl KnownCreature {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        configuration: &str,
    ) -> Self {
        Self {
            id: CreatureId::new(id),
            display_name: display_name.into(),
            description: None,
            tags: Vec::new(),
            configuration: Configuration::parse(configuration),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Total number of elements across all units
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.configuration
            .units()
            .iter()
            .map(crate::core::unit::ConfigurationUnit::len)
            .sum()
    }
}

impl ProvidesConfiguration for KnownCreature {
    fn configuration(&self) -> &Configuration {
        &self.configuration
    }
}

impl JudgesConfiguration for KnownCreature {}
