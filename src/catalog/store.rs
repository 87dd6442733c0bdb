use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::creature::KnownCreature;
use crate::core::part::PartTemplate;
use crate::core::types::{CategoryId, CreatureId};
use crate::matching::compatibility::CompatibilityTable;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub created_at: String,
    #[serde(default)]
    pub compatibility: CompatibilityTable,
    #[serde(default)]
    pub parts: Vec<PartTemplate>,
    pub creatures: Vec<KnownCreature>,
}

/// The creature catalog with its lookup indexes
#[derive(Debug, Default)]
pub struct CreatureCatalog {
    /// All known creatures
    pub creatures: Vec<KnownCreature>,

    /// Category compatibility used when judging against these creatures
    pub compatibility: CompatibilityTable,

    /// Part templates, in catalog order
    pub parts: Vec<PartTemplate>,

    /// Index: creature ID -> index in creatures vec
    id_to_index: HashMap<CreatureId, usize>,

    /// Index: category -> index in parts vec
    category_to_part: HashMap<CategoryId, usize>,
}

impl CreatureCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the embedded default catalog
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Validated at compile time by build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/creatures.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load catalog from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse catalog from JSON string
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            warn!(
                expected = CATALOG_VERSION,
                found = %data.version,
                "catalog version mismatch"
            );
        }

        let mut catalog = Self::new();
        catalog.compatibility = data.compatibility;
        for part in data.parts {
            catalog.add_part(part);
        }
        for creature in data.creatures {
            catalog.add_creature(creature);
        }

        debug!(
            creatures = catalog.len(),
            parts = catalog.parts.len(),
            pairs = catalog.compatibility.len(),
            "loaded creature catalog"
        );

        Ok(catalog)
    }

    /// Add a creature to the catalog; a repeated ID points the index at the newest entry
    pub fn add_creature(&mut self, creature: KnownCreature) {
        let index = self.creatures.len();
        if self.id_to_index.insert(creature.id.clone(), index).is_some() {
            warn!(id = %creature.id, "duplicate creature id; later entry wins");
        }
        self.creatures.push(creature);
    }

    /// Add a part template; a repeated category points the index at the newest entry
    pub fn add_part(&mut self, part: PartTemplate) {
        let index = self.parts.len();
        self.category_to_part.insert(part.category, index);
        self.parts.push(part);
    }

    /// Get a creature by ID
    pub fn get(&self, id: &CreatureId) -> Option<&KnownCreature> {
        self.id_to_index.get(id).map(|&idx| &self.creatures[idx])
    }

    /// Get the part template for a category
    pub fn part(&self, category: CategoryId) -> Option<&PartTemplate> {
        self.category_to_part
            .get(&category)
            .map(|&idx| &self.parts[idx])
    }

    /// Export catalog to JSON
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            compatibility: self.compatibility.clone(),
            parts: self.parts.clone(),
            creatures: self.creatures.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of creatures in catalog
    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }
}
