//! Creature catalog storage.
//!
//! The catalog holds the known creatures with their reference configurations,
//! the category compatibility table, and the part templates. An embedded
//! catalog is compiled into the binary; custom catalogs can be loaded from
//! JSON files in the same format.
//!
//! ## Example
//!
//! ```rust,no_run
//! use topo_mask::CreatureCatalog;
//! use topo_mask::core::types::CreatureId;
//! use std::path::Path;
//!
//! let catalog = CreatureCatalog::load_embedded().unwrap();
//! for creature in &catalog.creatures {
//!     println!("{}", creature.id);
//! }
//! let imp = catalog.get(&CreatureId::new("imp"));
//!
//! // Export, edit, and load back
//! let json = catalog.to_json().unwrap();
//! let custom = CreatureCatalog::load_from_file(Path::new("my_catalog.json")).unwrap();
//! ```

pub mod store;
