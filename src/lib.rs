//! # topo-mask
//!
//! A library for scoring how closely one part-based appearance matches another.
//!
//! An appearance is a set of placed parts: each part has a category, a position
//! in the unit square, and an orientation in degrees. A creature knows one or
//! more looks it accepts as its own kind. Given a candidate look, say a
//! player wearing a disguise, `topo-mask` scores how strongly each creature
//! takes the candidate for one of its own.
//!
//! ## Features
//!
//! - **Compact text format**: configurations round-trip through a delimited string
//! - **Category compatibility**: interchangeable parts score partially
//! - **Orientation equivalences**: symmetric parts match at several rotations
//! - **Per-look breakdown**: every accepted look is scored, the best one wins
//! - **Creature catalog**: an embedded JSON catalog, plus custom catalogs from disk
//!
//! ## Example
//!
//! ```rust,no_run
//! use topo_mask::{Configuration, CreatureCatalog, MatchingEngine};
//!
//! // Load the embedded catalog of known creatures
//! let catalog = CreatureCatalog::load_embedded().unwrap();
//!
//! // One eye above a mouth
//! let candidate = Configuration::parse("1@1-2@0.5^0.35-3@0;1@4-2@0.5^0.75-3@1-4@0");
//!
//! let engine = MatchingEngine::new(&catalog);
//! for m in engine.find_matches(&candidate) {
//!     println!("{}: {:.3}", m.creature.display_name, m.score.best);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Creature catalog storage
//! - [`core`]: Elements, units, configurations, and the collaborator traits
//! - [`matching`]: Compatibility table, scoring, and the matching engine
//! - [`parsing`]: The configuration text codec
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;

// Re-export commonly used types for convenience
pub use catalog::store::CreatureCatalog;
pub use core::agent::{JudgesConfiguration, ProvidesConfiguration, Wearer};
pub use core::configuration::Configuration;
pub use core::creature::KnownCreature;
pub use core::element::Element;
pub use core::part::PartTemplate;
pub use core::types::*;
pub use core::unit::ConfigurationUnit;
pub use matching::compatibility::CompatibilityTable;
pub use matching::engine::{MatchResult, MatchingConfig, MatchingEngine};
pub use matching::scoring::MatchScore;
