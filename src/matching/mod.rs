//! Similarity scoring and catalog matching.
//!
//! - [`CompatibilityTable`]: how interchangeable two part categories are
//! - [`MatchScore`]: per-unit breakdown of one configuration judging another
//! - [`MatchingEngine`]: ranks catalog creatures against a candidate
//!
//! ## Scoring
//!
//! Two elements score `compatibility × (1.5 - distance) × orientation`, so a
//! perfect match is 1.5 rather than 1. A unit scores another unit by taking,
//! for each of the other unit's elements, its best partner and averaging over
//! the larger of the two unit sizes. A configuration reports its best unit.
//!
//! ## Example
//!
//! ```rust,no_run
//! use topo_mask::{Configuration, CreatureCatalog, MatchingEngine};
//!
//! let catalog = CreatureCatalog::load_embedded().unwrap();
//! let candidate = Configuration::parse("1@1-2@0.5^0.4-3@0");
//!
//! let engine = MatchingEngine::new(&catalog);
//! for m in engine.find_matches(&candidate) {
//!     println!("{}: {:.3}", m.creature.display_name, m.score.best);
//! }
//! ```
//!
//! [`CompatibilityTable`]: compatibility::CompatibilityTable
//! [`MatchScore`]: scoring::MatchScore
//! [`MatchingEngine`]: engine::MatchingEngine

pub mod compatibility;
pub mod engine;
pub mod scoring;

pub use engine::MatchingConfig;
