//! Core data types for appearance configurations.
//!
//! - [`Element`]: one placed part (category, position, orientation)
//! - [`ConfigurationUnit`]: one complete look, an unordered bag of elements
//! - [`Configuration`]: every look an owner accepts, plus the live "main" unit
//! - [`PartTemplate`]: per-category defaults used when a part is attached
//! - [`KnownCreature`]: a catalog entry that judges other configurations
//! - [`ProvidesConfiguration`], [`JudgesConfiguration`], [`Wearer`]: collaborator seams
//!
//! ## Positions and angles
//!
//! Positions are normalized to the unit square and orientations are degrees.
//! Parsed values are clamped into range; values built in code through the
//! constructors are clamped the same way.
//!
//! [`Element`]: element::Element
//! [`ConfigurationUnit`]: unit::ConfigurationUnit
//! [`Configuration`]: configuration::Configuration
//! [`PartTemplate`]: part::PartTemplate
//! [`KnownCreature`]: creature::KnownCreature
//! [`ProvidesConfiguration`]: agent::ProvidesConfiguration
//! [`JudgesConfiguration`]: agent::JudgesConfiguration
//! [`Wearer`]: agent::Wearer

pub mod agent;
pub mod configuration;
pub mod creature;
pub mod element;
pub mod part;
pub mod types;
pub mod unit;
