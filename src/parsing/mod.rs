//! Codec for the compact configuration text format.
//!
//! ```text
//! configuration  := unit ( '|' unit )*
//! unit           := element ( ';' element )*
//! element        := field ( '-' field )*
//! field          := code '@' value
//! ```
//!
//! | Code | Field | Value |
//! |------|-------|-------|
//! | 1 | category | non-negative integer |
//! | 2 | position | `x^y`, each clamped to [0, 1] |
//! | 3 | consider orientation | `1` for true, anything else false |
//! | 4 | orientation | degrees, clamped to [0, 360] |
//! | 5 | orientation equivalences | `v1^v2^...`, kept when strictly inside (0, 360) |
//!
//! Parsing never fails. Malformed fields and unknown codes are skipped and
//! reported at `trace` level.
//!
//! ## Example
//!
//! ```rust
//! use topo_mask::Configuration;
//!
//! let config = Configuration::parse("1@1-2@0.5^0.5-3@0");
//! assert_eq!(config.to_string(), "1@1-2@0.5^0.5-3@0-4@0");
//! ```

pub mod configuration;
pub mod element;
