//! Unit and configuration level splitting and joining.
//!
//! ```text
//! configuration := unit ( '|' unit )*
//! unit          := element ( ';' element )*
//! ```

use std::fmt;

use tracing::debug;

use crate::core::configuration::Configuration;
use crate::core::unit::ConfigurationUnit;
use crate::parsing::element::{parse_element, write_element};

/// Separates elements inside a unit token
pub const ELEMENT_SEPARATOR: char = ';';

/// Separates units inside a configuration string
pub const UNIT_SEPARATOR: char = '|';

/// Parse a unit token. An empty token yields a unit holding one default element.
#[must_use]
pub fn parse_unit(token: &str) -> ConfigurationUnit {
    ConfigurationUnit::from_elements(token.split(ELEMENT_SEPARATOR).map(parse_element).collect())
}

/// Parse every unit of a configuration string, in order
#[must_use]
pub fn parse_units(text: &str) -> Vec<ConfigurationUnit> {
    let units: Vec<ConfigurationUnit> = text.split(UNIT_SEPARATOR).map(parse_unit).collect();
    debug!(
        units = units.len(),
        elements = units.iter().map(ConfigurationUnit::len).sum::<usize>(),
        "parsed configuration"
    );
    units
}

/// Write the token form of a unit
///
/// # Errors
///
/// Propagates errors from the underlying writer.
pub fn write_unit(out: &mut impl fmt::Write, unit: &ConfigurationUnit) -> fmt::Result {
    for (i, element) in unit.elements().iter().enumerate() {
        if i > 0 {
            out.write_char(ELEMENT_SEPARATOR)?;
        }
        write_element(out, element)?;
    }
    Ok(())
}

/// Write the string form of a whole configuration
///
/// # Errors
///
/// Propagates errors from the underlying writer.
pub fn write_configuration(out: &mut impl fmt::Write, configuration: &Configuration) -> fmt::Result {
    for (i, unit) in configuration.units().iter().enumerate() {
        if i > 0 {
            out.write_char(UNIT_SEPARATOR)?;
        }
        write_unit(out, unit)?;
    }
    Ok(())
}
