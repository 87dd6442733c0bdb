//! Element token codec.
//!
//! An element token is a `-`-separated list of `code@value` fields. Parsing is
//! total: malformed fields and unknown codes are skipped, out-of-range values
//! are clamped, and absent codes keep the element defaults.

use std::fmt;

use tracing::trace;

use crate::core::element::{Element, FULL_TURN};
use crate::core::types::{CategoryId, Position};

/// Separates fields inside an element token
pub const FIELD_SEPARATOR: char = '-';

/// Separates a field code from its value
pub const CODE_SEPARATOR: char = '@';

/// Separates the components of a multi-valued field
pub const VALUE_SEPARATOR: char = '^';

/// Field codes recognized in an element token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldCode {
    /// `1@<int>` part category
    Category,
    /// `2@<x>^<y>` normalized position
    Position,
    /// `3@0|1` whether orientation takes part in comparison
    ConsiderOrientation,
    /// `4@<deg>` orientation
    Orientation,
    /// `5@<deg>^<deg>...` orientation equivalence offsets
    Equivalences,
}

impl FieldCode {
    #[must_use]
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Category),
            2 => Some(Self::Position),
            3 => Some(Self::ConsiderOrientation),
            4 => Some(Self::Orientation),
            5 => Some(Self::Equivalences),
            _ => None,
        }
    }

    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Category => 1,
            Self::Position => 2,
            Self::ConsiderOrientation => 3,
            Self::Orientation => 4,
            Self::Equivalences => 5,
        }
    }
}

/// Parse a finite float; `NaN` and infinities count as unparseable
fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a single element token
#[must_use]
pub fn parse_element(token: &str) -> Element {
    let mut element = Element::default();

    for field in token.split(FIELD_SEPARATOR) {
        let mut parts = field.split(CODE_SEPARATOR);
        let (Some(code), Some(value)) = (parts.next(), parts.next()) else {
            if !field.is_empty() {
                trace!(field, "skipping element field without code separator");
            }
            continue;
        };

        let Some(code) = code.trim().parse::<i64>().ok().and_then(FieldCode::from_code) else {
            trace!(field, "skipping element field with unknown code");
            continue;
        };

        if !apply_field(&mut element, code, value) {
            trace!(field, ?code, "skipping element field with unparseable value");
        }
    }

    element
}

/// Apply one field to the element; returns false when the value was rejected
fn apply_field(element: &mut Element, code: FieldCode, value: &str) -> bool {
    match code {
        FieldCode::Category => match value.trim().parse::<i32>() {
            Ok(category) => {
                element.category = CategoryId::clamped(category);
                true
            }
            Err(_) => false,
        },
        FieldCode::Position => {
            let mut axes = value.split(VALUE_SEPARATOR);
            match (
                axes.next().and_then(parse_number),
                axes.next().and_then(parse_number),
            ) {
                (Some(x), Some(y)) => {
                    element.position = Position::clamped(x, y);
                    true
                }
                _ => false,
            }
        }
        FieldCode::ConsiderOrientation => {
            element.consider_orientation = value == "1";
            true
        }
        FieldCode::Orientation => match parse_number(value) {
            Some(orientation) => {
                element.orientation = orientation.clamp(0.0, FULL_TURN);
                true
            }
            None => false,
        },
        FieldCode::Equivalences => {
            // The field always resets the set, even if none of its values survive
            *element = std::mem::take(element).with_orientation_equivalences(
                value.split(VALUE_SEPARATOR).filter_map(parse_number),
            );
            true
        }
    }
}

/// Fold an orientation into [0, 360)
#[must_use]
pub fn wrap_orientation(orientation: f64) -> f64 {
    normalize_zero(orientation.rem_euclid(FULL_TURN))
}

/// Turn `-0.0` into `0.0` so a serialized number never carries a field separator
#[inline]
fn normalize_zero(value: f64) -> f64 {
    value + 0.0
}

/// Write the token form of an element
///
/// Codes 1 to 4 are always emitted; code 5 only when the element has an
/// equivalence offset strictly inside (0, 360).
///
/// # Errors
///
/// Propagates errors from the underlying writer.
pub fn write_element(out: &mut impl fmt::Write, element: &Element) -> fmt::Result {
    write!(
        out,
        "{}{CODE_SEPARATOR}{}{FIELD_SEPARATOR}{}{CODE_SEPARATOR}{}{VALUE_SEPARATOR}{}",
        FieldCode::Category.code(),
        element.category,
        FieldCode::Position.code(),
        normalize_zero(element.position.x),
        normalize_zero(element.position.y),
    )?;
    write!(
        out,
        "{FIELD_SEPARATOR}{}{CODE_SEPARATOR}{}",
        FieldCode::ConsiderOrientation.code(),
        u8::from(element.consider_orientation),
    )?;
    write!(
        out,
        "{FIELD_SEPARATOR}{}{CODE_SEPARATOR}{}",
        FieldCode::Orientation.code(),
        wrap_orientation(element.orientation),
    )?;

    let mut inner = element.inner_equivalences().peekable();
    if inner.peek().is_some() {
        write!(
            out,
            "{FIELD_SEPARATOR}{}{CODE_SEPARATOR}",
            FieldCode::Equivalences.code()
        )?;
        for (i, offset) in inner.enumerate() {
            if i > 0 {
                out.write_char(VALUE_SEPARATOR)?;
            }
            write!(out, "{offset}")?;
        }
    }

    Ok(())
}

/// Serialize an element to its token form
#[must_use]
pub fn serialize_element(element: &Element) -> String {
    let mut token = String::new();
    // Writing into a String cannot fail
    let _ = write_element(&mut token, element);
    token
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_parse_full_token() {
        let e = parse_element("1@3-2@0.662^0.679-3@1-4@229.639-5@180");
        assert_eq!(e.category(), CategoryId(3));
        assert_close(e.position().x, 0.662);
        assert_close(e.position().y, 0.679);
        assert!(e.consider_orientation());
        assert_close(e.orientation(), 229.639);
        assert_eq!(e.orientation_equivalences(), &[0.0, 360.0, 180.0]);
    }

    #[test]
    fn test_parse_empty_token_is_default() {
        assert_eq!(parse_element(""), Element::default());
    }

    #[test]
    fn test_parse_clamps_out_of_range_values() {
        let e = parse_element("1@7-2@1.7^0-4@725");
        assert_eq!(e.category(), CategoryId(7));
        assert_eq!(e.position(), Position::new(1.0, 0.0));
        assert_close(e.orientation(), 360.0);

        let e = parse_element("2@0^1.5");
        assert_eq!(e.position(), Position::new(0.0, 1.0));
    }

    #[test]
    fn test_parse_skips_category_beyond_integer_range() {
        let e = parse_element("1@99999999999-2@0.5^0.5");
        assert_eq!(e.category(), CategoryId(0));
        assert_eq!(e.position(), Position::new(0.5, 0.5));

        assert_eq!(parse_element("1@2147483647").category(), CategoryId(2_147_483_647));
    }

    #[test]
    fn test_parse_skips_malformed_fields() {
        // No separator, unknown code, non-numeric code and value, single-axis position
        let e = parse_element("garbage-9@4-x@1-1@abc-2@0.5-4@NaN-1@2");
        assert_eq!(e.category(), CategoryId(2));
        assert_eq!(e.position(), Position::default());
        assert!(e.orientation().abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_value_splits_on_field_separator() {
        // "4@-30" splits into "4@" and "30": both ignored, orientation stays default
        let e = parse_element("4@-30");
        assert!(e.orientation().abs() < f64::EPSILON);
    }

    #[test]
    fn test_consider_orientation_only_true_for_one() {
        assert!(!parse_element("3@0").consider_orientation());
        assert!(parse_element("3@1").consider_orientation());
        assert!(!parse_element("3@true").consider_orientation());
        assert!(!parse_element("3@").consider_orientation());
    }

    #[test]
    fn test_equivalences_reset_and_filter() {
        let e = parse_element("5@90-5@0^360^400^120^abc");
        assert_eq!(e.orientation_equivalences(), &[0.0, 360.0, 120.0]);
    }

    #[test]
    fn test_serialize_omits_sentinel_only_equivalences() {
        let e = parse_element("1@1-2@0.5^0.5-3@0");
        assert_eq!(serialize_element(&e), "1@1-2@0.5^0.5-3@0-4@0");
    }

    #[test]
    fn test_serialize_wraps_full_turn() {
        let e = parse_element("4@360");
        assert_eq!(serialize_element(&e), "1@0-2@0^0-3@1-4@0");
    }

    #[test]
    fn test_serialize_equivalences() {
        let e = parse_element("1@2-2@0.25^1-3@1-4@90-5@90^270");
        assert_eq!(serialize_element(&e), "1@2-2@0.25^1-3@1-4@90-5@90^270");
    }

    #[test]
    fn test_round_trip_each_field_code() {
        for token in [
            "1@7",
            "2@0.125^0.875",
            "3@0",
            "3@1",
            "4@45.5",
            "5@30^60",
        ] {
            let parsed = parse_element(token);
            let reparsed = parse_element(&serialize_element(&parsed));
            assert_eq!(parsed, reparsed, "round trip failed for {token}");
        }
    }

    #[test]
    fn test_wrap_orientation() {
        assert_close(wrap_orientation(360.0), 0.0);
        assert_close(wrap_orientation(-90.0), 270.0);
        assert_close(wrap_orientation(725.0), 5.0);
        assert!(wrap_orientation(-0.0).is_sign_positive());
    }
}
