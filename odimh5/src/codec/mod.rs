/// Attribute value codec
///
/// Grounds [`odimh5v21_hdf5.hpp`'s `HDF5Attribute`] get/set overloads: every
/// OdimH5 attribute is stored as an HDF5 scalar of a narrow primitive type
/// (64-bit integer, double, or fixed/variable-length string), never as an
/// array, and the handful of multi-field "composite" values are just a
/// specific text grammar layered on top of the string primitive. This module
/// owns the primitive <-> [`AttributeValue`] mapping; [`composite`] owns the
/// text grammars.

pub mod composite;

use crate::error::{OdimError, Result};

/// The narrow set of primitive shapes an OdimH5 attribute may hold.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Long(i64),
    Double(f64),
    Str(String),
}

impl AttributeValue {
    pub fn as_long(&self) -> Result<i64> {
        match self {
            AttributeValue::Long(v) => Ok(*v),
            AttributeValue::Double(v) => Ok(*v as i64),
            AttributeValue::Str(s) => s
                .parse()
                .map_err(|_| OdimError::format("<attribute>", format!("'{s}' is not an integer"))),
        }
    }

    pub fn as_double(&self) -> Result<f64> {
        match self {
            AttributeValue::Long(v) => Ok(*v as f64),
            AttributeValue::Double(v) => Ok(*v),
            AttributeValue::Str(s) => s
                .parse()
                .map_err(|_| OdimError::format("<attribute>", format!("'{s}' is not a number"))),
        }
    }

    pub fn as_str(&self) -> Result<String> {
        match self {
            AttributeValue::Long(v) => Ok(v.to_string()),
            AttributeValue::Double(v) => Ok(v.to_string()),
            AttributeValue::Str(s) => Ok(s.clone()),
        }
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        AttributeValue::Long(v)
    }
}

impl From<f64> for AttributeValue {
    fn from(v: f64) -> Self {
        AttributeValue::Double(v)
    }
}

impl From<String> for AttributeValue {
    fn from(v: String) -> Self {
        AttributeValue::Str(v)
    }
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        AttributeValue::Str(v.to_string())
    }
}

/// Parses the `True`/`False` boolean grammar OdimH5 uses in place of HDF5's
/// native (and less portable) boolean/enum types.
pub fn parse_bool(s: &str) -> Result<bool> {
    match s {
        "True" => Ok(true),
        "False" => Ok(false),
        other => Err(OdimError::format(
            "<attribute>",
            format!("'{other}' is not 'True' or 'False'"),
        )),
    }
}

pub fn format_bool(v: bool) -> &'static str {
    if v {
        "True"
    } else {
        "False"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_coercions_cross_variants() {
        assert_eq!(AttributeValue::Long(5).as_double().unwrap(), 5.0);
        assert_eq!(AttributeValue::Double(5.9).as_long().unwrap(), 5);
        assert_eq!(AttributeValue::Str("12".into()).as_long().unwrap(), 12);
    }

    #[test]
    fn bool_grammar_round_trips() {
        assert!(parse_bool("True").unwrap());
        assert!(!parse_bool("False").unwrap());
        assert_eq!(format_bool(true), "True");
        assert!(parse_bool("true").is_err());
    }
}
