//! Plain values carried by configuration records.
//!
//! Records must round-trip through text and binary serializers, so the value
//! model is a closed set of owned, serde-representable shapes. No opaque
//! runtime object can appear in a record.

use std::fmt::{self, Write};

use indexmap::IndexMap;

use crate::record::ConfigRecord;

/// A plain configuration value.
///
/// Values are owned data and can be freely cloned, compared, serialized, and
/// shared across threads. `Config` holds a nested configuration record, which
/// is how one record references another (e.g. a configured optimizer carrying
/// a configured schedule).
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Value {
    /// The absent/null value.
    None,
    /// Boolean flag.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit IEEE 754 float.
    Float(f64),
    /// UTF-8 string.
    Str(String),
    /// Ordered sequence of values.
    List(Vec<Self>),
    /// Insertion-ordered string-keyed mapping.
    Dict(IndexMap<String, Self>),
    /// A nested configuration record.
    Config(Box<ConfigRecord>),
}

impl Value {
    /// Type name used in diagnostics, matching the conventions of the
    /// configuration front-ends this engine serves.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::None => "NoneType",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
            Self::List(_) => "list",
            Self::Dict(_) => "dict",
            Self::Config(_) => "config",
        }
    }
}

/// Renders values the way call-site diagnostics quote them: strings quoted,
/// booleans capitalized, containers recursively.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => {
                if value.is_finite() && value.fract() == 0.0 {
                    write!(f, "{value:.1}")
                } else {
                    write!(f, "{value}")
                }
            }
            Self::Str(value) => write!(f, "'{value}'"),
            Self::List(items) => {
                f.write_char('[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_char(']')
            }
            Self::Dict(entries) => {
                f.write_char('{')?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "'{key}': {value}")?;
                }
                f.write_char('}')
            }
            Self::Config(record) => write!(f, "<config {}>", record.name()),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<Self>> for Value {
    fn from(value: Vec<Self>) -> Self {
        Self::List(value)
    }
}

impl From<IndexMap<String, Self>> for Value {
    fn from(value: IndexMap<String, Self>) -> Self {
        Self::Dict(value)
    }
}

impl From<ConfigRecord> for Value {
    fn from(value: ConfigRecord) -> Self {
        Self::Config(Box::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_scalars() {
        assert_eq!(Value::None.to_string(), "None");
        assert_eq!(Value::Bool(true).to_string(), "True");
        assert_eq!(Value::Int(-3).to_string(), "-3");
        assert_eq!(Value::Float(1.0).to_string(), "1.0");
        assert_eq!(Value::Float(0.25).to_string(), "0.25");
        assert_eq!(Value::Str("hi".into()).to_string(), "'hi'");
    }

    #[test]
    fn type_names_follow_front_end_conventions() {
        assert_eq!(Value::None.type_name(), "NoneType");
        assert_eq!(Value::Int(1).type_name(), "int");
        assert_eq!(Value::Str(String::new()).type_name(), "str");
        assert_eq!(Value::List(Vec::new()).type_name(), "list");
    }

    #[test]
    fn display_containers() {
        let list = Value::List(vec![Value::Int(1), Value::Str("a".into())]);
        assert_eq!(list.to_string(), "[1, 'a']");

        let mut entries = IndexMap::new();
        entries.insert("k".to_owned(), Value::Bool(false));
        assert_eq!(Value::Dict(entries).to_string(), "{'k': False}");
    }
}
