//! Immutable configuration records.

use indexmap::IndexMap;

use crate::{
    args::ArgumentSet,
    options::{BuildOptions, Convert},
    value::Value,
};

/// The synthesized description of one future call.
///
/// A record is produced only by a successful construction request and is
/// never mutated afterwards; it can serve read-only as a base for later
/// requests. Every field is a plain serde value, so records round-trip
/// losslessly through text and binary serializers. Replayed as
/// `call(target, *positional, **keyword)`, the stored field set would
/// succeed under ordinary call semantics.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ConfigRecord {
    target: String,
    name: String,
    args: ArgumentSet,
    recursive: bool,
    partial: bool,
    convert: Convert,
}

impl ConfigRecord {
    pub(crate) fn new(target: String, name: String, args: ArgumentSet, options: &BuildOptions) -> Self {
        Self {
            target,
            name,
            args,
            recursive: options.recursive,
            partial: options.partial,
            convert: options.convert,
        }
    }

    /// Dotted import path of the configured callable.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Record name, derived from the target unless overridden.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bound positional arguments, in call order.
    pub fn positional(&self) -> &[Value] {
        self.args.positional()
    }

    /// Bound keyword arguments, insertion-ordered.
    pub fn keyword(&self) -> &IndexMap<String, Value> {
        self.args.keyword()
    }

    pub(crate) fn args(&self) -> &ArgumentSet {
        &self.args
    }

    /// Whether nested records are instantiated recursively.
    pub fn is_recursive(&self) -> bool {
        self.recursive
    }

    /// Whether instantiation produces a partial application instead of a
    /// completed call.
    pub fn is_partial(&self) -> bool {
        self.partial
    }

    pub fn convert(&self) -> Convert {
        self.convert
    }

    /// JSON rendering of the record, keys in field order.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parses a record previously rendered with [`ConfigRecord::to_json`].
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
