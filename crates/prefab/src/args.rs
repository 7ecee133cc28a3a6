//! Call-site argument sets and the inheritance merge fold.

use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::value::Value;

/// Positional values stored inline for the common 0–2 argument case.
pub(crate) type PositionalValues = SmallVec<[Value; 2]>;

/// The positional and keyword arguments of one construction request.
///
/// Keyword keys are unique and insertion-ordered. Whether a keyword key is
/// *also* satisfied positionally is a property of the target's signature, so
/// that invariant is checked by the validator rather than on construction.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ArgumentSet {
    positional: PositionalValues,
    keyword: IndexMap<String, Value>,
}

impl ArgumentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a positional argument.
    pub fn push_positional(&mut self, value: impl Into<Value>) {
        self.positional.push(value.into());
    }

    /// Inserts or replaces a keyword argument. Within one set the last writer
    /// wins; the key keeps its original position.
    pub fn set_keyword(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.keyword.insert(name.into(), value.into());
    }

    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    pub fn keyword(&self) -> &IndexMap<String, Value> {
        &self.keyword
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keyword.is_empty()
    }

    /// Folds inherited argument sets with a new one into a merged set.
    ///
    /// Positional sequences concatenate base-by-base in declaration order,
    /// the new set's positionals last. Keyword mappings merge left-to-right
    /// over the bases then the new set, later values overriding earlier ones
    /// by key. The fold is pure: inputs are never mutated, and merging cannot
    /// fail — any arity conflict the concatenation creates is reported by
    /// the validator against the target's signature.
    #[must_use]
    pub fn merged<'a>(bases: impl IntoIterator<Item = &'a Self>, new: &Self) -> Self {
        let mut out = Self::new();
        for base in bases {
            out.positional.extend(base.positional.iter().cloned());
            for (key, value) in &base.keyword {
                out.keyword.insert(key.clone(), value.clone());
            }
        }
        out.positional.extend(new.positional.iter().cloned());
        for (key, value) in &new.keyword {
            out.keyword.insert(key.clone(), value.clone());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(positional: &[i64], keyword: &[(&str, i64)]) -> ArgumentSet {
        let mut args = ArgumentSet::new();
        for value in positional {
            args.push_positional(*value);
        }
        for (name, value) in keyword {
            args.set_keyword(*name, *value);
        }
        args
    }

    #[test]
    fn merge_concatenates_positionals_in_base_order() {
        let first = set(&[1, 2], &[]);
        let second = set(&[3], &[]);
        let new = set(&[4], &[]);
        let merged = ArgumentSet::merged([&first, &second], &new);
        assert_eq!(
            merged.positional(),
            &[Value::Int(1), Value::Int(2), Value::Int(3), Value::Int(4)]
        );
    }

    #[test]
    fn merge_lets_later_keyword_writers_win() {
        let first = set(&[], &[("lr", 1), ("momentum", 9)]);
        let second = set(&[], &[("lr", 2)]);
        let new = set(&[], &[("momentum", 3)]);
        let merged = ArgumentSet::merged([&first, &second], &new);
        assert_eq!(merged.keyword()["lr"], Value::Int(2));
        assert_eq!(merged.keyword()["momentum"], Value::Int(3));
        assert_eq!(merged.keyword().len(), 2);
    }

    #[test]
    fn merge_does_not_mutate_inputs() {
        let base = set(&[1], &[("x", 1)]);
        let new = set(&[2], &[("x", 2)]);
        let before = base.clone();
        let _ = ArgumentSet::merged([&base], &new);
        assert_eq!(base, before);
    }
}
