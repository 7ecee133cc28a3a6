//! Behavioral flags for construction requests.
//!
//! Options arrive either through the typed fields of [`BuildOptions`] or, for
//! untyped front-ends (text configuration, host bridges), through
//! [`BuildOptions::apply`], which checks each value against a single schema
//! table. Cross-flag constraints are enforced once per construction request
//! by [`BuildOptions::ensure_coherent`].

use strum::{Display, EnumString, IntoStaticStr};

use crate::{
    error::{BuildError, BuildResult},
    value::Value,
};

/// How instantiation converts configured containers back to plain values.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    IntoStaticStr,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Convert {
    /// Leave configured containers as configuration objects.
    #[default]
    None,
    /// Convert containers, passing nested records through untouched.
    Partial,
    /// Convert everything to plain containers.
    All,
}

/// Behavioral flags attached to one construction request.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BuildOptions {
    /// Instantiate nested records recursively.
    pub recursive: bool,
    /// Defer the call: the record describes a partial application whose
    /// remaining arguments arrive at instantiation time.
    pub partial: bool,
    /// Container conversion mode.
    pub convert: Convert,
    /// Record name override; derived from the target name when unset.
    pub name: Option<String>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            recursive: true,
            partial: false,
            convert: Convert::None,
            name: None,
        }
    }
}

/// Value domains understood by the option schema.
#[derive(Debug, Clone, Copy)]
enum Domain {
    Bool,
    Convert,
    Name,
}

/// A validated option value.
enum Parsed {
    Bool(bool),
    Convert(Convert),
    Name(String),
}

impl Domain {
    fn parse(self, option: &str, value: &Value) -> BuildResult<Parsed> {
        match self {
            Self::Bool => {
                let Value::Bool(flag) = value else {
                    return Err(BuildError::invalid_option(option, value));
                };
                Ok(Parsed::Bool(*flag))
            }
            Self::Convert => {
                let Value::Str(mode) = value else {
                    return Err(BuildError::invalid_option(option, value));
                };
                mode.parse::<Convert>()
                    .map(Parsed::Convert)
                    .map_err(|_| BuildError::invalid_option(option, value))
            }
            Self::Name => {
                let Value::Str(name) = value else {
                    return Err(BuildError::invalid_option(option, value));
                };
                if is_identifier(name) {
                    Ok(Parsed::Name(name.clone()))
                } else {
                    Err(BuildError::invalid_option(option, value))
                }
            }
        }
    }
}

/// The flag-schema table: every recognized option and its allowed domain.
const OPTION_SCHEMA: &[(&str, Domain)] = &[
    ("recursive", Domain::Bool),
    ("partial", Domain::Bool),
    ("convert", Domain::Convert),
    ("name", Domain::Name),
];

impl BuildOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one untyped option value, validating it against the schema
    /// table. Unknown option names and out-of-domain values fail with
    /// [`BuildError::InvalidOption`].
    pub fn apply(&mut self, option: &str, value: &Value) -> BuildResult<()> {
        let Some(&(name, domain)) = OPTION_SCHEMA.iter().find(|(name, _)| *name == option) else {
            return Err(BuildError::invalid_option(option, value));
        };
        match (name, domain.parse(option, value)?) {
            ("recursive", Parsed::Bool(flag)) => self.recursive = flag,
            ("partial", Parsed::Bool(flag)) => self.partial = flag,
            ("convert", Parsed::Convert(mode)) => self.convert = mode,
            ("name", Parsed::Name(record_name)) => self.name = Some(record_name),
            _ => return Err(BuildError::invalid_option(option, value)),
        }
        Ok(())
    }

    /// Cross-flag constraints, checked once per construction request.
    ///
    /// Partial application defers arguments to instantiation time, which only
    /// stays meaningful when nested records are instantiated recursively, so
    /// `partial` together with `recursive = false` is rejected. A name set
    /// through the typed field goes through the same identifier rule as the
    /// schema table.
    pub(crate) fn ensure_coherent(&self) -> BuildResult<()> {
        if self.partial && !self.recursive {
            return Err(BuildError::invalid_option("recursive", &Value::Bool(false)));
        }
        if let Some(name) = &self.name
            && !is_identifier(name)
        {
            return Err(BuildError::invalid_option("name", &Value::Str(name.clone())));
        }
        Ok(())
    }
}

/// Record names become symbols in generated configuration stores, so they
/// must be plain identifiers.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_accepts_in_domain_values() {
        let mut options = BuildOptions::new();
        options.apply("recursive", &Value::Bool(false)).unwrap();
        options.apply("partial", &Value::Bool(true)).unwrap();
        options.apply("convert", &Value::Str("all".into())).unwrap();
        options.apply("name", &Value::Str("AdamConf".into())).unwrap();
        assert!(!options.recursive);
        assert!(options.partial);
        assert_eq!(options.convert, Convert::All);
        assert_eq!(options.name.as_deref(), Some("AdamConf"));
    }

    #[test]
    fn apply_rejects_out_of_domain_values() {
        let mut options = BuildOptions::new();
        for (option, value) in [
            ("recursive", Value::Int(1)),
            ("partial", Value::Int(1)),
            ("convert", Value::Int(1)),
            ("convert", Value::Str("wrong value".into())),
            ("name", Value::Int(1)),
            ("name", Value::Str("not an identifier".into())),
            ("populate", Value::Bool(true)),
        ] {
            let err = options.apply(option, &value).unwrap_err();
            assert!(matches!(err, BuildError::InvalidOption { .. }), "{option}: {err}");
        }
    }

    #[test]
    fn partial_requires_recursive() {
        let options = BuildOptions {
            partial: true,
            recursive: false,
            ..BuildOptions::default()
        };
        assert!(matches!(
            options.ensure_coherent(),
            Err(BuildError::InvalidOption { .. })
        ));
    }
}
