//! Typed construction failures.
//!
//! Every variant carries structured context rather than a pre-rendered
//! message, so hosts can match on failure shape; `Display` renders the
//! call-site diagnostics users expect from ordinary call errors. A failed
//! construction request never produces a partial record: the first violation
//! aborts the whole request.

use std::fmt;

use crate::value::Value;

/// Result alias for construction-request operations.
pub type BuildResult<T> = Result<T, BuildError>;

/// Everything that can reject a construction request.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BuildError {
    /// More positional arguments were supplied than the target's signature
    /// accepts.
    TooManyPositionalArguments {
        target: String,
        supplied: usize,
        max_accepted: usize,
    },
    /// A keyword argument matches no keyword-capable parameter of the target.
    UnknownKeywordArgument { target: String, name: String },
    /// One logical parameter received both a positional and a keyword value.
    MultipleValuesForArgument { target: String, name: String },
    /// The target is not invocable.
    NotCallable { target: String },
    /// The target has no dotted import path, so a record naming it could not
    /// be reconstructed later.
    UnresolvableTarget { target: String },
    /// A behavioral option was set to a value outside its domain.
    InvalidOption { option: String, value: String },
    /// A base built as partial cannot be specialized by a non-partial request.
    IncompatiblePartialInheritance { base: String },
    /// Full-signature population was requested for a target with no
    /// introspectable signature.
    SignatureUnavailable { target: String },
}

impl BuildError {
    /// Builds an `InvalidOption` error rendering the offending value
    /// the way diagnostics quote plain values.
    pub(crate) fn invalid_option(option: &str, value: &Value) -> Self {
        Self::InvalidOption {
            option: option.to_owned(),
            value: value.to_string(),
        }
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyPositionalArguments {
                target,
                supplied,
                max_accepted,
            } => {
                write!(
                    f,
                    "{target}() takes {max_accepted} positional argument{} but {supplied} {} given",
                    if *max_accepted == 1 { "" } else { "s" },
                    if *supplied == 1 { "was" } else { "were" }
                )
            }
            Self::UnknownKeywordArgument { target, name } => {
                write!(f, "{target}() got an unexpected keyword argument '{name}'")
            }
            Self::MultipleValuesForArgument { target, name } => {
                write!(f, "{target}() got multiple values for argument '{name}'")
            }
            Self::NotCallable { target } => write!(f, "{target} is not callable"),
            Self::UnresolvableTarget { target } => {
                write!(f, "{target} is not importable from a module-level path")
            }
            Self::InvalidOption { option, value } => {
                write!(f, "invalid value for option '{option}': {value}")
            }
            Self::IncompatiblePartialInheritance { base } => {
                write!(
                    f,
                    "base '{base}' was built as partial and cannot be specialized with partial disabled"
                )
            }
            Self::SignatureUnavailable { target } => {
                write!(f, "{target} has no inspectable signature to populate")
            }
        }
    }
}

impl std::error::Error for BuildError {}
