//! Callable signature models and parameter descriptors.
//!
//! A [`Signature`] is the normalized, ordered view of a callable's parameter
//! list: positional-only parameters, then positional-or-keyword, then the
//! var-positional capture, then keyword-only, then the var-keyword capture.
//! Signatures are produced once by a resolver adapter at the system boundary;
//! the validation engine only ever sees this structure, never a live callable.

use strum::{Display, EnumString, IntoStaticStr};

use crate::value::Value;

/// How a parameter may be supplied at a call site.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, serde::Serialize, serde::Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    /// Can only be filled by position, e.g. `a` in `def f(a, /)`.
    PositionalOnly,
    /// Can be filled by position or by name (the common case).
    PositionalOrKeyword,
    /// Captures any number of excess positional arguments (`*args`).
    VarPositional,
    /// Can only be filled by name, e.g. `c` in `def f(*, c)`.
    KeywordOnly,
    /// Captures any number of excess named arguments (`**kwargs`).
    VarKeyword,
}

impl ParamKind {
    /// Whether a parameter of this kind consumes a positional argument slot.
    pub(crate) fn is_positional(self) -> bool {
        matches!(self, Self::PositionalOnly | Self::PositionalOrKeyword)
    }

    /// Whether a parameter of this kind can be addressed by name.
    pub(crate) fn is_keyword(self) -> bool {
        matches!(self, Self::PositionalOrKeyword | Self::KeywordOnly)
    }

    /// Declaration-order rank, used to assert parameter grouping.
    fn rank(self) -> u8 {
        match self {
            Self::PositionalOnly => 0,
            Self::PositionalOrKeyword => 1,
            Self::VarPositional => 2,
            Self::KeywordOnly => 3,
            Self::VarKeyword => 4,
        }
    }
}

/// One parameter descriptor: name, kind, and declared default (if any).
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Param {
    name: String,
    kind: ParamKind,
    default: Option<Value>,
}

impl Param {
    /// A parameter without a declared default.
    pub fn required(name: impl Into<String>, kind: ParamKind) -> Self {
        Self {
            name: name.into(),
            kind,
            default: None,
        }
    }

    /// A parameter with a declared default value.
    pub fn with_default(name: impl Into<String>, kind: ParamKind, default: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            kind,
            default: Some(default.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ParamKind {
        self.kind
    }

    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}

/// Normalized model of a callable's parameter list.
///
/// An opaque signature (`introspectable = false`) represents a target whose
/// parameter list could not be determined, such as a native builtin with no
/// recoverable metadata. Opaque signatures carry no parameters and admit only
/// the arity-free validation path.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Signature {
    params: Vec<Param>,
    introspectable: bool,
}

impl Signature {
    /// Builds a signature from parameters in declaration order.
    ///
    /// Parameters must be grouped positional-only, positional-or-keyword,
    /// var-positional, keyword-only, var-keyword, with at most one of each
    /// variadic kind. The grouping is a resolver-adapter invariant and is
    /// asserted in debug builds.
    pub fn new(params: Vec<Param>) -> Self {
        debug_assert!(
            params.windows(2).all(|pair| pair[0].kind.rank() <= pair[1].kind.rank()),
            "parameters must be grouped in declaration-kind order"
        );
        debug_assert!(
            params.iter().filter(|p| p.kind == ParamKind::VarPositional).count() <= 1
                && params.iter().filter(|p| p.kind == ParamKind::VarKeyword).count() <= 1,
            "a signature accepts at most one var-positional and one var-keyword parameter"
        );
        Self {
            params,
            introspectable: true,
        }
    }

    /// The zero-parameter signature.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Signature of a target whose parameter list cannot be determined.
    pub fn opaque() -> Self {
        Self {
            params: Vec::new(),
            introspectable: false,
        }
    }

    /// Whether the parameter list is known.
    pub fn introspectable(&self) -> bool {
        self.introspectable
    }

    /// All parameters in declaration order.
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Parameters that consume positional argument slots, in order.
    pub(crate) fn positional_params(&self) -> impl Iterator<Item = &Param> {
        self.params.iter().filter(|param| param.kind.is_positional())
    }

    /// Parameters addressable by name, in declaration order.
    pub(crate) fn keyword_params(&self) -> impl Iterator<Item = &Param> {
        self.params.iter().filter(|param| param.kind.is_keyword())
    }

    pub(crate) fn has_var_positional(&self) -> bool {
        self.params.iter().any(|param| param.kind == ParamKind::VarPositional)
    }

    pub(crate) fn has_var_keyword(&self) -> bool {
        self.params.iter().any(|param| param.kind == ParamKind::VarKeyword)
    }

    /// Maximum number of positional arguments accepted.
    ///
    /// Returns `None` when a var-positional parameter captures any excess.
    pub(crate) fn max_positional_count(&self) -> Option<usize> {
        if self.has_var_positional() {
            None
        } else {
            Some(self.positional_params().count())
        }
    }
}
