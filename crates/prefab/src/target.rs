//! Capability-tagged references to configurable callables.
//!
//! A [`Target`] carries exactly what the engine needs to know about the
//! callable a request configures: a display name, the dotted import path it
//! can be re-imported from (if any), whether it is invocable at all, and its
//! signature model. Targets are built by a resolver adapter at the system
//! boundary; the engine never implements import mechanics itself.

use crate::signature::Signature;

/// What the engine knows about one configurable callable.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Target {
    /// Short display name, used in diagnostics and derived record names.
    name: String,
    /// Dotted import path. `None` means the target cannot be re-imported
    /// from a stored record: locally defined closures, instances, literals.
    path: Option<String>,
    /// Whether the target is invocable at all.
    callable: bool,
    signature: Signature,
}

impl Target {
    /// An importable callable with a known parameter list.
    ///
    /// The display name is the last segment of the dotted path.
    pub fn function(path: impl Into<String>, signature: Signature) -> Self {
        let path = path.into();
        let name = path.rsplit('.').next().unwrap_or(path.as_str()).to_owned();
        Self {
            name,
            path: Some(path),
            callable: true,
            signature,
        }
    }

    /// An importable callable whose parameter list cannot be determined,
    /// such as a native builtin with no recoverable metadata.
    pub fn opaque(path: impl Into<String>) -> Self {
        let path = path.into();
        let name = path.rsplit('.').next().unwrap_or(path.as_str()).to_owned();
        Self {
            name,
            path: Some(path),
            callable: true,
            signature: Signature::opaque(),
        }
    }

    /// A callable defined in a scope no dotted path reaches (e.g. inside a
    /// function body). Requests against it fail with `UnresolvableTarget`
    /// even when the binding itself would be legal.
    pub fn local(name: impl Into<String>, signature: Signature) -> Self {
        Self {
            name: name.into(),
            path: None,
            callable: true,
            signature,
        }
    }

    /// A non-callable value. Requests against it always fail with
    /// `NotCallable`, independent of arguments and flags.
    pub fn value(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
            callable: false,
            signature: Signature::opaque(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dotted import path, when the target is re-importable.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn is_callable(&self) -> bool {
        self.callable
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }
}
