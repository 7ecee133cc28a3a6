//! Construction requests: the pipeline from raw arguments to a record.

use crate::{
    args::ArgumentSet,
    error::{BuildError, BuildResult},
    options::{BuildOptions, Convert},
    populate::populate,
    record::ConfigRecord,
    target::Target,
    validate::validate,
    value::Value,
};

/// Dotted path of the object resolver targeted by [`just`] records.
pub const RESOLVE_OBJECT_PATH: &str = "prefab.resolve_object";

/// One in-flight construction request.
///
/// Collects the target, call-site arguments, inherited base records, and
/// behavioral options; [`BuildRequest::build`] then runs the full pipeline:
/// option coherence, target pre-checks, inheritance merge, optional
/// full-signature population, binding validation, and record synthesis.
/// The first violation aborts the request; no partial record is ever
/// produced.
#[derive(Debug, Clone)]
pub struct BuildRequest<'a> {
    target: &'a Target,
    args: ArgumentSet,
    bases: Vec<&'a ConfigRecord>,
    options: BuildOptions,
    populate_full_signature: bool,
}

impl<'a> BuildRequest<'a> {
    pub fn new(target: &'a Target) -> Self {
        Self {
            target,
            args: ArgumentSet::new(),
            bases: Vec::new(),
            options: BuildOptions::default(),
            populate_full_signature: false,
        }
    }

    /// Appends a positional argument.
    pub fn positional(mut self, value: impl Into<Value>) -> Self {
        self.args.push_positional(value);
        self
    }

    /// Sets a keyword argument; within one request the last writer wins.
    pub fn keyword(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.args.set_keyword(name, value);
        self
    }

    /// Replaces the whole argument set.
    pub fn arguments(mut self, args: ArgumentSet) -> Self {
        self.args = args;
        self
    }

    /// Appends a base record to inherit from. Bases apply in declaration
    /// order; the request's own arguments override same-named inherited
    /// keywords and append after inherited positionals.
    pub fn base(mut self, base: &'a ConfigRecord) -> Self {
        self.bases.push(base);
        self
    }

    /// Replaces all behavioral options at once.
    pub fn options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.options.recursive = recursive;
        self
    }

    pub fn partial(mut self, partial: bool) -> Self {
        self.options.partial = partial;
        self
    }

    pub fn convert(mut self, convert: Convert) -> Self {
        self.options.convert = convert;
        self
    }

    /// Overrides the record name; defaults to `Builds_{target name}`.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.options.name = Some(name.into());
        self
    }

    /// Requests auto-population of every unsupplied parameter that declares
    /// a default. Requires an introspectable signature.
    pub fn populate_full_signature(mut self, populate: bool) -> Self {
        self.populate_full_signature = populate;
        self
    }

    /// Runs the request and synthesizes the record.
    ///
    /// # Errors
    ///
    /// Every rejection is typed: `InvalidOption` for incoherent flags,
    /// `NotCallable` and `UnresolvableTarget` for unusable targets,
    /// `IncompatiblePartialInheritance` for un-partialing a partial base,
    /// `SignatureUnavailable` when population meets an opaque signature, and
    /// the binding violations `TooManyPositionalArguments`,
    /// `UnknownKeywordArgument`, `MultipleValuesForArgument`.
    pub fn build(self) -> BuildResult<ConfigRecord> {
        self.options.ensure_coherent()?;

        if !self.target.is_callable() {
            return Err(BuildError::NotCallable {
                target: self.target.name().to_owned(),
            });
        }

        // The record must be reconstructable from its stored reference alone,
        // so resolvability is required even for an otherwise legal binding.
        let Some(path) = self.target.path() else {
            return Err(BuildError::UnresolvableTarget {
                target: self.target.name().to_owned(),
            });
        };

        for base in &self.bases {
            // A partial base defers arguments that are not guaranteed
            // complete, so a derived request cannot un-partial it.
            if base.is_partial() && !self.options.partial {
                return Err(BuildError::IncompatiblePartialInheritance {
                    base: base.name().to_owned(),
                });
            }
        }

        let merged = ArgumentSet::merged(self.bases.iter().map(|base| base.args()), &self.args);

        let merged = if self.populate_full_signature {
            populate(self.target.signature(), &merged, self.target.name())?
        } else {
            merged
        };

        validate(self.target.signature(), &merged, self.target.name())?;

        let name = self
            .options
            .name
            .clone()
            .unwrap_or_else(|| format!("Builds_{}", self.target.name()));
        Ok(ConfigRecord::new(path.to_owned(), name, merged, &self.options))
    }
}

/// Starts a construction request against `target`.
pub fn builds(target: &Target) -> BuildRequest<'_> {
    BuildRequest::new(target)
}

/// Builds a record that merely re-imports `target` at instantiation time.
///
/// The record points at the well-known object resolver and stores the
/// target's dotted path as its single field. Callability is not required —
/// any importable object qualifies — but an unresolvable target is rejected,
/// since the record would have nothing to re-import.
pub fn just(target: &Target) -> BuildResult<ConfigRecord> {
    let Some(path) = target.path() else {
        return Err(BuildError::UnresolvableTarget {
            target: target.name().to_owned(),
        });
    };
    let mut args = ArgumentSet::new();
    args.set_keyword("path", path);
    Ok(ConfigRecord::new(
        RESOLVE_OBJECT_PATH.to_owned(),
        format!("Just_{}", target.name()),
        args,
        &BuildOptions::default(),
    ))
}
