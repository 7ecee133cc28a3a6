//! The binding validator: definition-time legality of a future call.

use ahash::AHashSet;

use crate::{
    args::ArgumentSet,
    error::{BuildError, BuildResult},
    signature::{Param, Signature},
};

/// Checks a merged argument set against a signature model.
///
/// Violations are reported in a fixed order — positional arity, then unknown
/// keyword names, then positional/keyword double supply — so a request that
/// breaks several rules at once produces one deterministic diagnostic.
///
/// Opaque signatures skip every check: arity cannot be validated against a
/// target with no parameter list, and pass-through is preferred over blocking
/// callers on metadata gaps. The one path that rejects opaque targets is
/// full-signature population, which fails before validation runs.
pub(crate) fn validate(signature: &Signature, args: &ArgumentSet, target: &str) -> BuildResult<()> {
    if !signature.introspectable() {
        return Ok(());
    }

    let positional: Vec<&Param> = signature.positional_params().collect();

    if let Some(max_accepted) = signature.max_positional_count()
        && args.positional().len() > max_accepted
    {
        return Err(BuildError::TooManyPositionalArguments {
            target: target.to_owned(),
            supplied: args.positional().len(),
            max_accepted,
        });
    }

    if !signature.has_var_keyword() {
        // Positional-only parameter names are deliberately absent here:
        // supplying one by keyword is an unknown name under call semantics.
        let keyword_capable: AHashSet<&str> = signature.keyword_params().map(Param::name).collect();
        for name in args.keyword().keys() {
            if !keyword_capable.contains(name.as_str()) {
                return Err(BuildError::UnknownKeywordArgument {
                    target: target.to_owned(),
                    name: name.clone(),
                });
            }
        }
    }

    let filled = args.positional().len().min(positional.len());
    for param in &positional[..filled] {
        if args.keyword().contains_key(param.name()) {
            return Err(BuildError::MultipleValuesForArgument {
                target: target.to_owned(),
                name: param.name().to_owned(),
            });
        }
    }

    Ok(())
}
