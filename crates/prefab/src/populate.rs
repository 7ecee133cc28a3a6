//! Full-signature population from declared defaults.

use crate::{
    args::ArgumentSet,
    error::{BuildError, BuildResult},
    signature::Signature,
};

/// Extends `args` with an entry for every keyword-capable parameter that is
/// neither supplied by keyword nor consumed by a positional slot and that
/// declares a default.
///
/// Parameters without defaults are left unset — completing them is the
/// instantiator's concern, not the populator's. Supplied entries keep their
/// order; populated defaults append after them in declaration order.
///
/// # Errors
///
/// Fails with [`BuildError::SignatureUnavailable`] when the signature is
/// opaque: the caller explicitly asked for full-signature defaulting that
/// cannot be computed, so the permissive degraded path does not apply.
pub(crate) fn populate(signature: &Signature, args: &ArgumentSet, target: &str) -> BuildResult<ArgumentSet> {
    if !signature.introspectable() {
        return Err(BuildError::SignatureUnavailable {
            target: target.to_owned(),
        });
    }

    let mut populated = args.clone();
    let supplied_positionally = args.positional().len();

    let mut positional_slot = 0usize;
    for param in signature.params() {
        let slot = if param.kind().is_positional() {
            let current = positional_slot;
            positional_slot += 1;
            Some(current)
        } else {
            None
        };
        if !param.kind().is_keyword() {
            continue;
        }
        if slot.is_some_and(|slot| slot < supplied_positionally) {
            continue;
        }
        if populated.keyword().contains_key(param.name()) {
            continue;
        }
        if let Some(default) = param.default() {
            populated.set_keyword(param.name(), default.clone());
        }
    }

    Ok(populated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        signature::{Param, ParamKind},
        value::Value,
    };

    /// `def f(x, y=2, *, z=3)`
    fn mixed() -> Signature {
        Signature::new(vec![
            Param::required("x", ParamKind::PositionalOrKeyword),
            Param::with_default("y", ParamKind::PositionalOrKeyword, 2),
            Param::with_default("z", ParamKind::KeywordOnly, 3),
        ])
    }

    #[test]
    fn fills_unsupplied_defaults_only() {
        let mut args = ArgumentSet::new();
        args.set_keyword("x", 10);
        let populated = populate(&mixed(), &args, "f").unwrap();
        assert_eq!(populated.keyword()["x"], Value::Int(10));
        assert_eq!(populated.keyword()["y"], Value::Int(2));
        assert_eq!(populated.keyword()["z"], Value::Int(3));
    }

    #[test]
    fn positionally_consumed_params_are_not_populated() {
        let mut args = ArgumentSet::new();
        args.push_positional(1);
        args.push_positional(5);
        let populated = populate(&mixed(), &args, "f").unwrap();
        assert!(!populated.keyword().contains_key("x"));
        assert!(!populated.keyword().contains_key("y"));
        assert_eq!(populated.keyword()["z"], Value::Int(3));
    }

    #[test]
    fn params_without_defaults_stay_unset() {
        let args = ArgumentSet::new();
        let populated = populate(&mixed(), &args, "f").unwrap();
        assert!(!populated.keyword().contains_key("x"));
        assert_eq!(populated.keyword()["y"], Value::Int(2));
    }

    #[test]
    fn opaque_signature_is_rejected() {
        let err = populate(&Signature::opaque(), &ArgumentSet::new(), "dict").unwrap_err();
        assert_eq!(err, BuildError::SignatureUnavailable { target: "dict".into() });
    }
}
