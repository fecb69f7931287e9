//! Normalization and evaluation helpers shared by every substitution.

use launch_types::{Context, Result};

use crate::some_substitutions::SomeSubstitutions;
use crate::substitution::{Substitution, TextSubstitution};

/// Convert any supported input into a flat list of substitutions.
///
/// Text becomes a [`TextSubstitution`], substitutions are kept as they are
/// and lists are normalized element by element, flattening nested lists.
/// Anything else is a composition failure naming the offending type.
pub fn normalize_to_list_of_substitutions(
    subs: impl Into<SomeSubstitutions>,
) -> Result<Vec<Substitution>> {
    let mut normalized = Vec::new();
    normalize_into(subs.into(), &mut normalized)?;
    Ok(normalized)
}

fn normalize_into(subs: SomeSubstitutions, out: &mut Vec<Substitution>) -> Result<()> {
    match subs {
        SomeSubstitutions::Text(text) => out.push(Substitution::Text(TextSubstitution::new(text))),
        SomeSubstitutions::Substitution(sub) => out.push(sub),
        SomeSubstitutions::List(items) => {
            for item in items {
                normalize_into(item, out)?;
            }
        }
        unsupported @ SomeSubstitutions::Unsupported { .. } => {
            tracing::trace!(type_name = unsupported.type_name(), "rejected substitution input");
            return Err(unsupported.composition_failure());
        }
    }
    Ok(())
}

/// Perform each substitution in order and concatenate the results.
pub fn perform_substitutions(context: &dyn Context, subs: &[Substitution]) -> Result<String> {
    let mut result = String::new();
    for sub in subs {
        result.push_str(&sub.perform(context)?);
    }
    Ok(result)
}
