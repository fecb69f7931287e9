//! Everything that may be handed to a substitution constructor.

use std::collections::{BTreeMap, HashMap};

use launch_types::{LaunchContext, SubstitutionError};

use crate::join::JoinSubstitutions;
use crate::launch_configuration::LaunchConfiguration;
use crate::substitution::{Substitution, TextSubstitution};

/// Input accepted wherever substitutions are expected: text, an existing
/// substitution, or a (possibly nested) list of those.
///
/// Values of any other type convert to [`SomeSubstitutions::Unsupported`]
/// and are rejected by the normalizer with a composition failure naming
/// the type.
#[derive(Debug, Clone)]
pub enum SomeSubstitutions {
    Text(String),
    Substitution(Substitution),
    List(Vec<SomeSubstitutions>),
    Unsupported { type_name: String },
}

impl SomeSubstitutions {
    /// Mark a value of type `T` as not usable as a substitution.
    pub fn unsupported<T: ?Sized>() -> Self {
        Self::Unsupported {
            type_name: short_type_name::<T>(),
        }
    }

    /// Type name reported in diagnostics.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Text(_) => "String",
            Self::Substitution(sub) => sub.kind_name(),
            Self::List(_) => "Vec",
            Self::Unsupported { type_name } => type_name,
        }
    }

    pub(crate) fn composition_failure(&self) -> SubstitutionError {
        SubstitutionError::CompositionFailure {
            type_name: self.type_name().to_string(),
            context: String::new(),
        }
    }
}

/// `std::any::type_name` without the module path or generic arguments.
fn short_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base).to_string()
}

impl From<&str> for SomeSubstitutions {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for SomeSubstitutions {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for SomeSubstitutions {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl From<Substitution> for SomeSubstitutions {
    fn from(sub: Substitution) -> Self {
        Self::Substitution(sub)
    }
}

impl From<&Substitution> for SomeSubstitutions {
    fn from(sub: &Substitution) -> Self {
        Self::Substitution(sub.clone())
    }
}

impl From<TextSubstitution> for SomeSubstitutions {
    fn from(text: TextSubstitution) -> Self {
        Self::Substitution(Substitution::Text(text))
    }
}

impl From<LaunchConfiguration> for SomeSubstitutions {
    fn from(config: LaunchConfiguration) -> Self {
        Self::Substitution(Substitution::LaunchConfiguration(config))
    }
}

impl From<JoinSubstitutions> for SomeSubstitutions {
    fn from(join: JoinSubstitutions) -> Self {
        Self::Substitution(Substitution::Join(join))
    }
}

impl From<&JoinSubstitutions> for SomeSubstitutions {
    fn from(join: &JoinSubstitutions) -> Self {
        Self::Substitution(Substitution::Join(join.clone()))
    }
}

impl<T: Into<SomeSubstitutions>> From<Vec<T>> for SomeSubstitutions {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<SomeSubstitutions>, const N: usize> From<[T; N]> for SomeSubstitutions {
    fn from(items: [T; N]) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<&[Substitution]> for SomeSubstitutions {
    fn from(items: &[Substitution]) -> Self {
        Self::List(items.iter().cloned().map(Self::Substitution).collect())
    }
}

// Framework objects that are often passed by mistake.

impl From<LaunchContext> for SomeSubstitutions {
    fn from(_: LaunchContext) -> Self {
        Self::unsupported::<LaunchContext>()
    }
}

impl From<SubstitutionError> for SomeSubstitutions {
    fn from(_: SubstitutionError) -> Self {
        Self::unsupported::<SubstitutionError>()
    }
}

impl<K, V> From<HashMap<K, V>> for SomeSubstitutions {
    fn from(_: HashMap<K, V>) -> Self {
        Self::unsupported::<HashMap<K, V>>()
    }
}

impl<K, V> From<BTreeMap<K, V>> for SomeSubstitutions {
    fn from(_: BTreeMap<K, V>) -> Self {
        Self::unsupported::<BTreeMap<K, V>>()
    }
}
