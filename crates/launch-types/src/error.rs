use std::fmt;
use thiserror::Error;

/// When an error can occur: while a substitution tree or argument
/// declaration is being built, or while it is evaluated against a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Raised before any context exists (normalization, repetition,
    /// declaration of arguments, parsing of `name:=value` pairs).
    Build,
    /// Raised while performing substitutions or resolving arguments.
    Evaluation,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Build => write!(f, "build"),
            Self::Evaluation => write!(f, "evaluation"),
        }
    }
}

/// Every failure the substitution core can report.
///
/// None of these are retried or downgraded internally; they propagate to
/// whoever drives the launch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubstitutionError {
    /// The normalizer was handed a value that is neither text, a
    /// substitution, nor a list of those.
    #[error("Cannot join a \"{type_name}\" object as substitution. For Substitution: '{context}'")]
    CompositionFailure { type_name: String, context: String },

    /// A join was repeated a negative or non-integral number of times.
    #[error("{reason} multiplications are not possible. For Substitution: '{description}'")]
    InvalidRepetition {
        reason: RepetitionFault,
        description: String,
    },

    /// A literal default that is not one of the declared choices.
    #[error("Provided default_value '{default}' is not in provided choices '{}'.", render_choices(.choices))]
    InvalidDefault {
        name: String,
        default: String,
        choices: Vec<String>,
    },

    /// A bound or defaulted value outside the declared choices.
    #[error("Argument '{name}' provided value '{value}' is not valid. Valid options are: [{}]", .choices.join(", "))]
    InvalidChoice {
        name: String,
        value: String,
        choices: Vec<String>,
    },

    /// Required argument with neither a bound value nor a default.
    #[error("Required launch argument \"{name}\" (description: \"{description}\") was not provided")]
    MissingArgument { name: String, description: String },

    /// A launch configuration reference that is not set and has no default.
    #[error("launch configuration '{name}' does not exist")]
    UnknownConfiguration { name: String },

    /// A launch argument that is not of the `name:=value` form.
    #[error("malformed launch argument '{raw}', expected '<name>:=<value>'")]
    MalformedArgument { raw: String },
}

/// Why a repetition count was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepetitionFault {
    Negative,
    NonInteger,
}

impl fmt::Display for RepetitionFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative => write!(f, "Negative"),
            Self::NonInteger => write!(f, "Non-integer"),
        }
    }
}

impl SubstitutionError {
    /// Get the phase this error belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CompositionFailure { .. }
            | Self::InvalidRepetition { .. }
            | Self::InvalidDefault { .. }
            | Self::MalformedArgument { .. } => ErrorCategory::Build,
            Self::InvalidChoice { .. }
            | Self::MissingArgument { .. }
            | Self::UnknownConfiguration { .. } => ErrorCategory::Evaluation,
        }
    }

    /// Attach the description of the combinator being built to a
    /// composition failure that was raised without one.
    pub fn within(self, context: impl Into<String>) -> Self {
        match self {
            Self::CompositionFailure {
                type_name,
                context: existing,
            } if existing.is_empty() => Self::CompositionFailure {
                type_name,
                context: context.into(),
            },
            other => other,
        }
    }
}

/// Render a choice list the way argument descriptions show it: `['a', 'b']`.
pub fn render_choices(choices: &[String]) -> String {
    let quoted: Vec<String> = choices.iter().map(|c| format!("'{c}'")).collect();
    format!("[{}]", quoted.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choices() -> Vec<String> {
        vec!["var1".to_string(), "var2".to_string()]
    }

    #[test]
    fn test_render_choices() {
        assert_eq!(render_choices(&choices()), "['var1', 'var2']");
        assert_eq!(render_choices(&[]), "[]");
    }

    #[test]
    fn test_invalid_choice_lists_options() {
        let err = SubstitutionError::InvalidChoice {
            name: "name".into(),
            value: "bad".into(),
            choices: choices(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'bad'"));
        assert!(msg.contains("Valid options are: [var1, var2]"));
    }

    #[test]
    fn test_invalid_default_message() {
        let err = SubstitutionError::InvalidDefault {
            name: "name".into(),
            default: "invalid".into(),
            choices: choices(),
        };
        assert!(err.to_string().contains("not in provided choices"));
        assert!(err.to_string().contains("['var1', 'var2']"));
    }

    #[test]
    fn test_missing_argument_message() {
        let err = SubstitutionError::MissingArgument {
            name: "name".into(),
            description: "no description given".into(),
        };
        assert!(err.to_string().starts_with("Required launch argument \"name\""));
    }

    #[test]
    fn test_repetition_message() {
        let err = SubstitutionError::InvalidRepetition {
            reason: RepetitionFault::NonInteger,
            description: "JoinSubstitutions('')".into(),
        };
        assert_eq!(
            err.to_string(),
            "Non-integer multiplications are not possible. For Substitution: 'JoinSubstitutions('')'"
        );
    }

    #[test]
    fn test_error_categories() {
        let build = SubstitutionError::CompositionFailure {
            type_name: "LaunchContext".into(),
            context: String::new(),
        };
        let eval = SubstitutionError::UnknownConfiguration { name: "x".into() };
        assert_eq!(build.category(), ErrorCategory::Build);
        assert_eq!(eval.category(), ErrorCategory::Evaluation);
        assert_eq!(format!("{}", ErrorCategory::Evaluation), "evaluation");
    }

    #[test]
    fn test_within_fills_empty_context_only() {
        let err = SubstitutionError::CompositionFailure {
            type_name: "HashMap".into(),
            context: String::new(),
        };
        let err = err.within("JoinSubstitutions('')").within("ignored");
        assert_eq!(
            err,
            SubstitutionError::CompositionFailure {
                type_name: "HashMap".into(),
                context: "JoinSubstitutions('')".into(),
            }
        );
    }
}
