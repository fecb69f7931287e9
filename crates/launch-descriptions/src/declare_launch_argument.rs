//! Declaration of a launch argument and its resolution against a context.

use launch_substitutions::{
    normalize_to_list_of_substitutions, perform_substitutions, SomeSubstitutions, Substitution,
};
use launch_types::{render_choices, Context, Result, SubstitutionError};

use crate::action::Action;
use crate::launch_argument::LaunchArgument;

/// Description used when neither a description nor choices are given.
pub const NO_DESCRIPTION: &str = "no description given";

/// How a declared argument obtained its value during one resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The context already held a value.
    Bound,
    /// The default was performed and written to the context.
    Default,
}

/// Declares a named launch argument: an optional default, an optional set
/// of valid choices, and a description.
///
/// Construction is pure. Resolution reads the context, falls back to the
/// default (writing it back), and validates the result against the
/// choices.
#[derive(Debug, Clone)]
pub struct DeclareLaunchArgument {
    name: String,
    default_value: Option<Vec<Substitution>>,
    description: String,
    choices: Option<Vec<String>>,
}

impl DeclareLaunchArgument {
    /// A required argument with no choices and the generated description.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_value: None,
            description: NO_DESCRIPTION.to_string(),
            choices: None,
        }
    }

    /// Start building a declaration.
    pub fn builder(name: impl Into<String>) -> DeclareLaunchArgumentBuilder {
        DeclareLaunchArgumentBuilder {
            name: name.into(),
            default_value: None,
            description: None,
            choices: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The normalized default. `None` means the argument is required.
    pub fn default_value(&self) -> Option<&[Substitution]> {
        self.default_value.as_deref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn choices(&self) -> Option<&[String]> {
        self.choices.as_deref()
    }

    pub fn is_required(&self) -> bool {
        self.default_value.is_none()
    }

    /// Resolve the argument and return its value.
    pub fn resolve(&self, context: &mut dyn Context) -> Result<String> {
        self.resolve_with_state(context).map(|(value, _)| value)
    }

    /// Resolve the argument, also reporting which state produced it.
    ///
    /// Once a value has been written, later resolutions on the same
    /// context observe it as [`Resolution::Bound`].
    #[tracing::instrument(skip_all, fields(argument = %self.name))]
    pub fn resolve_with_state(&self, context: &mut dyn Context) -> Result<(String, Resolution)> {
        let bound = context.get_configuration(&self.name).map(str::to_string);
        let (value, state) = match (bound, &self.default_value) {
            (Some(value), _) => (value, Resolution::Bound),
            (None, Some(default)) => {
                let value = perform_substitutions(&*context, default)?;
                context.set_configuration(&self.name, value.clone());
                (value, Resolution::Default)
            }
            (None, None) => {
                tracing::warn!("required launch argument was not provided");
                return Err(SubstitutionError::MissingArgument {
                    name: self.name.clone(),
                    description: self.description.clone(),
                });
            }
        };
        self.validate_choice(&value)?;
        tracing::debug!(value = value.as_str(), ?state, "resolved launch argument");
        Ok((value, state))
    }

    fn validate_choice(&self, value: &str) -> Result<()> {
        match &self.choices {
            Some(choices) if !choices.iter().any(|c| c == value) => {
                tracing::warn!(value, "launch argument value is not a valid choice");
                Err(SubstitutionError::InvalidChoice {
                    name: self.name.clone(),
                    value: value.to_string(),
                    choices: choices.clone(),
                })
            }
            _ => Ok(()),
        }
    }
}

impl Action for DeclareLaunchArgument {
    fn visit(&self, context: &mut dyn Context) -> Result<()> {
        self.resolve(context).map(|_| ())
    }

    fn describe(&self) -> String {
        format!("DeclareLaunchArgument('{}')", self.name)
    }

    fn as_declaration(&self) -> Option<&DeclareLaunchArgument> {
        Some(self)
    }
}

/// Declarations are not substitutions; passing one where substitutions
/// are expected is a composition failure.
impl From<DeclareLaunchArgument> for SomeSubstitutions {
    fn from(_: DeclareLaunchArgument) -> Self {
        SomeSubstitutions::unsupported::<DeclareLaunchArgument>()
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Builder
// ══════════════════════════════════════════════════════════════════════════════

/// Builder for [`DeclareLaunchArgument`] and [`LaunchArgument`].
#[derive(Debug, Clone)]
pub struct DeclareLaunchArgumentBuilder {
    name: String,
    default_value: Option<SomeSubstitutions>,
    description: Option<String>,
    choices: Option<Vec<String>>,
}

impl DeclareLaunchArgumentBuilder {
    pub fn default_value(mut self, default: impl Into<SomeSubstitutions>) -> Self {
        self.default_value = Some(default.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Restrict values to `choices`. An empty list places no restriction.
    pub fn choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.choices = Some(choices.into_iter().map(Into::into).collect());
        self
    }

    /// Normalize the default, check a literal default against the choices
    /// and generate the description.
    pub fn build(self) -> Result<DeclareLaunchArgument> {
        let choices = self.choices.filter(|c| !c.is_empty());
        let default_value = self
            .default_value
            .map(normalize_to_list_of_substitutions)
            .transpose()
            .map_err(|e| e.within(format!("DeclareLaunchArgument('{}')", self.name)))?;

        if let (Some(default), Some(choices)) = (&default_value, &choices) {
            if let Some(literal) = literal_text(default) {
                if !choices.contains(&literal) {
                    return Err(SubstitutionError::InvalidDefault {
                        name: self.name,
                        default: literal,
                        choices: choices.clone(),
                    });
                }
            }
        }

        let description = match (self.description, &choices) {
            (None, None) => NO_DESCRIPTION.to_string(),
            (None, Some(choices)) => format!("One of: {}", render_choices(choices)),
            (Some(description), None) => description,
            (Some(mut description), Some(choices)) => {
                if !description.ends_with('.') {
                    description.push('.');
                }
                description.push_str(" Valid choices are: ");
                description.push_str(&render_choices(choices));
                description
            }
        };

        Ok(DeclareLaunchArgument {
            name: self.name,
            default_value,
            description,
            choices,
        })
    }

    /// Build the declaration together with its variable.
    pub fn build_argument(self) -> Result<LaunchArgument> {
        self.build().map(LaunchArgument::from)
    }
}

/// The text of a default made only of literals.
fn literal_text(subs: &[Substitution]) -> Option<String> {
    subs.iter().map(Substitution::as_text).collect()
}
