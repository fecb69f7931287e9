//! Reference to a launch configuration, resolved at evaluation time.

use launch_types::{Context, Result, SubstitutionError};

use crate::some_substitutions::SomeSubstitutions;
use crate::substitution::{Substitution, TextSubstitution};
use crate::utilities::{normalize_to_list_of_substitutions, perform_substitutions};

/// Reads a launch configuration from the live context every time it is
/// performed. Nothing is cached, so the same reference observes values
/// written after it was built.
///
/// The name is itself a substitution list (usually one literal). When the
/// configuration is absent the optional default is performed instead; with
/// no default the evaluation fails.
#[derive(Debug, Clone)]
pub struct LaunchConfiguration {
    variable_name: Vec<Substitution>,
    default: Option<Vec<Substitution>>,
}

impl LaunchConfiguration {
    /// Reference a configuration by literal name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            variable_name: vec![Substitution::Text(TextSubstitution::new(name))],
            default: None,
        }
    }

    /// Reference a configuration whose name is computed by substitutions.
    pub fn new(variable_name: impl Into<SomeSubstitutions>) -> Result<Self> {
        Ok(Self {
            variable_name: normalize_to_list_of_substitutions(variable_name)
                .map_err(|e| e.within("LaunchConfig()"))?,
            default: None,
        })
    }

    /// Attach a default used when the configuration is not set.
    pub fn with_default(mut self, default: impl Into<SomeSubstitutions>) -> Result<Self> {
        let default =
            normalize_to_list_of_substitutions(default).map_err(|e| e.within(self.describe()))?;
        self.default = Some(default);
        Ok(self)
    }

    /// Attach an already normalized default (or clear it).
    pub fn with_normalized_default(mut self, default: Option<Vec<Substitution>>) -> Self {
        self.default = default;
        self
    }

    pub fn variable_name(&self) -> &[Substitution] {
        &self.variable_name
    }

    pub fn default_value(&self) -> Option<&[Substitution]> {
        self.default.as_deref()
    }

    /// Renders as `LaunchConfig(<name parts joined by ' + '>)`.
    pub fn describe(&self) -> String {
        let parts: Vec<String> = self.variable_name.iter().map(Substitution::describe).collect();
        format!("LaunchConfig({})", parts.join(" + "))
    }

    /// Resolve the name, then read it from `context` or fall back to the
    /// default.
    pub fn perform(&self, context: &dyn Context) -> Result<String> {
        let name = perform_substitutions(context, &self.variable_name)?;
        if let Some(value) = context.get_configuration(&name) {
            return Ok(value.to_string());
        }
        match &self.default {
            Some(default) => perform_substitutions(context, default),
            None => Err(SubstitutionError::UnknownConfiguration { name }),
        }
    }
}

impl PartialEq for LaunchConfiguration {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || self.describe() == other.describe()
    }
}

impl Eq for LaunchConfiguration {}
