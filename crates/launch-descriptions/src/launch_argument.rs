//! A launch argument declaration paired with the variable that reads it.

use launch_substitutions::{IntoSubstitution, LaunchConfiguration, SomeSubstitutions, Substitution};
use launch_types::{Context, Result};

use crate::action::Action;
use crate::declare_launch_argument::{DeclareLaunchArgument, DeclareLaunchArgumentBuilder};

/// Declares an argument and, at the same time, acts as a reference to it.
///
/// The variable carries the declaration's default so it can be performed
/// before the declaration is visited; after that it reads whatever the
/// context holds.
#[derive(Debug, Clone)]
pub struct LaunchArgument {
    declaration: DeclareLaunchArgument,
    variable: LaunchConfiguration,
}

impl LaunchArgument {
    /// A required argument.
    pub fn new(name: impl Into<String>) -> Self {
        Self::from(DeclareLaunchArgument::new(name))
    }

    pub fn builder(name: impl Into<String>) -> DeclareLaunchArgumentBuilder {
        DeclareLaunchArgument::builder(name)
    }

    pub fn declaration(&self) -> &DeclareLaunchArgument {
        &self.declaration
    }

    /// A reference to this argument usable anywhere a substitution is.
    pub fn variable(&self) -> LaunchConfiguration {
        self.variable.clone()
    }

    pub fn name(&self) -> &str {
        self.declaration.name()
    }

    pub fn resolve(&self, context: &mut dyn Context) -> Result<String> {
        self.declaration.resolve(context)
    }

    /// Perform the variable: the bound value, else the default.
    pub fn perform(&self, context: &dyn Context) -> Result<String> {
        self.variable.perform(context)
    }
}

impl From<DeclareLaunchArgument> for LaunchArgument {
    fn from(declaration: DeclareLaunchArgument) -> Self {
        let variable = LaunchConfiguration::named(declaration.name())
            .with_normalized_default(declaration.default_value().map(<[Substitution]>::to_vec));
        Self {
            declaration,
            variable,
        }
    }
}

impl Action for LaunchArgument {
    fn visit(&self, context: &mut dyn Context) -> Result<()> {
        self.declaration.visit(context)
    }

    fn describe(&self) -> String {
        format!("LaunchArgument({})", self.name())
    }

    fn as_declaration(&self) -> Option<&DeclareLaunchArgument> {
        Some(&self.declaration)
    }
}

impl From<&LaunchArgument> for SomeSubstitutions {
    fn from(argument: &LaunchArgument) -> Self {
        SomeSubstitutions::from(argument.variable())
    }
}

impl IntoSubstitution for &LaunchArgument {
    fn into_substitution(self) -> Substitution {
        Substitution::LaunchConfiguration(self.variable())
    }
}
