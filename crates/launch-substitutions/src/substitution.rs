//! The evaluable unit of the substitution algebra.

use std::fmt;
use std::hash::{Hash, Hasher};

use launch_types::{Context, Result};

use crate::join::JoinSubstitutions;
use crate::launch_configuration::LaunchConfiguration;

// ══════════════════════════════════════════════════════════════════════════════
// Substitution
// ══════════════════════════════════════════════════════════════════════════════

/// A deferred piece of text.
///
/// Building a substitution never touches a context; only [`perform`]
/// does. [`describe`] is a pure render of the structure and is what
/// equality compares, so two substitutions that happen to produce the same
/// text through different structures are *not* equal.
///
/// [`perform`]: Substitution::perform
/// [`describe`]: Substitution::describe
#[derive(Debug, Clone)]
pub enum Substitution {
    /// Literal text.
    Text(TextSubstitution),
    /// Reference to a launch configuration, read at evaluation time.
    LaunchConfiguration(LaunchConfiguration),
    /// Ordered children joined by a separator.
    Join(JoinSubstitutions),
}

impl Substitution {
    /// Literal text substitution.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(TextSubstitution::new(text))
    }

    /// Stable textual identity of this substitution.
    pub fn describe(&self) -> String {
        match self {
            Self::Text(text) => text.describe(),
            Self::LaunchConfiguration(config) => config.describe(),
            Self::Join(join) => join.describe(),
        }
    }

    /// Evaluate against a context.
    pub fn perform(&self, context: &dyn Context) -> Result<String> {
        match self {
            Self::Text(text) => Ok(text.text().to_string()),
            Self::LaunchConfiguration(config) => config.perform(context),
            Self::Join(join) => join.perform(context),
        }
    }

    /// Name of the concrete variant, as used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "TextSubstitution",
            Self::LaunchConfiguration(_) => "LaunchConfiguration",
            Self::Join(_) => "JoinSubstitutions",
        }
    }

    /// The literal text, if this is a text substitution.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.text()),
            _ => None,
        }
    }
}

impl PartialEq for Substitution {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::LaunchConfiguration(a), Self::LaunchConfiguration(b)) => a == b,
            (Self::Join(a), Self::Join(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Substitution {}

impl Hash for Substitution {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind_name().hash(state);
        self.describe().hash(state);
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl From<TextSubstitution> for Substitution {
    fn from(text: TextSubstitution) -> Self {
        Self::Text(text)
    }
}

impl From<LaunchConfiguration> for Substitution {
    fn from(config: LaunchConfiguration) -> Self {
        Self::LaunchConfiguration(config)
    }
}

impl From<JoinSubstitutions> for Substitution {
    fn from(join: JoinSubstitutions) -> Self {
        Self::Join(join)
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// TextSubstitution
// ══════════════════════════════════════════════════════════════════════════════

/// Immutable literal text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextSubstitution {
    text: String,
}

impl TextSubstitution {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Renders as `'<text>'`.
    pub fn describe(&self) -> String {
        format!("'{}'", self.text)
    }
}
