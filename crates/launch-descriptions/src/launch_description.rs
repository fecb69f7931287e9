//! LaunchDescription: an ordered list of actions and the arguments they
//! declare.

use serde::{Deserialize, Serialize};

use launch_substitutions::{SomeSubstitutions, Substitution};
use launch_types::{Context, Result, ARGUMENT_SEPARATOR};

use crate::action::Action;
use crate::declare_launch_argument::DeclareLaunchArgument;

/// A declared argument as shown to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentSummary {
    pub name: String,
    pub description: String,
    /// Description of the default, absent for required arguments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<String>,
}

impl From<&DeclareLaunchArgument> for ArgumentSummary {
    fn from(declaration: &DeclareLaunchArgument) -> Self {
        Self {
            name: declaration.name().to_string(),
            description: declaration.description().to_string(),
            default: declaration.default_value().map(describe_all),
            choices: declaration.choices().map(<[String]>::to_vec).unwrap_or_default(),
        }
    }
}

fn describe_all(subs: &[Substitution]) -> String {
    subs.iter()
        .map(Substitution::describe)
        .collect::<Vec<_>>()
        .join(" + ")
}

/// Ordered launch entities.
#[derive(Debug, Default)]
pub struct LaunchDescription {
    entities: Vec<Box<dyn Action>>,
}

impl LaunchDescription {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an action.
    pub fn add_action(&mut self, action: impl Action + 'static) {
        self.entities.push(Box::new(action));
    }

    /// Builder-style [`add_action`](Self::add_action).
    pub fn with_action(mut self, action: impl Action + 'static) -> Self {
        self.add_action(action);
        self
    }

    pub fn entities(&self) -> &[Box<dyn Action>] {
        &self.entities
    }

    /// Every argument declared by this description and its sub-entities,
    /// in visiting order.
    pub fn launch_arguments(&self) -> Vec<&DeclareLaunchArgument> {
        let mut declarations = Vec::new();
        for entity in &self.entities {
            collect_declarations(entity.as_ref(), &mut declarations);
        }
        declarations
    }

    /// Visit every entity in order, stopping at the first failure.
    #[tracing::instrument(skip_all, fields(entity_count = self.entities.len()))]
    pub fn visit_all(&self, context: &mut dyn Context) -> Result<()> {
        for entity in &self.entities {
            tracing::debug!(entity = %entity.describe(), "visiting");
            entity.visit(context)?;
        }
        Ok(())
    }

    pub fn argument_summaries(&self) -> Vec<ArgumentSummary> {
        self.launch_arguments()
            .into_iter()
            .map(ArgumentSummary::from)
            .collect()
    }

    /// Argument summaries as pretty-printed JSON.
    pub fn arguments_to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.argument_summaries())
    }

    /// Human-readable list of the declared arguments.
    pub fn render_arguments(&self) -> String {
        let mut out = format!(
            "Arguments (pass arguments as '<name>{ARGUMENT_SEPARATOR}<value>'):\n"
        );
        let summaries = self.argument_summaries();
        if summaries.is_empty() {
            out.push_str("\n  No arguments.\n");
            return out;
        }
        for summary in summaries {
            out.push_str(&format!("\n    '{}':\n", summary.name));
            out.push_str(&format!("        {}\n", summary.description));
            if let Some(default) = summary.default {
                out.push_str(&format!("        (default: {default})\n"));
            }
        }
        out
    }
}

fn collect_declarations<'a>(action: &'a dyn Action, out: &mut Vec<&'a DeclareLaunchArgument>) {
    if let Some(declaration) = action.as_declaration() {
        out.push(declaration);
    }
    for sub in action.describe_sub_entities() {
        collect_declarations(sub, out);
    }
}

impl Action for LaunchDescription {
    fn visit(&self, context: &mut dyn Context) -> Result<()> {
        self.visit_all(context)
    }

    fn describe(&self) -> String {
        "LaunchDescription".to_string()
    }

    fn describe_sub_entities(&self) -> Vec<&dyn Action> {
        self.entities.iter().map(|e| e.as_ref()).collect()
    }
}

impl From<LaunchDescription> for SomeSubstitutions {
    fn from(_: LaunchDescription) -> Self {
        SomeSubstitutions::unsupported::<LaunchDescription>()
    }
}
