//! The seam between launch entities and the execution framework.

use std::fmt;

use launch_types::{Context, Result};

use crate::declare_launch_argument::DeclareLaunchArgument;

/// Something the execution framework visits with a context.
///
/// Visiting may write launch configurations. The framework decides what
/// to do with a failure; actions never retry.
pub trait Action: fmt::Debug {
    /// Execute against `context`.
    fn visit(&self, context: &mut dyn Context) -> Result<()>;

    /// Short human-readable identity.
    fn describe(&self) -> String;

    /// Entities owned by this one, in visiting order.
    fn describe_sub_entities(&self) -> Vec<&dyn Action> {
        Vec::new()
    }

    /// The argument declaration behind this action, if it is one.
    fn as_declaration(&self) -> Option<&DeclareLaunchArgument> {
        None
    }
}
