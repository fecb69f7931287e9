//! Launch argument declarations and launch descriptions.
//!
//! A [`DeclareLaunchArgument`] is built once, without a context, and
//! resolved on every visit:
//!
//! ```text
//! bound in context ──→ validate choices ──→ value
//! default present  ──→ perform default ──→ write context ──→ validate choices ──→ value
//! neither          ──→ MissingArgument
//! ```

mod action;
mod declare_launch_argument;
mod launch_argument;
mod launch_description;

pub use action::Action;
pub use declare_launch_argument::{
    DeclareLaunchArgument, DeclareLaunchArgumentBuilder, Resolution, NO_DESCRIPTION,
};
pub use launch_argument::LaunchArgument;
pub use launch_description::{ArgumentSummary, LaunchDescription};
