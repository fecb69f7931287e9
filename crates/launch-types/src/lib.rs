//! Shared types for launch substitutions.
//!
//! This crate defines the evaluation context that substitutions read from,
//! the error taxonomy shared by every stage, and the `name:=value`
//! argument configuration used to seed a context.

pub mod config;
mod context;
mod error;

pub use config::{parse_launch_arguments, LaunchArgumentPair, ARGUMENT_SEPARATOR};
pub use context::{Context, LaunchContext};
pub use error::{render_choices, ErrorCategory, RepetitionFault, SubstitutionError};

/// Result type used throughout the launch crates.
pub type Result<T> = std::result::Result<T, SubstitutionError>;
