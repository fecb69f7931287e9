//! Deferred text substitutions.
//!
//! Substitutions are built as pure data and only turn into text when
//! performed against a [`launch_types::Context`]:
//!
//! ```text
//! input (text / substitution / nested lists) → normalize → Substitution tree → perform(context) → String
//! ```

mod join;
mod launch_configuration;
mod some_substitutions;
mod substitution;
mod utilities;

pub use join::{IntoSubstitution, JoinSubstitutions, Repetition};
pub use launch_configuration::LaunchConfiguration;
pub use some_substitutions::SomeSubstitutions;
pub use substitution::{Substitution, TextSubstitution};
pub use utilities::{normalize_to_list_of_substitutions, perform_substitutions};
