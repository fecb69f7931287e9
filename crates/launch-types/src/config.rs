//! Launch arguments given on the command line as `name:=value`.

use std::fmt;

use crate::error::SubstitutionError;

/// Separator between an argument name and its value.
pub const ARGUMENT_SEPARATOR: &str = ":=";

/// One `name:=value` launch argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LaunchArgumentPair {
    pub name: String,
    pub value: String,
}

impl LaunchArgumentPair {
    /// Create a pair from its parts.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Parse `name:=value`.
    ///
    /// The split happens at the first `:=`, so values may contain `:=`
    /// themselves. The name must be non-empty and free of whitespace; the
    /// value may be empty.
    pub fn parse(raw: &str) -> crate::Result<Self> {
        let malformed = || SubstitutionError::MalformedArgument {
            raw: raw.to_string(),
        };
        let (name, value) = raw.split_once(ARGUMENT_SEPARATOR).ok_or_else(malformed)?;
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(malformed());
        }
        Ok(Self::new(name, value))
    }
}

impl fmt::Display for LaunchArgumentPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.name, ARGUMENT_SEPARATOR, self.value)
    }
}

/// Parse a sequence of `name:=value` strings, failing on the first
/// malformed entry.
pub fn parse_launch_arguments<I, S>(raw: I) -> crate::Result<Vec<LaunchArgumentPair>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .map(|arg| LaunchArgumentPair::parse(arg.as_ref()))
        .collect()
}
