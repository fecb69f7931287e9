//! Launch configurations: the mutable namespace substitutions read from.

use std::collections::BTreeMap;

use crate::config::LaunchArgumentPair;

/// The narrow interface the substitution core uses to reach launch
/// configurations owned by the execution framework.
///
/// Evaluation only reads; argument resolution may write. Callers must not
/// evaluate against the same context from several threads at once.
pub trait Context {
    /// Look up a launch configuration by name.
    fn get_configuration(&self, name: &str) -> Option<&str>;

    /// Insert or overwrite a launch configuration.
    fn set_configuration(&mut self, name: &str, value: String);

    /// Whether a launch configuration is currently visible.
    fn contains_configuration(&self, name: &str) -> bool {
        self.get_configuration(name).is_some()
    }
}

/// A single scope level.
#[derive(Debug, Clone, Default)]
struct Scope {
    configurations: BTreeMap<String, String>,
}

/// Scoped launch configurations with push/pop semantics.
///
/// Lookups search from the innermost scope outward. Writes always land in
/// the innermost scope, so a pushed scope can shadow an outer value and
/// the shadow disappears again on pop.
#[derive(Debug, Clone)]
pub struct LaunchContext {
    scopes: Vec<Scope>,
}

impl LaunchContext {
    /// Create a context with one empty global scope.
    pub fn new() -> Self {
        Self {
            scopes: vec![Scope::default()],
        }
    }

    /// Create a context whose global scope is seeded from `name:=value`
    /// pairs. Later pairs win over earlier ones with the same name.
    pub fn with_arguments<I>(arguments: I) -> Self
    where
        I: IntoIterator<Item = LaunchArgumentPair>,
    {
        let mut context = Self::new();
        for pair in arguments {
            context.set_configuration(&pair.name, pair.value);
        }
        context
    }

    /// Push a new scope (for an included description).
    pub fn push_configurations(&mut self) {
        self.scopes.push(Scope::default());
    }

    /// Pop the innermost scope. The global scope is never removed.
    pub fn pop_configurations(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Number of scopes, including the global one.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// All visible configurations, inner scopes shadowing outer ones.
    pub fn launch_configurations(&self) -> BTreeMap<String, String> {
        let mut visible = BTreeMap::new();
        for scope in &self.scopes {
            for (name, value) in &scope.configurations {
                visible.insert(name.clone(), value.clone());
            }
        }
        visible
    }
}

impl Default for LaunchContext {
    fn default() -> Self {
        Self::new()
    }
}

impl Context for LaunchContext {
    fn get_configuration(&self, name: &str) -> Option<&str> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.configurations.get(name))
            .map(String::as_str)
    }

    fn set_configuration(&mut self, name: &str, value: String) {
        if let Some(scope) = self.scopes.last_mut() {
            tracing::trace!(name, value = value.as_str(), "set launch configuration");
            scope.configurations.insert(name.to_string(), value);
        }
    }
}
