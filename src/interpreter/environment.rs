use std::collections::HashMap;

/// Variable values shared by every statement of a session.
///
/// A variable exists only after its first assignment. The environment is
/// owned by whoever drives the session and is handed to each statement by
/// reference.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Environment {
    variables: HashMap<String, i64>,
}

impl Environment {
    /// Creates an environment with no variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value last assigned to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<i64> {
        self.variables.get(name).copied()
    }

    /// Assigns `value` to `name`, replacing any earlier value.
    pub fn assign(&mut self, name: &str, value: i64) {
        self.variables.insert(name.to_string(), value);
    }

    /// Returns `true` if `name` has been assigned.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of distinct variables assigned so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if nothing has been assigned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over all assigned variables in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.variables.iter().map(|(name, value)| (name.as_str(), *value))
    }
}
