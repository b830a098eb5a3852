use std::collections::HashMap;
use std::sync::RwLock;

/// Trait for reading process environment variables to enable testing with mocks
pub trait Environment: Send + Sync {
    /// Get the value of an environment variable.
    ///
    /// Unset variables and values that are not valid unicode both yield `None`.
    fn var(&self, name: &str) -> Option<String>;
}

/// Real environment implementation backed by the process environment
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Mock environment implementation for testing (in-memory)
pub struct MockEnvironment {
    vars: RwLock<HashMap<String, String>>,
}

impl MockEnvironment {
    /// Create new mock environment with no variables set
    pub fn new() -> Self {
        Self {
            vars: RwLock::new(HashMap::new()),
        }
    }

    /// Create mock environment with pre-set variables
    pub fn with_vars(vars: &[(&str, &str)]) -> Self {
        let env = Self::new();
        for (name, value) in vars {
            env.set(name, value);
        }
        env
    }

    /// Set a variable
    pub fn set(&self, name: &str, value: &str) {
        self.vars
            .write()
            .unwrap()
            .insert(name.to_string(), value.to_string());
    }
}

impl Default for MockEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment for MockEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.read().unwrap().get(name).cloned()
    }
}
