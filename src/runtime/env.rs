use std::collections::HashMap;

use super::value::Value;

/// The global variable table. Lives as long as the session.
pub(crate) struct Environment {
    entries: HashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, k: &str) -> Option<&Value> {
        self.entries.get(k)
    }

    pub fn insert(&mut self, k: &str, v: Value) {
        let _ = self.entries.insert(k.to_string(), v);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
