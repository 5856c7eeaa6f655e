//! Symbol values for numeric evaluation.

use std::collections::HashMap;
use std::sync::Arc;

/// Maps symbol vector names to numeric values.
///
/// A symbol `u[i]` resolves to the `i`-th entry bound under `"u"`.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    values: HashMap<Arc<str>, Vec<f64>>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `values`, replacing any previous binding.
    pub fn bind(mut self, name: impl Into<Arc<str>>, values: Vec<f64>) -> Self {
        self.values.insert(name.into(), values);
        self
    }

    /// Looks up the value of `name[index]`.
    pub fn get(&self, name: &str, index: usize) -> Option<f64> {
        self.values
            .get(name)
            .and_then(|values| values.get(index))
            .copied()
    }
}
