//! Persistent variable environment for the Simple engine.

use crate::error::{EvalError, EvalResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use simple_types::Value;
use std::fmt;

/// Ordered mapping from variable name to value term.
///
/// Insertion order is kept for display only; equality compares bindings
/// regardless of order. Every update is copy-on-write: `merge` and `bind`
/// return a new environment and leave the receiver untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Environment {
    bindings: IndexMap<String, Value>,
}

impl Environment {
    /// Create an environment with no bindings.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up a variable. Absent names are an `UnboundVariable` error.
    pub fn get(&self, name: &str) -> EvalResult<Value> {
        self.bindings
            .get(name)
            .copied()
            .ok_or_else(|| EvalError::UnboundVariable(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Overlay `bindings` on a copy of this environment.
    ///
    /// Existing keys keep their position and take the new value; new keys
    /// are appended in the order given.
    pub fn merge<I, K>(&self, bindings: I) -> Environment
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let mut merged = self.bindings.clone();
        for (name, value) in bindings {
            merged.insert(name.into(), value);
        }
        Environment { bindings: merged }
    }

    /// Single-binding `merge`.
    pub fn bind(&self, name: impl Into<String>, value: Value) -> Environment {
        self.merge([(name.into(), value)])
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Value)> + '_ {
        self.bindings.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Environment::empty().merge(iter)
    }
}

impl<K: Into<String>, const N: usize> From<[(K, Value); N]> for Environment {
    fn from(bindings: [(K, Value); N]) -> Self {
        bindings.into_iter().collect()
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, value)) in self.bindings.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name} => {}", value.inspect())?;
        }
        f.write_str("}")
    }
}
