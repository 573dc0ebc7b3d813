//! Environment lookup that tests can replace.
//!
//! [`Env::process()`] reads the real process environment; [`Env::fixed()`]
//! serves a fixed map so config tests never call `std::env::set_var`.

use std::collections::HashMap;

/// Source of environment variables.
#[derive(Clone, Debug, Default)]
pub struct Env {
    fixed: Option<HashMap<String, String>>,
}

impl Env {
    /// Read from the real process environment.
    pub fn process() -> Self {
        Self { fixed: None }
    }

    /// Serve only the given pairs; everything else is unset.
    pub fn fixed<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fixed: Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect()),
        }
    }

    /// Value of `name`, treating empty strings as unset.
    pub fn get(&self, name: &str) -> Option<String> {
        let value = match &self.fixed {
            Some(map) => map.get(name).cloned(),
            None => std::env::var(name).ok(),
        };
        value.filter(|v| !v.trim().is_empty())
    }
}
