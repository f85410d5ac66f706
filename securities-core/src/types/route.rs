//! Route types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Which registered rule a route matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// `/securities/name:?/type:?`
    Load,
    /// `/securities/filter:/:id?/name:?/type:?`
    LoadFilter,
    /// `/securities/:id/name:?/version:?/type:?`
    LoadItem,
}

impl RuleKind {
    /// Match priority when parsing a hash.
    pub const PRIORITY: [Self; 3] = [Self::LoadFilter, Self::LoadItem, Self::Load];
}

/// Route argument bag. Absent and empty are the same thing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteArgs(BTreeMap<String, String>);

impl RouteArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Sets an argument; an empty value removes it.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if value.is_empty() {
            self.0.remove(&key);
        } else {
            self.0.insert(key, value);
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Applies an edit: additions first, then deletions.
    #[must_use]
    pub fn edited(&self, edit: &HashEdit) -> Self {
        let mut args = self.clone();
        for (key, value) in &edit.add {
            args.set(key.clone(), value.clone());
        }
        for key in &edit.del {
            args.remove(key);
        }
        args
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RouteArgs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = Self::new();
        for (k, v) in iter {
            args.set(k, v);
        }
        args
    }
}

/// Arguments to add and delete when producing a hash from an existing route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HashEdit {
    pub add: Vec<(String, String)>,
    pub del: Vec<String>,
}

impl HashEdit {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn add(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.add.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn del(mut self, key: impl Into<String>) -> Self {
        self.del.push(key.into());
        self
    }
}

/// A parsed route: the canonical application state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Path without the prefix, e.g. `/securities/foo123/version:*`.
    pub path: String,
    pub rule: RuleKind,
    pub args: RouteArgs,
}

impl Route {
    pub fn id(&self) -> Option<&str> {
        self.args.get("id")
    }

    pub fn version(&self) -> Option<&str> {
        self.args.get("version")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_value_is_absent() {
        let mut args = RouteArgs::new().with("name", "ACME");
        args.set("name", "");
        assert!(!args.contains("name"));
        assert!(args.is_empty());
    }

    #[test]
    fn edit_adds_then_deletes() {
        let args = RouteArgs::new().with("id", "A").with("version", "*");
        let edited = args.edited(&HashEdit::new().add("id", "B").del("version"));
        assert_eq!(edited.get("id"), Some("B"));
        assert!(!edited.contains("version"));

        // a key both added and deleted ends up absent
        let edited = args.edited(&HashEdit::new().add("name", "x").del("name"));
        assert!(!edited.contains("name"));
    }
}
