//! Query-string construction
//!
//! [`QueryParams`] is an insertion-ordered mapping of parameter names to
//! optional values. A `None` value marks the key as explicitly absent: it is
//! remembered (so catalog defaults do not fill it in) but never emitted.
//! Explicit `false` and empty strings are real values and are emitted.

use std::fmt;

/// Ordered query parameters with unique keys
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, Option<String>)>,
}

impl QueryParams {
    /// Create an empty parameter set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, or mark it absent when `value` is `None`.
    ///
    /// Re-setting an existing key replaces its value and keeps its position.
    pub fn set<V: ToString>(&mut self, key: impl Into<String>, value: Option<V>) {
        let key = key.into();
        let value = value.map(|v| v.to_string());
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Set `key` to a present value
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        self.set(key, Some(value));
    }

    /// Builder-style [`insert`](Self::insert)
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder-style [`set`](Self::set)
    #[must_use]
    pub fn with_opt<V: ToString>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.set(key, value);
        self
    }

    /// Whether `key` was mentioned at all (present or explicitly absent)
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Value for `key`; `None` if the key is unknown or explicitly absent
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Iterate over all entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// Iterate over the keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Number of entries, including explicitly absent ones
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no keys have been mentioned
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as a percent-encoded query string without the leading `?`
    #[must_use]
    pub fn to_query_string(&self) -> String {
        build_query_string(self)
    }
}

impl<K, V> FromIterator<(K, Option<V>)> for QueryParams
where
    K: Into<String>,
    V: ToString,
{
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.set(key, value);
        }
        params
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&build_query_string(self))
    }
}

/// Build a percent-encoded query string from `params`.
///
/// Absent values are skipped entirely. Remaining pairs are emitted as
/// `key=value`, joined by `&`, in insertion order.
#[must_use]
pub fn build_query_string(params: &QueryParams) -> String {
    params
        .iter()
        .filter_map(|(key, value)| {
            value.map(|v| format!("{}={}", urlencoding::encode(key), urlencoding::encode(v)))
        })
        .collect::<Vec<_>>()
        .join("&")
}
