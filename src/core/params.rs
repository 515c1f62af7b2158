//! Multi-valued query parameter collection
//!
//! HTTP query strings allow a key to repeat (`tag=a&tag=b`). This structure
//! preserves every occurrence in order of appearance, which the translator
//! relies on for multi-valued filters and sort keys.

use indexmap::IndexMap;

/// An ordered, multi-valued collection of raw query parameters.
///
/// Keys keep their first-appearance order; values under a key keep their
/// order of appearance. Every stored key has at least one value (possibly
/// the empty string, as produced by `?flag` or `?flag=`).
///
/// # Example
/// ```rust
/// use qp_translator::prelude::*;
///
/// let params = QueryParams::from_query("tag=a&tag=b&limit=10");
/// assert_eq!(params.get("limit"), Some("10"));
/// assert_eq!(params.get_all("tag"), &["a".to_string(), "b".to_string()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    params: IndexMap<String, Vec<String>>,
}

impl QueryParams {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one key/value occurrence, preserving order
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.entry(key.into()).or_default().push(value.into());
    }

    /// Build from an iterator of key/value pairs
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut params = Self::new();
        for (key, value) in pairs {
            params.append(key, value);
        }
        params
    }

    /// Parse a raw (still percent-encoded) query string.
    ///
    /// Decoding is lossy and never fails; malformed escapes come through as
    /// replacement characters, and a key without `=` yields an empty value.
    pub fn from_query(query: &str) -> Self {
        Self::from_pairs(form_urlencoded::parse(query.as_bytes()))
    }

    /// Get the first value for a key, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Get every value recorded for a key, in order of appearance
    pub fn get_all(&self, key: &str) -> &[String] {
        self.params.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether any value exists for this key
    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Distinct keys, in order of first appearance
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(String::as_str)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether the collection holds no parameters at all
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}
