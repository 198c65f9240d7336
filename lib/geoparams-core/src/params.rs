//! Ordered query parameter list.
//!
//! [`QueryParams`] is what every request serializes into: a sequence of
//! `(name, value)` string pairs in emission order. Names may repeat (the
//! static maps `style` parameter does). Values are raw; percent-encoding is
//! left to whatever builds the final URL.
//!
//! # Example
//!
//! ```
//! use geoparams_core::QueryParams;
//!
//! let mut params = QueryParams::new();
//! params.push("key", "secret").push("size", "600x400");
//! params.push_opt("heading", None::<i16>);
//!
//! assert_eq!(params.len(), 2);
//! assert_eq!(params.get("size"), Some("600x400"));
//! ```

use std::fmt::Display;

/// An ordered list of query parameter pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Appends a parameter.
    pub fn push(&mut self, name: impl Into<String>, value: impl Display) -> &mut Self {
        self.pairs.push((name.into(), value.to_string()));
        self
    }

    /// Appends a parameter when `value` is `Some`.
    pub fn push_opt(&mut self, name: impl Into<String>, value: Option<impl Display>) -> &mut Self {
        if let Some(value) = value {
            self.push(name, value);
        }
        self
    }

    /// Appends every pair of another list, keeping its order.
    pub fn extend(&mut self, other: Self) -> &mut Self {
        self.pairs.extend(other.pairs);
        self
    }

    /// First value recorded for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// All values recorded for `name`, in order.
    #[must_use]
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .collect()
    }

    /// Returns `true` if a parameter called `name` was emitted.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.pairs.iter().any(|(key, _)| key == name)
    }

    /// Parameter names, in emission order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.pairs.iter().map(|(key, _)| key.as_str()).collect()
    }

    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if no pair was emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterates over `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Consume into the underlying pairs.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.pairs
    }
}

impl IntoIterator for QueryParams {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

impl From<QueryParams> for Vec<(String, String)> {
    fn from(params: QueryParams) -> Self {
        params.pairs
    }
}

/// Joins displayable values with the `|` list separator.
///
/// # Example
///
/// ```
/// use geoparams_core::{Coordinate, join_pipe};
///
/// let path = [Coordinate::new(1.0, 2.0), Coordinate::new(3.5, -4.25)];
/// assert_eq!(join_pipe(&path), "1,2|3.5,-4.25");
/// ```
pub fn join_pipe<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    values
        .into_iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join("|")
}

/// Service path of an endpoint, relative to its API root.
///
/// Kept as metadata for the transport layer; nothing here builds a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EndpointPath(&'static str);

impl EndpointPath {
    /// Create a new endpoint path.
    #[must_use]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    /// Get the path string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for EndpointPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for EndpointPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;

    #[test]
    fn push_keeps_emission_order() {
        let mut params = QueryParams::new();
        params.push("key", "k").push("size", "1x2").push("pitch", 0);

        check!(params.names() == vec!["key", "size", "pitch"]);
        check!(params.get("pitch") == Some("0"));
        check!(params.get("fov").is_none());
    }

    #[test]
    fn push_opt_skips_none() {
        let mut params = QueryParams::new();
        params.push_opt("channel", None::<&str>);
        check!(params.is_empty());

        params.push_opt("channel", Some("web"));
        check!(params.into_pairs() == vec![("channel".to_string(), "web".to_string())]);
    }

    #[test]
    fn repeated_names_are_kept() {
        let mut params = QueryParams::new();
        params.push("style", "a").push("style", "b");

        check!(params.len() == 2);
        check!(params.get("style") == Some("a"));
        check!(params.get_all("style") == vec!["a", "b"]);
    }

    #[test]
    fn extend_appends_in_order() {
        let mut base = QueryParams::new();
        base.push("key", "k");
        let mut tail = QueryParams::new();
        tail.push("target", "af");

        base.extend(tail);
        let pairs: Vec<_> = base.iter().collect();
        check!(pairs == vec![("key", "k"), ("target", "af")]);
    }

    #[test]
    fn join_pipe_empty_and_single() {
        check!(join_pipe(Vec::<String>::new()).is_empty());
        check!(join_pipe(["one"]) == "one");
        check!(join_pipe(["one", "two"]) == "one|two");
    }

    #[test]
    fn endpoint_path_as_str() {
        let path = EndpointPath::new("elevation/json");
        check!(path.as_str() == "elevation/json");
        check!(path.to_string() == "elevation/json");
        let s: &str = path.as_ref();
        check!(s == "elevation/json");
    }
}
