// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::value::Value;

/// The options supplied by the application for a single call.
///
/// Path arguments (`index`, `id`, ...) and query options (`refresh`,
/// `routing`, ...) share the same mapping. The operation descriptor decides
/// which keys go where. Keys keep their insertion order, setting an existing
/// key replaces its value in place.
///
/// A key set to [Value::Null], or to a list without any non-null element, is
/// treated exactly like an absent key.
///
/// # Example
/// ```
/// # use elasticsearch_serverless_gax::params::Params;
/// let params = Params::new()
///     .with("index", "logs")
///     .with("size", 10)
///     .with("routing", None::<&str>);
/// assert!(params.contains("index"));
/// assert!(!params.contains("routing"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, Value)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for `name`, returning the updated mapping.
    pub fn with<K: Into<String>, V: Into<Value>>(mut self, name: K, value: V) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets the value for `name`, replacing any previous value.
    pub fn insert<K: Into<String>, V: Into<Value>>(&mut self, name: K, value: V) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, v)) => *v = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Removes `name` from the mapping, returning its previous value.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let position = self.entries.iter().position(|(k, _)| k == name)?;
        Some(self.entries.remove(position).1)
    }

    /// Returns the value for `name`, unless it is absent or [empty][Value::is_empty].
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, v)| k == name && !v.is_empty())
            .map(|(_, v)| v)
    }

    /// Returns true if `name` is present with a non-empty value.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the coerced value for `name`, unless it is absent or coerces
    /// to an empty string.
    ///
    /// Path arguments and required options use this form, an empty string
    /// cannot fill a path segment.
    ///
    /// # Example
    /// ```
    /// # use elasticsearch_serverless_gax::params::Params;
    /// let params = Params::new()
    ///     .with("index", ["logs", "metrics"])
    ///     .with("id", "")
    ///     .with("routing", Vec::<&str>::new());
    /// assert_eq!(params.text("index").as_deref(), Some("logs,metrics"));
    /// assert_eq!(params.text("id"), None);
    /// assert_eq!(params.text("routing"), None);
    /// ```
    pub fn text(&self, name: &str) -> Option<String> {
        self.get(name)
            .and_then(Value::coerce)
            .filter(|v| !v.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates over all the entries, including `Null` values, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl IntoIterator for Params {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Params::new();
        params.extend(iter);
        params
    }
}

impl<K, V> Extend<(K, V)> for Params
where
    K: Into<String>,
    V: Into<Value>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        iter.into_iter().for_each(|(k, v)| self.insert(k, v));
    }
}

/// Keeps the entries allowed by a whitelist, in whitelist order.
///
/// Keys not in `allowed` are dropped without any error. Keys in `allowed`
/// that are absent, or set to `Null`, are skipped. A key repeated in
/// `allowed` is only returned once.
///
/// # Example
/// ```
/// # use elasticsearch_serverless_gax::params::{filter, Params};
/// let params = Params::new()
///     .with("unknown", 1)
///     .with("b", "y")
///     .with("a", "x");
/// let got = filter(&params, ["a", "b", "c"])
///     .into_iter()
///     .map(|(k, _)| k)
///     .collect::<Vec<_>>();
/// assert_eq!(got, vec!["a", "b"]);
/// ```
pub fn filter<'a, I>(params: &'a Params, allowed: I) -> Vec<(&'static str, &'a Value)>
where
    I: IntoIterator<Item = &'static str>,
{
    let mut result: Vec<(&'static str, &'a Value)> = Vec::new();
    for key in allowed {
        if result.iter().any(|(k, _)| *k == key) {
            continue;
        }
        if let Some(v) = params.get(key) {
            result.push((key, v));
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn insert_replaces_in_place() {
        let mut params = Params::new().with("a", 1).with("b", 2);
        params.insert("a", 3);
        let got = params.iter().map(|(k, _)| k).collect::<Vec<_>>();
        assert_eq!(got, vec!["a", "b"]);
        assert_eq!(params.get("a"), Some(&Value::Integer(3)));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn null_is_absent() {
        let params = Params::new().with("a", Value::Null).with("b", "x");
        assert!(!params.contains("a"));
        assert!(params.get("a").is_none());
        assert!(params.contains("b"));
        assert!(!params.contains("c"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn empty_list_is_absent() {
        let params = Params::new()
            .with("index", Vec::<&str>::new())
            .with("routing", Value::List(vec![Value::Null]))
            .with("id", "");
        assert!(!params.contains("index"));
        assert!(!params.contains("routing"));
        assert!(params.contains("id"));
        assert_eq!(params.text("index"), None);
        assert_eq!(params.text("id"), None);
        assert!(filter(&params, ["index", "routing"]).is_empty());
    }

    #[test]
    fn remove() {
        let mut params = Params::new().with("a", 1).with("b", 2);
        assert_eq!(params.remove("a"), Some(Value::Integer(1)));
        assert_eq!(params.remove("a"), None);
        assert!(!params.is_empty());
        assert_eq!(params.remove("b"), Some(Value::Integer(2)));
        assert!(params.is_empty());
    }

    #[test]
    fn from_iter() {
        let params = Params::from_iter([("a", "x"), ("b", "y"), ("a", "z")]);
        let got = params
            .iter()
            .map(|(k, v)| (k, v.coerce()))
            .collect::<Vec<_>>();
        assert_eq!(
            got,
            vec![("a", Some("z".to_string())), ("b", Some("y".to_string()))]
        );
    }

    #[test]
    fn filter_whitelist_order() {
        let params = Params::new()
            .with("refresh", true)
            .with("pipeline", "p1")
            .with("routing", "r1");
        let got = filter(&params, ["pipeline", "refresh", "routing"])
            .into_iter()
            .map(|(k, _)| k)
            .collect::<Vec<_>>();
        assert_eq!(got, vec!["pipeline", "refresh", "routing"]);
    }

    #[test]
    fn filter_drops_unknown() {
        let params = Params::new()
            .with("index", "logs")
            .with("unknown", "x")
            .with("size", 10);
        let got = filter(&params, ["size", "from"]);
        assert_eq!(got, vec![("size", &Value::Integer(10))]);
    }

    #[test]
    fn filter_skips_null_and_duplicates() {
        let params = Params::new().with("a", Value::Null).with("b", "x");
        let got = filter(&params, ["a", "b", "b"]);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].0, "b");
        assert_eq!(got[0].1.coerce().as_deref(), Some("x"));
    }

    #[test]
    fn filter_empty() {
        let params = Params::new().with("a", 1);
        assert!(filter(&params, []).is_empty());
        assert!(filter(&Params::new(), ["a"]).is_empty());
    }
}
