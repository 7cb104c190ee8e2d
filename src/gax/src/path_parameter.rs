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

//! Expansion of path templates.
//!
//! Path templates are static strings such as `/{index}/_create/{id}`. Each
//! `{name}` placeholder is replaced by the coerced option with the same name,
//! percent-encoded. Options used in a path are arbitrary application data
//! (index names, document ids), so nothing but the unreserved characters is
//! kept literal.

use crate::params::Params;

/// The set of characters that are percent encoded.
///
/// Everything except the RFC 3986 unreserved characters:
///     A-Z, a-z, 0-9, `-`, `.`, `_`, and `~`.
///
/// In particular `,` is encoded, as are `/`, `*`, and space (as `%20`).
const ENCODED_CHARS: percent_encoding::AsciiSet = percent_encoding::NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent encode a string.
///
/// # Example
/// ```
/// # use elasticsearch_serverless_gax::path_parameter::enc;
/// assert_eq!(enc("a,b c/d"), "a%2Cb%20c%2Fd");
/// assert_eq!(enc("my-index_1.v2~"), "my-index_1.v2~");
/// ```
pub fn enc(value: &str) -> String {
    percent_encoding::utf8_percent_encode(value, &ENCODED_CHARS).to_string()
}

/// Returns the placeholder names in a template, in order.
///
/// # Example
/// ```
/// # use elasticsearch_serverless_gax::path_parameter::placeholders;
/// let got = placeholders("/{index}/_create/{id}").collect::<Vec<_>>();
/// assert_eq!(got, vec!["index", "id"]);
/// ```
pub fn placeholders(template: &'static str) -> impl Iterator<Item = &'static str> {
    template
        .split('{')
        .skip(1)
        .filter_map(|s| s.split_once('}').map(|(name, _)| name))
}

/// Returns the first placeholder in `template` without a value in `params`.
pub fn first_missing(template: &'static str, params: &Params) -> Option<&'static str> {
    placeholders(template).find(|name| params.text(name).is_none())
}

/// Replaces every placeholder with its encoded value.
///
/// Returns `None` if any placeholder has no value, or a value that coerces to
/// an empty string. Values are coerced first,
/// and the result is encoded exactly once. Thus `["a", "b,c"]` becomes
/// `a%2Cb%2Cc`.
///
/// # Example
/// ```
/// # use elasticsearch_serverless_gax::params::Params;
/// # use elasticsearch_serverless_gax::path_parameter::expand;
/// let params = Params::new().with("index", ["a", "b,c"]);
/// assert_eq!(expand("/{index}/_search", &params).as_deref(), Some("/a%2Cb%2Cc/_search"));
/// assert_eq!(expand("/{index}/_doc/{id}", &params), None);
/// ```
pub fn expand(template: &'static str, params: &Params) -> Option<String> {
    let mut path = String::with_capacity(template.len());
    let mut rest = template;
    while let Some((literal, tail)) = rest.split_once('{') {
        path.push_str(literal);
        let (name, tail) = tail.split_once('}')?;
        let value = params.text(name)?;
        path.push_str(&enc(&value));
        rest = tail;
    }
    path.push_str(rest);
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use test_case::test_case;

    #[test_case("abc", "abc")]
    #[test_case("ABCxyz019", "ABCxyz019")]
    #[test_case("-._~", "-._~")]
    #[test_case("a,b", "a%2Cb")]
    #[test_case("a b", "a%20b")]
    #[test_case("a/b", "a%2Fb")]
    #[test_case("logs-*", "logs-%2A")]
    #[test_case("<logs-{now/d}>", "%3Clogs-%7Bnow%2Fd%7D%3E")]
    #[test_case("a+b", "a%2Bb")]
    #[test_case("a?b#c", "a%3Fb%23c")]
    #[test_case("ñ", "%C3%B1")]
    fn encoding(input: &str, want: &str) {
        assert_eq!(enc(input), want);
    }

    #[test_case("/", &[])]
    #[test_case("/_search", &[])]
    #[test_case("/{index}/_search", &["index"])]
    #[test_case("/{index}/_create/{id}", &["index", "id"])]
    #[test_case("/{index}/_mvt/{field}/{zoom}/{x}/{y}", &["index", "field", "zoom", "x", "y"])]
    fn placeholder_names(template: &'static str, want: &[&str]) {
        let got = placeholders(template).collect::<Vec<_>>();
        assert_eq!(got, want);
    }

    #[test]
    fn missing_placeholders() {
        let params = Params::new().with("index", "products").with("id", Value::Null);
        assert_eq!(first_missing("/{index}/_search", &params), None);
        assert_eq!(first_missing("/{index}/_create/{id}", &params), Some("id"));
        assert_eq!(first_missing("/{id}/{index}/{x}", &params), Some("id"));
        assert_eq!(first_missing("/_search", &params), None);
    }

    #[test_case(Params::new().with("index", "logs"), "/logs/_search"; "simple")]
    #[test_case(Params::new().with("index", ["a", "b,c"]), "/a%2Cb%2Cc/_search"; "list")]
    #[test_case(Params::new().with("index", "a b"), "/a%20b/_search"; "space")]
    #[test_case(Params::new().with("index", vec!["x", "y"]), "/x%2Cy/_search"; "vec")]
    #[test_case(Params::new().with("index", 42), "/42/_search"; "number")]
    fn expand_search(params: Params, want: &str) {
        assert_eq!(expand("/{index}/_search", &params).as_deref(), Some(want));
    }

    #[test]
    fn expand_many() {
        let params = Params::new()
            .with("index", "products")
            .with("id", "1")
            .with("unused", "x");
        assert_eq!(
            expand("/{index}/_create/{id}", &params).as_deref(),
            Some("/products/_create/1")
        );
        assert_eq!(expand("/_search", &params).as_deref(), Some("/_search"));
    }

    #[test]
    fn expand_missing() {
        let params = Params::new().with("index", "products").with("id", Value::Null);
        assert_eq!(expand("/{index}/_create/{id}", &params), None);
        assert_eq!(expand("/{other}", &params), None);
    }

    #[test_case(Params::new().with("index", Vec::<&str>::new()); "empty list")]
    #[test_case(Params::new().with("index", [None::<&str>, None]); "only nulls")]
    #[test_case(Params::new().with("index", ""); "empty string")]
    fn expand_empty(params: Params) {
        assert_eq!(expand("/{index}/_search", &params), None);
        assert_eq!(first_missing("/{index}/_search", &params), Some("index"));
    }
}
