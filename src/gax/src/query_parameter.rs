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

//! Serializes query parameters.
//!
//! The entries come from [filter][crate::params::filter], so they are already
//! whitelisted and ordered. Each value is coerced to its canonical string and
//! percent-encoded with the same rules used for path segments.

use crate::path_parameter::enc;
use crate::value::Value;

/// Returns the query string for `entries`, without the leading `?`.
///
/// # Example
/// ```
/// # use elasticsearch_serverless_gax::query_parameter::to_query;
/// # use elasticsearch_serverless_gax::value::Value;
/// let refresh = Value::from(true);
/// let routing = Value::from(["a", "b"]);
/// let got = to_query(&[("refresh", &refresh), ("routing", &routing)]);
/// assert_eq!(got, "refresh=true&routing=a%2Cb");
/// ```
pub fn to_query(entries: &[(&'static str, &Value)]) -> String {
    entries
        .iter()
        .filter_map(|(k, v)| v.coerce().map(|v| format!("{}={}", enc(k), enc(&v))))
        .collect::<Vec<_>>()
        .join("&")
}

/// Appends the query string for `entries` to `path`.
///
/// The `?` separator is omitted when there are no entries.
pub fn append(path: String, entries: &[(&'static str, &Value)]) -> String {
    let query = to_query(entries);
    if query.is_empty() {
        return path;
    }
    format!("{path}?{query}")
}
