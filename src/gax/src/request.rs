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

use crate::Result;
use crate::error::Error;
use crate::operation::Verb;
use bytes::Bytes;
use http::HeaderMap;
use std::time::Duration;

/// The body of a request.
///
/// Most operations take a single JSON document. A few operations (`bulk`,
/// `msearch`, `msearch_template`) take newline-delimited JSON, where each
/// line is a separate document. [Body::Raw] sends the bytes unmodified, for
/// applications that already have the serialized payload.
///
/// # Example
/// ```
/// # use elasticsearch_serverless_gax::request::Body;
/// # use serde_json::json;
/// let body = Body::from(json!({"query": {"match_all": {}}}));
/// assert!(!body.is_empty());
/// let lines = Body::from(vec![json!({"index": {"_id": "1"}}), json!({"title": "a"})]);
/// assert!(!lines.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Body {
    Json(serde_json::Value),
    Ndjson(Vec<serde_json::Value>),
    Raw(Bytes),
}

impl Body {
    /// Creates a JSON body from any serializable value.
    ///
    /// # Example
    /// ```
    /// # use elasticsearch_serverless_gax::request::Body;
    /// #[derive(serde::Serialize)]
    /// struct Product { name: String, price: f64 }
    /// let body = Body::json(&Product { name: "pen".into(), price: 1.5 })?;
    /// assert!(matches!(body, Body::Json(_)));
    /// # Ok::<(), elasticsearch_serverless_gax::error::Error>(())
    /// ```
    pub fn json<T: serde::Serialize + ?Sized>(value: &T) -> Result<Self> {
        serde_json::to_value(value).map(Self::Json).map_err(Error::ser)
    }

    /// Creates a newline-delimited JSON body from serializable values.
    pub fn ndjson<I, T>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: serde::Serialize,
    {
        lines
            .into_iter()
            .map(|l| serde_json::to_value(&l).map_err(Error::ser))
            .collect::<Result<Vec<_>>>()
            .map(Self::Ndjson)
    }

    /// Returns true if this body should not be sent.
    ///
    /// A JSON `null`, an empty list of lines, and empty raw bytes are all
    /// equivalent to no body at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Json(v) => v.is_null(),
            Self::Ndjson(lines) => lines.is_empty(),
            Self::Raw(b) => b.is_empty(),
        }
    }

    /// Serializes the body.
    ///
    /// Newline-delimited bodies end each line, including the last one, with
    /// `\n`.
    pub fn to_bytes(&self) -> Result<Bytes> {
        match self {
            Self::Json(v) => serde_json::to_vec(v).map(Bytes::from).map_err(Error::ser),
            Self::Ndjson(lines) => {
                let mut buffer = Vec::new();
                for line in lines {
                    serde_json::to_writer(&mut buffer, line).map_err(Error::ser)?;
                    buffer.push(b'\n');
                }
                Ok(Bytes::from(buffer))
            }
            Self::Raw(b) => Ok(b.clone()),
        }
    }
}

impl From<serde_json::Value> for Body {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}

impl From<Vec<serde_json::Value>> for Body {
    fn from(value: Vec<serde_json::Value>) -> Self {
        Self::Ndjson(value)
    }
}

impl From<Bytes> for Body {
    fn from(value: Bytes) -> Self {
        Self::Raw(value)
    }
}

impl From<String> for Body {
    fn from(value: String) -> Self {
        Self::Raw(Bytes::from(value))
    }
}

impl From<&'static str> for Body {
    fn from(value: &'static str) -> Self {
        Self::Raw(Bytes::from_static(value.as_bytes()))
    }
}

/// A fully built request, ready for the transport.
///
/// Requests are created by [Operation::build][crate::operation::Operation::build],
/// after all the validation succeeded. They cannot be modified afterwards.
#[derive(Clone, Debug)]
pub struct Request {
    operation: &'static str,
    verb: Verb,
    path: String,
    query: String,
    headers: HeaderMap,
    body: Option<Bytes>,
    timeout: Option<Duration>,
}

impl Request {
    pub(crate) fn new(
        operation: &'static str,
        verb: Verb,
        path: String,
        query: String,
        headers: HeaderMap,
        body: Option<Bytes>,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            operation,
            verb,
            path,
            query,
            headers,
            body,
            timeout,
        }
    }

    /// The name of the operation that produced this request, e.g. `search`.
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    pub fn verb(&self) -> Verb {
        self.verb
    }

    pub fn method(&self) -> http::Method {
        self.verb.method()
    }

    /// The encoded path, without the query string.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The encoded query string, without the leading `?`.
    pub fn query(&self) -> Option<&str> {
        if self.query.is_empty() {
            None
        } else {
            Some(&self.query)
        }
    }

    /// The path followed by the query string, if any.
    pub fn path_and_query(&self) -> String {
        match self.query() {
            None => self.path.clone(),
            Some(q) => format!("{}?{q}", self.path),
        }
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The serialized body, if any.
    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// The transport timeout override, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Consumes the request and returns its components.
    pub fn into_parts(self) -> Parts {
        Parts {
            operation: self.operation,
            verb: self.verb,
            path: self.path,
            query: self.query,
            headers: self.headers,
            body: self.body,
            timeout: self.timeout,
        }
    }
}

/// The components of a [Request].
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct Parts {
    pub operation: &'static str,
    pub verb: Verb,
    pub path: String,
    /// The encoded query string, empty if there are no query parameters.
    pub query: String,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
    pub timeout: Option<Duration>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(Body::Json(json!(null)), true; "json null")]
    #[test_case(Body::Json(json!({})), false; "empty object")]
    #[test_case(Body::Json(json!("")), false; "empty string")]
    #[test_case(Body::Ndjson(vec![]), true; "no lines")]
    #[test_case(Body::Ndjson(vec![json!({})]), false; "one line")]
    #[test_case(Body::Raw(Bytes::new()), true; "no bytes")]
    #[test_case(Body::from("x"), false; "some bytes")]
    fn is_empty(body: Body, want: bool) {
        assert_eq!(body.is_empty(), want);
    }

    #[test]
    fn json_bytes() -> anyhow::Result<()> {
        let body = Body::from(json!({"a": 1}));
        assert_eq!(body.to_bytes()?, Bytes::from_static(br#"{"a":1}"#));
        Ok(())
    }

    #[test]
    fn ndjson_bytes() -> anyhow::Result<()> {
        let body = Body::from(vec![json!({"index": {"_id": "1"}}), json!({"a": 1})]);
        assert_eq!(
            body.to_bytes()?,
            Bytes::from_static(b"{\"index\":{\"_id\":\"1\"}}\n{\"a\":1}\n")
        );
        Ok(())
    }

    #[test]
    fn raw_bytes() -> anyhow::Result<()> {
        let body = Body::from(String::from("abc"));
        assert_eq!(body.to_bytes()?, Bytes::from_static(b"abc"));
        Ok(())
    }

    #[test]
    fn serialize() -> anyhow::Result<()> {
        #[derive(serde::Serialize)]
        struct Doc {
            name: &'static str,
        }
        let body = Body::json(&Doc { name: "pen" })?;
        assert_eq!(body, Body::Json(json!({"name": "pen"})));

        let body = Body::ndjson([Doc { name: "a" }, Doc { name: "b" }])?;
        assert_eq!(
            body,
            Body::Ndjson(vec![json!({"name": "a"}), json!({"name": "b"})])
        );
        Ok(())
    }

    #[test]
    fn serialize_error() {
        use std::collections::BTreeMap;
        // Maps with non-string keys cannot be represented in JSON.
        let map = BTreeMap::from([((1, 2), "x")]);
        let err = Body::json(&map).unwrap_err();
        assert!(err.is_serialization(), "{err:?}");
    }

    #[test]
    fn request_accessors() {
        let request = Request::new(
            "search",
            Verb::Post,
            "/logs/_search".to_string(),
            "size=10".to_string(),
            HeaderMap::new(),
            Some(Bytes::from_static(b"{}")),
            Some(Duration::from_secs(1)),
        );
        assert_eq!(request.operation(), "search");
        assert_eq!(request.verb(), Verb::Post);
        assert_eq!(request.method(), http::Method::POST);
        assert_eq!(request.path(), "/logs/_search");
        assert_eq!(request.query(), Some("size=10"));
        assert_eq!(request.path_and_query(), "/logs/_search?size=10");
        assert_eq!(request.body(), Some(&Bytes::from_static(b"{}")));
        assert_eq!(request.timeout(), Some(Duration::from_secs(1)));

        let parts = request.into_parts();
        assert_eq!(parts.operation, "search");
        assert_eq!(parts.path, "/logs/_search");
        assert_eq!(parts.query, "size=10");
    }

    #[test]
    fn request_without_query() {
        let request = Request::new(
            "info",
            Verb::Get,
            "/".to_string(),
            String::new(),
            HeaderMap::new(),
            None,
            None,
        );
        assert_eq!(request.query(), None);
        assert_eq!(request.path_and_query(), "/");
        assert!(request.body().is_none());
    }
}
