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

//! Response types.
//!
//! This module contains types related to service responses. Notably it
//! contains the `Response` type itself. Typically you'll import this type.
//!
//! # Examples
//!
//! Inspecting the result of a request
//!
//! ```no_run
//! # use elasticsearch_serverless_gax::Result;
//! # use elasticsearch_serverless_gax::response::Response;
//! async fn search_products() -> Result<Response> {
//!   // ...
//! # panic!()
//! }
//!
//! # tokio_test::block_on(async {
//! let response = search_products().await?;
//! if let Some(date) = response.headers().get("Date") {
//!     // do something with the date
//! }
//! let total = &response.json()?["hits"]["total"]["value"];
//! # Result::<()>::Ok(()) });
//! ```
//!
//! Creating a response for mocks
//!
//! ```
//! # use elasticsearch_serverless_gax::response::Response;
//! let response = Response::from(serde_json::json!({"acknowledged": true}));
//! assert_eq!(response.status(), http::StatusCode::OK);
//! ```

use crate::Result;
use crate::error::Error;
use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use std::sync::OnceLock;

/// Represents a service response.
///
/// A response consists of the status code, the headers, and the payload. The
/// payload is kept as raw bytes, and parsed as JSON the first time the
/// application asks for it. The parsed document is cached, later calls
/// return the same document without parsing the payload again.
///
/// Typically you get a response as the result of making a request via the
/// client. You may also create responses directly when mocking the transport
/// in your own tests.
#[derive(Debug)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
    parsed: OnceLock<serde_json::Value>,
}

impl Response {
    pub fn new(status: StatusCode, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
            parsed: OnceLock::new(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The raw payload.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Consumes the response and returns the raw payload.
    pub fn into_body(self) -> Bytes {
        self.body
    }

    /// Returns true for 2xx status codes.
    ///
    /// Operations using `HEAD`, such as `exists` and `ping`, report their
    /// result through the status code.
    pub fn as_bool(&self) -> bool {
        self.status.is_success()
    }

    /// The payload as text.
    ///
    /// Useful for operations replying with plain text, such as the `cat`
    /// operations.
    pub fn text(&self) -> Result<&str> {
        std::str::from_utf8(&self.body).map_err(Error::deser)
    }

    /// The payload parsed as a JSON document.
    ///
    /// The payload is parsed at most once. An empty payload (for example, the
    /// reply to a `HEAD` request) parses as `null`.
    ///
    /// # Example
    /// ```
    /// # use elasticsearch_serverless_gax::response::Response;
    /// let response = Response::from(serde_json::json!({"count": 42}));
    /// assert_eq!(response.json()?["count"], 42);
    /// # Ok::<(), elasticsearch_serverless_gax::error::Error>(())
    /// ```
    pub fn json(&self) -> Result<&serde_json::Value> {
        if let Some(parsed) = self.parsed.get() {
            return Ok(parsed);
        }
        let value = if self.body.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&self.body).map_err(Error::deser)?
        };
        Ok(self.parsed.get_or_init(|| value))
    }

    /// Deserializes the payload into an application type.
    ///
    /// # Example
    /// ```
    /// # use elasticsearch_serverless_gax::response::Response;
    /// #[derive(serde::Deserialize)]
    /// struct Count { count: u64 }
    /// let response = Response::from(serde_json::json!({"count": 42}));
    /// let count = response.deserialize::<Count>()?;
    /// assert_eq!(count.count, 42);
    /// # Ok::<(), elasticsearch_serverless_gax::error::Error>(())
    /// ```
    pub fn deserialize<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        T::deserialize(self.json()?).map_err(Error::deser)
    }
}

impl Clone for Response {
    fn clone(&self) -> Self {
        let parsed = OnceLock::new();
        if let Some(v) = self.parsed.get() {
            let _ = parsed.set(v.clone());
        }
        Self {
            status: self.status,
            headers: self.headers.clone(),
            body: self.body.clone(),
            parsed,
        }
    }
}

/// Creates a successful response with a JSON payload.
///
/// Applications use this to create responses in mocks.
impl From<serde_json::Value> for Response {
    fn from(value: serde_json::Value) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static(crate::operation::JSON),
        );
        let body = Bytes::from(value.to_string());
        let parsed = OnceLock::from(value);
        Self {
            status: StatusCode::OK,
            headers,
            body,
            parsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accessors() {
        let mut headers = HeaderMap::new();
        headers.insert("x-elastic-product", "Elasticsearch".parse().unwrap());
        let response = Response::new(
            StatusCode::CREATED,
            headers.clone(),
            Bytes::from_static(br#"{"result":"created"}"#),
        );
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers(), &headers);
        assert_eq!(response.body(), &Bytes::from_static(br#"{"result":"created"}"#));
        assert!(response.as_bool());
        assert_eq!(response.text().unwrap(), r#"{"result":"created"}"#);
        assert_eq!(
            response.into_body(),
            Bytes::from_static(br#"{"result":"created"}"#)
        );
    }

    #[test]
    fn lazy_parse() -> anyhow::Result<()> {
        let response = Response::new(
            StatusCode::OK,
            HeaderMap::new(),
            Bytes::from_static(br#"{"count":42}"#),
        );
        assert!(response.parsed.get().is_none());
        let first = response.json()?;
        assert_eq!(first, &json!({"count": 42}));
        let second = response.json()?;
        assert!(std::ptr::eq(first, second));
        Ok(())
    }

    #[test]
    fn empty_body() -> anyhow::Result<()> {
        let response = Response::new(StatusCode::NOT_FOUND, HeaderMap::new(), Bytes::new());
        assert!(!response.as_bool());
        assert_eq!(response.json()?, &serde_json::Value::Null);
        Ok(())
    }

    #[test]
    fn bad_json() {
        let response = Response::new(StatusCode::OK, HeaderMap::new(), Bytes::from_static(b"{"));
        let err = response.json().unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        // Failures are not cached.
        let err = response.json().unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
    }

    #[test]
    fn bad_text() {
        let response = Response::new(
            StatusCode::OK,
            HeaderMap::new(),
            Bytes::from_static(&[0xFF, 0xFE]),
        );
        let err = response.text().unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
    }

    #[test]
    fn deserialize() -> anyhow::Result<()> {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Hit {
            #[serde(rename = "_id")]
            id: String,
        }
        let response = Response::from(json!({"_id": "1", "found": true}));
        assert_eq!(response.deserialize::<Hit>()?, Hit { id: "1".into() });

        let err = response.deserialize::<Vec<Hit>>().unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }

    #[test]
    fn from_json() -> anyhow::Result<()> {
        let response = Response::from(json!({"acknowledged": true}));
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(http::header::CONTENT_TYPE),
            Some(&http::HeaderValue::from_static("application/json"))
        );
        assert_eq!(response.text()?, r#"{"acknowledged":true}"#);
        assert_eq!(response.json()?["acknowledged"], true);
        Ok(())
    }

    #[test]
    fn clone_keeps_parsed() -> anyhow::Result<()> {
        let response = Response::new(StatusCode::OK, HeaderMap::new(), Bytes::from_static(b"[1]"));
        let clone = response.clone();
        assert!(clone.parsed.get().is_none());
        response.json()?;
        let clone = response.clone();
        assert_eq!(clone.parsed.get(), Some(&json!([1])));
        Ok(())
    }
}
