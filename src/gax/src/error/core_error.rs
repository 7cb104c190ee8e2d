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

use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by the client.
///
/// The client reports errors from multiple sources. The application may have
/// omitted a required option, the request body may fail to serialize, the
/// transport may be unable to reach any configured node, or the service may
/// reply with a 4xx or 5xx status.
///
/// Most applications will just return the error or log it, without any further
/// action. However, some applications may need to interrogate the error
/// details. This type offers a series of predicates to determine the error
/// kind. The type also offers accessors to query the most common error details.
/// Applications can query the error [source][std::error::Error::source] for
/// deeper information.
///
/// # Example
/// ```
/// use elasticsearch_serverless_gax::error::Error;
/// match example_function() {
///     Err(e) if e.is_client_response() => {
///         println!("rejected by the service {e}, type={:?}", e.error_type());
///     },
///     Err(e) if e.is_no_node_available() => { println!("cannot reach the service {e}"); },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success, how boring"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # Err(Error::http(404, http::HeaderMap::new(), bytes::Bytes::from_static(b"NOT FOUND")))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error representing a missing required option.
    ///
    /// # Example
    /// ```
    /// use elasticsearch_serverless_gax::error::Error;
    /// use elasticsearch_serverless_gax::validate;
    /// let error = validate::missing("create", "index");
    /// assert!(error.is_missing_parameter());
    /// assert_eq!(error.missing_parameter(), Some("index"));
    /// ```
    pub fn missing<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::MissingParameter,
            source: Some(source.into()),
        }
    }

    /// A required option was absent, or `null`, when the operation was called.
    ///
    /// This is always a client-side generated error, detected before any
    /// request is sent. It is never transient: supply the missing option and
    /// try again.
    pub fn is_missing_parameter(&self) -> bool {
        matches!(self.kind, ErrorKind::MissingParameter)
    }

    /// The name of the missing option, if this is a missing parameter error.
    pub fn missing_parameter(&self) -> Option<&str> {
        if !self.is_missing_parameter() {
            return None;
        }
        self.source
            .as_ref()
            .and_then(|e| e.downcast_ref::<crate::validate::Error>())
            .map(|e| e.name())
    }

    /// Creates an error representing a body serialization problem.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use elasticsearch_serverless_gax::error::Error;
    /// let error = Error::ser("simulated problem");
    /// assert!(error.is_serialization());
    /// assert!(error.source().is_some());
    /// ```
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request body could not be serialized.
    ///
    /// This is always a client-side generated error, generated before the
    /// request is made. The serialization is deterministic, the error will
    /// repeat on future attempts with the same body.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Creates an error representing a deserialization problem.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use elasticsearch_serverless_gax::error::Error;
    /// let error = Error::deser("simulated problem");
    /// assert!(error.is_deserialization());
    /// assert!(error.source().is_some());
    /// ```
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// The response body could not be parsed.
    ///
    /// Note that the request completed in the service. Responses are parsed
    /// lazily, so this error is only returned when the application asks for
    /// the parsed document, or for a typed view of it.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Creates an error representing a transport that could not reach any node.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use elasticsearch_serverless_gax::error::Error;
    /// let error = Error::no_node_available("connection refused");
    /// assert!(error.is_no_node_available());
    /// assert!(error.source().is_some());
    /// ```
    pub fn no_node_available<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::NoNodeAvailable,
            source: Some(source.into()),
        }
    }

    /// The transport could not connect to any of the configured nodes.
    ///
    /// The source contains the error for the last node attempted.
    ///
    /// # Troubleshooting
    ///
    /// Verify the endpoint configured in the client. Serverless projects have
    /// a single endpoint per project, typically of the form
    /// `https://{project}.es.{region}.{provider}.elastic.cloud`. If the
    /// endpoint is correct this may indicate a network problem between the
    /// application and the service.
    pub fn is_no_node_available(&self) -> bool {
        matches!(self.kind, ErrorKind::NoNodeAvailable)
    }

    /// Creates an error representing a timeout.
    ///
    /// # Example
    /// ```
    /// use elasticsearch_serverless_gax::error::Error;
    /// let error = Error::timeout("simulated timeout");
    /// assert!(error.is_timeout());
    /// ```
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Timeout,
            source: Some(source.into()),
        }
    }

    /// The request could not be completed before the transport timeout.
    ///
    /// Note that the request may or may not have started, and it may or may
    /// not complete in the service.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Creates an error representing an I/O problem after a node was selected.
    ///
    /// Examples include a broken connection after the request is sent.
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Io,
            source: Some(source.into()),
        }
    }

    /// A problem in the transport layer without a full HTTP response.
    pub fn is_io(&self) -> bool {
        matches!(self.kind, ErrorKind::Io)
    }

    /// Creates an error from a reply with an error status code.
    ///
    /// Status codes in the 4xx range are client errors, codes in the 5xx range
    /// are server errors. Transports should only use this constructor for
    /// those ranges, any other status code is reported as an
    /// [unexpected response][Error::is_unexpected_response]. The payload is
    /// parsed as JSON if possible, see [error_body][Error::error_body].
    ///
    /// # Example
    /// ```
    /// use elasticsearch_serverless_gax::error::Error;
    /// let payload = bytes::Bytes::from_static(br#"{"error":{"type":"index_not_found_exception"},"status":404}"#);
    /// let error = Error::http(404, http::HeaderMap::new(), payload);
    /// assert!(error.is_client_response());
    /// assert_eq!(error.error_type(), Some("index_not_found_exception"));
    /// ```
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        let body = serde_json::from_slice::<serde_json::Value>(&payload).ok();
        let details = Box::new(ResponseDetails {
            status_code,
            headers,
            payload,
            body,
        });
        let kind = match status_code {
            400..=499 => ErrorKind::ClientResponse(details),
            500..=599 => ErrorKind::ServerResponse(details),
            _ => ErrorKind::UnexpectedResponse(details),
        };
        Self { kind, source: None }
    }

    /// The service replied with a 4xx status code.
    ///
    /// # Troubleshooting
    ///
    /// The error body typically explains the problem. Use
    /// [error_type][Error::error_type] and [error_reason][Error::error_reason]
    /// to find the cause, e.g. `index_not_found_exception`.
    pub fn is_client_response(&self) -> bool {
        matches!(self.kind, ErrorKind::ClientResponse(_))
    }

    /// The service replied with a 5xx status code.
    pub fn is_server_response(&self) -> bool {
        matches!(self.kind, ErrorKind::ServerResponse(_))
    }

    /// The transport reported an error with a status code outside the 4xx
    /// and 5xx ranges.
    pub fn is_unexpected_response(&self) -> bool {
        matches!(self.kind, ErrorKind::UnexpectedResponse(_))
    }

    /// The HTTP status code, if any, associated with this error.
    pub fn http_status_code(&self) -> Option<u16> {
        self.details().map(|d| d.status_code)
    }

    /// The headers, if any, associated with this error.
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        self.details().map(|d| &d.headers)
    }

    /// The raw payload, if any, associated with this error.
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        self.details().map(|d| &d.payload)
    }

    /// The parsed error body, if the reply payload was valid JSON.
    ///
    /// # Example
    /// ```
    /// use elasticsearch_serverless_gax::error::Error;
    /// let payload = bytes::Bytes::from_static(br#"{"error":"Incorrect HTTP method","status":405}"#);
    /// let error = Error::http(405, http::HeaderMap::new(), payload);
    /// let body = error.error_body().unwrap();
    /// assert_eq!(body["status"], 405);
    /// ```
    pub fn error_body(&self) -> Option<&serde_json::Value> {
        self.details().and_then(|d| d.body.as_ref())
    }

    /// The `error.type` field of the error body, e.g. `index_not_found_exception`.
    pub fn error_type(&self) -> Option<&str> {
        self.error_body()
            .and_then(|b| b.get("error"))
            .and_then(|e| e.get("type"))
            .and_then(|t| t.as_str())
    }

    /// The `error.reason` field of the error body.
    ///
    /// Some replies carry a plain string in the `error` field, that string is
    /// returned in this case.
    pub fn error_reason(&self) -> Option<&str> {
        let error = self.error_body().and_then(|b| b.get("error"))?;
        error
            .as_str()
            .or_else(|| error.get("reason").and_then(|r| r.as_str()))
    }

    fn details(&self) -> Option<&ResponseDetails> {
        match &self.kind {
            ErrorKind::ClientResponse(d)
            | ErrorKind::ServerResponse(d)
            | ErrorKind::UnexpectedResponse(d) => Some(d.as_ref()),
            _ => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::MissingParameter, Some(e)) => {
                write!(f, "cannot build the request: {e}")
            }
            (ErrorKind::Serialization, Some(e)) => {
                write!(f, "cannot serialize the request body {e}")
            }
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response {e}")
            }
            (ErrorKind::NoNodeAvailable, Some(e)) => {
                write!(f, "no node available to send the request, last error: {e}")
            }
            (ErrorKind::Timeout, Some(e)) => {
                write!(f, "the request exceeded the transport timeout {e}")
            }
            (ErrorKind::Io, Some(e)) => write!(f, "the transport reports an error: {e}"),
            (ErrorKind::ClientResponse(d), _)
            | (ErrorKind::ServerResponse(d), _)
            | (ErrorKind::UnexpectedResponse(d), _) => d.display(f),
            (_, None) => unreachable!("no constructor allows this"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error))
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    MissingParameter,
    Serialization,
    Deserialization,
    NoNodeAvailable,
    Timeout,
    Io,
    ClientResponse(Box<ResponseDetails>),
    ServerResponse(Box<ResponseDetails>),
    UnexpectedResponse(Box<ResponseDetails>),
}

#[derive(Debug)]
struct ResponseDetails {
    status_code: u16,
    headers: HeaderMap,
    payload: bytes::Bytes,
    body: Option<serde_json::Value>,
}

impl ResponseDetails {
    fn display(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = self.status_code;
        let error = self.body.as_ref().and_then(|b| b.get("error"));
        let kind = error.and_then(|e| e.get("type")).and_then(|t| t.as_str());
        let reason = error.and_then(|e| {
            e.as_str()
                .or_else(|| e.get("reason").and_then(|r| r.as_str()))
        });
        match (kind, reason) {
            (Some(k), Some(r)) => write!(f, "the service reports a [{code}] error: {k}: {r}"),
            (None, Some(r)) => write!(f, "the service reports a [{code}] error: {r}"),
            _ => match std::str::from_utf8(self.payload.as_ref()) {
                Ok(message) => write!(f, "the service reports a [{code}] error: {message}"),
                Err(_) => write!(f, "the service reports a [{code}] error: {:?}", self.payload),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate;
    use std::error::Error as StdError;
    use test_case::test_case;

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            "content-type",
            http::HeaderValue::from_static("application/json"),
        );
        headers
    }

    #[test]
    fn missing_parameter() {
        let error = validate::missing("create", "index");
        assert!(error.is_missing_parameter(), "{error:?}");
        assert_eq!(error.missing_parameter(), Some("index"));
        assert!(error.to_string().contains("index"), "{error}");
        assert!(error.to_string().contains("create"), "{error}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<validate::Error>());
        assert!(
            matches!(got, Some(e) if e.operation() == "create" && e.name() == "index"),
            "{error:?}"
        );

        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(error.http_headers().is_none(), "{error:?}");
        assert!(error.error_body().is_none(), "{error:?}");
    }

    #[test]
    fn missing_parameter_other_source() {
        let error = Error::missing("some other problem");
        assert!(error.is_missing_parameter(), "{error:?}");
        assert_eq!(error.missing_parameter(), None);
    }

    #[test]
    fn serialization() {
        let error = Error::ser("simulated problem");
        assert!(error.is_serialization(), "{error:?}");
        assert!(!error.is_deserialization(), "{error:?}");
        assert!(error.to_string().contains("simulated problem"), "{error}");
        assert!(error.missing_parameter().is_none(), "{error:?}");
    }

    #[test]
    fn deserialization() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = Error::deser(source);
        assert!(error.is_deserialization(), "{error:?}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<serde_json::Error>());
        assert!(got.is_some(), "{error:?}");
    }

    #[test]
    fn no_node_available() {
        let error = Error::no_node_available("connection refused");
        assert!(error.is_no_node_available(), "{error:?}");
        assert!(!error.is_io(), "{error:?}");
        assert!(error.to_string().contains("connection refused"), "{error}");
        assert!(error.http_status_code().is_none(), "{error:?}");
    }

    #[test]
    fn timeout_and_io() {
        let error = Error::timeout("too slow");
        assert!(error.is_timeout(), "{error:?}");
        assert!(error.to_string().contains("too slow"), "{error}");

        let error = Error::io("broken pipe");
        assert!(error.is_io(), "{error:?}");
        assert!(!error.is_timeout(), "{error:?}");
        assert!(error.to_string().contains("broken pipe"), "{error}");
    }

    #[test]
    fn client_response() {
        let payload = bytes::Bytes::from_static(
            br#"{"error":{"root_cause":[],"type":"index_not_found_exception","reason":"no such index [logs]"},"status":404}"#,
        );
        let error = Error::http(404, json_headers(), payload.clone());
        assert!(error.is_client_response(), "{error:?}");
        assert!(!error.is_server_response(), "{error:?}");
        assert!(error.source().is_none(), "{error:?}");
        assert_eq!(error.http_status_code(), Some(404));
        assert_eq!(error.http_headers(), Some(&json_headers()));
        assert_eq!(error.http_payload(), Some(&payload));
        assert_eq!(error.error_type(), Some("index_not_found_exception"));
        assert_eq!(error.error_reason(), Some("no such index [logs]"));
        assert_eq!(
            error.error_body().and_then(|b| b["status"].as_i64()),
            Some(404)
        );
        let fmt = error.to_string();
        assert!(fmt.contains("404"), "{fmt}");
        assert!(fmt.contains("index_not_found_exception"), "{fmt}");
        assert!(fmt.contains("no such index [logs]"), "{fmt}");
    }

    #[test]
    fn server_response() {
        let payload = bytes::Bytes::from_static(br#"{"error":"overloaded","status":503}"#);
        let error = Error::http(503, HeaderMap::new(), payload);
        assert!(error.is_server_response(), "{error:?}");
        assert!(!error.is_client_response(), "{error:?}");
        assert_eq!(error.http_status_code(), Some(503));
        assert_eq!(error.error_type(), None);
        assert_eq!(error.error_reason(), Some("overloaded"));
        assert!(error.to_string().contains("overloaded"), "{error}");
    }

    #[test_case(400, true, false; "400")]
    #[test_case(499, true, false; "499")]
    #[test_case(500, false, true; "500")]
    #[test_case(599, false, true; "599")]
    #[test_case(200, false, false; "200")]
    #[test_case(302, false, false; "302")]
    #[test_case(600, false, false; "600")]
    fn status_ranges(code: u16, client: bool, server: bool) {
        let payload = bytes::Bytes::from_static(b"{}");
        let error = Error::http(code, HeaderMap::new(), payload);
        assert_eq!(error.is_client_response(), client, "{error:?}");
        assert_eq!(error.is_server_response(), server, "{error:?}");
        assert_eq!(error.is_unexpected_response(), !client && !server, "{error:?}");
        assert_eq!(error.http_status_code(), Some(code));
        assert!(error.to_string().contains(&code.to_string()), "{error}");
    }

    #[test]
    fn response_not_json() {
        let payload = bytes::Bytes::from_static(b"bad gateway");
        let error = Error::http(502, HeaderMap::new(), payload);
        assert!(error.is_server_response(), "{error:?}");
        assert!(error.error_body().is_none(), "{error:?}");
        assert!(error.to_string().contains("bad gateway"), "{error}");
        assert!(error.to_string().contains("502"), "{error}");
    }

    #[test]
    fn response_binary() {
        let payload = bytes::Bytes::from_static(&[0xFF, 0xFF]);
        let error = Error::http(400, HeaderMap::new(), payload.clone());
        assert!(error.is_client_response(), "{error:?}");
        assert!(
            error.to_string().contains(&format!("{payload:?}")),
            "{error}"
        );
    }
}
