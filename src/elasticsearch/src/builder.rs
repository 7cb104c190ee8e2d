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

//! The request builder shared by all the operations.

use gax::Result;
use gax::dispatch::Dispatcher;
use gax::operation::Operation;
use gax::options::RequestOptions;
use gax::params::Params;
use gax::request::{Body, Request};
use gax::response::Response;
use gax::value::Value;
use http::{HeaderName, HeaderValue};
use std::time::Duration;

/// The request builder for all the operations.
///
/// Each operation accessor on [Client][crate::Client] (or on a namespace)
/// returns one of these, bound to the operation descriptor. The builder
/// collects the options and the body, nothing is validated or sent until
/// [send()][RequestBuilder::send] (or [spawn()][RequestBuilder::spawn]).
///
/// # Example
/// ```
/// # use elasticsearch_serverless::Client;
/// # async fn sample(client: &Client) -> anyhow::Result<()> {
/// let response = client
///     .get()
///     .with_param("index", "products")
///     .with_param("id", "1")
///     .with_param("_source_includes", ["title", "price"])
///     .send()
///     .await?;
/// println!("title = {}", response.json()?["_source"]["title"]);
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct RequestBuilder {
    dispatcher: Dispatcher,
    operation: &'static Operation,
    params: Params,
    body: Option<Body>,
    options: RequestOptions,
}

impl RequestBuilder {
    pub(crate) fn new(dispatcher: Dispatcher, operation: &'static Operation) -> Self {
        Self {
            dispatcher,
            operation,
            params: Params::new(),
            body: None,
            options: RequestOptions::default(),
        }
    }

    /// The descriptor for this operation.
    pub fn operation(&self) -> &'static Operation {
        self.operation
    }

    /// The options set so far.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Sets an option.
    ///
    /// Path arguments, like `index` or `id`, and query parameters are both
    /// options. Setting an option again replaces the previous value. Options
    /// not recognized by the operation are ignored.
    pub fn with_param<K, V>(mut self, name: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.params.insert(name, value);
        self
    }

    /// Sets multiple options.
    ///
    /// ```
    /// # use elasticsearch_serverless::{Client, Params};
    /// # async fn sample(client: &Client) -> anyhow::Result<()> {
    /// let params = Params::new().with("index", "logs").with("size", 10);
    /// let response = client.search().with_params(params).send().await?;
    /// # Ok(()) }
    /// ```
    pub fn with_params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        params
            .into_iter()
            .for_each(|(k, v)| self.params.insert(k, v));
        self
    }

    /// Sets the request body.
    ///
    /// Operations that do not take a body ignore it. An empty body (a JSON
    /// `null`, no NDJSON lines, or no bytes) is the same as no body.
    pub fn with_body<B: Into<Body>>(mut self, body: B) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the request body to the JSON representation of `value`.
    ///
    /// # Example
    /// ```
    /// # use elasticsearch_serverless::Client;
    /// # async fn sample(client: &Client) -> anyhow::Result<()> {
    /// #[derive(serde::Serialize)]
    /// struct Product { title: String, price: f64 }
    /// let product = Product { title: "Rust in Action".into(), price: 39.99 };
    /// let response = client
    ///     .index()
    ///     .with_param("index", "products")
    ///     .with_json(&product)?
    ///     .send()
    ///     .await?;
    /// # Ok(()) }
    /// ```
    pub fn with_json<T: serde::Serialize + ?Sized>(self, value: &T) -> Result<Self> {
        Ok(self.with_body(Body::json(value)?))
    }

    /// Sets the request body to newline-delimited JSON, one line per item.
    ///
    /// Used by `bulk`, `msearch`, and `msearch_template`.
    pub fn with_ndjson<I, T>(self, lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: serde::Serialize,
    {
        Ok(self.with_body(Body::ndjson(lines)?))
    }

    /// Adds a header to the request.
    ///
    /// These headers are applied after the `Accept` and `Content-Type`
    /// headers of the operation, and replace them if the names match.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.options.set_header(name, value);
        self
    }

    /// Sets the transport timeout for this request.
    ///
    /// This is enforced by the client. Use the `timeout` option, in the
    /// operations that accept it, for the server-side timeout.
    pub fn with_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.options.set_timeout(v);
        self
    }

    /// Replaces all the per-request options.
    pub fn with_request_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    /// Builds the request without sending it.
    ///
    /// Returns an error if a required option, or a required body, is missing.
    pub fn build(&self) -> Result<Request> {
        self.operation
            .build(&self.params, self.body.clone(), &self.options)
    }

    /// Sends the request and waits for the response.
    pub async fn send(self) -> Result<Response> {
        self.dispatcher
            .execute(self.operation, &self.params, self.body, &self.options)
            .await
    }

    /// Sends the request in a background task.
    ///
    /// Returns immediately. The request is validated before this function
    /// returns, but any errors are reported through the handle. Must be called
    /// from within a Tokio runtime.
    ///
    /// # Example
    /// ```
    /// # use elasticsearch_serverless::Client;
    /// # async fn sample(client: &Client) -> anyhow::Result<()> {
    /// let handles: Vec<_> = ["logs", "metrics"]
    ///     .into_iter()
    ///     .map(|index| client.count().with_param("index", index).spawn())
    ///     .collect();
    /// for h in handles {
    ///     let response = h.await??;
    ///     println!("count = {}", response.json()?["count"]);
    /// }
    /// # Ok(()) }
    /// ```
    pub fn spawn(self) -> tokio::task::JoinHandle<Result<Response>> {
        self.dispatcher
            .spawn(self.operation, &self.params, self.body, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::operation::{BodyRule, PathVariant, Verb, VerbRule};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[derive(Debug)]
    struct Unreachable;
    impl gax::transport::Transport for Unreachable {
        async fn send(&self, _request: Request) -> Result<Response> {
            unreachable!("these tests never send requests")
        }
    }

    static SEARCH: Operation = Operation::new(
        "search",
        &[
            PathVariant::new("/{index}/_search"),
            PathVariant::new("/_search"),
        ],
    )
    .with_verb_rule(VerbRule::BodyConditional)
    .with_query(&["q", "size"])
    .with_body(BodyRule::Optional);

    fn builder() -> RequestBuilder {
        RequestBuilder::new(Dispatcher::new(Unreachable), &SEARCH)
    }

    #[test]
    fn params() -> anyhow::Result<()> {
        let builder = builder()
            .with_param("index", "logs")
            .with_params([("q", "level:error"), ("unknown", "ignored")])
            .with_param("size", 10)
            .with_param("q", "level:warn");
        assert_eq!(builder.params().len(), 4);
        let request = builder.build()?;
        assert_eq!(request.verb(), Verb::Get);
        assert_eq!(request.path_and_query(), "/logs/_search?q=level%3Awarn&size=10");
        Ok(())
    }

    #[test]
    fn body() -> anyhow::Result<()> {
        let builder = builder().with_json(&json!({"query": {"match_all": {}}}))?;
        let request = builder.build()?;
        assert_eq!(request.verb(), Verb::Post);
        assert_eq!(request.path(), "/_search");
        assert_eq!(
            request.body().map(|b| b.as_ref()),
            Some(br#"{"query":{"match_all":{}}}"#.as_slice())
        );

        let request = builder.with_body(json!(null)).build()?;
        assert_eq!(request.verb(), Verb::Get);
        assert_eq!(request.body(), None);
        Ok(())
    }

    #[test]
    fn headers_and_timeout() -> anyhow::Result<()> {
        let request = builder()
            .with_header(
                HeaderName::from_static("x-opaque-id"),
                HeaderValue::from_static("abc"),
            )
            .with_timeout(Duration::from_secs(5))
            .build()?;
        assert_eq!(
            request.headers().get("x-opaque-id"),
            Some(&HeaderValue::from_static("abc"))
        );
        assert_eq!(request.timeout(), Some(Duration::from_secs(5)));

        let mut options = RequestOptions::default();
        options.set_timeout(Duration::from_secs(1));
        let request = builder().with_request_options(options).build()?;
        assert_eq!(request.timeout(), Some(Duration::from_secs(1)));
        Ok(())
    }

    #[test]
    fn operation() {
        let builder = builder();
        assert!(std::ptr::eq(builder.operation(), &SEARCH));
        assert!(builder.params().is_empty());
    }
}
