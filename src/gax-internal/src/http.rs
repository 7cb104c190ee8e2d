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

use crate::api_header::{API_VERSION, API_VERSION_VALUE, CLIENT_META, ClientMeta};
use crate::options::ClientConfig;
use gax::Result;
use gax::client_builder::Error as BuilderError;
use gax::error::Error;
use gax::request::Request;
use gax::response::Response;
use http::header::{AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// The default transport, based on `reqwest`.
///
/// The transport holds one or more nodes (base URLs). Each request starts at
/// the next node in round-robin order. If a node refuses the connection the
/// transport tries the following node, until all the nodes have been tried.
/// Any other error, including a timeout, is returned immediately.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    inner: reqwest::Client,
    nodes: Arc<[String]>,
    next: Arc<AtomicUsize>,
}

impl ReqwestTransport {
    pub async fn new(config: ClientConfig, meta: &ClientMeta) -> gax::client_builder::Result<Self> {
        let nodes = crate::host::from_endpoints(&crate::options::endpoints(&config))?;
        let headers = Self::default_headers(&config, meta)?;
        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let inner = builder.build().map_err(BuilderError::transport)?;
        Ok(Self {
            inner,
            nodes: nodes.into(),
            next: Arc::new(AtomicUsize::new(0)),
        })
    }

    /// The configured nodes, in round-robin order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(String::as_str)
    }

    fn default_headers(
        config: &ClientConfig,
        meta: &ClientMeta,
    ) -> gax::client_builder::Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        if let Some(key) = crate::options::api_key(config) {
            let mut value = HeaderValue::from_str(&format!("ApiKey {key}"))
                .map_err(BuilderError::config)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&meta.user_agent()).map_err(BuilderError::config)?,
        );
        headers.insert(
            CLIENT_META,
            HeaderValue::from_str(&meta.header_value()).map_err(BuilderError::config)?,
        );
        headers.insert(API_VERSION, HeaderValue::from_static(API_VERSION_VALUE));
        Ok(headers)
    }

    fn builder(&self, node: &str, parts: &gax::request::Parts) -> reqwest::RequestBuilder {
        let url = match parts.query.as_str() {
            "" => format!("{node}{}", parts.path),
            q => format!("{node}{}?{q}", parts.path),
        };
        let mut builder = self
            .inner
            .request(parts.verb.method(), url)
            .headers(parts.headers.clone());
        if let Some(timeout) = parts.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(body) = &parts.body {
            builder = builder.body(body.clone());
        }
        builder
    }

    async fn send_request(&self, request: Request) -> Result<Response> {
        let is_head = request.verb() == gax::operation::Verb::Head;
        let parts = request.into_parts();
        let count = self.nodes.len();
        let start = self.next.fetch_add(1, Ordering::Relaxed) % count;
        let mut last_error = None;
        for offset in 0..count {
            let node = &self.nodes[(start + offset) % count];
            match self.builder(node, &parts).send().await {
                Ok(response) => return to_response(response, is_head).await,
                Err(e) if e.is_connect() => {
                    tracing::warn!(
                        node = node.as_str(),
                        operation = parts.operation,
                        "cannot connect to node, trying the next node: {e}"
                    );
                    last_error = Some(e);
                }
                Err(e) => return Err(map_send_error(e)),
            }
        }
        Err(match last_error {
            Some(e) => Error::no_node_available(e),
            None => Error::no_node_available("no nodes configured"),
        })
    }
}

impl gax::transport::Transport for ReqwestTransport {
    async fn send(&self, request: Request) -> Result<Response> {
        self.send_request(request).await
    }
}

fn map_send_error(err: reqwest::Error) -> Error {
    match err {
        e if e.is_timeout() => Error::timeout(e),
        e => Error::io(e),
    }
}

/// Converts a reply into a [Response], or an error for 4xx and 5xx replies.
///
/// The reply to a `HEAD` request has no body, a 404 in this case means the
/// resource does not exist, and it is returned as a response.
pub async fn to_response(response: reqwest::Response, is_head: bool) -> Result<Response> {
    let status = response.status();
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();
    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();
    let not_found_head = is_head && status == http::StatusCode::NOT_FOUND;
    if (status.is_client_error() || status.is_server_error()) && !not_found_head {
        return Err(Error::http(status.as_u16(), parts.headers, body));
    }
    Ok(Response::new(status, parts.headers, body))
}
