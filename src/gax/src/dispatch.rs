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

//! Sends the requests built from operation descriptors.
//!
//! The [Dispatcher] is the only component that talks to the transport. It
//! builds the request (running all the validation first), and then hands it
//! to the transport, returning the transport result unchanged. There are no
//! retries and no backoff at this level.

use crate::Result;
use crate::operation::Operation;
use crate::options::RequestOptions;
use crate::params::Params;
use crate::request::{Body, Request};
use crate::response::Response;
use crate::transport::{Transport, dynamic};
use std::sync::Arc;
use tracing::Instrument;

const DB_SYSTEM: &str = "db.system";
const DB_OPERATION_NAME: &str = "db.operation.name";
const HTTP_REQUEST_METHOD: &str = "http.request.method";
const HTTP_RESPONSE_STATUS_CODE: &str = "http.response.status_code";
const URL_PATH: &str = "url.path";

/// The value of the `db.system` span attribute.
pub const DB_SYSTEM_ELASTICSEARCH: &str = "elasticsearch";

/// Builds and sends requests through a shared transport.
///
/// Cloning a dispatcher is cheap, all clones share the same transport.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    transport: Arc<dyn dynamic::Transport>,
    tracing: bool,
}

impl Dispatcher {
    pub fn new<T: Transport + 'static>(transport: T) -> Self {
        Self::from_dynamic(Arc::new(transport))
    }

    /// Creates a dispatcher from an already shared transport.
    pub fn from_dynamic(transport: Arc<dyn dynamic::Transport>) -> Self {
        Self {
            transport,
            tracing: false,
        }
    }

    /// Enables (or disables) a tracing span around each dispatch.
    pub fn with_tracing(mut self, v: bool) -> Self {
        self.tracing = v;
        self
    }

    pub fn tracing_enabled(&self) -> bool {
        self.tracing
    }

    /// Builds the request for `operation` and sends it.
    ///
    /// Nothing is sent if the request cannot be built, for example, when a
    /// required option is missing.
    pub async fn execute(
        &self,
        operation: &Operation,
        params: &Params,
        body: Option<Body>,
        options: &RequestOptions,
    ) -> Result<Response> {
        let request = operation.build(params, body, options)?;
        self.dispatch(request).await
    }

    /// Sends an already built request.
    pub async fn dispatch(&self, request: Request) -> Result<Response> {
        tracing::debug!(
            operation = request.operation(),
            method = request.verb().as_str(),
            path = request.path(),
            "dispatching request"
        );
        if !self.tracing {
            return self.transport.send(request).await;
        }
        let span = tracing::info_span!(
            "elasticsearch_request",
            { DB_SYSTEM } = DB_SYSTEM_ELASTICSEARCH,
            { DB_OPERATION_NAME } = request.operation(),
            { HTTP_REQUEST_METHOD } = request.verb().as_str(),
            { URL_PATH } = request.path(),
            { HTTP_RESPONSE_STATUS_CODE } = tracing::field::Empty,
        );
        let result = self
            .transport
            .send(request)
            .instrument(span.clone())
            .await;
        let status = match &result {
            Ok(r) => Some(r.status().as_u16()),
            Err(e) => e.http_status_code(),
        };
        if let Some(code) = status {
            span.record(HTTP_RESPONSE_STATUS_CODE, code);
        }
        result
    }

    /// Builds the request for `operation` and sends it in a background task.
    ///
    /// The request is built before this function returns, the validation
    /// errors are reported through the returned handle without sending
    /// anything. Must be called from within a Tokio runtime.
    pub fn spawn(
        &self,
        operation: &Operation,
        params: &Params,
        body: Option<Body>,
        options: &RequestOptions,
    ) -> tokio::task::JoinHandle<Result<Response>> {
        let request = operation.build(params, body, options);
        let dispatcher = self.clone();
        tokio::spawn(async move {
            match request {
                Ok(r) => dispatcher.dispatch(r).await,
                Err(e) => Err(e),
            }
        })
    }
}
