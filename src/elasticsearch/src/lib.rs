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

//! Elasticsearch Serverless Client for Rust.
//!
//! This crate contains a client for the REST API of Elasticsearch
//! Serverless. Each operation of the service is a method on [Client] (or on
//! one of its namespaces) returning a [RequestBuilder]. Set the options with
//! [with_param()][RequestBuilder::with_param], the body with
//! [with_body()][RequestBuilder::with_body], and then call
//! [send()][RequestBuilder::send].
//!
//! # Example
//! ```no_run
//! # tokio_test::block_on(async {
//! use elasticsearch_serverless::Client;
//! use serde_json::json;
//! let client = Client::builder()
//!     .with_endpoint("https://my-project.es.us-east-1.aws.elastic.cloud")
//!     .with_api_key("my-api-key")
//!     .build()
//!     .await?;
//! let response = client
//!     .search()
//!     .with_param("index", "products")
//!     .with_body(json!({"query": {"match": {"title": "rust"}}}))
//!     .send()
//!     .await?;
//! println!("{}", response.json()?["hits"]["total"]);
//! # anyhow::Ok(()) });
//! ```
//!
//! # Options
//!
//! Path arguments (`index`, `id`, ...) and query parameters share the same
//! set of options. Each operation only sends the query parameters it
//! recognizes, any other option is ignored. Options with list values are
//! sent as comma-separated lists:
//! ```
//! # use elasticsearch_serverless::Client;
//! # async fn sample(client: &Client) -> anyhow::Result<()> {
//! let request = client
//!     .count()
//!     .with_param("index", ["logs-2025", "logs-2026"])
//!     .with_param("q", "level:error")
//!     .build()?;
//! assert_eq!(request.path_and_query(), "/logs-2025%2Clogs-2026/_count?q=level%3Aerror");
//! # Ok(()) }
//! ```

/// Declares the accessors returning a [RequestBuilder] for each operation.
///
/// The type must have a `dispatcher()` method returning the shared
/// [Dispatcher][gax::dispatch::Dispatcher].
macro_rules! operations {
    ($( $(#[$attr:meta])* $name:ident => $descriptor:path; )*) => {
        $(
            $(#[$attr])*
            pub fn $name(&self) -> $crate::builder::RequestBuilder {
                $crate::builder::RequestBuilder::new(self.dispatcher().clone(), &$descriptor)
            }
        )*
    };
}

pub use gax::Result;
pub use gax::error::Error;

pub use gax::options::RequestOptions;
pub use gax::params::Params;
pub use gax::request::{Body, Request};
pub use gax::response::Response;
pub use gax::value::Value;

/// Define and inspect operation descriptors.
pub mod operation {
    pub use gax::operation::*;
}

/// The client transport.
pub mod transport {
    pub use gax::transport::Transport;
    pub use gaxi::http::ReqwestTransport;
}

pub mod client;
pub use client::{Client, ClientBuilder};

pub mod builder;
pub use builder::RequestBuilder;

/// The descriptors for the operations in the root namespace.
pub mod operations;

/// The namespace clients.
pub mod namespaces;

pub(crate) mod info {
    pub(crate) const NAME: &str = env!("CARGO_PKG_NAME");
    pub(crate) const VERSION: &str = env!("CARGO_PKG_VERSION");

    pub(crate) const CLIENT_META: gaxi::api_header::ClientMeta = gaxi::api_header::ClientMeta {
        name: NAME,
        version: VERSION,
    };
}
