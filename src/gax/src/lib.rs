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

//! Request dispatch helpers.
//!
//! This crate contains the types and functions shared by every operation in
//! the Elasticsearch Serverless Client for Rust. Each operation is described
//! by a static [Operation][operation::Operation] descriptor: its path
//! templates, the verb rule, the required options, and the whitelist of query
//! parameters. A single [Dispatcher][dispatch::Dispatcher] consumes these
//! descriptors, builds the request, and hands it to a
//! [Transport][transport::Transport].
//!
//! Most applications use the `elasticsearch-serverless` crate and only
//! interact with the types in this crate through it, typically [Result],
//! [error::Error], and [response::Response].

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions dispatching requests.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by the client.
pub mod error;

/// Normalizes option values into their wire representation.
pub mod value;

/// Ordered request options and the query parameter whitelist filter.
pub mod params;

/// Builds request paths from templates and percent-encodes segments.
pub mod path_parameter;

/// Builds the query string from the whitelisted options.
pub mod query_parameter;

/// Validates required options before any request is made.
pub mod validate;

/// Declarative descriptors for each operation.
pub mod operation;

/// Built requests and request bodies.
pub mod request;

pub mod response;

pub mod options;

/// The boundary with the HTTP transport.
pub mod transport;

pub mod dispatch;

pub mod namespace;

pub mod client_builder;
