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

//! Operations returning compact, human-readable, tabular information.
//!
//! These operations are intended for consoles and command-line tools. Set the
//! `format` option to `json` to get a JSON document instead of text.

use gax::dispatch::Dispatcher;
use gax::operation::{Operation, PathVariant};

/// The `Accept` header of the `cat` operations.
pub const ACCEPT: &str = "text/plain,application/json";

const CAT_QUERY: &[&str] = &["format", "h", "help", "s", "v"];

pub static ALIASES: Operation = Operation::new(
    "cat.aliases",
    &[
        PathVariant::new("/_cat/aliases/{name}"),
        PathVariant::new("/_cat/aliases"),
    ],
)
.with_query(&["expand_wildcards", "format", "h", "help", "s", "v"])
.with_accept(ACCEPT);

pub static COUNT: Operation = Operation::new(
    "cat.count",
    &[
        PathVariant::new("/_cat/count/{index}"),
        PathVariant::new("/_cat/count"),
    ],
)
.with_query(CAT_QUERY)
.with_accept(ACCEPT);

pub static INDICES: Operation = Operation::new(
    "cat.indices",
    &[
        PathVariant::new("/_cat/indices/{index}"),
        PathVariant::new("/_cat/indices"),
    ],
)
.with_query(&[
    "bytes",
    "expand_wildcards",
    "health",
    "include_unloaded_segments",
    "pri",
    "time",
    "master_timeout",
    "format",
    "h",
    "help",
    "s",
    "v",
])
.with_accept(ACCEPT);

/// All the operations in this namespace, sorted by name.
pub static ALL: &[&Operation] = &[
    &ALIASES,
    &COUNT,
    &INDICES,
];

/// The `cat` namespace client.
///
/// # Example
/// ```
/// # use elasticsearch_serverless::Client;
/// # async fn sample(client: &Client) -> anyhow::Result<()> {
/// let response = client
///     .cat()
///     .indices()
///     .with_param("v", true)
///     .with_param("h", ["index", "docs.count"])
///     .send()
///     .await?;
/// println!("{}", response.text()?);
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct Cat {
    dispatcher: Dispatcher,
}

impl Cat {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    operations! {
        /// Lists the aliases, and their filters and routing.
        aliases => ALIASES;
        /// Returns the document count of some (or all) the indices.
        count => COUNT;
        /// Lists the indices and their statistics.
        indices => INDICES;
    }
}
