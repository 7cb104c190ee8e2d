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

//! Operations for asynchronous searches.
//!
//! An asynchronous search runs in the background. The `submit` operation
//! returns an id, use it to poll the results with `get` or `status`, and to
//! remove the search with `delete`.

use gax::dispatch::Dispatcher;
use gax::operation::{BodyRule, Operation, PathVariant, Verb};

pub static SUBMIT: Operation = Operation::new(
    "async_search.submit",
    &[
        PathVariant::new("/{index}/_async_search"),
        PathVariant::new("/_async_search"),
    ],
)
.with_verb(Verb::Post)
.with_query(&[
    "wait_for_completion_timeout",
    "keep_alive",
    "keep_on_completion",
    "allow_no_indices",
    "allow_partial_search_results",
    "analyzer",
    "analyze_wildcard",
    "batched_reduce_size",
    "ccs_minimize_roundtrips",
    "default_operator",
    "df",
    "docvalue_fields",
    "expand_wildcards",
    "explain",
    "ignore_throttled",
    "ignore_unavailable",
    "lenient",
    "max_concurrent_shard_requests",
    "preference",
    "request_cache",
    "routing",
    "search_type",
    "stats",
    "stored_fields",
    "suggest_field",
    "suggest_mode",
    "suggest_size",
    "suggest_text",
    "terminate_after",
    "timeout",
    "track_total_hits",
    "track_scores",
    "typed_keys",
    "rest_total_hits_as_int",
    "version",
    "_source",
    "_source_excludes",
    "_source_includes",
    "seq_no_primary_term",
    "q",
    "size",
    "from",
    "sort",
])
.with_body(BodyRule::Optional);

pub static GET: Operation =
    Operation::new("async_search.get", &[PathVariant::new("/_async_search/{id}")])
        .with_required(&["id"])
        .with_query(&["keep_alive", "typed_keys", "wait_for_completion_timeout"]);

pub static DELETE: Operation =
    Operation::new("async_search.delete", &[PathVariant::new("/_async_search/{id}")])
        .with_verb(Verb::Delete)
        .with_required(&["id"]);

pub static STATUS: Operation = Operation::new(
    "async_search.status",
    &[PathVariant::new("/_async_search/status/{id}")],
)
.with_required(&["id"])
.with_query(&["keep_alive"]);

/// All the operations in this namespace, sorted by name.
pub static ALL: &[&Operation] = &[
    &DELETE,
    &GET,
    &STATUS,
    &SUBMIT,
];

/// The `async_search` namespace client.
///
/// # Example
/// ```
/// # use elasticsearch_serverless::Client;
/// # async fn sample(client: &Client) -> anyhow::Result<()> {
/// let response = client
///     .async_search()
///     .submit()
///     .with_param("index", "logs")
///     .with_param("wait_for_completion_timeout", "2s")
///     .with_body(serde_json::json!({"query": {"match": {"level": "error"}}}))
///     .send()
///     .await?;
/// let id = response.json()?["id"].as_str().unwrap_or_default().to_string();
/// let status = client.async_search().status().with_param("id", id).send().await?;
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct AsyncSearch {
    dispatcher: Dispatcher,
}

impl AsyncSearch {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    operations! {
        /// Runs a search asynchronously.
        submit => SUBMIT;
        /// Returns the results of an asynchronous search.
        get => GET;
        /// Deletes an asynchronous search, cancelling it if it is still running.
        delete => DELETE;
        /// Returns the status of an asynchronous search, without the results.
        status => STATUS;
    }
}
