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

//! Operations to manage indices, their mappings, settings, and aliases.

use gax::dispatch::Dispatcher;
use gax::operation::{BodyRule, Operation, PathVariant, Verb, VerbRule};

const WILDCARDS: &[&str] = &["allow_no_indices", "expand_wildcards", "ignore_unavailable"];

pub static CREATE: Operation = Operation::new("indices.create", &[PathVariant::new("/{index}")])
    .with_verb(Verb::Put)
    .with_required(&["index"])
    .with_query(&["master_timeout", "timeout", "wait_for_active_shards"])
    .with_body(BodyRule::Optional);

pub static DELETE: Operation = Operation::new("indices.delete", &[PathVariant::new("/{index}")])
    .with_verb(Verb::Delete)
    .with_required(&["index"])
    .with_query(&[
        "allow_no_indices",
        "expand_wildcards",
        "ignore_unavailable",
        "master_timeout",
        "timeout",
    ]);

pub static EXISTS: Operation = Operation::new("indices.exists", &[PathVariant::new("/{index}")])
    .with_verb(Verb::Head)
    .with_required(&["index"])
    .with_query(&[
        "allow_no_indices",
        "expand_wildcards",
        "flat_settings",
        "ignore_unavailable",
        "include_defaults",
        "local",
    ]);

pub static GET: Operation = Operation::new("indices.get", &[PathVariant::new("/{index}")])
    .with_required(&["index"])
    .with_query(&[
        "allow_no_indices",
        "expand_wildcards",
        "flat_settings",
        "ignore_unavailable",
        "include_defaults",
        "local",
        "master_timeout",
        "features",
    ]);

pub static REFRESH: Operation = Operation::new(
    "indices.refresh",
    &[
        PathVariant::new("/{index}/_refresh"),
        PathVariant::new("/_refresh"),
    ],
)
.with_verb(Verb::Post)
.with_query(WILDCARDS);

pub static GET_MAPPING: Operation = Operation::new(
    "indices.get_mapping",
    &[
        PathVariant::new("/{index}/_mapping"),
        PathVariant::new("/_mapping"),
    ],
)
.with_query(&[
    "allow_no_indices",
    "expand_wildcards",
    "ignore_unavailable",
    "local",
    "master_timeout",
]);

pub static PUT_MAPPING: Operation =
    Operation::new("indices.put_mapping", &[PathVariant::new("/{index}/_mapping")])
        .with_verb(Verb::Put)
        .with_required(&["index"])
        .with_query(&[
            "allow_no_indices",
            "expand_wildcards",
            "ignore_unavailable",
            "master_timeout",
            "timeout",
            "write_index_only",
        ])
        .with_body(BodyRule::Required);

pub static GET_SETTINGS: Operation = Operation::new(
    "indices.get_settings",
    &[
        PathVariant::new("/{index}/_settings/{name}"),
        PathVariant::new("/{index}/_settings"),
        PathVariant::new("/_settings/{name}"),
        PathVariant::new("/_settings"),
    ],
)
.with_query(&[
    "allow_no_indices",
    "expand_wildcards",
    "flat_settings",
    "ignore_unavailable",
    "include_defaults",
    "local",
    "master_timeout",
]);

pub static PUT_SETTINGS: Operation = Operation::new(
    "indices.put_settings",
    &[
        PathVariant::new("/{index}/_settings"),
        PathVariant::new("/_settings"),
    ],
)
.with_verb(Verb::Put)
.with_query(&[
    "allow_no_indices",
    "expand_wildcards",
    "flat_settings",
    "ignore_unavailable",
    "master_timeout",
    "preserve_existing",
    "reopen",
    "timeout",
])
.with_body(BodyRule::Required);

pub static PUT_ALIAS: Operation =
    Operation::new("indices.put_alias", &[PathVariant::new("/{index}/_alias/{name}")])
        .with_verb(Verb::Put)
        .with_required(&["index", "name"])
        .with_query(&["master_timeout", "timeout"])
        .with_body(BodyRule::Optional);

pub static DELETE_ALIAS: Operation = Operation::new(
    "indices.delete_alias",
    &[PathVariant::new("/{index}/_alias/{name}")],
)
.with_verb(Verb::Delete)
.with_required(&["index", "name"])
.with_query(&["master_timeout", "timeout"]);

pub static GET_ALIAS: Operation = Operation::new(
    "indices.get_alias",
    &[
        PathVariant::new("/{index}/_alias/{name}"),
        PathVariant::new("/_alias/{name}"),
        PathVariant::new("/{index}/_alias"),
        PathVariant::new("/_alias"),
    ],
)
.with_query(&[
    "allow_no_indices",
    "expand_wildcards",
    "ignore_unavailable",
    "local",
]);

pub static ANALYZE: Operation = Operation::new(
    "indices.analyze",
    &[
        PathVariant::new("/{index}/_analyze"),
        PathVariant::new("/_analyze"),
    ],
)
.with_verb_rule(VerbRule::BodyConditional)
.with_body(BodyRule::Optional);

pub static RESOLVE_INDEX: Operation = Operation::new(
    "indices.resolve_index",
    &[PathVariant::new("/_resolve/index/{name}")],
)
.with_required(&["name"])
.with_query(WILDCARDS);

/// All the operations in this namespace, sorted by name.
pub static ALL: &[&Operation] = &[
    &ANALYZE,
    &CREATE,
    &DELETE,
    &DELETE_ALIAS,
    &EXISTS,
    &GET,
    &GET_ALIAS,
    &GET_MAPPING,
    &GET_SETTINGS,
    &PUT_ALIAS,
    &PUT_MAPPING,
    &PUT_SETTINGS,
    &REFRESH,
    &RESOLVE_INDEX,
];

/// The `indices` namespace client.
///
/// # Example
/// ```
/// # use elasticsearch_serverless::Client;
/// # async fn sample(client: &Client) -> anyhow::Result<()> {
/// let indices = client.indices();
/// let exists = indices.exists().with_param("index", "products").send().await?;
/// if !exists.as_bool() {
///     indices
///         .create()
///         .with_param("index", "products")
///         .with_body(serde_json::json!({
///             "mappings": {"properties": {"title": {"type": "text"}}}
///         }))
///         .send()
///         .await?;
/// }
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct Indices {
    dispatcher: Dispatcher,
}

impl Indices {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    operations! {
        /// Creates an index.
        create => CREATE;
        /// Deletes one or more indices.
        delete => DELETE;
        /// Checks if one or more indices exist.
        exists => EXISTS;
        /// Returns information about one or more indices.
        get => GET;
        /// Makes the recent operations on one or more indices available for search.
        refresh => REFRESH;
        /// Returns the mappings of one or more indices.
        get_mapping => GET_MAPPING;
        /// Adds fields to an existing mapping.
        put_mapping => PUT_MAPPING;
        /// Returns the settings of one or more indices.
        get_settings => GET_SETTINGS;
        /// Updates the dynamic settings of one or more indices.
        put_settings => PUT_SETTINGS;
        /// Creates or updates an alias.
        put_alias => PUT_ALIAS;
        /// Removes an alias.
        delete_alias => DELETE_ALIAS;
        /// Returns aliases.
        get_alias => GET_ALIAS;
        /// Runs the analysis process on a text and returns the tokens.
        analyze => ANALYZE;
        /// Resolves index names, aliases, and data streams.
        resolve_index => RESOLVE_INDEX;
    }
}
