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

//! Operations to manage ingest pipelines.

use gax::dispatch::Dispatcher;
use gax::operation::{BodyRule, Operation, PathVariant, Verb, VerbRule};

pub static GET_PIPELINE: Operation = Operation::new(
    "ingest.get_pipeline",
    &[
        PathVariant::new("/_ingest/pipeline/{id}"),
        PathVariant::new("/_ingest/pipeline"),
    ],
)
.with_query(&["master_timeout", "summary"]);

pub static PUT_PIPELINE: Operation =
    Operation::new("ingest.put_pipeline", &[PathVariant::new("/_ingest/pipeline/{id}")])
        .with_verb(Verb::Put)
        .with_required(&["id"])
        .with_query(&["master_timeout", "timeout", "if_version"])
        .with_body(BodyRule::Required);

pub static DELETE_PIPELINE: Operation = Operation::new(
    "ingest.delete_pipeline",
    &[PathVariant::new("/_ingest/pipeline/{id}")],
)
.with_verb(Verb::Delete)
.with_required(&["id"])
.with_query(&["master_timeout", "timeout"]);

pub static SIMULATE: Operation = Operation::new(
    "ingest.simulate",
    &[
        PathVariant::new("/_ingest/pipeline/{id}/_simulate"),
        PathVariant::new("/_ingest/pipeline/_simulate"),
    ],
)
.with_verb_rule(VerbRule::BodyConditional)
.with_query(&["verbose"])
.with_body(BodyRule::Required);

/// All the operations in this namespace, sorted by name.
pub static ALL: &[&Operation] = &[
    &DELETE_PIPELINE,
    &GET_PIPELINE,
    &PUT_PIPELINE,
    &SIMULATE,
];

/// The `ingest` namespace client.
///
/// # Example
/// ```
/// # use elasticsearch_serverless::Client;
/// # async fn sample(client: &Client) -> anyhow::Result<()> {
/// client
///     .ingest()
///     .put_pipeline()
///     .with_param("id", "lowercase-title")
///     .with_body(serde_json::json!({
///         "processors": [{"lowercase": {"field": "title"}}]
///     }))
///     .send()
///     .await?;
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct Ingest {
    dispatcher: Dispatcher,
}

impl Ingest {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    operations! {
        /// Returns one, or all, the ingest pipelines.
        get_pipeline => GET_PIPELINE;
        /// Creates or updates an ingest pipeline.
        put_pipeline => PUT_PIPELINE;
        /// Deletes an ingest pipeline.
        delete_pipeline => DELETE_PIPELINE;
        /// Runs an ingest pipeline against a set of documents.
        simulate => SIMULATE;
    }
}
