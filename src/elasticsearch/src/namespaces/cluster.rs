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

//! Operations for cluster information and component templates.

use gax::dispatch::Dispatcher;
use gax::operation::{BodyRule, Operation, PathVariant, Verb};

pub static INFO: Operation = Operation::new("cluster.info", &[PathVariant::new("/_info/{target}")])
    .with_required(&["target"]);

pub static GET_COMPONENT_TEMPLATE: Operation = Operation::new(
    "cluster.get_component_template",
    &[
        PathVariant::new("/_component_template/{name}"),
        PathVariant::new("/_component_template"),
    ],
)
.with_query(&[
    "flat_settings",
    "include_defaults",
    "local",
    "master_timeout",
]);

pub static PUT_COMPONENT_TEMPLATE: Operation = Operation::new(
    "cluster.put_component_template",
    &[PathVariant::new("/_component_template/{name}")],
)
.with_verb(Verb::Put)
.with_required(&["name"])
.with_query(&["create", "master_timeout"])
.with_body(BodyRule::Required);

pub static DELETE_COMPONENT_TEMPLATE: Operation = Operation::new(
    "cluster.delete_component_template",
    &[PathVariant::new("/_component_template/{name}")],
)
.with_verb(Verb::Delete)
.with_required(&["name"])
.with_query(&["master_timeout", "timeout"]);

/// All the operations in this namespace, sorted by name.
pub static ALL: &[&Operation] = &[
    &DELETE_COMPONENT_TEMPLATE,
    &GET_COMPONENT_TEMPLATE,
    &INFO,
    &PUT_COMPONENT_TEMPLATE,
];

/// The `cluster` namespace client.
#[derive(Clone, Debug)]
pub struct Cluster {
    dispatcher: Dispatcher,
}

impl Cluster {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    operations! {
        /// Returns cluster information.
        ///
        /// The `target` option selects the sections, e.g. `_all` or `http,ingest`.
        info => INFO;
        /// Returns one, or all, the component templates.
        get_component_template => GET_COMPONENT_TEMPLATE;
        /// Creates or updates a component template.
        put_component_template => PUT_COMPONENT_TEMPLATE;
        /// Deletes component templates.
        delete_component_template => DELETE_COMPONENT_TEMPLATE;
    }
}
