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

//! Operations on long-running tasks.

use gax::dispatch::Dispatcher;
use gax::operation::{Operation, PathVariant};

pub static GET: Operation = Operation::new("tasks.get", &[PathVariant::new("/_tasks/{task_id}")])
    .with_required(&["task_id"])
    .with_query(&["timeout", "wait_for_completion"]);

/// All the operations in this namespace, sorted by name.
pub static ALL: &[&Operation] = &[&GET];

/// The `tasks` namespace client.
///
/// # Example
/// ```
/// # use elasticsearch_serverless::Client;
/// # async fn sample(client: &Client) -> anyhow::Result<()> {
/// let response = client
///     .reindex()
///     .with_param("wait_for_completion", false)
///     .with_body(serde_json::json!({"source": {"index": "old"}, "dest": {"index": "new"}}))
///     .send()
///     .await?;
/// let task_id = response.json()?["task"].as_str().unwrap_or_default().to_string();
/// let task = client.tasks().get().with_param("task_id", task_id).send().await?;
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct Tasks {
    dispatcher: Dispatcher,
}

impl Tasks {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    operations! {
        /// Returns information about a task.
        get => GET;
    }
}
