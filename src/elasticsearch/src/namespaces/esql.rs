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

//! Operations for ES|QL queries.

use gax::dispatch::Dispatcher;
use gax::operation::{BodyRule, Operation, PathVariant, Verb};

pub static QUERY: Operation = Operation::new("esql.query", &[PathVariant::new("/_query")])
    .with_verb(Verb::Post)
    .with_query(&["format", "delimiter", "drop_null_columns"])
    .with_body(BodyRule::Required);

/// All the operations in this namespace, sorted by name.
pub static ALL: &[&Operation] = &[&QUERY];

/// The `esql` namespace client.
///
/// # Example
/// ```
/// # use elasticsearch_serverless::Client;
/// # async fn sample(client: &Client) -> anyhow::Result<()> {
/// let response = client
///     .esql()
///     .query()
///     .with_param("format", "txt")
///     .with_body(serde_json::json!({"query": "FROM logs | STATS count = COUNT(*) BY level"}))
///     .send()
///     .await?;
/// println!("{}", response.text()?);
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct Esql {
    dispatcher: Dispatcher,
}

impl Esql {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    operations! {
        /// Runs an ES|QL query.
        query => QUERY;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn query() -> anyhow::Result<()> {
        let namespace = Esql::new(crate::namespaces::tests::dispatcher());
        let request = namespace
            .query()
            .with_param("format", "csv")
            .with_param("delimiter", ";")
            .with_body(json!({"query": "FROM logs | LIMIT 10"}))
            .build()?;
        assert_eq!(request.verb(), Verb::Post);
        assert_eq!(request.path_and_query(), "/_query?format=csv&delimiter=%3B");

        let err = namespace.query().build().unwrap_err();
        assert_eq!(err.missing_parameter(), Some("body"));
        Ok(())
    }
}
