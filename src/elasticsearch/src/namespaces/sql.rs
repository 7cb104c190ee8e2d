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

//! Operations for SQL queries.

use gax::dispatch::Dispatcher;
use gax::operation::{BodyRule, Operation, PathVariant, Verb, VerbRule};

pub static QUERY: Operation = Operation::new("sql.query", &[PathVariant::new("/_sql")])
    .with_verb(Verb::Post)
    .with_query(&["format"])
    .with_body(BodyRule::Required);

pub static CLEAR_CURSOR: Operation =
    Operation::new("sql.clear_cursor", &[PathVariant::new("/_sql/close")])
        .with_verb(Verb::Post)
        .with_body(BodyRule::Required);

pub static TRANSLATE: Operation =
    Operation::new("sql.translate", &[PathVariant::new("/_sql/translate")])
        .with_verb_rule(VerbRule::BodyConditional)
        .with_body(BodyRule::Required);

/// All the operations in this namespace, sorted by name.
pub static ALL: &[&Operation] = &[
    &CLEAR_CURSOR,
    &QUERY,
    &TRANSLATE,
];

/// The `sql` namespace client.
///
/// # Example
/// ```
/// # use elasticsearch_serverless::Client;
/// # async fn sample(client: &Client) -> anyhow::Result<()> {
/// let response = client
///     .sql()
///     .query()
///     .with_param("format", "json")
///     .with_body(serde_json::json!({"query": "SELECT title FROM products LIMIT 5", "fetch_size": 5}))
///     .send()
///     .await?;
/// if let Some(cursor) = response.json()?["cursor"].as_str() {
///     client
///         .sql()
///         .clear_cursor()
///         .with_body(serde_json::json!({"cursor": cursor}))
///         .send()
///         .await?;
/// }
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct Sql {
    dispatcher: Dispatcher,
}

impl Sql {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    operations! {
        /// Runs a SQL query.
        query => QUERY;
        /// Clears a SQL search cursor.
        clear_cursor => CLEAR_CURSOR;
        /// Translates a SQL query into a search request body.
        translate => TRANSLATE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn operations() -> anyhow::Result<()> {
        let namespace = Sql::new(crate::namespaces::tests::dispatcher());
        let body = || json!({"query": "SELECT 1"});

        let request = namespace
            .query()
            .with_param("format", "txt")
            .with_body(body())
            .build()?;
        assert_eq!(request.verb(), Verb::Post);
        assert_eq!(request.path_and_query(), "/_sql?format=txt");

        let request = namespace.translate().with_body(body()).build()?;
        assert_eq!(request.verb(), Verb::Post);
        assert_eq!(request.path(), "/_sql/translate");

        let request = namespace
            .clear_cursor()
            .with_body(json!({"cursor": "abc"}))
            .build()?;
        assert_eq!(request.path(), "/_sql/close");

        for builder in [namespace.query(), namespace.translate(), namespace.clear_cursor()] {
            let err = builder.build().unwrap_err();
            assert_eq!(err.missing_parameter(), Some("body"));
        }
        Ok(())
    }
}
