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

//! Contains the Elasticsearch Serverless client and related types.

use crate::builder::RequestBuilder;
use crate::namespaces::{
    async_search::AsyncSearch, cat::Cat, cluster::Cluster, esql::Esql, indices::Indices,
    ingest::Ingest, license::License, sql::Sql, tasks::Tasks,
};
use crate::operations;
use gax::dispatch::Dispatcher;
use gax::namespace::NamespaceRegistry;
use gax::operation::Operation;
use gax::transport::Transport;
use std::sync::Arc;

/// Implements a client for Elasticsearch Serverless.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use elasticsearch_serverless::Client;
/// let client = Client::builder()
///     .with_endpoint("https://my-project.es.us-east-1.aws.elastic.cloud")
///     .build()
///     .await?;
/// // use `client` to make requests to Elasticsearch.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Configuration
///
/// To configure `Client` use the `with_*` methods in the type returned
/// by [builder()][Client::builder]. Settings made in code take precedence over
/// the environment:
///
/// * [with_endpoint()]: the project URL. Defaults to the `ELASTICSEARCH_URL`
///   environment variable, which may contain a comma-separated list of
///   nodes.
/// * [with_api_key()]: the API key. Defaults to the `ELASTIC_API_KEY`
///   environment variable.
/// * [with_tracing()]: wraps each request in a tracing span. Also enabled by
///   setting `ELASTICSEARCH_SERVERLESS_LOGGING=true`.
///
/// # Pooling and Cloning
///
/// `Client` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `Client` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally. Clones share the connection pool and the namespace clients.
///
/// # Namespaces
///
/// Related operations are grouped in namespaces, e.g. [indices()][Client::indices]
/// or [cat()][Client::cat]. Each namespace client is created on first use and
/// reused afterwards.
///
/// [with_endpoint()]: ClientBuilder::with_endpoint
/// [with_api_key()]: ClientBuilder::with_api_key
/// [with_tracing()]: ClientBuilder::with_tracing
#[derive(Clone, Debug)]
pub struct Client {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    dispatcher: Dispatcher,
    namespaces: NamespaceRegistry,
}

impl Client {
    /// Returns a builder for [Client].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use elasticsearch_serverless::Client;
    /// let client = Client::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> ClientBuilder {
        gax::client_builder::internal::new_builder(client_builder::Factory)
    }

    /// Creates a new client from the provided transport.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_transport<T>(transport: T) -> Self
    where
        T: Transport + 'static,
    {
        Self::from_dispatcher(Dispatcher::new(transport))
    }

    fn from_dispatcher(dispatcher: Dispatcher) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                dispatcher,
                namespaces: NamespaceRegistry::default(),
            }),
        }
    }

    pub(crate) async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let tracing = gaxi::options::tracing_enabled(&config);
        let transport =
            gaxi::http::ReqwestTransport::new(config, &crate::info::CLIENT_META).await?;
        tracing::debug!(
            nodes = ?transport.nodes().collect::<Vec<_>>(),
            tracing,
            "created {} client",
            crate::info::NAME
        );
        Ok(Self::from_dispatcher(
            Dispatcher::new(transport).with_tracing(tracing),
        ))
    }

    pub(crate) fn dispatcher(&self) -> &Dispatcher {
        &self.inner.dispatcher
    }

    /// Returns a request builder for any operation descriptor.
    ///
    /// Use this to call operations not included in this crate.
    ///
    /// # Example
    /// ```
    /// # use elasticsearch_serverless::Client;
    /// use elasticsearch_serverless::operation::{Operation, PathVariant};
    /// static SECURITY_AUTHENTICATE: Operation =
    ///     Operation::new("security.authenticate", &[PathVariant::new("/_security/_authenticate")]);
    /// # async fn sample(client: &Client) -> anyhow::Result<()> {
    /// let response = client.request(&SECURITY_AUTHENTICATE).send().await?;
    /// println!("user = {}", response.json()?["username"]);
    /// # Ok(()) }
    /// ```
    pub fn request(&self, operation: &'static Operation) -> RequestBuilder {
        RequestBuilder::new(self.dispatcher().clone(), operation)
    }

    operations! {
        /// Performs multiple indexing or delete operations in a single request.
        ///
        /// The body is newline-delimited JSON, see [with_ndjson()][RequestBuilder::with_ndjson].
        bulk => operations::BULK;
        /// Clears the search context and results for a scrolling search.
        clear_scroll => operations::CLEAR_SCROLL;
        /// Closes a point-in-time.
        close_point_in_time => operations::CLOSE_POINT_IN_TIME;
        /// Returns the number of matching documents.
        count => operations::COUNT;
        /// Indexes a new document, fails if the id already exists.
        ///
        /// Requires the `index` and `id` options, and a body.
        create => operations::CREATE;
        /// Removes a document.
        delete => operations::DELETE;
        /// Deletes the documents matching the provided query.
        delete_by_query => operations::DELETE_BY_QUERY;
        /// Deletes a stored script or search template.
        delete_script => operations::DELETE_SCRIPT;
        /// Checks if a document exists.
        ///
        /// Use [Response::as_bool][gax::response::Response::as_bool] on the
        /// result.
        exists => operations::EXISTS;
        /// Checks if a document source exists.
        exists_source => operations::EXISTS_SOURCE;
        /// Explains why a document matches (or does not match) a query.
        explain => operations::EXPLAIN;
        /// Returns the capabilities of fields across multiple indices.
        field_caps => operations::FIELD_CAPS;
        /// Returns a document.
        get => operations::GET;
        /// Returns a stored script or search template.
        get_script => operations::GET_SCRIPT;
        /// Returns the source of a document.
        get_source => operations::GET_SOURCE;
        /// Creates or updates a document.
        ///
        /// Uses `PUT` when the `id` option is set, and `POST` (with a
        /// generated id) otherwise.
        index => operations::INDEX;
        /// Returns basic information about the project.
        info => operations::INFO;
        /// Returns multiple documents.
        mget => operations::MGET;
        /// Runs multiple searches with a single request.
        msearch => operations::MSEARCH;
        /// Runs multiple templated searches with a single request.
        msearch_template => operations::MSEARCH_TEMPLATE;
        /// Returns information and statistics about terms in multiple documents.
        mtermvectors => operations::MTERMVECTORS;
        /// Opens a point-in-time for use in searches.
        ///
        /// Requires the `index` and `keep_alive` options.
        open_point_in_time => operations::OPEN_POINT_IN_TIME;
        /// Returns whether the project is reachable.
        ping => operations::PING;
        /// Creates or updates a stored script or search template.
        put_script => operations::PUT_SCRIPT;
        /// Evaluates the quality of ranked search results.
        rank_eval => operations::RANK_EVAL;
        /// Copies documents from a source to a destination.
        reindex => operations::REINDEX;
        /// Renders a search template as a search request body.
        render_search_template => operations::RENDER_SEARCH_TEMPLATE;
        /// Runs a painless script.
        scripts_painless_execute => operations::SCRIPTS_PAINLESS_EXECUTE;
        /// Returns the next batch of results for a scrolling search.
        scroll => operations::SCROLL;
        /// Returns the results matching a query.
        search => operations::SEARCH;
        /// Searches a vector tile for geospatial values.
        ///
        /// The response body is a binary Mapbox vector tile, use
        /// [Response::body][gax::response::Response::body].
        search_mvt => operations::SEARCH_MVT;
        /// Runs a search with a search template.
        search_template => operations::SEARCH_TEMPLATE;
        /// Returns terms in an index that match a prefix.
        terms_enum => operations::TERMS_ENUM;
        /// Returns information and statistics about terms in a document.
        termvectors => operations::TERMVECTORS;
        /// Updates a document with a script or partial document.
        update => operations::UPDATE;
        /// Updates the documents matching the provided query.
        update_by_query => operations::UPDATE_BY_QUERY;
    }

    /// The `async_search` namespace.
    pub fn async_search(&self) -> Arc<AsyncSearch> {
        self.namespace("async_search", AsyncSearch::new)
    }

    /// The `cat` namespace.
    pub fn cat(&self) -> Arc<Cat> {
        self.namespace("cat", Cat::new)
    }

    /// The `cluster` namespace.
    pub fn cluster(&self) -> Arc<Cluster> {
        self.namespace("cluster", Cluster::new)
    }

    /// The `esql` namespace.
    pub fn esql(&self) -> Arc<Esql> {
        self.namespace("esql", Esql::new)
    }

    /// The `indices` namespace.
    pub fn indices(&self) -> Arc<Indices> {
        self.namespace("indices", Indices::new)
    }

    /// The `ingest` namespace.
    pub fn ingest(&self) -> Arc<Ingest> {
        self.namespace("ingest", Ingest::new)
    }

    /// The `license` namespace.
    pub fn license(&self) -> Arc<License> {
        self.namespace("license", License::new)
    }

    /// The `sql` namespace.
    pub fn sql(&self) -> Arc<Sql> {
        self.namespace("sql", Sql::new)
    }

    /// The `tasks` namespace.
    pub fn tasks(&self) -> Arc<Tasks> {
        self.namespace("tasks", Tasks::new)
    }

    fn namespace<N, F>(&self, name: &'static str, factory: F) -> Arc<N>
    where
        N: std::any::Any + Send + Sync,
        F: FnOnce(Dispatcher) -> N,
    {
        let dispatcher = self.dispatcher().clone();
        self.inner
            .namespaces
            .get(name, move || factory(dispatcher))
    }
}

/// A builder for [Client].
///
/// ```
/// # tokio_test::block_on(async {
/// # use elasticsearch_serverless::*;
/// # use client::ClientBuilder;
/// # use client::Client;
/// let builder: ClientBuilder = Client::builder();
/// let client = builder
///     .with_endpoint("https://my-project.es.us-east-1.aws.elastic.cloud")
///     .build()
///     .await?;
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
pub type ClientBuilder = gax::client_builder::ClientBuilder<client_builder::Factory>;

pub(crate) mod client_builder {
    use super::Client;
    pub struct Factory;
    impl gax::client_builder::internal::ClientFactory for Factory {
        type Client = Client;
        async fn build(
            self,
            config: gaxi::options::ClientConfig,
        ) -> gax::client_builder::Result<Self::Client> {
            Self::Client::new(config).await
        }
    }
}
