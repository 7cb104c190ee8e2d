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

//! Provide types for client construction.
//!
//! Some applications need to construct clients with custom configuration, for
//! example, they may need to set the project endpoint or the API key in code
//! instead of the environment. The client uses a generic builder type to
//! provide such functionality. The types in this module implement the client
//! builder.
//!
//! Applications should not create builders directly, instead the client type
//! defines a `builder()` function to obtain the correct type of builder.
//!
//! ## Example: create a client with the default configuration.
//!
//! ```
//! # use elasticsearch_serverless_gax::client_builder::examples;
//! # use elasticsearch_serverless_gax::client_builder::Result;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder().build().await?;
//! # Result::<()>::Ok(()) });
//! ```
//!
//! ## Example: create a client for a project
//!
//! ```
//! # use elasticsearch_serverless_gax::client_builder::examples;
//! # use elasticsearch_serverless_gax::client_builder::Result;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder()
//!     .with_endpoint("https://my-project.es.us-east-1.aws.elastic.cloud")
//!     .with_api_key("my-api-key")
//!     .build().await?;
//! # Result::<()>::Ok(()) });
//! ```

use std::time::Duration;

/// The result type for this module.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
///
/// # Examples
/// ```no_run
/// # use elasticsearch_serverless_gax::client_builder::examples;
/// use elasticsearch_serverless_gax::client_builder::Error as Error;
/// use examples::Client; // Placeholder for examples
/// # tokio_test::block_on(async {
/// let client = match Client::builder().build().await {
///     Ok(c) => c,
///     Err(e) if e.is_configuration() => {
///         println!("set ELASTICSEARCH_URL, or call with_endpoint(): {e}");
///         return Err(e);
///     }
///     Err(e) => {
///         println!("error during client initialization {e}");
///         return Err(e);
///     }
/// };
/// # Ok::<(), Error>(()) });
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, the client configuration is invalid or incomplete.
    ///
    /// For example, no endpoint was configured, or an endpoint is not a valid
    /// `http` or `https` URL.
    pub fn is_configuration(&self) -> bool {
        matches!(&self.0, ErrorKind::Configuration(_))
    }

    /// If true, the client could not initialize the transport client.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn config<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Configuration(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("invalid client configuration: {0}")]
    Configuration(#[source] BoxError),
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A generic builder for clients.
///
/// Applications obtain a builder with the correct generic types using the
/// `builder()` method on the client:
/// ```
/// # use elasticsearch_serverless_gax::client_builder::examples;
/// # use elasticsearch_serverless_gax::client_builder::Result;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for examples
/// let builder = Client::builder();
/// # Result::<()>::Ok(()) });
/// ```
///
/// The builder offers several methods to configure the client, and a
/// `.build()` method to construct the client. Settings made in code take
/// precedence over any environment variables.
#[derive(Clone, Debug)]
pub struct ClientBuilder<F> {
    config: internal::ClientConfig,
    factory: F,
}

impl<F> ClientBuilder<F> {
    /// Creates a new client.
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C>,
    {
        self.factory.build(self.config).await
    }

    /// Sets the endpoint.
    ///
    /// Replaces any endpoints previously configured.
    ///
    /// ```
    /// # use elasticsearch_serverless_gax::client_builder::examples;
    /// # use elasticsearch_serverless_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// let client = Client::builder()
    ///     .with_endpoint("https://my-project.es.us-east-1.aws.elastic.cloud")
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoints = Some(vec![v.into()]);
        self
    }

    /// Sets multiple endpoints.
    ///
    /// The transport distributes the requests across these nodes, and fails
    /// over to the next node when a node cannot be reached.
    pub fn with_endpoints<I, V>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.config.endpoints = Some(v.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the API key used to authenticate requests.
    ///
    /// The key is sent in the `Authorization: ApiKey <key>` header.
    pub fn with_api_key<V: Into<String>>(mut self, v: V) -> Self {
        self.config.api_key = Some(v.into());
        self
    }

    /// Enables tracing.
    ///
    /// The client can be dynamically instrumented with the Tokio [tracing]
    /// framework. Setting this flag wraps each request in a span.
    ///
    /// [tracing]: https://docs.rs/tracing/latest/tracing/
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Sets the timeout for each request.
    pub fn with_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.config.timeout = Some(v.into());
        self
    }
}

#[doc(hidden)]
pub mod internal {
    use super::*;

    pub trait ClientFactory {
        type Client;
        fn build(self, config: ClientConfig) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, C>(factory: F) -> super::ClientBuilder<F>
    where
        F: ClientFactory<Client = C>,
    {
        super::ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    /// Configure a client.
    ///
    /// The fields are `None` unless set in code. The transport fills any
    /// missing values from the environment.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct ClientConfig {
        pub endpoints: Option<Vec<String>>,
        pub api_key: Option<String>,
        pub tracing: bool,
        pub timeout: Option<Duration>,
    }
}

#[doc(hidden)]
pub mod examples {
    //! This module contains helper types used in the rustdoc examples.

    type Config = super::internal::ClientConfig;
    use super::Result;

    /// A client type for use in examples.
    ///
    /// This type is used in examples as a placeholder for a real client. It
    /// does not work, but illustrates how to use `ClientBuilder`.
    #[allow(dead_code)]
    pub struct Client(Config);
    impl Client {
        /// Create a builder to initialize new instances of this client.
        pub fn builder() -> client::Builder {
            super::internal::new_builder(client::Factory)
        }

        async fn new(config: Config) -> Result<Self> {
            Ok(Self(config))
        }
    }
    mod client {
        pub type Builder = super::super::ClientBuilder<Factory>;
        pub struct Factory;
        impl super::super::internal::ClientFactory for Factory {
            type Client = super::Client;
            async fn build(self, config: super::Config) -> super::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    // We use the examples as scaffolding for the tests.
    #[cfg(test)]
    mod tests {
        use super::*;
        use std::error::Error as _;
        use std::time::Duration;

        #[tokio::test]
        async fn build_default() {
            let client = Client::builder().build().await.unwrap();
            let config = client.0;
            assert_eq!(config, Config::default());
            assert_eq!(config.endpoints, None);
            assert_eq!(config.api_key, None);
            assert!(!config.tracing);
            assert_eq!(config.timeout, None);
        }

        #[tokio::test]
        async fn endpoint() {
            let client = Client::builder()
                .with_endpoints(["http://a:9200", "http://b:9200"])
                .with_endpoint("http://example.com")
                .build()
                .await
                .unwrap();
            let config = client.0;
            assert_eq!(config.endpoints, Some(vec!["http://example.com".to_string()]));
        }

        #[tokio::test]
        async fn endpoints() {
            let client = Client::builder()
                .with_endpoints(vec!["http://a:9200".to_string(), "http://b:9200".to_string()])
                .build()
                .await
                .unwrap();
            let config = client.0;
            assert_eq!(
                config.endpoints,
                Some(vec![
                    "http://a:9200".to_string(),
                    "http://b:9200".to_string()
                ])
            );
        }

        #[tokio::test]
        async fn api_key() {
            let client = Client::builder()
                .with_api_key("test-only-key")
                .build()
                .await
                .unwrap();
            assert_eq!(client.0.api_key.as_deref(), Some("test-only-key"));
        }

        #[tokio::test]
        async fn tracing() {
            let client = Client::builder().with_tracing().build().await.unwrap();
            assert!(client.0.tracing);
        }

        #[tokio::test]
        async fn timeout() {
            let client = Client::builder()
                .with_timeout(Duration::from_secs(7))
                .build()
                .await
                .unwrap();
            assert_eq!(client.0.timeout, Some(Duration::from_secs(7)));
        }

        #[test]
        fn errors() {
            let error = super::super::Error::config("missing endpoint");
            assert!(error.is_configuration(), "{error:?}");
            assert!(!error.is_transport(), "{error:?}");
            assert!(error.to_string().contains("missing endpoint"), "{error}");

            let error = super::super::Error::transport("cannot create client");
            assert!(error.is_transport(), "{error:?}");
            assert!(!error.is_configuration(), "{error:?}");
            assert!(error.source().is_some(), "{error:?}");
        }
    }
}
