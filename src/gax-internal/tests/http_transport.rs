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

#[cfg(test)]
mod tests {
    use elasticsearch_serverless_gax_internal::api_header::ClientMeta;
    use elasticsearch_serverless_gax_internal::http::ReqwestTransport;
    use elasticsearch_serverless_gax_internal::options::ClientConfig;
    use gax::operation::{BodyRule, Operation, PathVariant, Verb, VerbRule};
    use gax::options::RequestOptions;
    use gax::params::Params;
    use gax::request::Body;
    use gax::transport::Transport;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::time::Duration;

    type Result<T> = anyhow::Result<T>;

    const TEST_META: ClientMeta = ClientMeta {
        name: "test-client",
        version: "1.2.3",
    };

    static PING: Operation = Operation::new("ping", &[PathVariant::new("/")]).with_verb(Verb::Head);

    static SEARCH: Operation = Operation::new(
        "search",
        &[
            PathVariant::new("/{index}/_search"),
            PathVariant::new("/_search"),
        ],
    )
    .with_verb_rule(VerbRule::BodyConditional)
    .with_query(&["q", "size"])
    .with_body(BodyRule::Optional);

    static EXISTS: Operation = Operation::new("indices.exists", &[PathVariant::new("/{index}")])
        .with_verb(Verb::Head)
        .with_required(&["index"]);

    fn config(endpoints: Vec<String>) -> ClientConfig {
        ClientConfig {
            endpoints: Some(endpoints),
            api_key: Some("test-api-key".to_string()),
            ..Default::default()
        }
    }

    async fn transport(server: &Server) -> Result<ReqwestTransport> {
        let endpoint = format!("http://{}", server.addr());
        Ok(ReqwestTransport::new(config(vec![endpoint]), &TEST_META).await?)
    }

    // Returns the address of a port that refuses connections.
    fn closed_endpoint() -> Result<String> {
        let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
        let addr = listener.local_addr()?;
        drop(listener);
        Ok(format!("http://{addr}"))
    }

    #[tokio::test]
    async fn default_headers() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("HEAD", "/"),
                request::headers(contains(("authorization", "ApiKey test-api-key"))),
                request::headers(contains(("elastic-api-version", "2023-10-31"))),
                request::headers(contains((
                    "user-agent",
                    matches("^test-client/1.2.3 ")
                ))),
                request::headers(contains((
                    "x-elastic-client-meta",
                    matches("^esv=1.2.3,rs=")
                ))),
            ])
            .respond_with(status_code(200)),
        );

        let transport = transport(&server).await?;
        let request = PING.build(&Params::new(), None, &RequestOptions::default())?;
        let response = transport.send(request).await?;
        assert!(response.as_bool());
        Ok(())
    }

    #[tokio::test]
    async fn no_api_key() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("HEAD", "/"),
                not(request::headers(contains(key("authorization")))),
            ])
            .respond_with(status_code(200)),
        );

        let config = ClientConfig {
            endpoints: Some(vec![format!("http://{}", server.addr())]),
            api_key: Some(String::new()),
            ..Default::default()
        };
        let transport = ReqwestTransport::new(config, &TEST_META).await?;
        let request = PING.build(&Params::new(), None, &RequestOptions::default())?;
        transport.send(request).await?;
        Ok(())
    }

    #[tokio::test]
    async fn query_and_body() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/products/_search"),
                request::query(url_decoded(contains(("q", "title:rust book")))),
                request::query(url_decoded(contains(("size", "5")))),
                request::headers(contains(("content-type", "application/json"))),
                request::headers(contains(("accept", "application/json"))),
                request::body(json_decoded(eq(json!({"query": {"match_all": {}}})))),
            ])
            .respond_with(json_encoded(json!({"hits": {"total": {"value": 3}}}))),
        );

        let transport = transport(&server).await?;
        let params = Params::new()
            .with("index", "products")
            .with("q", "title:rust book")
            .with("size", 5);
        let body = Body::from(json!({"query": {"match_all": {}}}));
        let request = SEARCH.build(&params, Some(body), &RequestOptions::default())?;
        let response = transport.send(request).await?;
        assert_eq!(response.status(), http::StatusCode::OK);
        assert_eq!(response.json()?["hits"]["total"]["value"], json!(3));
        Ok(())
    }

    #[tokio::test]
    async fn request_headers() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/_search"),
                request::headers(contains(("x-opaque-id", "trace-123"))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let transport = transport(&server).await?;
        let mut options = RequestOptions::default();
        options.set_header(
            http::HeaderName::from_static("x-opaque-id"),
            http::HeaderValue::from_static("trace-123"),
        );
        let request = SEARCH.build(&Params::new(), None, &options)?;
        transport.send(request).await?;
        Ok(())
    }

    #[tokio::test]
    async fn client_error() -> Result<()> {
        let server = Server::run();
        let payload = json!({
            "error": {"type": "index_not_found_exception", "reason": "no such index [missing]"},
            "status": 404
        });
        server.expect(
            Expectation::matching(request::method_path("GET", "/missing/_search"))
                .respond_with(status_code(404).body(payload.to_string())),
        );

        let transport = transport(&server).await?;
        let params = Params::new().with("index", "missing");
        let request = SEARCH.build(&params, None, &RequestOptions::default())?;
        let err = transport.send(request).await.unwrap_err();
        assert!(err.is_client_response(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(404));
        assert_eq!(err.error_type(), Some("index_not_found_exception"));
        assert_eq!(err.error_reason(), Some("no such index [missing]"));
        Ok(())
    }

    #[tokio::test]
    async fn server_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/_search"))
                .respond_with(status_code(503).body("try again later")),
        );

        let transport = transport(&server).await?;
        let request = SEARCH.build(&Params::new(), None, &RequestOptions::default())?;
        let err = transport.send(request).await.unwrap_err();
        assert!(err.is_server_response(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(503));
        assert_eq!(
            err.http_payload().map(|b| b.as_ref()),
            Some("try again later".as_bytes())
        );
        Ok(())
    }

    #[tokio::test]
    async fn head_not_found() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("HEAD", "/missing"))
                .respond_with(status_code(404)),
        );
        server.expect(
            Expectation::matching(request::method_path("HEAD", "/products"))
                .respond_with(status_code(200)),
        );

        let transport = transport(&server).await?;
        let params = Params::new().with("index", "missing");
        let request = EXISTS.build(&params, None, &RequestOptions::default())?;
        let response = transport.send(request).await?;
        assert!(!response.as_bool());

        let params = Params::new().with("index", "products");
        let request = EXISTS.build(&params, None, &RequestOptions::default())?;
        let response = transport.send(request).await?;
        assert!(response.as_bool());
        Ok(())
    }

    #[tokio::test]
    async fn failover() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("HEAD", "/"))
                .times(2)
                .respond_with(status_code(200)),
        );

        let endpoints = vec![closed_endpoint()?, format!("http://{}", server.addr())];
        let transport = ReqwestTransport::new(config(endpoints), &TEST_META).await?;
        for _ in 0..2 {
            let request = PING.build(&Params::new(), None, &RequestOptions::default())?;
            let response = transport.send(request).await?;
            assert!(response.as_bool());
        }
        Ok(())
    }

    #[tokio::test]
    async fn no_node_available() -> Result<()> {
        let endpoints = vec![closed_endpoint()?, closed_endpoint()?];
        let transport = ReqwestTransport::new(config(endpoints), &TEST_META).await?;
        let request = PING.build(&Params::new(), None, &RequestOptions::default())?;
        let err = transport.send(request).await.unwrap_err();
        assert!(err.is_no_node_available(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn request_timeout() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/_search"))
                .respond_with(delay_and_then(
                    Duration::from_secs(5),
                    json_encoded(json!({})),
                )),
        );

        let transport = transport(&server).await?;
        let mut options = RequestOptions::default();
        options.set_timeout(Duration::from_millis(100));
        let request = SEARCH.build(&Params::new(), None, &options)?;
        let err = transport.send(request).await.unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn configuration_errors() -> Result<()> {
        let config = ClientConfig {
            endpoints: Some(vec![]),
            ..Default::default()
        };
        let err = ReqwestTransport::new(config, &TEST_META).await.unwrap_err();
        assert!(err.is_configuration(), "{err:?}");

        let config = ClientConfig {
            endpoints: Some(vec!["localhost:9200".to_string()]),
            ..Default::default()
        };
        let err = ReqwestTransport::new(config, &TEST_META).await.unwrap_err();
        assert!(err.is_configuration(), "{err:?}");

        let config = ClientConfig {
            endpoints: Some(vec!["http://localhost:9200".to_string()]),
            api_key: Some("bad\nkey".to_string()),
            ..Default::default()
        };
        let err = ReqwestTransport::new(config, &TEST_META).await.unwrap_err();
        assert!(err.is_configuration(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn nodes() -> Result<()> {
        let endpoints = vec!["http://a:9200/".to_string(), "https://b".to_string()];
        let transport = ReqwestTransport::new(config(endpoints), &TEST_META).await?;
        let got: Vec<&str> = transport.nodes().collect();
        assert_eq!(got, vec!["http://a:9200", "https://b"]);
        Ok(())
    }
}
