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

use gax::client_builder::Error as BuilderError;
use http::Uri;
use std::str::FromStr;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("no endpoint configured, use `with_endpoint()` or set ELASTICSEARCH_URL")]
    NoEndpoint,
    #[error("cannot parse endpoint `{0}`")]
    Invalid(String, #[source] http::uri::InvalidUri),
    #[error("endpoint `{0}` must use the `http` or `https` scheme")]
    Scheme(String),
    #[error("endpoint `{0}` has no host")]
    MissingHost(String),
    #[error("endpoint `{0}` must not have a query or fragment")]
    QueryOrFragment(String),
}

/// Validates an endpoint and returns its normalized form.
///
/// Endpoints must be absolute `http` or `https` URLs with a host. A path
/// prefix (e.g. for a proxy) is allowed, a query or fragment is not. The
/// trailing `/`, if any, is removed so request paths can be appended
/// directly.
pub(crate) fn from_endpoint(endpoint: &str) -> gax::client_builder::Result<String> {
    let uri = Uri::from_str(endpoint)
        .map_err(|e| BuilderError::config(Error::Invalid(endpoint.to_string(), e)))?;
    match uri.scheme_str() {
        Some("http") | Some("https") => {}
        _ => return Err(BuilderError::config(Error::Scheme(endpoint.to_string()))),
    }
    let host = uri.authority().map(|a| a.host()).unwrap_or_default();
    if host.is_empty() {
        return Err(BuilderError::config(Error::MissingHost(
            endpoint.to_string(),
        )));
    }
    if uri.query().is_some() || endpoint.contains('#') {
        return Err(BuilderError::config(Error::QueryOrFragment(
            endpoint.to_string(),
        )));
    }
    Ok(endpoint.trim_end_matches('/').to_string())
}

/// Validates a list of endpoints, which must not be empty.
pub(crate) fn from_endpoints(endpoints: &[String]) -> gax::client_builder::Result<Vec<String>> {
    if endpoints.is_empty() {
        return Err(BuilderError::config(Error::NoEndpoint));
    }
    endpoints.iter().map(|e| from_endpoint(e)).collect()
}
