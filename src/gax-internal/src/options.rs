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

// The client configuration for [crate::http::ReqwestTransport].
pub type ClientConfig = gax::client_builder::internal::ClientConfig;

pub(crate) const LOGGING_VAR: &str = "ELASTICSEARCH_SERVERLESS_LOGGING";
pub(crate) const URL_VAR: &str = "ELASTICSEARCH_URL";
pub(crate) const API_KEY_VAR: &str = "ELASTIC_API_KEY";

// Returns true if the environment or client configuration enables tracing.
pub fn tracing_enabled(config: &ClientConfig) -> bool {
    if config.tracing {
        return true;
    }
    std::env::var(LOGGING_VAR)
        .map(|v| v == "true")
        .unwrap_or(false)
}

// Returns the configured endpoints, or the endpoints in the environment.
//
// The environment variable may contain a comma-separated list. Empty entries
// are ignored.
pub fn endpoints(config: &ClientConfig) -> Vec<String> {
    if let Some(e) = &config.endpoints {
        return e.clone();
    }
    std::env::var(URL_VAR)
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

// Returns the configured API key, or the API key in the environment.
pub fn api_key(config: &ClientConfig) -> Option<String> {
    config
        .api_key
        .clone()
        .or_else(|| std::env::var(API_KEY_VAR).ok())
        .filter(|k| !k.is_empty())
}
