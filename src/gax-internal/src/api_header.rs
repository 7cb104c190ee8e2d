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

//! Telemetry header helpers.

/// The name of the client telemetry header.
pub const CLIENT_META: &str = "x-elastic-client-meta";

/// The name of the header selecting the API version.
pub const API_VERSION: &str = "elastic-api-version";

/// The API version used by all the operations in this client.
pub const API_VERSION_VALUE: &str = "2023-10-31";

/// The client library creates one static instance of this struct and uses it
/// to format the telemetry headers.
#[derive(Debug, PartialEq)]
pub struct ClientMeta {
    pub name: &'static str,
    pub version: &'static str,
}

mod build_info {
    // The file has been placed there by the build script.
    include!(concat!(env!("OUT_DIR"), "/build_env.rs"));

    pub(crate) const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
}

impl ClientMeta {
    /// Format the struct as needed for the `x-elastic-client-meta` header.
    ///
    /// The service expects a comma-separated list of `key=value` pairs:
    /// `esv` is the client version, `rs` the compiler version, and `t` the
    /// transport version.
    pub fn header_value(&self) -> String {
        format!(
            "esv={},rs={},t={}",
            self.version,
            build_info::RUSTC_VERSION,
            build_info::PKG_VERSION
        )
    }

    /// Format the struct as needed for the `User-Agent` header.
    pub fn user_agent(&self) -> String {
        format!(
            "{}/{} (rustc {}; transport {})",
            self.name,
            self.version,
            build_info::RUSTC_VERSION,
            build_info::PKG_VERSION
        )
    }
}
