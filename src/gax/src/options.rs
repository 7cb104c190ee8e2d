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

//! Per request options.
//!
//! The client defaults work for most calls. Sometimes an application needs
//! to add a header to a single call (e.g. `X-Opaque-Id` to trace a slow
//! search in the service logs), or give a single call a tighter timeout than
//! the one configured in the client. The request builders expose these
//! settings, and they are collected in [RequestOptions].

use http::{HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;

/// A set of options configuring a single request.
///
/// Applications only use this type directly in mocks, where they may want to
/// verify their application has configured all the right request options.
///
/// All other code uses this type indirectly, via the request builders.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    headers: HeaderMap,
    timeout: Option<Duration>,
}

impl RequestOptions {
    /// Adds a header to the request.
    ///
    /// These headers are applied after the operation defaults, a header with
    /// the same name as a default (e.g. `accept`) replaces it.
    pub fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }

    /// Gets the extra headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Sets the timeout for this request.
    ///
    /// This overrides the timeout configured in the client, if any. Note that
    /// this is enforced by the transport. To limit the time spent in the
    /// service, most operations support a `timeout` query option.
    pub fn set_timeout<T: Into<Duration>>(&mut self, v: T) {
        self.timeout = Some(v.into());
    }

    /// Gets the current timeout override.
    pub fn timeout(&self) -> &Option<Duration> {
        &self.timeout
    }
}
