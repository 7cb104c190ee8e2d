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

//! Errors returned by the client.
//!
//! The client distinguishes between errors detected before a request is sent
//! (e.g. a required option is missing), errors reaching the service (e.g. no
//! node accepts a connection), and errors returned by the service itself
//! (4xx and 5xx replies).
//!
//! # Examples
//!
//! ```
//! use elasticsearch_serverless_gax::error::Error;
//! fn handle_error(e: Error) {
//!     if let Some(name) = e.missing_parameter() {
//!         println!("set `{name}` and try again");
//!     } else if let Some(t) = e.error_type() {
//!         println!("the service rejected the request with {t}");
//!     }
//! }
//! ```

mod core_error;
pub use core_error::*;
