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

//! Each namespace groups the operations for a family of endpoints. The
//! namespace clients are obtained from [Client][crate::Client], e.g.
//! [Client::indices()][crate::Client::indices], and share the client
//! transport.

pub mod async_search;
pub mod cat;
pub mod cluster;
pub mod esql;
pub mod indices;
pub mod ingest;
pub mod license;
pub mod sql;
pub mod tasks;
