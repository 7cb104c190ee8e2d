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

use crate::Result;
use crate::request::Request;
use crate::response::Response;
use std::future::Future;

/// Sends requests to the service.
///
/// The client builds each [Request] and hands it to a transport. The
/// transport is responsible for selecting a node, adding any connection-wide
/// headers (authentication, user agent), sending the request, and mapping the
/// reply into a [Response] or an [Error][crate::error::Error].
///
/// Transports must not modify the path, the query string, the body, or the
/// headers set by the operation.
///
/// # Notes
///
/// Most applications use the default transport, based on `reqwest`.
/// Applications may implement this trait to mock the service in their tests,
/// or to send requests through a custom HTTP stack.
pub trait Transport: std::fmt::Debug + Send + Sync {
    /// Sends a request and returns the reply.
    fn send(&self, request: Request) -> impl Future<Output = Result<Response>> + Send;
}

pub mod dynamic {
    use super::{Request, Response, Result};

    /// A dyn-compatible, crate-private version of `Transport`.
    #[async_trait::async_trait]
    pub trait Transport: Send + Sync + std::fmt::Debug {
        async fn send(&self, request: Request) -> Result<Response>;
    }

    /// All implementations of [crate::transport::Transport] implement this
    /// trait.
    #[async_trait::async_trait]
    impl<T> Transport for T
    where
        T: crate::transport::Transport,
    {
        async fn send(&self, request: Request) -> Result<Response> {
            T::send(self, request).await
        }
    }
}
