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

//! Operation descriptors.
//!
//! Each operation in the service is described by a static [Operation]: where
//! the request goes, which verb it uses, which options it requires, which
//! options may appear in the query string, and whether it takes a body. The
//! same code builds the request for every operation, the descriptors hold
//! all the per-operation data.
//!
//! # Example
//! ```
//! # use elasticsearch_serverless_gax::operation::*;
//! # use elasticsearch_serverless_gax::params::Params;
//! # use elasticsearch_serverless_gax::options::RequestOptions;
//! static GET_DOC: Operation = Operation::new("get", &[PathVariant::new("/{index}/_doc/{id}")])
//!     .with_required(&["id", "index"])
//!     .with_query(&["routing", "_source"]);
//!
//! let params = Params::new().with("index", "products").with("id", "1").with("_source", false);
//! let request = GET_DOC.build(&params, None, &RequestOptions::default())?;
//! assert_eq!(request.path_and_query(), "/products/_doc/1?_source=false");
//! # Ok::<(), elasticsearch_serverless_gax::error::Error>(())
//! ```

use crate::Result;
use crate::options::RequestOptions;
use crate::params::{Params, filter};
use crate::path_parameter::{expand, first_missing, placeholders};
use crate::query_parameter::to_query;
use crate::request::{Body, Request};
use crate::validate;
use http::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};

/// The media type for JSON documents.
pub const JSON: &str = "application/json";

/// The media type for newline-delimited JSON documents.
pub const NDJSON: &str = "application/x-ndjson";

/// Query options accepted by every operation.
///
/// These are appended to the operation whitelist, in this order.
pub const COMMON_QUERY: &[&str] = &["pretty", "human", "error_trace", "filter_path"];

/// The HTTP verbs used by the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verb {
    Get,
    Head,
    Post,
    Put,
    Delete,
}

impl Verb {
    pub fn method(&self) -> http::Method {
        match self {
            Self::Get => http::Method::GET,
            Self::Head => http::Method::HEAD,
            Self::Post => http::Method::POST,
            Self::Put => http::Method::PUT,
            Self::Delete => http::Method::DELETE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Head => "HEAD",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Determines the verb for an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerbRule {
    /// Always use this verb.
    Fixed(Verb),
    /// Use `GET` without a body, `POST` with a body.
    ///
    /// Some HTTP intermediaries drop the body of `GET` requests, operations
    /// that accept an optional body (e.g. `search`) switch to `POST`.
    BodyConditional,
}

impl VerbRule {
    /// Returns the verb for a request with (or without) a body.
    ///
    /// # Example
    /// ```
    /// # use elasticsearch_serverless_gax::operation::{Verb, VerbRule};
    /// assert_eq!(VerbRule::BodyConditional.select(false), Verb::Get);
    /// assert_eq!(VerbRule::BodyConditional.select(true), Verb::Post);
    /// assert_eq!(VerbRule::Fixed(Verb::Put).select(false), Verb::Put);
    /// ```
    pub fn select(&self, has_body: bool) -> Verb {
        match self {
            Self::Fixed(v) => *v,
            Self::BodyConditional if has_body => Verb::Post,
            Self::BodyConditional => Verb::Get,
        }
    }
}

/// One of the path templates for an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathVariant {
    pub template: &'static str,
    /// If set, this verb replaces the operation [VerbRule] when this variant
    /// is selected.
    pub verb: Option<Verb>,
}

impl PathVariant {
    pub const fn new(template: &'static str) -> Self {
        Self {
            template,
            verb: None,
        }
    }

    pub const fn with_verb(mut self, verb: Verb) -> Self {
        self.verb = Some(verb);
        self
    }
}

/// Whether an operation takes a body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyRule {
    /// The operation never sends a body. Any body is ignored.
    None,
    Optional,
    Required,
}

/// Describes an operation.
///
/// Descriptors are immutable, typically `static`, and shared by all the
/// clients. The `const` builder methods allow applications to define
/// operations not (yet) included in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Operation {
    /// The operation name, e.g. `search` or `indices.create`.
    pub name: &'static str,
    /// The path templates, most specific first.
    pub paths: &'static [PathVariant],
    pub verb: VerbRule,
    /// Options that must be present, checked in this order.
    pub required: &'static [&'static str],
    /// Options sent in the query string, in this order.
    pub query: &'static [&'static str],
    pub body: BodyRule,
    /// The value of the `Accept` header.
    pub accept: &'static str,
    /// The value of the `Content-Type` header.
    ///
    /// If not set, operations that accept a body use `application/json`.
    pub content_type: Option<&'static str>,
}

impl Operation {
    /// Creates a descriptor using `GET`, without required options, query
    /// options, or body.
    pub const fn new(name: &'static str, paths: &'static [PathVariant]) -> Self {
        Self {
            name,
            paths,
            verb: VerbRule::Fixed(Verb::Get),
            required: &[],
            query: &[],
            body: BodyRule::None,
            accept: JSON,
            content_type: None,
        }
    }

    pub const fn with_verb(mut self, verb: Verb) -> Self {
        self.verb = VerbRule::Fixed(verb);
        self
    }

    pub const fn with_verb_rule(mut self, rule: VerbRule) -> Self {
        self.verb = rule;
        self
    }

    pub const fn with_required(mut self, required: &'static [&'static str]) -> Self {
        self.required = required;
        self
    }

    pub const fn with_query(mut self, query: &'static [&'static str]) -> Self {
        self.query = query;
        self
    }

    pub const fn with_body(mut self, body: BodyRule) -> Self {
        self.body = body;
        self
    }

    pub const fn with_accept(mut self, accept: &'static str) -> Self {
        self.accept = accept;
        self
    }

    pub const fn with_content_type(mut self, content_type: &'static str) -> Self {
        self.content_type = Some(content_type);
        self
    }

    /// The query options accepted by this operation, in order.
    ///
    /// The operation whitelist followed by [COMMON_QUERY].
    pub fn whitelist(&self) -> impl Iterator<Item = &'static str> {
        self.query.iter().chain(COMMON_QUERY.iter()).copied()
    }

    /// The `Content-Type` sent by this operation, if any.
    pub fn effective_content_type(&self) -> Option<&'static str> {
        match (self.content_type, self.body) {
            (Some(c), _) => Some(c),
            (None, BodyRule::None) => None,
            (None, _) => Some(JSON),
        }
    }

    /// Returns true if `name` is a placeholder in any path variant.
    pub fn is_path_parameter(&self, name: &str) -> bool {
        self.paths
            .iter()
            .any(|p| placeholders(p.template).any(|n| n == name))
    }

    /// Selects the first path variant with all its placeholders present.
    ///
    /// Returns the variant and the expanded path. If no variant matches, the
    /// error names the first missing placeholder of the last variant.
    pub fn select_path(&self, params: &Params) -> Result<(&'static PathVariant, String)> {
        let paths: &'static [PathVariant] = self.paths;
        if let Some(found) = paths
            .iter()
            .find_map(|p| expand(p.template, params).map(|path| (p, path)))
        {
            return Ok(found);
        }
        let name = paths
            .last()
            .and_then(|p| first_missing(p.template, params))
            .unwrap_or("path");
        Err(validate::missing(self.name, name))
    }

    /// Builds the request for this operation.
    ///
    /// All the validation happens here: required options, the body rule, and
    /// the path variant selection. No request is built if any check fails.
    pub fn build(
        &self,
        params: &Params,
        body: Option<Body>,
        options: &RequestOptions,
    ) -> Result<Request> {
        validate::required(self.name, self.required, params)?;
        let body = match self.body {
            BodyRule::None => None,
            BodyRule::Optional | BodyRule::Required => body.filter(|b| !b.is_empty()),
        };
        if self.body == BodyRule::Required {
            validate::required_body(self.name, body.is_some())?;
        }
        let (variant, path) = self.select_path(params)?;
        let verb = variant
            .verb
            .unwrap_or_else(|| self.verb.select(body.is_some()));
        let query = to_query(&filter(params, self.whitelist()));

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(self.accept));
        if let Some(content_type) = self.effective_content_type() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        }
        for (name, value) in options.headers() {
            headers.insert(name.clone(), value.clone());
        }
        let body = body.map(|b| b.to_bytes()).transpose()?;
        Ok(Request::new(
            self.name,
            verb,
            path,
            query,
            headers,
            body,
            *options.timeout(),
        ))
    }
}
