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

//! Lazily constructed namespace clients.
//!
//! Operations are grouped in namespaces (`indices`, `cat`, `ingest`, ...).
//! Each namespace client is created the first time the application asks for
//! it, and then reused for the lifetime of the client that owns the registry.

use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

type Entry = Arc<dyn Any + Send + Sync>;

/// A get-or-create cache of namespace clients, keyed by name.
///
/// # Example
/// ```
/// # use elasticsearch_serverless_gax::namespace::NamespaceRegistry;
/// # use std::sync::Arc;
/// #[derive(Debug)]
/// struct Indices;
/// let registry = NamespaceRegistry::default();
/// let a = registry.get("indices", || Indices);
/// let b = registry.get("indices", || Indices);
/// assert!(Arc::ptr_eq(&a, &b));
/// ```
#[derive(Debug, Default)]
pub struct NamespaceRegistry {
    entries: Mutex<HashMap<&'static str, Entry>>,
}

impl NamespaceRegistry {
    /// Returns the namespace client for `name`, creating it on first use.
    ///
    /// The factory runs at most once per name, even if multiple threads
    /// request the same namespace concurrently.
    ///
    /// # Panics
    ///
    /// If `name` was previously registered with a different type. Namespace
    /// names and types are fixed in the client, this is a programming error.
    pub fn get<N, F>(&self, name: &'static str, factory: F) -> Arc<N>
    where
        N: Any + Send + Sync,
        F: FnOnce() -> N,
    {
        let entry = self
            .lock()
            .entry(name)
            .or_insert_with(|| {
                tracing::debug!(namespace = name, "creating namespace client");
                let entry: Entry = Arc::new(factory());
                entry
            })
            .clone();
        entry.downcast::<N>().unwrap_or_else(|_| {
            panic!("namespace `{name}` registered with a different type")
        })
    }

    /// Returns true if the namespace client for `name` was already created.
    pub fn contains(&self, name: &str) -> bool {
        self.lock().contains_key(name)
    }

    // A factory that panicked leaves the map unchanged, the lock can be reused.
    fn lock(&self) -> MutexGuard<'_, HashMap<&'static str, Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
