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

//! Operations on the project license.

use gax::dispatch::Dispatcher;
use gax::operation::{Operation, PathVariant};

pub static GET: Operation = Operation::new("license.get", &[PathVariant::new("/_license")]);

/// All the operations in this namespace, sorted by name.
pub static ALL: &[&Operation] = &[&GET];

/// The `license` namespace client.
#[derive(Clone, Debug)]
pub struct License {
    dispatcher: Dispatcher,
}

impl License {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    operations! {
        /// Returns information about the license.
        get => GET;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get() -> anyhow::Result<()> {
        let namespace = License::new(crate::namespaces::tests::dispatcher());
        let request = namespace
            .get()
            .with_param("pretty", true)
            .with_param("local", true)
            .build()?;
        assert_eq!(request.path_and_query(), "/_license?pretty=true");
        Ok(())
    }
}
