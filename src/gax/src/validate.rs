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

//! Handling of missing required options.
//!
//! Some operations cannot be built without certain options, e.g. `create`
//! needs both `index` and `id`. These checks run before the request is built,
//! so a missing option never reaches the network.

use crate::Result;
use crate::params::Params;

/// The name reported when an operation requires a body and none was given.
pub const BODY: &str = "body";

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("missing required parameter `{name}` for operation `{operation}`")]
    MissingRequiredParameter { operation: String, name: String },
}

impl Error {
    /// The operation that could not be built.
    pub fn operation(&self) -> &str {
        match self {
            Self::MissingRequiredParameter { operation, .. } => operation,
        }
    }

    /// The name of the missing option.
    pub fn name(&self) -> &str {
        match self {
            Self::MissingRequiredParameter { name, .. } => name,
        }
    }
}

pub fn missing(operation: &str, name: &str) -> crate::error::Error {
    crate::error::Error::missing(Error::MissingRequiredParameter {
        operation: operation.to_string(),
        name: name.to_string(),
    })
}

/// Verifies each key in `required` is present with a non-empty value.
///
/// The keys are checked in order, the first missing key is reported. A null
/// value, an empty list, and an empty string are all missing.
///
/// # Example
/// ```
/// # use elasticsearch_serverless_gax::params::Params;
/// # use elasticsearch_serverless_gax::validate::required;
/// let params = Params::new().with("index", "products");
/// let err = required("create", &["id", "index"], &params).unwrap_err();
/// assert_eq!(err.missing_parameter(), Some("id"));
/// ```
pub fn required(operation: &str, required: &[&str], params: &Params) -> Result<()> {
    match required.iter().find(|name| params.text(name).is_none()) {
        Some(name) => Err(missing(operation, name)),
        None => Ok(()),
    }
}

/// Verifies a body is present when the operation requires one.
pub fn required_body(operation: &str, present: bool) -> Result<()> {
    if present {
        return Ok(());
    }
    Err(missing(operation, BODY))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use std::error::Error as _;
    use test_case::test_case;

    #[test]
    fn missing() {
        let e = super::missing("create", "abc123");
        let fmt = format!("{e}");
        assert!(fmt.contains("abc123"), "{e:?}");
        assert!(fmt.contains("create"), "{e:?}");
        let inner = e.source().and_then(|e| e.downcast_ref::<Error>());
        match inner {
            Some(Error::MissingRequiredParameter { operation, name }) => {
                assert_eq!(operation, "create");
                assert_eq!(name, "abc123");
            }
            None => panic!("unexpected source in {e:?}"),
        }
    }

    #[test_case(&[], None; "nothing required")]
    #[test_case(&["id", "index"], None; "all present")]
    #[test_case(&["id", "index", "pipeline"], Some("pipeline"); "last missing")]
    #[test_case(&["routing", "id"], Some("routing"); "null is missing")]
    #[test_case(&["a", "b"], Some("a"); "first missing wins")]
    #[test_case(&["id", "preference"], Some("preference"); "empty string is missing")]
    #[test_case(&["pipeline_list", "id"], Some("pipeline_list"); "empty list is missing")]
    fn required_keys(keys: &[&str], want: Option<&str>) {
        let params = Params::new()
            .with("id", "1")
            .with("index", "products")
            .with("routing", Value::Null)
            .with("preference", "")
            .with("pipeline_list", Vec::<&str>::new());
        let got = required("test-only", keys, &params);
        match want {
            None => assert!(got.is_ok(), "{got:?}"),
            Some(name) => {
                let err = got.unwrap_err();
                assert!(err.is_missing_parameter(), "{err:?}");
                assert_eq!(err.missing_parameter(), Some(name));
            }
        }
    }

    #[test]
    fn body() {
        assert!(required_body("bulk", true).is_ok());
        let err = required_body("bulk", false).unwrap_err();
        assert_eq!(err.missing_parameter(), Some(BODY));
        assert!(err.to_string().contains("bulk"), "{err}");
    }
}
