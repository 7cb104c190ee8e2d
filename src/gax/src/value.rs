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

//! Option values and their wire representation.
//!
//! Many options accept either a single value or a list of values. For
//! example, `index` may be `"logs"` or `["logs", "metrics"]`, and `_source`
//! may be `true` or a list of field names. The service expects lists as a
//! single comma-separated string.
//!
//! Applications create values with [From] conversions. The rest of the
//! client only deals with the canonical string produced by
//! [coerce][Value::coerce].

/// A value for a path argument or a query option.
///
/// # Example
/// ```
/// # use elasticsearch_serverless_gax::value::Value;
/// assert_eq!(Value::from("logs").coerce().as_deref(), Some("logs"));
/// assert_eq!(Value::from(["logs", "metrics"]).coerce().as_deref(), Some("logs,metrics"));
/// assert_eq!(Value::from(true).coerce().as_deref(), Some("true"));
/// assert_eq!(Value::from(None::<&str>).coerce(), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Bool(bool),
    List(Vec<Value>),
    /// Equivalent to not setting the option at all.
    Null,
}

impl Value {
    /// Returns the canonical string for this value, or `None` if it is empty.
    ///
    /// Lists are flattened, each element is coerced, `Null` elements are
    /// skipped, and the results are joined with `,`. A list without any
    /// non-null element is empty, like [Value::Null].
    pub fn coerce(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        match self {
            Self::Null => None,
            Self::String(s) => Some(s.clone()),
            Self::Integer(i) => Some(i.to_string()),
            Self::Unsigned(u) => Some(u.to_string()),
            Self::Float(f) => Some(f.to_string()),
            Self::Bool(b) => Some(if *b { "true" } else { "false" }.to_string()),
            Self::List(list) => Some(
                list.iter()
                    .filter_map(Value::coerce)
                    .collect::<Vec<_>>()
                    .join(","),
            ),
        }
    }

    /// Returns true for [Value::Null].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true for [Value::Null] and for lists without non-null elements.
    ///
    /// An empty value is equivalent to not setting the option at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::List(list) => list.iter().all(Value::is_empty),
            _ => false,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(value: $t) -> Self {
                Self::Integer(value as i64)
            }
        })*
    };
}
signed!(i8, i16, i32, i64);

macro_rules! unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(value: $t) -> Self {
                Self::Unsigned(value as u64)
            }
        })*
    };
}
unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Null)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(value: [T; N]) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for Value {
    fn from(value: &[T]) -> Self {
        Self::List(value.iter().cloned().map(Into::into).collect())
    }
}

/// JSON objects have no canonical option form, they are sent as their JSON
/// text.
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value as Json;
        match value {
            Json::Null => Self::Null,
            Json::Bool(b) => Self::Bool(b),
            Json::String(s) => Self::String(s),
            Json::Number(n) => n
                .as_i64()
                .map(Self::Integer)
                .or_else(|| n.as_u64().map(Self::Unsigned))
                .unwrap_or_else(|| Self::Float(n.as_f64().unwrap_or_default())),
            Json::Array(a) => Self::List(a.into_iter().map(Into::into).collect()),
            o @ Json::Object(_) => Self::String(o.to_string()),
        }
    }
}
