// Dweve TINI - Typed INI Configuration Parser
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Value types for TINI entries.

use crate::error::ValueError;
use std::fmt;

/// The kind of a value, as decided by the inference ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Boolean,
    Integer,
    Float,
    String,
    Array,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::Array => "array",
        };
        f.write_str(name)
    }
}

/// Element kind of an array, fixed by its first element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArrayKind {
    String,
    Integer,
    Float,
}

impl ArrayKind {
    /// Element kind used for an array whose first element infers to `kind`.
    ///
    /// Only integers and floats get numeric arrays; everything else is kept
    /// as text.
    pub fn from_first_element(kind: ValueKind) -> Self {
        match kind {
            ValueKind::Integer => Self::Integer,
            ValueKind::Float => Self::Float,
            _ => Self::String,
        }
    }

    /// Returns true if `value` belongs in an array of this kind.
    pub fn admits(&self, value: &Value) -> bool {
        matches!(
            (self, value),
            (Self::String, Value::String(_))
                | (Self::Integer, Value::Integer(_))
                | (Self::Float, Value::Float(_))
        )
    }
}

impl fmt::Display for ArrayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "float",
        };
        f.write_str(name)
    }
}

/// A non-empty, homogeneously kinded sequence of scalar values.
///
/// Deserialized arrays go through [`Array::new`], so empty or mixed-kind
/// payloads are rejected.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawArray"))]
pub struct Array {
    kind: ArrayKind,
    items: Vec<Value>,
}

/// Unchecked wire form of [`Array`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawArray {
    kind: ArrayKind,
    items: Vec<Value>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawArray> for Array {
    type Error = ValueError;

    fn try_from(raw: RawArray) -> Result<Self, Self::Error> {
        Array::new(raw.kind, raw.items, usize::MAX)
    }
}

impl Array {
    /// Build an array, rejecting empty or over-capacity sequences and
    /// elements that do not match `kind`.
    pub fn new(kind: ArrayKind, items: Vec<Value>, max_elements: usize) -> Result<Self, ValueError> {
        if items.is_empty() {
            return Err(ValueError::EmptyArray);
        }
        if items.len() > max_elements {
            return Err(ValueError::TooManyElements {
                count: items.len(),
                max: max_elements,
            });
        }
        if let Some((index, item)) = items.iter().enumerate().find(|(_, v)| !kind.admits(v)) {
            return Err(ValueError::ElementKindMismatch {
                index,
                text: item.to_string(),
                kind,
            });
        }
        Ok(Self { kind, items })
    }

    /// The element kind.
    pub fn kind(&self) -> ArrayKind {
        self.kind
    }

    /// Number of elements (always at least one).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<Value> {
        self.items
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// A typed TINI value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// Empty raw value.
    Null,
    /// `true`/`false`/`yes`/`no`, any ASCII case.
    Boolean(bool),
    /// Base-10 signed 64-bit integer.
    Integer(i64),
    /// Finite decimal floating-point number.
    Float(f64),
    /// Text, with one outer pair of double quotes removed.
    String(String),
    /// Bracketed, comma-separated list.
    Array(Array),
}

impl Value {
    /// Create a string value.
    pub fn string(s: impl Into<String>) -> Self {
        Self::String(s.into())
    }

    /// Create an array value, see [`Array::new`].
    pub fn array(kind: ArrayKind, items: Vec<Value>, max_elements: usize) -> Result<Self, ValueError> {
        Array::new(kind, items, max_elements).map(Self::Array)
    }

    /// The kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::String(_) => ValueKind::String,
            Self::Array(_) => ValueKind::Array,
        }
    }

    /// Returns true if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get the value as a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the value as a float. Integers are not converted.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get the value as an array.
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Integer(n) => write!(f, "{}", n),
            Self::Float(n) => write!(f, "{}", n),
            Self::String(s) => write!(f, "{}", s),
            Self::Array(a) => {
                write!(f, "[")?;
                for (i, item) in a.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    match item {
                        Self::String(s) => write!(f, "\"{}\"", s)?,
                        other => write!(f, "{}", other)?,
                    }
                }
                write!(f, "]")
            }
        }
    }
}
