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

//! Conversion of raw value text into [`Value`]s.
//!
//! The kind is decided by [`infer_kind`]; this module turns the text into the
//! concrete value for that kind. Array elements take the kind of the first
//! element, and every later element must parse under that kind.
//!
//! Array splitting is a plain comma split. Quotes and nested brackets are not
//! tracked, so `["a,b"]` yields the two elements `"a` and `b"`.

use crate::error::ValueError;
use crate::inference::{
    infer_kind, is_array_literal, parse_bool_literal, parse_float, parse_integer,
};
use crate::lex::trim;
use crate::value::{ArrayKind, Value, ValueKind};

/// Strip one outer pair of double quotes, if present.
///
/// The interior is kept verbatim; there is no escape processing.
///
/// # Examples
///
/// ```
/// use tini_core::unquote;
///
/// assert_eq!(unquote("\"localhost\""), "localhost");
/// assert_eq!(unquote("\"\"quoted\"\""), "\"quoted\"");
/// assert_eq!(unquote("bare"), "bare");
/// assert_eq!(unquote("\""), "\"");
/// ```
#[inline]
pub fn unquote(s: &str) -> &str {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'"' && bytes[bytes.len() - 1] == b'"' {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

/// Parse a raw value into a [`Value`].
///
/// The text is trimmed and classified, then converted. Only arrays can fail:
/// scalars always have a valid conversion for their inferred kind.
///
/// # Examples
///
/// ```
/// use tini_core::{parse_value, Value};
///
/// assert_eq!(parse_value("  8080 ", 100).unwrap(), Value::Integer(8080));
/// assert_eq!(parse_value("\"localhost\"", 100).unwrap(), Value::string("localhost"));
/// assert_eq!(parse_value("Yes", 100).unwrap(), Value::Boolean(true));
/// assert!(parse_value("[]", 100).is_err());
/// ```
pub fn parse_value(raw: &str, max_array_elements: usize) -> Result<Value, ValueError> {
    let s = trim(raw);
    match infer_kind(s) {
        ValueKind::Array => parse_array(s, max_array_elements),
        kind => parse_scalar(kind, s),
    }
}

/// Convert `s` under an explicit scalar kind.
///
/// `ValueKind::Array` is rejected with [`ValueError::NotAnArray`] when the
/// text is not bracketed, and otherwise parsed with no element limit.
pub fn parse_scalar(kind: ValueKind, s: &str) -> Result<Value, ValueError> {
    let s = trim(s);
    match kind {
        ValueKind::Null => Ok(Value::Null),
        ValueKind::Boolean => parse_bool_literal(s)
            .map(Value::Boolean)
            .ok_or_else(|| ValueError::InvalidBoolean(s.to_string())),
        ValueKind::Integer => parse_integer(s)
            .map(Value::Integer)
            .ok_or_else(|| ValueError::InvalidInteger(s.to_string())),
        ValueKind::Float => parse_float(s)
            .map(Value::Float)
            .ok_or_else(|| ValueError::InvalidFloat(s.to_string())),
        ValueKind::String => Ok(Value::string(unquote(s))),
        ValueKind::Array => parse_array(s, usize::MAX),
    }
}

/// Parse a bracketed, comma-separated array literal.
///
/// Pieces are trimmed and empty pieces are dropped, so `[1,,2]` has two
/// elements. The element count is checked against `max_elements` before any
/// element is converted.
///
/// # Errors
///
/// - [`ValueError::NotAnArray`] if `text` is not `[...]`
/// - [`ValueError::EmptyArray`] if no non-empty pieces remain
/// - [`ValueError::TooManyElements`] if the count exceeds `max_elements`
/// - [`ValueError::ElementKindMismatch`] if a later element does not parse
///   under the kind of the first
///
/// # Examples
///
/// ```
/// use tini_core::{parse_array, ArrayKind, ValueError};
///
/// let v = parse_array("[1, 2, 3]", 100).unwrap();
/// assert_eq!(v.as_array().unwrap().kind(), ArrayKind::Integer);
///
/// assert!(matches!(
///     parse_array("[1, \"x\"]", 100),
///     Err(ValueError::ElementKindMismatch { index: 1, .. })
/// ));
/// ```
pub fn parse_array(text: &str, max_elements: usize) -> Result<Value, ValueError> {
    let s = trim(text);
    if !is_array_literal(s) {
        return Err(ValueError::NotAnArray(s.to_string()));
    }

    let pieces: Vec<&str> = s[1..s.len() - 1]
        .split(',')
        .map(trim)
        .filter(|p| !p.is_empty())
        .collect();

    let Some(first) = pieces.first() else {
        return Err(ValueError::EmptyArray);
    };
    if pieces.len() > max_elements {
        return Err(ValueError::TooManyElements {
            count: pieces.len(),
            max: max_elements,
        });
    }

    let kind = ArrayKind::from_first_element(infer_kind(first));
    let items = pieces
        .iter()
        .enumerate()
        .map(|(index, piece)| {
            parse_element(kind, piece).ok_or_else(|| ValueError::ElementKindMismatch {
                index,
                text: piece.to_string(),
                kind,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Value::array(kind, items, max_elements)
}

/// Convert one array element under the array's element kind.
fn parse_element(kind: ArrayKind, piece: &str) -> Option<Value> {
    match kind {
        ArrayKind::Integer => parse_integer(piece).map(Value::Integer),
        ArrayKind::Float => parse_float(piece).map(Value::Float),
        ArrayKind::String => Some(Value::string(unquote(piece))),
    }
}
