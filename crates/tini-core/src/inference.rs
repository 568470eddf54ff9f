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

//! Value inference ladder for TINI.
//!
//! Classifies a raw value by its textual form. The first matching rung wins:
//!
//! 1. Null (empty)
//! 2. Array (`[` ... `]`)
//! 3. Boolean (`true`/`false`/`yes`/`no`, any ASCII case)
//! 4. Integer (whole text is a base-10 `i64`)
//! 5. Float (whole text is a finite decimal number)
//! 6. String (default)

use crate::lex::trim;
use crate::value::ValueKind;

/// Returns true if `s` is bracketed like an array literal.
#[inline]
pub fn is_array_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() >= 2 && bytes[0] == b'[' && bytes[bytes.len() - 1] == b']'
}

/// Match `s` against the boolean literal set.
///
/// Returns `Some(true)` for `true`/`yes`, `Some(false)` for `false`/`no`,
/// ignoring ASCII case, and `None` otherwise.
#[inline]
pub fn parse_bool_literal(s: &str) -> Option<bool> {
    // Length filter before any comparison
    match s.len() {
        2 if s.eq_ignore_ascii_case("no") => Some(false),
        3 if s.eq_ignore_ascii_case("yes") => Some(true),
        4 if s.eq_ignore_ascii_case("true") => Some(true),
        5 if s.eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    }
}

/// Parse the whole of `s` as a base-10 signed 64-bit integer.
///
/// `None` on leftover characters, an empty string or overflow.
#[inline]
pub fn parse_integer(s: &str) -> Option<i64> {
    s.parse::<i64>().ok()
}

/// Parse the whole of `s` as a finite decimal floating-point number.
///
/// Special values (`inf`, `nan`) and out-of-range magnitudes are rejected so
/// that they fall through to strings.
#[inline]
pub fn parse_float(s: &str) -> Option<f64> {
    // Rust accepts "inf"/"nan" spellings; require at least one digit
    if !s.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<f64>().ok().filter(|f| f.is_finite())
}

/// Infer the kind of a raw value. The input is trimmed first.
///
/// # Examples
///
/// ```
/// use tini_core::{infer_kind, ValueKind};
///
/// assert_eq!(infer_kind(""), ValueKind::Null);
/// assert_eq!(infer_kind("[1, 2]"), ValueKind::Array);
/// assert_eq!(infer_kind("Yes"), ValueKind::Boolean);
/// assert_eq!(infer_kind("-7"), ValueKind::Integer);
/// assert_eq!(infer_kind("3.14"), ValueKind::Float);
/// assert_eq!(infer_kind("hello"), ValueKind::String);
/// ```
pub fn infer_kind(raw: &str) -> ValueKind {
    let s = trim(raw);

    if s.is_empty() {
        return ValueKind::Null;
    }
    if is_array_literal(s) {
        return ValueKind::Array;
    }
    if parse_bool_literal(s).is_some() {
        return ValueKind::Boolean;
    }

    // Numbers start with a sign, a digit or a dot
    match s.as_bytes()[0] {
        b'+' | b'-' | b'.' | b'0'..=b'9' => {
            if parse_integer(s).is_some() {
                return ValueKind::Integer;
            }
            if parse_float(s).is_some() {
                return ValueKind::Float;
            }
        }
        _ => {}
    }

    ValueKind::String
}
