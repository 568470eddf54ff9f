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

//! Line classification.
//!
//! A line is classified on its own, without any parser state. The parser is
//! responsible for applying section headers and validating key syntax.

use crate::lex::tokens::trim;

/// Classification of a single input line.
///
/// All borrowed parts are already trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty or whitespace only.
    Blank,
    /// First non-space character is `#` or `;`.
    Comment,
    /// `[name]` spanning the whole trimmed line; holds the trimmed name.
    Section(&'a str),
    /// `key = value`, split on the first `=`.
    KeyValue { key: &'a str, value: &'a str },
    /// Anything else (no `=` delimiter).
    Invalid,
}

/// Check if a line is blank (empty or whitespace only).
pub fn is_blank_line(line: &str) -> bool {
    trim(line).is_empty()
}

/// Check if a line is a comment (first non-whitespace is `#` or `;`).
pub fn is_comment_line(line: &str) -> bool {
    matches!(trim(line).as_bytes().first(), Some(b'#' | b';'))
}

/// Classify one line of input.
///
/// # Examples
///
/// ```
/// use tini_core::lex::{classify_line, Line};
///
/// assert_eq!(classify_line("  [server] "), Line::Section("server"));
/// assert_eq!(
///     classify_line("url = a=b"),
///     Line::KeyValue { key: "url", value: "a=b" }
/// );
/// assert_eq!(classify_line("[unterminated"), Line::Invalid);
/// ```
pub fn classify_line(line: &str) -> Line<'_> {
    let t = trim(line);
    let bytes = t.as_bytes();

    match bytes.first() {
        None => return Line::Blank,
        Some(b'#' | b';') => return Line::Comment,
        Some(b'[') if bytes.len() >= 2 && bytes[bytes.len() - 1] == b']' => {
            return Line::Section(trim(&t[1..t.len() - 1]));
        }
        _ => {}
    }

    match memchr::memchr(b'=', bytes) {
        Some(pos) => Line::KeyValue {
            key: trim(&t[..pos]),
            value: trim(&t[pos + 1..]),
        },
        None => Line::Invalid,
    }
}
