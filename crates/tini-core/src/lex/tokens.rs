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

//! Token-level helpers: whitespace trimming and identifier validation.

/// Maximum identifier length in bytes, for keys and section names.
pub const MAX_IDENTIFIER_LENGTH: usize = 256;

/// ASCII whitespace as understood by the format.
///
/// Unlike [`u8::is_ascii_whitespace`] this includes vertical tab (0x0B).
#[inline]
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Strip leading and trailing ASCII whitespace.
///
/// Returns a subslice of the input, so any length is handled without an
/// intermediate buffer. All-whitespace input yields `""`.
///
/// # Examples
///
/// ```
/// use tini_core::lex::trim;
///
/// assert_eq!(trim("  key = value\t"), "key = value");
/// assert_eq!(trim(" \t "), "");
/// ```
#[inline]
pub fn trim(s: &str) -> &str {
    s.trim_matches(is_space)
}

/// Checks if a string is a valid identifier: `[A-Za-z_][A-Za-z0-9_.]*`,
/// at most [`MAX_IDENTIFIER_LENGTH`] bytes.
///
/// Keys and section names share this rule. The check is a single pass over
/// the bytes with no allocation.
///
/// # Examples
///
/// ```
/// use tini_core::lex::is_valid_identifier;
///
/// assert!(is_valid_identifier("server"));
/// assert!(is_valid_identifier("_private"));
/// assert!(is_valid_identifier("db.pool.size"));
/// assert!(is_valid_identifier("Port8080"));
///
/// assert!(!is_valid_identifier(""));
/// assert!(!is_valid_identifier("8080port"));  // No leading digit
/// assert!(!is_valid_identifier(".hidden"));   // No leading dot
/// assert!(!is_valid_identifier("my-key"));    // No hyphens
/// ```
#[inline]
pub fn is_valid_identifier(s: &str) -> bool {
    let bytes = s.as_bytes();
    let Some((&first, rest)) = bytes.split_first() else {
        return false;
    };
    if bytes.len() > MAX_IDENTIFIER_LENGTH {
        return false;
    }
    if !first.is_ascii_alphabetic() && first != b'_' {
        return false;
    }
    rest.iter()
        .all(|&b| b.is_ascii_alphanumeric() || b == b'_' || b == b'.')
}
