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

//! Centralized error message constructors for TINI.
//!
//! This module provides a single source of truth for all error messages,
//! keeping wording consistent between the parser, the store and the validator.

use crate::error::TiniError;

/// Longest prefix of user text echoed back in a message.
const ECHO_LIMIT: usize = 64;

/// Shorten user-supplied text for inclusion in a message.
fn echo(text: &str) -> String {
    if text.len() <= ECHO_LIMIT {
        return text.to_string();
    }
    let mut end = ECHO_LIMIT;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

// ==================== Line Errors ====================

/// Line has no `=` and is neither blank, comment nor section header.
pub fn missing_delimiter(line: usize) -> TiniError {
    TiniError::invalid_key(format!("invalid syntax at line {}: no '=' found", line), line)
}

/// Key part of a key-value line fails the identifier rule.
pub fn invalid_key(key: &str, line: usize) -> TiniError {
    TiniError::invalid_key(format!("invalid key '{}'", echo(key)), line).with_key(key)
}

/// Section header name fails the identifier rule.
pub fn invalid_section_header(name: &str, line: usize) -> TiniError {
    TiniError::invalid_section(format!("invalid section header '[{}]'", echo(name)), line)
}

/// Parser was fed a line after failing or finishing.
pub fn parser_closed(line: usize) -> TiniError {
    TiniError::closed("parser no longer accepts input", line)
}

// ==================== Store Errors ====================

/// Entry store is full.
pub fn too_many_entries(max: usize) -> TiniError {
    TiniError::capacity(
        format!("maximum number of configuration entries ({}) exceeded", max),
        0,
    )
}

// ==================== Validation Errors ====================

/// Stored key fails the identifier rule.
pub fn invalid_entry_key(key: &str, section: Option<&str>) -> TiniError {
    TiniError::validation(format!("invalid entry: key='{}'", echo(key)))
        .with_key(key)
        .with_section(section)
}

/// Stored section fails the identifier rule.
pub fn invalid_entry_section(key: &str, section: &str) -> TiniError {
    TiniError::validation(format!("invalid section: '{}'", echo(section)))
        .with_key(key)
        .with_section(Some(section))
}

/// String value longer than the configured maximum.
pub fn string_too_long(key: &str, section: Option<&str>, length: usize, max: usize) -> TiniError {
    TiniError::validation(format!(
        "invalid entry: key='{}': string length {} exceeds maximum {}",
        echo(key),
        length,
        max
    ))
    .with_key(key)
    .with_section(section)
}

/// Array element count outside `[1, max]`.
pub fn array_size_out_of_range(
    key: &str,
    section: Option<&str>,
    count: usize,
    max: usize,
) -> TiniError {
    TiniError::validation(format!(
        "invalid entry: key='{}': array has {} elements, allowed range is 1..={}",
        echo(key),
        count,
        max
    ))
    .with_key(key)
    .with_section(section)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TiniErrorKind;

    #[test]
    fn test_missing_delimiter() {
        let err = missing_delimiter(3);
        assert_eq!(err.kind, TiniErrorKind::InvalidKey);
        assert_eq!(err.line, 3);
        assert!(err.message.contains("no '=' found"));
    }

    #[test]
    fn test_invalid_key_records_key() {
        let err = invalid_key("9lives", 1);
        assert_eq!(err.key.as_deref(), Some("9lives"));
    }

    #[test]
    fn test_echo_truncates_long_text() {
        let long = "k".repeat(10_000);
        let err = invalid_key(&long, 1);
        assert!(err.message.len() < 100);
        assert!(err.message.contains("..."));
        // The full key is still available to callers
        assert_eq!(err.key.map(|k| k.len()), Some(10_000));
    }

    #[test]
    fn test_echo_respects_char_boundaries() {
        let text = "é".repeat(100);
        let shortened = echo(&text);
        assert!(shortened.ends_with("..."));
    }

    #[test]
    fn test_validation_messages() {
        let err = string_too_long("name", Some("server"), 2000, 1024);
        assert_eq!(err.kind, TiniErrorKind::Validation);
        assert_eq!(err.section.as_deref(), Some("server"));
        assert!(err.message.contains("2000"));

        let err = invalid_entry_section("port", "bad section");
        assert!(err.message.contains("bad section"));
    }
}
