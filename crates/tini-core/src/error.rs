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

//! Error types for TINI parsing, storage and validation.

use crate::value::ArrayKind;
use std::fmt;
use thiserror::Error;

/// The kind of error that occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TiniErrorKind {
    /// `[...]` header whose name is not a valid identifier.
    InvalidSectionHeader,
    /// Key fails the identifier rule, or the line has no `=` at all.
    InvalidKey,
    /// Raw value could not be converted into a [`Value`](crate::Value).
    ValueParse,
    /// Entry store or array element limit reached.
    CapacityExceeded,
    /// Post-parse validation rejected an entry.
    Validation,
    /// Input was fed to a parser that already failed or finished.
    Closed,
    /// The caller's line source failed while reading.
    Io,
}

impl fmt::Display for TiniErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSectionHeader => write!(f, "InvalidSectionHeader"),
            Self::InvalidKey => write!(f, "InvalidKey"),
            Self::ValueParse => write!(f, "ValueParseError"),
            Self::CapacityExceeded => write!(f, "CapacityExceeded"),
            Self::Validation => write!(f, "ValidationError"),
            Self::Closed => write!(f, "ParserClosed"),
            Self::Io => write!(f, "IoError"),
        }
    }
}

/// An error raised while parsing or validating a TINI document.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} at line {line}: {message}")]
pub struct TiniError {
    /// The kind of error.
    pub kind: TiniErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Line number (1-based, 0 when not tied to a line).
    pub line: usize,
    /// Offending key, when one is known.
    pub key: Option<String>,
    /// Offending or enclosing section, when one is known.
    pub section: Option<String>,
    /// Additional context added by callers.
    pub context: Option<String>,
}

impl TiniError {
    /// Create a new error.
    pub fn new(kind: TiniErrorKind, message: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
            key: None,
            section: None,
            context: None,
        }
    }

    /// Replace the line number.
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    /// Attach the offending key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Attach the section, if any.
    pub fn with_section(mut self, section: Option<&str>) -> Self {
        self.section = section.map(str::to_string);
        self
    }

    /// Add context information.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    // Convenience constructors for each error kind
    pub fn invalid_section(message: impl Into<String>, line: usize) -> Self {
        Self::new(TiniErrorKind::InvalidSectionHeader, message, line)
    }

    pub fn invalid_key(message: impl Into<String>, line: usize) -> Self {
        Self::new(TiniErrorKind::InvalidKey, message, line)
    }

    pub fn value_parse(message: impl Into<String>, line: usize) -> Self {
        Self::new(TiniErrorKind::ValueParse, message, line)
    }

    pub fn capacity(message: impl Into<String>, line: usize) -> Self {
        Self::new(TiniErrorKind::CapacityExceeded, message, line)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(TiniErrorKind::Validation, message, 0)
    }

    pub fn closed(message: impl Into<String>, line: usize) -> Self {
        Self::new(TiniErrorKind::Closed, message, line)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(TiniErrorKind::Io, message, 0)
    }

    /// Convert a value-level error raised while parsing `line`.
    pub fn from_value_error(err: ValueError, line: usize) -> Self {
        match err {
            ValueError::TooManyElements { .. } => Self::capacity(err.to_string(), line),
            _ => Self::value_parse(err.to_string(), line),
        }
    }
}

/// Result type for TINI operations.
pub type TiniResult<T> = Result<T, TiniError>;

/// Errors produced while converting raw text into a value.
///
/// These carry no line information; the parser stamps the line when it
/// converts them into a [`TiniError`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValueError {
    /// Text is not of the form `[...]`.
    #[error("not an array literal: '{0}'")]
    NotAnArray(String),

    /// Array literal with no non-empty elements.
    #[error("array literal has no elements")]
    EmptyArray,

    /// Array literal with more elements than allowed.
    #[error("array has {count} elements, maximum is {max}")]
    TooManyElements { count: usize, max: usize },

    /// Element does not parse under the kind fixed by the first element.
    #[error("array element {index} ('{text}') is not a valid {kind}")]
    ElementKindMismatch {
        index: usize,
        text: String,
        kind: ArrayKind,
    },

    /// Integer text out of range or malformed.
    #[error("invalid integer: '{0}'")]
    InvalidInteger(String),

    /// Float text malformed or not finite.
    #[error("invalid float: '{0}'")]
    InvalidFloat(String),

    /// Text outside the boolean literal set.
    #[error("invalid boolean: '{0}'")]
    InvalidBoolean(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== TiniErrorKind Display tests ====================

    #[test]
    fn test_error_kind_display() {
        assert_eq!(
            format!("{}", TiniErrorKind::InvalidSectionHeader),
            "InvalidSectionHeader"
        );
        assert_eq!(format!("{}", TiniErrorKind::InvalidKey), "InvalidKey");
        assert_eq!(format!("{}", TiniErrorKind::ValueParse), "ValueParseError");
        assert_eq!(
            format!("{}", TiniErrorKind::CapacityExceeded),
            "CapacityExceeded"
        );
        assert_eq!(format!("{}", TiniErrorKind::Validation), "ValidationError");
        assert_eq!(format!("{}", TiniErrorKind::Closed), "ParserClosed");
        assert_eq!(format!("{}", TiniErrorKind::Io), "IoError");
    }

    // ==================== TiniError Display tests ====================

    #[test]
    fn test_error_display() {
        let err = TiniError::invalid_key("no '=' found", 42);
        let msg = format!("{}", err);
        assert!(msg.contains("InvalidKey"));
        assert!(msg.contains("line 42"));
        assert!(msg.contains("no '=' found"));
    }

    #[test]
    fn test_error_builders() {
        let err = TiniError::validation("string too long")
            .with_key("name")
            .with_section(Some("server"))
            .with_line(7)
            .with_context("while validating");
        assert_eq!(err.kind, TiniErrorKind::Validation);
        assert_eq!(err.key.as_deref(), Some("name"));
        assert_eq!(err.section.as_deref(), Some("server"));
        assert_eq!(err.line, 7);
        assert_eq!(err.context.as_deref(), Some("while validating"));
    }

    #[test]
    fn test_with_section_none() {
        let err = TiniError::validation("x").with_section(None);
        assert_eq!(err.section, None);
    }

    // ==================== ValueError conversion ====================

    #[test]
    fn test_too_many_elements_maps_to_capacity() {
        let err = TiniError::from_value_error(
            ValueError::TooManyElements { count: 101, max: 100 },
            3,
        );
        assert_eq!(err.kind, TiniErrorKind::CapacityExceeded);
        assert_eq!(err.line, 3);
        assert!(err.message.contains("101"));
    }

    #[test]
    fn test_other_value_errors_map_to_value_parse() {
        let err = TiniError::from_value_error(ValueError::EmptyArray, 9);
        assert_eq!(err.kind, TiniErrorKind::ValueParse);

        let err = TiniError::from_value_error(
            ValueError::ElementKindMismatch {
                index: 1,
                text: "\"x\"".to_string(),
                kind: ArrayKind::Integer,
            },
            9,
        );
        assert_eq!(err.kind, TiniErrorKind::ValueParse);
        assert!(err.message.contains("element 1"));
        assert!(err.message.contains("integer"));
    }

    // ==================== Error trait tests ====================

    #[test]
    fn test_error_is_std_error() {
        fn accepts_error<E: std::error::Error>(_: E) {}
        accepts_error(TiniError::invalid_key("test", 1));
        accepts_error(ValueError::EmptyArray);
    }

    #[test]
    fn test_error_with_unicode_message() {
        let err = TiniError::value_parse("無効な値 🎉", 1);
        assert!(err.message.contains("🎉"));
    }
}
