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

//! Parser driver for TINI documents.
//!
//! The [`Parser`] consumes one line at a time and appends an [`Entry`] to its
//! [`EntryStore`] for every valid key-value line. Section headers update the
//! current section, which tags every following entry until the next header.
//!
//! # Error Policy
//!
//! In **strict** mode (the default) the first malformed line is recorded as
//! the last error and moves the parser to [`ParserState::Failed`]. No further
//! input is accepted.
//!
//! In **lenient** mode malformed lines are skipped and parsing continues. The
//! one exception is a full entry store: the overflow is still recorded as the
//! last error, but the parser keeps running.
//!
//! # Limits
//!
//! - `max_array_elements`: elements per array literal (default: 100)
//! - `max_entries`: entries held by the store (default: 1000)
//! - `max_value_length`: string length, checked only by [`Parser::validate`]
//!   (default: 1024)

use crate::error::{TiniError, TiniErrorKind, TiniResult};
use crate::errors::messages;
use crate::lex::{classify_line, is_valid_identifier, Line};
use crate::limits::Limits;
use crate::store::{Entry, EntryStore};
use crate::validate::validate;
use crate::value_parser::parse_value;
use tracing::{debug, trace, warn};

/// Parsing options for configuring TINI parsing behavior.
///
/// ParseOptions provides both direct field access and a fluent builder API.
///
/// # Examples
///
/// ```
/// use tini_core::ParseOptions;
///
/// // Strict parsing with a small store
/// let opts = ParseOptions::builder()
///     .max_entries(64)
///     .strict(true)
///     .build();
///
/// // Lenient parsing that skips bad lines
/// let opts = ParseOptions::builder().lenient().build();
/// assert!(!opts.strict);
/// ```
///
/// # Fields
///
/// - `limits`: Capacity limits for the store, arrays and strings
/// - `strict`: When true, the first malformed line aborts the parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Capacity limits.
    pub limits: Limits,
    /// Abort on the first malformed line.
    pub strict: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            strict: true,
        }
    }
}

impl ParseOptions {
    /// Create a new builder for ParseOptions.
    pub fn builder() -> ParseOptionsBuilder {
        ParseOptionsBuilder::new()
    }
}

/// Builder for ergonomic construction of ParseOptions.
///
/// # Examples
///
/// ```
/// use tini_core::{Limits, ParseOptions};
///
/// let opts = ParseOptions::builder()
///     .max_array_elements(16)
///     .max_value_length(256)
///     .build();
/// assert_eq!(opts.limits.max_array_elements, 16);
///
/// let opts = ParseOptions::builder().limits(Limits::unlimited()).build();
/// assert_eq!(opts.limits, Limits::unlimited());
/// ```
#[derive(Debug, Clone)]
pub struct ParseOptionsBuilder {
    limits: Limits,
    strict: bool,
}

impl ParseOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            limits: Limits::default(),
            strict: true,
        }
    }

    /// Set strict mode.
    ///
    /// When `true`, the first malformed line fails the parse.
    /// When `false`, malformed lines are skipped.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Shorthand for `strict(false)`.
    pub fn lenient(self) -> Self {
        self.strict(false)
    }

    /// Set the maximum number of stored entries (default: 1000).
    pub fn max_entries(mut self, count: usize) -> Self {
        self.limits.max_entries = count;
        self
    }

    /// Set the maximum number of elements in an array literal (default: 100).
    pub fn max_array_elements(mut self, count: usize) -> Self {
        self.limits.max_array_elements = count;
        self
    }

    /// Set the maximum string length accepted by validation (default: 1024).
    pub fn max_value_length(mut self, length: usize) -> Self {
        self.limits.max_value_length = length;
        self
    }

    /// Replace all limits at once.
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Build the ParseOptions.
    pub fn build(self) -> ParseOptions {
        ParseOptions {
            limits: self.limits,
            strict: self.strict,
        }
    }
}

impl Default for ParseOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Lifecycle of a [`Parser`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParserState {
    /// Accepting input.
    Running,
    /// A strict-mode error stopped the parse.
    Failed,
    /// All input consumed.
    Done,
}

/// A single parse session.
///
/// Owns the entry store, the current section, the line counter and a
/// single last-error slot that each new recorded error overwrites.
///
/// # Examples
///
/// ```
/// use tini_core::{Parser, ParserState};
///
/// let mut parser = Parser::new();
/// parser.feed_line("[server]").unwrap();
/// parser.feed_line("port = 8080").unwrap();
/// parser.finish();
///
/// assert_eq!(parser.state(), ParserState::Done);
/// assert_eq!(parser.store().get_int("port", 0), 8080);
/// ```
#[derive(Debug, Clone)]
pub struct Parser {
    options: ParseOptions,
    store: EntryStore,
    section: Option<String>,
    line_number: usize,
    state: ParserState,
    last_error: Option<TiniError>,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Create a strict parser with default limits.
    pub fn new() -> Self {
        Self::with_options(ParseOptions::default())
    }

    /// Create a parser with custom options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            store: EntryStore::with_max_entries(options.limits.max_entries),
            options,
            section: None,
            line_number: 0,
            state: ParserState::Running,
            last_error: None,
        }
    }

    /// Process one line of input.
    ///
    /// Returns an error only when the line fails in strict mode, or when the
    /// parser is no longer [`ParserState::Running`].
    pub fn feed_line(&mut self, line: &str) -> TiniResult<()> {
        if self.state != ParserState::Running {
            return Err(messages::parser_closed(self.line_number));
        }
        self.line_number += 1;

        match self.process_line(line) {
            Ok(()) => Ok(()),
            Err(err) => self.handle_line_error(err),
        }
    }

    /// Feed every line, then [`finish`](Self::finish).
    ///
    /// Stops at the first strict-mode error.
    pub fn parse_lines<I, S>(&mut self, lines: I) -> TiniResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.feed_line(line.as_ref())?;
        }
        self.finish();
        Ok(())
    }

    /// Parse a whole document. Lines are split on `\n` or `\r\n`.
    pub fn parse_str(&mut self, input: &str) -> TiniResult<()> {
        self.parse_lines(input.lines())
    }

    /// Mark the input as complete. A failed parser stays failed.
    pub fn finish(&mut self) {
        if self.state == ParserState::Running {
            self.state = ParserState::Done;
            debug!(
                entries = self.store.len(),
                lines = self.line_number,
                "parse complete"
            );
        }
    }

    /// Run the validator over the current store.
    ///
    /// A failure is also recorded as the last error. The parser state is not
    /// changed.
    pub fn validate(&mut self) -> TiniResult<()> {
        validate(&self.store, &self.options.limits).map_err(|err| {
            self.last_error = Some(err.clone());
            err
        })
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// The entries parsed so far.
    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    /// Consume the parser, keeping the entries.
    pub fn into_store(self) -> EntryStore {
        self.store
    }

    /// Section applied to the next key-value line.
    pub fn current_section(&self) -> Option<&str> {
        self.section.as_deref()
    }

    /// Number of lines fed so far, including blank and comment lines.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn state(&self) -> ParserState {
        self.state
    }

    /// The most recently recorded error, if any.
    pub fn last_error(&self) -> Option<&TiniError> {
        self.last_error.as_ref()
    }

    /// Message of the most recently recorded error, if any.
    pub fn last_error_message(&self) -> Option<&str> {
        self.last_error.as_ref().map(|e| e.message.as_str())
    }

    fn process_line(&mut self, line: &str) -> TiniResult<()> {
        let n = self.line_number;

        match classify_line(line) {
            Line::Blank | Line::Comment => Ok(()),
            Line::Section(name) => {
                if !is_valid_identifier(name) {
                    return Err(messages::invalid_section_header(name, n));
                }
                debug!(line = n, section = %name, "entering section");
                self.section = Some(name.to_string());
                Ok(())
            }
            Line::Invalid => Err(messages::missing_delimiter(n)),
            Line::KeyValue { key, value } => {
                if !is_valid_identifier(key) {
                    return Err(messages::invalid_key(key, n).with_section(self.section.as_deref()));
                }

                let value = parse_value(value, self.options.limits.max_array_elements)
                    .map_err(|e| {
                        TiniError::from_value_error(e, n)
                            .with_key(key)
                            .with_section(self.section.as_deref())
                    })?;

                trace!(line = n, key = %key, kind = %value.kind(), "parsed entry");
                let entry = Entry::new(key, self.section.as_deref(), value);
                self.store.append(entry).map_err(|e| {
                    e.with_line(n)
                        .with_key(key)
                        .with_section(self.section.as_deref())
                })
            }
        }
    }

    fn handle_line_error(&mut self, err: TiniError) -> TiniResult<()> {
        if self.options.strict {
            warn!(line = err.line, kind = %err.kind, "aborting parse: {}", err.message);
            self.state = ParserState::Failed;
            self.last_error = Some(err.clone());
            return Err(err);
        }

        if err.kind == TiniErrorKind::CapacityExceeded {
            warn!(line = err.line, key = ?err.key, "dropping entry: {}", err.message);
            self.last_error = Some(err);
        } else {
            debug!(
                line = self.line_number,
                kind = %err.kind,
                "skipping line: {}",
                err.message
            );
        }
        Ok(())
    }
}

/// Parse a TINI document with default options (strict mode).
///
/// # Examples
///
/// ```
/// use tini_core::{parse, TiniErrorKind};
///
/// let store = parse("[server]\nhost = \"localhost\"").unwrap();
/// assert_eq!(store.get_string("host", ""), "localhost");
///
/// let err = parse("foo bar").unwrap_err();
/// assert_eq!(err.kind, TiniErrorKind::InvalidKey);
/// ```
pub fn parse(input: &str) -> TiniResult<EntryStore> {
    parse_with_options(input, ParseOptions::default())
}

/// Parse a TINI document with custom options.
pub fn parse_with_options(input: &str, options: ParseOptions) -> TiniResult<EntryStore> {
    let mut parser = Parser::with_options(options);
    parser.parse_str(input)?;
    Ok(parser.into_store())
}
