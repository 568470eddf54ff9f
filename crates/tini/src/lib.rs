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

//! # TINI - Typed INI
//!
//! TINI is a line-oriented configuration format: INI sections and
//! `key = value` pairs, with values typed by their textual form.
//!
//! ## Quick Start
//!
//! ```rust
//! use tini::parse;
//!
//! let config = r#"
//! ; service settings
//! [server]
//! host = "localhost"
//! port = 8080
//! debug = yes
//! tags = [web, api]
//! "#;
//!
//! let store = parse(config).expect("Failed to parse");
//!
//! assert_eq!(store.get_string("host", "0.0.0.0"), "localhost");
//! assert_eq!(store.get_int("port", 80), 8080);
//! assert!(store.get_bool("debug", false));
//! assert_eq!(store.get_array("tags").map(|a| a.len()), Some(2));
//! ```
//!
//! ## Features
//!
//! - **Sections**: `[name]` tags every following entry until the next header
//! - **Typed values**: null, boolean, integer, float, string and array
//! - **Strict or lenient**: abort on the first bad line, or skip it
//! - **Duplicate keys**: kept in order; lookups return the first
//! - **Validation**: optional pass over key syntax and value sizes
//!
//! ## Modules
//!
//! - [`lex`]: Line classification and identifier rules
//! - [`errors`]: Error message constructors

pub use tini_core::{
    // Functions
    infer_kind,
    parse,
    parse_array,
    parse_value,
    parse_with_options,
    unquote,
    validate_entry,
    // Values
    Array,
    ArrayKind,
    Value,
    ValueKind,
    // Store
    Entry,
    EntryStore,
    // Parser
    Limits,
    ParseOptions,
    ParseOptionsBuilder,
    Parser,
    ParserState,
    // Errors
    TiniError,
    TiniErrorKind,
    TiniResult,
    ValueError,
};

mod error_ext;
pub use error_ext::TiniResultExt;

pub mod lex {
    //! Lexical analysis utilities
    pub use tini_core::lex::{
        classify_line, is_blank_line, is_comment_line, is_space, is_valid_identifier, trim, Line,
        MAX_IDENTIFIER_LENGTH,
    };
}

pub mod errors {
    //! Error message constructors
    pub use tini_core::errors::messages;
}

use std::io::BufRead;

/// Parse a TINI document, skipping malformed lines.
///
/// # Examples
///
/// ```rust
/// use tini::parse_lenient;
///
/// let store = parse_lenient("oops\nport = 8080").unwrap();
/// assert_eq!(store.len(), 1);
/// ```
#[inline]
pub fn parse_lenient(input: &str) -> TiniResult<EntryStore> {
    parse_with_options(input, ParseOptions::builder().lenient().build())
}

/// Parse lines from a reader.
///
/// Read failures become [`TiniErrorKind::Io`] errors carrying the line
/// number in their context.
///
/// # Examples
///
/// ```rust
/// use tini::{from_reader, ParseOptions};
/// use std::io::Cursor;
///
/// let input = Cursor::new("[db]\nport = 5432\n");
/// let store = from_reader(input, ParseOptions::default()).unwrap();
/// assert_eq!(store.get_int("port", 0), 5432);
/// ```
pub fn from_reader<R: BufRead>(reader: R, options: ParseOptions) -> TiniResult<EntryStore> {
    let mut parser = Parser::with_options(options);
    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("reading line {}", index + 1))?;
        parser.feed_line(&line)?;
    }
    parser.finish();
    Ok(parser.into_store())
}

/// Parse a document and run validation with the same limits.
///
/// # Examples
///
/// ```rust
/// use tini::{validate_str, ParseOptions};
///
/// assert!(validate_str("name = \"ok\"", ParseOptions::default()).is_ok());
///
/// let tight = ParseOptions::builder().max_value_length(1).build();
/// assert!(validate_str("name = \"too long\"", tight).is_err());
/// ```
pub fn validate_str(input: &str, options: ParseOptions) -> TiniResult<()> {
    let mut parser = Parser::with_options(options);
    parser.parse_str(input)?;
    parser.validate()
}

/// Validate an entry store against limits.
#[inline]
pub fn validate(store: &EntryStore, limits: &Limits) -> TiniResult<()> {
    tini_core::validate(store, limits)
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
