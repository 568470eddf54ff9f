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

//! Core parser and data model for TINI, a typed INI configuration format.
//!
//! A TINI document is a sequence of lines. Each line is blank, a comment
//! (`#` or `;`), a section header (`[name]`) or a `key = value` pair. Values
//! are typed by their textual form:
//!
//! | Text                 | Value                      |
//! |----------------------|----------------------------|
//! | *(empty)*            | [`Value::Null`]            |
//! | `[1, 2, 3]`          | [`Value::Array`]           |
//! | `true` `no` `YES`    | [`Value::Boolean`]         |
//! | `8080` `-7`          | [`Value::Integer`]         |
//! | `3.5` `1e3`          | [`Value::Float`]           |
//! | anything else        | [`Value::String`]          |
//!
//! # Example
//!
//! ```
//! use tini_core::{parse, Value};
//!
//! let input = "\
//! [server]
//! host = \"localhost\"
//! port = 8080
//! debug = true
//! tags = [1, 2, 3]
//! ";
//!
//! let store = parse(input).unwrap();
//! assert_eq!(store.len(), 4);
//! assert_eq!(store.get_string("host", ""), "localhost");
//! assert_eq!(store.get_int("port", 0), 8080);
//! assert!(store.get_bool("debug", false));
//! assert_eq!(store.get_array("tags").map(|a| a.len()), Some(3));
//! assert!(store.iter().all(|e| e.section() == Some("server")));
//! ```
//!
//! # Lexical Analysis
//!
//! The [`lex`] module holds the line classifier and the token helpers
//! (trimming and identifier validation). See its documentation for details.

mod error;
pub mod errors;
mod inference;
pub mod lex;
mod limits;
mod parser;
mod query;
mod store;
mod validate;
mod value;
mod value_parser;

pub use error::{TiniError, TiniErrorKind, TiniResult, ValueError};
pub use inference::infer_kind;
pub use limits::Limits;
pub use parser::{parse, parse_with_options, ParseOptions, ParseOptionsBuilder, Parser, ParserState};
pub use store::{Entry, EntryStore};
pub use validate::{validate, validate_entry};
pub use value::{Array, ArrayKind, Value, ValueKind};
pub use value_parser::{parse_array, parse_scalar, parse_value, unquote};
