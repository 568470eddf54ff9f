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

//! Lexical analysis for TINI.
//!
//! # Module Structure
//!
//! - [`tokens`] - Whitespace trimming and identifier validation
//! - [`line`] - Classification of a single line into blank, comment,
//!   section header, key-value or invalid
//!
//! # Examples
//!
//! ## Identifier Validation
//!
//! ```
//! use tini_core::lex::is_valid_identifier;
//!
//! assert!(is_valid_identifier("log.level"));
//! assert!(!is_valid_identifier("2fast"));
//! ```
//!
//! ## Line Classification
//!
//! ```
//! use tini_core::lex::{classify_line, Line};
//!
//! assert_eq!(classify_line("; note"), Line::Comment);
//! assert_eq!(
//!     classify_line("  port = 8080 "),
//!     Line::KeyValue { key: "port", value: "8080" }
//! );
//! ```

pub mod line;
pub mod tokens;

pub use line::{classify_line, is_blank_line, is_comment_line, Line};
pub use tokens::{is_space, is_valid_identifier, trim, MAX_IDENTIFIER_LENGTH};
