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

//! Error context helpers.
//!
//! Extension methods for `Result<T, TiniError>` and `Result<T, io::Error>`
//! that attach a description of what the caller was doing when the error
//! happened.
//!
//! # Examples
//!
//! ## Basic Context
//!
//! ```rust
//! use tini::{parse, EntryStore, TiniError, TiniResultExt};
//!
//! fn load_config(path: &str) -> Result<EntryStore, TiniError> {
//!     let content = std::fs::read_to_string(path)
//!         .context(format!("reading {}", path))?;
//!
//!     parse(&content).context(format!("while parsing config file {}", path))
//! }
//! ```
//!
//! ## Lazy Context
//!
//! ```rust
//! use tini::{parse, TiniResultExt};
//!
//! let content = "port = 8080";
//! let store = parse(content)
//!     .with_context(|| format!("parsing {} bytes", content.len()))
//!     .unwrap();
//! assert_eq!(store.get_int("port", 0), 8080);
//! ```
//!
//! ## Chaining Context
//!
//! The most recent context comes first:
//!
//! ```rust
//! use tini::{parse, TiniResultExt};
//!
//! let err = parse("no delimiter here")
//!     .context("in defaults.tini")
//!     .context("loading service config")
//!     .unwrap_err();
//! assert_eq!(
//!     err.context.as_deref(),
//!     Some("loading service config; in defaults.tini")
//! );
//! ```

use crate::TiniError;
use std::fmt;
use std::io;

/// Extension trait for adding context to results that fail with a
/// [`TiniError`], or that can be converted into one.
///
/// Context is stored in the error's `context` field; the original message
/// is left untouched.
///
/// - `context()`: evaluated immediately, for plain strings
/// - `with_context()`: evaluated only on the error path
/// - `map_err_to_tini()`: explicit conversion of a foreign error
pub trait TiniResultExt<T> {
    /// The error type for this Result.
    type ErrorType;

    /// Add context to an error.
    ///
    /// Context is prepended to any existing context:
    ///
    /// ```rust
    /// use tini::{parse, TiniResultExt};
    ///
    /// let result = parse("[bad section]")
    ///     .context("in section A")
    ///     .context("while loading config");
    ///
    /// if let Err(e) = result {
    ///     assert!(e.context.unwrap().contains("in section A"));
    /// }
    /// ```
    fn context<C>(self, context: C) -> Result<T, TiniError>
    where
        C: fmt::Display;

    /// Add context to an error using a closure.
    ///
    /// The closure only runs when there is an error.
    ///
    /// ```rust
    /// use tini::{parse, TiniResultExt};
    ///
    /// fn process_file(path: &str, content: &str) -> Result<(), tini::TiniError> {
    ///     parse(content)
    ///         .with_context(|| format!("in file {} ({} bytes)", path, content.len()))?;
    ///     Ok(())
    /// }
    /// ```
    fn with_context<C, F>(self, f: F) -> Result<T, TiniError>
    where
        C: fmt::Display,
        F: FnOnce() -> C;

    /// Convert the error with a caller-supplied function.
    ///
    /// ```rust
    /// use tini::{TiniError, TiniResultExt};
    /// use std::fs;
    ///
    /// fn read_config(path: &str) -> Result<String, TiniError> {
    ///     fs::read_to_string(path)
    ///         .map_err_to_tini(|e| TiniError::io(format!("failed to read {}: {}", path, e)))
    /// }
    /// ```
    fn map_err_to_tini<F>(self, f: F) -> Result<T, TiniError>
    where
        F: FnOnce(Self::ErrorType) -> TiniError,
        Self: Sized;
}

impl<T> TiniResultExt<T> for Result<T, TiniError> {
    type ErrorType = TiniError;

    fn context<C>(self, context: C) -> Result<T, TiniError>
    where
        C: fmt::Display,
    {
        self.map_err(|e| add_context_to_error(e, context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, TiniError>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| add_context_to_error(e, f().to_string()))
    }

    fn map_err_to_tini<F>(self, f: F) -> Result<T, TiniError>
    where
        F: FnOnce(Self::ErrorType) -> TiniError,
    {
        self.map_err(f)
    }
}

impl<T> TiniResultExt<T> for Result<T, io::Error> {
    type ErrorType = io::Error;

    fn context<C>(self, context: C) -> Result<T, TiniError>
    where
        C: fmt::Display,
    {
        self.map_err(|e| TiniError::io(e.to_string()).with_context(context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, TiniError>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| TiniError::io(e.to_string()).with_context(f().to_string()))
    }

    fn map_err_to_tini<F>(self, f: F) -> Result<T, TiniError>
    where
        F: FnOnce(Self::ErrorType) -> TiniError,
    {
        self.map_err(f)
    }
}

/// Prepend `new_context` to the error's context, separated by `"; "`.
fn add_context_to_error(mut error: TiniError, new_context: String) -> TiniError {
    if new_context.is_empty() {
        return error;
    }

    error.context = Some(match error.context {
        Some(existing) => format!("{}; {}", new_context, existing),
        None => new_context,
    });

    error
}
