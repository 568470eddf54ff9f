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

//! Post-parse structural validation.
//!
//! Validation is opt-in and separate from parsing. It walks the store in
//! order and stops at the first entry that breaks a rule.
//!
//! Checked per entry, in this order:
//!
//! 1. The key is a valid identifier
//! 2. A string value is at most `max_value_length` bytes
//! 3. An array value has between 1 and `max_array_elements` elements
//! 4. The section, if any, is a valid identifier

use crate::error::TiniResult;
use crate::errors::messages;
use crate::lex::is_valid_identifier;
use crate::limits::Limits;
use crate::store::{Entry, EntryStore};
use crate::value::Value;
use tracing::debug;

/// Validate every entry in `store` against `limits`.
///
/// # Examples
///
/// ```
/// use tini_core::{parse, validate, Limits};
///
/// let store = parse("[server]\nname = \"api\"").unwrap();
/// assert!(validate(&store, &Limits::default()).is_ok());
///
/// let tight = Limits { max_value_length: 2, ..Limits::default() };
/// assert!(validate(&store, &tight).is_err());
/// ```
pub fn validate(store: &EntryStore, limits: &Limits) -> TiniResult<()> {
    for entry in store {
        if let Err(err) = validate_entry(entry, limits) {
            debug!(
                key = %entry.key,
                section = ?entry.section(),
                "validation failed: {}",
                err.message
            );
            return Err(err);
        }
    }
    Ok(())
}

/// Validate a single entry.
pub fn validate_entry(entry: &Entry, limits: &Limits) -> TiniResult<()> {
    let key = entry.key.as_str();
    let section = entry.section();

    if !is_valid_identifier(key) {
        return Err(messages::invalid_entry_key(key, section));
    }

    match &entry.value {
        Value::String(s) if s.len() > limits.max_value_length => {
            return Err(messages::string_too_long(
                key,
                section,
                s.len(),
                limits.max_value_length,
            ));
        }
        Value::Array(a) if a.is_empty() || a.len() > limits.max_array_elements => {
            return Err(messages::array_size_out_of_range(
                key,
                section,
                a.len(),
                limits.max_array_elements,
            ));
        }
        _ => {}
    }

    if let Some(name) = section {
        if !is_valid_identifier(name) {
            return Err(messages::invalid_entry_section(key, name));
        }
    }

    Ok(())
}
