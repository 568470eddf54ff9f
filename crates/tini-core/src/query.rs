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

//! Typed getters over an [`EntryStore`].
//!
//! Every getter resolves the key with [`EntryStore::lookup_first`], so the
//! earliest entry wins regardless of section. A value of the wrong kind is
//! treated like a missing key: the caller's default is returned and no
//! conversion is attempted.
//!
//! # Examples
//!
//! ```
//! use tini_core::parse;
//!
//! let store = parse("port = 8080\nname = \"api\"").unwrap();
//! assert_eq!(store.get_int("port", 0), 8080);
//! assert_eq!(store.get_string("name", "none"), "api");
//! assert_eq!(store.get_string("port", "none"), "none");
//! assert!(!store.get_bool("debug", false));
//! ```

use crate::store::EntryStore;
use crate::value::{Array, Value};

impl EntryStore {
    /// Value of the first entry with `key`.
    pub fn get_value(&self, key: &str) -> Option<&Value> {
        self.lookup_first(key).map(|e| &e.value)
    }

    /// Value of the first entry with `key` in exactly `section`.
    pub fn get_value_in_section(&self, section: Option<&str>, key: &str) -> Option<&Value> {
        self.lookup_in_section(section, key).map(|e| &e.value)
    }

    /// String value of `key`, or `default`.
    pub fn get_string<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get_value(key).and_then(Value::as_str).unwrap_or(default)
    }

    /// Integer value of `key`, or `default`.
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.get_value(key).and_then(Value::as_int).unwrap_or(default)
    }

    /// Float value of `key`, or `default`. Integer entries do not qualify.
    pub fn get_float(&self, key: &str, default: f64) -> f64 {
        self.get_value(key).and_then(Value::as_float).unwrap_or(default)
    }

    /// Boolean value of `key`, or `default`.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get_value(key).and_then(Value::as_bool).unwrap_or(default)
    }

    /// Array value of `key`, if the first entry with `key` holds one.
    pub fn get_array(&self, key: &str) -> Option<&Array> {
        self.get_value(key).and_then(Value::as_array)
    }
}
