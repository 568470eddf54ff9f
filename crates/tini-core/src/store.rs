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

//! Ordered entry storage.

use crate::error::TiniResult;
use crate::errors::messages;
use crate::lex::is_valid_identifier;
use crate::limits::Limits;
use crate::value::Value;

/// One parsed key/value pair, optionally scoped to a section.
///
/// Entries produced by the parser always carry a valid key and section.
/// [`Entry::try_new`] enforces the same rule for hand-built entries;
/// [`Entry::new`] does not check, and such entries are unchecked until
/// passed through [`validate`](crate::validate).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    /// The key.
    pub key: String,
    /// The section in effect when the entry was parsed.
    pub section: Option<String>,
    /// The typed value.
    pub value: Value,
}

impl Entry {
    /// Create a new entry without checking the key or section.
    pub fn new(key: impl Into<String>, section: Option<&str>, value: Value) -> Self {
        Self {
            key: key.into(),
            section: section.map(str::to_string),
            value,
        }
    }

    /// Create a new entry, rejecting a key or section that is not an
    /// identifier.
    ///
    /// ```
    /// use tini_core::{Entry, Value};
    ///
    /// assert!(Entry::try_new("port", Some("server"), Value::Integer(80)).is_ok());
    /// assert!(Entry::try_new("bad key", None, Value::Null).is_err());
    /// ```
    pub fn try_new(key: impl Into<String>, section: Option<&str>, value: Value) -> TiniResult<Self> {
        let key = key.into();
        if !is_valid_identifier(&key) {
            return Err(messages::invalid_entry_key(&key, section));
        }
        if let Some(name) = section {
            if !is_valid_identifier(name) {
                return Err(messages::invalid_entry_section(&key, name));
            }
        }
        Ok(Self::new(key, section, value))
    }

    /// The section as a borrowed string.
    pub fn section(&self) -> Option<&str> {
        self.section.as_deref()
    }
}

/// Append-only, insertion-ordered collection of entries.
///
/// Duplicate keys are kept. Lookups return the earliest match.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryStore {
    entries: Vec<Entry>,
    max_entries: usize,
}

impl Default for EntryStore {
    fn default() -> Self {
        Self::with_max_entries(Limits::default().max_entries)
    }
}

impl EntryStore {
    /// Create an empty store with the default entry limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store holding at most `max_entries` entries.
    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_entries,
        }
    }

    /// Append an entry at the end.
    ///
    /// Fails with `CapacityExceeded` once the store is full; the store is
    /// left unchanged and the entry is dropped.
    pub fn append(&mut self, entry: Entry) -> TiniResult<()> {
        if self.entries.len() >= self.max_entries {
            return Err(messages::too_many_entries(self.max_entries));
        }
        self.entries.push(entry);
        Ok(())
    }

    /// First entry with `key`, in any section.
    pub fn lookup_first(&self, key: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// First entry with `key` in exactly `section`.
    ///
    /// `None` only matches entries that have no section.
    pub fn lookup_in_section(&self, section: Option<&str>, key: &str) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|e| e.key == key && e.section() == section)
    }

    /// All entries with `key`, in insertion order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Entry> + 'a {
        self.entries.iter().filter(move |e| e.key == key)
    }

    /// Distinct section names in order of first appearance.
    pub fn sections(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for name in self.entries.iter().filter_map(Entry::section) {
            if !seen.contains(&name) {
                seen.push(name);
            }
        }
        seen
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// All entries as a slice.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Consume the store, returning its entries.
    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a EntryStore {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for EntryStore {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TiniErrorKind;

    fn int(key: &str, section: Option<&str>, n: i64) -> Entry {
        Entry::new(key, section, Value::Integer(n))
    }

    // ==================== Entry ====================

    #[test]
    fn test_try_new_accepts_identifiers() {
        let entry = Entry::try_new("db.port", Some("server_1"), Value::Integer(5432)).unwrap();
        assert_eq!(entry, Entry::new("db.port", Some("server_1"), Value::Integer(5432)));
        assert!(Entry::try_new("_k", None, Value::Null).is_ok());
    }

    #[test]
    fn test_try_new_rejects_bad_key() {
        let err = Entry::try_new("1st", Some("s"), Value::Null).unwrap_err();
        assert_eq!(err.kind, TiniErrorKind::Validation);
        assert_eq!(err.key.as_deref(), Some("1st"));

        assert!(Entry::try_new("", None, Value::Null).is_err());
        assert!(Entry::try_new("k".repeat(257), None, Value::Null).is_err());
    }

    #[test]
    fn test_try_new_rejects_bad_section() {
        let err = Entry::try_new("k", Some("bad section"), Value::Null).unwrap_err();
        assert_eq!(err.kind, TiniErrorKind::Validation);
        assert_eq!(err.section.as_deref(), Some("bad section"));
    }

    // ==================== append ====================

    #[test]
    fn test_append_preserves_order() {
        let mut store = EntryStore::new();
        store.append(int("b", None, 1)).unwrap();
        store.append(int("a", None, 2)).unwrap();
        let keys: Vec<&str> = store.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(store.len(), 2);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_append_at_capacity() {
        let mut store = EntryStore::with_max_entries(2);
        store.append(int("a", None, 1)).unwrap();
        store.append(int("b", None, 2)).unwrap();

        let err = store.append(int("c", None, 3)).unwrap_err();
        assert_eq!(err.kind, TiniErrorKind::CapacityExceeded);
        assert_eq!(store.len(), 2);
        assert!(store.lookup_first("c").is_none());
    }

    #[test]
    fn test_default_capacity() {
        assert_eq!(EntryStore::new().max_entries(), 1000);
    }

    // ==================== lookup ====================

    #[test]
    fn test_lookup_first_wins() {
        let mut store = EntryStore::new();
        store.append(int("a", None, 1)).unwrap();
        store.append(int("a", None, 2)).unwrap();
        assert_eq!(store.lookup_first("a").unwrap().value, Value::Integer(1));
        assert_eq!(store.get_all("a").count(), 2);
    }

    #[test]
    fn test_lookup_first_ignores_section() {
        let mut store = EntryStore::new();
        store.append(int("port", Some("db"), 5432)).unwrap();
        store.append(int("port", Some("web"), 80)).unwrap();
        assert_eq!(store.lookup_first("port").unwrap().section(), Some("db"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut store = EntryStore::new();
        store.append(int("Key", Some("S"), 1)).unwrap();
        assert!(store.lookup_first("key").is_none());
        assert!(store.lookup_in_section(Some("s"), "Key").is_none());
        assert!(store.lookup_in_section(Some("S"), "Key").is_some());
    }

    #[test]
    fn test_lookup_in_section_none_matches_only_none() {
        let mut store = EntryStore::new();
        store.append(int("a", None, 1)).unwrap();
        store.append(int("a", Some("s"), 2)).unwrap();

        assert_eq!(
            store.lookup_in_section(None, "a").unwrap().value,
            Value::Integer(1)
        );
        assert_eq!(
            store.lookup_in_section(Some("s"), "a").unwrap().value,
            Value::Integer(2)
        );
        assert!(store.lookup_in_section(Some("t"), "a").is_none());
    }

    #[test]
    fn test_lookup_in_section_without_unsectioned_entry() {
        let mut store = EntryStore::new();
        store.append(int("a", Some("s"), 1)).unwrap();
        assert!(store.lookup_in_section(None, "a").is_none());
    }

    #[test]
    fn test_lookup_missing() {
        let store = EntryStore::new();
        assert!(store.lookup_first("nope").is_none());
        assert_eq!(store.get_all("nope").count(), 0);
    }

    // ==================== sections ====================

    #[test]
    fn test_sections_first_appearance_order() {
        let mut store = EntryStore::new();
        store.append(int("a", Some("web"), 1)).unwrap();
        store.append(int("b", None, 1)).unwrap();
        store.append(int("c", Some("db"), 1)).unwrap();
        store.append(int("d", Some("web"), 1)).unwrap();
        assert_eq!(store.sections(), vec!["web", "db"]);
    }

    // ==================== iteration ====================

    #[test]
    fn test_into_iterator() {
        let mut store = EntryStore::new();
        store.append(int("a", None, 1)).unwrap();
        let mut n = 0;
        for _ in &store {
            n += 1;
        }
        assert_eq!(n, 1);
        assert_eq!(store.entries().len(), 1);
        let owned: Vec<Entry> = store.into_iter().collect();
        assert_eq!(owned[0].key, "a");
    }
}
