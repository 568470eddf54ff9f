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

//! Comprehensive tests for the tini facade crate.
//!
//! Tests the re-exported types, convenience functions and modules:
//! - Core parsing and types
//! - Incremental parser use
//! - Lexer utilities
//! - Validation
//! - Feature-gated serde support

use std::io::Cursor;
use tini::{
    from_reader, infer_kind, lex, parse, parse_lenient, parse_value, parse_with_options, unquote,
    validate, validate_str, ArrayKind, Entry, EntryStore, Limits, ParseOptions, Parser,
    ParserState, TiniErrorKind, Value, ValueError, ValueKind, VERSION,
};

const SAMPLE: &str = "\
# Application settings
name = \"inventory\"
version = 3

[server]
host = \"0.0.0.0\"
port = 8080
timeout = 2.5
tls = no
origins = [\"a.example\", \"b.example\"]

[database]
url = postgres://db/inv?sslmode=require
pool = 16
replicas = [1, 2, 3]
";

// =============================================================================
// Constants Tests
// =============================================================================

#[test]
fn test_version_constant() {
    assert!(VERSION.starts_with("1."));
}

#[test]
fn test_identifier_length_constant() {
    assert_eq!(lex::MAX_IDENTIFIER_LENGTH, 256);
}

// =============================================================================
// Parsing Tests
// =============================================================================

#[test]
fn test_parse_sample() {
    let store = parse(SAMPLE).unwrap();
    assert_eq!(store.len(), 10);
    assert_eq!(store.sections(), vec!["server", "database"]);

    assert_eq!(store.get_string("name", ""), "inventory");
    assert_eq!(store.get_int("version", 0), 3);
    assert_eq!(store.get_float("timeout", 0.0), 2.5);
    assert!(!store.get_bool("tls", true));
    assert_eq!(
        store.get_string("url", ""),
        "postgres://db/inv?sslmode=require"
    );

    let origins = store.get_array("origins").unwrap();
    assert_eq!(origins.kind(), ArrayKind::String);
    assert_eq!(origins.get(1), Some(&Value::string("b.example")));
}

#[test]
fn test_parse_sample_sections() {
    let store = parse(SAMPLE).unwrap();
    let top: Vec<&str> = store
        .iter()
        .filter(|e| e.section().is_none())
        .map(|e| e.key.as_str())
        .collect();
    assert_eq!(top, vec!["name", "version"]);

    assert_eq!(
        store.get_value_in_section(Some("database"), "pool"),
        Some(&Value::Integer(16))
    );
    assert_eq!(store.get_value_in_section(Some("server"), "pool"), None);
}

#[test]
fn test_parse_lenient_vs_strict() {
    let doc = "good = 1\nthis is junk\nalso = 2";
    assert!(parse(doc).is_err());

    let store = parse_lenient(doc).unwrap();
    assert_eq!(store.len(), 2);
}

#[test]
fn test_from_reader() {
    let store = from_reader(Cursor::new(SAMPLE), ParseOptions::default()).unwrap();
    assert_eq!(store, parse(SAMPLE).unwrap());
}

#[test]
fn test_parse_with_custom_limits() {
    let opts = ParseOptions::builder()
        .max_entries(3)
        .max_array_elements(2)
        .build();

    let err = parse_with_options("a = [1, 2, 3]", opts.clone()).unwrap_err();
    assert_eq!(err.kind, TiniErrorKind::CapacityExceeded);

    let err = parse_with_options("a = 1\nb = 2\nc = 3\nd = 4", opts).unwrap_err();
    assert_eq!(err.kind, TiniErrorKind::CapacityExceeded);
    assert_eq!(err.line, 4);
}

// =============================================================================
// Incremental Parser Tests
// =============================================================================

#[test]
fn test_incremental_feed() {
    let mut parser = Parser::new();
    for line in SAMPLE.lines().take(3) {
        parser.feed_line(line).unwrap();
    }
    assert_eq!(parser.store().len(), 2);
    assert_eq!(parser.state(), ParserState::Running);
    assert_eq!(parser.line_number(), 3);

    // Caller may stop supplying lines at any point
    parser.finish();
    assert_eq!(parser.state(), ParserState::Done);
    let store: EntryStore = parser.into_store();
    assert_eq!(store.get_int("version", 0), 3);
}

#[test]
fn test_parser_error_message() {
    let mut parser = Parser::new();
    assert!(parser.parse_str("[server]\nport 8080").is_err());
    let message = parser.last_error_message().unwrap();
    assert!(message.contains("line 2"));
    assert!(message.contains("no '=' found"));
}

// =============================================================================
// Value Tests
// =============================================================================

#[test]
fn test_value_functions() {
    assert_eq!(infer_kind("No"), ValueKind::Boolean);
    assert_eq!(parse_value("-12", 100).unwrap(), Value::Integer(-12));
    assert_eq!(unquote("\"q\""), "q");
    assert_eq!(
        parse_value("[2.5, x]", 100).unwrap_err(),
        ValueError::ElementKindMismatch {
            index: 1,
            text: "x".to_string(),
            kind: ArrayKind::Float,
        }
    );
}

#[test]
fn test_value_display() {
    let store = parse(SAMPLE).unwrap();
    assert_eq!(store.get_value("replicas").unwrap().to_string(), "[1, 2, 3]");
    assert_eq!(
        store.get_value("origins").unwrap().to_string(),
        "[\"a.example\", \"b.example\"]"
    );
}

// =============================================================================
// Lexer Utility Tests
// =============================================================================

#[test]
fn test_lex_reexports() {
    assert_eq!(lex::trim("\t x \x0B"), "x");
    assert!(lex::is_valid_identifier("a.b_c"));
    assert!(lex::is_blank_line("   "));
    assert!(lex::is_comment_line("; c"));
    assert_eq!(lex::classify_line("[s]"), lex::Line::Section("s"));
}

// =============================================================================
// Validation Tests
// =============================================================================

#[test]
fn test_validate_sample() {
    let store = parse(SAMPLE).unwrap();
    assert!(validate(&store, &Limits::default()).is_ok());
    assert!(validate_str(SAMPLE, ParseOptions::default()).is_ok());
}

#[test]
fn test_validate_hand_built_store() {
    let mut store = EntryStore::new();
    store
        .append(Entry::new("fine", None, Value::Integer(1)))
        .unwrap();
    store
        .append(Entry::new("key", Some("bad section"), Value::Null))
        .unwrap();

    let err = validate(&store, &Limits::default()).unwrap_err();
    assert_eq!(err.kind, TiniErrorKind::Validation);
    assert_eq!(err.section.as_deref(), Some("bad section"));

    // The checked constructor refuses the same entry up front
    let err = Entry::try_new("key", Some("bad section"), Value::Null).unwrap_err();
    assert_eq!(err.kind, TiniErrorKind::Validation);
}

// =============================================================================
// Serde Tests
// =============================================================================

#[cfg(feature = "serde")]
#[test]
fn test_entry_serializes_to_json() {
    let store = parse("[s]\nk = [1, 2]").unwrap();
    let json = serde_json::to_value(&store.entries()[0]).unwrap();
    assert_eq!(json["key"], "k");
    assert_eq!(json["section"], "s");

    let back: Entry = serde_json::from_value(json).unwrap();
    assert_eq!(&back, &store.entries()[0]);
}

#[cfg(feature = "serde")]
#[test]
fn test_array_deserialize_checks_contents() {
    use serde_json::json;
    use tini::Array;

    let ok: Array =
        serde_json::from_value(json!({"kind": "Integer", "items": [{"Integer": 1}]})).unwrap();
    assert_eq!(ok.len(), 1);
    assert_eq!(ok.kind(), ArrayKind::Integer);

    let empty = serde_json::from_value::<Array>(json!({"kind": "Integer", "items": []}));
    assert!(empty.unwrap_err().to_string().contains("no elements"));

    let mixed = serde_json::from_value::<Array>(json!({
        "kind": "Integer",
        "items": [{"Integer": 1}, {"String": "x"}]
    }));
    assert!(mixed.is_err());

    let nested = serde_json::from_value::<Value>(json!({
        "Array": {"kind": "String", "items": []}
    }));
    assert!(nested.is_err());
}

#[cfg(feature = "serde")]
#[test]
fn test_array_serde_round_trip() {
    let store = parse("k = [1.5, 2]").unwrap();
    let array = store.get_array("k").unwrap();
    let json = serde_json::to_string(array).unwrap();
    let back: tini::Array = serde_json::from_str(&json).unwrap();
    assert_eq!(&back, array);
}

#[cfg(feature = "serde")]
#[test]
fn test_limits_serde_round_trip() {
    let limits = Limits {
        max_entries: 5,
        ..Limits::default()
    };
    let json = serde_json::to_value(&limits).unwrap();
    assert_eq!(json["max_entries"], 5);
    assert_eq!(json["max_array_elements"], 100);

    let back: Limits = serde_json::from_value(json).unwrap();
    assert_eq!(back, limits);
}
