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

//! Quick start: parse a configuration, query it, and handle errors.
//!
//! Run with: `cargo run --example quick_start -p tini`

use tini::{parse, parse_lenient, validate_str, ParseOptions, TiniResultExt};

const CONFIG: &str = r#"
; service configuration
[server]
host = "localhost"
port = 8080
debug = true
tags = [1, 2, 3]

[limits]
ratio = 0.75
names = ["alpha", "beta"]
"#;

fn main() {
    let store = match parse(CONFIG).context("parsing embedded config") {
        Ok(store) => store,
        Err(e) => {
            eprintln!("error: {} ({})", e, e.context.as_deref().unwrap_or_default());
            return;
        }
    };

    println!("{} entries in sections {:?}", store.len(), store.sections());
    for entry in &store {
        println!(
            "  [{}] {} = {} ({})",
            entry.section().unwrap_or("-"),
            entry.key,
            entry.value,
            entry.value.kind()
        );
    }

    println!("host  = {}", store.get_string("host", "0.0.0.0"));
    println!("port  = {}", store.get_int("port", 80));
    println!("ratio = {}", store.get_float("ratio", 1.0));

    // Strict parsing stops at the first bad line
    if let Err(e) = parse("[server]\nport 8080") {
        println!("strict: {}", e);
    }

    // Lenient parsing skips it
    if let Ok(store) = parse_lenient("[server]\nport 8080\nhost = example.org") {
        println!("lenient: {} entries", store.len());
    }

    // Validation is a separate pass
    let tight = ParseOptions::builder().max_value_length(4).build();
    if let Err(e) = validate_str(CONFIG, tight) {
        println!("validation: {}", e);
    }
}
