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

//! Capacity limits for TINI parsing and validation.

/// Configurable capacity limits.
///
/// `max_array_elements` and `max_entries` are enforced while parsing.
/// `max_value_length` is only checked by the validator, so long strings
/// are always stored intact and rejected (if at all) in the opt-in pass.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Limits {
    /// Maximum string value length in bytes, checked by the validator (default: 1024).
    pub max_value_length: usize,
    /// Maximum elements in an array literal (default: 100).
    pub max_array_elements: usize,
    /// Maximum entries held by the store (default: 1000).
    pub max_entries: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_value_length: 1024,
            max_array_elements: 100,
            max_entries: 1000,
        }
    }
}

impl Limits {
    /// Create limits with no restrictions (for testing).
    pub fn unlimited() -> Self {
        Self {
            max_value_length: usize::MAX,
            max_array_elements: usize::MAX,
            max_entries: usize::MAX,
        }
    }
}
