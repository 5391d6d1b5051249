// Dweve CSVXML - Declarative CSV/XML Mapping
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

//! Value formatting applied to text written into the tree.
//!
//! The steps run in a fixed order and each one sees the output of the step
//! before it:
//!
//! 1. `removeWhitespace` strips every whitespace character
//! 2. `prefix` is prepended
//! 3. each `remove` entry is deleted, in declaration order
//! 4. each `replace` pair is applied, in declaration order
//!
//! # Examples
//!
//! ```
//! use csvxml_core::FormattingOptions;
//!
//! let options: FormattingOptions =
//!     serde_json::from_str(r#"{"remove": "a", "replace": {"a": "Z"}}"#).unwrap();
//!
//! // "a" is already gone by the time `replace` runs.
//! assert_eq!(options.apply("abc"), "bc");
//! ```

use crate::mapping::OneOrMany;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Per-rule formatting options.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattingOptions {
    /// Delete all whitespace characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_whitespace: Option<bool>,
    /// Text prepended to the value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Literal substrings to delete.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove: Option<OneOrMany<String>>,
    /// Literal search/replacement pairs, kept in document order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replace: Option<IndexMap<String, String>>,
    /// Skip the rule entirely when the value is empty (forward only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub omit_if_missing: Option<bool>,
}

impl FormattingOptions {
    /// Run the formatting pipeline over `text`.
    pub fn apply(&self, text: &str) -> String {
        let mut out = if self.remove_whitespace.unwrap_or(false) {
            text.chars().filter(|c| !c.is_whitespace()).collect()
        } else {
            text.to_string()
        };

        if let Some(prefix) = &self.prefix {
            out.insert_str(0, prefix);
        }

        if let Some(remove) = &self.remove {
            for needle in remove.iter() {
                if !needle.is_empty() {
                    out = out.replace(needle.as_str(), "");
                }
            }
        }

        if let Some(replace) = &self.replace {
            for (search, replacement) in replace {
                out = out.replace(search.as_str(), replacement);
            }
        }

        out
    }

    /// Whether an empty value should skip the rule.
    pub fn omits_missing(&self) -> bool {
        self.omit_if_missing.unwrap_or(false)
    }
}

/// Format `text` with optional options; `None` is the identity.
pub fn apply(text: &str, options: Option<&FormattingOptions>) -> String {
    match options {
        Some(options) => options.apply(text),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(json: &str) -> FormattingOptions {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_no_options_is_identity() {
        assert_eq!(apply("  a b ", None), "  a b ");
        assert_eq!(FormattingOptions::default().apply("  a b "), "  a b ");
    }

    #[test]
    fn test_remove_whitespace() {
        let opts = options(r#"{"removeWhitespace": true}"#);
        assert_eq!(opts.apply(" a\tb\nc "), "abc");
        let opts = options(r#"{"removeWhitespace": false}"#);
        assert_eq!(opts.apply(" a "), " a ");
    }

    #[test]
    fn test_prefix_applied_after_whitespace_removal() {
        let opts = options(r#"{"removeWhitespace": true, "prefix": "id "}"#);
        assert_eq!(opts.apply(" 4 2 "), "id 42");
    }

    #[test]
    fn test_remove_single_and_many() {
        let opts = options(r#"{"remove": "-"}"#);
        assert_eq!(opts.apply("1-2-3"), "123");

        let opts = options(r#"{"remove": ["(", ")", " "]}"#);
        assert_eq!(opts.apply("(555) 123 4567"), "5551234567");
    }

    #[test]
    fn test_remove_sees_prefix() {
        let opts = options(r#"{"prefix": "x-", "remove": "-"}"#);
        assert_eq!(opts.apply("1"), "x1");
    }

    #[test]
    fn test_remove_runs_before_replace() {
        let opts = options(r#"{"remove": "a", "replace": {"a": "Z"}}"#);
        assert_eq!(opts.apply("abc"), "bc");
    }

    #[test]
    fn test_replace_pairs_apply_in_declared_order() {
        let opts = options(r#"{"replace": {"a": "b", "b": "c"}}"#);
        assert_eq!(opts.apply("ab"), "cc");

        let opts = options(r#"{"replace": {"b": "c", "a": "b"}}"#);
        assert_eq!(opts.apply("ab"), "bc");
    }

    #[test]
    fn test_replace_all_occurrences() {
        let opts = options(r#"{"replace": {".": ","}}"#);
        assert_eq!(opts.apply("1.000.000"), "1,000,000");
    }

    #[test]
    fn test_apply_does_not_touch_options() {
        let opts = options(r#"{"prefix": "p", "remove": ["x"]}"#);
        let before = opts.clone();
        let _ = opts.apply("xyz");
        assert_eq!(opts, before);
    }

    #[test]
    fn test_omits_missing_default() {
        assert!(!FormattingOptions::default().omits_missing());
        assert!(options(r#"{"omitIfMissing": true}"#).omits_missing());
    }
}
