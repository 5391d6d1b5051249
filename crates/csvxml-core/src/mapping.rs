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

//! The mapping specification: one rule set per column.
//!
//! Specifications are plain JSON documents and are decoded once into immutable
//! values. Several fields accept either a single item or a list on the wire
//! (`path`, `remove`, column entries, `add`), so this module also hosts the
//! small "one or many" helpers those fields share.
//!
//! ```
//! use csvxml_core::MappingSpecification;
//!
//! let spec = MappingSpecification::from_json(r#"{
//!     "baseElement": "people",
//!     "elementName": "person",
//!     "ignoreStart": 1,
//!     "data": [
//!         { "type": "element", "elementName": "name" },
//!         { "type": "list", "elementName": "tags", "delimiter": ";" },
//!         { "type": "comment" }
//!     ]
//! }"#).unwrap();
//!
//! assert_eq!(spec.column_count(), 3);
//! assert_eq!(spec.base_element.as_deref(), Some("people"));
//! ```

use crate::error::{MappingError, MappingResult};
use crate::format::FormattingOptions;
use crate::tree::Declaration;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Read;

/// Default child name for list items.
pub const DEFAULT_LIST_ELEMENT_NAME: &str = "li";

/// Default list delimiter.
pub const DEFAULT_DELIMITER: &str = ",";

/// A wire value that is either a single item or a list of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    /// A single item.
    One(T),
    /// Several items, in order.
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Iterate the items in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            OneOrMany::One(item) => std::slice::from_ref(item).iter(),
            OneOrMany::Many(items) => items.iter(),
        }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        match self {
            OneOrMany::One(_) => 1,
            OneOrMany::Many(items) => items.len(),
        }
    }

    /// True when a list form holds no items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Chain of element names below the node a rule is applied to.
///
/// On the wire this is either a list of names or a single string of
/// comma-separated names; whitespace inside the string form is ignored, so
/// `"meta, info"` and `["meta", "info"]` are the same path.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "OneOrMany<String>", into = "Vec<String>")]
pub struct RulePath(Vec<String>);

impl RulePath {
    /// Build a path from its segments.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Parse the comma-separated string form.
    pub fn parse(spec: &str) -> Self {
        let compact: String = spec.chars().filter(|c| !c.is_whitespace()).collect();
        Self(
            compact
                .split(',')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// Path segments in order.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// True for the empty path.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<OneOrMany<String>> for RulePath {
    fn from(value: OneOrMany<String>) -> Self {
        match value {
            OneOrMany::One(s) => RulePath::parse(&s),
            OneOrMany::Many(v) => RulePath(v),
        }
    }
}

/// `null` reads as the empty path.
fn nullable_path<'de, D>(deserializer: D) -> Result<RulePath, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<OneOrMany<String>>::deserialize(deserializer)?
        .map(RulePath::from)
        .unwrap_or_default())
}

impl From<RulePath> for Vec<String> {
    fn from(path: RulePath) -> Self {
        path.0
    }
}

/// Kind of a mapping rule, from its `type` field.
///
/// Unknown names are kept rather than rejected at load time; the mappers
/// report them as [`MappingError::UnknownRuleType`] when the rule is
/// dispatched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RuleKind {
    /// A single element holding the formatted value.
    Element,
    /// A container element with one child per delimited piece.
    List,
    /// A shared container that nested rules write into.
    Add,
    /// A comment holding the raw value.
    Comment,
    /// Anything else.
    Unknown(String),
}

impl RuleKind {
    /// Wire name of the kind.
    pub fn as_str(&self) -> &str {
        match self {
            RuleKind::Element => "element",
            RuleKind::List => "list",
            RuleKind::Add => "add",
            RuleKind::Comment => "comment",
            RuleKind::Unknown(name) => name,
        }
    }
}

impl From<String> for RuleKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "element" => RuleKind::Element,
            "list" => RuleKind::List,
            "add" => RuleKind::Add,
            "comment" => RuleKind::Comment,
            _ => RuleKind::Unknown(value),
        }
    }
}

impl From<RuleKind> for String {
    fn from(kind: RuleKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rule, governing how a column maps to and from tree structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingRule {
    /// Rule kind.
    #[serde(rename = "type")]
    pub kind: RuleKind,
    /// Elements between the current node and the rule's output.
    #[serde(
        default,
        deserialize_with = "nullable_path",
        skip_serializing_if = "RulePath::is_empty"
    )]
    pub path: RulePath,
    /// Name of the element the rule writes or reads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_name: Option<String>,
    /// Item element name for lists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_element_name: Option<String>,
    /// Piece separator for lists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,
    /// Value formatting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<FormattingOptions>,
    /// Nested rules for `add`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add: Option<Box<RuleSet>>,
}

impl MappingRule {
    fn with_kind(kind: RuleKind, element_name: Option<String>) -> Self {
        Self {
            kind,
            path: RulePath::default(),
            element_name,
            list_element_name: None,
            delimiter: None,
            options: None,
            add: None,
        }
    }

    /// An `element` rule.
    pub fn element(element_name: impl Into<String>) -> Self {
        Self::with_kind(RuleKind::Element, Some(element_name.into()))
    }

    /// A `list` rule.
    pub fn list(element_name: impl Into<String>) -> Self {
        Self::with_kind(RuleKind::List, Some(element_name.into()))
    }

    /// An `add` rule writing `nested` into a shared `element_name` container.
    pub fn add(element_name: impl Into<String>, nested: impl Into<RuleSet>) -> Self {
        let mut rule = Self::with_kind(RuleKind::Add, Some(element_name.into()));
        rule.add = Some(Box::new(nested.into()));
        rule
    }

    /// A `comment` rule.
    pub fn comment() -> Self {
        Self::with_kind(RuleKind::Comment, None)
    }

    /// Set the path.
    pub fn with_path<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.path = RulePath::new(segments);
        self
    }

    /// Set the list delimiter.
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    /// Set the list item element name.
    pub fn with_list_element_name(mut self, name: impl Into<String>) -> Self {
        self.list_element_name = Some(name.into());
        self
    }

    /// Set the formatting options.
    pub fn with_options(mut self, options: FormattingOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// The element name, required by every kind but `comment`.
    pub fn required_element_name(&self) -> MappingResult<&str> {
        self.element_name
            .as_deref()
            .ok_or_else(|| MappingError::MissingElementName {
                kind: self.kind.to_string(),
            })
    }

    /// List item element name, `li` when unset or empty.
    pub fn list_element_name(&self) -> &str {
        self.list_element_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_LIST_ELEMENT_NAME)
    }

    /// List delimiter, `,` when unset or empty.
    pub fn delimiter(&self) -> &str {
        self.delimiter
            .as_deref()
            .filter(|delimiter| !delimiter.is_empty())
            .unwrap_or(DEFAULT_DELIMITER)
    }

    /// True when an empty value should leave the tree untouched.
    pub fn omits_missing(&self) -> bool {
        self.options
            .as_ref()
            .is_some_and(FormattingOptions::omits_missing)
    }
}

/// A column entry: one rule, or an ordered sequence of rule sets.
///
/// The forward mapper applies every rule of a sequence to the same value. The
/// inverse mapper only ever reads through the first one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleSet {
    /// Several rule sets applied in order.
    Many(Vec<RuleSet>),
    /// A single rule.
    One(MappingRule),
}

impl RuleSet {
    /// Collapse nested sequences to their first rule.
    ///
    /// Returns `None` when a sequence on the way is empty.
    pub fn first_rule(&self) -> Option<&MappingRule> {
        let mut current = self;
        loop {
            match current {
                RuleSet::One(rule) => return Some(rule),
                RuleSet::Many(sets) => current = sets.first()?,
            }
        }
    }
}

impl From<MappingRule> for RuleSet {
    fn from(rule: MappingRule) -> Self {
        RuleSet::One(rule)
    }
}

impl From<Vec<MappingRule>> for RuleSet {
    fn from(rules: Vec<MappingRule>) -> Self {
        RuleSet::Many(rules.into_iter().map(RuleSet::One).collect())
    }
}

/// A complete mapping specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingSpecification {
    /// Name of the per-record group element.
    pub element_name: String,
    /// Optional single element wrapping every group element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_element: Option<String>,
    /// Declaration written by the tree sink.
    #[serde(default)]
    pub declaration: Declaration,
    /// Leading records to discard in the forward direction.
    #[serde(default)]
    pub ignore_start: usize,
    /// Column rules, in column order.
    pub data: Vec<RuleSet>,
}

impl MappingSpecification {
    /// Create a specification with default declaration and no base element.
    pub fn new(element_name: impl Into<String>, data: Vec<RuleSet>) -> Self {
        Self {
            element_name: element_name.into(),
            base_element: None,
            declaration: Declaration::default(),
            ignore_start: 0,
            data,
        }
    }

    /// Set the wrapping base element.
    pub fn with_base_element(mut self, name: impl Into<String>) -> Self {
        self.base_element = Some(name.into());
        self
    }

    /// Set how many leading records are skipped.
    pub fn with_ignore_start(mut self, count: usize) -> Self {
        self.ignore_start = count;
        self
    }

    /// Decode a specification from JSON text.
    pub fn from_json(json: &str) -> MappingResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode a specification from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> MappingResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Number of columns, fixed for the lifetime of the specification.
    pub fn column_count(&self) -> usize {
        self.data.len()
    }
}
