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

//! Tree to rows.
//!
//! The inverse mapper reads each group element back into one row, using the
//! same rules the forward mapper wrote it with. Reading never modifies the
//! tree, and missing structure reads as an empty string.
//!
//! Two forward features do not survive the trip back:
//!
//! - a column with several rules (or an `add` with several nested rules) is
//!   read through its first rule only
//! - `ignoreStart` has no inverse; every group element yields a row
//!
//! ```
//! use csvxml_core::{forward, inverse, MappingRule, MappingSpecification};
//!
//! let spec = MappingSpecification::new(
//!     "row",
//!     vec![
//!         MappingRule::element("id").into(),
//!         MappingRule::list("tags").with_delimiter(";").into(),
//!     ],
//! );
//! let records = vec![Ok::<_, String>(vec!["1", "a;b"]), Ok(vec!["2", "c"])];
//! let doc = forward::map_records(&spec, records).unwrap();
//!
//! let rows = inverse::map_document(&spec, &doc).unwrap();
//! assert_eq!(rows, vec![vec!["1", "a;b"], vec!["2", "c"]]);
//! ```

use crate::error::{MappingError, MappingResult};
use crate::mapping::{MappingRule, MappingSpecification, RuleKind, RuleSet};
use crate::path::resolve_existing;
use crate::tree::{elements_named, Document, Element, TreeNode};
use tracing::{debug, warn};

/// One recovered row: exactly one string per column.
pub type Row = Vec<String>;

/// Recover every row of `document`, in document order.
///
/// With a `baseElement`, group elements are looked up among the children of
/// the first top-level element of that name; if there is none the document
/// holds no rows.
///
/// # Errors
///
/// Configuration errors from any rule abort the pass.
pub fn map_document(spec: &MappingSpecification, document: &Document) -> MappingResult<Vec<Row>> {
    let nodes: &[TreeNode] = match &spec.base_element {
        Some(base) => match document.find_element(base) {
            Some(wrapper) => &wrapper.children,
            None => {
                warn!(base_element = %base, "base element not found, no rows recovered");
                return Ok(Vec::new());
            }
        },
        None => &document.nodes,
    };

    let rows = elements_named(nodes, &spec.element_name)
        .map(|group| map_group(spec, group))
        .collect::<MappingResult<Vec<_>>>()?;

    debug!(element = %spec.element_name, rows = rows.len(), "inverse pass complete");
    Ok(rows)
}

/// Recover the row held by a single group element.
pub fn map_group(spec: &MappingSpecification, group: &Element) -> MappingResult<Row> {
    spec.data.iter().map(|rules| retrieve(group, rules)).collect()
}

/// Read the value a column entry stores below `elm`.
///
/// Rule sequences collapse to their first rule; an empty sequence reads as
/// an empty string.
pub fn retrieve(elm: &Element, rules: &RuleSet) -> MappingResult<String> {
    match rules.first_rule() {
        Some(rule) => retrieve_rule(elm, rule),
        None => Ok(String::new()),
    }
}

/// Read the value a single rule stores below `elm`.
///
/// A path that does not resolve reads as an empty string before the rule
/// kind is looked at, so an unknown kind only fails where its path exists.
pub fn retrieve_rule(elm: &Element, rule: &MappingRule) -> MappingResult<String> {
    let Some(target) = resolve_existing(elm, rule.path.segments()) else {
        return Ok(String::new());
    };

    let value = match &rule.kind {
        RuleKind::Element => target
            .find_child(rule.required_element_name()?)
            .and_then(Element::text)
            .unwrap_or_default()
            .to_string(),
        RuleKind::List => {
            // Items sit in the named container, or directly below the path.
            let items = target.find_child(rule.required_element_name()?).unwrap_or(target);
            items
                .children_named(rule.list_element_name())
                .map(|item| item.text().unwrap_or_default())
                .collect::<Vec<_>>()
                .join(rule.delimiter())
        }
        RuleKind::Add => match target.find_child(rule.required_element_name()?) {
            Some(container) => match rule.add.as_deref() {
                Some(nested) => retrieve(container, nested)?,
                None => String::new(),
            },
            None => String::new(),
        },
        RuleKind::Comment => target.first_comment().unwrap_or_default().to_string(),
        RuleKind::Unknown(kind) => return Err(MappingError::UnknownRuleType(kind.clone())),
    };
    Ok(value)
}
