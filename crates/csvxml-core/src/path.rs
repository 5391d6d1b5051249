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

//! Path lookup and creation over element chains.
//!
//! Both walks match children by exact name and always take the first match,
//! so repeated lookups of the same path from the same node land on the same
//! element.

use crate::tree::{Element, TreeNode};

/// Walk `path` from `root`, creating any missing element on the way.
///
/// Existing children are reused (first match wins); missing ones are appended
/// as empty elements. An empty path returns `root` itself.
///
/// ```
/// use csvxml_core::{path::resolve_or_create, Element};
///
/// let mut row = Element::new("row");
/// resolve_or_create(&mut row, &["meta".to_string(), "info".to_string()]);
/// resolve_or_create(&mut row, &["meta".to_string(), "info".to_string()]);
///
/// assert_eq!(row.children.len(), 1);
/// assert_eq!(row.find_child("meta").unwrap().children.len(), 1);
/// ```
pub fn resolve_or_create<'a>(root: &'a mut Element, path: &[String]) -> &'a mut Element {
    let mut current = root;
    for name in path {
        current = child_or_insert(current, name);
    }
    current
}

/// Walk `path` from `root` without creating anything.
///
/// Returns `None` as soon as a step is missing.
pub fn resolve_existing<'a>(root: &'a Element, path: &[String]) -> Option<&'a Element> {
    path.iter()
        .try_fold(root, |current, name| current.find_child(name))
}

/// First child element named `name`, appended first if there is none.
pub fn child_or_insert<'a>(parent: &'a mut Element, name: &str) -> &'a mut Element {
    match parent.position_of(name) {
        Some(index) => match &mut parent.children[index] {
            TreeNode::Element(element) => element,
            _ => unreachable!("position_of only matches elements"),
        },
        None => parent.push_element(Element::new(name)),
    }
}
