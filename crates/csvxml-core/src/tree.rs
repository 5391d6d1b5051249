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

//! Owned tree model shared by the forward and inverse mappers.
//!
//! A [`Document`] is a declaration plus an ordered list of top-level nodes.
//! Every [`Element`] exclusively owns its children in document order; there are
//! no parent links, so the tree can be built bottom-up by `&mut` descent and
//! read back by plain `&` traversal.

use serde::{Deserialize, Serialize};

/// XML declaration metadata carried through to the tree sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Declaration {
    /// Document version, `"1.0"` unless overridden.
    #[serde(default = "default_version")]
    pub version: String,
    /// Declared encoding, `"utf-8"` unless overridden.
    #[serde(default = "default_encoding")]
    pub encoding: Option<String>,
    /// Optional `standalone` attribute.
    #[serde(default)]
    pub standalone: Option<String>,
}

fn default_version() -> String {
    "1.0".to_string()
}

fn default_encoding() -> Option<String> {
    Some("utf-8".to_string())
}

impl Default for Declaration {
    fn default() -> Self {
        Self {
            version: default_version(),
            encoding: default_encoding(),
            standalone: None,
        }
    }
}

/// A single node of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    /// Named element owning nested nodes.
    Element(Element),
    /// Character data.
    Text(String),
    /// Comment payload, stored verbatim.
    Comment(String),
}

impl TreeNode {
    /// Returns the element if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            TreeNode::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the text payload if this node is a text node.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TreeNode::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Returns the comment payload if this node is a comment.
    pub fn as_comment(&self) -> Option<&str> {
        match self {
            TreeNode::Comment(c) => Some(c),
            _ => None,
        }
    }

    /// True if this node is an element with the given name.
    pub fn is_element_named(&self, name: &str) -> bool {
        matches!(self, TreeNode::Element(e) if e.name == name)
    }
}

/// A named element and its ordered children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    /// Tag name.
    pub name: String,
    /// Children in document order.
    pub children: Vec<TreeNode>,
}

impl Element {
    /// Create an empty element.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Create an element whose only child is a text node.
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: vec![TreeNode::Text(text.into())],
        }
    }

    /// Append a child element and return a mutable reference to it.
    pub fn push_element(&mut self, element: Element) -> &mut Element {
        push_element(&mut self.children, element)
    }

    /// Append an arbitrary node.
    pub fn push(&mut self, node: TreeNode) {
        self.children.push(node);
    }

    /// First direct child element with the given name.
    pub fn find_child(&self, name: &str) -> Option<&Element> {
        find_element(&self.children, name)
    }

    /// Index of the first direct child element with the given name.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.children.iter().position(|n| n.is_element_named(name))
    }

    /// Iterator over direct child elements with the given name.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        elements_named(&self.children, name)
    }

    /// Payload of the first child when it is a text node.
    pub fn text(&self) -> Option<&str> {
        self.children.first().and_then(TreeNode::as_text)
    }

    /// Payload of the first comment among the direct children.
    pub fn first_comment(&self) -> Option<&str> {
        self.children.iter().find_map(TreeNode::as_comment)
    }
}

/// A complete tree: declaration plus top-level nodes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    /// Declaration written ahead of the nodes.
    pub declaration: Declaration,
    /// Top-level nodes in document order.
    pub nodes: Vec<TreeNode>,
}

impl Document {
    /// Create an empty document with the given declaration.
    pub fn new(declaration: Declaration) -> Self {
        Self {
            declaration,
            nodes: Vec::new(),
        }
    }

    /// First top-level element with the given name.
    pub fn find_element(&self, name: &str) -> Option<&Element> {
        find_element(&self.nodes, name)
    }

    /// Iterator over top-level elements.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.nodes.iter().filter_map(TreeNode::as_element)
    }
}

/// First element named `name` in a node list.
pub fn find_element<'a>(nodes: &'a [TreeNode], name: &str) -> Option<&'a Element> {
    nodes
        .iter()
        .filter_map(TreeNode::as_element)
        .find(|e| e.name == name)
}

/// Every element named `name` in a node list, in order.
pub fn elements_named<'a>(
    nodes: &'a [TreeNode],
    name: &'a str,
) -> impl Iterator<Item = &'a Element> {
    nodes
        .iter()
        .filter_map(TreeNode::as_element)
        .filter(move |e| e.name == name)
}

/// Append `element` to `nodes` and hand back a reference to the stored copy.
pub fn push_element(nodes: &mut Vec<TreeNode>, element: Element) -> &mut Element {
    nodes.push(TreeNode::Element(element));
    match nodes.last_mut() {
        Some(TreeNode::Element(e)) => e,
        _ => unreachable!("element was just pushed"),
    }
}
