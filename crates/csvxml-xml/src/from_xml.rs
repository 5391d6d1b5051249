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

//! XML to element tree conversion

use crate::error::{Result, XmlError};
use csvxml_core::{Declaration, Document, Element, TreeNode};
use quick_xml::events::{BytesDecl, BytesStart, Event};
use quick_xml::Reader;
use std::borrow::Cow;
use tracing::trace;

/// Default maximum element nesting depth.
pub const DEFAULT_MAX_RECURSION_DEPTH: usize = 100;

/// Configuration for XML import
#[derive(Debug, Clone)]
pub struct FromXmlConfig {
    /// Maximum element nesting depth (default: 100)
    pub max_recursion_depth: usize,
}

impl Default for FromXmlConfig {
    fn default() -> Self {
        Self {
            max_recursion_depth: DEFAULT_MAX_RECURSION_DEPTH,
        }
    }
}

/// Convert an XML string into a document.
///
/// Elements, text and comments are kept in document order. Attributes,
/// processing instructions and doctypes are skipped. CDATA sections become
/// plain text. Whitespace-only text is treated as indentation and dropped,
/// unless it is the sole content of its element.
///
/// # Examples
///
/// ```
/// use csvxml_xml::{from_xml, FromXmlConfig};
///
/// let xml = "<row>\n  <name>Ada</name>\n  <!--note-->\n</row>";
/// let doc = from_xml(xml, &FromXmlConfig::default()).unwrap();
///
/// let row = doc.find_element("row").unwrap();
/// assert_eq!(row.find_child("name").and_then(|n| n.text()), Some("Ada"));
/// assert_eq!(row.first_comment(), Some("note"));
/// ```
pub fn from_xml(xml: &str, config: &FromXmlConfig) -> Result<Document> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(false);

    let mut builder = TreeBuilder::new(config.max_recursion_depth);

    loop {
        let event = reader
            .read_event()
            .map_err(|e| XmlError::parse(reader.buffer_position(), e))?;
        match event {
            Event::Decl(decl) => builder.document.declaration = read_declaration(&decl)?,
            Event::Start(start) => builder.open(element_name(&start)?)?,
            Event::Empty(start) => {
                builder.check_depth(builder.stack.len() + 1)?;
                builder.close(Element::new(element_name(&start)?));
            }
            Event::End(_) => {
                let element = builder.pop();
                builder.close(element);
            }
            Event::Text(text) => {
                let text = text
                    .unescape()
                    .map_err(|e| XmlError::parse(reader.buffer_position(), e))?;
                builder.text(&text, false);
            }
            Event::CData(data) => {
                let text = std::str::from_utf8(&data)?;
                builder.text(text, true);
            }
            Event::Comment(comment) => {
                let comment = std::str::from_utf8(&comment)?.to_string();
                builder.node(TreeNode::Comment(comment));
            }
            Event::PI(_) | Event::DocType(_) => {}
            Event::Eof => break,
        }
    }

    if let Some(open) = builder.stack.last() {
        return Err(XmlError::parse(
            reader.buffer_position(),
            format!("unclosed element <{}>", open.name),
        ));
    }
    trace!(nodes = builder.document.nodes.len(), "parsed XML document");
    Ok(builder.document)
}

/// Incremental tree construction from a flat event stream.
struct TreeBuilder {
    document: Document,
    stack: Vec<Element>,
    max_depth: usize,
    pending_whitespace: Option<String>,
}

impl TreeBuilder {
    fn new(max_depth: usize) -> Self {
        Self {
            document: Document::default(),
            stack: Vec::new(),
            max_depth,
            pending_whitespace: None,
        }
    }

    fn check_depth(&self, depth: usize) -> Result<()> {
        if depth > self.max_depth {
            return Err(XmlError::RecursionLimitExceeded {
                max: self.max_depth,
                current: depth,
            });
        }
        Ok(())
    }

    fn open(&mut self, name: String) -> Result<()> {
        self.check_depth(self.stack.len() + 1)?;
        self.pending_whitespace = None;
        self.stack.push(Element::new(name));
        Ok(())
    }

    /// Pops the innermost open element. quick-xml rejects unbalanced end
    /// tags before they reach here, so the stack is never empty.
    fn pop(&mut self) -> Element {
        let mut element = self.stack.pop().unwrap_or_else(|| Element::new(""));
        if let Some(ws) = self.pending_whitespace.take() {
            if element.children.is_empty() {
                element.push(TreeNode::Text(ws));
            }
        }
        element
    }

    fn close(&mut self, element: Element) {
        self.node(TreeNode::Element(element));
    }

    fn node(&mut self, node: TreeNode) {
        self.pending_whitespace = None;
        match self.stack.last_mut() {
            Some(parent) => parent.push(node),
            None => self.document.nodes.push(node),
        }
    }

    fn text(&mut self, text: &str, verbatim: bool) {
        let Some(parent) = self.stack.last_mut() else {
            return;
        };
        if !verbatim && text.trim().is_empty() {
            self.pending_whitespace
                .get_or_insert_with(String::new)
                .push_str(text);
            return;
        }

        let mut content = self.pending_whitespace.take().unwrap_or_default();
        content.push_str(text);
        match parent.children.last_mut() {
            Some(TreeNode::Text(existing)) => existing.push_str(&content),
            _ => parent.push(TreeNode::Text(content)),
        }
    }
}

fn element_name(start: &BytesStart<'_>) -> Result<String> {
    Ok(std::str::from_utf8(start.name().as_ref())?.to_string())
}

fn decl_field(value: Cow<'_, [u8]>) -> Result<String> {
    Ok(std::str::from_utf8(&value)?.to_string())
}

fn read_declaration(decl: &BytesDecl<'_>) -> Result<Declaration> {
    let version = decl.version().map_err(|e| XmlError::parse(0, e))?;

    Ok(Declaration {
        version: decl_field(version)?,
        encoding: decl
            .encoding()
            .transpose()
            .map_err(|e| XmlError::parse(0, e))?
            .map(decl_field)
            .transpose()?,
        standalone: decl
            .standalone()
            .transpose()
            .map_err(|e| XmlError::parse(0, e))?
            .map(decl_field)
            .transpose()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(xml: &str) -> Document {
        from_xml(xml, &FromXmlConfig::default()).unwrap()
    }

    #[test]
    fn test_indentation_dropped() {
        let doc = parse("<row>\n  <a>1</a>\n  <b/>\n</row>");
        let row = doc.find_element("row").unwrap();
        assert_eq!(row.children.len(), 2);
        assert_eq!(row.find_child("a").and_then(Element::text), Some("1"));
        assert!(row.find_child("b").unwrap().children.is_empty());
    }

    #[test]
    fn test_significant_whitespace_kept() {
        let doc = parse("<row><a>  padded  </a><b> </b></row>");
        let row = doc.find_element("row").unwrap();
        assert_eq!(row.find_child("a").and_then(Element::text), Some("  padded  "));
        assert_eq!(row.find_child("b").and_then(Element::text), Some(" "));
    }

    #[test]
    fn test_entities_unescaped() {
        let doc = parse("<a>x &amp; y &lt;z&gt;</a>");
        assert_eq!(doc.find_element("a").and_then(Element::text), Some("x & y <z>"));
    }

    #[test]
    fn test_cdata_becomes_text() {
        let doc = parse("<a><![CDATA[<raw> & ]]>tail</a>");
        assert_eq!(doc.find_element("a").and_then(Element::text), Some("<raw> & tail"));
    }

    #[test]
    fn test_attributes_ignored() {
        let doc = parse(r#"<a id="7"><b>x</b></a>"#);
        let a = doc.find_element("a").unwrap();
        assert_eq!(a.children.len(), 1);
    }

    #[test]
    fn test_declaration_read() {
        let doc = parse(r#"<?xml version="1.1" encoding="ISO-8859-1"?><a/>"#);
        assert_eq!(doc.declaration.version, "1.1");
        assert_eq!(doc.declaration.encoding.as_deref(), Some("ISO-8859-1"));
        assert_eq!(doc.declaration.standalone, None);
    }

    #[test]
    fn test_missing_declaration_uses_default() {
        let doc = parse("<a/>");
        assert_eq!(doc.declaration, Declaration::default());
    }

    #[test]
    fn test_top_level_comments_and_siblings() {
        let doc = parse("<!--head--><row/><row/>");
        assert_eq!(doc.nodes.len(), 3);
        assert_eq!(doc.nodes[0].as_comment(), Some("head"));
        assert_eq!(doc.elements().count(), 2);
    }

    #[test]
    fn test_mismatched_end_tag() {
        let err = from_xml("<a><b></a>", &FromXmlConfig::default()).unwrap_err();
        assert!(matches!(err, XmlError::ParseError { .. }));
    }

    #[test]
    fn test_unclosed_element() {
        let err = from_xml("<a><b></b>", &FromXmlConfig::default()).unwrap_err();
        assert!(matches!(err, XmlError::ParseError { .. }));
    }

    #[test]
    fn test_depth_limit() {
        let config = FromXmlConfig {
            max_recursion_depth: 3,
        };
        assert!(from_xml("<a><b><c/></b></a>", &config).is_ok());
        let err = from_xml("<a><b><c><d/></c></b></a>", &config).unwrap_err();
        assert_eq!(err, XmlError::RecursionLimitExceeded { max: 3, current: 4 });
    }
}
