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

//! Element tree to XML conversion

use crate::error::{Result, XmlError};
use csvxml_core::{Document, Element, TreeNode};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;

/// Configuration for XML output
#[derive(Debug, Clone)]
pub struct ToXmlConfig {
    /// Pretty-print with indentation
    pub pretty: bool,
    /// Indentation string (e.g., "  " or "\t")
    pub indent: String,
    /// Emit the document's declaration
    pub include_declaration: bool,
}

impl Default for ToXmlConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
            include_declaration: true,
        }
    }
}

/// Convert a document to an XML string.
///
/// Text is escaped; comment payloads are written verbatim. An element with
/// no children is written in self-closing form.
///
/// # Examples
///
/// ```
/// use csvxml_core::{Document, Element, TreeNode};
/// use csvxml_xml::{to_xml, ToXmlConfig};
///
/// let mut doc = Document::default();
/// doc.nodes.push(TreeNode::Element(Element::with_text("name", "Ada & co")));
///
/// let xml = to_xml(&doc, &ToXmlConfig::default()).unwrap();
/// assert_eq!(xml, "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<name>Ada &amp; co</name>");
/// ```
pub fn to_xml(doc: &Document, config: &ToXmlConfig) -> Result<String> {
    let mut buffer = Vec::new();
    to_xml_writer(doc, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

/// Write a document as XML to `out`.
pub fn to_xml_writer<W: Write>(doc: &Document, out: W, config: &ToXmlConfig) -> Result<()> {
    let mut writer = if config.pretty {
        let indent_char = config.indent.bytes().next().unwrap_or(b' ');
        Writer::new_with_indent(out, indent_char, config.indent.len())
    } else {
        Writer::new(out)
    };

    if config.include_declaration {
        let decl = &doc.declaration;
        writer
            .write_event(Event::Decl(BytesDecl::new(
                &decl.version,
                decl.encoding.as_deref(),
                decl.standalone.as_deref(),
            )))
            .map_err(|e| XmlError::write("XML declaration", e))?;
    }

    for node in &doc.nodes {
        write_node(&mut writer, node)?;
    }
    Ok(())
}

fn write_node<W: Write>(writer: &mut Writer<W>, node: &TreeNode) -> Result<()> {
    match node {
        TreeNode::Element(element) => write_element(writer, element),
        TreeNode::Text(text) => writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(|e| XmlError::write("text", e)),
        TreeNode::Comment(comment) => writer
            .write_event(Event::Comment(BytesText::from_escaped(comment.as_str())))
            .map_err(|e| XmlError::write("comment", e)),
    }
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &Element) -> Result<()> {
    let start = BytesStart::new(element.name.as_str());
    if element.children.is_empty() {
        return writer
            .write_event(Event::Empty(start))
            .map_err(|e| XmlError::write(&format!("element <{}>", element.name), e));
    }

    writer
        .write_event(Event::Start(start))
        .map_err(|e| XmlError::write(&format!("element <{}>", element.name), e))?;
    for child in &element.children {
        write_node(writer, child)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.name.as_str())))
        .map_err(|e| XmlError::write(&format!("closing tag </{}>", element.name), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with(element: Element) -> Document {
        let mut doc = Document::default();
        doc.nodes.push(TreeNode::Element(element));
        doc
    }

    #[test]
    fn test_pretty_nested_output() {
        let mut row = Element::new("row");
        let tags = row.push_element(Element::new("tags"));
        tags.push_element(Element::with_text("li", "a"));
        tags.push_element(Element::with_text("li", "b"));

        let xml = to_xml(&doc_with(row), &ToXmlConfig::default()).unwrap();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
             <row>\n  <tags>\n    <li>a</li>\n    <li>b</li>\n  </tags>\n</row>"
        );
    }

    #[test]
    fn test_compact_output_without_declaration() {
        let mut row = Element::new("row");
        row.push_element(Element::with_text("v", "1"));
        let config = ToXmlConfig {
            pretty: false,
            include_declaration: false,
            ..Default::default()
        };
        assert_eq!(
            to_xml(&doc_with(row), &config).unwrap(),
            "<row><v>1</v></row>"
        );
    }

    #[test]
    fn test_empty_element_self_closes() {
        let config = ToXmlConfig {
            include_declaration: false,
            ..Default::default()
        };
        assert_eq!(
            to_xml(&doc_with(Element::new("empty")), &config).unwrap(),
            "<empty/>"
        );
    }

    #[test]
    fn test_comment_written_verbatim() {
        let mut row = Element::new("row");
        row.push(TreeNode::Comment(" a & b ".to_string()));
        let config = ToXmlConfig {
            pretty: false,
            include_declaration: false,
            ..Default::default()
        };
        assert_eq!(
            to_xml(&doc_with(row), &config).unwrap(),
            "<row><!-- a & b --></row>"
        );
    }

    #[test]
    fn test_declaration_fields() {
        let mut doc = Document::default();
        doc.declaration.encoding = Some("ISO-8859-1".to_string());
        doc.declaration.standalone = Some("yes".to_string());
        assert_eq!(
            to_xml(&doc, &ToXmlConfig::default()).unwrap(),
            "<?xml version=\"1.0\" encoding=\"ISO-8859-1\" standalone=\"yes\"?>"
        );
    }
}
