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

//! XML reading and writing for the CSVXML element tree.
//!
//! [`to_xml`] serializes a [`csvxml_core::Document`] with the document's own
//! declaration and two-space indentation by default. [`from_xml`] reads XML
//! back into the same tree model so the inverse mapper can recover rows.
//!
//! Only elements, text and comments take part in mapping. Attributes,
//! processing instructions and doctypes are skipped on read, and nothing of
//! the kind is produced on write.
//!
//! # Examples
//!
//! ```
//! use csvxml_core::{map_records, MappingSpecification};
//! use csvxml_xml::{from_xml, to_xml, FromXmlConfig, ToXmlConfig};
//!
//! let spec = MappingSpecification::from_json(
//!     r#"{"elementName":"row","baseElement":"rows","data":[{"type":"element","elementName":"v"}]}"#,
//! )
//! .unwrap();
//! let records: Vec<Result<Vec<&str>, String>> = vec![Ok(vec!["1"])];
//! let doc = map_records(&spec, records).unwrap();
//!
//! let xml = to_xml(&doc, &ToXmlConfig::default()).unwrap();
//! assert!(xml.contains("<rows>\n  <row>\n    <v>1</v>\n  </row>\n</rows>"));
//!
//! assert_eq!(from_xml(&xml, &FromXmlConfig::default()).unwrap(), doc);
//! ```

mod error;
mod from_xml;
mod to_xml;

pub use error::{Result, XmlError};
pub use from_xml::{from_xml, FromXmlConfig, DEFAULT_MAX_RECURSION_DEPTH};
pub use to_xml::{to_xml, to_xml_writer, ToXmlConfig};
