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

//! Core mapping engine for CSVXML.
//!
//! This crate converts between flat records and element trees under the
//! control of a declarative [`MappingSpecification`], in both directions:
//!
//! - [`forward`]: records → [`Document`]
//! - [`inverse`]: [`Document`] → rows
//!
//! Parsing and writing CSV or XML text is left to the `csvxml-csv` and
//! `csvxml-xml` crates; the engine only sees record iterators and owned
//! trees, so it carries no I/O or threading model of its own.
//!
//! # Rule kinds
//!
//! | type      | forward                                       | inverse                          |
//! |-----------|-----------------------------------------------|----------------------------------|
//! | `element` | `<name>formatted value</name>`                | text of `<name>`                 |
//! | `list`    | `<name><li>piece</li>…</name>`                | pieces joined with the delimiter |
//! | `add`     | nested rules inside a shared `<name>`         | first nested rule inside `<name>`|
//! | `comment` | `<!--raw value-->`                            | first comment                    |
//!
//! Every rule may carry a `path` of intermediate elements, which the forward
//! mapper creates on demand and reuses across rules and the inverse mapper
//! follows without creating anything.
//!
//! # Example
//!
//! ```
//! use csvxml_core::{forward, inverse, MappingSpecification};
//!
//! let spec = MappingSpecification::from_json(r#"{
//!     "elementName": "book",
//!     "baseElement": "library",
//!     "data": [
//!         { "type": "element", "elementName": "isbn", "options": { "remove": "-" } },
//!         { "type": "element", "path": "info", "elementName": "title" },
//!         { "type": "list", "path": "info", "elementName": "authors", "delimiter": "/" }
//!     ]
//! }"#).unwrap();
//!
//! let records = vec![Ok::<_, String>(vec!["978-0", "Dune", "Herbert"])];
//! let doc = forward::map_records(&spec, records).unwrap();
//! let rows = inverse::map_document(&spec, &doc).unwrap();
//!
//! assert_eq!(rows, vec![vec!["9780", "Dune", "Herbert"]]);
//! ```

mod error;
pub mod format;
pub mod forward;
pub mod inverse;
pub mod mapping;
pub mod path;
mod tree;
mod value;

pub use error::{MappingError, MappingResult};
pub use format::FormattingOptions;
pub use forward::{map_records, ForwardMapper};
pub use inverse::{map_document, Row};
pub use mapping::{MappingRule, MappingSpecification, OneOrMany, RuleKind, RulePath, RuleSet};
pub use tree::{elements_named, find_element, Declaration, Document, Element, TreeNode};
pub use value::{record, FieldValue, Record};
