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

//! Records to tree.
//!
//! The forward mapper builds one group element per record and runs every
//! column's rule set against it. Records are pulled one at a time; each is
//! mapped completely before the next is requested, and a record only becomes
//! part of the document once all its columns mapped without error.
//!
//! # Examples
//!
//! ```
//! use csvxml_core::{forward, MappingRule, MappingSpecification};
//!
//! let spec = MappingSpecification::new(
//!     "person",
//!     vec![
//!         MappingRule::element("name").into(),
//!         MappingRule::list("tags").with_delimiter(";").into(),
//!     ],
//! )
//! .with_base_element("people");
//!
//! let records = vec![Ok::<_, std::convert::Infallible>(vec!["Ada", "math;code"])];
//! let doc = forward::map_records(&spec, records).unwrap();
//!
//! let people = doc.find_element("people").unwrap();
//! let person = people.find_child("person").unwrap();
//! assert_eq!(person.find_child("name").and_then(|e| e.text()), Some("Ada"));
//! assert_eq!(person.find_child("tags").unwrap().children.len(), 2);
//! ```

use crate::error::{MappingError, MappingResult};
use crate::format;
use crate::mapping::{MappingRule, MappingSpecification, RuleKind, RuleSet};
use crate::path::{child_or_insert, resolve_or_create};
use crate::tree::{Document, Element, TreeNode};
use crate::value::FieldValue;
use std::fmt::Display;
use tracing::{debug, trace};

/// Incremental forward mapping pass.
///
/// Owns the tree under construction until [`ForwardMapper::finish`] hands it
/// over.
#[derive(Debug)]
pub struct ForwardMapper<'s> {
    spec: &'s MappingSpecification,
    groups: Vec<TreeNode>,
    to_ignore: usize,
    seen: usize,
}

impl<'s> ForwardMapper<'s> {
    /// Start a pass for `spec`.
    pub fn new(spec: &'s MappingSpecification) -> Self {
        Self {
            spec,
            groups: Vec::new(),
            to_ignore: spec.ignore_start,
            seen: 0,
        }
    }

    /// Map one record.
    ///
    /// Records still covered by `ignoreStart` are dropped unseen. Every other
    /// record must carry exactly one value per column.
    ///
    /// # Errors
    ///
    /// [`MappingError::RecordWidth`] on a width mismatch, or any configuration
    /// error raised by a rule. The failed record is not added to the tree.
    pub fn push_record(&mut self, record: &[FieldValue]) -> MappingResult<()> {
        self.seen += 1;
        if self.to_ignore > 0 {
            self.to_ignore -= 1;
            trace!(record = self.seen, "ignoring leading record");
            return Ok(());
        }

        let expected = self.spec.column_count();
        if record.len() != expected {
            return Err(MappingError::RecordWidth {
                record: self.seen,
                expected,
                actual: record.len(),
            });
        }

        let mut group = Element::new(self.spec.element_name.as_str());
        for (rules, value) in self.spec.data.iter().zip(record) {
            apply_rules(&mut group, rules, value)?;
        }
        self.groups.push(TreeNode::Element(group));
        Ok(())
    }

    /// Number of records that produced a group element.
    pub fn records_mapped(&self) -> usize {
        self.groups.len()
    }

    /// Number of records pulled so far, ignored ones included.
    pub fn records_seen(&self) -> usize {
        self.seen
    }

    /// Finish the pass and return the document.
    pub fn finish(self) -> Document {
        let mut document = Document::new(self.spec.declaration.clone());
        match &self.spec.base_element {
            Some(base) => {
                let mut wrapper = Element::new(base.as_str());
                wrapper.children = self.groups;
                document.nodes.push(TreeNode::Element(wrapper));
            }
            None => document.nodes = self.groups,
        }
        document
    }
}

/// Run a full forward pass over a record source.
///
/// `records` is pulled lazily, one record at a time. The first source error
/// or mapping error ends the pass and nothing built so far is returned.
pub fn map_records<I, R, E>(spec: &MappingSpecification, records: I) -> MappingResult<Document>
where
    I: IntoIterator<Item = Result<R, E>>,
    R: IntoIterator,
    R::Item: Into<FieldValue>,
    E: Display,
{
    let mut mapper = ForwardMapper::new(spec);
    for record in records {
        let record: Vec<FieldValue> = record
            .map_err(MappingError::from_source)?
            .into_iter()
            .map(Into::into)
            .collect();
        mapper.push_record(&record)?;
    }
    debug!(
        element = %spec.element_name,
        mapped = mapper.records_mapped(),
        seen = mapper.records_seen(),
        "forward pass complete"
    );
    Ok(mapper.finish())
}

/// Apply a column entry (one rule or a sequence of them) to `value`.
pub fn apply_rules(elm: &mut Element, rules: &RuleSet, value: &FieldValue) -> MappingResult<()> {
    match rules {
        RuleSet::Many(sets) => sets.iter().try_for_each(|set| apply_rules(elm, set, value)),
        RuleSet::One(rule) => apply_rule(elm, rule, value),
    }
}

/// Apply a single rule to `value` below `elm`.
pub fn apply_rule(elm: &mut Element, rule: &MappingRule, value: &FieldValue) -> MappingResult<()> {
    let text = match value {
        FieldValue::Many(items) => {
            return items.iter().try_for_each(|item| apply_rule(elm, rule, item));
        }
        FieldValue::Scalar(text) => text.as_str(),
    };

    // Resolving the path creates nodes, so an omitted value must bail out first.
    if text.is_empty() && rule.omits_missing() {
        return Ok(());
    }
    if let RuleKind::Unknown(kind) = &rule.kind {
        return Err(MappingError::UnknownRuleType(kind.clone()));
    }

    let target = resolve_or_create(elm, rule.path.segments());
    let options = rule.options.as_ref();

    match &rule.kind {
        RuleKind::Element => {
            let name = rule.required_element_name()?;
            target.push_element(Element::with_text(name, format::apply(text, options)));
        }
        RuleKind::List => {
            let mut container = Element::new(rule.required_element_name()?);
            for piece in text.split(rule.delimiter()) {
                container.push_element(Element::with_text(
                    rule.list_element_name(),
                    format::apply(piece, options),
                ));
            }
            target.push_element(container);
        }
        RuleKind::Add => {
            let container = child_or_insert(target, rule.required_element_name()?);
            if let Some(nested) = rule.add.as_deref() {
                apply_rules(container, nested, value)?;
            }
        }
        RuleKind::Comment => target.push(TreeNode::Comment(text.to_string())),
        RuleKind::Unknown(kind) => return Err(MappingError::UnknownRuleType(kind.clone())),
    }
    Ok(())
}
