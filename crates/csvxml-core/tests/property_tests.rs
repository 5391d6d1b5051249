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

//! Property-based tests for the mapping engine.
//!
//! # Properties Tested
//!
//! 1. **Roundtrip**: element, list and comment rules read back what they wrote
//! 2. **Omission**: `omitIfMissing` with an empty value never touches the tree
//! 3. **Row width**: every recovered row has one value per column
//! 4. **Formatting**: whitespace removal and prefixing compose as documented

use csvxml_core::forward::apply_rule;
use csvxml_core::inverse::retrieve_rule;
use csvxml_core::{
    map_document, map_records, Element, FieldValue, FormattingOptions, MappingRule,
    MappingSpecification, RuleSet,
};
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,8}"
}

fn path_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(name_strategy(), 0..4)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: an element rule reads back any non-empty value
    #[test]
    fn prop_element_roundtrip(
        path in path_strategy(),
        name in name_strategy(),
        value in ".{1,40}",
    ) {
        let rule = MappingRule::element(name).with_path(path);
        let mut group = Element::new("row");
        apply_rule(&mut group, &rule, &FieldValue::from(value.as_str())).unwrap();
        prop_assert_eq!(retrieve_rule(&group, &rule).unwrap(), value);
    }

    /// Property: a list rule reads back pieces joined by its delimiter
    #[test]
    fn prop_list_roundtrip(
        path in path_strategy(),
        pieces in prop::collection::vec("[a-zA-Z0-9 ]{1,10}", 1..6),
        delimiter in prop::sample::select(vec![",", ";", "|", "::"]),
    ) {
        let value = pieces.join(delimiter);
        let rule = MappingRule::list("items").with_path(path).with_delimiter(delimiter);
        let mut group = Element::new("row");
        apply_rule(&mut group, &rule, &FieldValue::from(value.as_str())).unwrap();
        prop_assert_eq!(retrieve_rule(&group, &rule).unwrap(), value);
    }

    /// Property: a comment rule reads back the raw value
    #[test]
    fn prop_comment_roundtrip(path in path_strategy(), value in ".{1,40}") {
        let rule = MappingRule::comment().with_path(path);
        let mut group = Element::new("row");
        apply_rule(&mut group, &rule, &FieldValue::from(value.as_str())).unwrap();
        prop_assert_eq!(retrieve_rule(&group, &rule).unwrap(), value);
    }

    /// Property: omitted empty values leave the tree exactly as it was
    #[test]
    fn prop_omit_if_missing_is_noop(path in path_strategy(), name in name_strategy()) {
        let options: FormattingOptions =
            serde_json::from_str(r#"{"omitIfMissing": true}"#).unwrap();
        let mut group = Element::new("row");
        group.push_element(Element::with_text("existing", "1"));
        let before = group.clone();

        for rule in [
            MappingRule::element(name.clone()),
            MappingRule::list(name.clone()),
            MappingRule::add(name.clone(), MappingRule::element("x")),
            MappingRule::comment(),
        ] {
            let rule = rule.with_path(path.clone()).with_options(options.clone());
            apply_rule(&mut group, &rule, &FieldValue::from("")).unwrap();
        }
        prop_assert_eq!(group, before);
    }

    /// Property: recovered rows always have one value per column
    #[test]
    fn prop_rows_match_column_count(
        columns in 1usize..6,
        rows in prop::collection::vec(prop::collection::vec("[a-z]{0,5}", 6), 0..10),
    ) {
        let data: Vec<RuleSet> = (0..columns)
            .map(|i| {
                let options: FormattingOptions =
                    serde_json::from_str(r#"{"omitIfMissing": true}"#).unwrap();
                MappingRule::element(format!("c{}", i)).with_options(options).into()
            })
            .collect();
        let spec = MappingSpecification::new("row", data);
        let records: Vec<Result<Vec<String>, String>> = rows
            .iter()
            .map(|r| Ok(r[..columns].to_vec()))
            .collect();

        let doc = map_records(&spec, records).unwrap();
        let recovered = map_document(&spec, &doc).unwrap();
        prop_assert_eq!(recovered.len(), rows.len());
        for (row, original) in recovered.iter().zip(&rows) {
            prop_assert_eq!(row.len(), columns);
            prop_assert_eq!(row.as_slice(), &original[..columns]);
        }
    }

    /// Property: whitespace removal happens before the prefix is added
    #[test]
    fn prop_prefix_survives_whitespace_removal(prefix in "[ a-z]{0,5}", value in "[ a-z]{0,10}") {
        let options = FormattingOptions {
            remove_whitespace: Some(true),
            prefix: Some(prefix.clone()),
            ..Default::default()
        };
        let formatted = options.apply(&value);
        let stripped: String = value.chars().filter(|c| !c.is_whitespace()).collect();
        prop_assert_eq!(formatted, format!("{}{}", prefix, stripped));
    }
}
