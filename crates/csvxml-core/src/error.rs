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

//! Error types for mapping passes.

use thiserror::Error;

/// Errors that abort a mapping pass.
///
/// Missing data is never reported here: absent elements read back as empty
/// strings and `omitIfMissing` turns empty values into no-ops. Everything in
/// this enum is fatal for the pass that raised it, and no partial tree or row
/// set is returned alongside it.
///
/// # Examples
///
/// ```
/// use csvxml_core::MappingError;
///
/// let err = MappingError::UnknownRuleType("attribute".to_string());
/// assert_eq!(err.to_string(), "Unrecognized rule type: attribute");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// A rule carries a `type` the engine does not know.
    #[error("Unrecognized rule type: {0}")]
    UnknownRuleType(String),

    /// A rule of the given kind is missing its `elementName`.
    #[error("Rule of type '{kind}' requires an elementName")]
    MissingElementName {
        /// Wire name of the rule kind.
        kind: String,
    },

    /// The mapping specification document could not be decoded.
    #[error("Invalid mapping specification: {0}")]
    InvalidSpecification(String),

    /// A forward record does not have one value per column.
    ///
    /// ```
    /// use csvxml_core::MappingError;
    ///
    /// let err = MappingError::RecordWidth { record: 3, expected: 4, actual: 2 };
    /// assert!(err.to_string().contains("expected 4 values"));
    /// ```
    #[error("Record {record} has the wrong width: expected {expected} values, got {actual}")]
    RecordWidth {
        /// 1-based index of the record in the source, ignored records included.
        record: usize,
        /// Column count of the specification.
        expected: usize,
        /// Values supplied by the record.
        actual: usize,
    },

    /// The record source reported a failure.
    #[error("Record source error: {0}")]
    Source(String),
}

impl MappingError {
    /// Wrap an error raised by a record source.
    pub fn from_source(err: impl std::fmt::Display) -> Self {
        Self::Source(err.to_string())
    }

    /// True for errors caused by the mapping specification itself.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::UnknownRuleType(_) | Self::MissingElementName { .. } | Self::InvalidSpecification(_)
        )
    }
}

impl From<serde_json::Error> for MappingError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidSpecification(err.to_string())
    }
}

/// Result type for mapping operations.
pub type MappingResult<T> = Result<T, MappingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_classification() {
        assert!(MappingError::UnknownRuleType("x".into()).is_configuration());
        assert!(MappingError::MissingElementName { kind: "list".into() }.is_configuration());
        assert!(!MappingError::Source("eof".into()).is_configuration());
        assert!(!MappingError::RecordWidth {
            record: 1,
            expected: 2,
            actual: 1
        }
        .is_configuration());
    }

    #[test]
    fn test_from_serde_json() {
        let err: MappingError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, MappingError::InvalidSpecification(_)));
    }

    #[test]
    fn test_display_missing_element_name() {
        let err = MappingError::MissingElementName {
            kind: "element".into(),
        };
        assert_eq!(err.to_string(), "Rule of type 'element' requires an elementName");
    }
}
