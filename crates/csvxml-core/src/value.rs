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

//! Field values fed to the forward mapper.

/// A single field of a record.
///
/// Tabular sources only ever produce scalars. A sequence fans the column's
/// rule out over each item, in order, as if each had been its own value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Plain text.
    Scalar(String),
    /// Items applied one after another with the same rule.
    Many(Vec<FieldValue>),
}

impl FieldValue {
    /// The text of a scalar, `None` for sequences.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Scalar(s) => Some(s),
            FieldValue::Many(_) => None,
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Scalar(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Scalar(value.to_string())
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(items: Vec<T>) -> Self {
        FieldValue::Many(items.into_iter().map(Into::into).collect())
    }
}

/// One record: a field value per column.
pub type Record = Vec<FieldValue>;

/// Convert any list of string-like fields into a [`Record`].
pub fn record<I, T>(fields: I) -> Record
where
    I: IntoIterator<Item = T>,
    T: Into<FieldValue>,
{
    fields.into_iter().map(Into::into).collect()
}
