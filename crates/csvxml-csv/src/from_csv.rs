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

//! CSV text to record sequence.

use crate::error::{CsvError, Result};
use std::io::Read;

/// Default maximum number of records read from one input.
pub const DEFAULT_MAX_RECORDS: usize = 1_000_000;

/// Configuration for CSV input.
///
/// There is no header handling: every line is a record. Header lines are
/// skipped by the mapping specification's `ignoreStart`, so the reader never
/// needs to know about them.
#[derive(Debug, Clone)]
pub struct FromCsvConfig {
    /// Field delimiter character (default: `,`).
    pub delimiter: u8,

    /// Whether to trim leading/trailing whitespace from fields (default: `false`).
    ///
    /// Values are kept byte for byte by default, since formatting options
    /// such as `removeWhitespace` already decide what happens to whitespace.
    pub trim: bool,

    /// Accept records with differing field counts (default: `false`).
    pub flexible: bool,

    /// Maximum number of records to read (default: 1,000,000).
    ///
    /// Reading stops with [`CsvError::SecurityLimit`] past this count.
    pub max_records: usize,
}

impl Default for FromCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: false,
            flexible: false,
            max_records: DEFAULT_MAX_RECORDS,
        }
    }
}

/// Lazy iterator over the records of a CSV input.
///
/// Created by [`read_records`]. Each item is one record as owned strings.
/// Iteration stops after the first error.
pub struct Records<R> {
    inner: csv::StringRecordsIntoIter<R>,
    count: usize,
    max_records: usize,
    failed: bool,
}

impl<R: Read> Iterator for Records<R> {
    type Item = Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let record = self.inner.next()?;
        self.count += 1;

        if self.count > self.max_records {
            self.failed = true;
            return Some(Err(CsvError::SecurityLimit {
                limit: self.max_records,
                actual: self.count,
            }));
        }

        match record {
            Ok(record) => Some(Ok(record.iter().map(str::to_string).collect())),
            Err(e) => {
                self.failed = true;
                Some(Err(CsvError::from_read(e, self.count as u64)))
            }
        }
    }
}

/// Read records lazily from `reader`.
///
/// # Examples
///
/// ```
/// use csvxml_csv::{read_records, FromCsvConfig};
///
/// let input = "id,name\n1,\"Doe, Jane\"\n";
/// let records: Vec<Vec<String>> = read_records(input.as_bytes(), &FromCsvConfig::default())
///     .collect::<Result<_, _>>()
///     .unwrap();
///
/// assert_eq!(records[0], ["id", "name"]);
/// assert_eq!(records[1], ["1", "Doe, Jane"]);
/// ```
pub fn read_records<R: Read>(reader: R, config: &FromCsvConfig) -> Records<R> {
    let inner = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(false)
        .flexible(config.flexible)
        .trim(if config.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        })
        .from_reader(reader)
        .into_records();

    Records {
        inner,
        count: 0,
        max_records: config.max_records,
        failed: false,
    }
}

/// Read every record of a CSV string eagerly.
pub fn from_csv(csv: &str, config: &FromCsvConfig) -> Result<Vec<Vec<String>>> {
    read_records(csv.as_bytes(), config).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_header_row() {
        let rows = from_csv("a,b\nc,d\n", &FromCsvConfig::default()).unwrap();
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_whitespace_kept_by_default() {
        let rows = from_csv(" a , b \n", &FromCsvConfig::default()).unwrap();
        assert_eq!(rows, vec![vec![" a ", " b "]]);

        let config = FromCsvConfig {
            trim: true,
            ..Default::default()
        };
        let rows = from_csv(" a , b \n", &config).unwrap();
        assert_eq!(rows, vec![vec!["a", "b"]]);
    }

    #[test]
    fn test_custom_delimiter() {
        let config = FromCsvConfig {
            delimiter: b';',
            ..Default::default()
        };
        let rows = from_csv("a;b,c\n", &config).unwrap();
        assert_eq!(rows, vec![vec!["a", "b,c"]]);
    }

    #[test]
    fn test_quoted_fields() {
        let rows = from_csv("\"x\"\"y\",\"line\nbreak\"\n", &FromCsvConfig::default()).unwrap();
        assert_eq!(rows, vec![vec!["x\"y", "line\nbreak"]]);
    }

    #[test]
    fn test_uneven_rows_rejected_unless_flexible() {
        let err = from_csv("a,b\nc\n", &FromCsvConfig::default()).unwrap_err();
        assert!(matches!(err, CsvError::ParseError { .. }));

        let config = FromCsvConfig {
            flexible: true,
            ..Default::default()
        };
        let rows = from_csv("a,b\nc\n", &config).unwrap();
        assert_eq!(rows[1], vec!["c"]);
    }

    #[test]
    fn test_record_limit() {
        let config = FromCsvConfig {
            max_records: 2,
            ..Default::default()
        };
        let mut records = read_records("1\n2\n3\n4\n".as_bytes(), &config);
        assert!(records.next().unwrap().is_ok());
        assert!(records.next().unwrap().is_ok());
        assert!(matches!(
            records.next(),
            Some(Err(CsvError::SecurityLimit { limit: 2, actual: 3 }))
        ));
        assert!(records.next().is_none());
    }

    #[test]
    fn test_empty_input() {
        assert!(from_csv("", &FromCsvConfig::default()).unwrap().is_empty());
    }
}
