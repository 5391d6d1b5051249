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

//! Error types for CSV record reading and row writing.

use thiserror::Error;

/// CSV error types.
///
/// # Examples
///
/// ```
/// use csvxml_csv::CsvError;
///
/// let err = CsvError::ParseError {
///     line: 42,
///     message: "found record with 3 fields, but the previous record has 2 fields".to_string(),
/// };
/// assert!(err.to_string().starts_with("CSV parse error at line 42"));
/// ```
#[derive(Debug, Error)]
pub enum CsvError {
    /// CSV parsing error at a specific line.
    #[error("CSV parse error at line {line}: {message}")]
    ParseError {
        /// Line number where the error occurred (1-based).
        line: u64,
        /// Detailed error message.
        message: String,
    },

    /// Record count exceeded the configured limit.
    ///
    /// ```
    /// use csvxml_csv::CsvError;
    ///
    /// let err = CsvError::SecurityLimit { limit: 10, actual: 11 };
    /// assert!(err.to_string().contains("Security limit"));
    /// ```
    #[error("Security limit exceeded: record count {actual} exceeds maximum {limit}")]
    SecurityLimit {
        /// Maximum allowed records.
        limit: usize,
        /// Record count reached.
        actual: usize,
    },

    /// I/O error during CSV reading or writing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the underlying CSV library.
    #[error("CSV library error: {0}")]
    CsvLib(#[from] csv::Error),

    /// Output was not valid UTF-8.
    #[error("Invalid UTF-8 in {context}")]
    InvalidUtf8 {
        /// Where the invalid bytes were produced.
        context: String,
    },
}

impl CsvError {
    /// Build a [`CsvError::ParseError`] from a reader error, keeping its line.
    pub(crate) fn from_read(err: csv::Error, fallback_line: u64) -> Self {
        let line = err.position().map_or(fallback_line, csv::Position::line);
        CsvError::ParseError {
            line,
            message: err.to_string(),
        }
    }
}

/// Convenience type alias for `Result` with `CsvError`.
pub type Result<T> = std::result::Result<T, CsvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = CsvError::ParseError {
            line: 3,
            message: "bad quote".to_string(),
        };
        assert_eq!(err.to_string(), "CSV parse error at line 3: bad quote");
    }

    #[test]
    fn test_io_conversion() {
        let err: CsvError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, CsvError::Io(_)));
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn test_invalid_utf8_display() {
        let err = CsvError::InvalidUtf8 {
            context: "row output".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid UTF-8 in row output");
    }
}
