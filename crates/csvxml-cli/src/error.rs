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

//! Structured error types for the CSVXML CLI.
//!
//! All CLI operations return `Result<T, CliError>`. Errors from the library
//! crates are flattened to their messages so the type stays `Clone` for the
//! parallel batch driver.

use csvxml_core::MappingError;
use csvxml_csv::CsvError;
use csvxml_xml::XmlError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for CSVXML CLI operations.
///
/// # Examples
///
/// ```rust,no_run
/// use csvxml_cli::error::CliError;
///
/// fn read_input(path: &str) -> Result<String, CliError> {
///     std::fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file read, write, or metadata access).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// File size exceeds the configured maximum.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)")]
    FileTooLarge {
        /// The file path that exceeded the limit
        path: PathBuf,
        /// The actual file size in bytes
        actual: u64,
        /// The maximum allowed file size in bytes
        max: u64,
        /// The maximum allowed file size in MB (for display)
        max_mb: u64,
    },

    /// The mapping configuration could not be loaded.
    #[error("Invalid configuration '{path}': {message}")]
    Config {
        /// The configuration file
        path: PathBuf,
        /// What was wrong with it
        message: String,
    },

    /// A mapping pass failed.
    #[error("Mapping error: {0}")]
    Mapping(String),

    /// CSV reading or writing failed.
    #[error("CSV conversion error: {0}")]
    CsvConversion(String),

    /// XML reading or writing failed.
    #[error("XML conversion error: {0}")]
    XmlConversion(String),

    /// The input file is neither `.csv` nor `.xml`.
    #[error("Unsupported input '{0}': expected a .csv or .xml file")]
    UnsupportedInput(PathBuf),

    /// Invalid input provided by the user.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a file-too-large error.
    ///
    /// ```rust
    /// use csvxml_cli::error::CliError;
    ///
    /// let err = CliError::file_too_large("huge.csv", 200_000_000, 100 * 1024 * 1024);
    /// assert!(err.to_string().contains("100 MB"));
    /// ```
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    /// Create a configuration error.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<MappingError> for CliError {
    fn from(source: MappingError) -> Self {
        Self::Mapping(source.to_string())
    }
}

impl From<CsvError> for CliError {
    fn from(source: CsvError) -> Self {
        Self::CsvConversion(source.to_string())
    }
}

impl From<XmlError> for CliError {
    fn from(source: XmlError) -> Self {
        Self::XmlConversion(source.to_string())
    }
}
