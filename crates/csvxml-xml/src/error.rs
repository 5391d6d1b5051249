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

//! Error types for XML reading and writing

use thiserror::Error;

/// Errors that can occur while converting between XML text and the element tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XmlError {
    /// XML parsing failed due to malformed syntax.
    ///
    /// # Example
    ///
    /// ```text
    /// XML parse error at position 42: unexpected end of file
    /// ```
    #[error("XML parse error at position {pos}: {message}")]
    ParseError {
        /// Byte offset in the input where the error was detected
        pos: usize,
        /// Description of the parsing error
        message: String,
    },

    /// XML serialization failed during write operations.
    #[error("Failed to write {context}: {message}")]
    WriteError {
        /// Description of what failed to write
        context: String,
        /// Underlying error message
        message: String,
    },

    /// Nesting depth limit exceeded during parsing.
    ///
    /// Guards against inputs like `<a><a><a>... (1000+ levels deep) ...</a></a></a>`.
    /// The limit is configurable via
    /// [`FromXmlConfig::max_recursion_depth`](crate::FromXmlConfig::max_recursion_depth).
    #[error("XML recursion depth exceeded (max: {max}, found: {current})")]
    RecursionLimitExceeded {
        /// Maximum allowed depth
        max: usize,
        /// Depth encountered
        current: usize,
    },

    /// UTF-8 encoding error in XML content.
    #[error("UTF-8 encoding error: {message}")]
    Utf8Error {
        /// Description of the encoding error
        message: String,
    },
}

impl XmlError {
    pub(crate) fn parse(pos: usize, err: impl std::fmt::Display) -> Self {
        XmlError::ParseError {
            pos,
            message: err.to_string(),
        }
    }

    pub(crate) fn write(context: &str, err: impl std::fmt::Display) -> Self {
        XmlError::WriteError {
            context: context.to_string(),
            message: err.to_string(),
        }
    }
}

impl From<std::str::Utf8Error> for XmlError {
    fn from(err: std::str::Utf8Error) -> Self {
        XmlError::Utf8Error {
            message: err.to_string(),
        }
    }
}

impl From<std::string::FromUtf8Error> for XmlError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        XmlError::Utf8Error {
            message: err.to_string(),
        }
    }
}

/// Convenience type alias for `Result` with `XmlError`.
pub type Result<T> = std::result::Result<T, XmlError>;
