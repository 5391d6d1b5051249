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

//! CSVXML CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **convert**: convert one `.csv` file to XML or one `.xml` file to CSV
//!   using a JSON mapping configuration
//! - **batch**: convert every `.csv`/`.xml` file of a directory with the
//!   directory's `config.json`, in parallel for larger batches
//!
//! # Examples
//!
//! ```no_run
//! use csvxml_cli::commands::{batch_convert, convert};
//!
//! # fn main() -> Result<(), csvxml_cli::error::CliError> {
//! // people.csv -> people.xml
//! convert("people.csv", "mapping.json", None)?;
//!
//! // Everything in ./data, using ./data/config.json
//! batch_convert("data", true, false)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Security
//!
//! Input files larger than `CSVXML_MAX_FILE_SIZE` bytes (default 1 GB) are
//! rejected before reading.

pub mod batch;
pub mod cli;
pub mod commands;
pub mod error;
