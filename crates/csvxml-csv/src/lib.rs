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

//! CSV record reading and row writing for the CSVXML mapping engine.
//!
//! The mapping engine consumes records as sequences of text values and
//! produces rows the same way. This crate is the CSV side of that contract:
//!
//! - [`read_records`] yields records lazily from any [`std::io::Read`]
//! - [`write_rows`] and [`write_rows_to`] serialize rows with minimal quoting
//!
//! No header row is assumed. Every line is a record, and header lines are
//! skipped by the mapping's `ignoreStart` count instead.
//!
//! # Examples
//!
//! ```
//! use csvxml_csv::{from_csv, write_rows, FromCsvConfig, ToCsvConfig};
//!
//! let input = "name,tags\nAda,\"math,engines\"\n";
//! let records = from_csv(input, &FromCsvConfig::default()).unwrap();
//! assert_eq!(records[1][1], "math,engines");
//!
//! let output = write_rows(&records, &ToCsvConfig::default()).unwrap();
//! assert_eq!(output, input);
//! ```

mod error;
mod from_csv;
mod to_csv;

pub use error::{CsvError, Result};
pub use from_csv::{from_csv, read_records, FromCsvConfig, Records, DEFAULT_MAX_RECORDS};
pub use to_csv::{write_rows, write_rows_to, ToCsvConfig};
