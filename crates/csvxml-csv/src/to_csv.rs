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

//! Row sequence to CSV text.

use crate::error::{CsvError, Result};
use std::io::Write;

/// Configuration for CSV output.
#[derive(Debug, Clone)]
pub struct ToCsvConfig {
    /// Field delimiter (default: ',')
    pub delimiter: u8,
    /// Quote style for fields (default: necessary)
    pub quote_style: csv::QuoteStyle,
    /// Record terminator (default: `\n`)
    pub terminator: csv::Terminator,
}

impl Default for ToCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote_style: csv::QuoteStyle::Necessary,
            terminator: csv::Terminator::Any(b'\n'),
        }
    }
}

/// Write rows to `writer`.
pub fn write_rows_to<W, I, R, S>(writer: W, rows: I, config: &ToCsvConfig) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .quote_style(config.quote_style)
        .terminator(config.terminator)
        .flexible(true)
        .from_writer(writer);

    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write rows to a CSV string.
///
/// # Examples
///
/// ```
/// use csvxml_csv::{write_rows, ToCsvConfig};
///
/// let rows = vec![vec!["1", "Doe, Jane"], vec!["2", "plain"]];
/// let csv = write_rows(&rows, &ToCsvConfig::default()).unwrap();
/// assert_eq!(csv, "1,\"Doe, Jane\"\n2,plain\n");
/// ```
pub fn write_rows<I, R, S>(rows: I, config: &ToCsvConfig) -> Result<String>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    let mut buffer = Vec::new();
    write_rows_to(&mut buffer, rows, config)?;
    String::from_utf8(buffer).map_err(|_| CsvError::InvalidUtf8 {
        context: "CSV output".to_string(),
    })
}
