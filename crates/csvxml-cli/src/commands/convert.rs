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

//! Single-file conversion between CSV and XML.

use super::{read_file, write_output};
use crate::error::CliError;
use csvxml_core::{map_document, map_records, MappingSpecification};
use csvxml_csv::{read_records, write_rows, FromCsvConfig, ToCsvConfig};
use csvxml_xml::{from_xml, to_xml, FromXmlConfig, ToXmlConfig};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Which way a file is converted, decided by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `.csv` in, XML out.
    CsvToXml,
    /// `.xml` in, CSV out.
    XmlToCsv,
}

impl Direction {
    /// Pick the direction for `path`. Only the exact extensions `csv` and
    /// `xml` are recognized.
    pub fn from_path(path: &Path) -> Result<Self, CliError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("csv") => Ok(Direction::CsvToXml),
            Some("xml") => Ok(Direction::XmlToCsv),
            _ => Err(CliError::UnsupportedInput(path.to_path_buf())),
        }
    }

    /// Extension of the produced file.
    pub fn output_extension(self) -> &'static str {
        match self {
            Direction::CsvToXml => "xml",
            Direction::XmlToCsv => "csv",
        }
    }
}

/// Load a mapping specification from a JSON file.
pub fn load_specification(path: impl AsRef<Path>) -> Result<MappingSpecification, CliError> {
    let path = path.as_ref();
    let content = read_file(path)?;
    MappingSpecification::from_json(&content).map_err(|e| CliError::config(path, e.to_string()))
}

/// Run the forward pipeline: CSV text to XML text.
pub fn csv_to_xml(content: &str, spec: &MappingSpecification) -> Result<String, CliError> {
    let records = read_records(content.as_bytes(), &FromCsvConfig::default());
    let doc = map_records(spec, records)?;
    Ok(to_xml(&doc, &ToXmlConfig::default())?)
}

/// Run the inverse pipeline: XML text to CSV text.
pub fn xml_to_csv(content: &str, spec: &MappingSpecification) -> Result<String, CliError> {
    let doc = from_xml(content, &FromXmlConfig::default())?;
    let rows = map_document(spec, &doc)?;
    Ok(write_rows(&rows, &ToCsvConfig::default())?)
}

/// Convert one file according to its extension and return the output text.
pub fn convert_file(input: &Path, spec: &MappingSpecification) -> Result<String, CliError> {
    let direction = Direction::from_path(input)?;
    let content = read_file(input)?;
    debug!(input = %input.display(), ?direction, "converting");

    match direction {
        Direction::CsvToXml => csv_to_xml(&content, spec),
        Direction::XmlToCsv => xml_to_csv(&content, spec),
    }
}

/// Default output location: the input path with the swapped extension.
///
/// ```
/// use csvxml_cli::commands::output_path;
/// use std::path::Path;
///
/// assert_eq!(output_path(Path::new("data/people.csv")).unwrap(), Path::new("data/people.xml"));
/// assert!(output_path(Path::new("notes.txt")).is_err());
/// ```
pub fn output_path(input: &Path) -> Result<PathBuf, CliError> {
    let direction = Direction::from_path(input)?;
    Ok(input.with_extension(direction.output_extension()))
}

/// Convert `input` using the mapping in `config`.
///
/// The result goes to `output` when given (`-` for stdout), otherwise next
/// to the input with the swapped extension.
pub fn convert(input: &str, config: &str, output: Option<&str>) -> Result<(), CliError> {
    let input = Path::new(input);
    let spec = load_specification(config)?;
    let converted = convert_file(input, &spec)?;

    match output {
        Some("-") => write_output(&converted, None),
        Some(path) => {
            write_output(&converted, Some(Path::new(path)))?;
            info!(input = %input.display(), output = path, "converted");
            Ok(())
        }
        None => {
            let path = output_path(input)?;
            write_output(&converted, Some(&path))?;
            info!(input = %input.display(), output = %path.display(), "converted");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEC: &str = r#"{
        "elementName": "row",
        "baseElement": "rows",
        "data": [
            {"type": "element", "elementName": "id"},
            {"type": "list", "elementName": "tags", "delimiter": ";"}
        ]
    }"#;

    fn spec() -> MappingSpecification {
        MappingSpecification::from_json(SPEC).unwrap()
    }

    #[test]
    fn test_direction_from_extension() {
        assert_eq!(
            Direction::from_path(Path::new("a.csv")).unwrap(),
            Direction::CsvToXml
        );
        assert_eq!(
            Direction::from_path(Path::new("dir/a.xml")).unwrap(),
            Direction::XmlToCsv
        );
        assert!(Direction::from_path(Path::new("a.CSV")).is_err());
        assert!(Direction::from_path(Path::new("csv")).is_err());
    }

    #[test]
    fn test_csv_to_xml_and_back() {
        let csv = "1,a;b\n2,c\n";
        let xml = csv_to_xml(csv, &spec()).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
        assert!(xml.contains("<li>a</li>"));

        assert_eq!(xml_to_csv(&xml, &spec()).unwrap(), csv);
    }

    #[test]
    fn test_csv_width_error_is_mapping_error() {
        let spec = MappingSpecification::from_json(
            r#"{"elementName":"row","data":[{"type":"element","elementName":"a"}]}"#,
        )
        .unwrap();
        let err = csv_to_xml("1,2\n", &spec).unwrap_err();
        assert!(matches!(err, CliError::Mapping(_)));
    }

    #[test]
    fn test_malformed_xml_is_xml_error() {
        let err = xml_to_csv("<rows><row></rows>", &spec()).unwrap_err();
        assert!(matches!(err, CliError::XmlConversion(_)));
    }
}
