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

//! Batch command implementation: convert every CSV/XML file in a directory.

use crate::batch::{BatchConfig, BatchProcessor, ConvertOperation};
use crate::commands::{load_specification, Direction};
use crate::error::CliError;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Name of the mapping configuration looked up inside a batch directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// List the convertible files directly inside `dir`, sorted by name.
///
/// The listing is taken once, so outputs written during the batch are not
/// picked up as inputs.
fn convertible_files(dir: &Path) -> Result<Vec<PathBuf>, CliError> {
    let entries = fs::read_dir(dir).map_err(|e| CliError::io_error(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| CliError::io_error(dir, e))?.path();
        if path.is_file() && Direction::from_path(&path).is_ok() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Convert every `.csv` and `.xml` file in `dir` with `dir/config.json`.
///
/// Each file is written next to its input with the swapped extension.
/// Failures are reported per file and do not stop the batch.
///
/// # Errors
///
/// Returns `Err` if the configuration cannot be loaded, the directory cannot
/// be listed, or any file failed to convert.
///
/// # Examples
///
/// ```no_run
/// use csvxml_cli::commands::batch_convert;
///
/// # fn main() -> Result<(), csvxml_cli::error::CliError> {
/// batch_convert("data", true, false)?;
/// # Ok(())
/// # }
/// ```
pub fn batch_convert(dir: &str, parallel: bool, verbose: bool) -> Result<(), CliError> {
    let dir = Path::new(dir);
    let spec = load_specification(dir.join(CONFIG_FILE_NAME))?;
    let files = convertible_files(dir)?;

    if files.is_empty() {
        info!(dir = %dir.display(), "no .csv or .xml files to convert");
        return Ok(());
    }

    let config = BatchConfig {
        parallel_threshold: if parallel {
            BatchConfig::default().parallel_threshold
        } else {
            usize::MAX
        },
        verbose,
        ..Default::default()
    };

    let results = BatchProcessor::new(config).process(&files, ConvertOperation::new(spec), true)?;

    if results.has_failures() {
        eprintln!();
        eprintln!("{}", "Conversion failures:".red().bold());
        for failure in results.failures() {
            eprintln!("  {} {}", "✗".red(), failure.path.display());
            if let Err(e) = &failure.result {
                eprintln!("    {}", e.to_string().dimmed());
            }
        }
        return Err(CliError::invalid_input(format!(
            "{} of {} files failed to convert",
            results.failure_count(),
            results.total_files()
        )));
    }

    info!(
        files = results.total_files(),
        elapsed_ms = results.elapsed_ms as u64,
        "batch complete"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convertible_files_filtered_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.xml", "a.csv", "config.json", "notes.txt", "c.CSV"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        fs::create_dir(dir.path().join("nested.csv")).unwrap();

        let files = convertible_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["a.csv", "b.xml"]);
    }

    #[test]
    fn test_missing_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = batch_convert(dir.path().to_str().unwrap(), false, false).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }
}
