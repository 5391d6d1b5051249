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

//! Batch conversion of many files with parallel execution and progress reporting.
//!
//! Files are processed independently: a failure is recorded against its file
//! and the rest of the batch carries on. Larger batches run on Rayon's
//! work-stealing pool; progress counters are atomics shared between workers.
//!
//! # Examples
//!
//! ```rust,no_run
//! use csvxml_cli::batch::{BatchConfig, BatchProcessor, ConvertOperation};
//! use csvxml_cli::commands::load_specification;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let spec = load_specification("data/config.json")?;
//! let processor = BatchProcessor::new(BatchConfig::default());
//!
//! let files = vec![PathBuf::from("data/a.csv"), PathBuf::from("data/b.xml")];
//! let results = processor.process(&files, ConvertOperation::new(spec), true)?;
//!
//! println!(
//!     "Processed {} files, {} succeeded, {} failed",
//!     results.total_files(),
//!     results.success_count(),
//!     results.failure_count()
//! );
//! # Ok(())
//! # }
//! ```

use crate::commands::{convert_file, output_path, write_output};
use crate::error::CliError;
use colored::Colorize;
use csvxml_core::MappingSpecification;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use tracing::debug;

/// Configuration for batch processing operations.
///
/// # Examples
///
/// ```rust
/// use csvxml_cli::batch::BatchConfig;
///
/// let config = BatchConfig {
///     parallel_threshold: 5,
///     max_threads: Some(4),
///     progress_interval: 10,
///     verbose: true,
/// };
/// ```
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Minimum number of files to trigger parallel processing.
    ///
    /// Default: 10
    pub parallel_threshold: usize,

    /// Maximum number of threads to use for parallel processing.
    ///
    /// None means Rayon's default (typically the number of CPU cores).
    pub max_threads: Option<usize>,

    /// Number of files between progress updates. Set to 0 to disable.
    ///
    /// Default: 1
    pub progress_interval: usize,

    /// Show per-file status lines instead of aggregate counts.
    pub verbose: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 10,
            max_threads: None,
            progress_interval: 1,
            verbose: false,
        }
    }
}

/// Result of processing a single file in a batch operation.
#[derive(Debug, Clone)]
pub struct FileResult<T> {
    /// The file path that was processed
    pub path: PathBuf,
    /// The result of processing (Ok or Err)
    pub result: Result<T, CliError>,
}

impl<T> FileResult<T> {
    /// Check if the result is successful.
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Check if the result is a failure.
    pub fn is_failure(&self) -> bool {
        self.result.is_err()
    }
}

/// Aggregated results from a batch processing operation.
#[derive(Debug, Clone)]
pub struct BatchResults<T> {
    /// Individual results for each processed file, in input order
    pub results: Vec<FileResult<T>>,
    /// Total processing time in milliseconds
    pub elapsed_ms: u128,
}

impl<T> BatchResults<T> {
    /// Create new batch results from a vector of file results.
    pub fn new(results: Vec<FileResult<T>>, elapsed_ms: u128) -> Self {
        Self {
            results,
            elapsed_ms,
        }
    }

    /// Get the total number of files processed.
    pub fn total_files(&self) -> usize {
        self.results.len()
    }

    /// Get the number of successfully processed files.
    pub fn success_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    /// Get the number of failed files.
    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_failure()).count()
    }

    /// Check if any files failed.
    pub fn has_failures(&self) -> bool {
        self.results.iter().any(|r| r.is_failure())
    }

    /// Get an iterator over failed results.
    pub fn failures(&self) -> impl Iterator<Item = &FileResult<T>> {
        self.results.iter().filter(|r| r.is_failure())
    }
}

/// An operation applied to each file of a batch.
///
/// The operation must be thread-safe (Send + Sync) to support parallel
/// processing.
///
/// # Examples
///
/// ```rust
/// use csvxml_cli::batch::BatchOperation;
/// use csvxml_cli::error::CliError;
/// use std::path::Path;
///
/// struct CountLinesOperation;
///
/// impl BatchOperation for CountLinesOperation {
///     type Output = usize;
///
///     fn process_file(&self, path: &Path) -> Result<Self::Output, CliError> {
///         let content = std::fs::read_to_string(path)
///             .map_err(|e| CliError::io_error(path, e))?;
///         Ok(content.lines().count())
///     }
///
///     fn name(&self) -> &str {
///         "count-lines"
///     }
/// }
/// ```
pub trait BatchOperation: Send + Sync {
    /// The output type for successful processing
    type Output: Send;

    /// Process a single file and return the result.
    fn process_file(&self, path: &Path) -> Result<Self::Output, CliError>;

    /// Get a human-readable name for this operation.
    fn name(&self) -> &str;
}

/// Progress tracker for batch operations.
#[derive(Debug)]
struct ProgressTracker {
    total: usize,
    processed: AtomicUsize,
    succeeded: AtomicUsize,
    failed: AtomicUsize,
    interval: usize,
    verbose: bool,
    start_time: Instant,
}

impl ProgressTracker {
    fn new(total: usize, interval: usize, verbose: bool) -> Self {
        Self {
            total,
            processed: AtomicUsize::new(0),
            succeeded: AtomicUsize::new(0),
            failed: AtomicUsize::new(0),
            interval,
            verbose,
            start_time: Instant::now(),
        }
    }

    fn record_success(&self, path: &Path) {
        let processed = self.processed.fetch_add(1, Ordering::Relaxed) + 1;
        self.succeeded.fetch_add(1, Ordering::Relaxed);

        if self.should_report(processed) {
            self.report_progress(path, true);
        }
    }

    fn record_failure(&self, path: &Path, error: &CliError) {
        let processed = self.processed.fetch_add(1, Ordering::Relaxed) + 1;
        self.failed.fetch_add(1, Ordering::Relaxed);

        if self.verbose {
            eprintln!("{} {} - {}", "✗".red().bold(), path.display(), error);
        }

        if self.should_report(processed) {
            self.report_progress(path, false);
        }
    }

    fn should_report(&self, processed: usize) -> bool {
        self.interval > 0 && (processed % self.interval == 0 || processed == self.total)
    }

    fn report_progress(&self, current_file: &Path, success: bool) {
        let processed = self.processed.load(Ordering::Relaxed);
        let succeeded = self.succeeded.load(Ordering::Relaxed);
        let failed = self.failed.load(Ordering::Relaxed);

        if self.verbose {
            let status = if success {
                "✓".green().bold()
            } else {
                "✗".red().bold()
            };
            eprintln!(
                "{} [{}/{}] {}",
                status,
                processed,
                self.total,
                current_file.display()
            );
        } else {
            eprintln!(
                "Progress: [{}/{}] {} succeeded, {} failed",
                processed, self.total, succeeded, failed
            );
        }
    }

    fn print_summary(&self, operation_name: &str) {
        let processed = self.processed.load(Ordering::Relaxed);
        let succeeded = self.succeeded.load(Ordering::Relaxed);
        let failed = self.failed.load(Ordering::Relaxed);
        let elapsed = self.start_time.elapsed();

        println!();
        println!("{}", "═".repeat(60).bright_blue());
        println!(
            "{} {}",
            "Batch Operation:".bright_blue().bold(),
            operation_name.bright_white()
        );
        println!("{}", "═".repeat(60).bright_blue());
        println!(
            "  {} {}",
            "Total files:".bright_cyan(),
            processed.to_string().bright_white()
        );
        println!(
            "  {} {}",
            "Succeeded:".green().bold(),
            succeeded.to_string().bright_white()
        );
        println!(
            "  {} {}",
            "Failed:".red().bold(),
            failed.to_string().bright_white()
        );
        println!(
            "  {} {:.2}s",
            "Elapsed:".bright_cyan(),
            elapsed.as_secs_f64()
        );
        println!("{}", "═".repeat(60).bright_blue());
    }
}

/// Batch processor choosing serial or parallel execution by batch size.
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    config: BatchConfig,
}

impl BatchProcessor {
    /// Create a new batch processor with the given configuration.
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    /// Process `files` with `operation`, collecting one result per file.
    ///
    /// Uses parallel processing when `files.len() >= config.parallel_threshold`.
    /// Results keep the input order either way.
    ///
    /// # Errors
    ///
    /// Individual file failures are recorded in the results. `Err` is
    /// reserved for failures of the batch itself.
    pub fn process<O>(
        &self,
        files: &[PathBuf],
        operation: O,
        show_progress: bool,
    ) -> Result<BatchResults<O::Output>, CliError>
    where
        O: BatchOperation,
    {
        let start_time = Instant::now();

        if files.is_empty() {
            return Ok(BatchResults::new(vec![], 0));
        }

        let tracker = show_progress.then(|| {
            ProgressTracker::new(
                files.len(),
                self.config.progress_interval,
                self.config.verbose,
            )
        });
        let run = |path: &PathBuf| process_one(path, &operation, tracker.as_ref());

        let results: Vec<FileResult<O::Output>> = if files.len() < self.config.parallel_threshold {
            debug!(files = files.len(), "processing batch serially");
            files.iter().map(run).collect()
        } else if let Some(max_threads) = self.config.max_threads {
            debug!(files = files.len(), max_threads, "processing batch in parallel");
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(max_threads)
                .build()
                .map_err(|e| CliError::invalid_input(format!("thread pool: {}", e)))?;
            pool.install(|| files.par_iter().map(run).collect())
        } else {
            debug!(files = files.len(), "processing batch in parallel");
            files.par_iter().map(run).collect()
        };

        if let Some(tracker) = tracker {
            tracker.print_summary(operation.name());
        }

        Ok(BatchResults::new(
            results,
            start_time.elapsed().as_millis(),
        ))
    }
}

fn process_one<O: BatchOperation>(
    path: &Path,
    operation: &O,
    tracker: Option<&ProgressTracker>,
) -> FileResult<O::Output> {
    let result = operation.process_file(path);

    if let Some(t) = tracker {
        match &result {
            Ok(_) => t.record_success(path),
            Err(e) => t.record_failure(path, e),
        }
    }

    FileResult {
        path: path.to_path_buf(),
        result,
    }
}

/// Convert each file to its counterpart next to it, using one shared mapping.
#[derive(Debug, Clone)]
pub struct ConvertOperation {
    spec: MappingSpecification,
}

impl ConvertOperation {
    /// Create a conversion operation for `spec`.
    pub fn new(spec: MappingSpecification) -> Self {
        Self { spec }
    }
}

impl BatchOperation for ConvertOperation {
    /// The written output path.
    type Output = PathBuf;

    fn process_file(&self, path: &Path) -> Result<Self::Output, CliError> {
        let output = output_path(path)?;
        let converted = convert_file(path, &self.spec)?;
        write_output(&converted, Some(&output))?;
        Ok(output)
    }

    fn name(&self) -> &str {
        "convert"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    struct LengthOperation;

    impl BatchOperation for LengthOperation {
        type Output = usize;

        fn process_file(&self, path: &Path) -> Result<Self::Output, CliError> {
            fs::read_to_string(path)
                .map(|s| s.len())
                .map_err(|e| CliError::io_error(path, e))
        }

        fn name(&self) -> &str {
            "length"
        }
    }

    fn files(dir: &Path, count: usize) -> Vec<PathBuf> {
        (0..count)
            .map(|i| {
                let path = dir.join(format!("f{}.txt", i));
                fs::write(&path, "x".repeat(i)).unwrap();
                path
            })
            .collect()
    }

    #[test]
    fn test_empty_batch() {
        let results = BatchProcessor::new(BatchConfig::default())
            .process(&[], LengthOperation, false)
            .unwrap();
        assert_eq!(results.total_files(), 0);
        assert!(!results.has_failures());
    }

    #[test]
    fn test_parallel_keeps_input_order() {
        let dir = tempfile::tempdir().unwrap();
        let paths = files(dir.path(), 12);
        let config = BatchConfig {
            parallel_threshold: 1,
            max_threads: Some(2),
            ..Default::default()
        };

        let results = BatchProcessor::new(config)
            .process(&paths, LengthOperation, false)
            .unwrap();
        let lengths: Vec<usize> = results
            .results
            .iter()
            .map(|r| *r.result.as_ref().unwrap())
            .collect();
        assert_eq!(lengths, (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn test_failures_do_not_stop_batch() {
        let dir = tempfile::tempdir().unwrap();
        let mut paths = files(dir.path(), 3);
        paths.insert(1, dir.path().join("missing.txt"));

        let results = BatchProcessor::new(BatchConfig::default())
            .process(&paths, LengthOperation, false)
            .unwrap();
        assert_eq!(results.success_count(), 3);
        assert_eq!(results.failure_count(), 1);
        assert_eq!(
            results.failures().next().unwrap().path,
            dir.path().join("missing.txt")
        );
    }

    #[test]
    fn test_should_report_interval() {
        let tracker = ProgressTracker::new(5, 2, false);
        assert!(!tracker.should_report(1));
        assert!(tracker.should_report(2));
        assert!(tracker.should_report(5));

        let silent = ProgressTracker::new(5, 0, false);
        assert!(!silent.should_report(5));
    }
}
