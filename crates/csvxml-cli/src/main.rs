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

//! CSVXML Command Line Interface

use clap::Parser;
use csvxml_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// CSVXML - declarative CSV/XML mapping
///
/// # Examples
///
/// ```bash
/// # people.csv -> people.xml
/// csvxml convert people.csv mapping.json
///
/// # XML back to CSV on stdout
/// csvxml convert people.xml mapping.json -o -
///
/// # Every .csv/.xml file in ./data, using ./data/config.json
/// csvxml batch data
/// ```
#[derive(Parser)]
#[command(name = "csvxml")]
#[command(author, version, about = "CSVXML - declarative CSV/XML mapping", long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "csvxml=debug" } else { "csvxml=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
