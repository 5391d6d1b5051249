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

//! Single-file conversion command.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

/// Format conversion commands.
///
/// The direction follows the input extension: `.csv` becomes XML and `.xml`
/// becomes CSV.
#[derive(Subcommand)]
pub enum ConversionCommands {
    /// Convert one CSV file to XML, or one XML file to CSV
    Convert {
        /// Input .csv or .xml file
        #[arg(value_name = "INPUT")]
        input: String,

        /// Mapping configuration (JSON)
        #[arg(value_name = "CONFIG")]
        config: String,

        /// Output file path ("-" for stdout; defaults to INPUT with the swapped extension)
        #[arg(short, long)]
        output: Option<String>,
    },
}

impl ConversionCommands {
    /// Execute the conversion command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            ConversionCommands::Convert {
                input,
                config,
                output,
            } => commands::convert(&input, &config, output.as_deref()),
        }
    }
}
