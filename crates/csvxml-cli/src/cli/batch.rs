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

//! Batch processing command.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

/// Batch processing commands.
#[derive(Subcommand)]
pub enum BatchCommands {
    /// Convert every .csv and .xml file in a directory using its config.json
    Batch {
        /// Directory holding the inputs and config.json
        #[arg(value_name = "DIR", default_value = ".")]
        dir: String,

        /// Process files serially even for large batches
        #[arg(long)]
        serial: bool,

        /// Show a status line for every file
        #[arg(long)]
        progress: bool,
    },
}

impl BatchCommands {
    /// Execute the batch command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            BatchCommands::Batch {
                dir,
                serial,
                progress,
            } => commands::batch_convert(&dir, !serial, progress),
        }
    }
}
