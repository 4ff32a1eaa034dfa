// Copyright 2025 Horizen Labs, Inc.
// SPDX-License-Identifier: Apache-2.0 or MIT

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// 	http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{env, fs, process};

use snafu::{ResultExt, Snafu};

use vk2ethsnarks::{convert, errors::ConvertError, SnarkjsVerifyingKey};

#[derive(Debug, Snafu)]
enum CliError {
    #[snafu(display("Cannot read '{path}': {source}"))]
    InputRead {
        path: String,
        source: std::io::Error,
    },
    #[snafu(display("'{path}' is not valid JSON: {source}"))]
    InvalidJson {
        path: String,
        source: serde_json::Error,
    },
    #[snafu(display("'{path}' is not a snarkjs verification key: {source}"))]
    Schema {
        path: String,
        source: serde_json::Error,
    },
    #[snafu(display("Cannot convert '{path}': {source}"))]
    Malformed {
        path: String,
        source: ConvertError,
    },
    #[snafu(display("Cannot write '{path}': {source}"))]
    OutputWrite {
        path: String,
        source: std::io::Error,
    },
}

impl CliError {
    fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            CliError::InputRead { .. } => exitcode::NOINPUT,
            CliError::InvalidJson { .. }
            | CliError::Schema { .. }
            | CliError::Malformed { .. } => exitcode::DATAERR,
            CliError::OutputWrite { .. } => exitcode::IOERR,
        }
    }
}

fn run(input: &str, output: &str) -> Result<(), CliError> {
    let raw = fs::read_to_string(input).context(InputReadSnafu { path: input })?;

    // Two-step parse so a syntax error and a schema violation report
    // differently.
    let document: serde_json::Value =
        serde_json::from_str(&raw).context(InvalidJsonSnafu { path: input })?;
    let vk: SnarkjsVerifyingKey =
        serde_json::from_value(document).context(SchemaSnafu { path: input })?;

    // The whole target document is built and serialized before the output
    // path is touched; a failing conversion leaves no partial file behind.
    let converted = convert(&vk).context(MalformedSnafu { path: input })?;
    let json = converted.to_json();

    fs::write(output, json).context(OutputWriteSnafu { path: output })?;

    println!("Created {output}.");
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: vk2ethsnarks <input_vk.json> <output_vk.json>");
        process::exit(exitcode::USAGE);
    }

    if let Err(e) = run(&args[1], &args[2]) {
        eprintln!("Error: {e}");
        process::exit(e.exit_code());
    }
}
