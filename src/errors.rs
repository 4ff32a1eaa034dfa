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

use snafu::Snafu;

/// Errors produced while reshaping a parsed verification key.
#[derive(Debug, PartialEq, Eq, Snafu)]
pub enum ConvertError {
    /// A field does not hold the number of entries the target layout needs.
    #[snafu(display("Field '{field}' has {actual} entries, expected {expected}"))]
    WrongArity {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    /// A coordinate value is not a non-negative decimal integer.
    #[snafu(display("Value '{value}' in field '{field}' is not a non-negative integer"))]
    NotAnInteger { field: &'static str, value: String },
}
