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

use num_bigint::BigUint;

use crate::{errors::ConvertError, key::BigIntRepr};

/// Canonical hexadecimal form for the output document: `0x`-prefixed,
/// lowercase digits, minimal width.
pub(crate) fn to_hex(n: &BigUint) -> String {
    format!("{n:#x}")
}

// Coordinates may arrive as decimal strings or as plain JSON integers.
pub(crate) fn parse_big_uint(
    field: &'static str,
    repr: &BigIntRepr,
) -> Result<BigUint, ConvertError> {
    match repr {
        BigIntRepr::Text(s) => {
            BigUint::parse_bytes(s.as_bytes(), 10).ok_or_else(|| ConvertError::NotAnInteger {
                field,
                value: s.clone(),
            })
        }
        BigIntRepr::Number(n) => {
            let digits = n.to_string();
            BigUint::parse_bytes(digits.as_bytes(), 10).ok_or(ConvertError::NotAnInteger {
                field,
                value: digits,
            })
        }
    }
}
