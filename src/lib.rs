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

#![doc = include_str!("../README.md")]

pub mod errors;
pub mod key;
mod utils;

pub use key::{BigIntRepr, EthsnarksVerifyingKey, SnarkjsVerifyingKey};

use errors::ConvertError;

/// Reshape a parsed snarkjs/bellman verification key into the ethsnarks
/// layout: decimal coordinates become `0x`-prefixed lowercase hex, and the
/// two Fq2 components of each G2 row swap places.
pub fn convert(vk: &SnarkjsVerifyingKey) -> Result<EthsnarksVerifyingKey, ConvertError> {
    EthsnarksVerifyingKey::try_from(vk)
}
