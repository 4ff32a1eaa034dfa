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

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::ConvertError;
use crate::utils::{parse_big_uint, to_hex};

/// A coordinate as found in snarkjs/bellman output: a decimal string or,
/// in older exports, a bare JSON integer of any width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BigIntRepr {
    Text(String),
    Number(serde_json::Number),
}

impl<'de> Deserialize<'de> for BigIntRepr {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ReprVisitor;

        impl<'de> Visitor<'de> for ReprVisitor {
            type Value = BigIntRepr;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a decimal string or an integer")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(BigIntRepr::Text(v.to_owned()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(BigIntRepr::Number(v.into()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(BigIntRepr::Number(v.into()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                serde_json::Number::from_f64(v)
                    .map(BigIntRepr::Number)
                    .ok_or_else(|| E::custom("not a finite JSON number"))
            }

            // Integers wider than u64 arrive as serde_json's
            // arbitrary-precision representation, which replays as a
            // single-entry map holding the literal digits.
            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
                serde_json::Number::deserialize(de::value::MapAccessDeserializer::new(map))
                    .map(BigIntRepr::Number)
            }
        }

        deserializer.deserialize_any(ReprVisitor)
    }
}

#[derive(Debug, Eq, PartialEq)]
pub enum VkField {
    Alfa1,
    Beta2,
    Gamma2,
    Delta2,
    Ic,
}

impl VkField {
    pub fn str(&self) -> &'static str {
        match self {
            VkField::Alfa1 => "vk_alfa_1",
            VkField::Beta2 => "vk_beta_2",
            VkField::Gamma2 => "vk_gamma_2",
            VkField::Delta2 => "vk_delta_2",
            VkField::Ic => "IC",
        }
    }
}

/// Verification key as exported by snarkjs/bellman (`export_keys`).
///
/// G1 points are projective triples and G2 points carry a projective third
/// row; the conversion only reads the affine part. Sibling fields such as
/// `protocol`, `nPublic` or `vk_alfabeta_12` are ignored.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct SnarkjsVerifyingKey {
    pub vk_alfa_1: Vec<BigIntRepr>,
    pub vk_beta_2: Vec<Vec<BigIntRepr>>,
    pub vk_gamma_2: Vec<Vec<BigIntRepr>>,
    pub vk_delta_2: Vec<Vec<BigIntRepr>>,
    #[serde(rename = "IC")]
    pub ic: Vec<Vec<BigIntRepr>>,
}

/// Verification key in the layout ethsnarks verifiers consume.
///
/// Fields are declared in sorted key order so the serialized document matches
/// the historical `sort_keys` output byte for byte.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct EthsnarksVerifyingKey {
    pub alpha: [String; 2],
    pub beta: [[String; 2]; 2],
    pub delta: [[String; 2]; 2],
    pub gamma: [[String; 2]; 2],
    #[serde(rename = "gammaABC")]
    pub gamma_abc: [[String; 2]; 2],
}

impl EthsnarksVerifyingKey {
    /// Serialize with 4-space indentation and the declared key order.
    pub fn to_json(&self) -> String {
        let mut out = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
        self.serialize(&mut ser)
            .expect("a key of plain strings always serializes");
        String::from_utf8(out).expect("serde_json output is always UTF-8")
    }
}

impl TryFrom<&SnarkjsVerifyingKey> for EthsnarksVerifyingKey {
    type Error = ConvertError;

    fn try_from(vk: &SnarkjsVerifyingKey) -> Result<Self, Self::Error> {
        Ok(Self {
            alpha: convert_scalar_pair(VkField::Alfa1.str(), &vk.vk_alfa_1)?,
            beta: convert_coord_matrix(VkField::Beta2.str(), &vk.vk_beta_2)?,
            delta: convert_coord_matrix(VkField::Delta2.str(), &vk.vk_delta_2)?,
            gamma: convert_coord_matrix(VkField::Gamma2.str(), &vk.vk_gamma_2)?,
            gamma_abc: convert_ic(VkField::Ic.str(), &vk.ic)?,
        })
    }
}

fn hex_value(field: &'static str, repr: &BigIntRepr) -> Result<String, ConvertError> {
    Ok(to_hex(&parse_big_uint(field, repr)?))
}

/// Affine part of a projective G1 point, decimal to hex, order preserved.
pub(crate) fn convert_scalar_pair(
    field: &'static str,
    values: &[BigIntRepr],
) -> Result<[String; 2], ConvertError> {
    if values.len() < 2 {
        return Err(ConvertError::WrongArity {
            field,
            expected: 2,
            actual: values.len(),
        });
    }
    Ok([hex_value(field, &values[0])?, hex_value(field, &values[1])?])
}

/// First two rows of a G2 coordinate matrix, with the two Fq2 components of
/// each row swapped: `out[i][j] = hex(rows[i][1 - j])`. Ethsnarks expects the
/// real part last.
pub(crate) fn convert_coord_matrix(
    field: &'static str,
    rows: &[Vec<BigIntRepr>],
) -> Result<[[String; 2]; 2], ConvertError> {
    if rows.len() < 2 {
        return Err(ConvertError::WrongArity {
            field,
            expected: 2,
            actual: rows.len(),
        });
    }
    let swapped = |i: usize| -> Result<[String; 2], ConvertError> {
        let row = &rows[i];
        if row.len() != 2 {
            return Err(ConvertError::WrongArity {
                field,
                expected: 2,
                actual: row.len(),
            });
        }
        Ok([hex_value(field, &row[1])?, hex_value(field, &row[0])?])
    };
    Ok([swapped(0)?, swapped(1)?])
}

/// IC entries copied in source order, decimal to hex, no reversal.
///
/// The ethsnarks layout produced here hard-codes exactly 2 entries (a single
/// public input); keys with more public inputs are rejected rather than
/// silently truncated.
pub(crate) fn convert_ic(
    field: &'static str,
    rows: &[Vec<BigIntRepr>],
) -> Result<[[String; 2]; 2], ConvertError> {
    if rows.len() != 2 {
        return Err(ConvertError::WrongArity {
            field,
            expected: 2,
            actual: rows.len(),
        });
    }
    let straight = |i: usize| -> Result<[String; 2], ConvertError> {
        let row = &rows[i];
        if row.len() < 2 {
            return Err(ConvertError::WrongArity {
                field,
                expected: 2,
                actual: row.len(),
            });
        }
        Ok([hex_value(field, &row[0])?, hex_value(field, &row[1])?])
    };
    Ok([straight(0)?, straight(1)?])
}
