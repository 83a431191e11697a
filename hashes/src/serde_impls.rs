// SPDX-License-Identifier: CC0-1.0

//! Serde trait implementations for the digest type.
//!
//! Human-readable formats get the usual 64 character hex string, binary formats get the raw 32
//! bytes.

use core::{fmt, str};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::sha256::Hash;

impl Serialize for Hash {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        if s.is_human_readable() {
            s.collect_str(self)
        } else {
            s.serialize_bytes(self.as_bytes())
        }
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Hash, D::Error> {
        if d.is_human_readable() {
            d.deserialize_str(HexVisitor)
        } else {
            d.deserialize_bytes(BytesVisitor)
        }
    }
}

struct HexVisitor;

impl<'de> de::Visitor<'de> for HexVisitor {
    type Value = Hash;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an ASCII hex string")
    }

    fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        if let Ok(hex) = str::from_utf8(v) {
            hex.parse().map_err(E::custom)
        } else {
            Err(E::invalid_value(de::Unexpected::Bytes(v), &self))
        }
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        v.parse().map_err(E::custom)
    }
}

struct BytesVisitor;

impl<'de> de::Visitor<'de> for BytesVisitor {
    type Value = Hash;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a 32 byte bytestring")
    }

    fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        // from_slice only errors on incorrect length
        Hash::from_slice(v).map_err(|_| E::invalid_length(v.len(), &self))
    }
}
