//! Host representation hints.
//!
//! A descriptor only records an opaque [`NativeHint`]; the encoder/decoder
//! resolves it to a concrete host type through [`NativeHint::host_type`].

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NativeHint {
    Bool,
    U8,
    U16,
    U32,
    U64,
    BigUint,
    I8,
    I16,
    I32,
    I64,
    BigInt,
    Address,
    String,
    ByteVec,
    ByteArray,
    Function,
    FixedArray,
    Sequence,
    Record,
}

/// Widths with a dedicated fixed-size integer representation.
static UINT_HINTS: Lazy<BTreeMap<u16, NativeHint>> = Lazy::new(|| {
    BTreeMap::from([
        (8, NativeHint::U8),
        (16, NativeHint::U16),
        (32, NativeHint::U32),
        (64, NativeHint::U64),
    ])
});

static INT_HINTS: Lazy<BTreeMap<u16, NativeHint>> = Lazy::new(|| {
    BTreeMap::from([
        (8, NativeHint::I8),
        (16, NativeHint::I16),
        (32, NativeHint::I32),
        (64, NativeHint::I64),
    ])
});

static HOST_TYPES: Lazy<BTreeMap<NativeHint, &'static str>> = Lazy::new(|| {
    BTreeMap::from([
        (NativeHint::Bool, "bool"),
        (NativeHint::U8, "u8"),
        (NativeHint::U16, "u16"),
        (NativeHint::U32, "u32"),
        (NativeHint::U64, "u64"),
        (NativeHint::BigUint, "num_bigint::BigUint"),
        (NativeHint::I8, "i8"),
        (NativeHint::I16, "i16"),
        (NativeHint::I32, "i32"),
        (NativeHint::I64, "i64"),
        (NativeHint::BigInt, "num_bigint::BigInt"),
        (NativeHint::Address, "[u8; 20]"),
        (NativeHint::String, "String"),
        (NativeHint::ByteVec, "Vec<u8>"),
        (NativeHint::ByteArray, "[u8; N]"),
        (NativeHint::Function, "[u8; 24]"),
        (NativeHint::FixedArray, "[T; N]"),
        (NativeHint::Sequence, "Vec<T>"),
        (NativeHint::Record, "BTreeMap<String, Value>"),
    ])
});

impl NativeHint {
    /// Hint for an unsigned integer of `bits` width. Widths without a
    /// fixed-size host integer fall back to an arbitrary-precision one.
    pub fn for_uint(bits: u16) -> Self {
        UINT_HINTS.get(&bits).copied().unwrap_or(NativeHint::BigUint)
    }

    pub fn for_int(bits: u16) -> Self {
        INT_HINTS.get(&bits).copied().unwrap_or(NativeHint::BigInt)
    }

    /// Name of the host-side representation used at the codec boundary.
    pub fn host_type(&self) -> &'static str {
        HOST_TYPES.get(self).copied().unwrap_or("unknown")
    }
}

impl fmt::Display for NativeHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.host_type())
    }
}
