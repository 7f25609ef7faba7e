//! Type descriptors for contract ABI signatures.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::{AbiError, Result};
use crate::layout;
use crate::native::NativeHint;

/// Largest integer width the ABI can encode in one word.
pub const MAX_INT_BITS: u32 = 256;
/// Largest fixed byte array (`bytes32`).
pub const MAX_FIXED_BYTES: u32 = 32;
/// Address (20 bytes) followed by a 4-byte selector.
pub const FUNCTION_BYTES: u32 = 24;
pub const ADDRESS_BYTES: u32 = 20;

/// Kind of an ABI type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    Bool,
    #[serde(rename = "Uint")]
    UInt,
    Int,
    String,
    Array,
    Slice,
    Address,
    Bytes,
    FixedBytes,
    /// Reserved: part of the kind set consumers match on, but no signature
    /// resolves to it.
    FixedPoint,
    Tuple,
    Function,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Bool => "Bool",
            Kind::UInt => "Uint",
            Kind::Int => "Int",
            Kind::String => "String",
            Kind::Array => "Array",
            Kind::Slice => "Slice",
            Kind::Address => "Address",
            Kind::Bytes => "Bytes",
            Kind::FixedBytes => "FixedBytes",
            Kind::FixedPoint => "FixedPoint",
            Kind::Tuple => "Tuple",
            Kind::Function => "Function",
        };
        write!(f, "{}", name)
    }
}

/// A named tuple component. Names are labels only and may be empty or repeated.
#[derive(Debug, Clone)]
pub struct TupleField {
    pub name: String,
    pub ty: Type,
}

impl TupleField {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Variant-specific payload of a [`Type`].
#[derive(Debug, Clone)]
pub enum TypeShape {
    Bool,
    UInt { bits: u16 },
    Int { bits: u16 },
    String,
    Address,
    Bytes,
    FixedBytes { size: u8 },
    Function,
    Array { elem: Box<Type>, size: usize },
    Slice { elem: Box<Type> },
    Tuple { fields: Vec<TupleField> },
}

/// An immutable, parsed ABI type.
///
/// The canonical text is rendered once, bottom-up, when the descriptor is
/// built. Two descriptors compare equal iff their canonical texts are equal;
/// tuple field names do not take part in equality.
#[derive(Debug, Clone)]
pub struct Type {
    shape: TypeShape,
    canonical: String,
    native: NativeHint,
    encoded_size: usize,
}

impl Type {
    fn from_parts(shape: TypeShape, canonical: String, native: NativeHint) -> Self {
        Self {
            shape,
            canonical,
            native,
            encoded_size: layout::WORD_SIZE,
        }
    }

    /// Arrays and tuples carry their static size, checked once here.
    fn composite(shape: TypeShape, canonical: String, native: NativeHint) -> Result<Self> {
        let Some(encoded_size) = layout::static_size(&shape) else {
            return Err(AbiError::bad_array_size(
                canonical,
                "static encoded size does not fit in memory",
            ));
        };
        Ok(Self {
            shape,
            canonical,
            native,
            encoded_size,
        })
    }

    pub fn bool() -> Self {
        Self::from_parts(TypeShape::Bool, "bool".to_string(), NativeHint::Bool)
    }

    pub fn string() -> Self {
        Self::from_parts(TypeShape::String, "string".to_string(), NativeHint::String)
    }

    pub fn address() -> Self {
        Self::from_parts(TypeShape::Address, "address".to_string(), NativeHint::Address)
    }

    pub fn bytes() -> Self {
        Self::from_parts(TypeShape::Bytes, "bytes".to_string(), NativeHint::ByteVec)
    }

    pub fn function() -> Self {
        Self::from_parts(
            TypeShape::Function,
            "function".to_string(),
            NativeHint::Function,
        )
    }

    pub fn uint(bits: u32) -> Result<Self> {
        let bits = check_int_width("uint", bits)?;
        Ok(Self::from_parts(
            TypeShape::UInt { bits },
            format!("uint{}", bits),
            NativeHint::for_uint(bits),
        ))
    }

    pub fn int(bits: u32) -> Result<Self> {
        let bits = check_int_width("int", bits)?;
        Ok(Self::from_parts(
            TypeShape::Int { bits },
            format!("int{}", bits),
            NativeHint::for_int(bits),
        ))
    }

    pub fn fixed_bytes(size: u32) -> Result<Self> {
        if size == 0 || size > MAX_FIXED_BYTES {
            return Err(AbiError::bad_width(
                format!("bytes{}", size),
                format!("fixed bytes size must be between 1 and {}", MAX_FIXED_BYTES),
            ));
        }
        Ok(Self::from_parts(
            TypeShape::FixedBytes { size: size as u8 },
            format!("bytes{}", size),
            NativeHint::ByteArray,
        ))
    }

    pub fn array(elem: Type, size: usize) -> Result<Self> {
        let canonical = format!("{}[{}]", elem.canonical, size);
        Self::composite(
            TypeShape::Array {
                elem: Box::new(elem),
                size,
            },
            canonical,
            NativeHint::FixedArray,
        )
    }

    pub fn slice(elem: Type) -> Self {
        let canonical = format!("{}[]", elem.canonical);
        Self::from_parts(
            TypeShape::Slice {
                elem: Box::new(elem),
            },
            canonical,
            NativeHint::Sequence,
        )
    }

    pub fn tuple(fields: Vec<TupleField>) -> Result<Self> {
        if fields.is_empty() {
            return Err(AbiError::TupleArity);
        }
        let inner: Vec<&str> = fields.iter().map(|f| f.ty.canonical()).collect();
        let canonical = format!("({})", inner.join(","));
        Self::composite(TypeShape::Tuple { fields }, canonical, NativeHint::Record)
    }

    /// Build the descriptor for an external ABI argument entry.
    pub fn from_argument(arg: &crate::argument::Argument) -> Result<Self> {
        let signature = crate::argument::canonical_type_string(arg)?;
        crate::parser::parse_type(&signature)
    }

    pub fn shape(&self) -> &TypeShape {
        &self.shape
    }

    pub fn kind(&self) -> Kind {
        match self.shape {
            TypeShape::Bool => Kind::Bool,
            TypeShape::UInt { .. } => Kind::UInt,
            TypeShape::Int { .. } => Kind::Int,
            TypeShape::String => Kind::String,
            TypeShape::Address => Kind::Address,
            TypeShape::Bytes => Kind::Bytes,
            TypeShape::FixedBytes { .. } => Kind::FixedBytes,
            TypeShape::Function => Kind::Function,
            TypeShape::Array { .. } => Kind::Array,
            TypeShape::Slice { .. } => Kind::Slice,
            TypeShape::Tuple { .. } => Kind::Tuple,
        }
    }

    /// Bit width for integers, byte width for fixed bytes and functions,
    /// zero for everything else.
    pub fn width(&self) -> u32 {
        match self.shape {
            TypeShape::UInt { bits } | TypeShape::Int { bits } => bits as u32,
            TypeShape::FixedBytes { size } => size as u32,
            TypeShape::Function => FUNCTION_BYTES,
            _ => 0,
        }
    }

    pub fn element(&self) -> Option<&Type> {
        match &self.shape {
            TypeShape::Array { elem, .. } | TypeShape::Slice { elem } => Some(elem),
            _ => None,
        }
    }

    pub fn array_size(&self) -> Option<usize> {
        match self.shape {
            TypeShape::Array { size, .. } => Some(size),
            _ => None,
        }
    }

    pub fn fields(&self) -> &[TupleField] {
        match &self.shape {
            TypeShape::Tuple { fields } => fields,
            _ => &[],
        }
    }

    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    pub fn native_hint(&self) -> NativeHint {
        self.native
    }

    pub fn is_dynamic(&self) -> bool {
        layout::is_dynamic(self)
    }

    pub fn is_variable_input(&self) -> bool {
        layout::is_variable_input(self)
    }

    /// Static encoded size in bytes, see [`layout::encoded_size`].
    pub fn encoded_size(&self) -> usize {
        self.encoded_size
    }

    pub fn encoded_words(&self) -> usize {
        self.encoded_size() / layout::WORD_SIZE
    }
}

/// Validate an integer width: a positive multiple of 8, at most 256 bits.
pub(crate) fn check_int_width(prefix: &str, bits: u32) -> Result<u16> {
    let ty = format!("{}{}", prefix, bits);
    if bits == 0 {
        return Err(AbiError::bad_width(ty, "width must be positive"));
    }
    if bits % 8 != 0 {
        return Err(AbiError::bad_width(ty, "width must be a multiple of 8"));
    }
    if bits > MAX_INT_BITS {
        return Err(AbiError::bad_width(
            ty,
            format!("width must not exceed {}", MAX_INT_BITS),
        ));
    }
    Ok(bits as u16)
}

/// Canonical function signature, e.g. `transfer(address,uint256)`.
pub fn function_signature(name: &str, inputs: &[Type]) -> String {
    let args: Vec<&str> = inputs.iter().map(Type::canonical).collect();
    format!("{}({})", name, args.join(","))
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for Type {}

impl Hash for Type {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical.hash(state);
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

impl FromStr for Type {
    type Err = AbiError;

    fn from_str(s: &str) -> Result<Self> {
        crate::parser::parse_type(s)
    }
}

impl Serialize for Type {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.canonical)
    }
}

impl<'de> Deserialize<'de> for Type {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let signature = String::deserialize(deserializer)?;
        signature.parse().map_err(serde::de::Error::custom)
    }
}
