//! Static layout analysis over type descriptors.
//!
//! The encoder lays values out in 32-byte words. A dynamic value occupies one
//! word in the head (an offset) and places its payload in the tail; a static
//! value occupies [`encoded_size`] bytes inline.

use crate::types::{Type, TypeShape};

/// Size in bytes of one encoded word.
pub const WORD_SIZE: usize = 32;

/// Whether the encoded length of a value of `ty` depends on the value.
pub fn is_dynamic(ty: &Type) -> bool {
    match ty.shape() {
        TypeShape::String | TypeShape::Bytes | TypeShape::Slice { .. } => true,
        TypeShape::Array { elem, .. } => is_dynamic(elem),
        TypeShape::Tuple { fields } => fields.iter().any(|f| is_dynamic(&f.ty)),
        _ => false,
    }
}

/// Types whose encoding starts with their own length prefix.
pub fn is_variable_input(ty: &Type) -> bool {
    matches!(
        ty.shape(),
        TypeShape::String | TypeShape::Bytes | TypeShape::Slice { .. }
    )
}

/// Bytes a value of `ty` occupies inline.
///
/// Static arrays and tuples are laid out in place and report their full
/// size. Dynamic types and scalars report a single word.
pub fn encoded_size(ty: &Type) -> usize {
    ty.encoded_size()
}

/// Inline size of a shape whose children are already built, or `None` if it
/// overflows `usize`.
pub(crate) fn static_size(shape: &TypeShape) -> Option<usize> {
    match shape {
        TypeShape::Array { elem, size } if !is_dynamic(elem) => match elem.shape() {
            TypeShape::Array { .. } | TypeShape::Tuple { .. } => {
                size.checked_mul(elem.encoded_size())
            }
            _ => size.checked_mul(WORD_SIZE),
        },
        TypeShape::Tuple { fields } if !fields.iter().any(|f| is_dynamic(&f.ty)) => fields
            .iter()
            .try_fold(0usize, |acc, f| acc.checked_add(f.ty.encoded_size())),
        _ => Some(WORD_SIZE),
    }
}
