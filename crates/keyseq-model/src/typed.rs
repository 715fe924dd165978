// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Typed Arrays
//!
//! Fixed-width numeric arrays backed by little-endian bytes. The length of a
//! typed array is the number of whole elements its bytes hold; trailing bytes
//! that do not fill an element are ignored.
//!
//! ```rust
//! use keyseq_model::typed::{TypedArray, TypedArrayKind};
//!
//! let ints = TypedArray::zeroed(TypedArrayKind::Int32, 1);
//! assert_eq!(ints.len(), 1);
//! assert_eq!(ints.class().name(), "Int32Array");
//! assert_eq!(ints.values().collect::<Vec<_>>(), vec![0.0]);
//! ```

use crate::class::Class;
use num_traits::AsPrimitive;
use std::slice::ChunksExact;

/// Element type of a typed array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypedArrayKind {
    Int8,
    Uint8,
    Uint8Clamped,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Float32,
    Float64,
    BigInt64,
    BigUint64,
}

macro_rules! read_le {
    ($ty:ty, $chunk:expr) => {{
        let mut buf = [0u8; std::mem::size_of::<$ty>()];
        buf.copy_from_slice(&$chunk[..std::mem::size_of::<$ty>()]);
        widen(<$ty>::from_le_bytes(buf))
    }};
}

#[inline(always)]
fn widen<T: AsPrimitive<f64>>(value: T) -> f64 {
    value.as_()
}

impl TypedArrayKind {
    /// Every kind, in declaration order.
    pub const ALL: [TypedArrayKind; 11] = [
        Self::Int8,
        Self::Uint8,
        Self::Uint8Clamped,
        Self::Int16,
        Self::Uint16,
        Self::Int32,
        Self::Uint32,
        Self::Float32,
        Self::Float64,
        Self::BigInt64,
        Self::BigUint64,
    ];

    /// Position of this kind within [`TypedArrayKind::ALL`].
    #[inline]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// The class name of arrays of this kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int8 => "Int8Array",
            Self::Uint8 => "Uint8Array",
            Self::Uint8Clamped => "Uint8ClampedArray",
            Self::Int16 => "Int16Array",
            Self::Uint16 => "Uint16Array",
            Self::Int32 => "Int32Array",
            Self::Uint32 => "Uint32Array",
            Self::Float32 => "Float32Array",
            Self::Float64 => "Float64Array",
            Self::BigInt64 => "BigInt64Array",
            Self::BigUint64 => "BigUint64Array",
        }
    }

    /// Width of one element in bytes.
    pub const fn element_size(self) -> usize {
        match self {
            Self::Int8 | Self::Uint8 | Self::Uint8Clamped => 1,
            Self::Int16 | Self::Uint16 => 2,
            Self::Int32 | Self::Uint32 | Self::Float32 => 4,
            Self::Float64 | Self::BigInt64 | Self::BigUint64 => 8,
        }
    }

    /// Decodes one element. `chunk` must hold at least `element_size` bytes.
    fn decode(self, chunk: &[u8]) -> f64 {
        match self {
            Self::Int8 => read_le!(i8, chunk),
            Self::Uint8 | Self::Uint8Clamped => read_le!(u8, chunk),
            Self::Int16 => read_le!(i16, chunk),
            Self::Uint16 => read_le!(u16, chunk),
            Self::Int32 => read_le!(i32, chunk),
            Self::Uint32 => read_le!(u32, chunk),
            Self::Float32 => read_le!(f32, chunk),
            Self::Float64 => read_le!(f64, chunk),
            Self::BigInt64 => read_le!(i64, chunk),
            Self::BigUint64 => read_le!(u64, chunk),
        }
    }
}

impl std::fmt::Display for TypedArrayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A fixed-width numeric array.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedArray {
    kind: TypedArrayKind,
    class: Class,
    bytes: Vec<u8>,
}

impl TypedArray {
    /// Views `bytes` as elements of `kind`.
    pub fn from_bytes(kind: TypedArrayKind, bytes: Vec<u8>) -> Self {
        Self {
            kind,
            class: Class::typed_array_of(kind).clone(),
            bytes,
        }
    }

    /// A typed array of `len` zero elements.
    pub fn zeroed(kind: TypedArrayKind, len: usize) -> Self {
        Self::from_bytes(kind, vec![0; len * kind.element_size()])
    }

    /// Replaces the class, e.g. with a subclass of the kind's class.
    pub fn with_class(mut self, class: Class) -> Self {
        self.class = class;
        self
    }

    #[inline]
    pub fn kind(&self) -> TypedArrayKind {
        self.kind
    }

    #[inline]
    pub fn class(&self) -> &Class {
        &self.class
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len() / self.kind.element_size()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The elements in order, widened to `f64`.
    #[inline]
    pub fn values(&self) -> TypedValues<'_> {
        TypedValues {
            kind: self.kind,
            chunks: self.bytes.chunks_exact(self.kind.element_size()),
        }
    }
}

/// Iterator over the decoded elements of a [`TypedArray`].
#[derive(Debug, Clone)]
pub struct TypedValues<'a> {
    kind: TypedArrayKind,
    chunks: ChunksExact<'a, u8>,
}

impl Iterator for TypedValues<'_> {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        self.chunks.next().map(|c| self.kind.decode(c))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for TypedValues<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_counts_whole_elements() {
        assert_eq!(TypedArray::from_bytes(TypedArrayKind::Int32, vec![0; 4]).len(), 1);
        assert_eq!(TypedArray::from_bytes(TypedArrayKind::Int32, vec![0; 7]).len(), 1);
        assert_eq!(TypedArray::from_bytes(TypedArrayKind::Float64, vec![0; 16]).len(), 2);
        assert!(TypedArray::from_bytes(TypedArrayKind::Uint16, vec![0; 1]).is_empty());
    }

    #[test]
    fn test_decodes_little_endian() {
        let ints = TypedArray::from_bytes(TypedArrayKind::Int16, vec![0x01, 0x00, 0xff, 0xff]);
        assert_eq!(ints.values().collect::<Vec<_>>(), vec![1.0, -1.0]);

        let floats =
            TypedArray::from_bytes(TypedArrayKind::Float32, 1.5f32.to_le_bytes().to_vec());
        assert_eq!(floats.values().collect::<Vec<_>>(), vec![1.5]);
    }

    #[test]
    fn test_kind_metadata() {
        for kind in TypedArrayKind::ALL {
            assert!(Class::typed_array_of(kind).extends(Class::typed_array()));
            assert_eq!(Class::typed_array_of(kind).name(), kind.name());
        }
        assert_eq!(TypedArrayKind::BigUint64.element_size(), 8);
    }

    #[test]
    fn test_with_class_keeps_elements() {
        let sub = Class::with_parent("Pixels", Class::typed_array_of(TypedArrayKind::Uint8));
        let pixels = TypedArray::from_bytes(TypedArrayKind::Uint8, vec![1, 2, 3]).with_class(sub);
        assert_eq!(pixels.class().name(), "Pixels");
        assert!(pixels.class().extends_named("Uint8Array"));
        assert_eq!(pixels.values().len(), 3);
    }
}
