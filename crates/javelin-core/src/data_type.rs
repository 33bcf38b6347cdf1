//! DataType - the static type of a value, variable or method result.
//!
//! A [`DataType`] wraps the [`TypeHash`] of a primitive type, the null type, a
//! class or an interface. Classification of primitives is answered locally;
//! questions that need the class hierarchy (subtyping, assignability) are
//! answered by the registry.
//!
//! # Example
//!
//! ```
//! use javelin_core::{DataType, PrimitiveKind, primitives};
//!
//! let int = DataType::simple(primitives::INT);
//! assert_eq!(int.primitive_kind(), Some(PrimitiveKind::Int));
//! assert!(int.is_integral());
//! assert!(!DataType::void().is_reference());
//! ```

use crate::{TypeHash, primitives};

/// Primitive kinds of the checked language, plus the null type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Void,
    Boolean,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
    Null,
}

impl PrimitiveKind {
    /// All primitive kinds, in declaration order.
    pub const ALL: [PrimitiveKind; 10] = [
        PrimitiveKind::Void,
        PrimitiveKind::Boolean,
        PrimitiveKind::Byte,
        PrimitiveKind::Short,
        PrimitiveKind::Char,
        PrimitiveKind::Int,
        PrimitiveKind::Long,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
        PrimitiveKind::Null,
    ];

    /// Keyword spelling of this kind.
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Void => "void",
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Null => "null",
        }
    }

    /// Hash identifying this kind.
    pub fn type_hash(self) -> TypeHash {
        match self {
            PrimitiveKind::Void => primitives::VOID,
            PrimitiveKind::Boolean => primitives::BOOLEAN,
            PrimitiveKind::Byte => primitives::BYTE,
            PrimitiveKind::Short => primitives::SHORT,
            PrimitiveKind::Char => primitives::CHAR,
            PrimitiveKind::Int => primitives::INT,
            PrimitiveKind::Long => primitives::LONG,
            PrimitiveKind::Float => primitives::FLOAT,
            PrimitiveKind::Double => primitives::DOUBLE,
            PrimitiveKind::Null => primitives::NULL,
        }
    }

    /// Look up the kind for a hash, if the hash names a primitive.
    pub fn from_hash(hash: TypeHash) -> Option<PrimitiveKind> {
        Self::ALL.into_iter().find(|kind| kind.type_hash() == hash)
    }

    /// Numeric promotion rank; `None` for non-numeric kinds.
    ///
    /// `byte < short < int < long < float < double`, with `char` ranked with
    /// `short` but never implicitly convertible to or from it.
    pub fn numeric_rank(self) -> Option<u8> {
        match self {
            PrimitiveKind::Byte => Some(1),
            PrimitiveKind::Short | PrimitiveKind::Char => Some(2),
            PrimitiveKind::Int => Some(3),
            PrimitiveKind::Long => Some(4),
            PrimitiveKind::Float => Some(5),
            PrimitiveKind::Double => Some(6),
            _ => None,
        }
    }

    /// Inclusive value range of an integral kind.
    pub fn integral_range(self) -> Option<(i64, i64)> {
        match self {
            PrimitiveKind::Byte => Some((i8::MIN as i64, i8::MAX as i64)),
            PrimitiveKind::Short => Some((i16::MIN as i64, i16::MAX as i64)),
            PrimitiveKind::Char => Some((0, u16::MAX as i64)),
            PrimitiveKind::Int => Some((i32::MIN as i64, i32::MAX as i64)),
            PrimitiveKind::Long => Some((i64::MIN, i64::MAX)),
            _ => None,
        }
    }
}

/// The static type of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DataType {
    /// Identity of the underlying type.
    pub type_hash: TypeHash,
}

impl DataType {
    /// Create a data type for a hash.
    #[inline]
    pub const fn simple(type_hash: TypeHash) -> Self {
        Self { type_hash }
    }

    /// The `void` result marker.
    #[inline]
    pub const fn void() -> Self {
        Self::simple(primitives::VOID)
    }

    /// The `boolean` type.
    #[inline]
    pub const fn boolean() -> Self {
        Self::simple(primitives::BOOLEAN)
    }

    /// The `int` type.
    #[inline]
    pub const fn int() -> Self {
        Self::simple(primitives::INT)
    }

    /// The type of the `null` literal.
    #[inline]
    pub const fn null() -> Self {
        Self::simple(primitives::NULL)
    }

    /// Primitive kind of this type, if it is a primitive or null.
    #[inline]
    pub fn primitive_kind(&self) -> Option<PrimitiveKind> {
        PrimitiveKind::from_hash(self.type_hash)
    }

    #[inline]
    pub fn is_void(&self) -> bool {
        self.type_hash == primitives::VOID
    }

    #[inline]
    pub fn is_boolean(&self) -> bool {
        self.type_hash == primitives::BOOLEAN
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.type_hash == primitives::NULL
    }

    /// Whether this is a numeric primitive (including `char`).
    pub fn is_numeric(&self) -> bool {
        self.primitive_kind()
            .is_some_and(|kind| kind.numeric_rank().is_some())
    }

    /// Whether this is an integral primitive (including `char`).
    pub fn is_integral(&self) -> bool {
        self.primitive_kind()
            .is_some_and(|kind| kind.integral_range().is_some())
    }

    /// Whether this is a class or interface type (the null type excluded).
    pub fn is_reference(&self) -> bool {
        self.primitive_kind().is_none()
    }
}

impl From<PrimitiveKind> for DataType {
    fn from(kind: PrimitiveKind) -> Self {
        DataType::simple(kind.type_hash())
    }
}
