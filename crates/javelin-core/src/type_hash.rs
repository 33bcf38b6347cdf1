//! Deterministic hash-based type identity.
//!
//! This module provides [`TypeHash`], a 64-bit hash that uniquely identifies
//! primitive types, classes, interfaces, methods and constructors. Hashes are
//! computed from qualified names, so the symbol table, the statement tree and
//! the checker agree on identity without sharing sequential ids.
//!
//! # Examples
//!
//! ```
//! use javelin_core::{TypeHash, primitives};
//!
//! let int_hash = TypeHash::from_name("int");
//! assert_eq!(int_hash, primitives::INT);
//!
//! let a = TypeHash::from_method(TypeHash::from_name("io.Reader"), "read", &[primitives::INT]);
//! let b = TypeHash::from_method(TypeHash::from_name("io.Reader"), "read", &[primitives::LONG]);
//! assert_ne!(a, b);
//! ```

use std::fmt;
use xxhash_rust::const_xxh64::xxh64;

/// Domain-specific mixing constants for hash computation.
pub mod hash_constants {
    /// Separator constant for signature components.
    pub const SEP: u64 = 0x4bc94d6bd06053ad;

    /// Domain marker for type hashes.
    pub const TYPE: u64 = 0x2fac10b63a6cc57c;

    /// Domain marker for method hashes.
    pub const METHOD: u64 = 0x7d3c8b4a92e15f6d;

    /// Domain marker for constructor hashes.
    pub const CONSTRUCTOR: u64 = 0x9a7f3d5e2b8c4601;

    /// Parameter position mixing constants.
    pub const PARAM_MARKERS: [u64; 8] = [
        0x9e3779b97f4a7c15,
        0xbf58476d1ce4e5b9,
        0x94d049bb133111eb,
        0xd6e8feb86659fd93,
        0xe7037ed1a0b428db,
        0xc6a4a7935bd1e995,
        0x8648dbbc94d49b8d,
        0xa2b48b2c69e0d657,
    ];
}

/// A deterministic 64-bit hash identifying a type or a member.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TypeHash(pub u64);

impl TypeHash {
    /// Empty/invalid hash constant.
    pub const EMPTY: TypeHash = TypeHash(0);

    /// Create a type hash from a qualified type name.
    ///
    /// Usable in `const` context so the well-known types below are computed
    /// at compile time instead of being hard-coded.
    #[inline]
    pub const fn from_name(name: &str) -> Self {
        TypeHash(hash_constants::TYPE ^ xxh64(name.as_bytes(), 0))
    }

    /// Create a method hash from owner type, method name and parameter types.
    #[inline]
    pub fn from_method(owner: TypeHash, name: &str, param_hashes: &[TypeHash]) -> Self {
        let seed = hash_constants::METHOD ^ owner.0 ^ xxh64(name.as_bytes(), 0);
        Self::mix_params(seed, param_hashes)
    }

    /// Create a constructor hash from owner type and parameter types.
    #[inline]
    pub fn from_constructor(owner: TypeHash, param_hashes: &[TypeHash]) -> Self {
        Self::mix_params(hash_constants::CONSTRUCTOR ^ owner.0, param_hashes)
    }

    fn mix_params(mut hash: u64, param_hashes: &[TypeHash]) -> Self {
        for (i, param) in param_hashes.iter().enumerate() {
            let marker = hash_constants::PARAM_MARKERS
                .get(i)
                .copied()
                .unwrap_or_else(|| hash_constants::PARAM_MARKERS[0].wrapping_add(i as u64));
            // wrapping_mul keeps parameter order significant
            hash = hash.wrapping_mul(hash_constants::SEP).wrapping_add(marker ^ param.0);
        }
        TypeHash(hash)
    }

    /// Check if this is an empty/invalid hash.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the underlying u64 value.
    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeHash({:#018x})", self.0)
    }
}

impl fmt::Display for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

/// Hashes of the primitive types and the null type.
pub mod primitives {
    use super::TypeHash;

    /// `void` (method result marker only)
    pub const VOID: TypeHash = TypeHash::from_name("void");
    /// `boolean`
    pub const BOOLEAN: TypeHash = TypeHash::from_name("boolean");
    /// `byte` (8-bit signed)
    pub const BYTE: TypeHash = TypeHash::from_name("byte");
    /// `short` (16-bit signed)
    pub const SHORT: TypeHash = TypeHash::from_name("short");
    /// `char` (16-bit unsigned)
    pub const CHAR: TypeHash = TypeHash::from_name("char");
    /// `int` (32-bit signed)
    pub const INT: TypeHash = TypeHash::from_name("int");
    /// `long` (64-bit signed)
    pub const LONG: TypeHash = TypeHash::from_name("long");
    /// `float`
    pub const FLOAT: TypeHash = TypeHash::from_name("float");
    /// `double`
    pub const DOUBLE: TypeHash = TypeHash::from_name("double");
    /// Type of the `null` literal, assignable to every reference type.
    pub const NULL: TypeHash = TypeHash::from_name("null");
}

/// Hashes of the library classes the checker gives meaning to.
pub mod well_known {
    use super::TypeHash;

    /// Package that is implicitly imported into every compilation unit.
    pub const LANG_PACKAGE: &str = "lang";

    /// Universal root of the reference type hierarchy.
    pub const OBJECT: TypeHash = TypeHash::from_name("lang.Object");
    /// Root of everything that can be thrown.
    pub const THROWABLE: TypeHash = TypeHash::from_name("lang.Throwable");
    /// Root of checked exceptions.
    pub const EXCEPTION: TypeHash = TypeHash::from_name("lang.Exception");
    /// Unchecked root: runtime failures.
    pub const RUNTIME_EXCEPTION: TypeHash = TypeHash::from_name("lang.RuntimeException");
    /// Unchecked root: unrecoverable failures.
    pub const ERROR: TypeHash = TypeHash::from_name("lang.Error");
    /// String literal type.
    pub const STRING: TypeHash = TypeHash::from_name("lang.String");
    /// Type of a class literal (`T.class`).
    pub const CLASS: TypeHash = TypeHash::from_name("lang.Class");

    /// The two designated unchecked exception roots.
    pub const UNCHECKED_ROOTS: [TypeHash; 2] = [RUNTIME_EXCEPTION, ERROR];
}
