//! Type expressions as written in source.
//!
//! A type expression is either a primitive keyword or a (possibly dotted)
//! class/interface name. Names are resolved later, against the registry and
//! the import context of the enclosing compilation unit.

use javelin_core::{PrimitiveKind, Span};

/// Primitive type keywords that may appear in declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
}

impl PrimitiveType {
    /// The matching primitive kind.
    pub fn kind(self) -> PrimitiveKind {
        match self {
            PrimitiveType::Boolean => PrimitiveKind::Boolean,
            PrimitiveType::Byte => PrimitiveKind::Byte,
            PrimitiveType::Short => PrimitiveKind::Short,
            PrimitiveType::Char => PrimitiveKind::Char,
            PrimitiveType::Int => PrimitiveKind::Int,
            PrimitiveType::Long => PrimitiveKind::Long,
            PrimitiveType::Float => PrimitiveKind::Float,
            PrimitiveType::Double => PrimitiveKind::Double,
        }
    }
}

/// The shape of a type expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind<'ast> {
    /// A primitive keyword
    Primitive(PrimitiveType),
    /// A simple (`IOException`) or qualified (`io.IOException`) name
    Named(&'ast str),
}

/// A type expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeExpr<'ast> {
    /// What was written
    pub kind: TypeKind<'ast>,
    /// Source location
    pub span: Span,
}

impl<'ast> TypeExpr<'ast> {
    /// A primitive type expression.
    pub fn primitive(prim: PrimitiveType, span: Span) -> Self {
        Self {
            kind: TypeKind::Primitive(prim),
            span,
        }
    }

    /// A named type expression.
    pub fn named(name: &'ast str, span: Span) -> Self {
        Self {
            kind: TypeKind::Named(name),
            span,
        }
    }

    /// The name as written, for diagnostics.
    pub fn display_name(&self) -> &'ast str {
        match self.kind {
            TypeKind::Primitive(prim) => prim.kind().name(),
            TypeKind::Named(name) => name,
        }
    }
}
