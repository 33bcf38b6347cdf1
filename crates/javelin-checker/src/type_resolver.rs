//! Type resolution for converting AST type expressions to data types.

use javelin_ast::{TypeExpr, TypeKind};
use javelin_core::{CheckError, DataType, ImportContext};
use javelin_registry::SymbolRegistry;

/// Resolves AST [`TypeExpr`] nodes against the registry and an import
/// context.
pub struct TypeResolver<'a> {
    registry: &'a SymbolRegistry,
    imports: &'a ImportContext,
}

impl<'a> TypeResolver<'a> {
    pub fn new(registry: &'a SymbolRegistry, imports: &'a ImportContext) -> Self {
        Self { registry, imports }
    }

    /// Resolve a type expression, or report it as unknown.
    pub fn resolve(&self, type_expr: &TypeExpr<'_>) -> Result<DataType, CheckError> {
        match type_expr.kind {
            TypeKind::Primitive(prim) => Ok(DataType::from(prim.kind())),
            TypeKind::Named(name) => self
                .registry
                .resolve_type_name(name, self.imports)
                .map(DataType::simple)
                .ok_or_else(|| CheckError::UnknownType {
                    name: name.to_string(),
                    span: type_expr.span,
                }),
        }
    }
}
