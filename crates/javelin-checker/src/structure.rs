//! Body structure - the pre-allocated block scopes of a body.
//!
//! The structure provider resolves, ahead of checking, every block scope of
//! a body and the variables each one declares. The checker consumes the
//! scopes one at a time, in pre-order, as it reaches the blocks that own
//! them. Any disagreement between the tree and the structure is an
//! [`InternalError`], never a user diagnostic.

use javelin_ast::{Block, ForInit, Stmt, TypeExpr, TypeKind, VarDeclStmt};
use javelin_core::{DataType, ImportContext, InternalError, ScopeId, Span, TypeHash};
use javelin_registry::SymbolRegistry;

use crate::type_resolver::TypeResolver;

/// A variable declared directly in a block scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub name: String,
    pub data_type: DataType,
}

/// One pre-allocated block scope and its binding table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockScope {
    pub id: ScopeId,
    pub bindings: Vec<Binding>,
}

impl BlockScope {
    pub fn new(id: ScopeId) -> Self {
        Self {
            id,
            bindings: Vec::new(),
        }
    }

    /// Add a binding.
    pub fn with_binding(mut self, name: impl Into<String>, data_type: DataType) -> Self {
        self.bindings.push(Binding {
            name: name.into(),
            data_type,
        });
        self
    }

    /// Look up a binding by name.
    pub fn binding(&self, name: &str) -> Option<&Binding> {
        self.bindings.iter().find(|b| b.name == name)
    }
}

/// The block scopes of one body, in pre-order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BodyStructure {
    scopes: Vec<BlockScope>,
}

impl BodyStructure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a scope.
    pub fn with_scope(mut self, scope: BlockScope) -> Self {
        self.scopes.push(scope);
        self
    }

    pub fn scopes(&self) -> &[BlockScope] {
        &self.scopes
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Derive the structure of a body whose blocks already carry scope ids.
    ///
    /// Declared types are resolved through `imports`; a type that does not
    /// resolve is bound to the hash of its name as written, leaving the
    /// diagnostic to the checker.
    pub fn derive(body: &Block<'_>, registry: &SymbolRegistry, imports: &ImportContext) -> Self {
        let mut deriver = Deriver {
            resolver: TypeResolver::new(registry, imports),
            scopes: Vec::new(),
            open: Vec::new(),
        };
        deriver.block(body, None);
        Self {
            scopes: deriver.scopes,
        }
    }
}

struct Deriver<'a> {
    resolver: TypeResolver<'a>,
    scopes: Vec<BlockScope>,
    /// Indices into `scopes` of the scopes enclosing the current statement.
    open: Vec<usize>,
}

impl Deriver<'_> {
    fn open(&mut self, id: ScopeId) {
        self.open.push(self.scopes.len());
        self.scopes.push(BlockScope::new(id));
    }

    fn close(&mut self) {
        self.open.pop();
    }

    fn bind(&mut self, name: &str, ty: &TypeExpr<'_>) {
        let data_type = self.resolver.resolve(ty).unwrap_or_else(|_| match ty.kind {
            TypeKind::Named(written) => DataType::simple(TypeHash::from_name(written)),
            TypeKind::Primitive(prim) => DataType::from(prim.kind()),
        });
        if let Some(&index) = self.open.last() {
            self.scopes[index].bindings.push(Binding {
                name: name.to_string(),
                data_type,
            });
        }
    }

    fn var_decl(&mut self, decl: &VarDeclStmt<'_>) {
        for var in decl.vars {
            self.bind(var.name.name, &decl.ty);
        }
    }

    fn block(&mut self, block: &Block<'_>, catch_param: Option<(&str, &TypeExpr<'_>)>) {
        self.open(block.scope);
        if let Some((name, ty)) = catch_param {
            self.bind(name, ty);
        }
        for stmt in block.stmts {
            self.stmt(stmt);
        }
        self.close();
    }

    fn stmt(&mut self, stmt: &Stmt<'_>) {
        match stmt {
            Stmt::VarDecl(decl) => self.var_decl(decl),
            Stmt::Block(block) => self.block(block, None),
            Stmt::If(if_stmt) => {
                self.stmt(if_stmt.then_stmt);
                if let Some(else_stmt) = if_stmt.else_stmt {
                    self.stmt(else_stmt);
                }
            }
            Stmt::While(w) => self.stmt(w.body),
            Stmt::DoWhile(d) => self.stmt(d.body),
            Stmt::For(f) => {
                self.open(f.scope);
                if let Some(ForInit::VarDecl(decl)) = &f.init {
                    self.var_decl(decl);
                }
                self.stmt(f.body);
                self.close();
            }
            Stmt::Switch(s) => {
                self.open(s.scope);
                for case in s.cases {
                    for stmt in case.stmts {
                        self.stmt(stmt);
                    }
                }
                self.close();
            }
            Stmt::Try(t) => {
                self.block(&t.try_block, None);
                for catch in t.catches {
                    self.block(&catch.body, Some((catch.name.name, &catch.ty)));
                }
                if let Some(finally) = &t.finally_block {
                    self.block(finally, None);
                }
            }
            Stmt::Expr(_)
            | Stmt::Return(_)
            | Stmt::Break(_)
            | Stmt::Continue(_)
            | Stmt::Throw(_) => {}
        }
    }
}

/// Hands out the scopes of a [`BodyStructure`] in order.
#[derive(Debug)]
pub struct ScopeCursor<'s> {
    scopes: &'s [BlockScope],
    next: usize,
}

impl<'s> ScopeCursor<'s> {
    pub fn new(structure: &'s BodyStructure) -> Self {
        Self {
            scopes: &structure.scopes,
            next: 0,
        }
    }

    /// Consume the next scope, which must be the one `block` expects.
    pub fn next_scope(
        &mut self,
        expected: ScopeId,
        span: Span,
    ) -> Result<&'s BlockScope, InternalError> {
        let Some(scope) = self.scopes.get(self.next) else {
            return Err(InternalError::MissingBlockScope {
                scope: expected,
                span,
            });
        };
        if scope.id != expected {
            return Err(InternalError::ScopeMismatch {
                expected: scope.id,
                found: expected,
                span,
            });
        }
        self.next += 1;
        Ok(scope)
    }

    /// Number of scopes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.scopes.len() - self.next
    }

    /// Fail if any scope was never reached.
    pub fn finish(self) -> Result<(), InternalError> {
        match self.remaining() {
            0 => Ok(()),
            remaining => Err(InternalError::UnconsumedScopes { remaining }),
        }
    }
}
