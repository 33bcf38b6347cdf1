//! Shared fixtures for the integration tests.
//!
//! [`Tree`] builds statement trees in its own arena. Each node gets a fresh
//! line number and each scoped construct a distinct scope id, so the
//! structure derived from a tree always matches it.

#![allow(dead_code)]

use std::cell::Cell;

use bumpalo::Bump;
use javelin::prelude::*;
use javelin::{BodyReport, check};

pub struct Tree {
    arena: Bump,
    line: Cell<u32>,
    scope: Cell<u32>,
}

impl Tree {
    pub fn new() -> Self {
        Self {
            arena: Bump::new(),
            line: Cell::new(1),
            scope: Cell::new(0),
        }
    }

    pub fn span(&self) -> Span {
        let line = self.line.get();
        self.line.set(line + 1);
        Span::new(line, 5, 1)
    }

    fn scope(&self) -> ScopeId {
        let id = self.scope.get();
        self.scope.set(id + 1);
        ScopeId::new(id)
    }

    fn alloc<'a>(&'a self, expr: Expr<'a>) -> &'a Expr<'a> {
        self.arena.alloc(expr)
    }

    fn list<'a>(&'a self, exprs: &[&'a Expr<'a>]) -> &'a [&'a Expr<'a>] {
        self.arena.alloc_slice_copy(exprs)
    }

    fn ty<'a>(&'a self, name: &'a str) -> TypeExpr<'a> {
        let span = self.span();
        match name {
            "int" => TypeExpr::primitive(PrimitiveType::Int, span),
            "char" => TypeExpr::primitive(PrimitiveType::Char, span),
            "long" => TypeExpr::primitive(PrimitiveType::Long, span),
            "boolean" => TypeExpr::primitive(PrimitiveType::Boolean, span),
            _ => TypeExpr::named(name, span),
        }
    }

    pub fn int(&self, value: i64) -> &Expr<'_> {
        let span = self.span();
        self.alloc(Expr::Literal(LiteralExpr {
            kind: LiteralKind::Int(value),
            span,
        }))
    }

    pub fn chr(&self, value: char) -> &Expr<'_> {
        let span = self.span();
        self.alloc(Expr::Literal(LiteralExpr {
            kind: LiteralKind::Char(value),
            span,
        }))
    }

    pub fn truth(&self) -> &Expr<'_> {
        let span = self.span();
        self.alloc(Expr::Literal(LiteralExpr {
            kind: LiteralKind::Bool(true),
            span,
        }))
    }

    pub fn var<'a>(&'a self, name: &'a str) -> &'a Expr<'a> {
        let span = self.span();
        self.alloc(Expr::Ident(Ident::new(name, span)))
    }

    pub fn less<'a>(&'a self, left: &'a Expr<'a>, right: &'a Expr<'a>) -> &'a Expr<'a> {
        let span = self.span();
        let binary = self.arena.alloc(BinaryExpr {
            left,
            op: BinaryOp::Less,
            right,
            span,
        });
        self.alloc(Expr::Binary(binary))
    }

    pub fn assign<'a>(&'a self, name: &'a str, value: &'a Expr<'a>) -> &'a Expr<'a> {
        let target = self.var(name);
        let span = self.span();
        let assign = self.arena.alloc(AssignExpr {
            target,
            op: AssignOp::Assign,
            value,
            span,
        });
        self.alloc(Expr::Assign(assign))
    }

    pub fn call<'a>(&'a self, name: &'a str, args: &[&'a Expr<'a>]) -> &'a Expr<'a> {
        let span = self.span();
        let call = self.arena.alloc(CallExpr {
            name: Ident::new(name, span),
            args: self.list(args),
            span,
        });
        self.alloc(Expr::Call(call))
    }

    pub fn new_<'a>(&'a self, class: &'a str) -> &'a Expr<'a> {
        let ty = self.ty(class);
        let span = self.span();
        let new = self.arena.alloc(NewExpr {
            ty,
            args: &[],
            span,
        });
        self.alloc(Expr::New(new))
    }

    pub fn expr<'a>(&'a self, expr: &'a Expr<'a>) -> Stmt<'a> {
        Stmt::Expr(ExprStmt {
            expr: Some(expr),
            span: expr.span(),
        })
    }

    /// `name = value;`
    pub fn set<'a>(&'a self, name: &'a str, value: i64) -> Stmt<'a> {
        self.expr(self.assign(name, self.int(value)))
    }

    /// `ty name;` or `ty name = init;`
    pub fn local<'a>(&'a self, ty: &'a str, name: &'a str, init: Option<&'a Expr<'a>>) -> Stmt<'a> {
        let ty = self.ty(ty);
        let span = self.span();
        let vars = self.arena.alloc_slice_copy(&[VarDeclarator {
            name: Ident::new(name, span),
            init,
            span,
        }]);
        Stmt::VarDecl(VarDeclStmt { ty, vars, span })
    }

    pub fn ret<'a>(&'a self, value: Option<&'a Expr<'a>>) -> Stmt<'a> {
        Stmt::Return(ReturnStmt {
            value,
            span: self.span(),
        })
    }

    pub fn brk(&self) -> Stmt<'_> {
        Stmt::Break(BreakStmt { span: self.span() })
    }

    /// `throw new Name();`
    pub fn raise<'a>(&'a self, class: &'a str) -> Stmt<'a> {
        let value = self.new_(class);
        Stmt::Throw(ThrowStmt {
            value,
            span: self.span(),
        })
    }

    pub fn block<'a>(&'a self, stmts: &[Stmt<'a>]) -> Block<'a> {
        Block {
            scope: self.scope(),
            stmts: self.arena.alloc_slice_copy(stmts),
            span: self.span(),
        }
    }

    pub fn nest<'a>(&'a self, stmts: &[Stmt<'a>]) -> Stmt<'a> {
        Stmt::Block(self.block(stmts))
    }

    pub fn if_<'a>(
        &'a self,
        condition: &'a Expr<'a>,
        then_stmt: Stmt<'a>,
        else_stmt: Option<Stmt<'a>>,
    ) -> Stmt<'a> {
        let then_stmt = &*self.arena.alloc(then_stmt);
        let else_stmt = else_stmt.map(|s| &*self.arena.alloc(s));
        Stmt::If(self.arena.alloc(IfStmt {
            condition,
            then_stmt,
            else_stmt,
            span: self.span(),
        }))
    }

    pub fn while_<'a>(&'a self, condition: &'a Expr<'a>, body: Stmt<'a>) -> Stmt<'a> {
        let body = &*self.arena.alloc(body);
        Stmt::While(self.arena.alloc(WhileStmt {
            condition,
            body,
            span: self.span(),
        }))
    }

    pub fn do_while<'a>(&'a self, body: Stmt<'a>, condition: &'a Expr<'a>) -> Stmt<'a> {
        let body = &*self.arena.alloc(body);
        Stmt::DoWhile(self.arena.alloc(DoWhileStmt {
            body,
            condition,
            span: self.span(),
        }))
    }

    /// `for (; condition; ) body`
    pub fn for_<'a>(&'a self, condition: Option<&'a Expr<'a>>, body: Stmt<'a>) -> Stmt<'a> {
        let scope = self.scope();
        let body = &*self.arena.alloc(body);
        Stmt::For(self.arena.alloc(ForStmt {
            scope,
            init: None,
            condition,
            update: &[],
            body,
            span: self.span(),
        }))
    }

    pub fn switch<'a>(&'a self, selector: &'a Expr<'a>, cases: &[SwitchCase<'a>]) -> Stmt<'a> {
        let scope = self.scope();
        Stmt::Switch(self.arena.alloc(SwitchStmt {
            scope,
            selector,
            cases: self.arena.alloc_slice_copy(cases),
            span: self.span(),
        }))
    }

    pub fn case<'a>(&'a self, value: i64, stmts: &[Stmt<'a>]) -> SwitchCase<'a> {
        let label = self.int(value);
        SwitchCase {
            values: self.list(&[label]),
            stmts: self.arena.alloc_slice_copy(stmts),
            span: self.span(),
        }
    }

    pub fn default_case<'a>(&'a self, stmts: &[Stmt<'a>]) -> SwitchCase<'a> {
        SwitchCase {
            values: &[],
            stmts: self.arena.alloc_slice_copy(stmts),
            span: self.span(),
        }
    }

    pub fn try_<'a>(
        &'a self,
        try_block: Block<'a>,
        catches: &[CatchClause<'a>],
        finally_block: Option<Block<'a>>,
    ) -> Stmt<'a> {
        Stmt::Try(self.arena.alloc(TryStmt {
            try_block,
            catches: self.arena.alloc_slice_copy(catches),
            finally_block,
            span: self.span(),
        }))
    }

    pub fn catch<'a>(&'a self, ty: &'a str, name: &'a str, body: Block<'a>) -> CatchClause<'a> {
        let ty = self.ty(ty);
        let span = self.span();
        CatchClause {
            ty,
            name: Ident::new(name, span),
            body,
            span,
        }
    }
}

/// Standard library plus a small file API:
///
/// - `io.IOException` (checked) and its subclass `io.FileNotFoundException`
/// - `app.BadStateException` (unchecked)
/// - `app.Files` with `load(int)` throwing `IOException`, `find()` throwing
///   `FileNotFoundException` and `reset()` throwing `BadStateException`
pub fn library() -> SymbolRegistry {
    let mut registry = SymbolRegistry::with_standard_library();
    for class in [
        ClassEntry::class("io.IOException").extends("lang.Exception"),
        ClassEntry::class("io.FileNotFoundException").extends("io.IOException"),
        ClassEntry::class("app.BadStateException").extends("lang.RuntimeException"),
        ClassEntry::class("app.Files"),
    ] {
        registry.register_type(class.into()).unwrap();
    }

    let files = hash(&registry, "app.Files");
    let io = hash(&registry, "io.IOException");
    let not_found = hash(&registry, "io.FileNotFoundException");
    let bad_state = hash(&registry, "app.BadStateException");
    for function in [
        FunctionEntry::method(files, "load", vec![DataType::int()], DataType::int())
            .with_throws([io]),
        FunctionEntry::method(files, "find", vec![], DataType::void()).with_throws([not_found]),
        FunctionEntry::method(files, "reset", vec![], DataType::void()).with_throws([bad_state]),
    ] {
        registry.register_function(function).unwrap();
    }
    registry
}

pub fn hash(registry: &SymbolRegistry, name: &str) -> TypeHash {
    registry.get_by_name(name).unwrap().type_hash()
}

/// A method `sync` of `app.Files`.
pub fn method(registry: &SymbolRegistry, return_type: DataType) -> BindingEnv {
    BindingEnv::method("sync", return_type)
        .in_class(hash(registry, "app.Files"))
        .with_imports(ImportContext::in_package("app").import_on_demand("io"))
}

pub fn check_with(
    registry: &SymbolRegistry,
    env: &BindingEnv,
    body: &Block<'_>,
    config: &CheckerConfig,
) -> BodyReport {
    check(registry, env, body, config).unwrap()
}

pub fn check_default(registry: &SymbolRegistry, env: &BindingEnv, body: &Block<'_>) -> BodyReport {
    check_with(registry, env, body, &CheckerConfig::new())
}
