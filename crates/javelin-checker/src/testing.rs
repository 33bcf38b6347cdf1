//! Test fixtures: an arena-backed AST builder and a small symbol table.
//!
//! Every node the builder creates gets its own line number, so diagnostics
//! can be told apart by span. Blocks, `for` and `switch` statements get
//! fresh scope ids in creation order.

use std::cell::Cell;

use bumpalo::Bump;
use javelin_ast::{
    AssignExpr, AssignOp, BinaryExpr, BinaryOp, Block, BreakStmt, CallExpr, CatchClause,
    ClassLiteralExpr, ContinueStmt, DoWhileStmt, Expr, ExprStmt, ForInit, ForStmt, Ident, IfStmt,
    LiteralExpr, LiteralKind, NewExpr, ParenExpr, PrimitiveType, ReturnStmt, Stmt, SwitchCase,
    SwitchStmt, ThrowStmt, TryStmt, TypeExpr, UnaryExpr, UnaryOp, VarDeclStmt, VarDeclarator,
    WhileStmt,
};
use javelin_core::{
    CheckError, DataType, DiagnosticKind, ExprInfo, ImportContext, ScopeId, Span, TypeHash,
};
use javelin_registry::{ClassEntry, FunctionEntry, SymbolRegistry};

use crate::body::{BodyReport, check_body};
use crate::config::CheckerConfig;
use crate::env::BindingEnv;
use crate::exceptions::PendingExceptions;
use crate::expr::{ExprChecker, ExprContext, ExprTyper};
use crate::ledger::{Ledger, VarRecord};
use crate::structure::BodyStructure;

/// Builds AST nodes in an arena owned by the builder.
pub struct TestAst {
    arena: Bump,
    next_line: Cell<u32>,
    next_scope: Cell<u32>,
}

impl TestAst {
    pub fn new() -> Self {
        Self {
            arena: Bump::new(),
            next_line: Cell::new(1),
            next_scope: Cell::new(0),
        }
    }

    fn span(&self) -> Span {
        let line = self.next_line.get();
        self.next_line.set(line + 1);
        Span::new(line, 1, 1)
    }

    fn scope(&self) -> ScopeId {
        let id = self.next_scope.get();
        self.next_scope.set(id + 1);
        ScopeId::new(id)
    }

    fn expr<'a>(&'a self, expr: Expr<'a>) -> &'a Expr<'a> {
        self.arena.alloc(expr)
    }

    fn literal<'a>(&'a self, kind: LiteralKind<'a>) -> &'a Expr<'a> {
        let span = self.span();
        self.expr(Expr::Literal(LiteralExpr { kind, span }))
    }

    fn type_expr<'a>(&'a self, name: &'a str) -> TypeExpr<'a> {
        let span = self.span();
        let prim = match name {
            "boolean" => Some(PrimitiveType::Boolean),
            "byte" => Some(PrimitiveType::Byte),
            "short" => Some(PrimitiveType::Short),
            "char" => Some(PrimitiveType::Char),
            "int" => Some(PrimitiveType::Int),
            "long" => Some(PrimitiveType::Long),
            "float" => Some(PrimitiveType::Float),
            "double" => Some(PrimitiveType::Double),
            _ => None,
        };
        match prim {
            Some(prim) => TypeExpr::primitive(prim, span),
            None => TypeExpr::named(name, span),
        }
    }

    fn exprs<'a>(&'a self, exprs: &[&'a Expr<'a>]) -> &'a [&'a Expr<'a>] {
        self.arena.alloc_slice_copy(exprs)
    }

    // ---------------------------------------------------------------------
    // Expressions
    // ---------------------------------------------------------------------

    pub fn int(&self, value: i64) -> &Expr<'_> {
        self.literal(LiteralKind::Int(value))
    }

    pub fn long(&self, value: i64) -> &Expr<'_> {
        self.literal(LiteralKind::Long(value))
    }

    pub fn chr(&self, value: char) -> &Expr<'_> {
        self.literal(LiteralKind::Char(value))
    }

    pub fn bool_lit(&self, value: bool) -> &Expr<'_> {
        self.literal(LiteralKind::Bool(value))
    }

    pub fn string<'a>(&'a self, value: &'a str) -> &'a Expr<'a> {
        self.literal(LiteralKind::String(value))
    }

    pub fn null(&self) -> &Expr<'_> {
        self.literal(LiteralKind::Null)
    }

    pub fn ident<'a>(&'a self, name: &'a str) -> &'a Expr<'a> {
        let span = self.span();
        self.expr(Expr::Ident(Ident::new(name, span)))
    }

    pub fn paren<'a>(&'a self, expr: &'a Expr<'a>) -> &'a Expr<'a> {
        let span = self.span();
        let paren = self.arena.alloc(ParenExpr { expr, span });
        self.expr(Expr::Paren(paren))
    }

    pub fn unary<'a>(&'a self, op: UnaryOp, operand: &'a Expr<'a>) -> &'a Expr<'a> {
        let span = self.span();
        let unary = self.arena.alloc(UnaryExpr { op, operand, span });
        self.expr(Expr::Unary(unary))
    }

    pub fn binary<'a>(
        &'a self,
        left: &'a Expr<'a>,
        op: BinaryOp,
        right: &'a Expr<'a>,
    ) -> &'a Expr<'a> {
        let span = self.span();
        let binary = self.arena.alloc(BinaryExpr {
            left,
            op,
            right,
            span,
        });
        self.expr(Expr::Binary(binary))
    }

    pub fn assign<'a>(&'a self, name: &'a str, value: &'a Expr<'a>) -> &'a Expr<'a> {
        self.compound(name, AssignOp::Assign, value)
    }

    pub fn compound<'a>(
        &'a self,
        name: &'a str,
        op: AssignOp,
        value: &'a Expr<'a>,
    ) -> &'a Expr<'a> {
        let target = self.ident(name);
        let span = self.span();
        let assign = self.arena.alloc(AssignExpr {
            target,
            op,
            value,
            span,
        });
        self.expr(Expr::Assign(assign))
    }

    pub fn call<'a>(&'a self, name: &'a str, args: &[&'a Expr<'a>]) -> &'a Expr<'a> {
        let span = self.span();
        let call = self.arena.alloc(CallExpr {
            name: Ident::new(name, span),
            args: self.exprs(args),
            span,
        });
        self.expr(Expr::Call(call))
    }

    pub fn new_<'a>(&'a self, class: &'a str, args: &[&'a Expr<'a>]) -> &'a Expr<'a> {
        let ty = self.type_expr(class);
        let span = self.span();
        let new = self.arena.alloc(NewExpr {
            ty,
            args: self.exprs(args),
            span,
        });
        self.expr(Expr::New(new))
    }

    pub fn class_lit<'a>(&'a self, name: &'a str) -> &'a Expr<'a> {
        let ty = self.type_expr(name);
        let span = self.span();
        self.expr(Expr::ClassLiteral(ClassLiteralExpr { ty, span }))
    }

    // ---------------------------------------------------------------------
    // Statements
    // ---------------------------------------------------------------------

    pub fn expr_stmt<'a>(&'a self, expr: &'a Expr<'a>) -> Stmt<'a> {
        Stmt::Expr(ExprStmt {
            expr: Some(expr),
            span: expr.span(),
        })
    }

    pub fn empty(&self) -> Stmt<'_> {
        Stmt::Expr(ExprStmt {
            expr: None,
            span: self.span(),
        })
    }

    /// `name = value;`
    pub fn assign_stmt<'a>(&'a self, name: &'a str, value: &'a Expr<'a>) -> Stmt<'a> {
        self.expr_stmt(self.assign(name, value))
    }

    pub fn decl<'a>(&'a self, ty: &'a str, name: &'a str, init: Option<&'a Expr<'a>>) -> Stmt<'a> {
        Stmt::VarDecl(self.var_decl(ty, name, init))
    }

    pub fn decl_int<'a>(&'a self, name: &'a str, init: Option<&'a Expr<'a>>) -> Stmt<'a> {
        self.decl("int", name, init)
    }

    pub fn decl_char<'a>(&'a self, name: &'a str, init: Option<&'a Expr<'a>>) -> Stmt<'a> {
        self.decl("char", name, init)
    }

    fn var_decl<'a>(
        &'a self,
        ty: &'a str,
        name: &'a str,
        init: Option<&'a Expr<'a>>,
    ) -> VarDeclStmt<'a> {
        let ty = self.type_expr(ty);
        let span = self.span();
        let vars = self.arena.alloc_slice_copy(&[VarDeclarator {
            name: Ident::new(name, span),
            init,
            span,
        }]);
        VarDeclStmt { ty, vars, span }
    }

    pub fn ret<'a>(&'a self, value: Option<&'a Expr<'a>>) -> Stmt<'a> {
        Stmt::Return(ReturnStmt {
            value,
            span: self.span(),
        })
    }

    pub fn ret_value<'a>(&'a self, value: &'a Expr<'a>) -> Stmt<'a> {
        self.ret(Some(value))
    }

    pub fn brk(&self) -> Stmt<'_> {
        Stmt::Break(BreakStmt { span: self.span() })
    }

    pub fn cont(&self) -> Stmt<'_> {
        Stmt::Continue(ContinueStmt { span: self.span() })
    }

    pub fn throw<'a>(&'a self, value: &'a Expr<'a>) -> Stmt<'a> {
        Stmt::Throw(ThrowStmt {
            value,
            span: self.span(),
        })
    }

    /// `throw new Name();`
    pub fn throw_new<'a>(&'a self, class: &'a str) -> Stmt<'a> {
        self.throw(self.new_(class, &[]))
    }

    pub fn block<'a>(&'a self, stmts: &[Stmt<'a>]) -> Stmt<'a> {
        Stmt::Block(self.raw_block(stmts))
    }

    fn raw_block<'a>(&'a self, stmts: &[Stmt<'a>]) -> Block<'a> {
        Block {
            scope: self.scope(),
            stmts: self.arena.alloc_slice_copy(stmts),
            span: self.span(),
        }
    }

    /// The block inside a block statement.
    pub fn as_block<'a>(&self, stmt: Stmt<'a>) -> Block<'a> {
        match stmt {
            Stmt::Block(block) => block,
            other => panic!("expected a block, got {other:?}"),
        }
    }

    pub fn if_<'a>(
        &'a self,
        condition: &'a Expr<'a>,
        then_stmt: Stmt<'a>,
        else_stmt: Option<Stmt<'a>>,
    ) -> Stmt<'a> {
        let then_stmt = self.arena.alloc(then_stmt);
        let else_stmt = else_stmt.map(|s| &*self.arena.alloc(s));
        Stmt::If(self.arena.alloc(IfStmt {
            condition,
            then_stmt,
            else_stmt,
            span: self.span(),
        }))
    }

    pub fn while_<'a>(&'a self, condition: &'a Expr<'a>, body: Stmt<'a>) -> Stmt<'a> {
        let body = self.arena.alloc(body);
        Stmt::While(self.arena.alloc(WhileStmt {
            condition,
            body,
            span: self.span(),
        }))
    }

    pub fn do_while<'a>(&'a self, body: Stmt<'a>, condition: &'a Expr<'a>) -> Stmt<'a> {
        let body = self.arena.alloc(body);
        Stmt::DoWhile(self.arena.alloc(DoWhileStmt {
            body,
            condition,
            span: self.span(),
        }))
    }

    pub fn for_<'a>(
        &'a self,
        init: Option<ForInit<'a>>,
        condition: Option<&'a Expr<'a>>,
        update: &[&'a Expr<'a>],
        body: Stmt<'a>,
    ) -> Stmt<'a> {
        let scope = self.scope();
        let body = self.arena.alloc(body);
        Stmt::For(self.arena.alloc(ForStmt {
            scope,
            init,
            condition,
            update: self.exprs(update),
            body,
            span: self.span(),
        }))
    }

    /// `int name = init` as a `for` initializer.
    pub fn for_decl_int<'a>(&'a self, name: &'a str, init: &'a Expr<'a>) -> ForInit<'a> {
        ForInit::VarDecl(self.var_decl("int", name, Some(init)))
    }

    pub fn for_exprs<'a>(&'a self, exprs: &[&'a Expr<'a>]) -> ForInit<'a> {
        ForInit::Exprs(self.exprs(exprs))
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

    pub fn case<'a>(&'a self, values: &[&'a Expr<'a>], stmts: &[Stmt<'a>]) -> SwitchCase<'a> {
        SwitchCase {
            values: self.exprs(values),
            stmts: self.arena.alloc_slice_copy(stmts),
            span: self.span(),
        }
    }

    pub fn default_case<'a>(&'a self, stmts: &[Stmt<'a>]) -> SwitchCase<'a> {
        self.case(&[], stmts)
    }

    pub fn try_<'a>(
        &'a self,
        try_block: Stmt<'a>,
        catches: &[CatchClause<'a>],
        finally_block: Option<Stmt<'a>>,
    ) -> Stmt<'a> {
        Stmt::Try(self.arena.alloc(TryStmt {
            try_block: self.as_block(try_block),
            catches: self.arena.alloc_slice_copy(catches),
            finally_block: finally_block.map(|b| self.as_block(b)),
            span: self.span(),
        }))
    }

    pub fn catch<'a>(&'a self, ty: &'a str, name: &'a str, body: Stmt<'a>) -> CatchClause<'a> {
        let ty = self.type_expr(ty);
        let span = self.span();
        CatchClause {
            ty,
            name: Ident::new(name, span),
            body: self.as_block(body),
            span,
        }
    }
}

// -------------------------------------------------------------------------
// Symbols
// -------------------------------------------------------------------------

/// The standard library plus a few application types:
///
/// - `io.IOException`, with subclasses `io.EOFException` and
///   `io.FileNotFoundException`
/// - `app.ParseException` (checked) and `app.IllegalStateException`
///   (unchecked)
/// - `app.Reader`, the declaring class of the bodies under test
pub fn test_registry() -> SymbolRegistry {
    let mut registry = SymbolRegistry::with_standard_library();
    let classes = [
        ClassEntry::class("io.IOException").extends("lang.Exception"),
        ClassEntry::class("io.EOFException").extends("io.IOException"),
        ClassEntry::class("io.FileNotFoundException").extends("io.IOException"),
        ClassEntry::class("app.ParseException").extends("lang.Exception"),
        ClassEntry::class("app.IllegalStateException").extends("lang.RuntimeException"),
        ClassEntry::class("app.Reader"),
    ];
    for class in classes {
        registry.register_type(class.into()).unwrap();
    }

    let reader = type_hash(&registry, "app.Reader");
    let io = type_hash(&registry, "io.IOException");
    let not_found = type_hash(&registry, "io.FileNotFoundException");
    let parse = type_hash(&registry, "app.ParseException");
    let string = DataType::simple(javelin_core::well_known::STRING);
    let functions = [
        FunctionEntry::constructor(reader, "Reader", vec![string]).with_throws([io]),
        FunctionEntry::method(reader, "read", vec![], DataType::int()).with_throws([io]),
        FunctionEntry::method(reader, "open", vec![string], DataType::void())
            .with_throws([not_found]),
        FunctionEntry::method(reader, "parse", vec![], DataType::int()).with_throws([parse]),
        FunctionEntry::method(reader, "skip", vec![DataType::int()], DataType::void()),
        FunctionEntry::method(reader, "close", vec![], DataType::void()),
        FunctionEntry::method(reader, "ready", vec![], DataType::boolean()),
    ];
    for function in functions {
        registry.register_function(function).unwrap();
    }
    registry
}

pub fn type_hash(registry: &SymbolRegistry, name: &str) -> TypeHash {
    registry.get_by_name(name).unwrap().type_hash()
}

pub fn test_imports() -> ImportContext {
    ImportContext::in_package("app").import_on_demand("io")
}

/// A method of `app.Reader` named `run`.
pub fn method_env(registry: &SymbolRegistry, return_type: DataType) -> BindingEnv {
    BindingEnv::method("run", return_type)
        .in_class(type_hash(registry, "app.Reader"))
        .with_imports(test_imports())
}

/// Check `body` (a block statement) with a structure derived from it.
pub fn run(registry: &SymbolRegistry, env: &BindingEnv, body: Stmt<'_>) -> BodyReport {
    run_with(registry, env, body, &CheckerConfig::new())
}

pub fn run_with(
    registry: &SymbolRegistry,
    env: &BindingEnv,
    body: Stmt<'_>,
    config: &CheckerConfig,
) -> BodyReport {
    let Stmt::Block(block) = body else {
        panic!("a body must be a block");
    };
    let structure = BodyStructure::derive(&block, registry, &env.imports);
    check_body(registry, env, &structure, &block, config).unwrap()
}

// -------------------------------------------------------------------------
// Expression harness
// -------------------------------------------------------------------------

/// Owns everything an [`ExprContext`] borrows.
pub struct ExprHarness {
    pub registry: SymbolRegistry,
    pub env: BindingEnv,
    pub config: CheckerConfig,
    pub ledger: Ledger,
    pub pending: PendingExceptions,
    pub diagnostics: Vec<CheckError>,
    pub typer: ExprTyper,
}

impl ExprHarness {
    pub fn new() -> Self {
        let registry = test_registry();
        let env = method_env(&registry, DataType::void());
        Self {
            registry,
            env,
            config: CheckerConfig::new(),
            ledger: Ledger::new(),
            pending: PendingExceptions::new(),
            diagnostics: Vec::new(),
            typer: ExprTyper::new(),
        }
    }

    pub fn declare(&mut self, name: &str, data_type: DataType, has_value: bool) {
        self.ledger.declare(VarRecord::new(
            name,
            data_type,
            ScopeId::new(0),
            has_value,
            Span::default(),
        ));
    }

    pub fn check(&mut self, expr: &Expr<'_>) -> Option<ExprInfo> {
        let mut cx = ExprContext {
            registry: &self.registry,
            env: &self.env,
            config: &self.config,
            ledger: &mut self.ledger,
            pending: &mut self.pending,
            diagnostics: &mut self.diagnostics,
        };
        self.typer.check(expr, &mut cx)
    }

    pub fn kinds(&self) -> Vec<DiagnosticKind> {
        self.diagnostics.iter().map(CheckError::kind).collect()
    }
}
