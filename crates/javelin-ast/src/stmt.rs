//! Statement AST nodes.
//!
//! Provides nodes for every statement kind the body checker understands:
//! - Expression statements and local variable declarations
//! - Control flow (if, while, do-while, for, switch)
//! - Jump statements (return, break, continue, throw)
//! - Exception handling (try / catch / finally)
//! - Blocks
//!
//! Blocks, `for` and `switch` statements carry the [`ScopeId`] of the block scope the
//! upstream body structure pre-allocated for them.

use crate::expr::Expr;
use crate::node::Ident;
use crate::types::TypeExpr;
use javelin_core::{ScopeId, Span};

/// A statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stmt<'ast> {
    /// Expression statement (expr;)
    Expr(ExprStmt<'ast>),
    /// Variable declaration
    VarDecl(VarDeclStmt<'ast>),
    /// Return statement
    Return(ReturnStmt<'ast>),
    /// Break statement
    Break(BreakStmt),
    /// Continue statement
    Continue(ContinueStmt),
    /// Throw statement
    Throw(ThrowStmt<'ast>),
    /// Block statement
    Block(Block<'ast>),
    /// If statement
    If(&'ast IfStmt<'ast>),
    /// While loop
    While(&'ast WhileStmt<'ast>),
    /// Do-while loop
    DoWhile(&'ast DoWhileStmt<'ast>),
    /// For loop
    For(&'ast ForStmt<'ast>),
    /// Switch statement
    Switch(&'ast SwitchStmt<'ast>),
    /// Try / catch / finally
    Try(&'ast TryStmt<'ast>),
}

impl<'ast> Stmt<'ast> {
    /// Get the span of this statement.
    pub fn span(&self) -> Span {
        match self {
            Self::Expr(s) => s.span,
            Self::VarDecl(s) => s.span,
            Self::Return(s) => s.span,
            Self::Break(s) => s.span,
            Self::Continue(s) => s.span,
            Self::Throw(s) => s.span,
            Self::Block(s) => s.span,
            Self::If(s) => s.span,
            Self::While(s) => s.span,
            Self::DoWhile(s) => s.span,
            Self::For(s) => s.span,
            Self::Switch(s) => s.span,
            Self::Try(s) => s.span,
        }
    }
}

/// An expression statement (expression followed by semicolon).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExprStmt<'ast> {
    /// The expression (None for the empty statement `;`)
    pub expr: Option<&'ast Expr<'ast>>,
    /// Source location
    pub span: Span,
}

/// A local variable declaration.
///
/// Examples:
/// - `int x;`
/// - `int x = 5, y = 10;`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VarDeclStmt<'ast> {
    /// The declared type as written
    pub ty: TypeExpr<'ast>,
    /// Declarators (at least one)
    pub vars: &'ast [VarDeclarator<'ast>],
    /// Source location
    pub span: Span,
}

/// A single variable declarator within a variable declaration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VarDeclarator<'ast> {
    /// Variable name
    pub name: Ident<'ast>,
    /// Optional initializer
    pub init: Option<&'ast Expr<'ast>>,
    /// Source location
    pub span: Span,
}

/// A return statement.
///
/// Examples:
/// - `return;`
/// - `return expr;`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReturnStmt<'ast> {
    /// Optional return value
    pub value: Option<&'ast Expr<'ast>>,
    /// Source location
    pub span: Span,
}

/// A break statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakStmt {
    /// Source location
    pub span: Span,
}

/// A continue statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContinueStmt {
    /// Source location
    pub span: Span,
}

/// A throw statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThrowStmt<'ast> {
    /// The thrown value
    pub value: &'ast Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// A braced block of statements with its own scope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block<'ast> {
    /// Pre-allocated scope for this block
    pub scope: ScopeId,
    /// Statements in the block
    pub stmts: &'ast [Stmt<'ast>],
    /// Source location
    pub span: Span,
}

/// An if statement.
///
/// Examples:
/// - `if (condition) statement`
/// - `if (condition) statement else statement`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IfStmt<'ast> {
    /// Condition
    pub condition: &'ast Expr<'ast>,
    /// Then branch
    pub then_stmt: &'ast Stmt<'ast>,
    /// Optional else branch
    pub else_stmt: Option<&'ast Stmt<'ast>>,
    /// Source location
    pub span: Span,
}

/// A while loop.
///
/// Example: `while (condition) statement`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhileStmt<'ast> {
    /// Condition
    pub condition: &'ast Expr<'ast>,
    /// Body
    pub body: &'ast Stmt<'ast>,
    /// Source location
    pub span: Span,
}

/// A do-while loop.
///
/// Example: `do statement while (condition);`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoWhileStmt<'ast> {
    /// Body
    pub body: &'ast Stmt<'ast>,
    /// Condition
    pub condition: &'ast Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// A for loop.
///
/// Example: `for (init; condition; update) statement`
///
/// The loop header opens its own scope, so variables declared by the
/// initializer are visible in the condition, update and body only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForStmt<'ast> {
    /// Pre-allocated scope for the loop header
    pub scope: ScopeId,
    /// Initializer (variable declaration or expressions)
    pub init: Option<ForInit<'ast>>,
    /// Condition (absent means `true`)
    pub condition: Option<&'ast Expr<'ast>>,
    /// Update expressions
    pub update: &'ast [&'ast Expr<'ast>],
    /// Body
    pub body: &'ast Stmt<'ast>,
    /// Source location
    pub span: Span,
}

/// The initializer in a for loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ForInit<'ast> {
    /// Variable declaration
    VarDecl(VarDeclStmt<'ast>),
    /// Comma-separated expressions
    Exprs(&'ast [&'ast Expr<'ast>]),
}

/// A switch statement.
///
/// Example:
/// ```text
/// switch (expr) {
///     case 1:
///     case 2:
///         statement;
///         break;
///     default:
///         statement;
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwitchStmt<'ast> {
    /// Pre-allocated scope for the switch block
    pub scope: ScopeId,
    /// Expression to switch on
    pub selector: &'ast Expr<'ast>,
    /// Cases in source order
    pub cases: &'ast [SwitchCase<'ast>],
    /// Source location
    pub span: Span,
}

/// A switch case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwitchCase<'ast> {
    /// Case values (empty for default)
    pub values: &'ast [&'ast Expr<'ast>],
    /// Statements
    pub stmts: &'ast [Stmt<'ast>],
    /// Source location
    pub span: Span,
}

impl<'ast> SwitchCase<'ast> {
    /// Check if this is the default case.
    pub fn is_default(&self) -> bool {
        self.values.is_empty()
    }
}

/// A try statement with catch clauses and an optional finally block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TryStmt<'ast> {
    /// Try block
    pub try_block: Block<'ast>,
    /// Catch clauses in declaration order
    pub catches: &'ast [CatchClause<'ast>],
    /// Finally block
    pub finally_block: Option<Block<'ast>>,
    /// Source location
    pub span: Span,
}

/// A catch clause: `catch (Type name) { ... }`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatchClause<'ast> {
    /// Caught exception type
    pub ty: TypeExpr<'ast>,
    /// Exception variable
    pub name: Ident<'ast>,
    /// Handler body; the exception variable lives in its scope
    pub body: Block<'ast>,
    /// Source location
    pub span: Span,
}
