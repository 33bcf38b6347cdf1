//! Expression AST nodes.
//!
//! The checker only walks expressions through its expression-checker seam;
//! the nodes here cover what the default typer understands:
//! - Literals (integers, floating point, chars, booleans, strings, null)
//! - Names (local variables or type names)
//! - Unary, binary and assignment operations
//! - Method calls and instance creation
//! - Class literals (`T.class`) and parentheses

use crate::node::Ident;
use crate::ops::{AssignOp, BinaryOp, UnaryOp};
use crate::types::TypeExpr;
use javelin_core::Span;

/// An expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expr<'ast> {
    /// Literal value
    Literal(LiteralExpr<'ast>),
    /// Variable or type name
    Ident(Ident<'ast>),
    /// Binary operation
    Binary(&'ast BinaryExpr<'ast>),
    /// Unary prefix operation
    Unary(&'ast UnaryExpr<'ast>),
    /// Assignment
    Assign(&'ast AssignExpr<'ast>),
    /// Method call
    Call(&'ast CallExpr<'ast>),
    /// Instance creation (`new T(args)`)
    New(&'ast NewExpr<'ast>),
    /// Class literal (`T.class`)
    ClassLiteral(ClassLiteralExpr<'ast>),
    /// Parenthesized expression
    Paren(&'ast ParenExpr<'ast>),
}

impl<'ast> Expr<'ast> {
    /// Get the span of this expression.
    pub fn span(&self) -> Span {
        match self {
            Self::Literal(e) => e.span,
            Self::Ident(e) => e.span,
            Self::Binary(e) => e.span,
            Self::Unary(e) => e.span,
            Self::Assign(e) => e.span,
            Self::Call(e) => e.span,
            Self::New(e) => e.span,
            Self::ClassLiteral(e) => e.span,
            Self::Paren(e) => e.span,
        }
    }

    /// Whether this expression is, at its top level, an assignment.
    pub fn is_assignment(&self) -> bool {
        matches!(self, Self::Assign(_))
    }
}

/// A literal value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiteralExpr<'ast> {
    /// The literal kind
    pub kind: LiteralKind<'ast>,
    /// Source location
    pub span: Span,
}

/// The kind of literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralKind<'ast> {
    /// `int` literal
    Int(i64),
    /// `long` literal (`10L`)
    Long(i64),
    /// `float` literal (`1.5f`)
    Float(f32),
    /// `double` literal
    Double(f64),
    /// `char` literal
    Char(char),
    /// `true` / `false`
    Bool(bool),
    /// String literal
    String(&'ast str),
    /// `null`
    Null,
}

/// A binary operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryExpr<'ast> {
    /// Left operand
    pub left: &'ast Expr<'ast>,
    /// Operator
    pub op: BinaryOp,
    /// Right operand
    pub right: &'ast Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// A unary prefix operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnaryExpr<'ast> {
    /// Operator
    pub op: UnaryOp,
    /// Operand
    pub operand: &'ast Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// An assignment expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssignExpr<'ast> {
    /// Left-hand side (target)
    pub target: &'ast Expr<'ast>,
    /// Assignment operator
    pub op: AssignOp,
    /// Right-hand side (value)
    pub value: &'ast Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// A call of a method of the enclosing class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallExpr<'ast> {
    /// Method name
    pub name: Ident<'ast>,
    /// Arguments
    pub args: &'ast [&'ast Expr<'ast>],
    /// Source location
    pub span: Span,
}

/// Instance creation.
///
/// Example: `new IOException("closed")`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewExpr<'ast> {
    /// Class being instantiated
    pub ty: TypeExpr<'ast>,
    /// Constructor arguments
    pub args: &'ast [&'ast Expr<'ast>],
    /// Source location
    pub span: Span,
}

/// A class literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassLiteralExpr<'ast> {
    /// The named type
    pub ty: TypeExpr<'ast>,
    /// Source location
    pub span: Span,
}

/// A parenthesized expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParenExpr<'ast> {
    /// Inner expression
    pub expr: &'ast Expr<'ast>,
    /// Source location
    pub span: Span,
}
