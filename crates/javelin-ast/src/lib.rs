//! Abstract syntax tree consumed by the javelin body checker.
//!
//! All nodes are `Copy` and borrow from a [`bumpalo::Bump`] arena owned by
//! whoever built the tree (a parser, or a test). Parsing itself is out of
//! scope for this workspace.
//!
//! # Example
//!
//! ```
//! use bumpalo::Bump;
//! use javelin_ast::{Block, BreakStmt, Stmt};
//! use javelin_core::{ScopeId, Span};
//!
//! let arena = Bump::new();
//! let stmts = arena.alloc_slice_copy(&[Stmt::Break(BreakStmt { span: Span::new(1, 3, 6) })]);
//! let block = Block { scope: ScopeId::new(0), stmts, span: Span::new(1, 1, 10) };
//! assert_eq!(block.stmts.len(), 1);
//! ```

pub mod expr;
pub mod node;
pub mod ops;
pub mod stmt;
pub mod types;

pub use expr::*;
pub use node::*;
pub use ops::*;
pub use stmt::*;
pub use types::*;
