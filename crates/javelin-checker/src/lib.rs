//! Javelin body checker.
//!
//! A flow-sensitive checker for method and constructor bodies. One walk over
//! the statement tree computes, for every statement:
//! - its [`Outcome`] (falls through, returns, jumps, or throws)
//! - the definite-assignment state of locals, in a [`Ledger`]
//! - the exceptions that may escape, in [`PendingExceptions`]
//!
//! Expressions are handed to an [`ExprChecker`]; [`ExprTyper`] is the
//! built-in one.
//!
//! ## Modules
//!
//! - [`body`]: The [`check_body`] entry point and [`BodyReport`]
//! - [`config`]: Checker properties
//! - [`conversion`]: Assignment conversion
//! - [`env`]: The member being checked
//! - [`exceptions`]: Pending exceptions and checked-exception rules
//! - [`expr`]: The expression checker seam and [`ExprTyper`]
//! - [`ledger`]: Definite assignment
//! - [`outcome`]: Statement outcomes and their join
//! - [`stmt`]: Per-construct statement rules
//! - [`structure`]: Pre-allocated block scopes
//! - [`type_resolver`]: Resolving written types
//!
//! # Example
//!
//! ```
//! use bumpalo::Bump;
//! use javelin_ast::{Block, ReturnStmt, Stmt};
//! use javelin_checker::{BindingEnv, BodyStructure, CheckerConfig, Outcome, check_body};
//! use javelin_core::{DataType, ScopeId, Span};
//! use javelin_registry::SymbolRegistry;
//!
//! let arena = Bump::new();
//! let stmts = arena.alloc_slice_copy(&[Stmt::Return(ReturnStmt {
//!     value: None,
//!     span: Span::new(2, 5, 7),
//! })]);
//! let body = Block { scope: ScopeId::new(0), stmts, span: Span::new(1, 1, 1) };
//!
//! let registry = SymbolRegistry::with_standard_library();
//! let env = BindingEnv::method("close", DataType::void());
//! let structure = BodyStructure::derive(&body, &registry, &env.imports);
//!
//! let report = check_body(&registry, &env, &structure, &body, &CheckerConfig::new()).unwrap();
//! assert_eq!(report.outcome, Outcome::Returns(DataType::void()));
//! assert!(report.diagnostics.is_empty());
//! ```

pub mod body;
pub mod config;
pub mod conversion;
pub mod env;
pub mod exceptions;
pub mod expr;
pub mod ledger;
pub mod outcome;
pub mod stmt;
pub mod structure;
pub mod type_resolver;

#[cfg(test)]
mod testing;

pub use body::{BodyReport, check_body, check_body_with};
pub use config::{CheckerConfig, CheckerProperty};
pub use env::{BindingEnv, MemberKind};
pub use exceptions::{ExceptionOrigin, PendingException, PendingExceptions};
pub use expr::{ExprChecker, ExprContext, ExprTyper};
pub use ledger::{Ledger, VarRecord};
pub use outcome::{JumpKind, Outcome};
pub use stmt::{ConditionKind, StmtChecker};
pub use structure::{Binding, BlockScope, BodyStructure, ScopeCursor};
pub use type_resolver::TypeResolver;
