//! Javelin: a flow-sensitive body checker for a class-based language with
//! checked exceptions.
//!
//! This crate is a facade over the workspace crates:
//!
//! - [`core`]: spans, type identity, diagnostics and internal errors
//! - [`ast`]: the arena-allocated statement tree
//! - [`registry`]: declared types, members and the class hierarchy
//! - [`checker`]: outcomes, definite assignment, exception tracking
//!
//! # Example
//!
//! ```
//! use bumpalo::Bump;
//! use javelin::prelude::*;
//!
//! let arena = Bump::new();
//! let stmts = arena.alloc_slice_copy(&[Stmt::Break(BreakStmt { span: Span::new(2, 5, 6) })]);
//! let body = Block { scope: ScopeId::new(0), stmts, span: Span::new(1, 1, 1) };
//!
//! let registry = SymbolRegistry::with_standard_library();
//! let env = BindingEnv::method("run", DataType::void());
//! let report = javelin::check(&registry, &env, &body, &CheckerConfig::new()).unwrap();
//!
//! assert_eq!(report.kinds(), vec![DiagnosticKind::InvalidJump]);
//! ```

pub use javelin_ast as ast;
pub use javelin_checker as checker;
pub use javelin_core as core;
pub use javelin_registry as registry;

pub use javelin_checker::{
    BindingEnv, BodyReport, BodyStructure, CheckerConfig, CheckerProperty, ExprChecker, ExprTyper,
    Outcome, check_body, check_body_with,
};
pub use javelin_core::{CheckError, DiagnosticKind, InternalError, JavelinError, RegistrationError};
pub use javelin_registry::SymbolRegistry;

use javelin_ast::Block;

/// Check a body whose scopes are derived from the tree itself.
///
/// Shorthand for [`BodyStructure::derive`] followed by [`check_body`], for
/// callers that have no structure provider of their own.
///
/// # Errors
///
/// Returns an [`InternalError`] if the derived structure is not consumed
/// exactly, which means the tree's scope ids are inconsistent.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn check(
    registry: &SymbolRegistry,
    env: &BindingEnv,
    body: &Block<'_>,
    config: &CheckerConfig,
) -> Result<BodyReport, InternalError> {
    let structure = BodyStructure::derive(body, registry, &env.imports);
    check_body(registry, env, &structure, body, config)
}

/// Commonly used types, for glob import.
pub mod prelude {
    pub use javelin_ast::*;
    pub use javelin_checker::{
        BindingEnv, BodyReport, BodyStructure, CheckerConfig, CheckerProperty, ExprChecker,
        ExprContext, ExprTyper, JumpKind, MemberKind, Outcome, check_body, check_body_with,
    };
    pub use javelin_core::{
        CheckError, DataType, DiagnosticKind, ExprInfo, ImportContext, InternalError, ScopeId,
        Span, TypeHash, primitives, well_known,
    };
    pub use javelin_registry::{ClassEntry, FunctionEntry, SymbolRegistry, TypeEntry};
}
