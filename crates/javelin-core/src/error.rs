//! Unified error types for the body checker.
//!
//! ## Error Hierarchy
//!
//! ```text
//! JavelinError (top-level wrapper)
//! ├── RegistrationError - symbol table population errors
//! ├── CheckError        - user-facing diagnostics (recoverable)
//! └── InternalError     - structure-provider invariant violations (fatal)
//! ```
//!
//! A [`CheckError`] never stops checking: statement rules record it and carry
//! on with a best-effort type or outcome. An [`InternalError`] means the
//! upstream body structure does not match the statement tree; it aborts the
//! check and is propagated with `?`.

use thiserror::Error;

use crate::{ScopeId, Span};

// ============================================================================
// Registration Errors
// ============================================================================

/// Errors that occur while populating the symbol registry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistrationError {
    /// A type with this name already exists.
    #[error("duplicate type: {0}")]
    DuplicateType(String),

    /// A member with the same owner, name and parameter types already exists.
    #[error("duplicate member: {0}")]
    DuplicateMember(String),

    /// A superclass or interface named by a class is not registered.
    #[error("type '{name}' extends unknown type '{supertype}'")]
    UnknownSupertype {
        /// The class being registered.
        name: String,
        /// The missing supertype.
        supertype: String,
    },

    /// A member refers to an owner type that is not registered.
    #[error("member '{member}' declared on unknown type")]
    UnknownOwner {
        /// The member being registered.
        member: String,
    },

    /// Registering the type would make the hierarchy cyclic.
    #[error("circular inheritance involving '{0}'")]
    CircularInheritance(String),
}

// ============================================================================
// Check Errors (diagnostics)
// ============================================================================

/// Coarse classification of a [`CheckError`], for filtering without string
/// matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    TypeMismatch,
    AssignmentInCondition,
    InvalidCaseLabel,
    DuplicateCaseLabel,
    MultipleDefaults,
    UnterminatedCase,
    ExceptionAlreadyCaught,
    UnreachableStatement,
    UncaughtException,
    UnknownType,
    UnknownVariable,
    UnknownFunction,
    UninitializedVariable,
    MissingReturn,
    InvalidJump,
    Other,
}

/// User-facing diagnostics produced while checking a body.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckError {
    /// A value of the wrong type, or a type name where a value is required.
    #[error("at {span}: {message}")]
    TypeMismatch {
        /// Description of the mismatch.
        message: String,
        /// Where the mismatch occurred.
        span: Span,
    },

    /// An assignment used directly as a loop/branch/switch condition.
    #[error("at {span}: the conditional expression of {construct} statement cannot be an assignment")]
    AssignmentInCondition {
        /// The construct, with its article ("an if", "a while", ...).
        construct: &'static str,
        /// The condition expression.
        span: Span,
    },

    /// A case label that is not an integral compile-time constant.
    #[error("at {span}: case label must be a constant integral value (a literal or a negated literal)")]
    InvalidCaseLabel {
        /// The label expression.
        span: Span,
    },

    /// Two case labels of one switch have the same value.
    #[error("at {span}: duplicate case label {value}")]
    DuplicateCaseLabel {
        /// The repeated value.
        value: i64,
        /// The second occurrence.
        span: Span,
    },

    /// More than one default case in one switch.
    #[error("at {span}: switch statement has more than one default case")]
    MultipleDefaults {
        /// The second default case.
        span: Span,
    },

    /// A non-empty case body that can complete normally.
    #[error("at {span}: switch case must end with a break or return statement")]
    UnterminatedCase {
        /// The case.
        span: Span,
    },

    /// A catch clause whose type is covered by an earlier clause.
    #[error("at {span}: exception '{name}' has already been caught")]
    ExceptionAlreadyCaught {
        /// The subtype caught too late.
        name: String,
        /// The later catch clause.
        span: Span,
    },

    /// A statement that can never execute.
    #[error("at {span}: unreachable statement")]
    UnreachableStatement {
        /// The first unreachable statement.
        span: Span,
    },

    /// A checked exception that is neither caught nor declared.
    #[error("at {span}: {message}")]
    UncaughtException {
        /// Description naming the exception and its origin.
        message: String,
        /// The throw statement or the call site.
        span: Span,
    },

    /// A referenced type could not be found.
    #[error("at {span}: unknown type '{name}'")]
    UnknownType {
        /// The type name that wasn't found.
        name: String,
        /// Where the type was referenced.
        span: Span,
    },

    /// A referenced variable could not be found.
    #[error("at {span}: unknown variable '{name}'")]
    UnknownVariable {
        /// The variable name that wasn't found.
        name: String,
        /// Where the variable was referenced.
        span: Span,
    },

    /// No method or constructor matches a call.
    #[error("at {span}: {message}")]
    UnknownFunction {
        /// Description of the failed lookup.
        message: String,
        /// The call site.
        span: Span,
    },

    /// A variable read before it is definitely assigned.
    #[error("at {span}: variable '{name}' might not have been initialized")]
    UninitializedVariable {
        /// The variable.
        name: String,
        /// The read.
        span: Span,
    },

    /// A non-void body that can complete without returning.
    #[error("at {span}: missing return statement")]
    MissingReturn {
        /// The method body.
        span: Span,
    },

    /// A break or continue with no enclosing target.
    #[error("at {span}: {message}")]
    InvalidJump {
        /// Description of the misplaced jump.
        message: String,
        /// The jump statement.
        span: Span,
    },

    /// A generic diagnostic.
    #[error("at {span}: {message}")]
    Other {
        /// The error message.
        message: String,
        /// Where the error occurred.
        span: Span,
    },
}

impl CheckError {
    /// Get the span where this diagnostic points.
    pub fn span(&self) -> Span {
        match self {
            CheckError::TypeMismatch { span, .. }
            | CheckError::AssignmentInCondition { span, .. }
            | CheckError::InvalidCaseLabel { span }
            | CheckError::DuplicateCaseLabel { span, .. }
            | CheckError::MultipleDefaults { span }
            | CheckError::UnterminatedCase { span }
            | CheckError::ExceptionAlreadyCaught { span, .. }
            | CheckError::UnreachableStatement { span }
            | CheckError::UncaughtException { span, .. }
            | CheckError::UnknownType { span, .. }
            | CheckError::UnknownVariable { span, .. }
            | CheckError::UnknownFunction { span, .. }
            | CheckError::UninitializedVariable { span, .. }
            | CheckError::MissingReturn { span }
            | CheckError::InvalidJump { span, .. }
            | CheckError::Other { span, .. } => *span,
        }
    }

    /// Get the classification of this diagnostic.
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            CheckError::TypeMismatch { .. } => DiagnosticKind::TypeMismatch,
            CheckError::AssignmentInCondition { .. } => DiagnosticKind::AssignmentInCondition,
            CheckError::InvalidCaseLabel { .. } => DiagnosticKind::InvalidCaseLabel,
            CheckError::DuplicateCaseLabel { .. } => DiagnosticKind::DuplicateCaseLabel,
            CheckError::MultipleDefaults { .. } => DiagnosticKind::MultipleDefaults,
            CheckError::UnterminatedCase { .. } => DiagnosticKind::UnterminatedCase,
            CheckError::ExceptionAlreadyCaught { .. } => DiagnosticKind::ExceptionAlreadyCaught,
            CheckError::UnreachableStatement { .. } => DiagnosticKind::UnreachableStatement,
            CheckError::UncaughtException { .. } => DiagnosticKind::UncaughtException,
            CheckError::UnknownType { .. } => DiagnosticKind::UnknownType,
            CheckError::UnknownVariable { .. } => DiagnosticKind::UnknownVariable,
            CheckError::UnknownFunction { .. } => DiagnosticKind::UnknownFunction,
            CheckError::UninitializedVariable { .. } => DiagnosticKind::UninitializedVariable,
            CheckError::MissingReturn { .. } => DiagnosticKind::MissingReturn,
            CheckError::InvalidJump { .. } => DiagnosticKind::InvalidJump,
            CheckError::Other { .. } => DiagnosticKind::Other,
        }
    }
}

// ============================================================================
// Internal Errors
// ============================================================================

/// Fatal mismatches between the statement tree and the body structure.
///
/// These indicate a bug in the upstream structure provider, never a problem
/// in the checked program.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InternalError {
    /// A block was reached after every pre-allocated scope was consumed.
    #[error("internal error at {span}: no pre-allocated scope left for block {scope}")]
    MissingBlockScope {
        /// The scope the block asked for.
        scope: ScopeId,
        /// The block.
        span: Span,
    },

    /// A block asked for a different scope than the next pre-allocated one.
    #[error("internal error at {span}: block {found} reached while scope {expected} is next")]
    ScopeMismatch {
        /// The next scope in pre-allocation order.
        expected: ScopeId,
        /// The scope the block carries.
        found: ScopeId,
        /// The block.
        span: Span,
    },

    /// A declaration names a variable missing from its scope's binding table.
    #[error("internal error at {span}: variable '{name}' has no binding in {scope}")]
    UnboundVariable {
        /// The declared variable.
        name: String,
        /// The scope that should hold it.
        scope: ScopeId,
        /// The declaration.
        span: Span,
    },

    /// The check finished with pre-allocated scopes left over.
    #[error("internal error: {remaining} pre-allocated scope(s) were never reached")]
    UnconsumedScopes {
        /// How many scopes were left.
        remaining: usize,
    },
}

// ============================================================================
// Top-level Error
// ============================================================================

/// Any error produced by this workspace.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum JavelinError {
    #[error(transparent)]
    Registration(#[from] RegistrationError),

    #[error(transparent)]
    Check(#[from] CheckError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}
