//! Exception ledger and exception-flow matching.
//!
//! Throw statements and calls of members with a throws list record
//! [`PendingException`]s. A try statement walks its block against a private
//! list and removes what its catch clauses handle; whatever remains escapes
//! to the enclosing scope. At the end of a body, every remaining entry must
//! be unchecked or covered by the declared throws set.

use javelin_core::{CheckError, Span, TypeHash};
use javelin_registry::{FunctionKind, SymbolRegistry};

use crate::env::BindingEnv;

/// Where a pending exception comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExceptionOrigin {
    /// A throw statement.
    Thrown,
    /// A call of a method or constructor that declares the exception.
    Invoked {
        /// Name of the invoked method, or the class name for constructors.
        callee: String,
        kind: FunctionKind,
    },
}

/// An exception that may escape the current scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingException {
    /// The exception type
    pub exception: TypeHash,
    /// What raises it
    pub origin: ExceptionOrigin,
    /// The throw statement or call expression
    pub span: Span,
}

impl PendingException {
    pub fn thrown(exception: TypeHash, span: Span) -> Self {
        Self {
            exception,
            origin: ExceptionOrigin::Thrown,
            span,
        }
    }

    pub fn invoked(
        exception: TypeHash,
        callee: impl Into<String>,
        kind: FunctionKind,
        span: Span,
    ) -> Self {
        Self {
            exception,
            origin: ExceptionOrigin::Invoked {
                callee: callee.into(),
                kind,
            },
            span,
        }
    }
}

/// Exceptions accumulated while walking a scope, in traversal order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingExceptions {
    entries: Vec<PendingException>,
}

impl PendingExceptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: PendingException) {
        self.entries.push(entry);
    }

    pub fn extend(&mut self, other: PendingExceptions) {
        self.entries.extend(other.entries);
    }

    /// Take every entry, leaving this list empty.
    pub fn take(&mut self) -> PendingExceptions {
        std::mem::take(self)
    }

    /// Remove the entries handled by a catch clause for any of `caught`.
    pub fn remove_caught(&mut self, caught: &[TypeHash], registry: &SymbolRegistry) {
        self.entries.retain(|entry| {
            !caught
                .iter()
                .any(|&catch_type| registry.is_subtype(entry.exception, catch_type))
        });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PendingException> {
        self.entries.iter()
    }
}

impl IntoIterator for PendingExceptions {
    type Item = PendingException;
    type IntoIter = std::vec::IntoIter<PendingException>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Whether `exception` may escape the current member without a diagnostic.
///
/// True for subtypes of the unchecked roots, and for anything covered by the
/// member's declared throws set.
pub fn is_unchecked(exception: TypeHash, registry: &SymbolRegistry, env: &BindingEnv) -> bool {
    registry.is_unchecked_exception(exception)
        || env
            .throws
            .iter()
            .any(|&declared| registry.is_subtype(exception, declared))
}

/// Build the diagnostic for a checked exception that escapes undeclared.
pub fn handle_undeclared(
    pending: &PendingException,
    registry: &SymbolRegistry,
    env: &BindingEnv,
) -> CheckError {
    let exception = registry.type_display_name(pending.exception);
    let member = env.member.describe();
    let message = match &pending.origin {
        ExceptionOrigin::Thrown => format!(
            "exception '{exception}' needs to be caught or declared to be thrown by {member}"
        ),
        ExceptionOrigin::Invoked { callee, kind } => {
            let callee_kind = match kind {
                FunctionKind::Method => "method",
                FunctionKind::Constructor => "constructor",
            };
            format!(
                "exception '{exception}' is declared to be thrown by {callee_kind} '{callee}' and needs to be caught or declared to be thrown by {member}"
            )
        }
    };
    CheckError::UncaughtException {
        message,
        span: pending.span,
    }
}
