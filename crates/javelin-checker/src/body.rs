//! Body checking entry point.
//!
//! [`check_body`] walks one method or constructor body and returns its
//! [`BodyReport`]: the body's overall outcome plus every diagnostic in the
//! order it was found. Checked exceptions that escape undeclared are
//! reported once the statement raising them is done and no try statement
//! encloses it.

use javelin_ast::Block;
use javelin_core::{CheckError, DiagnosticKind, InternalError};
use javelin_registry::SymbolRegistry;
use tracing::debug;

use crate::config::{CheckerConfig, CheckerProperty};
use crate::env::BindingEnv;
use crate::expr::{ExprChecker, ExprTyper};
use crate::outcome::Outcome;
use crate::stmt::StmtChecker;
use crate::structure::BodyStructure;

/// Result of checking one body.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyReport {
    /// How the body as a whole completes.
    pub outcome: Outcome,
    /// Diagnostics in discovery order.
    pub diagnostics: Vec<CheckError>,
}

impl BodyReport {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Number of diagnostics of the given kind.
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.diagnostics.iter().filter(|d| d.kind() == kind).count()
    }

    /// Kinds of all diagnostics, in order.
    pub fn kinds(&self) -> Vec<DiagnosticKind> {
        self.diagnostics.iter().map(CheckError::kind).collect()
    }
}

/// Check a body using the built-in [`ExprTyper`].
///
/// # Errors
///
/// Returns an [`InternalError`] if `structure` does not describe `body`.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn check_body(
    registry: &SymbolRegistry,
    env: &BindingEnv,
    structure: &BodyStructure,
    body: &Block<'_>,
    config: &CheckerConfig,
) -> Result<BodyReport, InternalError> {
    let mut typer = ExprTyper::new();
    check_body_with(registry, env, structure, body, config, &mut typer)
}

/// Check a body with a caller-supplied expression checker.
pub fn check_body_with(
    registry: &SymbolRegistry,
    env: &BindingEnv,
    structure: &BodyStructure,
    body: &Block<'_>,
    config: &CheckerConfig,
    exprs: &mut dyn ExprChecker,
) -> Result<BodyReport, InternalError> {
    let member = env.member.describe();
    debug!(%member, statements = body.stmts.len(), scopes = structure.len(), "checking body");

    let mut checker = StmtChecker::new(registry, env, config, structure, exprs);
    let outcome = checker.check_block(body)?;
    let mut diagnostics = checker.finish()?;

    if !env.return_type.is_void()
        && !outcome.exits_method()
        && !env.is_constructor()
        && config.property(CheckerProperty::ReportMissingReturn)
    {
        diagnostics.push(CheckError::MissingReturn { span: body.span });
    }

    debug!(%member, %outcome, diagnostics = diagnostics.len(), "body checked");
    Ok(BodyReport {
        outcome,
        diagnostics,
    })
}
