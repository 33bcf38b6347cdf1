//! Expression checking.
//!
//! Statement rules never inspect expressions themselves; they hand each
//! expression to an [`ExprChecker`] together with an [`ExprContext`] that
//! exposes the shared ledgers. The checker returns the resolved
//! [`ExprInfo`] (or `None` after reporting why it could not), records
//! variable assignments in the ledger, and records exceptions raised by
//! invoked members in the pending list.
//!
//! [`ExprTyper`] is the built-in checker. It covers:
//! - Literals, with integral constant values for narrowing and case labels
//! - Names: local variables (with definite-assignment checks) and type names
//! - Assignment and compound assignment
//! - Unary and binary operators with numeric promotion
//! - Method calls, instance creation and class literals

mod calls;
mod literals;
mod names;
mod operators;

use javelin_ast::Expr;
use javelin_core::{CheckError, DataType, ExprInfo};
use javelin_registry::SymbolRegistry;

use crate::config::CheckerConfig;
use crate::env::BindingEnv;
use crate::exceptions::PendingExceptions;
use crate::ledger::Ledger;

pub use operators::{binary_result, promote_binary, promote_unary};

/// Everything an expression checker may read or update.
pub struct ExprContext<'a> {
    /// Symbol table
    pub registry: &'a SymbolRegistry,
    /// The member being checked
    pub env: &'a BindingEnv,
    /// Checker configuration
    pub config: &'a CheckerConfig,
    /// Assignment state at this program point
    pub ledger: &'a mut Ledger,
    /// Exceptions that may escape the current scope
    pub pending: &'a mut PendingExceptions,
    /// Ordered diagnostics of the whole body
    pub diagnostics: &'a mut Vec<CheckError>,
}

impl ExprContext<'_> {
    /// Record a diagnostic.
    pub fn report(&mut self, error: CheckError) {
        self.diagnostics.push(error);
    }

    /// Name of a type as shown in diagnostics.
    pub fn type_name(&self, data_type: DataType) -> String {
        self.registry.type_display_name(data_type.type_hash)
    }
}

/// Resolves expression types on behalf of the statement rules.
pub trait ExprChecker {
    /// Check `expr`, returning its type information, or `None` if it could
    /// not be resolved (a diagnostic has then been reported).
    fn check(&mut self, expr: &Expr<'_>, cx: &mut ExprContext<'_>) -> Option<ExprInfo>;
}

/// The built-in expression checker.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExprTyper;

impl ExprTyper {
    pub fn new() -> Self {
        Self
    }

    /// Check an expression that must denote a value, not a type name.
    fn check_value(&mut self, expr: &Expr<'_>, cx: &mut ExprContext<'_>) -> Option<ExprInfo> {
        let info = self.check(expr, cx)?;
        if info.is_type_name {
            let name = cx.type_name(info.data_type);
            cx.report(CheckError::TypeMismatch {
                message: format!("the type name '{name}' cannot be used as a value"),
                span: expr.span(),
            });
            return None;
        }
        Some(info)
    }
}

impl ExprChecker for ExprTyper {
    fn check(&mut self, expr: &Expr<'_>, cx: &mut ExprContext<'_>) -> Option<ExprInfo> {
        match expr {
            Expr::Literal(lit) => Some(self.check_literal(lit)),
            Expr::Ident(ident) => self.check_ident(ident, cx),
            Expr::Binary(binary) => self.check_binary(binary, cx),
            Expr::Unary(unary) => self.check_unary(unary, cx),
            Expr::Assign(assign) => self.check_assign(assign, cx),
            Expr::Call(call) => self.check_call(call, cx),
            Expr::New(new) => self.check_new(new, cx),
            Expr::ClassLiteral(lit) => self.check_class_literal(lit, cx),
            Expr::Paren(paren) => self.check(paren.expr, cx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{TestAst, test_registry};

    #[test]
    fn type_names_are_not_values() {
        let ast = TestAst::new();
        let registry = test_registry();
        let env = BindingEnv::method("run", DataType::void());
        let config = CheckerConfig::new();
        let mut ledger = Ledger::new();
        let mut pending = PendingExceptions::new();
        let mut diagnostics = Vec::new();
        let mut cx = ExprContext {
            registry: &registry,
            env: &env,
            config: &config,
            ledger: &mut ledger,
            pending: &mut pending,
            diagnostics: &mut diagnostics,
        };

        let mut typer = ExprTyper::new();
        let name = ast.ident("String");
        let info = typer.check(name, &mut cx).unwrap();
        assert!(info.is_type_name);

        assert!(typer.check_value(name, &mut cx).is_none());
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].to_string().contains("type name 'String'"));
    }
}
