//! Statement checker.
//!
//! The [`StmtChecker`] walks a body's statements in source order and
//! computes an [`Outcome`] for each one, while maintaining:
//! - the assignment ledger (definitely assigned locals)
//! - the pending exceptions that may escape the current try scope
//! - the ordered list of diagnostics
//!
//! Checked exceptions that escape the body undeclared are reported as soon
//! as no enclosing try statement can still catch them, so they land among
//! the other diagnostics in source order.
//!
//! Branches are walked on a clone of the ledger (see
//! [`StmtChecker::walk_forked`]) and merged back explicitly by the rule
//! that owns them.
//!
//! Scopes come from the pre-built [`BodyStructure`]; each block, `for`,
//! `switch` and catch clause consumes the next one in pre-order. A block
//! that does not match is an [`InternalError`] and aborts the walk.

mod block;
mod do_while_stmt;
mod for_stmt;
mod if_stmt;
mod return_stmt;
mod switch_stmt;
mod throw_stmt;
mod try_catch;
mod var_decl;
mod while_stmt;

use javelin_ast::{BreakStmt, ContinueStmt, Expr, ExprStmt, Stmt};
use javelin_core::{CheckError, ExprInfo, InternalError, ScopeId, Span};
use javelin_registry::SymbolRegistry;
use tracing::trace;

use crate::config::{CheckerConfig, CheckerProperty};
use crate::env::BindingEnv;
use crate::exceptions::{PendingExceptions, handle_undeclared, is_unchecked};
use crate::expr::{ExprChecker, ExprContext};
use crate::ledger::Ledger;
use crate::outcome::{JumpKind, Outcome};
use crate::structure::{Binding, BlockScope, BodyStructure, ScopeCursor};

type Result<T> = std::result::Result<T, InternalError>;

/// The construct a guarded expression belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionKind {
    If,
    While,
    Do,
    For,
    Switch,
}

impl ConditionKind {
    /// The construct as named in diagnostics ("an if", "a while", ...).
    pub fn construct(self) -> &'static str {
        match self {
            ConditionKind::If => "an if",
            ConditionKind::While => "a while",
            ConditionKind::Do => "a do",
            ConditionKind::For => "a for",
            ConditionKind::Switch => "a switch",
        }
    }
}

/// Walks the statements of one body.
pub struct StmtChecker<'a> {
    registry: &'a SymbolRegistry,
    env: &'a BindingEnv,
    config: &'a CheckerConfig,
    exprs: &'a mut dyn ExprChecker,
    scopes: ScopeCursor<'a>,
    /// Scopes enclosing the current statement, innermost last
    scope_stack: Vec<&'a BlockScope>,
    ledger: Ledger,
    pending: PendingExceptions,
    diagnostics: Vec<CheckError>,
    /// Number of enclosing loops (targets for `continue`)
    loop_depth: u32,
    /// One frame per enclosing loop or switch (targets for `break`); each
    /// holds the ledger at every `break` that leaves it
    break_states: Vec<Vec<Ledger>>,
    /// Greater than zero while walking statements that cannot be reached
    unreachable_depth: u32,
    /// Number of enclosing try statements
    try_depth: u32,
}

impl<'a> StmtChecker<'a> {
    /// Create a checker positioned before the body's first statement.
    ///
    /// The ledger starts as a copy of the environment's, so parameters are
    /// in scope and assigned.
    pub fn new(
        registry: &'a SymbolRegistry,
        env: &'a BindingEnv,
        config: &'a CheckerConfig,
        structure: &'a BodyStructure,
        exprs: &'a mut dyn ExprChecker,
    ) -> Self {
        Self {
            registry,
            env,
            config,
            exprs,
            scopes: ScopeCursor::new(structure),
            scope_stack: Vec::new(),
            ledger: env.ledger.clone(),
            pending: PendingExceptions::new(),
            diagnostics: Vec::new(),
            loop_depth: 0,
            break_states: Vec::new(),
            unreachable_depth: 0,
            try_depth: 0,
        }
    }

    /// Check a statement.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn check(&mut self, stmt: &Stmt<'_>) -> Result<Outcome> {
        self.report_escaping();
        let outcome = match stmt {
            Stmt::Expr(expr_stmt) => self.check_expr_stmt(expr_stmt),
            Stmt::VarDecl(var_decl) => self.check_var_decl(var_decl),
            Stmt::Return(ret) => self.check_return(ret),
            Stmt::Break(brk) => self.check_break(brk),
            Stmt::Continue(cont) => self.check_continue(cont),
            Stmt::Throw(throw) => self.check_throw(throw),
            Stmt::Block(block) => self.check_block(block),
            Stmt::If(if_stmt) => self.check_if(if_stmt),
            Stmt::While(while_stmt) => self.check_while(while_stmt),
            Stmt::DoWhile(do_while) => self.check_do_while(do_while),
            Stmt::For(for_stmt) => self.check_for(for_stmt),
            Stmt::Switch(switch) => self.check_switch(switch),
            Stmt::Try(try_stmt) => self.check_try(try_stmt),
        }?;
        self.report_escaping();
        trace!(line = stmt.span().line, %outcome, "statement checked");
        Ok(outcome)
    }

    /// Check a statement sequence.
    ///
    /// The sequence completes the way its first non-falling-through
    /// statement does. Statements after that one are still walked, in a
    /// fork so they cannot affect the ledger, and the first of them is
    /// reported as unreachable.
    pub fn check_stmts(&mut self, stmts: &[Stmt<'_>]) -> Result<Outcome> {
        let mut outcome = Outcome::FallsThrough;
        let mut remaining = stmts.iter();
        for stmt in remaining.by_ref() {
            outcome = self.check(stmt)?;
            if !outcome.is_falls_through() {
                break;
            }
        }

        let dead = remaining.as_slice();
        if let Some(first) = dead.first() {
            if self.unreachable_depth == 0
                && self.property(CheckerProperty::ReportUnreachableStatements)
            {
                self.report(CheckError::UnreachableStatement { span: first.span() });
            }
            self.unreachable_depth += 1;
            let walked = self.walk_forked(|this| {
                for stmt in dead {
                    this.check(stmt)?;
                }
                Ok(())
            });
            self.unreachable_depth -= 1;
            walked?;
        }
        Ok(outcome)
    }

    /// Consume the checker, returning the diagnostics and verifying every
    /// pre-allocated scope was reached.
    pub fn finish(mut self) -> Result<Vec<CheckError>> {
        self.report_escaping();
        self.scopes.finish()?;
        Ok(self.diagnostics)
    }

    // =========================================================================
    // Simple statements
    // =========================================================================

    /// An expression statement must be an assignment, a call or an instance
    /// creation.
    fn check_expr_stmt(&mut self, stmt: &ExprStmt<'_>) -> Result<Outcome> {
        let Some(expr) = stmt.expr else {
            return Ok(Outcome::FallsThrough);
        };
        if !matches!(expr, Expr::Assign(_) | Expr::Call(_) | Expr::New(_)) {
            self.report(CheckError::Other {
                message: "not a statement".to_string(),
                span: expr.span(),
            });
        }
        self.check_expr(expr);
        Ok(Outcome::FallsThrough)
    }

    fn check_break(&mut self, stmt: &BreakStmt) -> Result<Outcome> {
        if self.break_states.is_empty() {
            self.report(CheckError::InvalidJump {
                message: "break outside switch or loop".to_string(),
                span: stmt.span,
            });
        } else if self.unreachable_depth == 0 {
            let snapshot = self.ledger.clone();
            if let Some(frame) = self.break_states.last_mut() {
                frame.push(snapshot);
            }
        }
        Ok(Outcome::Jump(JumpKind::Break))
    }

    fn check_continue(&mut self, stmt: &ContinueStmt) -> Result<Outcome> {
        if self.loop_depth == 0 {
            self.report(CheckError::InvalidJump {
                message: "continue outside of loop".to_string(),
                span: stmt.span,
            });
        }
        Ok(Outcome::Jump(JumpKind::Continue))
    }

    // =========================================================================
    // Helpers shared by the statement rules
    // =========================================================================

    fn report(&mut self, error: CheckError) {
        self.diagnostics.push(error);
    }

    /// Report the pending checked exceptions that escape the body
    /// undeclared. Nothing is reported inside a try statement.
    fn report_escaping(&mut self) {
        if self.try_depth > 0 || self.pending.is_empty() {
            return;
        }
        for exception in self.pending.take() {
            if !is_unchecked(exception.exception, self.registry, self.env) {
                let error = handle_undeclared(&exception, self.registry, self.env);
                self.report(error);
            }
        }
    }

    fn property(&self, property: CheckerProperty) -> bool {
        self.config.property(property)
    }

    fn type_name(&self, ty: javelin_core::DataType) -> String {
        self.registry.type_display_name(ty.type_hash)
    }

    /// Hand an expression to the expression checker.
    fn check_expr(&mut self, expr: &Expr<'_>) -> Option<ExprInfo> {
        let mut cx = ExprContext {
            registry: self.registry,
            env: self.env,
            config: self.config,
            ledger: &mut self.ledger,
            pending: &mut self.pending,
            diagnostics: &mut self.diagnostics,
        };
        self.exprs.check(expr, &mut cx)
    }

    /// Check the controlling expression of `kind`, which must not be an
    /// assignment. An assignment is still evaluated but its type is not
    /// returned.
    fn check_guarded(&mut self, expr: &Expr<'_>, kind: ConditionKind) -> Option<ExprInfo> {
        if expr.is_assignment() {
            self.report(CheckError::AssignmentInCondition {
                construct: kind.construct(),
                span: expr.span(),
            });
            self.check_expr(expr);
            return None;
        }
        self.check_expr(expr)
    }

    /// Check a condition: guarded, and of type `boolean`.
    fn check_condition(&mut self, condition: &Expr<'_>, kind: ConditionKind) {
        let Some(info) = self.check_guarded(condition, kind) else {
            return;
        };
        let message = if info.is_type_name {
            format!(
                "the conditional expression of {} statement cannot be the type name '{}'",
                kind.construct(),
                self.type_name(info.data_type)
            )
        } else if !info.data_type.is_boolean() {
            format!(
                "the conditional expression of {} statement must be a boolean value; instead, its type is {}",
                kind.construct(),
                self.type_name(info.data_type)
            )
        } else {
            return;
        };
        self.report(CheckError::TypeMismatch {
            message,
            span: condition.span(),
        });
    }

    /// Run `walk` on a copy of the ledger. The ledger is restored afterwards
    /// and the branch's final ledger is returned alongside the result.
    fn walk_forked<T>(&mut self, walk: impl FnOnce(&mut Self) -> Result<T>) -> Result<(T, Ledger)> {
        let saved = self.ledger.clone();
        let result = walk(self);
        let branch = std::mem::replace(&mut self.ledger, saved);
        Ok((result?, branch))
    }

    /// Walk a loop or switch body with a fresh `break` frame, returning the
    /// ledgers captured at each `break`.
    fn with_break_frame<T>(
        &mut self,
        walk: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<(T, Vec<Ledger>)> {
        self.break_states.push(Vec::new());
        let result = walk(self);
        let breaks = self.break_states.pop().unwrap_or_default();
        Ok((result?, breaks))
    }

    /// Walk a loop body: `continue` is valid inside.
    fn in_loop<T>(&mut self, walk: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        self.loop_depth += 1;
        let result = self.with_break_frame(walk);
        self.loop_depth -= 1;
        result.map(|(value, _breaks)| value)
    }

    /// Enter the next pre-allocated scope, which must be `id`.
    fn enter_scope(&mut self, id: ScopeId, span: Span) -> Result<()> {
        let scope = self.scopes.next_scope(id, span)?;
        self.scope_stack.push(scope);
        Ok(())
    }

    /// Leave the innermost scope, dropping its variables from the ledger.
    fn leave_scope(&mut self) {
        if let Some(scope) = self.scope_stack.pop() {
            self.ledger.exit_scope(scope.id);
        }
    }

    /// The binding a declaration in the innermost scope refers to.
    fn binding(&self, name: &str, span: Span) -> Result<&'a Binding> {
        let scope = self.scope_stack.last().copied();
        scope
            .and_then(|scope| scope.binding(name))
            .ok_or_else(|| InternalError::UnboundVariable {
                name: name.to_string(),
                scope: scope.map_or(ScopeId::PARAMETERS, |scope| scope.id),
                span,
            })
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{CheckerConfig, CheckerProperty};
    use crate::outcome::{JumpKind, Outcome};
    use crate::testing::{TestAst, method_env, run, run_with, test_registry};
    use javelin_ast::BinaryOp;
    use javelin_core::{DataType, DiagnosticKind};

    #[test]
    fn expression_statements_must_have_effects() {
        let ast = TestAst::new();
        let registry = test_registry();
        let env = method_env(&registry, DataType::void());
        let body = ast.block(&[
            ast.expr_stmt(ast.binary(ast.int(1), BinaryOp::Add, ast.int(2))),
            ast.expr_stmt(ast.call("close", &[])),
            ast.empty(),
        ]);

        let report = run(&registry, &env, body);
        assert_eq!(report.kinds(), vec![DiagnosticKind::Other]);
        assert_eq!(report.outcome, Outcome::FallsThrough);
    }

    #[test]
    fn jumps_outside_loops_are_reported_but_still_jump() {
        let ast = TestAst::new();
        let registry = test_registry();
        let env = method_env(&registry, DataType::void());

        let report = run(&registry, &env, ast.block(&[ast.brk()]));
        assert_eq!(report.kinds(), vec![DiagnosticKind::InvalidJump]);
        assert_eq!(report.outcome, Outcome::Jump(JumpKind::Break));

        let report = run(&registry, &env, ast.block(&[ast.cont()]));
        assert_eq!(report.kinds(), vec![DiagnosticKind::InvalidJump]);
        assert_eq!(report.outcome, Outcome::Jump(JumpKind::Continue));
    }

    #[test]
    fn first_unreachable_statement_is_reported_once() {
        let ast = TestAst::new();
        let registry = test_registry();
        let env = method_env(&registry, DataType::void());
        let body = ast.block(&[
            ast.ret(None),
            ast.expr_stmt(ast.call("close", &[])),
            ast.expr_stmt(ast.call("close", &[])),
        ]);

        let report = run(&registry, &env, body);
        assert_eq!(report.kinds(), vec![DiagnosticKind::UnreachableStatement]);
        assert_eq!(report.outcome, Outcome::Returns(DataType::void()));

        let config = CheckerConfig::new().with(CheckerProperty::ReportUnreachableStatements, false);
        let body = ast.block(&[ast.ret(None), ast.expr_stmt(ast.call("close", &[]))]);
        assert!(run_with(&registry, &env, body, &config).diagnostics.is_empty());
    }

    #[test]
    fn unreachable_statements_are_still_checked() {
        let ast = TestAst::new();
        let registry = test_registry();
        let env = method_env(&registry, DataType::void());
        let body = ast.block(&[
            ast.ret(None),
            ast.block(&[ast.decl_int("x", Some(ast.bool_lit(true)))]),
        ]);

        let report = run(&registry, &env, body);
        assert_eq!(
            report.kinds(),
            vec![DiagnosticKind::UnreachableStatement, DiagnosticKind::TypeMismatch]
        );
    }
}
