//! For loops.

use javelin_ast::{ForInit, ForStmt};

use super::{ConditionKind, Result, StmtChecker};
use crate::outcome::Outcome;

impl StmtChecker<'_> {
    /// Check a for loop.
    ///
    /// The whole statement is walked in a fork inside the loop's own scope:
    /// the initializer, then the condition, the body and the updates.
    /// Initializer assignments are visible to the rest of the loop but, like
    /// everything else assigned in it, are dropped afterwards.
    pub fn check_for(&mut self, for_stmt: &ForStmt<'_>) -> Result<Outcome> {
        self.walk_forked(|this| {
            this.enter_scope(for_stmt.scope, for_stmt.span)?;
            match &for_stmt.init {
                Some(ForInit::VarDecl(decl)) => {
                    this.check_var_decl(decl)?;
                }
                Some(ForInit::Exprs(exprs)) => {
                    for expr in exprs.iter() {
                        this.check_expr(expr);
                    }
                }
                None => {}
            }
            if let Some(condition) = for_stmt.condition {
                this.check_condition(condition, ConditionKind::For);
            }
            this.in_loop(|this| this.check(for_stmt.body))?;
            for update in for_stmt.update {
                this.check_expr(update);
            }
            this.leave_scope();
            Ok(())
        })?;
        Ok(Outcome::FallsThrough)
    }
}

#[cfg(test)]
mod tests {
    use crate::outcome::Outcome;
    use crate::testing::{TestAst, method_env, run, test_registry};
    use javelin_ast::{AssignOp, BinaryOp};
    use javelin_core::{DataType, DiagnosticKind};

    #[test]
    fn counting_loop() {
        let ast = TestAst::new();
        let registry = test_registry();
        let env = method_env(&registry, DataType::void()).with_param("n", DataType::int());
        // for (int i = 0; i < n; i += 1) { skip(i); }
        let body = ast.block(&[ast.for_(
            Some(ast.for_decl_int("i", ast.int(0))),
            Some(ast.binary(ast.ident("i"), BinaryOp::Less, ast.ident("n"))),
            &[ast.compound("i", AssignOp::AddAssign, ast.int(1))],
            ast.block(&[ast.expr_stmt(ast.call("skip", &[ast.ident("i")]))]),
        )]);

        let report = run(&registry, &env, body);
        assert!(report.diagnostics.is_empty());
        assert_eq!(report.outcome, Outcome::FallsThrough);
    }

    #[test]
    fn initializer_assignments_are_dropped_after_the_loop() {
        let ast = TestAst::new();
        let registry = test_registry();
        let env = method_env(&registry, DataType::int());
        // int x; for (x = 0; ; ) { break; } return x;
        let body = ast.block(&[
            ast.decl_int("x", None),
            ast.for_(
                Some(ast.for_exprs(&[ast.assign("x", ast.int(0))])),
                None,
                &[],
                ast.block(&[ast.brk()]),
            ),
            ast.ret_value(ast.ident("x")),
        ]);

        let report = run(&registry, &env, body);
        assert_eq!(report.kinds(), vec![DiagnosticKind::UninitializedVariable]);
    }

    #[test]
    fn loop_variable_is_out_of_scope_afterwards() {
        let ast = TestAst::new();
        let registry = test_registry();
        let env = method_env(&registry, DataType::void());
        let body = ast.block(&[
            ast.for_(Some(ast.for_decl_int("i", ast.int(0))), None, &[], ast.block(&[ast.brk()])),
            ast.assign_stmt("i", ast.int(1)),
        ]);

        let report = run(&registry, &env, body);
        assert_eq!(report.kinds(), vec![DiagnosticKind::UnknownVariable]);
    }

    #[test]
    fn condition_rules() {
        let ast = TestAst::new();
        let registry = test_registry();
        let env = method_env(&registry, DataType::void()).with_param("c", DataType::boolean());
        let body = ast.block(&[ast.for_(
            None,
            Some(ast.assign("c", ast.bool_lit(false))),
            &[],
            ast.block(&[]),
        )]);

        let report = run(&registry, &env, body);
        assert_eq!(report.kinds(), vec![DiagnosticKind::AssignmentInCondition]);
        assert!(report.diagnostics[0].to_string().contains("a for statement"));
    }
}
