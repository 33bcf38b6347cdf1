//! While loops.

use javelin_ast::WhileStmt;

use super::{ConditionKind, Result, StmtChecker};
use crate::outcome::Outcome;

impl StmtChecker<'_> {
    /// Check a while loop.
    ///
    /// The condition is evaluated on the current ledger. The body may run
    /// zero times, so it is walked in a fork whose assignments are dropped,
    /// and the loop as a whole always falls through.
    pub fn check_while(&mut self, while_stmt: &WhileStmt<'_>) -> Result<Outcome> {
        self.check_condition(while_stmt.condition, ConditionKind::While);
        self.walk_forked(|this| this.in_loop(|this| this.check(while_stmt.body)))?;
        Ok(Outcome::FallsThrough)
    }
}
