//! Do-while loops.

use javelin_ast::DoWhileStmt;

use super::{ConditionKind, Result, StmtChecker};
use crate::outcome::Outcome;

impl StmtChecker<'_> {
    /// Check a do-while loop.
    ///
    /// The body and the condition are walked together in a fork; nothing
    /// they assign is kept, and the loop always falls through.
    pub fn check_do_while(&mut self, do_while: &DoWhileStmt<'_>) -> Result<Outcome> {
        self.walk_forked(|this| {
            this.in_loop(|this| this.check(do_while.body))?;
            this.check_condition(do_while.condition, ConditionKind::Do);
            Ok(())
        })?;
        Ok(Outcome::FallsThrough)
    }
}
