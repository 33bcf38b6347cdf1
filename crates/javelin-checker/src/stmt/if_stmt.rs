//! If/else statements.
//!
//! Each branch is walked on a copy of the ledger. A variable is assigned
//! after the statement only if both branches assigned it; a missing else
//! branch assigns nothing.

use javelin_ast::IfStmt;
use tracing::trace;

use super::{ConditionKind, Result, StmtChecker};
use crate::ledger::{AssignedSet, intersect_all};
use crate::outcome::Outcome;

impl StmtChecker<'_> {
    pub fn check_if(&mut self, if_stmt: &IfStmt<'_>) -> Result<Outcome> {
        self.check_condition(if_stmt.condition, ConditionKind::If);

        let (then_outcome, then_ledger) = self.walk_forked(|this| this.check(if_stmt.then_stmt))?;
        let then_assigned = then_ledger.assigned_since(&self.ledger);

        let (else_outcome, else_assigned) = match if_stmt.else_stmt {
            Some(else_stmt) => {
                let (outcome, ledger) = self.walk_forked(|this| this.check(else_stmt))?;
                (outcome, ledger.assigned_since(&self.ledger))
            }
            None => (Outcome::FallsThrough, AssignedSet::default()),
        };

        let assigned = intersect_all([then_assigned, else_assigned]);
        self.ledger.apply(&assigned);

        let outcome = then_outcome.join(else_outcome, self.registry);
        trace!(%then_outcome, %else_outcome, %outcome, assigned = assigned.len(), "if joined");
        Ok(outcome)
    }
}
