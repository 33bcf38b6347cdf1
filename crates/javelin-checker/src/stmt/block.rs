//! Block statements.

use javelin_ast::Block;

use super::{Result, StmtChecker};
use crate::outcome::Outcome;

impl StmtChecker<'_> {
    /// Check a block in its own scope. Variables declared inside are dropped
    /// from the ledger when the block ends.
    pub fn check_block(&mut self, block: &Block<'_>) -> Result<Outcome> {
        self.enter_scope(block.scope, block.span)?;
        let outcome = self.check_stmts(block.stmts);
        self.leave_scope();
        outcome
    }
}
