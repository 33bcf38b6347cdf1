//! Throw statements.

use javelin_ast::ThrowStmt;
use javelin_core::CheckError;

use super::{Result, StmtChecker};
use crate::exceptions::PendingException;
use crate::outcome::Outcome;

impl StmtChecker<'_> {
    /// Check a throw statement. A throwable value becomes a pending
    /// exception attributed to this statement.
    pub fn check_throw(&mut self, throw: &ThrowStmt<'_>) -> Result<Outcome> {
        let Some(info) = self.check_expr(throw.value) else {
            return Ok(Outcome::Throws);
        };

        if info.is_type_name || !self.registry.is_throwable(info.data_type.type_hash) {
            let what = if info.is_type_name { "the type name" } else { "a value of type" };
            self.report(CheckError::TypeMismatch {
                message: format!(
                    "cannot throw {what} {}; it is not a subclass of Throwable",
                    self.type_name(info.data_type)
                ),
                span: throw.value.span(),
            });
            return Ok(Outcome::Throws);
        }

        self.pending
            .push(PendingException::thrown(info.data_type.type_hash, throw.span));
        Ok(Outcome::Throws)
    }
}
