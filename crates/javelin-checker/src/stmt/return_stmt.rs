//! Return statements.

use javelin_ast::ReturnStmt;
use javelin_core::CheckError;

use super::{Result, StmtChecker};
use crate::conversion::can_assign;
use crate::outcome::Outcome;

impl StmtChecker<'_> {
    /// Check a return statement against the declared result type.
    ///
    /// The outcome is always `Returns`: the value's type when it is
    /// assignable, otherwise the declared type so later joins do not
    /// cascade.
    pub fn check_return(&mut self, ret: &ReturnStmt<'_>) -> Result<Outcome> {
        let expected = self.env.return_type;

        let Some(value) = ret.value else {
            if !expected.is_void() {
                self.report(CheckError::TypeMismatch {
                    message: format!(
                        "missing return value; the method's result type is {}",
                        self.type_name(expected)
                    ),
                    span: ret.span,
                });
            }
            return Ok(Outcome::Returns(expected));
        };

        let Some(info) = self.check_expr(value) else {
            return Ok(Outcome::Returns(expected));
        };

        let message = if expected.is_void() {
            "cannot return a value from a method whose result type is void".to_string()
        } else if info.is_type_name {
            let name = self.type_name(info.data_type);
            format!("cannot return the type name '{name}'; use '{name}.class' to return its class")
        } else if !can_assign(self.registry, &info, expected) {
            format!(
                "cannot return a value of type {} from a method whose result type is {}",
                self.type_name(info.data_type),
                self.type_name(expected)
            )
        } else {
            return Ok(Outcome::Returns(info.data_type));
        };

        self.report(CheckError::TypeMismatch {
            message,
            span: value.span(),
        });
        Ok(Outcome::Returns(expected))
    }
}
