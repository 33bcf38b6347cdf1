//! Local variable declarations.

use javelin_ast::VarDeclStmt;
use javelin_core::CheckError;

use super::{Result, StmtChecker};
use crate::conversion::can_assign;
use crate::ledger::VarRecord;
use crate::outcome::Outcome;
use crate::type_resolver::TypeResolver;

impl StmtChecker<'_> {
    /// Check a declaration.
    ///
    /// Each declarator must have a binding in the innermost scope; its type
    /// comes from the binding. The initializer is checked before the
    /// variable is declared, so it cannot read the variable itself.
    pub fn check_var_decl(&mut self, decl: &VarDeclStmt<'_>) -> Result<Outcome> {
        let env = self.env;
        if let Err(error) = TypeResolver::new(self.registry, &env.imports).resolve(&decl.ty) {
            self.report(error);
        }

        for var in decl.vars {
            let binding = self.binding(var.name.name, var.span)?;
            let data_type = binding.data_type;

            if let Some(init) = var.init
                && let Some(info) = self.check_expr(init)
            {
                let message = if info.is_type_name {
                    Some(format!(
                        "the type name '{}' cannot be used as a value",
                        self.type_name(info.data_type)
                    ))
                } else if !can_assign(self.registry, &info, data_type) {
                    Some(format!(
                        "cannot initialize a variable of type {} with a value of type {}",
                        self.type_name(data_type),
                        self.type_name(info.data_type)
                    ))
                } else {
                    None
                };
                if let Some(message) = message {
                    self.report(CheckError::TypeMismatch {
                        message,
                        span: init.span(),
                    });
                }
            }

            let scope = self.scope_stack.last().map(|scope| scope.id);
            if let Some(scope) = scope {
                self.ledger.declare(VarRecord::new(
                    var.name.name,
                    data_type,
                    scope,
                    var.init.is_some(),
                    var.span,
                ));
            }
        }
        Ok(Outcome::FallsThrough)
    }
}
