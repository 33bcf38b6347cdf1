//! Names and assignments.

use javelin_ast::{AssignExpr, Expr, Ident};
use javelin_core::{CheckError, DataType, ExprInfo};

use super::{ExprContext, ExprTyper, binary_result};
use crate::config::CheckerProperty;
use crate::conversion::can_assign;

impl ExprTyper {
    /// A name is a local variable or parameter if one is in scope, else a
    /// type name.
    pub(super) fn check_ident(
        &mut self,
        ident: &Ident<'_>,
        cx: &mut ExprContext<'_>,
    ) -> Option<ExprInfo> {
        if let Some((data_type, has_value)) = cx
            .ledger
            .lookup(ident.name)
            .map(|record| (record.data_type, record.has_value))
        {
            if !has_value && cx.config.property(CheckerProperty::TrackDefiniteAssignment) {
                cx.report(CheckError::UninitializedVariable {
                    name: ident.name.to_string(),
                    span: ident.span,
                });
            }
            return Some(ExprInfo::value(data_type));
        }

        if let Some(hash) = cx.registry.resolve_type_name(ident.name, &cx.env.imports) {
            return Some(ExprInfo::type_name(DataType::simple(hash)));
        }

        cx.report(CheckError::UnknownVariable {
            name: ident.name.to_string(),
            span: ident.span,
        });
        None
    }

    pub(super) fn check_assign(
        &mut self,
        assign: &AssignExpr<'_>,
        cx: &mut ExprContext<'_>,
    ) -> Option<ExprInfo> {
        let Some(target) = assign_target(assign.target) else {
            self.check_value(assign.value, cx);
            cx.report(CheckError::TypeMismatch {
                message: "the left-hand side of an assignment must be a variable".to_string(),
                span: assign.target.span(),
            });
            return None;
        };

        let Some(target_type) = cx.ledger.lookup(target.name).map(|record| record.data_type) else {
            self.check_value(assign.value, cx);
            let error = if cx.registry.resolve_type_name(target.name, &cx.env.imports).is_some() {
                CheckError::TypeMismatch {
                    message: format!("cannot assign to the type name '{}'", target.name),
                    span: target.span,
                }
            } else {
                CheckError::UnknownVariable {
                    name: target.name.to_string(),
                    span: target.span,
                }
            };
            cx.report(error);
            return None;
        };

        match assign.op.binary_op() {
            None => {
                if let Some(value) = self.check_value(assign.value, cx)
                    && !can_assign(cx.registry, &value, target_type)
                {
                    let message = format!(
                        "cannot assign a value of type {} to a variable of type {}",
                        cx.type_name(value.data_type),
                        cx.type_name(target_type)
                    );
                    cx.report(CheckError::TypeMismatch {
                        message,
                        span: assign.value.span(),
                    });
                }
            }
            Some(op) => {
                // The target is read before the value is evaluated.
                self.check_ident(target, cx);
                if let Some(value) = self.check_value(assign.value, cx) {
                    let applies = binary_result(cx.registry, op, target_type, value.data_type)
                        .is_some_and(|result| {
                            result == target_type
                                || (result.is_numeric() && target_type.is_numeric())
                        });
                    if !applies {
                        let message = format!(
                            "operator '{}' cannot be applied to {}, {}",
                            assign.op,
                            cx.type_name(target_type),
                            cx.type_name(value.data_type)
                        );
                        cx.report(CheckError::TypeMismatch {
                            message,
                            span: assign.span,
                        });
                    }
                }
            }
        }

        cx.ledger.assign(target.name);
        Some(ExprInfo::value(target_type))
    }
}

/// The variable an assignment writes, looking through parentheses.
fn assign_target<'e>(target: &'e Expr<'e>) -> Option<&'e Ident<'e>> {
    match target {
        Expr::Ident(ident) => Some(ident),
        Expr::Paren(paren) => assign_target(paren.expr),
        _ => None,
    }
}
