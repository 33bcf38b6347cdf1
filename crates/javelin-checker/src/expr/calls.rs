//! Method calls, instance creation and class literals.
//!
//! Invoking a member records every exception in its declared throws list as
//! pending at the call site. Whether that exception is caught, declared, or
//! unchecked is decided later by the statement rules.

use javelin_ast::{CallExpr, ClassLiteralExpr, Expr, NewExpr};
use javelin_core::{CheckError, DataType, ExprInfo, Span, well_known};
use javelin_registry::{FunctionEntry, FunctionKind, SymbolRegistry};
use tracing::trace;

use super::{ExprContext, ExprTyper};
use crate::conversion::can_assign;
use crate::exceptions::PendingException;
use crate::type_resolver::TypeResolver;

impl ExprTyper {
    pub(super) fn check_call(
        &mut self,
        call: &CallExpr<'_>,
        cx: &mut ExprContext<'_>,
    ) -> Option<ExprInfo> {
        let args = self.check_args(call.args, cx);
        let registry = cx.registry;
        let name = call.name.name;

        let candidates = match cx.env.owner {
            Some(owner) => registry.find_methods(owner, name),
            None => Vec::new(),
        };
        if candidates.is_empty() {
            cx.report(CheckError::UnknownFunction {
                message: format!("unknown method '{name}'"),
                span: call.name.span,
            });
            return None;
        }

        let args = args?;
        let Some(method) = select_overload(registry, &candidates, &args) else {
            let message = format!(
                "no overload of method '{name}' accepts arguments ({})",
                describe_args(cx, &args)
            );
            cx.report(CheckError::UnknownFunction {
                message,
                span: call.span,
            });
            return None;
        };

        trace!(method = name, throws = method.throws.len(), "resolved call");
        record_throws(cx, method, call.span);
        Some(ExprInfo::value(method.return_type))
    }

    pub(super) fn check_new(
        &mut self,
        new: &NewExpr<'_>,
        cx: &mut ExprContext<'_>,
    ) -> Option<ExprInfo> {
        let registry = cx.registry;
        let env = cx.env;
        let resolved = TypeResolver::new(registry, &env.imports).resolve(&new.ty);
        let args = self.check_args(new.args, cx);

        let class_type = match resolved {
            Ok(ty) => ty,
            Err(error) => {
                cx.report(error);
                return None;
            }
        };
        let Some(class) = registry.get_class(class_type.type_hash) else {
            cx.report(CheckError::TypeMismatch {
                message: format!(
                    "cannot instantiate the primitive type '{}'",
                    new.ty.display_name()
                ),
                span: new.ty.span,
            });
            return None;
        };
        if class.is_interface() {
            cx.report(CheckError::TypeMismatch {
                message: format!(
                    "cannot instantiate the interface '{}'",
                    class.qname.simple_name()
                ),
                span: new.ty.span,
            });
            return None;
        }
        let args = args?;

        let constructors = registry.constructors(class_type.type_hash);
        if constructors.is_empty() {
            // Implicit no-argument constructor.
            if args.is_empty() {
                return Some(ExprInfo::value(class_type));
            }
        } else if let Some(constructor) = select_overload(registry, &constructors, &args) {
            record_throws(cx, constructor, new.span);
            return Some(ExprInfo::value(class_type));
        }

        let message = format!(
            "no constructor of '{}' accepts arguments ({})",
            class.qname.simple_name(),
            describe_args(cx, &args)
        );
        cx.report(CheckError::UnknownFunction {
            message,
            span: new.span,
        });
        None
    }

    pub(super) fn check_class_literal(
        &mut self,
        lit: &ClassLiteralExpr<'_>,
        cx: &mut ExprContext<'_>,
    ) -> Option<ExprInfo> {
        let env = cx.env;
        match TypeResolver::new(cx.registry, &env.imports).resolve(&lit.ty) {
            Ok(_) => Some(ExprInfo::value(DataType::simple(well_known::CLASS))),
            Err(error) => {
                cx.report(error);
                None
            }
        }
    }

    /// Check every argument, left to right, even after a failure.
    fn check_args(
        &mut self,
        args: &[&Expr<'_>],
        cx: &mut ExprContext<'_>,
    ) -> Option<Vec<ExprInfo>> {
        let checked: Vec<Option<ExprInfo>> =
            args.iter().map(|arg| self.check_value(arg, cx)).collect();
        checked.into_iter().collect()
    }
}

/// First candidate whose parameters accept the arguments.
fn select_overload<'r>(
    registry: &SymbolRegistry,
    candidates: &[&'r FunctionEntry],
    args: &[ExprInfo],
) -> Option<&'r FunctionEntry> {
    candidates.iter().copied().find(|candidate| {
        candidate.params.len() == args.len()
            && candidate
                .params
                .iter()
                .zip(args)
                .all(|(&param, arg)| can_assign(registry, arg, param))
    })
}

fn record_throws(cx: &mut ExprContext<'_>, function: &FunctionEntry, span: Span) {
    let callee = match function.kind {
        FunctionKind::Method => function.name.clone(),
        FunctionKind::Constructor => cx
            .registry
            .qualified_name(function.owner)
            .map(|qname| qname.simple_name().to_string())
            .unwrap_or_else(|| function.name.clone()),
    };
    for &exception in &function.throws {
        cx.pending
            .push(PendingException::invoked(exception, callee.clone(), function.kind, span));
    }
}

fn describe_args(cx: &ExprContext<'_>, args: &[ExprInfo]) -> String {
    args.iter()
        .map(|arg| cx.type_name(arg.data_type))
        .collect::<Vec<_>>()
        .join(", ")
}
