//! Unary and binary operators.

use javelin_ast::{BinaryExpr, BinaryOp, UnaryExpr, UnaryOp};
use javelin_core::{CheckError, DataType, ExprInfo, PrimitiveKind, well_known};
use javelin_registry::SymbolRegistry;

use super::{ExprContext, ExprTyper};

/// Unary numeric promotion: `byte`, `short` and `char` become `int`.
pub fn promote_unary(ty: DataType) -> DataType {
    match ty.primitive_kind() {
        Some(PrimitiveKind::Byte | PrimitiveKind::Short | PrimitiveKind::Char) => DataType::int(),
        _ => ty,
    }
}

/// Binary numeric promotion of two numeric operands.
pub fn promote_binary(left: DataType, right: DataType) -> DataType {
    let kinds = [left.primitive_kind(), right.primitive_kind()];
    for wide in [PrimitiveKind::Double, PrimitiveKind::Float, PrimitiveKind::Long] {
        if kinds.contains(&Some(wide)) {
            return wide.into();
        }
    }
    DataType::int()
}

/// Result type of `left op right`, or `None` if the operator does not apply.
pub fn binary_result(
    registry: &SymbolRegistry,
    op: BinaryOp,
    left: DataType,
    right: DataType,
) -> Option<DataType> {
    let string = DataType::simple(well_known::STRING);
    let both_numeric = left.is_numeric() && right.is_numeric();
    let both_boolean = left.is_boolean() && right.is_boolean();

    if op == BinaryOp::Add && (left == string || right == string) {
        return (!left.is_void() && !right.is_void()).then_some(string);
    }
    if op.is_arithmetic() {
        return both_numeric.then(|| promote_binary(left, right));
    }
    if op.is_shift() {
        return (left.is_integral() && right.is_integral()).then(|| promote_unary(left));
    }
    if op.is_bitwise() {
        if both_boolean {
            return Some(DataType::boolean());
        }
        return (left.is_integral() && right.is_integral()).then(|| promote_binary(left, right));
    }
    if op.is_relational() {
        return both_numeric.then(DataType::boolean);
    }
    if op.is_equality() {
        let references = (left.is_reference() || left.is_null())
            && (right.is_reference() || right.is_null());
        let comparable = both_numeric
            || both_boolean
            || (references
                && (left.is_null()
                    || right.is_null()
                    || registry.is_assignable(left, right)
                    || registry.is_assignable(right, left)
                    || registry.get_class(left.type_hash).is_some_and(|c| c.is_interface())
                    || registry.get_class(right.type_hash).is_some_and(|c| c.is_interface())));
        return comparable.then(DataType::boolean);
    }
    if op.is_logical() {
        return both_boolean.then(DataType::boolean);
    }
    None
}

/// Fold integral constants for the operators that keep `int` arithmetic
/// exact in 32 bits.
fn fold(op: BinaryOp, left: i64, right: i64) -> Option<i64> {
    let value = match op {
        BinaryOp::Add => left.checked_add(right)?,
        BinaryOp::Sub => left.checked_sub(right)?,
        BinaryOp::Mul => left.checked_mul(right)?,
        _ => return None,
    };
    i32::try_from(value).ok().map(i64::from)
}

impl ExprTyper {
    pub(super) fn check_unary(
        &mut self,
        unary: &UnaryExpr<'_>,
        cx: &mut ExprContext<'_>,
    ) -> Option<ExprInfo> {
        let operand = self.check_value(unary.operand, cx)?;
        let ty = operand.data_type;

        let result = match unary.op {
            UnaryOp::Neg | UnaryOp::Plus if ty.is_numeric() => {
                let promoted = promote_unary(ty);
                let constant = match unary.op {
                    UnaryOp::Neg => operand.constant.and_then(i64::checked_neg),
                    _ => operand.constant,
                };
                Some(match constant {
                    Some(value) => ExprInfo::constant(promoted, value),
                    None => ExprInfo::value(promoted),
                })
            }
            UnaryOp::LogicalNot if ty.is_boolean() => Some(ExprInfo::value(DataType::boolean())),
            UnaryOp::BitwiseNot if ty.is_integral() => Some(ExprInfo::value(promote_unary(ty))),
            _ => None,
        };

        if result.is_none() {
            let message = format!(
                "operator '{}' cannot be applied to {}",
                unary.op,
                cx.type_name(ty)
            );
            cx.report(CheckError::TypeMismatch {
                message,
                span: unary.span,
            });
        }
        result
    }

    pub(super) fn check_binary(
        &mut self,
        binary: &BinaryExpr<'_>,
        cx: &mut ExprContext<'_>,
    ) -> Option<ExprInfo> {
        let left = self.check_value(binary.left, cx);
        let right = if binary.op.is_logical() {
            // The right operand may not run; its assignments do not count.
            let before = cx.ledger.clone();
            let right = self.check_value(binary.right, cx);
            *cx.ledger = before;
            right
        } else {
            self.check_value(binary.right, cx)
        };
        let (left, right) = (left?, right?);

        let Some(result) = binary_result(cx.registry, binary.op, left.data_type, right.data_type)
        else {
            let message = format!(
                "operator '{}' cannot be applied to {}, {}",
                binary.op,
                cx.type_name(left.data_type),
                cx.type_name(right.data_type)
            );
            cx.report(CheckError::TypeMismatch {
                message,
                span: binary.span,
            });
            return None;
        };

        let constant = match (left.constant, right.constant) {
            (Some(l), Some(r)) if result == DataType::int() => fold(binary.op, l, r),
            _ => None,
        };
        Some(match constant {
            Some(value) => ExprInfo::constant(result, value),
            None => ExprInfo::value(result),
        })
    }
}
