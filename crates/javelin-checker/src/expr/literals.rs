//! Literal expressions.

use javelin_ast::{LiteralExpr, LiteralKind};
use javelin_core::{DataType, ExprInfo, PrimitiveKind, well_known};

use super::ExprTyper;

impl ExprTyper {
    /// Type a literal. Integer and character literals carry their value.
    pub(super) fn check_literal(&self, lit: &LiteralExpr<'_>) -> ExprInfo {
        match lit.kind {
            LiteralKind::Int(value) => ExprInfo::constant(DataType::int(), value),
            LiteralKind::Long(_) => ExprInfo::value(PrimitiveKind::Long.into()),
            LiteralKind::Float(_) => ExprInfo::value(PrimitiveKind::Float.into()),
            LiteralKind::Double(_) => ExprInfo::value(PrimitiveKind::Double.into()),
            LiteralKind::Char(c) => {
                ExprInfo::constant(PrimitiveKind::Char.into(), i64::from(u32::from(c)))
            }
            LiteralKind::Bool(_) => ExprInfo::value(DataType::boolean()),
            LiteralKind::String(_) => ExprInfo::value(DataType::simple(well_known::STRING)),
            LiteralKind::Null => ExprInfo::value(DataType::null()),
        }
    }
}
