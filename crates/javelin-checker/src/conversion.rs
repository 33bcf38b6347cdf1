//! Assignment conversion.
//!
//! A value can be assigned to a target type when the registry allows the
//! conversion (identity, widening, subtyping, null to reference), or when it
//! is an integral constant that fits a narrower `byte`, `short` or `char`
//! target.

use javelin_core::{DataType, ExprInfo, PrimitiveKind};
use javelin_registry::SymbolRegistry;

/// Whether the checked expression `info` may be assigned to `target`.
pub fn can_assign(registry: &SymbolRegistry, info: &ExprInfo, target: DataType) -> bool {
    if info.is_type_name {
        return false;
    }
    registry.is_assignable(info.data_type, target) || narrows_constant(info, target)
}

fn narrows_constant(info: &ExprInfo, target: DataType) -> bool {
    let Some(value) = info.constant else {
        return false;
    };
    let source_fits = matches!(
        info.data_type.primitive_kind(),
        Some(PrimitiveKind::Byte | PrimitiveKind::Short | PrimitiveKind::Char | PrimitiveKind::Int)
    );
    let target_kind = target.primitive_kind();
    let target_narrow = matches!(
        target_kind,
        Some(PrimitiveKind::Byte | PrimitiveKind::Short | PrimitiveKind::Char)
    );
    if !source_fits || !target_narrow {
        return false;
    }
    target_kind
        .and_then(PrimitiveKind::integral_range)
        .is_some_and(|(min, max)| (min..=max).contains(&value))
}
