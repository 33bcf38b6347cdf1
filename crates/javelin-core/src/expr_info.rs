//! ExprInfo - expression type checking result.
//!
//! This module provides [`ExprInfo`], what the expression checker hands back
//! to the statement rules for each expression it resolves.

use crate::DataType;

/// Result of expression type checking.
///
/// Besides the resolved [`DataType`], statement rules need to know:
/// - whether the expression is a bare type name (`Foo` used where a value is
///   required), which several rules report with a dedicated message;
/// - the compile-time integral value, if any, for switch labels and constant
///   narrowing (`byte b = 4;`).
///
/// # Examples
///
/// ```
/// use javelin_core::{DataType, ExprInfo};
///
/// let literal = ExprInfo::constant(DataType::int(), 4);
/// assert_eq!(literal.constant, Some(4));
/// assert!(!literal.is_type_name);
///
/// let value = ExprInfo::value(DataType::boolean());
/// assert_eq!(value.constant, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExprInfo {
    /// The data type of this expression.
    pub data_type: DataType,

    /// Whether the expression names a type rather than denoting a value.
    pub is_type_name: bool,

    /// Compile-time integral value, for literals and folded unary minus.
    pub constant: Option<i64>,
}

impl ExprInfo {
    /// A computed value.
    pub fn value(data_type: DataType) -> Self {
        Self {
            data_type,
            is_type_name: false,
            constant: None,
        }
    }

    /// A compile-time integral constant.
    pub fn constant(data_type: DataType, value: i64) -> Self {
        Self {
            data_type,
            is_type_name: false,
            constant: Some(value),
        }
    }

    /// A reference to a type by name.
    pub fn type_name(data_type: DataType) -> Self {
        Self {
            data_type,
            is_type_name: true,
            constant: None,
        }
    }
}
