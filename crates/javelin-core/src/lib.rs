//! Shared vocabulary of the javelin body checker.
//!
//! - [`Span`]: source locations carried by every node and diagnostic
//! - [`TypeHash`] / [`DataType`]: type identity and static types
//! - [`QualifiedName`] / [`ImportContext`]: package-aware type names
//! - [`ScopeId`]: identity of pre-allocated block scopes
//! - [`ExprInfo`]: what the expression checker resolves
//! - [`error`]: diagnostics and fatal internal errors

mod data_type;
pub mod error;
mod expr_info;
mod ids;
mod qualified_name;
mod span;
mod type_hash;

pub use data_type::{DataType, PrimitiveKind};
pub use error::{CheckError, DiagnosticKind, InternalError, JavelinError, RegistrationError};
pub use expr_info::ExprInfo;
pub use ids::ScopeId;
pub use qualified_name::{Import, ImportContext, QualifiedName};
pub use span::Span;
pub use type_hash::{TypeHash, hash_constants, primitives, well_known};
