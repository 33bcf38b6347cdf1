//! Symbol registry for the javelin body checker.
//!
//! Holds the already-resolved declarations the checker reads: classes and
//! interfaces with their supertypes, methods and constructors with their
//! declared throws lists, and the class hierarchy used for subtype queries.

mod entries;
mod hierarchy;
mod registry;

pub use entries::{ClassEntry, ClassKind, FunctionEntry, FunctionKind, TypeEntry};
pub use hierarchy::{ClassHierarchy, HierarchyEdge};
pub use registry::SymbolRegistry;
