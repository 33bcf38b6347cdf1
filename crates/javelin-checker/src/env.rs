//! Binding environment of the member whose body is checked.

use javelin_core::{DataType, ImportContext, ScopeId, Span, TypeHash};

use crate::ledger::{Ledger, VarRecord};

/// The kind of member being checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberKind {
    Method { name: String },
    Constructor { class_name: String },
}

impl MemberKind {
    /// Description used in diagnostics, e.g. `method 'read'`.
    pub fn describe(&self) -> String {
        match self {
            MemberKind::Method { name } => format!("method '{name}'"),
            MemberKind::Constructor { class_name } => format!("constructor '{class_name}'"),
        }
    }
}

/// Everything about the enclosing member that the checker reads.
///
/// # Example
///
/// ```
/// use javelin_checker::BindingEnv;
/// use javelin_core::{DataType, ImportContext};
///
/// let env = BindingEnv::method("parse", DataType::int())
///     .with_param("radix", DataType::int())
///     .with_imports(ImportContext::in_package("app").import("io.IOException"));
/// assert!(env.ledger.is_assigned("radix"));
/// ```
#[derive(Debug, Clone)]
pub struct BindingEnv {
    /// The member being checked
    pub member: MemberKind,
    /// Declaring class, used to resolve unqualified method calls
    pub owner: Option<TypeHash>,
    /// Declared result type (`void` for constructors)
    pub return_type: DataType,
    /// Declared throws set
    pub throws: Vec<TypeHash>,
    /// Variables in scope on entry (parameters, all assigned)
    pub ledger: Ledger,
    /// Package and imports for resolving type names
    pub imports: ImportContext,
}

impl BindingEnv {
    /// Environment for a method.
    pub fn method(name: impl Into<String>, return_type: DataType) -> Self {
        Self::new(MemberKind::Method { name: name.into() }, return_type)
    }

    /// Environment for a constructor.
    pub fn constructor(class_name: impl Into<String>) -> Self {
        Self::new(
            MemberKind::Constructor {
                class_name: class_name.into(),
            },
            DataType::void(),
        )
    }

    fn new(member: MemberKind, return_type: DataType) -> Self {
        Self {
            member,
            owner: None,
            return_type,
            throws: Vec::new(),
            ledger: Ledger::new(),
            imports: ImportContext::default(),
        }
    }

    /// Set the declaring class.
    pub fn in_class(mut self, owner: TypeHash) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Add declared exception types.
    pub fn with_throws(mut self, throws: impl IntoIterator<Item = TypeHash>) -> Self {
        self.throws.extend(throws);
        self
    }

    /// Add a parameter; parameters are always assigned.
    pub fn with_param(mut self, name: impl Into<String>, data_type: DataType) -> Self {
        self.ledger.declare(VarRecord::new(
            name,
            data_type,
            ScopeId::PARAMETERS,
            true,
            Span::default(),
        ));
        self
    }

    /// Set the import context.
    pub fn with_imports(mut self, imports: ImportContext) -> Self {
        self.imports = imports;
        self
    }

    pub fn is_constructor(&self) -> bool {
        matches!(self.member, MemberKind::Constructor { .. })
    }
}
