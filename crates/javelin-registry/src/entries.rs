//! Registry entries for types and members.

use javelin_core::{DataType, PrimitiveKind, QualifiedName, TypeHash};

/// Whether a reference type is a class or an interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    Class,
    Interface,
}

/// A class or interface declaration.
///
/// Supertypes are named, so registration can report which one is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassEntry {
    /// Fully qualified name.
    pub qname: QualifiedName,
    /// Hash of `qname`.
    pub type_hash: TypeHash,
    /// Class or interface.
    pub kind: ClassKind,
    /// Direct superclass; `None` means the universal root (or the root itself).
    pub superclass: Option<QualifiedName>,
    /// Directly implemented (or, for interfaces, extended) interfaces.
    pub interfaces: Vec<QualifiedName>,
}

impl ClassEntry {
    /// A class named by its dotted qualified name.
    pub fn class(name: &str) -> Self {
        Self::with_kind(name, ClassKind::Class)
    }

    /// An interface named by its dotted qualified name.
    pub fn interface(name: &str) -> Self {
        Self::with_kind(name, ClassKind::Interface)
    }

    fn with_kind(name: &str, kind: ClassKind) -> Self {
        let qname = QualifiedName::from_dotted(name);
        Self {
            type_hash: qname.to_type_hash(),
            qname,
            kind,
            superclass: None,
            interfaces: Vec::new(),
        }
    }

    /// Set the direct superclass.
    pub fn extends(mut self, name: &str) -> Self {
        self.superclass = Some(QualifiedName::from_dotted(name));
        self
    }

    /// Add a directly implemented interface.
    pub fn implements(mut self, name: &str) -> Self {
        self.interfaces.push(QualifiedName::from_dotted(name));
        self
    }

    /// Hashes of all direct supertypes, superclass first.
    pub fn direct_supertypes(&self) -> impl Iterator<Item = TypeHash> + '_ {
        self.superclass
            .iter()
            .chain(self.interfaces.iter())
            .map(QualifiedName::to_type_hash)
    }

    pub fn is_interface(&self) -> bool {
        self.kind == ClassKind::Interface
    }
}

/// A registered type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeEntry {
    /// A primitive, `void`, or the null type.
    Primitive(PrimitiveKind),
    /// A class or interface.
    Class(ClassEntry),
}

impl TypeEntry {
    /// Get the type hash.
    pub fn type_hash(&self) -> TypeHash {
        match self {
            TypeEntry::Primitive(kind) => kind.type_hash(),
            TypeEntry::Class(class) => class.type_hash,
        }
    }

    /// Get the qualified name, as a dotted string.
    pub fn qualified_name(&self) -> String {
        match self {
            TypeEntry::Primitive(kind) => kind.name().to_string(),
            TypeEntry::Class(class) => class.qname.to_string(),
        }
    }

    /// Get the name used in diagnostics (simple name for classes).
    pub fn display_name(&self) -> &str {
        match self {
            TypeEntry::Primitive(kind) => kind.name(),
            TypeEntry::Class(class) => class.qname.simple_name(),
        }
    }

    pub fn as_class(&self) -> Option<&ClassEntry> {
        match self {
            TypeEntry::Class(class) => Some(class),
            TypeEntry::Primitive(_) => None,
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeEntry::Primitive(_))
    }
}

impl From<ClassEntry> for TypeEntry {
    fn from(entry: ClassEntry) -> Self {
        TypeEntry::Class(entry)
    }
}

/// Whether a member is a method or a constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    Method,
    Constructor,
}

/// A method or constructor signature, with its declared throws list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionEntry {
    /// Method name; the owner's simple name for constructors.
    pub name: String,
    /// Declaring type.
    pub owner: TypeHash,
    /// Method or constructor.
    pub kind: FunctionKind,
    /// Parameter types in order.
    pub params: Vec<DataType>,
    /// Result type (`void` for constructors).
    pub return_type: DataType,
    /// Declared exception types.
    pub throws: Vec<TypeHash>,
    /// Signature hash (owner, name, parameter types).
    pub func_hash: TypeHash,
}

impl FunctionEntry {
    /// A method of `owner`.
    pub fn method(
        owner: TypeHash,
        name: impl Into<String>,
        params: Vec<DataType>,
        return_type: DataType,
    ) -> Self {
        let name = name.into();
        let param_hashes: Vec<TypeHash> = params.iter().map(|p| p.type_hash).collect();
        Self {
            func_hash: TypeHash::from_method(owner, &name, &param_hashes),
            name,
            owner,
            kind: FunctionKind::Method,
            params,
            return_type,
            throws: Vec::new(),
        }
    }

    /// A constructor of the class `owner`, whose simple name is `class_name`.
    pub fn constructor(
        owner: TypeHash,
        class_name: impl Into<String>,
        params: Vec<DataType>,
    ) -> Self {
        let param_hashes: Vec<TypeHash> = params.iter().map(|p| p.type_hash).collect();
        Self {
            func_hash: TypeHash::from_constructor(owner, &param_hashes),
            name: class_name.into(),
            owner,
            kind: FunctionKind::Constructor,
            params,
            return_type: DataType::void(),
            throws: Vec::new(),
        }
    }

    /// Declare the exceptions this member may throw.
    pub fn with_throws(mut self, throws: impl IntoIterator<Item = TypeHash>) -> Self {
        self.throws.extend(throws);
        self
    }

    pub fn is_constructor(&self) -> bool {
        self.kind == FunctionKind::Constructor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use javelin_core::well_known;

    #[test]
    fn class_entry_builder() {
        let entry = ClassEntry::class("io.FileReader")
            .extends("io.Reader")
            .implements("io.Closeable");
        assert_eq!(entry.qname.to_string(), "io.FileReader");
        assert_eq!(entry.type_hash, TypeHash::from_name("io.FileReader"));
        let supers: Vec<_> = entry.direct_supertypes().collect();
        assert_eq!(
            supers,
            vec![TypeHash::from_name("io.Reader"), TypeHash::from_name("io.Closeable")]
        );
    }

    #[test]
    fn type_entry_names() {
        let entry: TypeEntry = ClassEntry::class("lang.String").into();
        assert_eq!(entry.display_name(), "String");
        assert_eq!(entry.qualified_name(), "lang.String");
        assert_eq!(entry.type_hash(), well_known::STRING);
        assert_eq!(TypeEntry::Primitive(PrimitiveKind::Int).display_name(), "int");
    }

    #[test]
    fn constructor_and_method_hashes_differ() {
        let owner = TypeHash::from_name("app.Reader");
        let ctor = FunctionEntry::constructor(owner, "Reader", vec![]);
        let method = FunctionEntry::method(owner, "Reader", vec![], DataType::void());
        assert_ne!(ctor.func_hash, method.func_hash);
        assert!(ctor.is_constructor());
    }
}
