//! SymbolRegistry - types, members and the class hierarchy.
//!
//! This module provides [`SymbolRegistry`], the read-only symbol table the
//! body checker consults. It answers:
//!
//! - name resolution (simple names through an [`ImportContext`], or dotted
//!   qualified names)
//! - subtype, assignability and narrowest-common-supertype queries
//! - method and constructor lookup, including declared throws lists
//!
//! # Storage Model
//!
//! - **Types**: every entry (primitives included) stored by `TypeHash`, with a
//!   reverse index from qualified name to hash
//! - **Functions**: grouped by owning type; overloads share a name
//! - **Hierarchy**: a [`ClassHierarchy`] graph mirrors every supertype edge
//!
//! The registry is populated once, before checking, and only read afterwards.
//!
//! # Example
//!
//! ```
//! use javelin_core::{DataType, well_known};
//! use javelin_registry::{ClassEntry, SymbolRegistry};
//!
//! let mut registry = SymbolRegistry::with_standard_library();
//! registry
//!     .register_type(ClassEntry::class("io.IOException").extends("lang.Exception").into())
//!     .unwrap();
//!
//! let io = registry.get_by_name("io.IOException").unwrap().type_hash();
//! assert!(registry.is_subtype(io, well_known::THROWABLE));
//! assert!(!registry.is_unchecked_exception(io));
//! ```

use rustc_hash::FxHashMap;

use javelin_core::{
    DataType, ImportContext, PrimitiveKind, QualifiedName, RegistrationError, TypeHash, well_known,
};

use crate::entries::{ClassEntry, FunctionEntry, TypeEntry};
use crate::hierarchy::{ClassHierarchy, HierarchyEdge};

/// Symbol table of types and members.
#[derive(Debug)]
pub struct SymbolRegistry {
    /// All types by hash.
    types: FxHashMap<TypeHash, TypeEntry>,

    /// Reverse index: dotted qualified name -> hash.
    by_name: FxHashMap<String, TypeHash>,

    /// Methods and constructors by owning type.
    functions: FxHashMap<TypeHash, Vec<FunctionEntry>>,

    /// Supertype graph over reference types.
    hierarchy: ClassHierarchy,
}

impl Default for SymbolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolRegistry {
    /// Create a registry containing only the primitive types.
    pub fn new() -> Self {
        let mut registry = Self {
            types: FxHashMap::default(),
            by_name: FxHashMap::default(),
            functions: FxHashMap::default(),
            hierarchy: ClassHierarchy::new(),
        };
        for kind in PrimitiveKind::ALL {
            registry.types.insert(kind.type_hash(), TypeEntry::Primitive(kind));
            registry
                .by_name
                .insert(kind.name().to_string(), kind.type_hash());
        }
        registry
    }

    /// Create a registry with the `lang` package pre-registered.
    ///
    /// `lang.Object` is the universal root; `lang.Throwable` has the two
    /// exception branches `lang.Exception` (with `lang.RuntimeException`
    /// below it) and `lang.Error`.
    pub fn with_standard_library() -> Self {
        let mut registry = Self::new();
        let standard = [
            ClassEntry::class("lang.Object"),
            ClassEntry::class("lang.String"),
            ClassEntry::class("lang.Class"),
            ClassEntry::class("lang.Throwable"),
            ClassEntry::class("lang.Exception").extends("lang.Throwable"),
            ClassEntry::class("lang.RuntimeException").extends("lang.Exception"),
            ClassEntry::class("lang.Error").extends("lang.Throwable"),
        ];
        // Ordered so every supertype precedes its subtypes.
        for entry in standard {
            let registered = registry.register_type(entry.into());
            debug_assert!(registered.is_ok(), "lang registration failed: {registered:?}");
        }
        registry
    }

    // ==========================================================================
    // Registration
    // ==========================================================================

    /// Register a class or interface.
    ///
    /// Every named supertype must already be registered. A class without an
    /// explicit superclass extends `lang.Object` when it is registered.
    pub fn register_type(&mut self, entry: TypeEntry) -> Result<(), RegistrationError> {
        let TypeEntry::Class(class) = entry else {
            // Primitives are fixed at construction.
            return Err(RegistrationError::DuplicateType(entry.qualified_name()));
        };

        let name = class.qname.to_string();
        if self.types.contains_key(&class.type_hash) {
            return Err(RegistrationError::DuplicateType(name));
        }

        for supertype in class.superclass.iter().chain(class.interfaces.iter()) {
            if !self.types.contains_key(&supertype.to_type_hash()) {
                return Err(RegistrationError::UnknownSupertype {
                    name,
                    supertype: supertype.to_string(),
                });
            }
        }

        self.hierarchy.add_type(class.type_hash);
        if let Some(superclass) = &class.superclass {
            self.hierarchy.add_supertype(
                class.type_hash,
                superclass.to_type_hash(),
                HierarchyEdge::Extends,
                &name,
            )?;
        } else if !class.is_interface()
            && class.type_hash != well_known::OBJECT
            && self.types.contains_key(&well_known::OBJECT)
        {
            self.hierarchy.add_supertype(
                class.type_hash,
                well_known::OBJECT,
                HierarchyEdge::Extends,
                &name,
            )?;
        }
        for iface in &class.interfaces {
            self.hierarchy.add_supertype(
                class.type_hash,
                iface.to_type_hash(),
                HierarchyEdge::Implements,
                &name,
            )?;
        }

        self.by_name.insert(name, class.type_hash);
        self.types.insert(class.type_hash, TypeEntry::Class(class));
        Ok(())
    }

    /// Register a method or constructor of an already-registered type.
    pub fn register_function(&mut self, entry: FunctionEntry) -> Result<(), RegistrationError> {
        if !self.types.contains_key(&entry.owner) {
            return Err(RegistrationError::UnknownOwner { member: entry.name });
        }
        let overloads = self.functions.entry(entry.owner).or_default();
        if overloads.iter().any(|f| f.func_hash == entry.func_hash) {
            return Err(RegistrationError::DuplicateMember(entry.name));
        }
        overloads.push(entry);
        Ok(())
    }

    // ==========================================================================
    // Type Lookup
    // ==========================================================================

    /// Get a type by hash.
    pub fn get(&self, hash: TypeHash) -> Option<&TypeEntry> {
        self.types.get(&hash)
    }

    /// Get a class or interface by hash.
    pub fn get_class(&self, hash: TypeHash) -> Option<&ClassEntry> {
        self.get(hash)?.as_class()
    }

    /// Get a type by its dotted qualified name.
    pub fn get_by_name(&self, name: &str) -> Option<&TypeEntry> {
        self.by_name.get(name).and_then(|hash| self.types.get(hash))
    }

    pub fn contains_type(&self, hash: TypeHash) -> bool {
        self.types.contains_key(&hash)
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// Resolve a type name as written in source.
    ///
    /// Dotted names are looked up directly. Simple names are tried against
    /// the import context's candidates: single-type imports, the current
    /// package, on-demand imports, and finally the `lang` package.
    pub fn resolve_type_name(&self, name: &str, imports: &ImportContext) -> Option<TypeHash> {
        if name.contains('.') {
            return self.by_name.get(name).copied();
        }
        if let Some(kind) = PrimitiveKind::ALL.iter().find(|kind| kind.name() == name) {
            return Some(kind.type_hash());
        }
        imports
            .candidates(name)
            .iter()
            .find_map(|candidate| self.by_name.get(candidate.as_str()).copied())
    }

    /// Name of a type as shown in diagnostics.
    pub fn type_display_name(&self, hash: TypeHash) -> String {
        match self.types.get(&hash) {
            Some(entry) => entry.display_name().to_string(),
            None => hash.to_string(),
        }
    }

    /// Qualified name of a class or interface.
    pub fn qualified_name(&self, hash: TypeHash) -> Option<&QualifiedName> {
        self.get_class(hash).map(|class| &class.qname)
    }

    // ==========================================================================
    // Subtyping
    // ==========================================================================

    /// Check whether `sub` is `sup` or one of its subtypes.
    ///
    /// Every class and interface is a subtype of `lang.Object`.
    pub fn is_subtype(&self, sub: TypeHash, sup: TypeHash) -> bool {
        if sub == sup {
            return true;
        }
        if sup == well_known::OBJECT && self.get_class(sub).is_some() {
            return true;
        }
        self.hierarchy.is_subtype(sub, sup)
    }

    /// Check whether `hash` is a registered subtype of `lang.Throwable`.
    pub fn is_throwable(&self, hash: TypeHash) -> bool {
        self.get_class(hash).is_some() && self.is_subtype(hash, well_known::THROWABLE)
    }

    /// Check whether `hash` belongs to the category that never has to be
    /// caught or declared.
    pub fn is_unchecked_exception(&self, hash: TypeHash) -> bool {
        well_known::UNCHECKED_ROOTS
            .iter()
            .any(|&root| self.is_subtype(hash, root))
    }

    /// Check whether a value of type `from` may be assigned to `to`.
    ///
    /// Allows identity, `null` to any reference type, primitive widening
    /// and reference subtyping.
    pub fn is_assignable(&self, from: DataType, to: DataType) -> bool {
        if from == to {
            return true;
        }
        if from.is_null() {
            return to.is_reference();
        }
        match (from.primitive_kind(), to.primitive_kind()) {
            (Some(from), Some(to)) => widens_to(from, to),
            (None, None) => self.is_subtype(from.type_hash, to.type_hash),
            _ => false,
        }
    }

    /// The narrowest type both `a` and `b` can be treated as.
    ///
    /// Numeric types join to the narrowest type both widen to (`int` for
    /// `char` with `byte` or `short`). Reference types join to the first
    /// supertype of `a` other than `lang.Object`, in hierarchy order, that
    /// `b` is a subtype of; a shared interface wins over `lang.Object`.
    /// Anything else joins to `lang.Object`.
    pub fn common_supertype(&self, a: DataType, b: DataType) -> DataType {
        if self.is_assignable(a, b) {
            return b;
        }
        if self.is_assignable(b, a) {
            return a;
        }
        if a.is_numeric() && b.is_numeric() {
            // Only char against byte/short reaches here.
            return DataType::int();
        }
        if a.is_reference() && b.is_reference() {
            let candidates = self.hierarchy.supertypes(a.type_hash).into_iter();
            for candidate in candidates.filter(|&hash| hash != well_known::OBJECT) {
                if self.is_subtype(b.type_hash, candidate) {
                    return DataType::simple(candidate);
                }
            }
        }
        DataType::simple(well_known::OBJECT)
    }

    // ==========================================================================
    // Members
    // ==========================================================================

    /// Methods named `name` visible on `owner`: its own first, then those
    /// inherited along the superclass chain.
    pub fn find_methods(&self, owner: TypeHash, name: &str) -> Vec<&FunctionEntry> {
        let mut out = Vec::new();
        let mut current = Some(owner);
        while let Some(hash) = current {
            if let Some(functions) = self.functions.get(&hash) {
                out.extend(
                    functions
                        .iter()
                        .filter(|f| !f.is_constructor() && f.name == name),
                );
            }
            current = self.hierarchy.superclass(hash);
        }
        out
    }

    /// Constructors declared by `owner`.
    pub fn constructors(&self, owner: TypeHash) -> Vec<&FunctionEntry> {
        self.functions
            .get(&owner)
            .map(|functions| functions.iter().filter(|f| f.is_constructor()).collect())
            .unwrap_or_default()
    }

    pub fn function_count(&self) -> usize {
        self.functions.values().map(Vec::len).sum()
    }
}

/// Primitive widening conversion.
fn widens_to(from: PrimitiveKind, to: PrimitiveKind) -> bool {
    if to == PrimitiveKind::Char {
        return false;
    }
    match (from.numeric_rank(), to.numeric_rank()) {
        (Some(from_rank), Some(to_rank)) => to_rank > from_rank,
        _ => false,
    }
}
