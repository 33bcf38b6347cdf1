use std::fmt;

/// Qualified name of a class or interface (`package.sub.Name`).
///
/// Used as the primary key for name resolution; the [`TypeHash`](crate::TypeHash)
/// of a type is always computed from its dotted string form.
///
/// # Examples
///
/// ```
/// use javelin_core::QualifiedName;
///
/// let reader = QualifiedName::from_dotted("io.Reader");
/// assert_eq!(reader.simple_name(), "Reader");
/// assert_eq!(reader.package_string(), "io");
/// assert_eq!(reader.to_string(), "io.Reader");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    /// Simple name (e.g., "Reader")
    pub name: String,
    /// Package path (e.g., ["io"]); empty for the unnamed package
    pub package: Vec<String>,
}

impl QualifiedName {
    /// Create a new qualified name in a package.
    pub fn new(name: impl Into<String>, package: Vec<String>) -> Self {
        Self {
            name: name.into(),
            package,
        }
    }

    /// Create a qualified name in the unnamed package.
    pub fn unpackaged(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }

    /// Create from a dotted string; the last segment is the simple name.
    pub fn from_dotted(s: &str) -> Self {
        let mut parts: Vec<String> = s
            .split('.')
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();
        let name = parts.pop().unwrap_or_default();
        Self::new(name, parts)
    }

    /// Get the simple (unqualified) name.
    pub fn simple_name(&self) -> &str {
        &self.name
    }

    /// Get the package as a dotted string.
    pub fn package_string(&self) -> String {
        self.package.join(".")
    }

    /// Compute the TypeHash of this name.
    pub fn to_type_hash(&self) -> crate::TypeHash {
        crate::TypeHash::from_name(&self.to_string())
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.package {
            write!(f, "{segment}.")?;
        }
        write!(f, "{}", self.name)
    }
}

/// An import declaration of the compilation unit being checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Import {
    /// `import pkg.Name;`
    Single(QualifiedName),
    /// `import pkg.*;`
    OnDemand(String),
}

/// Package and import context used to resolve type names in a body.
///
/// The implicit `lang` package is always searched last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportContext {
    /// Package of the compilation unit (`None` for the unnamed package).
    pub package: Option<String>,
    /// Import declarations in source order.
    pub imports: Vec<Import>,
}

impl ImportContext {
    /// Context for a compilation unit in `package`.
    pub fn in_package(package: impl Into<String>) -> Self {
        Self {
            package: Some(package.into()),
            imports: Vec::new(),
        }
    }

    /// Add `import name;`.
    pub fn import(mut self, name: &str) -> Self {
        self.imports.push(Import::Single(QualifiedName::from_dotted(name)));
        self
    }

    /// Add `import package.*;`.
    pub fn import_on_demand(mut self, package: impl Into<String>) -> Self {
        self.imports.push(Import::OnDemand(package.into()));
        self
    }

    /// Candidate qualified names for a simple type name, in lookup order:
    /// single-type imports, the unit's own package, on-demand imports, then
    /// the implicit `lang` package.
    pub fn candidates(&self, simple: &str) -> Vec<String> {
        let mut out = Vec::new();
        for import in &self.imports {
            if let Import::Single(qname) = import
                && qname.simple_name() == simple
            {
                out.push(qname.to_string());
            }
        }
        match &self.package {
            Some(package) => out.push(format!("{package}.{simple}")),
            None => out.push(simple.to_string()),
        }
        for import in &self.imports {
            if let Import::OnDemand(package) = import {
                out.push(format!("{package}.{simple}"));
            }
        }
        out.push(format!("{}.{simple}", crate::well_known::LANG_PACKAGE));
        out
    }
}
