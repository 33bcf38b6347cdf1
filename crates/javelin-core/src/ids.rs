//! Identifier types for pre-allocated block scopes.

use std::fmt;

/// Identifies a pre-allocated block scope of a method body.
///
/// The upstream structure provider assigns one `ScopeId` per block (and per
/// `for` statement) in pre-order; the checker verifies that the blocks it
/// meets consume the scopes in exactly that order.
///
/// # Example
///
/// ```
/// use javelin_core::ScopeId;
///
/// let scope = ScopeId::new(3);
/// assert_eq!(scope.index(), 3);
/// assert_eq!(scope.to_string(), "scope_3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(u32);

impl ScopeId {
    /// Scope holding the parameters of the method or constructor.
    pub const PARAMETERS: ScopeId = ScopeId(u32::MAX);

    /// Create a new scope ID with the given index.
    #[inline]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the underlying index.
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::PARAMETERS {
            write!(f, "parameters")
        } else {
            write!(f, "scope_{}", self.0)
        }
    }
}

impl From<u32> for ScopeId {
    fn from(index: u32) -> Self {
        Self::new(index)
    }
}
