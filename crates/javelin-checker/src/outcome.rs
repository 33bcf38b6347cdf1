//! Statement outcomes and their join.
//!
//! Every statement rule produces an [`Outcome`]. Control-flow constructs
//! combine the outcomes of their branches with [`Outcome::join`]:
//!
//! | left \ right     | FallsThrough | Returns(b)          | Jump  | Throws       |
//! |------------------|--------------|---------------------|-------|--------------|
//! | FallsThrough     | FallsThrough | FallsThrough        | FallsThrough | FallsThrough |
//! | Returns(a)       | FallsThrough | Returns(join(a, b)) | Returns(a) | Returns(a) |
//! | Jump             | FallsThrough | Returns(b)          | Jump  | Jump         |
//! | Throws           | FallsThrough | Returns(b)          | Jump  | Throws       |
//!
//! Falling through absorbs everything; a jump contributes nothing to a
//! return type; `Throws` is the bottom element.

use std::fmt;

use javelin_core::DataType;
use javelin_registry::SymbolRegistry;

/// The kind of a non-return jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JumpKind {
    Break,
    Continue,
}

/// How a statement completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Control may reach the next statement.
    FallsThrough,
    /// Every path returns a value of (at most) this type; `void` for
    /// value-less returns.
    Returns(DataType),
    /// Every path leaves the enclosing loop or switch.
    Jump(JumpKind),
    /// Every path throws.
    Throws,
}

impl Outcome {
    pub fn is_falls_through(&self) -> bool {
        matches!(self, Outcome::FallsThrough)
    }

    /// Whether every path leaves the method (by return or by throwing).
    pub fn exits_method(&self) -> bool {
        matches!(self, Outcome::Returns(_) | Outcome::Throws)
    }

    pub fn is_jump(&self) -> bool {
        matches!(self, Outcome::Jump(_))
    }

    /// Combine the outcomes of two alternative paths.
    pub fn join(self, other: Outcome, registry: &SymbolRegistry) -> Outcome {
        match (self, other) {
            (Outcome::FallsThrough, _) | (_, Outcome::FallsThrough) => Outcome::FallsThrough,
            (Outcome::Throws, other) | (other, Outcome::Throws) => other,
            (Outcome::Returns(a), Outcome::Returns(b)) => {
                Outcome::Returns(registry.common_supertype(a, b))
            }
            (Outcome::Returns(ty), Outcome::Jump(_)) | (Outcome::Jump(_), Outcome::Returns(ty)) => {
                Outcome::Returns(ty)
            }
            (Outcome::Jump(kind), Outcome::Jump(_)) => Outcome::Jump(kind),
        }
    }

    /// Join any number of alternatives; no alternatives falls through.
    pub fn join_all(
        outcomes: impl IntoIterator<Item = Outcome>,
        registry: &SymbolRegistry,
    ) -> Outcome {
        outcomes
            .into_iter()
            .reduce(|acc, next| acc.join(next, registry))
            .unwrap_or(Outcome::FallsThrough)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::FallsThrough => write!(f, "falls through"),
            Outcome::Returns(ty) => write!(f, "returns {:?}", ty.type_hash),
            Outcome::Jump(JumpKind::Break) => write!(f, "breaks"),
            Outcome::Jump(JumpKind::Continue) => write!(f, "continues"),
            Outcome::Throws => write!(f, "throws"),
        }
    }
}
