//! Assignment ledger - definite-assignment state of local variables.
//!
//! The ledger holds one [`VarRecord`] per variable in scope, innermost last.
//! Branching constructs never mutate and later undo a shared ledger.
//! Instead they walk each branch in a clone, ask the branch's final ledger
//! which variables it newly assigned ([`Ledger::assigned_since`]), and merge
//! those deltas back explicitly ([`Ledger::apply`]).

use javelin_core::{DataType, ScopeId, Span};
use rustc_hash::FxHashSet;

/// Identity of a variable: its declaring scope plus its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VarKey {
    pub scope: ScopeId,
    pub name: String,
}

/// Set of variables newly assigned along some path.
pub type AssignedSet = FxHashSet<VarKey>;

/// A local variable or parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct VarRecord {
    /// Variable name
    pub name: String,
    /// Declared type
    pub data_type: DataType,
    /// Declaring scope
    pub scope: ScopeId,
    /// Whether every path to the current point assigned the variable
    pub has_value: bool,
    /// Declaration site
    pub span: Span,
}

impl VarRecord {
    pub fn new(
        name: impl Into<String>,
        data_type: DataType,
        scope: ScopeId,
        has_value: bool,
        span: Span,
    ) -> Self {
        Self {
            name: name.into(),
            data_type,
            scope,
            has_value,
            span,
        }
    }

    pub fn key(&self) -> VarKey {
        VarKey {
            scope: self.scope,
            name: self.name.clone(),
        }
    }
}

/// Variables in scope at a program point, with their assignment state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    records: Vec<VarRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable. Later declarations shadow earlier ones on lookup.
    pub fn declare(&mut self, record: VarRecord) {
        self.records.push(record);
    }

    /// Find the innermost variable with this name.
    pub fn lookup(&self, name: &str) -> Option<&VarRecord> {
        self.records.iter().rev().find(|r| r.name == name)
    }

    /// Mark the innermost variable with this name as assigned.
    ///
    /// Returns `false` if no such variable is in scope.
    pub fn assign(&mut self, name: &str) -> bool {
        match self.records.iter_mut().rev().find(|r| r.name == name) {
            Some(record) => {
                record.has_value = true;
                true
            }
            None => false,
        }
    }

    /// Whether the innermost variable with this name is definitely assigned.
    pub fn is_assigned(&self, name: &str) -> bool {
        self.lookup(name).is_some_and(|r| r.has_value)
    }

    /// Drop every variable declared in `scope`.
    pub fn exit_scope(&mut self, scope: ScopeId) {
        self.records.retain(|r| r.scope != scope);
    }

    /// Variables that are unassigned in `before` but assigned here.
    ///
    /// Variables declared after `before` was taken are not part of the
    /// delta; they belong to scopes the caller does not see.
    pub fn assigned_since(&self, before: &Ledger) -> AssignedSet {
        self.records
            .iter()
            .filter(|r| r.has_value)
            .filter(|r| {
                before
                    .find(r.scope, &r.name)
                    .is_some_and(|earlier| !earlier.has_value)
            })
            .map(VarRecord::key)
            .collect()
    }

    /// Mark every variable in `assigned` as assigned.
    pub fn apply(&mut self, assigned: &AssignedSet) {
        for record in &mut self.records {
            if !record.has_value && assigned.contains(&record.key()) {
                record.has_value = true;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VarRecord> {
        self.records.iter()
    }

    fn find(&self, scope: ScopeId, name: &str) -> Option<&VarRecord> {
        self.records
            .iter()
            .rev()
            .find(|r| r.scope == scope && r.name == name)
    }
}

/// Variables assigned on every one of the given paths.
///
/// No paths at all yields the empty set.
pub fn intersect_all(paths: impl IntoIterator<Item = AssignedSet>) -> AssignedSet {
    let mut paths = paths.into_iter();
    let Some(first) = paths.next() else {
        return AssignedSet::default();
    };
    paths.fold(first, |acc, next| {
        acc.into_iter().filter(|key| next.contains(key)).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(name: &str, scope: u32, has_value: bool) -> VarRecord {
        VarRecord::new(name, DataType::int(), ScopeId::new(scope), has_value, Span::default())
    }

    fn key(name: &str, scope: u32) -> VarKey {
        VarKey {
            scope: ScopeId::new(scope),
            name: name.to_string(),
        }
    }

    #[test]
    fn lookup_finds_innermost() {
        let mut ledger = Ledger::new();
        ledger.declare(var("x", 0, true));
        ledger.declare(var("x", 1, false));
        assert_eq!(ledger.lookup("x").unwrap().scope, ScopeId::new(1));
        assert!(!ledger.is_assigned("x"));

        ledger.exit_scope(ScopeId::new(1));
        assert!(ledger.is_assigned("x"));
        assert!(ledger.lookup("y").is_none());
    }

    #[test]
    fn delta_only_covers_variables_known_before() {
        let mut before = Ledger::new();
        before.declare(var("a", 0, false));
        before.declare(var("b", 0, true));
        before.declare(var("c", 0, false));

        let mut branch = before.clone();
        branch.declare(var("inner", 1, false));
        assert!(branch.assign("a"));
        assert!(branch.assign("b"));
        assert!(branch.assign("inner"));
        assert!(!branch.assign("missing"));

        let delta = branch.assigned_since(&before);
        assert_eq!(delta.len(), 1);
        assert!(delta.contains(&key("a", 0)));
    }

    #[test]
    fn apply_marks_members_only() {
        let mut ledger = Ledger::new();
        ledger.declare(var("a", 0, false));
        ledger.declare(var("b", 0, false));

        let delta: AssignedSet = [key("b", 0)].into_iter().collect();
        ledger.apply(&delta);
        assert!(!ledger.is_assigned("a"));
        assert!(ledger.is_assigned("b"));
    }

    #[test]
    fn intersection_of_paths() {
        let both: AssignedSet = [key("a", 0), key("b", 0)].into_iter().collect();
        let only_a: AssignedSet = [key("a", 0)].into_iter().collect();

        let joined = intersect_all([both.clone(), only_a]);
        assert_eq!(joined.len(), 1);
        assert!(joined.contains(&key("a", 0)));

        assert!(intersect_all([both, AssignedSet::default()]).is_empty());
        assert!(intersect_all(Vec::<AssignedSet>::new()).is_empty());
    }
}
