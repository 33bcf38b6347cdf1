//! Class hierarchy - subtype graph over reference types.
//!
//! Uses `petgraph::DiGraph` with:
//! - Nodes: the `TypeHash` of each class or interface
//! - Edges: `Extends` (superclass) and `Implements` (interface), pointing
//!   from the subtype to the supertype
//!
//! Subtype queries are reachability queries; cycles are rejected when an
//! edge is added.

use std::collections::VecDeque;

use javelin_core::{RegistrationError, TypeHash};
use petgraph::Direction;
use petgraph::algo::has_path_connecting;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use rustc_hash::{FxHashMap, FxHashSet};

/// Edge types in the hierarchy graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HierarchyEdge {
    /// Subclass to superclass.
    Extends,
    /// Class (or interface) to an implemented (or extended) interface.
    Implements,
}

/// The subtype graph.
#[derive(Debug, Default)]
pub struct ClassHierarchy {
    graph: DiGraph<TypeHash, HierarchyEdge>,
    nodes: FxHashMap<TypeHash, NodeIndex>,
}

impl ClassHierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a type node, returning the existing node if already present.
    pub fn add_type(&mut self, hash: TypeHash) -> NodeIndex {
        if let Some(&node) = self.nodes.get(&hash) {
            return node;
        }
        let node = self.graph.add_node(hash);
        self.nodes.insert(hash, node);
        node
    }

    pub fn contains(&self, hash: TypeHash) -> bool {
        self.nodes.contains_key(&hash)
    }

    /// Record that `sub` directly extends or implements `sup`.
    ///
    /// `name` is the subtype's qualified name, used in the error when the
    /// edge would close a cycle.
    pub fn add_supertype(
        &mut self,
        sub: TypeHash,
        sup: TypeHash,
        edge: HierarchyEdge,
        name: &str,
    ) -> Result<(), RegistrationError> {
        let sub_node = self.add_type(sub);
        let sup_node = self.add_type(sup);
        if sub_node == sup_node || has_path_connecting(&self.graph, sup_node, sub_node, None) {
            return Err(RegistrationError::CircularInheritance(name.to_string()));
        }
        self.graph.add_edge(sub_node, sup_node, edge);
        Ok(())
    }

    /// Check whether `sub` is `sup` or reaches it through supertype edges.
    pub fn is_subtype(&self, sub: TypeHash, sup: TypeHash) -> bool {
        if sub == sup {
            return true;
        }
        match (self.nodes.get(&sub), self.nodes.get(&sup)) {
            (Some(&from), Some(&to)) => has_path_connecting(&self.graph, from, to, None),
            _ => false,
        }
    }

    /// The direct superclass of `hash`, if it has one.
    pub fn superclass(&self, hash: TypeHash) -> Option<TypeHash> {
        let node = *self.nodes.get(&hash)?;
        self.graph
            .edges_directed(node, Direction::Outgoing)
            .find(|edge| *edge.weight() == HierarchyEdge::Extends)
            .map(|edge| self.graph[edge.target()])
    }

    /// All supertypes of `hash`, starting with `hash` itself.
    ///
    /// The superclass chain comes first (nearest first), then interfaces in
    /// breadth-first order. This is the order in which the narrowest common
    /// supertype is searched.
    pub fn supertypes(&self, hash: TypeHash) -> Vec<TypeHash> {
        let mut out = vec![hash];
        let mut seen: FxHashSet<TypeHash> = FxHashSet::default();
        seen.insert(hash);

        let mut current = hash;
        while let Some(sup) = self.superclass(current) {
            if !seen.insert(sup) {
                break;
            }
            out.push(sup);
            current = sup;
        }

        let mut queue: VecDeque<TypeHash> = out.iter().copied().collect();
        while let Some(next) = queue.pop_front() {
            let Some(&node) = self.nodes.get(&next) else {
                continue;
            };
            for edge in self.graph.edges_directed(node, Direction::Outgoing) {
                if *edge.weight() != HierarchyEdge::Implements {
                    continue;
                }
                let iface = self.graph[edge.target()];
                if seen.insert(iface) {
                    out.push(iface);
                    queue.push_back(iface);
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(name: &str) -> TypeHash {
        TypeHash::from_name(name)
    }

    fn sample() -> ClassHierarchy {
        let mut tree = ClassHierarchy::new();
        tree.add_supertype(h("B"), h("A"), HierarchyEdge::Extends, "B")
            .unwrap();
        tree.add_supertype(h("C"), h("B"), HierarchyEdge::Extends, "C")
            .unwrap();
        tree.add_supertype(h("C"), h("I"), HierarchyEdge::Implements, "C")
            .unwrap();
        tree.add_supertype(h("I"), h("J"), HierarchyEdge::Implements, "I")
            .unwrap();
        tree
    }

    #[test]
    fn subtype_queries() {
        let tree = sample();
        assert!(tree.is_subtype(h("C"), h("A")));
        assert!(tree.is_subtype(h("C"), h("J")));
        assert!(tree.is_subtype(h("B"), h("B")));
        assert!(!tree.is_subtype(h("A"), h("B")));
        assert!(!tree.is_subtype(h("B"), h("I")));
    }

    #[test]
    fn supertypes_order_classes_before_interfaces() {
        let tree = sample();
        assert_eq!(
            tree.supertypes(h("C")),
            vec![h("C"), h("B"), h("A"), h("I"), h("J")]
        );
    }

    #[test]
    fn cycles_are_rejected() {
        let mut tree = sample();
        let err = tree
            .add_supertype(h("A"), h("C"), HierarchyEdge::Extends, "A")
            .unwrap_err();
        assert_eq!(err, RegistrationError::CircularInheritance("A".into()));
        assert!(
            tree.add_supertype(h("X"), h("X"), HierarchyEdge::Extends, "X")
                .is_err()
        );
    }
}
