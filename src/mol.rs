use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::bond::BondOrder;
use crate::traits::{HasAromaticity, HasBondOrder, HasSingleOrDouble};

/// Molecular graph: atoms as nodes, bonds as edges, plus the unpaired
/// electrons that are not part of any bond.
///
/// Each entry in the single-electron list is one unpaired electron sitting on
/// one atom; a diradical carbon appears twice.
pub struct Mol<A, B> {
    graph: UnGraph<A, B>,
    single_electrons: Vec<NodeIndex>,
}

impl<A, B> Mol<A, B> {
    pub fn new() -> Self {
        Self {
            graph: UnGraph::default(),
            single_electrons: Vec::new(),
        }
    }

    pub fn graph(&self) -> &UnGraph<A, B> {
        &self.graph
    }

    pub fn atom(&self, idx: NodeIndex) -> &A {
        &self.graph[idx]
    }

    pub fn atom_mut(&mut self, idx: NodeIndex) -> &mut A {
        &mut self.graph[idx]
    }

    pub fn bond(&self, idx: EdgeIndex) -> &B {
        &self.graph[idx]
    }

    pub fn bond_mut(&mut self, idx: EdgeIndex) -> &mut B {
        &mut self.graph[idx]
    }

    pub fn add_atom(&mut self, atom: A) -> NodeIndex {
        self.graph.add_node(atom)
    }

    pub fn add_bond(&mut self, a: NodeIndex, b: NodeIndex, bond: B) -> EdgeIndex {
        self.graph.add_edge(a, b, bond)
    }

    pub fn atom_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn bond_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn neighbors(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors(idx)
    }

    pub fn bonds_of(&self, idx: NodeIndex) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.graph.edges(idx).map(|e| e.id())
    }

    pub fn atoms(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    pub fn bonds(&self) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.graph.edge_indices()
    }

    pub fn bond_between(&self, a: NodeIndex, b: NodeIndex) -> Option<EdgeIndex> {
        self.graph.find_edge(a, b)
    }

    pub fn bond_endpoints(&self, idx: EdgeIndex) -> Option<(NodeIndex, NodeIndex)> {
        self.graph.edge_endpoints(idx)
    }

    /// The endpoint of `bond` that is not `atom`. `None` if `atom` is not an
    /// endpoint of `bond`.
    pub fn other_atom(&self, bond: EdgeIndex, atom: NodeIndex) -> Option<NodeIndex> {
        let (a, b) = self.bond_endpoints(bond)?;
        if a == atom {
            Some(b)
        } else if b == atom {
            Some(a)
        } else {
            None
        }
    }

    pub fn single_electrons(&self) -> &[NodeIndex] {
        &self.single_electrons
    }

    pub fn add_single_electron(&mut self, atom: NodeIndex) {
        self.single_electrons.push(atom);
    }

    /// Removes one unpaired electron from `atom`. Returns `false` if it had none.
    pub fn remove_single_electron(&mut self, atom: NodeIndex) -> bool {
        match self.single_electrons.iter().position(|&a| a == atom) {
            Some(pos) => {
                self.single_electrons.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn clear_single_electrons(&mut self) {
        self.single_electrons.clear();
    }

    pub fn single_electron_count(&self, atom: NodeIndex) -> usize {
        self.single_electrons.iter().filter(|&&a| a == atom).count()
    }

    pub fn has_single_electron(&self, atom: NodeIndex) -> bool {
        self.single_electrons.contains(&atom)
    }
}

impl<A, B> Mol<A, B>
where
    B: HasBondOrder + HasAromaticity + HasSingleOrDouble,
{
    /// Highest resolved order among the bonds of `atom`. `Unset` bonds are
    /// skipped; `None` when the atom has no resolved bond.
    pub fn max_bond_order(&self, atom: NodeIndex) -> Option<BondOrder> {
        self.bonds_of(atom)
            .map(|ei| self.bond(ei).bond_order())
            .filter(|o| !o.is_unset())
            .max()
    }

    /// Sum of bond weights around `atom`. An unresolved single-or-double bond
    /// contributes its lower bound of one.
    pub fn bond_order_sum(&self, atom: NodeIndex) -> u32 {
        self.bonds_of(atom)
            .map(|ei| bond_weight(self.bond(ei)))
            .sum()
    }
}

pub(crate) fn bond_weight<B>(bond: &B) -> u32
where
    B: HasBondOrder + HasAromaticity + HasSingleOrDouble,
{
    let order = bond.bond_order();
    if order.is_unset() && (bond.is_single_or_double() || bond.is_aromatic()) {
        1
    } else {
        order.weight() as u32
    }
}

impl<A: Clone, B: Clone> Clone for Mol<A, B> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph.clone(),
            single_electrons: self.single_electrons.clone(),
        }
    }
}

impl<A, B> Default for Mol<A, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: PartialEq, B: PartialEq> PartialEq for Mol<A, B> {
    fn eq(&self, other: &Self) -> bool {
        if self.atom_count() != other.atom_count() || self.bond_count() != other.bond_count() {
            return false;
        }
        for idx in self.atoms() {
            if self.atom(idx) != other.atom(idx) {
                return false;
            }
        }
        for idx in self.bonds() {
            if self.bond(idx) != other.bond(idx) {
                return false;
            }
            if self.bond_endpoints(idx) != other.bond_endpoints(idx) {
                return false;
            }
        }
        let mut mine = self.single_electrons.clone();
        let mut theirs = other.single_electrons.clone();
        mine.sort();
        theirs.sort();
        mine == theirs
    }
}

impl<A: std::fmt::Debug, B: std::fmt::Debug> std::fmt::Debug for Mol<A, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mol")
            .field("atom_count", &self.atom_count())
            .field("bond_count", &self.bond_count())
            .field("single_electrons", &self.single_electrons)
            .finish()
    }
}
