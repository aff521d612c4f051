//! Per-atom incident-bond lists.
//!
//! Typing one atom touches its own bonds and those of its neighbours. For a
//! whole molecule it is cheaper to bucket every bond by endpoint once than to
//! walk the graph's adjacency for every query.

use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::mol::Mol;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BondMap {
    incident: Vec<Vec<EdgeIndex>>,
}

impl BondMap {
    /// Buckets every bond under both endpoints in one pass over the bonds.
    /// Within a bucket, bonds keep the order in which they were added to the
    /// molecule.
    pub fn new<A, B>(mol: &Mol<A, B>) -> Self {
        let mut incident = vec![Vec::new(); mol.atom_count()];
        for edge in mol.bonds() {
            if let Some((a, b)) = mol.bond_endpoints(edge) {
                incident[a.index()].push(edge);
                if b != a {
                    incident[b.index()].push(edge);
                }
            }
        }
        Self { incident }
    }

    /// Bonds incident to `atom`. Empty for atoms the map does not cover.
    pub fn bonds(&self, atom: NodeIndex) -> &[EdgeIndex] {
        self.incident
            .get(atom.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn degree(&self, atom: NodeIndex) -> usize {
        self.bonds(atom).len()
    }

    pub fn atom_count(&self) -> usize {
        self.incident.len()
    }
}
