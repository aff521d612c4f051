use once_cell::unsync::OnceCell;
use petgraph::algo::connected_components;
use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::mol::Mol;

/// Ring membership for every atom and bond of a molecule.
///
/// A bond is cyclic exactly when it is not a bridge, and an atom is cyclic
/// when at least one of its bonds is. No ring enumeration is performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingSearch {
    cyclic_atoms: Vec<bool>,
    cyclic_bonds: Vec<bool>,
}

impl RingSearch {
    pub fn new<A, B>(mol: &Mol<A, B>) -> Self {
        let n = mol.atom_count();
        let m = mol.bond_count();
        if Self::expected_ring_count(mol) == 0 {
            return Self {
                cyclic_atoms: vec![false; n],
                cyclic_bonds: vec![false; m],
            };
        }

        let bridges = find_bridges(mol);
        let mut cyclic_atoms = vec![false; n];
        let mut cyclic_bonds = vec![false; m];
        for edge in mol.bonds() {
            if bridges[edge.index()] {
                continue;
            }
            if let Some((a, b)) = mol.bond_endpoints(edge) {
                cyclic_bonds[edge.index()] = true;
                cyclic_atoms[a.index()] = true;
                cyclic_atoms[b.index()] = true;
            }
        }
        Self {
            cyclic_atoms,
            cyclic_bonds,
        }
    }

    pub fn is_ring_atom(&self, atom: NodeIndex) -> bool {
        self.cyclic_atoms.get(atom.index()).copied().unwrap_or(false)
    }

    pub fn is_ring_bond(&self, bond: EdgeIndex) -> bool {
        self.cyclic_bonds.get(bond.index()).copied().unwrap_or(false)
    }

    pub fn ring_atoms(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.cyclic_atoms
            .iter()
            .enumerate()
            .filter(|(_, &c)| c)
            .map(|(i, _)| NodeIndex::new(i))
    }

    /// Cyclomatic number: bonds + components - atoms.
    pub fn expected_ring_count<A, B>(mol: &Mol<A, B>) -> usize {
        let v = mol.atom_count();
        let e = mol.bond_count();
        let c = connected_components(mol.graph());
        (e + c).saturating_sub(v)
    }
}

/// Ring membership that is either supplied by the caller or computed the
/// first time a rule asks for it.
pub(crate) enum RingOracle<'a> {
    Supplied(&'a RingSearch),
    Lazy(OnceCell<RingSearch>),
}

impl<'a> RingOracle<'a> {
    pub(crate) fn new(supplied: Option<&'a RingSearch>) -> Self {
        match supplied {
            Some(rs) => RingOracle::Supplied(rs),
            None => RingOracle::Lazy(OnceCell::new()),
        }
    }

    pub(crate) fn is_ring_atom<A, B>(&self, mol: &Mol<A, B>, atom: NodeIndex) -> bool {
        match self {
            RingOracle::Supplied(rs) => rs.is_ring_atom(atom),
            RingOracle::Lazy(cell) => cell.get_or_init(|| RingSearch::new(mol)).is_ring_atom(atom),
        }
    }
}

// Iterative Tarjan low-link; parent tracking is by edge so parallel bonds
// between the same pair of atoms count as a cycle.
fn find_bridges<A, B>(mol: &Mol<A, B>) -> Vec<bool> {
    let n = mol.atom_count();
    let mut adj: Vec<Vec<(NodeIndex, EdgeIndex)>> = vec![Vec::new(); n];
    for edge in mol.bonds() {
        if let Some((a, b)) = mol.bond_endpoints(edge) {
            if a == b {
                continue;
            }
            adj[a.index()].push((b, edge));
            adj[b.index()].push((a, edge));
        }
    }

    let mut bridges = vec![false; mol.bond_count()];
    let mut disc = vec![u32::MAX; n];
    let mut low = vec![u32::MAX; n];
    let mut timer = 0u32;

    for root in 0..n {
        if disc[root] != u32::MAX {
            continue;
        }
        disc[root] = timer;
        low[root] = timer;
        timer += 1;
        let mut stack: Vec<(usize, Option<EdgeIndex>, usize)> = vec![(root, None, 0)];

        while let Some(frame) = stack.last_mut() {
            let (v, parent_edge, pos) = *frame;
            if pos < adj[v].len() {
                frame.2 += 1;
                let (w, e) = adj[v][pos];
                if Some(e) == parent_edge {
                    continue;
                }
                let w = w.index();
                if disc[w] == u32::MAX {
                    disc[w] = timer;
                    low[w] = timer;
                    timer += 1;
                    stack.push((w, Some(e), 0));
                } else {
                    low[v] = low[v].min(disc[w]);
                }
            } else {
                stack.pop();
                if let (Some(pe), Some(&(u, _, _))) = (parent_edge, stack.last()) {
                    low[u] = low[u].min(low[v]);
                    if low[v] > disc[u] {
                        bridges[pe.index()] = true;
                    }
                }
            }
        }
    }
    bridges
}
