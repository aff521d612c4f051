//! The view of one atom that every perception rule works from.

use std::borrow::Cow;

use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::adjacency::BondMap;
use crate::bond::BondOrder;
use crate::dictionary::AtomTypeDictionary;
use crate::hybridization::Hybridization;
use crate::matcher::MatchMode;
use crate::mol::Mol;
use crate::rings::{RingOracle, RingSearch};
use crate::traits::{TypeableAtom, TypeableBond};
use crate::validator;

/// An atom together with its incident bonds, ring membership and the
/// dictionary its candidate types are validated against.
pub struct AtomEnv<'a, A, B> {
    mol: &'a Mol<A, B>,
    idx: NodeIndex,
    bonds: Cow<'a, [EdgeIndex]>,
    bond_map: Option<&'a BondMap>,
    rings: RingOracle<'a>,
    dictionary: &'a AtomTypeDictionary,
    mode: MatchMode,
}

impl<'a, A, B> AtomEnv<'a, A, B>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    pub(crate) fn new(
        mol: &'a Mol<A, B>,
        idx: NodeIndex,
        rings: Option<&'a RingSearch>,
        bond_map: Option<&'a BondMap>,
        dictionary: &'a AtomTypeDictionary,
        mode: MatchMode,
    ) -> Self {
        let bonds = match bond_map {
            Some(map) => Cow::Borrowed(map.bonds(idx)),
            None => Cow::Owned(mol.bonds_of(idx).collect()),
        };
        AtomEnv {
            mol,
            idx,
            bonds,
            bond_map,
            rings: RingOracle::new(rings),
            dictionary,
            mode,
        }
    }

    /// Validate candidate `id`, yielding it back when accepted.
    ///
    /// An identifier the dictionary does not define counts as rejected.
    pub fn accept(&self, id: &'static str) -> Option<&'static str> {
        let Some(def) = self.dictionary.lookup(id) else {
            tracing::warn!(candidate = id, "atom type not in dictionary");
            return None;
        };
        match validator::check(self.mol, self.idx, &self.bonds, def, self.mode) {
            Ok(()) => Some(id),
            Err(rejection) => {
                tracing::trace!(atom = self.idx.index(), candidate = id, %rejection, "rejected");
                None
            }
        }
    }

    /// First candidate, in order, that the validator accepts.
    pub fn first_accepted(&self, ids: &[&'static str]) -> Option<&'static str> {
        ids.iter().find_map(|&id| self.accept(id))
    }

    pub fn mol(&self) -> &'a Mol<A, B> {
        self.mol
    }

    pub fn index(&self) -> NodeIndex {
        self.idx
    }

    pub fn atom(&self) -> &'a A {
        self.mol.atom(self.idx)
    }

    pub fn symbol(&self) -> &'a str {
        self.atom().symbol()
    }

    /// Formal charge, unset read as zero.
    pub fn charge(&self) -> i8 {
        self.atom().formal_charge().unwrap_or(0)
    }

    pub fn is_charged(&self) -> bool {
        self.charge() != 0
    }

    pub fn hydrogen_count(&self) -> Option<u8> {
        self.atom().hydrogen_count()
    }

    pub fn hybridization(&self) -> Option<Hybridization> {
        self.atom().hybridization()
    }

    pub fn is_aromatic(&self) -> bool {
        self.atom().is_aromatic()
    }

    pub fn is_radical(&self) -> bool {
        self.mol.has_single_electron(self.idx)
    }

    pub fn bonds(&self) -> &[EdgeIndex] {
        &self.bonds
    }

    /// Number of explicit incident bonds.
    pub fn degree(&self) -> usize {
        self.bonds.len()
    }

    /// Incident bonds that do not lead to an explicit hydrogen.
    pub fn heavy_degree(&self) -> usize {
        self.degree() - self.explicit_hydrogen_count()
    }

    /// Highest resolved incident bond order, `Single` when every bond is
    /// unset or there are none.
    pub fn max_bond_order(&self) -> BondOrder {
        self.bonds
            .iter()
            .map(|&ei| self.mol.bond(ei).bond_order())
            .filter(|o| !o.is_unset())
            .max()
            .unwrap_or(BondOrder::Single)
    }

    pub fn double_bond_count(&self) -> usize {
        self.count_bonds(|b| b.bond_order() == BondOrder::Double)
    }

    /// Double bonds leading to an atom with the given symbol.
    pub fn double_bonds_to(&self, symbol: &str) -> usize {
        self.bonds
            .iter()
            .filter(|&&ei| self.mol.bond(ei).bond_order() == BondOrder::Double)
            .filter(|&&ei| self.neighbor_symbol(ei) == Some(symbol))
            .count()
    }

    pub fn has_aromatic_bond(&self) -> bool {
        self.count_bonds(|b| b.is_aromatic()) > 0
    }

    pub fn has_single_or_double_bond(&self) -> bool {
        self.count_bonds(|b| b.is_single_or_double()) > 0
    }

    pub fn explicit_hydrogen_count(&self) -> usize {
        self.bonds
            .iter()
            .filter(|&&ei| self.neighbor_symbol(ei) == Some("H"))
            .count()
    }

    pub fn is_ring_atom(&self) -> bool {
        self.rings.is_ring_atom(self.mol, self.idx)
    }

    /// Whether at least two neighbours look sp2: reached through a double,
    /// aromatic or single-or-double bond, declared sp2, or themselves
    /// carrying such a bond.
    pub fn both_neighbors_sp2(&self) -> bool {
        let sp2_like = |ei: EdgeIndex| {
            let b = self.mol.bond(ei);
            b.bond_order() == BondOrder::Double || b.is_aromatic() || b.is_single_or_double()
        };
        let count = self
            .bonds
            .iter()
            .filter(|&&ei| {
                if sp2_like(ei) {
                    return true;
                }
                let Some(nb) = self.mol.other_atom(ei, self.idx) else {
                    return false;
                };
                self.mol.atom(nb).hybridization() == Some(Hybridization::SP2)
                    || self.bonds_of(nb).iter().any(|&e| sp2_like(e))
            })
            .count();
        count >= 2
    }

    /// Bonded to a carbon that carries exactly one double bond to oxygen.
    pub fn is_amide(&self) -> bool {
        self.is_acyl_neighbor("O")
    }

    /// Bonded to a carbon that carries exactly one double bond to sulphur.
    pub fn is_thioamide(&self) -> bool {
        self.is_acyl_neighbor("S")
    }

    /// Terminal oxygen on a carboxylate carbon: the carbon has one doubly
    /// bonded oxygen and one singly bonded oxygen carrying charge -1.
    pub fn is_carboxylate(&self) -> bool {
        if self.degree() != 1 {
            return false;
        }
        let Some(c) = self.mol.other_atom(self.bonds[0], self.idx) else {
            return false;
        };
        if self.mol.atom(c).symbol() != "C" {
            return false;
        }
        let c_bonds = self.bonds_of(c);
        if c_bonds.len() < 3 {
            return false;
        }
        let mut double_o = 0;
        let mut minus_o = 0;
        for &ei in c_bonds.iter() {
            let Some(nb) = self.mol.other_atom(ei, c) else {
                continue;
            };
            let nb_atom = self.mol.atom(nb);
            if nb_atom.symbol() != "O" {
                continue;
            }
            match self.mol.bond(ei).bond_order() {
                BondOrder::Double => double_o += 1,
                BondOrder::Single if nb_atom.formal_charge() == Some(-1) => minus_o += 1,
                _ => {}
            }
        }
        double_o == 1 && minus_o == 1
    }

    /// Incident bonds of any atom, served from the bond map when one was
    /// supplied.
    pub fn bonds_of(&self, atom: NodeIndex) -> Cow<'a, [EdgeIndex]> {
        match self.bond_map {
            Some(map) => Cow::Borrowed(map.bonds(atom)),
            None => Cow::Owned(self.mol.bonds_of(atom).collect()),
        }
    }

    fn neighbor_symbol(&self, bond: EdgeIndex) -> Option<&'a str> {
        self.mol
            .other_atom(bond, self.idx)
            .map(|nb| self.mol.atom(nb).symbol())
    }

    fn count_bonds(&self, pred: impl Fn(&B) -> bool) -> usize {
        self.bonds
            .iter()
            .filter(|&&ei| pred(self.mol.bond(ei)))
            .count()
    }

    fn is_acyl_neighbor(&self, hetero: &str) -> bool {
        self.bonds.iter().any(|&ei| {
            let Some(c) = self.mol.other_atom(ei, self.idx) else {
                return false;
            };
            if self.mol.atom(c).symbol() != "C" {
                return false;
            }
            let doubles = self
                .bonds_of(c)
                .iter()
                .filter(|&&e| self.mol.bond(e).bond_order() == BondOrder::Double)
                .filter_map(|&e| self.mol.other_atom(e, c))
                .filter(|&nb| self.mol.atom(nb).symbol() == hetero)
                .count();
            doubles == 1
        })
    }
}
