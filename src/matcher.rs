//! Atom-type matching entry points.

use std::sync::Arc;

use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};

use crate::adjacency::BondMap;
use crate::dictionary::{AtomTypeDefinition, AtomTypeDictionary};
use crate::error::DictionaryError;
use crate::mol::Mol;
use crate::rings::RingSearch;
use crate::rules::{self, AtomEnv};
use crate::traits::{TypeableAtom, TypeableBond};

/// How implicit hydrogens take part in the neighbour-count check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Explicit bonds plus implicit hydrogens must fit under the declared
    /// neighbour count.
    #[default]
    ImplicitHydrogens,
    /// Hydrogens are all explicit: the bond count must equal the declared
    /// neighbour count.
    RequireExplicitHydrogens,
}

/// Assigns atom types from a reference dictionary.
///
/// Matching never mutates the molecule and never fails: an atom no rule can
/// place receives the dictionary's unmatched type `X`.
///
/// ```
/// use chemtype::{Atom, AtomTypeMatcher, Bond, MatchMode, Mol};
///
/// let mut mol = Mol::<Atom, Bond>::new();
/// let c = mol.add_atom(Atom::new("C").with_hydrogens(4));
/// let matcher = AtomTypeMatcher::embedded(MatchMode::default()).unwrap();
/// assert_eq!(matcher.find_matching_atom_type(&mol, c).id(), "C.sp3");
/// ```
#[derive(Debug, Clone)]
pub struct AtomTypeMatcher {
    dictionary: Arc<AtomTypeDictionary>,
    mode: MatchMode,
}

impl AtomTypeMatcher {
    pub fn new(dictionary: Arc<AtomTypeDictionary>, mode: MatchMode) -> Self {
        AtomTypeMatcher { dictionary, mode }
    }

    /// Matcher over the dictionary shipped with the crate.
    pub fn embedded(mode: MatchMode) -> Result<Self, DictionaryError> {
        Ok(Self::new(Arc::new(AtomTypeDictionary::embedded()?), mode))
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn dictionary(&self) -> &AtomTypeDictionary {
        &self.dictionary
    }

    /// Type a single atom, scanning its bonds and building ring membership
    /// only if a rule asks for it.
    pub fn find_matching_atom_type<A, B>(&self, mol: &Mol<A, B>, atom: NodeIndex) -> &AtomTypeDefinition
    where
        A: TypeableAtom,
        B: TypeableBond,
    {
        self.find_matching_atom_type_with(mol, atom, None, None)
    }

    /// Type a single atom with precomputed ring membership and incident
    /// bonds. Either may be omitted; the result is the same.
    pub fn find_matching_atom_type_with<A, B>(
        &self,
        mol: &Mol<A, B>,
        atom: NodeIndex,
        rings: Option<&RingSearch>,
        bond_map: Option<&BondMap>,
    ) -> &AtomTypeDefinition
    where
        A: TypeableAtom,
        B: TypeableBond,
    {
        let a = mol.atom(atom);
        if a.is_pseudo() {
            return self.dictionary.unmatched();
        }
        let env = AtomEnv::new(mol, atom, rings, bond_map, &self.dictionary, self.mode);
        let def = rules::perceive(&env)
            .and_then(|id| self.dictionary.lookup(id))
            .unwrap_or_else(|| self.dictionary.unmatched());
        tracing::debug!(atom = atom.index(), symbol = a.symbol(), atom_type = def.id(), "typed atom");
        def
    }

    /// Type every atom, positionally aligned with `mol.atoms()`.
    pub fn find_matching_atom_types<A, B>(&self, mol: &Mol<A, B>) -> Vec<&AtomTypeDefinition>
    where
        A: TypeableAtom,
        B: TypeableBond,
    {
        let bond_map = BondMap::new(mol);
        let rings = RingSearch::new(mol);
        mol.atoms()
            .map(|idx| self.find_matching_atom_type_with(mol, idx, Some(&rings), Some(&bond_map)))
            .collect()
    }
}
