use proptest::prelude::*;

use chemtype::error::Rejection;
use chemtype::validator;
use chemtype::{
    Atom, AtomTypeDictionary, AtomTypeMatcher, Bond, BondOrder, Hybridization, MatchMode, Mol,
};

const SYMBOLS: &[&str] = &[
    "C", "C", "C", "N", "O", "S", "P", "H", "F", "Cl", "Br", "I", "B", "Si", "Se", "Fe", "Co",
    "Na", "Mg", "Xe", "Sn", "Qq",
];

const HYBRIDIZATIONS: &[Hybridization] = &[
    Hybridization::S,
    Hybridization::SP,
    Hybridization::SP2,
    Hybridization::SP3,
    Hybridization::Planar3,
    Hybridization::SP3D,
    Hybridization::SP3D2,
    Hybridization::Other,
];

prop_compose! {
    fn atom_strategy()(
        symbol in prop::sample::select(SYMBOLS),
        charge in prop::option::of(-2i8..=2),
        hydrogens in prop::option::of(0u8..=4),
        hybridization in prop::option::of(prop::sample::select(HYBRIDIZATIONS)),
        aromatic in any::<bool>(),
        pseudo in prop::bool::weighted(0.05),
    ) -> Atom {
        Atom {
            symbol: symbol.to_string(),
            formal_charge: charge,
            hydrogen_count: hydrogens,
            hybridization,
            is_aromatic: aromatic,
            is_pseudo: pseudo,
        }
    }
}

fn bond_strategy() -> impl Strategy<Value = Bond> {
    prop_oneof![
        4 => Just(Bond::single()),
        2 => Just(Bond::double()),
        1 => Just(Bond::triple()),
        1 => Just(Bond::aromatic()),
        1 => Just(Bond::new(BondOrder::Unset)),
    ]
}

prop_compose! {
    fn mol_strategy()(atoms in prop::collection::vec(atom_strategy(), 1..10))(
        bonds in prop::collection::vec(
            (0..atoms.len(), 0..atoms.len(), bond_strategy()),
            0..atoms.len() * 2,
        ),
        radicals in prop::collection::vec(0..atoms.len(), 0..2),
        atoms in Just(atoms),
    ) -> Mol<Atom, Bond> {
        let mut mol = Mol::new();
        let idx: Vec<_> = atoms.into_iter().map(|a| mol.add_atom(a)).collect();
        for (a, b, bond) in bonds {
            if a != b && mol.bond_between(idx[a], idx[b]).is_none() {
                mol.add_bond(idx[a], idx[b], bond);
            }
        }
        for r in radicals {
            mol.add_single_electron(idx[r]);
        }
        mol
    }
}

fn ids(matcher: &AtomTypeMatcher, mol: &Mol<Atom, Bond>) -> Vec<String> {
    matcher
        .find_matching_atom_types(mol)
        .iter()
        .map(|d| d.id().to_string())
        .collect()
}

proptest! {
    #[test]
    fn typing_is_idempotent(mol in mol_strategy()) {
        let matcher = AtomTypeMatcher::embedded(MatchMode::ImplicitHydrogens).unwrap();
        let snapshot = mol.clone();
        let first = ids(&matcher, &mol);
        let second = ids(&matcher, &mol);
        prop_assert_eq!(first, second);
        prop_assert_eq!(mol, snapshot);
    }

    #[test]
    fn batch_equals_single(mol in mol_strategy(), strict in any::<bool>()) {
        let mode = if strict { MatchMode::RequireExplicitHydrogens } else { MatchMode::ImplicitHydrogens };
        let matcher = AtomTypeMatcher::embedded(mode).unwrap();
        let batch = ids(&matcher, &mol);
        let single: Vec<String> = mol
            .atoms()
            .map(|idx| matcher.find_matching_atom_type(&mol, idx).id().to_string())
            .collect();
        prop_assert_eq!(batch, single);
    }

    #[test]
    fn every_atom_gets_a_type(mol in mol_strategy()) {
        let matcher = AtomTypeMatcher::embedded(MatchMode::ImplicitHydrogens).unwrap();
        let types = matcher.find_matching_atom_types(&mol);
        prop_assert_eq!(types.len(), mol.atom_count());
        for (idx, def) in mol.atoms().zip(&types) {
            prop_assert!(matcher.dictionary().contains(def.id()));
            if mol.atom(idx).is_pseudo {
                prop_assert!(def.is_unmatched());
            }
        }
    }

    #[test]
    fn fewer_hydrogens_never_break_acceptance(mol in mol_strategy()) {
        let dict = AtomTypeDictionary::embedded().unwrap();
        for idx in mol.atoms() {
            let Some(h) = mol.atom(idx).hydrogen_count.filter(|&h| h > 0) else {
                continue;
            };
            let bonds: Vec<_> = mol.bonds_of(idx).collect();
            let mut lowered = mol.clone();
            lowered.atom_mut(idx).hydrogen_count = Some(h - 1);
            for def in dict.iter().filter(|d| !d.is_unmatched()) {
                if validator::is_acceptable(&mol, idx, &bonds, def, MatchMode::ImplicitHydrogens) {
                    let after = validator::check(&lowered, idx, &bonds, def, MatchMode::ImplicitHydrogens);
                    let breaks = matches!(
                        after,
                        Err(Rejection::NeighborCount { .. }) | Err(Rejection::Valence { .. })
                    );
                    prop_assert!(!breaks, "{} on atom {}", def.id(), idx.index());
                }
            }
        }
    }
}
