//! Type acceptance: the single gate every candidate type passes through.

use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::bond::BondOrder;
use crate::dictionary::AtomTypeDefinition;
use crate::error::Rejection;
use crate::matcher::MatchMode;
use crate::mol::{bond_weight, Mol};
use crate::traits::{TypeableAtom, TypeableBond};

/// Check `def` against the atom at `atom`, whose incident bonds are `bonds`.
///
/// The checks run in a fixed order and the first failure is reported:
/// neighbour count, bond-order ceiling, valence ceiling, formal charge and
/// finally the unpaired-electron count. An unset formal charge or implicit
/// hydrogen count is read as zero.
pub fn check<A, B>(
    mol: &Mol<A, B>,
    atom: NodeIndex,
    bonds: &[EdgeIndex],
    def: &AtomTypeDefinition,
    mode: MatchMode,
) -> Result<(), Rejection>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    let a = mol.atom(atom);
    let implicit_h = a.hydrogen_count().unwrap_or(0) as u32;
    let explicit = bonds.len() as u32;

    match mode {
        MatchMode::RequireExplicitHydrogens => {
            if explicit != def.neighbor_count() as u32 {
                return Err(Rejection::ExplicitNeighborCount {
                    actual: explicit,
                    required: def.neighbor_count(),
                });
            }
        }
        MatchMode::ImplicitHydrogens => {
            if explicit + implicit_h > def.neighbor_count() as u32 {
                return Err(Rejection::NeighborCount {
                    actual: explicit + implicit_h,
                    ceiling: def.neighbor_count(),
                });
            }
        }
    }

    let max = def.max_bond_order();
    for &ei in bonds {
        let bond = mol.bond(ei);
        let order = bond.bond_order();
        if !order.is_unset() {
            if order > max {
                return Err(Rejection::BondOrder { actual: order, max });
            }
        } else if bond.is_single_or_double() || bond.is_aromatic() {
            if !matches!(max, BondOrder::Single | BondOrder::Double) {
                return Err(Rejection::UnresolvedBond { max });
            }
        } else {
            return Err(Rejection::UnresolvedBond { max });
        }
    }

    let valence: u32 = bonds.iter().map(|&ei| bond_weight(mol.bond(ei))).sum::<u32>() + implicit_h;
    if valence > def.valency() as u32 {
        return Err(Rejection::Valence {
            actual: valence,
            ceiling: def.valency(),
        });
    }

    let charge = a.formal_charge().unwrap_or(0);
    if charge != def.formal_charge() {
        return Err(Rejection::Charge {
            actual: charge,
            declared: def.formal_charge(),
        });
    }

    if let Some(declared) = def.single_electrons() {
        let actual = mol.single_electron_count(atom);
        if actual != declared as usize {
            return Err(Rejection::SingleElectrons { actual, declared });
        }
    }

    Ok(())
}

/// Boolean form of [`check`].
pub fn is_acceptable<A, B>(
    mol: &Mol<A, B>,
    atom: NodeIndex,
    bonds: &[EdgeIndex],
    def: &AtomTypeDefinition,
    mode: MatchMode,
) -> bool
where
    A: TypeableAtom,
    B: TypeableBond,
{
    check(mol, atom, bonds, def, mode).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::Atom;
    use crate::bond::Bond;
    use crate::dictionary::AtomTypeDictionary;

    fn dict() -> AtomTypeDictionary {
        AtomTypeDictionary::embedded().unwrap()
    }

    fn bonds_of(mol: &Mol<Atom, Bond>, atom: NodeIndex) -> Vec<EdgeIndex> {
        mol.bonds_of(atom).collect()
    }

    #[test]
    fn methane_fits_sp3() {
        let dict = dict();
        let mut mol: Mol<Atom, Bond> = Mol::new();
        let c = mol.add_atom(Atom::new("C").with_hydrogens(4));
        let def = dict.get("C.sp3").unwrap();
        assert_eq!(check(&mol, c, &[], def, MatchMode::ImplicitHydrogens), Ok(()));
    }

    #[test]
    fn too_many_neighbours() {
        let dict = dict();
        let mut mol: Mol<Atom, Bond> = Mol::new();
        let c = mol.add_atom(Atom::new("C").with_hydrogens(5));
        let def = dict.get("C.sp3").unwrap();
        assert_eq!(
            check(&mol, c, &[], def, MatchMode::ImplicitHydrogens),
            Err(Rejection::NeighborCount { actual: 5, ceiling: 4 })
        );
    }

    #[test]
    fn strict_mode_requires_exact_count() {
        let dict = dict();
        let mut mol: Mol<Atom, Bond> = Mol::new();
        let c = mol.add_atom(Atom::new("C").with_hydrogens(4));
        let def = dict.get("C.sp3").unwrap();
        assert_eq!(
            check(&mol, c, &[], def, MatchMode::RequireExplicitHydrogens),
            Err(Rejection::ExplicitNeighborCount { actual: 0, required: 4 })
        );

        let mut mol = Mol::new();
        let c = mol.add_atom(Atom::new("C").with_hydrogens(0));
        for _ in 0..4 {
            let h = mol.add_atom(Atom::new("H").with_hydrogens(0));
            mol.add_bond(c, h, Bond::single());
        }
        let bonds = bonds_of(&mol, c);
        assert!(is_acceptable(&mol, c, &bonds, def, MatchMode::RequireExplicitHydrogens));
    }

    #[test]
    fn bond_order_ceiling() {
        let dict = dict();
        let mut mol = Mol::new();
        let c = mol.add_atom(Atom::new("C").with_hydrogens(2));
        let o = mol.add_atom(Atom::new("O"));
        mol.add_bond(c, o, Bond::double());
        let bonds = bonds_of(&mol, c);
        assert_eq!(
            check(&mol, c, &bonds, dict.get("C.sp3").unwrap(), MatchMode::ImplicitHydrogens),
            Err(Rejection::BondOrder {
                actual: BondOrder::Double,
                max: BondOrder::Single
            })
        );
        assert!(is_acceptable(&mol, c, &bonds, dict.get("C.sp2").unwrap(), MatchMode::ImplicitHydrogens));
    }

    #[test]
    fn unresolved_bond_needs_single_or_double_ceiling() {
        let dict = dict();
        let mut mol = Mol::new();
        let c = mol.add_atom(Atom::new("C").with_hydrogens(1));
        let n = mol.add_atom(Atom::new("C"));
        mol.add_bond(c, n, Bond::aromatic());
        let bonds = bonds_of(&mol, c);
        assert!(is_acceptable(&mol, c, &bonds, dict.get("C.sp2").unwrap(), MatchMode::ImplicitHydrogens));
        assert_eq!(
            check(&mol, c, &bonds, dict.get("C.sp").unwrap(), MatchMode::ImplicitHydrogens),
            Err(Rejection::UnresolvedBond { max: BondOrder::Triple })
        );
    }

    #[test]
    fn bare_unset_bond_is_rejected() {
        let dict = dict();
        let mut mol = Mol::new();
        let c = mol.add_atom(Atom::new("C"));
        let o = mol.add_atom(Atom::new("C"));
        mol.add_bond(c, o, Bond::new(BondOrder::Unset));
        let bonds = bonds_of(&mol, c);
        assert_eq!(
            check(&mol, c, &bonds, dict.get("C.sp3").unwrap(), MatchMode::ImplicitHydrogens),
            Err(Rejection::UnresolvedBond { max: BondOrder::Single })
        );
    }

    #[test]
    fn valence_ceiling_counts_hydrogens() {
        let dict = dict();
        let mut mol = Mol::new();
        let o = mol.add_atom(Atom::new("O").with_hydrogens(1));
        let c = mol.add_atom(Atom::new("C"));
        mol.add_bond(o, c, Bond::double());
        let bonds = bonds_of(&mol, o);
        // one bond plus one hydrogen fits two neighbours, but 2 + 1 > 2
        assert_eq!(
            check(&mol, o, &bonds, dict.get("O.sp3").unwrap(), MatchMode::ImplicitHydrogens),
            Err(Rejection::BondOrder {
                actual: BondOrder::Double,
                max: BondOrder::Single
            })
        );
        assert_eq!(
            check(&mol, o, &bonds, dict.get("O.sp2").unwrap(), MatchMode::ImplicitHydrogens),
            Err(Rejection::NeighborCount { actual: 2, ceiling: 1 })
        );
        let mut wide = Mol::new();
        let c = wide.add_atom(Atom::new("C").with_hydrogens(1));
        for _ in 0..2 {
            let o = wide.add_atom(Atom::new("O"));
            wide.add_bond(c, o, Bond::double());
        }
        let bonds = bonds_of(&wide, c);
        assert_eq!(
            check(&wide, c, &bonds, dict.get("C.allene").unwrap(), MatchMode::ImplicitHydrogens),
            Err(Rejection::NeighborCount { actual: 3, ceiling: 2 })
        );
        assert_eq!(
            check(&wide, c, &bonds, dict.get("C.sp2").unwrap(), MatchMode::ImplicitHydrogens),
            Err(Rejection::Valence { actual: 5, ceiling: 4 })
        );
    }

    #[test]
    fn charge_must_match_and_unset_reads_as_zero() {
        let dict = dict();
        let mut mol: Mol<Atom, Bond> = Mol::new();
        let n = mol.add_atom(Atom::new("N").with_hydrogens(4).with_charge(1));
        let bare = mol.add_atom(Atom::new("C"));
        assert_eq!(
            check(&mol, n, &[], dict.get("N.sp3").unwrap(), MatchMode::ImplicitHydrogens),
            Err(Rejection::NeighborCount { actual: 4, ceiling: 3 })
        );
        assert!(is_acceptable(&mol, n, &[], dict.get("N.plus").unwrap(), MatchMode::ImplicitHydrogens));
        assert!(is_acceptable(&mol, bare, &[], dict.get("C.sp3").unwrap(), MatchMode::ImplicitHydrogens));
        assert_eq!(
            check(&mol, bare, &[], dict.get("C.plus.planar").unwrap(), MatchMode::ImplicitHydrogens),
            Err(Rejection::Charge { actual: 0, declared: 1 })
        );
    }

    #[test]
    fn single_electrons_must_match() {
        let dict = dict();
        let mut mol: Mol<Atom, Bond> = Mol::new();
        let c = mol.add_atom(Atom::new("C").with_hydrogens(3));
        let def = dict.get("C.radical.planar").unwrap();
        assert_eq!(
            check(&mol, c, &[], def, MatchMode::ImplicitHydrogens),
            Err(Rejection::SingleElectrons { actual: 0, declared: 1 })
        );
        mol.add_single_electron(c);
        assert!(is_acceptable(&mol, c, &[], def, MatchMode::ImplicitHydrogens));
    }
}
