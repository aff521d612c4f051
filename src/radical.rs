//! Radical electron counting.
//!
//! A radical is an atom with unpaired electrons; a methyl radical `[CH3]`
//! has one unpaired electron on carbon. The count is inferred from the
//! difference between the atom's valence shell capacity and its actual
//! bonding plus lone-pair electrons. The typer only reads single electrons
//! stored on the molecule, so callers that start from bare connectivity can
//! use [`assign_single_electrons`] to populate them first.

use petgraph::graph::NodeIndex;

use crate::element::{atomic_number, default_valences, outer_shell_electrons};
use crate::mol::Mol;
use crate::traits::{TypeableAtom, TypeableBond};

/// Count unpaired (radical) electrons on a specific atom.
///
/// Returns 0 for atoms in a normal bonding state, for pseudo atoms and for
/// unknown symbols. Returns 1 for monoradicals (e.g. `[CH3]`), 2 for
/// diradicals (e.g. `[CH2]`), etc.
pub fn num_radical_electrons<A, B>(mol: &Mol<A, B>, idx: NodeIndex) -> u8
where
    A: TypeableAtom,
    B: TypeableBond,
{
    let atom = mol.atom(idx);
    if atom.is_pseudo() {
        return 0;
    }
    let atomic_num = match atomic_number(atom.symbol()) {
        Some(n) => n,
        None => return 0,
    };
    let hcount = atom.hydrogen_count().unwrap_or(0) as i16;
    let charge = atom.formal_charge().unwrap_or(0) as i16;
    let n_outer = outer_shell_electrons(atomic_num) as i16;

    let valences = default_valences(atomic_num);
    if valences.is_empty() {
        if mol.bonds_of(idx).next().is_some() {
            return 0;
        }
        let n_valence = n_outer - charge;
        if n_valence < 0 {
            return 0;
        }
        return (n_valence % 2) as u8;
    }

    let total_valence = mol.bond_order_sum(idx) as i16 + hcount;
    let base_count: i16 = if atomic_num <= 2 { 2 } else { 8 };

    let mut num_radicals = base_count - n_outer - total_valence + charge;
    if num_radicals < 0 {
        num_radicals = 0;
        if valences.len() > 1 {
            for &val in valences {
                let r = val as i16 - total_valence + charge;
                if r >= 0 {
                    num_radicals = r;
                    break;
                }
            }
        }
    }

    let num_radicals2 = n_outer - total_valence - charge;
    if num_radicals2 >= 0 && num_radicals2 < num_radicals {
        num_radicals = num_radicals2;
    }

    num_radicals.max(0) as u8
}

/// Replace the single electrons stored on `mol` with the perceived ones.
///
/// Atoms with an unset hydrogen count are skipped: without it the valence
/// deficit cannot be told apart from missing hydrogens.
pub fn assign_single_electrons<A, B>(mol: &mut Mol<A, B>)
where
    A: TypeableAtom,
    B: TypeableBond,
{
    let counts: Vec<(NodeIndex, u8)> = mol
        .atoms()
        .filter(|&idx| mol.atom(idx).hydrogen_count().is_some())
        .map(|idx| (idx, num_radical_electrons(mol, idx)))
        .collect();
    mol.clear_single_electrons();
    for (idx, n) in counts {
        for _ in 0..n {
            mol.add_single_electron(idx);
        }
    }
}
