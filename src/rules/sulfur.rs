use crate::bond::BondOrder;
use crate::hybridization::Hybridization;
use crate::traits::{TypeableAtom, TypeableBond};

use super::AtomEnv;

pub(super) fn perceive<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    let degree = env.degree();
    let charge = env.charge();
    if env.hybridization() == Some(Hybridization::SP2) && charge == 1 {
        return if degree == 3 {
            env.accept("S.inyl.charged")
        } else {
            env.accept("S.plus")
        };
    }
    match (charge, degree) {
        (0, _) => neutral(env),
        (-1, 0..=1) => env.accept("S.minus"),
        (1, 2) => env.accept("S.plus"),
        (1, 3) => env.accept("S.inyl.charged"),
        (2, 4) => env.accept("S.onyl.charged"),
        (-2, 0) => env.accept("S.2minus"),
        _ => None,
    }
}

fn neutral<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    let doubles = env.double_bond_count();
    match env.degree() {
        0 => env.accept("S.3"),
        1 if doubles == 1 => env.accept("S.2"),
        1 => env.accept("S.3"),
        2 => {
            if env.is_ring_atom() && env.both_neighbors_sp2() {
                if doubles == 2 {
                    env.accept("S.inyl.2")
                } else {
                    env.accept("S.planar3")
                }
            } else if env.double_bonds_to("O") == 2 {
                env.accept("S.oxide")
            } else if doubles == 2 {
                env.accept("S.inyl.2")
            } else if doubles <= 1 {
                env.accept("S.3")
            } else {
                None
            }
        }
        3 => match doubles {
            0 => env.accept("S.anyl"),
            1 => env.accept("S.inyl"),
            3 => env.accept("S.trioxide"),
            _ => None,
        },
        4 => {
            if env.double_bonds_to("O") + env.double_bonds_to("N") == 2 {
                env.accept("S.onyl")
            } else if doubles == 1 {
                env.accept("S.sp3d1")
            } else if doubles == 0 {
                env.accept("S.sp3.4")
            } else {
                None
            }
        }
        5 => match env.max_bond_order() {
            BondOrder::Double => env.accept("S.sp3d1"),
            BondOrder::Single => env.accept("S.octahedral"),
            _ => None,
        },
        6 if env.max_bond_order() == BondOrder::Single => env.accept("S.octahedral"),
        _ => None,
    }
}
