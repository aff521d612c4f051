use crate::bond::BondOrder;
use crate::hybridization::Hybridization;
use crate::traits::{TypeableAtom, TypeableBond};

use super::AtomEnv;

pub(super) fn perceive_radical<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    if env.degree() == 0 {
        return env.accept("C.radical.planar");
    }
    if env.degree() > 3 {
        return None;
    }
    match env.max_bond_order() {
        BondOrder::Single => env.accept("C.radical.planar"),
        BondOrder::Double => env.accept("C.radical.sp2"),
        BondOrder::Triple => env.accept("C.radical.sp1"),
        _ => None,
    }
}

pub(super) fn perceive<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    if let (Some(hybridization), false) = (env.hybridization(), env.is_charged()) {
        return match hybridization {
            Hybridization::SP2 => env.accept("C.sp2"),
            Hybridization::SP3 => env.accept("C.sp3"),
            Hybridization::SP if env.max_bond_order() == BondOrder::Triple => env.accept("C.sp"),
            Hybridization::SP => env.accept("C.allene"),
            _ => None,
        };
    }
    match env.charge() {
        0 => neutral(env),
        -1 => anion(env),
        1 => cation(env),
        _ => None,
    }
}

fn anion<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    let degree = env.degree();
    match env.max_bond_order() {
        BondOrder::Single if degree <= 3 => {
            if env.both_neighbors_sp2() && env.is_ring_atom() {
                if let Some(id) = env.accept("C.minus.planar") {
                    return Some(id);
                }
            }
            env.accept("C.minus.sp3")
        }
        BondOrder::Double if degree <= 3 => env.accept("C.minus.sp2"),
        BondOrder::Triple if degree <= 1 => env.accept("C.minus.sp1"),
        _ => None,
    }
}

fn cation<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match env.degree() {
        d if d > 3 => None,
        0 => env.accept("C.plus.sp2"),
        _ => match env.max_bond_order() {
            BondOrder::Triple => env.accept("C.plus.sp1"),
            BondOrder::Double => env.accept("C.plus.sp2"),
            BondOrder::Single => env.accept("C.plus.planar"),
            _ => None,
        },
    }
}

fn neutral<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    if env.degree() > 4 {
        return None;
    }
    match env.max_bond_order() {
        BondOrder::Single => {
            if env.is_aromatic() || env.has_aromatic_bond() || env.has_single_or_double_bond() {
                env.accept("C.sp2")
            } else {
                env.accept("C.sp3")
            }
        }
        BondOrder::Double if env.double_bond_count() == 2 => env.accept("C.allene"),
        BondOrder::Double => env.accept("C.sp2"),
        BondOrder::Triple => env.accept("C.sp"),
        _ => None,
    }
}
