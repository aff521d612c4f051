use crate::bond::BondOrder;
use crate::hybridization::Hybridization;
use crate::traits::{TypeableAtom, TypeableBond};

use super::AtomEnv;

pub(super) fn perceive_radical<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    let max = env.max_bond_order();
    if (1..=2).contains(&env.degree()) {
        return match (env.charge(), max) {
            (1, BondOrder::Double) => env.accept("N.plus.sp2.radical"),
            (1, BondOrder::Single) => env.accept("N.plus.sp3.radical"),
            (0, BondOrder::Single) => env.accept("N.sp3.radical"),
            (0, BondOrder::Double) => env.accept("N.sp2.radical"),
            _ => None,
        };
    }
    if env.charge() == 1 && max == BondOrder::Single {
        return env.accept("N.plus.sp3.radical");
    }
    None
}

pub(super) fn perceive<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    if let (Some(hybridization), false) = (env.hybridization(), env.is_charged()) {
        return declared(env, hybridization);
    }
    match env.charge() {
        0 => neutral(env),
        1 => cation(env),
        -1 => anion(env),
        _ => None,
    }
}

fn declared<A, B>(env: &AtomEnv<'_, A, B>, hybridization: Hybridization) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    let degree = env.degree();
    let max = env.max_bond_order();
    match hybridization {
        Hybridization::SP if degree > 1 => env.accept("N.sp1.2"),
        Hybridization::SP => env.accept("N.sp1"),
        Hybridization::SP2 => declared_sp2(env),
        Hybridization::SP3 => env.accept("N.sp3"),
        Hybridization::Planar3 => {
            if degree == 3 && max == BondOrder::Double && env.double_bonds_to("O") == 2 {
                if let Some(id) = env.accept("N.nitro") {
                    return Some(id);
                }
            }
            env.accept("N.planar3")
        }
        _ => None,
    }
}

fn declared_sp2<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    if env.is_amide() {
        if let Some(id) = env.accept("N.amide") {
            return Some(id);
        }
    } else if env.is_thioamide() {
        if let Some(id) = env.accept("N.thioamide") {
            return Some(id);
        }
    }
    let degree = env.degree();
    let max = env.max_bond_order();
    if degree == 4 && max == BondOrder::Double {
        if let Some(id) = env.accept("N.oxide") {
            return Some(id);
        }
    }
    if degree > 1 && env.both_neighbors_sp2() && env.is_ring_atom() {
        let candidate = match (degree, max) {
            (3, BondOrder::Double) => Some("N.sp2.3"),
            (3, _) => Some("N.planar3"),
            (2, BondOrder::Single) if env.hydrogen_count() == Some(1) => Some("N.planar3"),
            (2, _) => Some("N.sp2"),
            _ => None,
        };
        if let Some(id) = candidate.and_then(|id| env.accept(id)) {
            return Some(id);
        }
    }
    env.accept("N.sp2")
}

fn cation<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    let max = env.max_bond_order();
    if env.degree() == 0 || max == BondOrder::Single {
        if env.hybridization() == Some(Hybridization::SP2) {
            if let Some(id) = env.accept("N.plus.sp2") {
                return Some(id);
            }
        }
        return env.accept("N.plus");
    }
    match max {
        BondOrder::Double => match env.double_bond_count() {
            1 => env.accept("N.plus.sp2"),
            2 => env.accept("N.plus.sp1"),
            _ => None,
        },
        BondOrder::Triple if env.degree() == 2 => env.accept("N.plus.sp1"),
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
        BondOrder::Single => {
            if degree >= 2 && env.both_neighbors_sp2() && env.is_ring_atom() {
                if let Some(id) = env.accept("N.minus.planar3") {
                    return Some(id);
                }
            }
            if degree <= 2 {
                env.accept("N.minus.sp3")
            } else {
                None
            }
        }
        BondOrder::Double if degree <= 1 => env.accept("N.minus.sp2"),
        _ => None,
    }
}

fn neutral<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    let degree = env.degree();
    if degree > 3 {
        if degree == 4 && env.double_bond_count() == 1 {
            return env.accept("N.oxide");
        }
        return None;
    }
    if degree == 0 {
        return env.accept("N.sp3");
    }
    if env.has_single_or_double_bond() || env.has_aromatic_bond() {
        let hydrogens = env.hydrogen_count().unwrap_or(0) as usize;
        if degree + hydrogens == 3 {
            if let Some(id) = env.accept("N.planar3") {
                return Some(id);
            }
        }
        return env.accept("N.sp2");
    }
    match env.max_bond_order() {
        BondOrder::Single => {
            if matches!(env.heavy_degree(), 2 | 3)
                && env.is_ring_atom()
                && env.both_neighbors_sp2()
            {
                if let Some(id) = env.accept("N.planar3") {
                    return Some(id);
                }
            }
            if env.is_amide() {
                if let Some(id) = env.accept("N.amide") {
                    return Some(id);
                }
            } else if env.is_thioamide() {
                if let Some(id) = env.accept("N.thioamide") {
                    return Some(id);
                }
            }
            env.accept("N.sp3")
        }
        BondOrder::Double => {
            let doubles = env.double_bond_count();
            let candidate = match degree {
                3 if doubles == 2 && env.double_bonds_to("O") == 2 => Some("N.nitro"),
                3 if doubles == 1 => Some("N.sp2.3"),
                2 if doubles == 2 => Some("N.sp1.2"),
                _ => None,
            };
            if let Some(id) = candidate.and_then(|id| env.accept(id)) {
                return Some(id);
            }
            env.accept("N.sp2")
        }
        BondOrder::Triple => env.accept("N.sp1"),
        _ => None,
    }
}
