use crate::bond::BondOrder;
use crate::traits::{TypeableAtom, TypeableBond};

use super::AtomEnv;

/// Halogens, matched by name once the dispatch table has no entry.
pub(super) fn perceive_named<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match env.symbol() {
        "Cl" => chlorine(env),
        "Br" => bromine(env),
        "F" => fluorine(env),
        "I" => iodine(env),
        _ => None,
    }
}

fn halonium<A, B>(env: &AtomEnv<'_, A, B>, sp2: &'static str, sp3: &'static str) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match env.max_bond_order() {
        BondOrder::Double => env.accept(sp2),
        BondOrder::Single => env.accept(sp3),
        _ => None,
    }
}

fn chlorine<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    let degree = env.degree();
    match env.charge() {
        0 if env.max_bond_order() == BondOrder::Double => match degree {
            2 => env.accept("Cl.2"),
            3 => env.accept("Cl.chlorate"),
            4 => env.accept("Cl.perchlorate"),
            _ => None,
        },
        0 if degree <= 1 => env.accept("Cl"),
        -1 => env.accept("Cl.minus"),
        1 => halonium(env, "Cl.plus.sp2", "Cl.plus.sp3"),
        3 if degree == 4 => env.accept("Cl.perchlorate.charged"),
        _ => None,
    }
}

fn bromine<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (env.charge(), env.degree()) {
        (-1, _) => env.accept("Br.minus"),
        (1, _) => halonium(env, "Br.plus.sp2", "Br.plus.sp3"),
        (0, 0..=1) => env.accept("Br"),
        (0, 3) => env.accept("Br.3"),
        _ => None,
    }
}

fn fluorine<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (env.charge(), env.degree()) {
        (-1, _) => env.accept("F.minus"),
        (1, _) => halonium(env, "F.plus.sp2", "F.plus.sp3"),
        (0, 0..=1) => env.accept("F"),
        _ => None,
    }
}

fn iodine<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    let degree = env.degree();
    match env.charge() {
        -1 if degree == 0 => env.accept("I.minus"),
        -1 => env.accept("I.minus.5"),
        1 => halonium(env, "I.plus.sp2", "I.plus.sp3"),
        0 => match degree {
            3 if env.double_bond_count() == 2 => env.accept("I.5"),
            3 => env.accept("I.sp3d2.3"),
            2 if env.max_bond_order() == BondOrder::Double => env.accept("I.3"),
            0 | 1 => env.accept("I"),
            _ => None,
        },
        _ => None,
    }
}
