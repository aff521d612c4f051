//! Alkali and alkaline-earth metals and the heavier p-block elements.
//!
//! Most of these are keyed on formal charge and explicit bond count alone.

use crate::bond::BondOrder;
use crate::traits::{TypeableAtom, TypeableBond};

use super::AtomEnv;

pub(super) fn lithium<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (env.charge(), env.degree()) {
        (0, 1) => env.accept("Li"),
        (0, 0) => env.accept("Li.neutral"),
        (1, 0) => env.accept("Li.plus"),
        _ => None,
    }
}

pub(super) fn sodium<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (env.charge(), env.degree()) {
        (1, 0) => env.accept("Na.plus"),
        (0, 0) => env.accept("Na.neutral"),
        (0, 1) => env.accept("Na"),
        _ => None,
    }
}

pub(super) fn potassium<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (env.charge(), env.degree()) {
        (1, 0) => env.accept("K.plus"),
        (0, 0..=1) => env.accept("K.neutral"),
        _ => None,
    }
}

pub(super) fn rubidium<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (env.charge(), env.degree()) {
        (0, 0) => env.accept("Rb.neutral"),
        (1, _) => env.accept("Rb.plus"),
        _ => None,
    }
}

pub(super) fn beryllium<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (env.charge(), env.degree()) {
        (-2, 0..=4) if env.max_bond_order() == BondOrder::Single => env.accept("Be.2minus"),
        (0, 0) => env.accept("Be.neutral"),
        _ => None,
    }
}

pub(super) fn magnesium<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (env.charge(), env.degree()) {
        (0, 2) => env.accept("Mg.neutral.2"),
        (0, 1) => env.accept("Mg.neutral.1"),
        (0, _) => env.accept("Mg.neutral"),
        (2, _) => env.accept("Mg.2plus"),
        _ => None,
    }
}

pub(super) fn calcium<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (env.charge(), env.degree()) {
        (2, 0) => env.accept("Ca.2plus"),
        (0, 2) => env.accept("Ca.2"),
        (0, 1) => env.accept("Ca.1"),
        _ => None,
    }
}

pub(super) fn strontium<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match env.charge() {
        2 => env.accept("Sr.2plus"),
        _ => None,
    }
}

pub(super) fn barium<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (env.charge(), env.degree()) {
        (0, 0) => env.accept("Ba"),
        (2, _) => env.accept("Ba.2plus"),
        _ => None,
    }
}

pub(super) fn radium<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (env.charge(), env.degree()) {
        (0, 0) => env.accept("Ra.neutral"),
        _ => None,
    }
}

pub(super) fn boron<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (env.charge(), env.degree()) {
        (-1, 0..=4) if env.max_bond_order() == BondOrder::Single => env.accept("B.minus"),
        (3, 4) => env.accept("B.3plus"),
        (_, 0..=3) => env.accept("B"),
        _ => None,
    }
}

pub(super) fn aluminium<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (env.charge(), env.degree()) {
        (3, 0) => env.accept("Al.3plus"),
        (0, 3) => env.accept("Al"),
        (-3, 6) => env.accept("Al.3minus"),
        _ => None,
    }
}

pub(super) fn gallium<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (env.charge(), env.degree()) {
        (0, 3) => env.accept("Ga"),
        (0, 0) => env.accept("Ga.metallic"),
        (3, _) => env.accept("Ga.3plus"),
        _ => None,
    }
}

pub(super) fn indium<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (env.charge(), env.degree()) {
        (0, 3) => env.accept("In.3"),
        (3, 0) => env.accept("In.3plus"),
        (0, 1) => env.accept("In.1"),
        (0, 0) => env.accept("In"),
        _ => None,
    }
}

pub(super) fn thallium<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (env.charge(), env.degree()) {
        (1, 0) => env.accept("Tl.plus"),
        (0, 0) => env.accept("Tl"),
        (0, 1) => env.accept("Tl.1"),
        _ => None,
    }
}

pub(super) fn silicon<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (env.charge(), env.degree()) {
        (0, 0..=4) if env.max_bond_order() == BondOrder::Double => env.accept("Si.sp2"),
        (0, 0..=4) => env.accept("Si.sp3"),
        (-2, 6) => env.accept("Si.2minus.6"),
        _ => None,
    }
}

pub(super) fn germanium<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (env.charge(), env.degree()) {
        (0, 3) => env.accept("Ge.3"),
        (0, _) => env.accept("Ge"),
        _ => None,
    }
}

pub(super) fn lead<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (env.charge(), env.degree()) {
        (0, 0) => env.accept("Pb.neutral"),
        (2, 0) => env.accept("Pb.2plus"),
        (0, 1) => env.accept("Pb.1"),
        (0, 4) => env.accept("Pb.sp3"),
        _ => None,
    }
}

pub(super) fn arsenic<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (env.charge(), env.degree()) {
        (1, 0..=4) => env.accept("As.plus"),
        (0, 4) => env.accept("As.5"),
        (0, 2) => env.accept("As.2"),
        (0, _) => env.accept("As"),
        (3, 0) => env.accept("As.3plus"),
        (-1, _) => env.accept("As.minus"),
        _ => None,
    }
}

pub(super) fn antimony<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (env.charge(), env.degree()) {
        (0, 3) => env.accept("Sb.3"),
        (0, 4) => env.accept("Sb.4"),
        _ => None,
    }
}

pub(super) fn selenium<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    let doubles = env.double_bond_count();
    match (env.charge(), env.degree()) {
        (0, 0) if env.hydrogen_count() == Some(0) => env.accept("Se.2"),
        (0, 0) => env.accept("Se.3"),
        (0, 1) if doubles == 1 => env.accept("Se.1"),
        (0, 1) if doubles == 0 => env.accept("Se.3"),
        (0, 2) if doubles == 0 => env.accept("Se.3"),
        (0, 2) if doubles == 2 => env.accept("Se.sp2.2"),
        (0, 3) => env.accept("Se.sp3.3"),
        (0, 4) if doubles == 2 => env.accept("Se.sp3.4"),
        (0, 4) if doubles == 0 => env.accept("Se.sp3d1.4"),
        (0, 5) => env.accept("Se.5"),
        (4, 0) => env.accept("Se.4plus"),
        (1, 3) => env.accept("Se.plus.3"),
        (-2, 0) => env.accept("Se.2minus"),
        _ => None,
    }
}

pub(super) fn tellurium<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (env.charge(), env.degree()) {
        (0, 0..=2) => env.accept("Te.3"),
        (4, 0) => env.accept("Te.4plus"),
        _ => None,
    }
}
