//! Transition metals, lanthanides and actinides.
//!
//! These carry no hybridization model: a type is picked from formal charge
//! and the number of explicit bonds, and the validator has the last word.

use crate::traits::{TypeableAtom, TypeableBond};

use super::AtomEnv;

pub(super) fn chromium<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (env.charge(), env.degree()) {
        (0, 6) => env.accept("Cr"),
        (0, 4) => env.accept("Cr.4"),
        (6, 0) => env.accept("Cr.6plus"),
        (0, 0) => env.accept("Cr.neutral"),
        (3, 0) => env.accept("Cr.3plus"),
        _ => None,
    }
}

pub(super) fn molybdenum<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (env.charge(), env.degree()) {
        (0, 4) => env.accept("Mo.4"),
        (0, 0) => env.accept("Mo.metallic"),
        _ => None,
    }
}

pub(super) fn copper<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (env.charge(), env.degree()) {
        (2, _) => env.accept("Cu.2plus"),
        (0, 1) => env.accept("Cu"),
        (0, 0) => env.accept("Cu.metallic"),
        (1, _) => env.accept("Cu.plus"),
        _ => None,
    }
}

pub(super) fn ruthenium<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match env.charge() {
        0 => env.accept("Ru.6"),
        -2 => env.accept("Ru.2minus.6"),
        -3 => env.accept("Ru.3minus.6"),
        _ => None,
    }
}

pub(super) fn zinc<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (env.charge(), env.degree()) {
        (0, 0) => env.accept("Zn.metallic"),
        (0, 2) => env.accept("Zn"),
        (2, _) => env.accept("Zn.2plus"),
        _ => None,
    }
}

pub(super) fn nickel<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (env.charge(), env.degree()) {
        (2, _) => env.accept("Ni.2plus"),
        (0, 2) => env.accept("Ni"),
        (0, 0) => env.accept("Ni.metallic"),
        (1, 1) => env.accept("Ni.plus"),
        _ => None,
    }
}

pub(super) fn gadolinium<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (env.charge(), env.degree()) {
        (3, 0) => env.accept("Gd.3plus"),
        _ => None,
    }
}

pub(super) fn cobalt<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (env.charge(), env.degree()) {
        (2, _) => env.accept("Co.2plus"),
        (3, _) => env.accept("Co.3plus"),
        (0, 0) => env.accept("Co.metallic"),
        (0, 1) => env.accept("Co.1"),
        (0, 2) => env.accept("Co.2"),
        (0, 4) => env.accept("Co.4"),
        (0, 6) => env.accept("Co.6"),
        (1, 0) => env.accept("Co.plus"),
        (1, 1) => env.accept("Co.plus.1"),
        (1, 2) => env.accept("Co.plus.2"),
        (1, 4) => env.accept("Co.plus.4"),
        (1, 5) => env.accept("Co.plus.5"),
        (1, 6) => env.accept("Co.plus.6"),
        _ => None,
    }
}

pub(super) fn vanadium<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (env.charge(), env.degree()) {
        (-3, 6) => env.accept("V.3minus"),
        (-3, 4) => env.accept("V.3minus.4"),
        _ => None,
    }
}

pub(super) fn titanium<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (env.charge(), env.degree()) {
        (-3, 6) => env.accept("Ti.3minus"),
        (0, 4) => env.accept("Ti.sp3"),
        (0, 2) => env.accept("Ti.2"),
        _ => None,
    }
}

pub(super) fn platinum<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (env.charge(), env.degree()) {
        (2, 4) => env.accept("Pt.2plus.4"),
        (2, 0) => env.accept("Pt.2plus"),
        (0, 4) => env.accept("Pt.4"),
        (0, 6) => env.accept("Pt.6"),
        _ => None,
    }
}

pub(super) fn mercury<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (env.charge(), env.degree()) {
        (-1, 1) => env.accept("Hg.minus"),
        (2, 0) => env.accept("Hg.2plus"),
        (1, 1) => env.accept("Hg.plus"),
        (0, 2) => env.accept("Hg.2"),
        (0, 1) => env.accept("Hg.1"),
        (0, 0) => env.accept("Hg.metallic"),
        _ => None,
    }
}

pub(super) fn iron<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (env.charge(), env.degree()) {
        (0, 0) => env.accept("Fe.metallic"),
        (0, 2) => env.accept("Fe.2"),
        (0, 3) => env.accept("Fe.3"),
        (0, 4) => env.accept("Fe.4"),
        (0, 5) => env.accept("Fe.5"),
        (0, 6) => env.accept("Fe.6"),
        (2, 0..=1) => env.accept("Fe.2plus"),
        (1, 2) => env.accept("Fe.plus"),
        (3, _) => env.accept("Fe.3plus"),
        (-2, _) => env.accept("Fe.2minus"),
        (-3, _) => env.accept("Fe.3minus"),
        (-4, _) => env.accept("Fe.4minus"),
        _ => None,
    }
}

pub(super) fn gold<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (env.charge(), env.degree()) {
        (0, 1) => env.accept("Au.1"),
        _ => None,
    }
}

pub(super) fn silver<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (env.charge(), env.degree()) {
        (0, 0) => env.accept("Ag.neutral"),
        (0, 1) => env.accept("Ag.1"),
        (1, _) => env.accept("Ag.plus"),
        _ => None,
    }
}

pub(super) fn manganese<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (env.charge(), env.degree()) {
        (0, 2) => env.accept("Mn.2"),
        (0, 0) => env.accept("Mn.metallic"),
        (2, _) => env.accept("Mn.2plus"),
        (3, _) => env.accept("Mn.3plus"),
        _ => None,
    }
}

pub(super) fn cadmium<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (env.charge(), env.degree()) {
        (2, 0) => env.accept("Cd.2plus"),
        (0, 0) => env.accept("Cd.metallic"),
        (0, 2) => env.accept("Cd.2"),
        _ => None,
    }
}

pub(super) fn plutonium<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (env.charge(), env.degree()) {
        (0, 0) => env.accept("Pu"),
        _ => None,
    }
}

pub(super) fn thorium<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (env.charge(), env.degree()) {
        (0, 0) => env.accept("Th"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::Star;
    use crate::atom::Atom;

    fn bare(symbol: &str) -> Atom {
        Atom::new(symbol).with_hydrogens(0)
    }

    fn ion(symbol: &str, charge: i8) -> Atom {
        bare(symbol).with_charge(charge)
    }

    fn ligated(symbol: &str, charge: i8, n: usize) -> Star {
        (0..n).fold(Star::new(ion(symbol, charge)), |s, _| s.single("C"))
    }

    #[test]
    fn iron() {
        assert_eq!(ligated("Fe", 0, 2).perceive(), Some("Fe.2"));
        assert_eq!(ligated("Fe", 0, 0).perceive(), Some("Fe.metallic"));
        assert_eq!(ligated("Fe", 0, 6).perceive(), Some("Fe.6"));
        assert_eq!(ligated("Fe", 2, 0).perceive(), Some("Fe.2plus"));
        assert_eq!(ligated("Fe", 3, 0).perceive(), Some("Fe.3plus"));
        assert_eq!(ligated("Fe", 0, 1).perceive(), None);
    }

    #[test]
    fn cobalt_by_charge_and_degree() {
        assert_eq!(ligated("Co", 0, 0).perceive(), Some("Co.metallic"));
        assert_eq!(ligated("Co", 0, 6).perceive(), Some("Co.6"));
        assert_eq!(ligated("Co", 1, 5).perceive(), Some("Co.plus.5"));
        assert_eq!(ligated("Co", 2, 0).perceive(), Some("Co.2plus"));
        assert_eq!(ligated("Co", 0, 3).perceive(), None);
    }

    #[test]
    fn coinage_metals() {
        assert_eq!(ligated("Cu", 2, 0).perceive(), Some("Cu.2plus"));
        assert_eq!(ligated("Cu", 0, 1).perceive(), Some("Cu"));
        assert_eq!(ligated("Ag", 1, 0).perceive(), Some("Ag.plus"));
        assert_eq!(ligated("Au", 0, 1).perceive(), Some("Au.1"));
    }

    #[test]
    fn group_twelve() {
        assert_eq!(ligated("Zn", 0, 2).perceive(), Some("Zn"));
        assert_eq!(ligated("Zn", 2, 0).perceive(), Some("Zn.2plus"));
        assert_eq!(ligated("Cd", 0, 2).perceive(), Some("Cd.2"));
        assert_eq!(ligated("Hg", 0, 2).perceive(), Some("Hg.2"));
        assert_eq!(ligated("Hg", -1, 1).perceive(), Some("Hg.minus"));
    }

    #[test]
    fn early_transition_metals() {
        assert_eq!(ligated("Ti", 0, 4).perceive(), Some("Ti.sp3"));
        assert_eq!(ligated("V", -3, 6).perceive(), Some("V.3minus"));
        assert_eq!(ligated("Cr", 3, 0).perceive(), Some("Cr.3plus"));
        assert_eq!(ligated("Mn", 2, 0).perceive(), Some("Mn.2plus"));
        assert_eq!(ligated("Mo", 0, 0).perceive(), Some("Mo.metallic"));
        assert_eq!(ligated("Ru", 0, 6).perceive(), Some("Ru.6"));
    }

    #[test]
    fn platinum_group_and_f_block() {
        assert_eq!(ligated("Pt", 2, 4).perceive(), Some("Pt.2plus.4"));
        assert_eq!(ligated("Ni", 0, 2).perceive(), Some("Ni"));
        assert_eq!(ligated("Gd", 3, 0).perceive(), Some("Gd.3plus"));
        assert_eq!(ligated("Pu", 0, 0).perceive(), Some("Pu"));
        assert_eq!(ligated("Th", 0, 0).perceive(), Some("Th"));
    }
}
