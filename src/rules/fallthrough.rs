//! Element families that are only reached after the dispatch table has no
//! entry for the symbol.

use crate::element::is_noble_gas;
use crate::traits::{TypeableAtom, TypeableBond};

use super::AtomEnv;

pub(super) fn common_salts<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (env.symbol(), env.charge(), env.degree()) {
        ("Cs", 1, _) => env.accept("Cs.plus"),
        ("Cs", 0, 0) => env.accept("Cs.metallic"),
        ("W", 0, 0) => env.accept("W.metallic"),
        _ => None,
    }
}

pub(super) fn organometallic<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (env.symbol(), env.charge(), env.degree()) {
        ("Po", _, 2) => env.accept("Po"),
        ("Sn", 0, 0..=4) => env.accept("Sn.sp3"),
        ("Sc", -3, 6) => env.accept("Sc.3minus"),
        _ => None,
    }
}

pub(super) fn noble_gases<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    let symbol = env.symbol();
    if !is_noble_gas(symbol) || env.is_charged() {
        return None;
    }
    match symbol {
        "Xe" if env.degree() > 2 => env.first_accepted(&["Xe.3", "Xe"]),
        "Xe" => env.accept("Xe"),
        "He" => env.accept("He"),
        "Ne" => env.accept("Ne"),
        "Ar" => env.accept("Ar"),
        "Kr" => env.accept("Kr"),
        "Rn" => env.accept("Rn"),
        _ => None,
    }
}
