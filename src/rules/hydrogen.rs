use crate::traits::{TypeableAtom, TypeableBond};

use super::AtomEnv;

pub(super) fn perceive<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (env.degree(), env.charge()) {
        (1, 0) => env.accept("H"),
        (0, 0) => env.accept("H"),
        (0, 1) => env.accept("H.plus"),
        (0, -1) => env.accept("H.minus"),
        _ => None,
    }
}
