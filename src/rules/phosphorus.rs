use crate::bond::BondOrder;
use crate::traits::{TypeableAtom, TypeableBond};

use super::AtomEnv;

pub(super) fn perceive<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    let charge = env.charge();
    match env.degree() {
        0 if charge == 0 => env.accept("P.ine"),
        1 if charge == 0 => env.accept("P.ide"),
        2 => match env.max_bond_order() {
            BondOrder::Double if charge == 1 => env.accept("P.sp1.plus"),
            BondOrder::Double => env.accept("P.irane"),
            BondOrder::Single => env.accept("P.ine"),
            _ => None,
        },
        3 if charge == 1 => env.accept("P.anium"),
        3 if env.double_bond_count() == 1 => env.accept("P.ate"),
        3 => env.accept("P.ine"),
        4 if charge == 1 && env.double_bond_count() == 0 => env.accept("P.ate.charged"),
        4 if env.double_bond_count() == 1 => env.accept("P.ate"),
        5 if charge == 0 => env.accept("P.ane"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::Star;
    use crate::atom::Atom;

    fn p(h: u8) -> Atom {
        Atom::new("P").with_hydrogens(h)
    }

    #[test]
    fn phosphines() {
        assert_eq!(Star::new(p(3)).perceive(), Some("P.ine"));
        assert_eq!(Star::new(p(1)).single("C").single("C").perceive(), Some("P.ine"));
        assert_eq!(
            Star::new(p(0)).single("C").single("C").single("C").perceive(),
            Some("P.ine")
        );
    }

    #[test]
    fn phosphaalkyne_and_phosphaalkene() {
        assert_eq!(Star::new(p(0)).triple("C").perceive(), Some("P.ide"));
        assert_eq!(Star::new(p(0)).double("C").single("C").perceive(), Some("P.irane"));
    }

    #[test]
    fn phosphates() {
        let phosphate = Star::new(p(0)).double("O").single("O").single("O").single("O");
        assert_eq!(phosphate.perceive(), Some("P.ate"));
        let oxide = Star::new(p(0)).double("O").single("C").single("C");
        assert_eq!(oxide.perceive(), Some("P.ate"));
    }

    #[test]
    fn phosphonium() {
        let tetra = (0..4).fold(Star::new(p(0).with_charge(1)), |s, _| s.single("C"));
        assert_eq!(tetra.perceive(), Some("P.ate.charged"));
        let tri = Star::new(p(1).with_charge(1)).single("C").single("C").single("C");
        assert_eq!(tri.perceive(), Some("P.anium"));
    }

    #[test]
    fn pentavalent() {
        let pcl5 = (0..5).fold(Star::new(p(0)), |s, _| s.single("Cl"));
        assert_eq!(pcl5.perceive(), Some("P.ane"));
    }
}
