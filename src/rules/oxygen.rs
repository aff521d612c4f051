use crate::bond::BondOrder;
use crate::hybridization::Hybridization;
use crate::traits::{TypeableAtom, TypeableBond};

use super::AtomEnv;

pub(super) fn perceive_radical<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    let degree = env.degree();
    match env.charge() {
        0 if degree <= 1 => env.accept("O.sp3.radical"),
        1 if degree == 0 => env.accept("O.plus.radical"),
        1 if degree <= 2 => match env.max_bond_order() {
            BondOrder::Single => env.accept("O.plus.radical"),
            BondOrder::Double => env.accept("O.plus.sp2.radical"),
            _ => None,
        },
        _ => None,
    }
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
        -1 if env.degree() <= 1 => {
            if env.is_carboxylate() {
                env.accept("O.minus.co2")
            } else {
                env.accept("O.minus")
            }
        }
        -2 if env.degree() == 0 => env.accept("O.minus2"),
        1 => {
            if env.degree() == 0 {
                return env.accept("O.plus");
            }
            match env.max_bond_order() {
                BondOrder::Double => env.accept("O.plus.sp2"),
                BondOrder::Triple => env.accept("O.plus.sp1"),
                _ => env.accept("O.plus"),
            }
        }
        _ => None,
    }
}

fn declared<A, B>(env: &AtomEnv<'_, A, B>, hybridization: Hybridization) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match hybridization {
        Hybridization::Planar3 => env.accept("O.planar3"),
        Hybridization::SP2 => match env.degree() {
            1 if env.is_carboxylate() => env.accept("O.sp2.co2"),
            1 => env.accept("O.sp2"),
            2 => env.accept("O.planar3"),
            _ => None,
        },
        Hybridization::SP3 => env.accept("O.sp3"),
        _ => None,
    }
}

fn neutral<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match env.degree() {
        d if d > 2 => None,
        0 => env.accept("O.sp3"),
        _ => match env.max_bond_order() {
            BondOrder::Double if env.is_carboxylate() => env.accept("O.sp2.co2"),
            BondOrder::Double => env.accept("O.sp2"),
            BondOrder::Single => {
                if env.heavy_degree() == 2 && env.both_neighbors_sp2() && env.is_ring_atom() {
                    if let Some(id) = env.accept("O.planar3") {
                        return Some(id);
                    }
                }
                env.accept("O.sp3")
            }
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{perceive_at, Star};
    use crate::atom::Atom;
    use crate::bond::Bond;
    use crate::hybridization::Hybridization;
    use crate::mol::Mol;

    fn o(h: u8) -> Atom {
        Atom::new("O").with_hydrogens(h)
    }

    #[test]
    fn water_and_hydroxyl() {
        assert_eq!(Star::new(o(2)).perceive(), Some("O.sp3"));
        assert_eq!(Star::new(o(1)).single("C").perceive(), Some("O.sp3"));
        assert_eq!(Star::new(o(0)).single("C").single("C").perceive(), Some("O.sp3"));
    }

    #[test]
    fn carbonyl_oxygen() {
        assert_eq!(Star::new(o(0)).double("C").perceive(), Some("O.sp2"));
    }

    #[test]
    fn carboxylate_oxygens() {
        let mut mol = Mol::<Atom, Bond>::new();
        let c = mol.add_atom(Atom::new("C").with_hydrogens(0));
        let me = mol.add_atom(Atom::new("C").with_hydrogens(3));
        let o1 = mol.add_atom(o(0));
        let o2 = mol.add_atom(o(0).with_charge(-1));
        mol.add_bond(c, me, Bond::single());
        mol.add_bond(c, o1, Bond::double());
        mol.add_bond(c, o2, Bond::single());
        assert_eq!(perceive_at(&mol, o1), Some("O.sp2.co2"));
        assert_eq!(perceive_at(&mol, o2), Some("O.minus.co2"));
    }

    #[test]
    fn alkoxide_and_oxide() {
        assert_eq!(Star::new(o(0).with_charge(-1)).single("C").perceive(), Some("O.minus"));
        assert_eq!(Star::new(o(1).with_charge(-1)).perceive(), Some("O.minus"));
        assert_eq!(Star::new(o(0).with_charge(-2)).perceive(), Some("O.minus2"));
    }

    #[test]
    fn oxonium() {
        assert_eq!(Star::new(o(3).with_charge(1)).perceive(), Some("O.plus"));
        assert_eq!(
            Star::new(o(1).with_charge(1)).double("C").perceive(),
            Some("O.plus.sp2")
        );
        assert_eq!(Star::new(o(0).with_charge(1)).triple("C").perceive(), Some("O.plus.sp1"));
    }

    #[test]
    fn furan_oxygen_is_planar() {
        let mut star = Star::new(o(0));
        let ring: Vec<_> = (0..4)
            .map(|_| star.mol.add_atom(Atom::new("C").with_hydrogens(1)))
            .collect();
        let centre = star.centre;
        star.mol.add_bond(centre, ring[0], Bond::single());
        star.mol.add_bond(ring[0], ring[1], Bond::double());
        star.mol.add_bond(ring[1], ring[2], Bond::single());
        star.mol.add_bond(ring[2], ring[3], Bond::double());
        star.mol.add_bond(ring[3], centre, Bond::single());
        assert_eq!(star.perceive(), Some("O.planar3"));
    }

    #[test]
    fn vinyl_ether_outside_ring_stays_sp3() {
        let star = Star::new(o(0))
            .bond(Atom::new("C").with_hybridization(Hybridization::SP2), Bond::single())
            .bond(Atom::new("C").with_hybridization(Hybridization::SP2), Bond::single());
        assert_eq!(star.perceive(), Some("O.sp3"));
    }

    #[test]
    fn declared_hybridization() {
        let planar = Star::new(o(0).with_hybridization(Hybridization::Planar3))
            .single("C")
            .single("C");
        assert_eq!(planar.perceive(), Some("O.planar3"));
        let sp2 = Star::new(o(0).with_hybridization(Hybridization::SP2)).double("C");
        assert_eq!(sp2.perceive(), Some("O.sp2"));
        let sp3 = Star::new(o(1).with_hybridization(Hybridization::SP3)).single("C");
        assert_eq!(sp3.perceive(), Some("O.sp3"));
    }

    #[test]
    fn trivalent_neutral_oxygen_has_no_type() {
        let star = Star::new(o(0)).single("C").single("C").single("C");
        assert_eq!(star.perceive(), None);
    }

    #[test]
    fn radicals() {
        assert_eq!(Star::new(o(1)).radical().perceive(), Some("O.sp3.radical"));
        assert_eq!(Star::new(o(0)).single("C").radical().perceive(), Some("O.sp3.radical"));
        assert_eq!(
            Star::new(o(0).with_charge(1)).double("C").radical().perceive(),
            Some("O.plus.sp2.radical")
        );
        assert_eq!(
            Star::new(o(1).with_charge(1)).single("C").radical().perceive(),
            Some("O.plus.radical")
        );
    }
}
