//! Element dispatch and the per-element perception rules.
//!
//! Each rule proposes candidate type identifiers from the most specific
//! structural pattern to the least specific, validating each through
//! [`AtomEnv::accept`]; the first accepted candidate wins. A rule returning
//! `None` means no definition fits, which the matcher reports as `X`.

mod carbon;
mod env;
mod fallthrough;
mod halogens;
mod hydrogen;
mod main_group;
mod nitrogen;
mod oxygen;
mod phosphorus;
mod sulfur;
mod transition;

pub use env::AtomEnv;

use crate::traits::{TypeableAtom, TypeableBond};

/// A perception rule: candidate type for the atom in `env`, if any.
pub type Rule<A, B> = fn(&AtomEnv<'_, A, B>) -> Option<&'static str>;

/// Rule for atoms of `symbol` that carry no unpaired electron.
///
/// Symbols without an entry here are tried against the fallthrough
/// families in [`perceive`].
pub fn element_rule<A, B>(symbol: &str) -> Option<Rule<A, B>>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    let rule: Rule<A, B> = match symbol {
        "C" => carbon::perceive,
        "H" => hydrogen::perceive,
        "O" => oxygen::perceive,
        "N" => nitrogen::perceive,
        "S" => sulfur::perceive,
        "P" => phosphorus::perceive,
        "Li" => main_group::lithium,
        "Na" => main_group::sodium,
        "K" => main_group::potassium,
        "Rb" => main_group::rubidium,
        "Be" => main_group::beryllium,
        "Mg" => main_group::magnesium,
        "Ca" => main_group::calcium,
        "Sr" => main_group::strontium,
        "Ba" => main_group::barium,
        "Ra" => main_group::radium,
        "B" => main_group::boron,
        "Al" => main_group::aluminium,
        "Ga" => main_group::gallium,
        "In" => main_group::indium,
        "Tl" => main_group::thallium,
        "Si" => main_group::silicon,
        "Ge" => main_group::germanium,
        "Pb" => main_group::lead,
        "As" => main_group::arsenic,
        "Sb" => main_group::antimony,
        "Se" => main_group::selenium,
        "Te" => main_group::tellurium,
        "Cr" => transition::chromium,
        "Mo" => transition::molybdenum,
        "Cu" => transition::copper,
        "Ru" => transition::ruthenium,
        "Zn" => transition::zinc,
        "Ni" => transition::nickel,
        "Gd" => transition::gadolinium,
        "Co" => transition::cobalt,
        "V" => transition::vanadium,
        "Ti" => transition::titanium,
        "Pt" => transition::platinum,
        "Hg" => transition::mercury,
        "Fe" => transition::iron,
        "Au" => transition::gold,
        "Ag" => transition::silver,
        "Mn" => transition::manganese,
        "Cd" => transition::cadmium,
        "Pu" => transition::plutonium,
        "Th" => transition::thorium,
        _ => return None,
    };
    Some(rule)
}

/// Rule for atoms of `symbol` that carry at least one unpaired electron.
/// Only carbon, nitrogen and oxygen radicals are typed.
pub fn radical_rule<A, B>(symbol: &str) -> Option<Rule<A, B>>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    let rule: Rule<A, B> = match symbol {
        "C" => carbon::perceive_radical,
        "N" => nitrogen::perceive_radical,
        "O" => oxygen::perceive_radical,
        _ => return None,
    };
    Some(rule)
}

/// Candidate type for the atom in `env`, routed by its element symbol.
pub fn perceive<A, B>(env: &AtomEnv<'_, A, B>) -> Option<&'static str>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    let symbol = env.symbol();
    if env.is_radical() {
        return radical_rule(symbol).and_then(|rule| rule(env));
    }
    if let Some(rule) = element_rule(symbol) {
        return rule(env);
    }
    halogens::perceive_named(env)
        .or_else(|| fallthrough::common_salts(env))
        .or_else(|| fallthrough::organometallic(env))
        .or_else(|| fallthrough::noble_gases(env))
}

#[cfg(test)]
pub(crate) mod testing {
    use petgraph::graph::NodeIndex;

    use crate::atom::Atom;
    use crate::bond::Bond;
    use crate::dictionary::AtomTypeDictionary;
    use crate::matcher::MatchMode;
    use crate::mol::Mol;

    use super::{perceive, AtomEnv};

    /// A centre atom with a fan of neighbours, the usual shape of a rule test.
    pub(crate) struct Star {
        pub mol: Mol<Atom, Bond>,
        pub centre: NodeIndex,
    }

    impl Star {
        pub fn new(centre: Atom) -> Self {
            let mut mol = Mol::new();
            let centre = mol.add_atom(centre);
            Star { mol, centre }
        }

        pub fn bond(mut self, neighbor: Atom, bond: Bond) -> Self {
            let nb = self.mol.add_atom(neighbor);
            self.mol.add_bond(self.centre, nb, bond);
            self
        }

        pub fn single(self, symbol: &str) -> Self {
            self.bond(Atom::new(symbol), Bond::single())
        }

        pub fn double(self, symbol: &str) -> Self {
            self.bond(Atom::new(symbol), Bond::double())
        }

        pub fn triple(self, symbol: &str) -> Self {
            self.bond(Atom::new(symbol), Bond::triple())
        }

        pub fn radical(mut self) -> Self {
            self.mol.add_single_electron(self.centre);
            self
        }

        pub fn perceive(&self) -> Option<&'static str> {
            perceive_at(&self.mol, self.centre)
        }
    }

    pub(crate) fn perceive_at(mol: &Mol<Atom, Bond>, idx: NodeIndex) -> Option<&'static str> {
        let dict = AtomTypeDictionary::embedded().unwrap();
        let env = AtomEnv::new(mol, idx, None, None, &dict, MatchMode::ImplicitHydrogens);
        perceive(&env)
    }
}
