use crate::bond::BondOrder;
use crate::hybridization::Hybridization;

pub trait HasSymbol {
    fn symbol(&self) -> &str;
}

pub trait HasFormalCharge {
    fn formal_charge(&self) -> Option<i8>;
}

pub trait HasHydrogenCount {
    fn hydrogen_count(&self) -> Option<u8>;
}

pub trait HasHybridization {
    fn hybridization(&self) -> Option<Hybridization>;
}

pub trait HasAromaticity {
    fn is_aromatic(&self) -> bool;
}

pub trait IsPseudo {
    fn is_pseudo(&self) -> bool;
}

pub trait HasBondOrder {
    fn bond_order(&self) -> BondOrder;
}

pub trait HasSingleOrDouble {
    fn is_single_or_double(&self) -> bool;
}

/// Everything the atom typer reads from an atom payload.
pub trait TypeableAtom:
    HasSymbol + HasFormalCharge + HasHydrogenCount + HasHybridization + HasAromaticity + IsPseudo
{
}

impl<T> TypeableAtom for T where
    T: HasSymbol
        + HasFormalCharge
        + HasHydrogenCount
        + HasHybridization
        + HasAromaticity
        + IsPseudo
{
}

/// Everything the atom typer reads from a bond payload.
pub trait TypeableBond: HasBondOrder + HasAromaticity + HasSingleOrDouble {}

impl<T> TypeableBond for T where T: HasBondOrder + HasAromaticity + HasSingleOrDouble {}
