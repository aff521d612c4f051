use serde::{Deserialize, Serialize};

/// Bond multiplicity.
///
/// Variants are declared in ascending weight so the derived ordering is the
/// chemical one. `Unset` sorts lowest and carries no weight; callers that
/// look for a maximum order skip it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum BondOrder {
    Unset,
    #[default]
    Single,
    Double,
    Triple,
    Quadruple,
    Quintuple,
    Sextuple,
}

impl BondOrder {
    pub fn weight(self) -> u8 {
        match self {
            BondOrder::Unset => 0,
            BondOrder::Single => 1,
            BondOrder::Double => 2,
            BondOrder::Triple => 3,
            BondOrder::Quadruple => 4,
            BondOrder::Quintuple => 5,
            BondOrder::Sextuple => 6,
        }
    }

    pub fn is_unset(self) -> bool {
        self == BondOrder::Unset
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Bond {
    pub order: BondOrder,
    pub is_aromatic: bool,
    /// The order is known to be either single or double but not which one,
    /// as in an aromatic ring that has not been kekulized.
    pub single_or_double: bool,
}

impl Bond {
    pub fn new(order: BondOrder) -> Self {
        Self {
            order,
            ..Self::default()
        }
    }

    pub fn single() -> Self {
        Self::new(BondOrder::Single)
    }

    pub fn double() -> Self {
        Self::new(BondOrder::Double)
    }

    pub fn triple() -> Self {
        Self::new(BondOrder::Triple)
    }

    /// An aromatic bond whose Kekulé order has not been assigned.
    pub fn aromatic() -> Self {
        Self {
            order: BondOrder::Unset,
            is_aromatic: true,
            single_or_double: true,
        }
    }

    pub fn with_aromatic(mut self, aromatic: bool) -> Self {
        self.is_aromatic = aromatic;
        self
    }
}

impl crate::traits::HasBondOrder for Bond {
    fn bond_order(&self) -> BondOrder {
        self.order
    }
}

impl crate::traits::HasAromaticity for Bond {
    fn is_aromatic(&self) -> bool {
        self.is_aromatic
    }
}

impl crate::traits::HasSingleOrDouble for Bond {
    fn is_single_or_double(&self) -> bool {
        self.single_or_double
    }
}
