use crate::hybridization::Hybridization;

/// Default atom type for a molecular graph node.
///
/// `Atom` stores what an input format states about an atom. Anything the
/// format left open is `None` rather than a guessed default, because the
/// typer distinguishes "not given" from "given as zero" in a few places
/// (for instance an isolated selenium with an unknown hydrogen count).
///
/// # Examples
///
/// ```
/// use chemtype::Atom;
///
/// let carbonyl_o = Atom::new("O").with_charge(0).with_hydrogens(0);
/// assert_eq!(carbonyl_o.symbol, "O");
/// assert_eq!(carbonyl_o.formal_charge, Some(0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Atom {
    /// Element symbol with conventional capitalisation (`"C"`, `"Cl"`, `"Fe"`).
    /// Pseudo-atoms carry their label here instead.
    pub symbol: String,
    /// Formal charge in elementary charge units, if known.
    pub formal_charge: Option<i8>,
    /// Number of hydrogens attributed to this atom without being graph nodes.
    pub hydrogen_count: Option<u8>,
    /// Pre-assigned hybridization, if an upstream source supplied one.
    pub hybridization: Option<Hybridization>,
    /// Whether aromaticity perception flagged this atom.
    pub is_aromatic: bool,
    /// Placeholder atoms (`R`, `*`, attachment points). These are never
    /// typed chemically.
    pub is_pseudo: bool,
}

impl Atom {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    pub fn pseudo(label: impl Into<String>) -> Self {
        Self {
            symbol: label.into(),
            is_pseudo: true,
            ..Self::default()
        }
    }

    pub fn with_charge(mut self, charge: i8) -> Self {
        self.formal_charge = Some(charge);
        self
    }

    pub fn with_hydrogens(mut self, count: u8) -> Self {
        self.hydrogen_count = Some(count);
        self
    }

    pub fn with_hybridization(mut self, hybridization: Hybridization) -> Self {
        self.hybridization = Some(hybridization);
        self
    }

    pub fn aromatic(mut self) -> Self {
        self.is_aromatic = true;
        self
    }
}

impl crate::traits::HasSymbol for Atom {
    fn symbol(&self) -> &str {
        &self.symbol
    }
}

impl crate::traits::HasFormalCharge for Atom {
    fn formal_charge(&self) -> Option<i8> {
        self.formal_charge
    }
}

impl crate::traits::HasHydrogenCount for Atom {
    fn hydrogen_count(&self) -> Option<u8> {
        self.hydrogen_count
    }
}

impl crate::traits::HasHybridization for Atom {
    fn hybridization(&self) -> Option<Hybridization> {
        self.hybridization
    }
}

impl crate::traits::HasAromaticity for Atom {
    fn is_aromatic(&self) -> bool {
        self.is_aromatic
    }
}

impl crate::traits::IsPseudo for Atom {
    fn is_pseudo(&self) -> bool {
        self.is_pseudo
    }
}
