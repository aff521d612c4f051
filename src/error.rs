use thiserror::Error;

use crate::bond::BondOrder;

/// Failures while building or querying the reference atom-type dictionary.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to parse atom type dictionary: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read atom type dictionary: {0}")]
    Io(#[from] std::io::Error),
    #[error("atom type '{id}' is missing required field '{field}'")]
    MissingField { id: String, field: &'static str },
    #[error("atom type '{0}' is defined more than once")]
    DuplicateType(String),
    #[error("atom type dictionary does not define the fallback type '{0}'")]
    MissingFallback(&'static str),
    #[error("unknown atom type '{0}'")]
    UnknownType(String),
}

/// Why the validator turned down a candidate type. Only the first failing
/// check is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("{actual} neighbours exceed the {ceiling} allowed")]
    NeighborCount { actual: u32, ceiling: u8 },
    #[error("{actual} explicit neighbours, exactly {required} required")]
    ExplicitNeighborCount { actual: u32, required: u8 },
    #[error("{actual:?} bond exceeds maximum order {max:?}")]
    BondOrder { actual: BondOrder, max: BondOrder },
    #[error("unresolved bond order where maximum order is {max:?}")]
    UnresolvedBond { max: BondOrder },
    #[error("valence {actual} exceeds {ceiling}")]
    Valence { actual: u32, ceiling: u8 },
    #[error("formal charge {actual} differs from declared {declared}")]
    Charge { actual: i8, declared: i8 },
    #[error("{actual} single electrons, {declared} declared")]
    SingleElectrons { actual: usize, declared: u8 },
}
