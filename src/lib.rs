pub mod adjacency;
pub mod atom;
pub mod bond;
pub mod dictionary;
pub mod element;
pub mod error;
pub mod hybridization;
pub mod matcher;
pub mod mol;
pub mod radical;
pub mod registry;
pub mod rings;
pub mod rules;
pub mod traits;
pub mod validator;

pub use adjacency::BondMap;
pub use atom::Atom;
pub use bond::{Bond, BondOrder};
pub use dictionary::{AtomTypeDefinition, AtomTypeDictionary, UNMATCHED};
pub use error::{DictionaryError, Rejection};
pub use hybridization::Hybridization;
pub use matcher::{AtomTypeMatcher, MatchMode};
pub use mol::Mol;
pub use radical::{assign_single_electrons, num_radical_electrons};
pub use registry::MatcherRegistry;
pub use rings::RingSearch;
pub use traits::{
    HasAromaticity, HasBondOrder, HasFormalCharge, HasHybridization, HasHydrogenCount,
    HasSingleOrDouble, HasSymbol, IsPseudo, TypeableAtom, TypeableBond,
};
