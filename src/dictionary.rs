//! Reference atom-type dictionary.
//!
//! Every type the rules can propose is declared here with the constraints the
//! validator checks: neighbour ceiling, maximum bond order, valence ceiling,
//! formal charge and, for radical types, the number of unpaired electrons.
//! The stock dictionary is compiled into the crate from
//! `data/atom_types.json`.

use std::collections::HashMap;
use std::io::Read;

use serde::Deserialize;

use crate::bond::BondOrder;
use crate::error::DictionaryError;
use crate::hybridization::Hybridization;

/// Identifier of the type assigned when typing ran but no definition fit.
pub const UNMATCHED: &str = "X";

static EMBEDDED: &str = include_str!("../data/atom_types.json");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomTypeDefinition {
    id: String,
    element: String,
    formal_charge: i8,
    neighbor_count: u8,
    max_bond_order: BondOrder,
    valency: u8,
    hybridization: Option<Hybridization>,
    single_electrons: Option<u8>,
}

impl AtomTypeDefinition {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn element(&self) -> &str {
        &self.element
    }

    pub fn formal_charge(&self) -> i8 {
        self.formal_charge
    }

    /// Ceiling on explicit bonds plus implicit hydrogens.
    pub fn neighbor_count(&self) -> u8 {
        self.neighbor_count
    }

    pub fn max_bond_order(&self) -> BondOrder {
        self.max_bond_order
    }

    /// Ceiling on the bond-order sum plus implicit hydrogens.
    pub fn valency(&self) -> u8 {
        self.valency
    }

    pub fn hybridization(&self) -> Option<Hybridization> {
        self.hybridization
    }

    /// Exact unpaired-electron count, when the type declares one.
    pub fn single_electrons(&self) -> Option<u8> {
        self.single_electrons
    }

    pub fn is_unmatched(&self) -> bool {
        self.id == UNMATCHED
    }
}

impl std::fmt::Display for AtomTypeDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.id)
    }
}

#[derive(Deserialize)]
struct RawDictionary {
    types: Vec<RawAtomType>,
}

// Required fields are optional here so that a missing one surfaces as a
// named `MissingField` instead of a generic parse error.
#[derive(Deserialize)]
struct RawAtomType {
    id: String,
    element: Option<String>,
    formal_charge: Option<i8>,
    neighbor_count: Option<u8>,
    max_bond_order: Option<BondOrder>,
    valency: Option<u8>,
    #[serde(default)]
    hybridization: Option<Hybridization>,
    #[serde(default)]
    single_electrons: Option<u8>,
}

impl RawAtomType {
    fn into_definition(self) -> Result<AtomTypeDefinition, DictionaryError> {
        fn require<T>(value: Option<T>, id: &str, field: &'static str) -> Result<T, DictionaryError> {
            value.ok_or_else(|| DictionaryError::MissingField {
                id: id.to_string(),
                field,
            })
        }
        let id = self.id;
        Ok(AtomTypeDefinition {
            element: require(self.element, &id, "element")?,
            formal_charge: require(self.formal_charge, &id, "formal_charge")?,
            neighbor_count: require(self.neighbor_count, &id, "neighbor_count")?,
            max_bond_order: require(self.max_bond_order, &id, "max_bond_order")?,
            valency: require(self.valency, &id, "valency")?,
            hybridization: self.hybridization,
            single_electrons: self.single_electrons,
            id,
        })
    }
}

/// Immutable set of atom-type definitions, indexed by identifier.
#[derive(Debug, Clone)]
pub struct AtomTypeDictionary {
    types: Vec<AtomTypeDefinition>,
    index: HashMap<String, usize>,
    unmatched: usize,
}

impl AtomTypeDictionary {
    /// The dictionary shipped with the crate.
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::from_json_str(EMBEDDED)
    }

    pub fn from_json_str(json: &str) -> Result<Self, DictionaryError> {
        let raw: RawDictionary = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DictionaryError> {
        let raw: RawDictionary = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawDictionary) -> Result<Self, DictionaryError> {
        let mut types = Vec::with_capacity(raw.types.len());
        let mut index = HashMap::with_capacity(raw.types.len());
        for entry in raw.types {
            let def = entry.into_definition()?;
            if index.insert(def.id.clone(), types.len()).is_some() {
                return Err(DictionaryError::DuplicateType(def.id));
            }
            types.push(def);
        }
        let unmatched = *index
            .get(UNMATCHED)
            .ok_or(DictionaryError::MissingFallback(UNMATCHED))?;
        tracing::info!(types = types.len(), "loaded atom type dictionary");
        Ok(Self {
            types,
            index,
            unmatched,
        })
    }

    pub fn get(&self, id: &str) -> Result<&AtomTypeDefinition, DictionaryError> {
        self.lookup(id)
            .ok_or_else(|| DictionaryError::UnknownType(id.to_string()))
    }

    pub fn lookup(&self, id: &str) -> Option<&AtomTypeDefinition> {
        self.index.get(id).map(|&i| &self.types[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// The universal fallback type `X`.
    pub fn unmatched(&self) -> &AtomTypeDefinition {
        &self.types[self.unmatched]
    }

    /// Definitions in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &AtomTypeDefinition> + '_ {
        self.types.iter()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
