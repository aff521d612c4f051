use serde::{Deserialize, Serialize};

/// Orbital-geometry classification of an atom.
///
/// Hybridization is never computed by this crate. When an input format or an
/// upstream tool has already assigned one, the rules for carbon, nitrogen and
/// oxygen use it in preference to bond-order inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hybridization {
    S,
    SP,
    SP2,
    SP3,
    /// Trigonal planar with a conjugated lone pair (pyrrole N, furan O, amide N).
    Planar3,
    SP3D,
    SP3D2,
    Other,
}
