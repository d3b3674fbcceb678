//! Lineare TGA-Elemente: IDs, Element-Arten, Lage.

use super::Segment;
use serde::{Deserialize, Serialize};

/// Opaque ID eines host-verwalteten Elements.
///
/// Der Kern interpretiert die ID nie; sie dient nur als Move-Ziel
/// gegenüber dem Host.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ElementId(pub u64);

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Art des linearen Elements (unterstützte Arten).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Rohr (Sanitär/Heizung)
    Pipe,
    /// Luftkanal
    Duct,
    /// Elektro-Leerrohr
    Conduit,
}

/// Ein lineares Element mit gerader Lage-Geometrie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearElement {
    /// Host-ID des Elements
    pub id: ElementId,
    /// Art des Elements
    pub kind: ElementKind,
    /// Lage als gerades Segment
    pub location: Segment,
}
