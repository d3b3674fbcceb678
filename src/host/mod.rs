//! Host-Abstraktion: Element-Zugriff und atomares Anwenden von Translationen.

pub mod json_document;

pub use json_document::JsonDocument;

use crate::core::{ElementId, ElementKind, EqualizeError, Segment};
use glam::DVec3;
use indexmap::IndexMap;

/// Geordnete Zuordnung Element → Translation (Selektions-Reihenfolge).
pub type TranslationMap = IndexMap<ElementId, DVec3>;

/// Schnittstelle zum host-verwalteten Dokument.
///
/// Der geometrische Kern mutiert nie direkt: er liest Lage-Segmente und
/// beauftragt den Host mit dem Anwenden der berechneten Translationen.
pub trait HostDocument {
    /// Art des Elements (`None` für unbekannte/nicht unterstützte Elemente).
    fn element_kind(&self, id: ElementId) -> Option<ElementKind>;

    /// Lage des Elements als gerades, nicht degeneriertes Segment.
    fn location_segment(&self, id: ElementId) -> Result<Segment, EqualizeError>;

    /// Wendet alle Translationen atomar an: entweder alle oder keine.
    fn apply_translations(&mut self, moves: &TranslationMap) -> Result<(), EqualizeError>;
}
