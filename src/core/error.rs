//! Fehlertaxonomie des Ausgleich-Vorgangs.
//!
//! Jede Variante trägt die eine nutzer-sichtbare Meldung ihrer
//! Fehlerart; die Anwendungsschicht zeigt `Display` unverändert an.

use super::ElementId;
use thiserror::Error;

/// Fehlerarten des Ausgleich-Vorgangs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EqualizeError {
    /// Weniger als zwei gültige Elemente selektiert
    #[error("Bitte mindestens zwei Elemente auswählen.")]
    InsufficientSelection,

    /// Selektiertes Element ist kein unterstütztes lineares Element
    #[error("Element {0} ist kein Rohr, Kanal oder Leerrohr.")]
    UnsupportedElementKind(ElementId),

    /// Lage-Geometrie nicht als gerades Segment abrufbar
    #[error("Für Element {0} konnte keine gerade Lage-Geometrie ermittelt werden.")]
    NoLinearLocation(ElementId),

    /// Selektierte Elemente bestehen den Parallelitäts-Test nicht
    #[error("Die ausgewählten Elemente sind nicht parallel.")]
    NotParallel,

    /// Abstand nicht positiv oder nicht parsbar
    #[error("Ungültiger Abstand: {0:?}")]
    InvalidDistance(String),

    /// Atomarer Apply-Schritt des Hosts fehlgeschlagen
    #[error("Transaktion fehlgeschlagen: {0}")]
    TransactionFailure(String),
}
