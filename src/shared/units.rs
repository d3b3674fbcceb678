//! Umrechnung externer Nutzereingaben in interne Längeneinheiten.
//!
//! Das Host-Dokument rechnet in Fuß; Nutzereingaben kommen in Metern.
//! Die Umrechnung passiert in der Anwendungsschicht, nie im
//! geometrischen Kern.

/// Interne Längeneinheit des Host-Dokuments: Fuß (1 ft = 0.3048 m).
pub const METERS_PER_INTERNAL_UNIT: f64 = 0.3048;

/// Rechnet Meter (Nutzereingabe) in interne Einheiten um.
pub fn meters_to_internal(meters: f64) -> f64 {
    meters / METERS_PER_INTERNAL_UNIT
}

/// Rechnet interne Einheiten in Meter um (für Anzeigen und Logs).
pub fn internal_to_meters(internal: f64) -> f64 {
    internal * METERS_PER_INTERNAL_UNIT
}
