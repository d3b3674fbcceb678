//! Gerades Liniensegment als Lage-Geometrie eines linearen Elements.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Unterhalb dieser Länge gilt ein Segment als degeneriert (Start ≈ Ende).
pub const DEGENERATE_LENGTH: f64 = 1e-9;

/// Ein gerades Segment zwischen zwei Endpunkten (interne Einheiten).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Startpunkt
    pub start: DVec3,
    /// Endpunkt
    pub end: DVec3,
}

impl Segment {
    /// Erstellt ein neues Segment.
    pub fn new(start: DVec3, end: DVec3) -> Self {
        Self { start, end }
    }

    /// Normalisierte Richtung von Start nach Ende.
    ///
    /// Nur für nicht degenerierte Segmente definiert; die Orchestrierung
    /// weist degenerierte Lagen vorher als `NoLinearLocation` ab.
    pub fn direction(&self) -> DVec3 {
        (self.end - self.start).normalize()
    }

    /// Mittelpunkt des Segments.
    pub fn midpoint(&self) -> DVec3 {
        (self.start + self.end) * 0.5
    }

    /// Länge des Segments.
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// true wenn Start und Ende praktisch zusammenfallen.
    pub fn is_degenerate(&self) -> bool {
        self.length() < DEGENERATE_LENGTH
    }

    /// Um einen Vektor verschobene Kopie (reine Translation).
    pub fn translated(&self, offset: DVec3) -> Self {
        Self {
            start: self.start + offset,
            end: self.end + offset,
        }
    }
}

#[cfg(test)]
mod tests;
