//! Reine Geometrie-Funktionen für den Parallel-Ausgleich.
//!
//! Layer-neutral: kann von `app` und `host` importiert werden ohne
//! Zirkel-Abhängigkeiten zu erzeugen. Keine Seiteneffekte.

use crate::core::Segment;
use glam::DVec3;

/// Prüft ob alle Segmente zueinander parallel (oder anti-parallel) sind.
///
/// Vergleichsbasis ist die normalisierte Richtung des ersten Segments;
/// jedes weitere Segment muss ihr oder ihrer Negation komponentenweise
/// innerhalb `tolerance` entsprechen. Weniger als zwei Segmente gelten
/// als nicht parallel.
pub fn are_parallel(segments: &[Segment], tolerance: f64) -> bool {
    if segments.len() < 2 {
        return false;
    }

    let reference_dir = segments[0].direction();
    segments[1..].iter().all(|segment| {
        let dir = segment.direction();
        almost_equal(dir, reference_dir, tolerance) || almost_equal(dir, -reference_dir, tolerance)
    })
}

/// Komponentenweiser Vergleich zweier Vektoren mit absoluter Toleranz.
fn almost_equal(a: DVec3, b: DVec3, tolerance: f64) -> bool {
    (a - b).abs().max_element() <= tolerance
}

/// In-Plane-Senkrechte zur Element-Richtung: 90°-Drehung um die Hochachse.
///
/// Konvention für überwiegend horizontal verlaufende Elemente
/// (2.5-D-Vereinfachung): die z-Komponente wird unverändert übernommen.
/// Für deutlich geneigte Elemente muss der Aufrufer eine eigene
/// Senkrechte an `compute_translation` übergeben.
pub fn horizontal_perpendicular(direction: DVec3) -> DVec3 {
    DVec3::new(-direction.y, direction.x, direction.z)
}

/// Translation, die den Mittelpunkt von `target` auf
/// `reference.midpoint() + perpendicular_unit * target_distance` bringt.
///
/// Reine Verschiebung: Länge und Richtung von `target` bleiben erhalten.
/// Das Vorzeichen von `target_distance` wählt die Seite der Referenzlinie.
pub fn compute_translation(
    reference: &Segment,
    target: &Segment,
    perpendicular_unit: DVec3,
    target_distance: f64,
) -> DVec3 {
    let desired_mid = reference.midpoint() + perpendicular_unit * target_distance;
    desired_mid - target.midpoint()
}

#[cfg(test)]
mod tests;
