//! Use-Case: Parallele Elemente im gleichmäßigen Abstand zur Referenz ausrichten.
//!
//! Die Referenz ist das erste selektierte Element und wird nie bewegt;
//! Element i landet bei `i * distance` senkrecht zur Referenzlinie.
//! Bewusst ein Fächer-Muster zur festen Referenz, keine gleichmäßige
//! Verteilung zwischen Nachbarn.

use crate::core::{ElementId, EqualizeError, Segment};
use crate::host::{HostDocument, TranslationMap};
use crate::shared::geometry::{are_parallel, compute_translation, horizontal_perpendicular};

/// Ergebnis eines erfolgreichen Ausgleich-Laufs.
#[derive(Debug, Clone, PartialEq)]
pub struct EqualizeSummary {
    /// Anzahl der verschobenen Elemente (ohne Referenz)
    pub moved: usize,
    /// Angewandter Basis-Abstand in internen Einheiten
    pub distance: f64,
}

/// Parst die Nutzereingabe des Abstands-Dialogs.
///
/// Akzeptiert nur endliche, positive Zahlen; alles andere ist
/// `InvalidDistance`.
pub fn parse_distance(input: &str) -> Result<f64, EqualizeError> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(EqualizeError::InvalidDistance(trimmed.to_string())),
    }
}

/// Prüft einen bereits numerischen Abstand (z.B. aus Optionen).
pub fn validate_distance(distance: f64) -> Result<f64, EqualizeError> {
    if distance.is_finite() && distance > 0.0 {
        Ok(distance)
    } else {
        Err(EqualizeError::InvalidDistance(distance.to_string()))
    }
}

/// Richtet alle selektierten Elemente am ersten (der Referenz) aus.
///
/// Alle Prüfungen laufen vor der ersten Mutation; jeder Fehler bricht
/// den gesamten Vorgang ohne Teilwirkung ab. Die Translationen werden
/// unabhängig voneinander aus den unbewegten Ausgangslagen berechnet
/// und in einem einzigen atomaren `apply_translations`-Aufruf angewandt.
pub fn equalize<H: HostDocument>(
    host: &mut H,
    selection: &[ElementId],
    distance: f64,
    tolerance: f64,
) -> Result<EqualizeSummary, EqualizeError> {
    if selection.len() < 2 {
        return Err(EqualizeError::InsufficientSelection);
    }

    for &id in selection {
        if host.element_kind(id).is_none() {
            return Err(EqualizeError::UnsupportedElementKind(id));
        }
    }

    let distance = validate_distance(distance)?;

    let segments: Vec<Segment> = selection
        .iter()
        .map(|&id| host.location_segment(id))
        .collect::<Result<_, _>>()?;

    if !are_parallel(&segments, tolerance) {
        return Err(EqualizeError::NotParallel);
    }

    let reference = segments[0];
    let perpendicular = horizontal_perpendicular(reference.direction());

    let mut moves = TranslationMap::with_capacity(selection.len() - 1);
    for (i, (&id, segment)) in selection.iter().zip(&segments).enumerate().skip(1) {
        let translation =
            compute_translation(&reference, segment, perpendicular, i as f64 * distance);
        moves.insert(id, translation);
    }

    host.apply_translations(&moves)?;

    log::info!(
        "Ausgleich abgeschlossen: {} Elemente an Referenz {} ausgerichtet (Abstand {:.3})",
        moves.len(),
        selection[0],
        distance
    );

    Ok(EqualizeSummary {
        moved: moves.len(),
        distance,
    })
}
