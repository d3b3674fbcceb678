use super::*;
use crate::core::Segment;
use crate::shared::options::PARALLEL_TOLERANCE;
use approx::assert_relative_eq;
use glam::DVec3;

fn seg(start: [f64; 3], end: [f64; 3]) -> Segment {
    Segment::new(DVec3::from(start), DVec3::from(end))
}

// ─── are_parallel ────────────────────────────────────────────────────────────

#[test]
fn test_parallel_gleiche_richtung() {
    let segments = [
        seg([0.0, 0.0, 0.0], [10.0, 0.0, 0.0]),
        seg([0.0, 5.0, 0.0], [10.0, 5.0, 0.0]),
        seg([0.0, 9.0, 0.0], [20.0, 9.0, 0.0]),
    ];
    assert!(are_parallel(&segments, PARALLEL_TOLERANCE));
}

#[test]
fn test_antiparallel_zaehlt_als_parallel() {
    // Vertauschtes Start/Ende darf das Ergebnis nicht ändern
    let segments = [
        seg([0.0, 0.0, 0.0], [10.0, 0.0, 0.0]),
        seg([10.0, 5.0, 0.0], [0.0, 5.0, 0.0]),
    ];
    assert!(are_parallel(&segments, PARALLEL_TOLERANCE));
}

#[test]
fn test_nicht_parallel() {
    // Richtungen (1,0,0) und (0,1,0)
    let segments = [
        seg([0.0, 0.0, 0.0], [10.0, 0.0, 0.0]),
        seg([0.0, 0.0, 0.0], [0.0, 10.0, 0.0]),
    ];
    assert!(!are_parallel(&segments, PARALLEL_TOLERANCE));
}

#[test]
fn test_weniger_als_zwei_segmente_nicht_parallel() {
    assert!(!are_parallel(&[], PARALLEL_TOLERANCE));
    assert!(!are_parallel(
        &[seg([0.0, 0.0, 0.0], [10.0, 0.0, 0.0])],
        PARALLEL_TOLERANCE
    ));
}

#[test]
fn test_permutation_der_nachfolger_aendert_nichts() {
    let a = seg([0.0, 0.0, 0.0], [10.0, 0.0, 0.0]);
    let b = seg([0.0, 5.0, 0.0], [10.0, 5.0, 0.0]);
    let c = seg([10.0, 9.0, 0.0], [0.0, 9.0, 0.0]);

    assert!(are_parallel(&[a, b, c], PARALLEL_TOLERANCE));
    assert!(are_parallel(&[a, c, b], PARALLEL_TOLERANCE));
}

#[test]
fn test_toleranz_begrenzt_abweichung() {
    let a = seg([0.0, 0.0, 0.0], [10.0, 0.0, 0.0]);
    let skewed = seg([0.0, 0.0, 0.0], [10.0, 0.001, 0.0]);

    assert!(!are_parallel(&[a, skewed], PARALLEL_TOLERANCE));
    assert!(are_parallel(&[a, skewed], 1e-3));
}

// ─── horizontal_perpendicular ────────────────────────────────────────────────

#[test]
fn test_senkrechte_fuer_horizontale_richtungen() {
    assert_eq!(horizontal_perpendicular(DVec3::X), DVec3::Y);
    assert_eq!(
        horizontal_perpendicular(DVec3::Y),
        DVec3::new(-1.0, 0.0, 0.0)
    );
}

#[test]
fn test_senkrechte_uebernimmt_z_komponente() {
    // 2.5-D-Konvention: z wird unverändert durchgereicht
    let perp = horizontal_perpendicular(DVec3::new(1.0, 0.0, 0.25));
    assert_eq!(perp, DVec3::new(0.0, 1.0, 0.25));
}

// ─── compute_translation ─────────────────────────────────────────────────────

#[test]
fn test_translation_referenzfall() {
    // Referenz (0,0,0)-(10,0,0), Ziel (0,5,0)-(10,5,0), Abstand 3
    let reference = seg([0.0, 0.0, 0.0], [10.0, 0.0, 0.0]);
    let target = seg([0.0, 5.0, 0.0], [10.0, 5.0, 0.0]);

    let translation = compute_translation(&reference, &target, DVec3::Y, 3.0);
    assert_eq!(translation, DVec3::new(0.0, -2.0, 0.0));
}

#[test]
fn test_translation_bringt_mittelpunkt_exakt_ans_ziel() {
    let reference = seg([2.0, 1.0, 0.0], [12.0, 1.0, 0.0]);
    let target = seg([3.0, 7.0, 0.0], [13.0, 7.0, 0.0]);
    let perp = horizontal_perpendicular(reference.direction());

    let translation = compute_translation(&reference, &target, perp, 2.5);
    let moved = target.translated(translation);
    let desired = reference.midpoint() + perp * 2.5;

    assert_relative_eq!(moved.midpoint().x, desired.x, epsilon = 1e-9);
    assert_relative_eq!(moved.midpoint().y, desired.y, epsilon = 1e-9);
    assert_relative_eq!(moved.midpoint().z, desired.z, epsilon = 1e-9);
}

#[test]
fn test_erneute_berechnung_ist_nullvektor() {
    // Bereits bewegtes Ziel: zweite Berechnung ergibt ≈ 0
    let reference = seg([0.0, 0.0, 0.0], [10.0, 0.0, 0.0]);
    let target = seg([1.0, 5.0, 0.0], [11.0, 5.0, 0.0]);

    let translation = compute_translation(&reference, &target, DVec3::Y, 4.0);
    let moved = target.translated(translation);
    let again = compute_translation(&reference, &moved, DVec3::Y, 4.0);

    assert!(again.length() < 1e-9);
}

#[test]
fn test_negativer_abstand_waehlt_andere_seite() {
    let reference = seg([0.0, 0.0, 0.0], [10.0, 0.0, 0.0]);
    let target = seg([0.0, 5.0, 0.0], [10.0, 5.0, 0.0]);

    let translation = compute_translation(&reference, &target, DVec3::Y, -3.0);
    assert_eq!(translation, DVec3::new(0.0, -8.0, 0.0));
}
