use super::*;
use approx::assert_relative_eq;
use glam::DVec3;

#[test]
fn test_direction_und_midpoint() {
    let segment = Segment::new(DVec3::ZERO, DVec3::new(10.0, 0.0, 0.0));
    assert_eq!(segment.direction(), DVec3::X);
    assert_eq!(segment.midpoint(), DVec3::new(5.0, 0.0, 0.0));
    assert_relative_eq!(segment.length(), 10.0);
}

#[test]
fn test_degeneriertes_segment() {
    let segment = Segment::new(DVec3::ONE, DVec3::ONE + DVec3::splat(1e-12));
    assert!(segment.is_degenerate());
    assert!(!Segment::new(DVec3::ZERO, DVec3::X).is_degenerate());
}

#[test]
fn test_translated_erhaelt_laenge_und_richtung() {
    let segment = Segment::new(DVec3::new(0.0, 5.0, 0.0), DVec3::new(10.0, 5.0, 0.0));
    let moved = segment.translated(DVec3::new(0.0, -2.0, 0.0));

    assert_relative_eq!(moved.length(), segment.length());
    assert_eq!(moved.direction(), segment.direction());
    assert_eq!(moved.midpoint(), DVec3::new(5.0, 3.0, 0.0));
}
