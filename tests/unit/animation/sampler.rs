use super::*;
use crate::foundation::core::points_close;
use crate::geometry::zigzag::{concatenated_path, zig_zag_path};

fn polyline(points: &[Point]) -> BezPath {
    let mut p = BezPath::new();
    p.move_to(points[0]);
    for pt in &points[1..] {
        p.line_to(*pt);
    }
    p
}

#[test]
fn straight_lines_are_sampled_by_distance() {
    // Two legs of unequal length: 30 then 10.
    let curve = polyline(&[
        Point::new(0.0, 0.0),
        Point::new(0.0, 30.0),
        Point::new(10.0, 30.0),
    ]);
    let s = ArcLengthSampler::new(&curve);
    assert!((s.total_length() - 40.0).abs() < 1e-9);
    assert!(points_close(s.position_at(0.5).unwrap(), Point::new(0.0, 20.0), 1e-6));
    assert!(points_close(s.position_at(0.875).unwrap(), Point::new(5.0, 30.0), 1e-6));
}

#[test]
fn progress_is_clamped() {
    let curve = polyline(&[Point::new(0.0, 0.0), Point::new(100.0, 0.0)]);
    assert_eq!(position(-1.0, &curve), Some(Point::new(0.0, 0.0)));
    assert_eq!(position(2.0, &curve), Some(Point::new(100.0, 0.0)));
    assert_eq!(position(f64::NAN, &curve), Some(Point::new(0.0, 0.0)));
}

#[test]
fn empty_and_point_curves() {
    assert_eq!(position(0.5, &BezPath::new()), None);
    assert!(ArcLengthSampler::new(&BezPath::new()).is_empty());

    let mut dot = BezPath::new();
    dot.move_to(Point::new(3.0, 4.0));
    assert_eq!(position(0.7, &dot), Some(Point::new(3.0, 4.0)));
}

#[test]
fn zig_zag_is_traversed_end_to_end() {
    let start = Point::new(240.0, 0.0);
    let end = Point::new(420.0, 200.0);
    let curve = zig_zag_path(start, end, 20.0).to_bez_path();
    assert!(points_close(position(0.0, &curve).unwrap(), start, 1e-9));
    assert!(points_close(position(1.0, &curve).unwrap(), end, 1e-6));

    // Corner arcs are shorter than the sharp corners they replace.
    let sharp = 60.0 + 180.0 + 140.0;
    let len = ArcLengthSampler::new(&curve).total_length();
    assert!(len < sharp && len > sharp - 20.0);
}

#[test]
fn samples_advance_monotonically_along_the_path() {
    let pts = [
        Point::new(240.0, 0.0),
        Point::new(420.0, 200.0),
        Point::new(60.0, 400.0),
    ];
    let curve = concatenated_path(&pts, 2, 20.0).to_bez_path();
    let s = ArcLengthSampler::new(&curve);
    let mut prev_y = f64::NEG_INFINITY;
    for i in 0..=50 {
        let p = s.position_at(i as f64 / 50.0).unwrap();
        // Every generated path descends or runs level, never climbs.
        assert!(p.y >= prev_y - 1e-6);
        prev_y = p.y;
    }
    assert!(points_close(s.position_at(1.0).unwrap(), pts[2], 1e-6));
}

#[test]
fn concatenated_end_matches_last_leg_end() {
    let pts = [
        Point::new(240.0, 0.0),
        Point::new(420.0, 200.0),
        Point::new(60.0, 400.0),
        Point::new(240.0, 600.0),
    ];
    for k in 1..pts.len() {
        let joined = concatenated_path(&pts, k, 20.0).to_bez_path();
        let leg = zig_zag_path(pts[k - 1], pts[k], 20.0).to_bez_path();
        let a = position(1.0, &joined).unwrap();
        let b = position(1.0, &leg).unwrap();
        assert!(points_close(a, b, 1e-6), "k={k}");
    }
}
