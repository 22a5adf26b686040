use super::*;
use crate::foundation::core::points_close;
use kurbo::{ParamCurve as _, PathEl, Shape as _};

fn l_shape() -> PathSegment {
    let mut p = PathSegment::starting_at(Point::new(0.0, 0.0));
    p.line_to(Point::new(0.0, 30.0));
    p.arc_to(Point::new(10.0, 40.0), 10.0, Sweep::CounterClockwise);
    p.line_to(Point::new(60.0, 40.0));
    p
}

#[test]
fn start_and_end_follow_commands() {
    let p = l_shape();
    assert_eq!(p.start(), Some(Point::new(0.0, 0.0)));
    assert_eq!(p.end(), Some(Point::new(60.0, 40.0)));
    assert_eq!(PathSegment::new().start(), None);
    assert_eq!(PathSegment::new().end(), None);
}

#[test]
fn zero_length_lines_are_dropped() {
    let mut p = PathSegment::starting_at(Point::new(5.0, 5.0));
    p.line_to(Point::new(5.0, 5.0));
    assert_eq!(p.cmds().len(), 1);
}

#[test]
fn svg_d_uses_absolute_commands() {
    assert_eq!(
        l_shape().to_svg_d(),
        "M 0 0 L 0 30 A 10 10 0 0 0 10 40 L 60 40"
    );
}

#[test]
fn extend_drops_the_leading_move() {
    let mut a = l_shape();
    let mut b = PathSegment::starting_at(Point::new(60.0, 40.0));
    b.line_to(Point::new(60.0, 90.0));
    a.extend_with(&b);
    let moves = a
        .cmds()
        .iter()
        .filter(|c| matches!(c, DrawCmd::MoveTo { .. }))
        .count();
    assert_eq!(moves, 1);
    assert_eq!(a.end(), Some(Point::new(60.0, 90.0)));

    let mut empty = PathSegment::new();
    empty.extend_with(&b);
    assert_eq!(empty, b);
}

#[test]
fn bez_path_keeps_endpoints_and_rounds_the_corner() {
    let bez = l_shape().to_bez_path();
    let els = bez.elements();
    assert_eq!(els.first(), Some(&PathEl::MoveTo(Point::new(0.0, 0.0))));
    assert!(els.iter().any(|el| matches!(el, PathEl::CurveTo(..))));
    let last = bez.segments().last().unwrap().end();
    assert!(points_close(last, Point::new(60.0, 40.0), 1e-9));

    // The arc bulges toward the inside of the turn, so the box never exceeds the legs.
    let bbox = bez.bounding_box();
    assert!(bbox.x0 >= -1e-6 && bbox.y1 <= 40.0 + 1e-6);
}

#[test]
fn serializes_with_op_tags() {
    let v = serde_json::to_value(l_shape()).unwrap();
    assert_eq!(v[0]["op"], "move_to");
    assert_eq!(v[2]["op"], "arc_to");
    assert_eq!(v[2]["sweep"], "counter_clockwise");
}
