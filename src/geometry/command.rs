use std::fmt::Write as _;

use crate::{
    foundation::core::{BezPath, Point, Vec2},
    geometry::corner::Sweep,
};

/// Tolerance used when flattening arcs into cubic Béziers.
const ARC_TOLERANCE: f64 = 0.01;

/// One drawing primitive of a roadmap path.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCmd {
    /// Start a new subpath.
    MoveTo {
        /// Pen position.
        to: Point,
    },
    /// Straight line from the current point.
    LineTo {
        /// Line end.
        to: Point,
    },
    /// Circular arc from the current point, never the large arc.
    ArcTo {
        /// Arc end.
        to: Point,
        /// Circle radius.
        radius: f64,
        /// Rotational sense.
        sweep: Sweep,
    },
}

impl DrawCmd {
    /// Point the pen rests on after this command.
    pub fn end_point(&self) -> Point {
        match *self {
            Self::MoveTo { to } | Self::LineTo { to } | Self::ArcTo { to, .. } => to,
        }
    }
}

/// Ordered list of draw commands describing one continuous curve.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct PathSegment {
    cmds: Vec<DrawCmd>,
}

impl PathSegment {
    /// Empty curve.
    pub fn new() -> Self {
        Self::default()
    }

    /// Curve holding a single move to `p`.
    pub fn starting_at(p: Point) -> Self {
        Self {
            cmds: vec![DrawCmd::MoveTo { to: p }],
        }
    }

    /// Commands in drawing order.
    pub fn cmds(&self) -> &[DrawCmd] {
        &self.cmds
    }

    /// `true` when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Point of the leading move, if any.
    pub fn start(&self) -> Option<Point> {
        self.cmds.first().map(DrawCmd::end_point)
    }

    /// Point the curve ends on.
    pub fn end(&self) -> Option<Point> {
        self.cmds.last().map(DrawCmd::end_point)
    }

    /// Append a straight leg, skipping it when it would have zero length.
    pub fn line_to(&mut self, to: Point) {
        if self.end() == Some(to) {
            return;
        }
        self.cmds.push(DrawCmd::LineTo { to });
    }

    /// Append an arc ending at `to`.
    pub fn arc_to(&mut self, to: Point, radius: f64, sweep: Sweep) {
        self.cmds.push(DrawCmd::ArcTo { to, radius, sweep });
    }

    /// Continue this curve with `next`, dropping `next`'s leading move so the result
    /// stays a single subpath.
    pub fn extend_with(&mut self, next: &PathSegment) {
        let skip = usize::from(
            !self.is_empty() && matches!(next.cmds.first(), Some(DrawCmd::MoveTo { .. })),
        );
        self.cmds.extend(next.cmds.iter().skip(skip).copied());
    }

    /// SVG path data (`M`, `L`, `A` commands, absolute coordinates).
    pub fn to_svg_d(&self) -> String {
        let mut d = String::new();
        for cmd in &self.cmds {
            if !d.is_empty() {
                d.push(' ');
            }
            let _ = match *cmd {
                DrawCmd::MoveTo { to } => write!(d, "M {} {}", to.x, to.y),
                DrawCmd::LineTo { to } => write!(d, "L {} {}", to.x, to.y),
                DrawCmd::ArcTo { to, radius, sweep } => write!(
                    d,
                    "A {radius} {radius} 0 0 {} {} {}",
                    sweep.flag_digit(),
                    to.x,
                    to.y
                ),
            };
        }
        d
    }

    /// Cubic approximation for sampling and rasterisation.
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut current: Option<Point> = None;
        for cmd in &self.cmds {
            let Some(from) = current else {
                path.move_to(cmd.end_point());
                current = Some(cmd.end_point());
                continue;
            };
            match *cmd {
                DrawCmd::MoveTo { to } => path.move_to(to),
                DrawCmd::LineTo { to } => path.line_to(to),
                DrawCmd::ArcTo { to, radius, sweep } => {
                    let svg_arc = kurbo::SvgArc {
                        from,
                        to,
                        radii: Vec2::new(radius, radius),
                        x_rotation: 0.0,
                        large_arc: false,
                        sweep: sweep.flag(),
                    };
                    match kurbo::Arc::from_svg_arc(&svg_arc) {
                        Some(arc) => path.extend(arc.append_iter(ARC_TOLERANCE)),
                        None => path.line_to(to),
                    }
                }
            }
            current = Some(cmd.end_point());
        }
        path
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/command.rs"]
mod tests;
