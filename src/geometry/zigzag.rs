use crate::{
    foundation::config::PathConfig,
    foundation::core::Point,
    geometry::command::PathSegment,
    geometry::corner::corner_arc,
    geometry::direction::segment_direction,
};

/// Vertical distance of the two horizontal waypoints from the midpoint between nodes.
pub const DEFAULT_ZIGZAG_OFFSET: f64 = 40.0;

/// Shape parameters shared by every zig-zag of one roadmap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZigZag {
    /// Corner arc radius before clamping.
    pub radius: f64,
    /// Vertical distance of the horizontal leg from the midpoint.
    pub offset: f64,
}

impl Default for ZigZag {
    fn default() -> Self {
        Self::from(PathConfig::default())
    }
}

impl From<PathConfig> for ZigZag {
    fn from(cfg: PathConfig) -> Self {
        Self {
            radius: cfg.corner_radius,
            offset: cfg.zigzag_offset,
        }
    }
}

impl ZigZag {
    /// Default offset with a custom radius.
    pub fn with_radius(radius: f64) -> Self {
        Self {
            radius,
            offset: DEFAULT_ZIGZAG_OFFSET,
        }
    }

    /// Waypoints of the 4-leg route `start -> end`, both endpoints included.
    pub fn waypoints(&self, start: Point, end: Point) -> [Point; 5] {
        let mid = (start.y + end.y) * 0.5;
        let upper = mid - self.offset;
        let lower = mid + self.offset;
        [
            start,
            Point::new(start.x, upper),
            Point::new(end.x, upper),
            Point::new(end.x, lower),
            end,
        ]
    }

    /// Rounded zig-zag from `start` to `end`.
    ///
    /// Each interior corner is replaced by a quarter arc. The radius at a corner is
    /// clamped to the room on its adjacent legs: the whole leg when it touches `start`
    /// or `end`, half of it when it sits between two corners.
    pub fn build(&self, start: Point, end: Point) -> PathSegment {
        let wp = self.waypoints(start, end);
        let last = wp.len() - 1;
        // Share of leg `k` (from `wp[k]` to `wp[k + 1]`) one corner may consume.
        let room = |k: usize| {
            let len = wp[k].distance(wp[k + 1]);
            if k == 0 || k + 1 == last { len } else { len * 0.5 }
        };
        let mut path = PathSegment::starting_at(start);
        for i in 1..last {
            let (prev, corner, next) = (wp[i - 1], wp[i], wp[i + 1]);
            let radius = self.radius.min(room(i - 1)).min(room(i));
            let arc = corner_arc(
                segment_direction(prev, corner),
                segment_direction(corner, next),
                corner,
                radius,
            );
            match arc {
                Some(arc) => {
                    path.line_to(arc.before);
                    path.arc_to(arc.after, arc.radius, arc.sweep);
                }
                None => path.line_to(corner),
            }
        }
        path.line_to(end);
        path
    }

    /// Continuous path through `points[from..=to]`.
    ///
    /// Empty when `from >= to`; `to` is clamped to the last point.
    pub fn between(&self, points: &[Point], from: usize, to: usize) -> PathSegment {
        let to = to.min(points.len().saturating_sub(1));
        let mut path = PathSegment::new();
        if from >= to {
            return path;
        }
        for pair in points[from..=to].windows(2) {
            path.extend_with(&self.build(pair[0], pair[1]));
        }
        path
    }

    /// Continuous path from the first point through `points[upto]`.
    pub fn concatenated(&self, points: &[Point], upto: usize) -> PathSegment {
        self.between(points, 0, upto)
    }
}

/// Rounded zig-zag from `start` to `end` with the default offset.
pub fn zig_zag_path(start: Point, end: Point, radius: f64) -> PathSegment {
    ZigZag::with_radius(radius).build(start, end)
}

/// Join the zig-zags of legs `from..to` into one continuous curve.
pub fn path_between(points: &[Point], from: usize, to: usize, radius: f64) -> PathSegment {
    ZigZag::with_radius(radius).between(points, from, to)
}

/// Join the zig-zags of legs `0..upto` into one continuous curve.
///
/// Returns an empty curve when `upto == 0`.
pub fn concatenated_path(points: &[Point], upto: usize, radius: f64) -> PathSegment {
    ZigZag::with_radius(radius).concatenated(points, upto)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/zigzag.rs"]
mod tests;
