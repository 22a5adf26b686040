use crate::foundation::core::{Point, Vec2};

/// Tolerance below which a coordinate delta counts as zero.
const AXIS_EPS: f64 = 1e-9;

/// Travel direction of an axis-aligned leg, in screen space (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Toward smaller y.
    Up,
    /// Toward larger y.
    Down,
    /// Toward smaller x.
    Left,
    /// Toward larger x.
    Right,
}

impl Direction {
    /// Every direction.
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Unit vector in screen space.
    pub fn unit(self) -> Vec2 {
        match self {
            Self::Up => Vec2::new(0.0, -1.0),
            Self::Down => Vec2::new(0.0, 1.0),
            Self::Left => Vec2::new(-1.0, 0.0),
            Self::Right => Vec2::new(1.0, 0.0),
        }
    }

    /// `true` for up and down.
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// `true` when one direction is vertical and the other horizontal.
    pub fn is_perpendicular_to(self, other: Direction) -> bool {
        self.is_vertical() != other.is_vertical()
    }
}

/// Direction of the leg `p0 -> p1`.
///
/// `None` for zero-length legs and for legs that are not axis-aligned.
pub fn segment_direction(p0: Point, p1: Point) -> Option<Direction> {
    let dx = p1.x - p0.x;
    let dy = p1.y - p0.y;
    let flat_x = dx.abs() <= AXIS_EPS;
    let flat_y = dy.abs() <= AXIS_EPS;
    match (flat_x, flat_y) {
        (true, true) | (false, false) => None,
        (true, false) => Some(if dy > 0.0 {
            Direction::Down
        } else {
            Direction::Up
        }),
        (false, true) => Some(if dx > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/direction.rs"]
mod tests;
