use crate::{
    foundation::core::Point,
    geometry::direction::Direction,
};

/// Rotational sense of a quarter-circle arc, in screen space (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sweep {
    /// Turns right on screen; SVG sweep flag 1.
    Clockwise,
    /// Turns left on screen; SVG sweep flag 0.
    CounterClockwise,
}

impl Sweep {
    /// SVG `sweep-flag`: positive-angle direction, which is clockwise on screen.
    pub fn flag(self) -> bool {
        matches!(self, Self::Clockwise)
    }

    /// [`Sweep::flag`] as the `0`/`1` digit used in path data.
    pub fn flag_digit(self) -> u8 {
        u8::from(self.flag())
    }
}

/// Rounded replacement for a sharp corner.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CornerArc {
    /// Point on the incoming leg where the straight part stops.
    pub before: Point,
    /// Point on the outgoing leg where the arc ends.
    pub after: Point,
    /// Radius actually used; may be smaller than requested.
    pub radius: f64,
    /// Rotational sense of the arc.
    pub sweep: Sweep,
}

/// Round the corner between two perpendicular legs.
///
/// Lookup over the eight turning pairs. Equal, opposite or missing directions and a
/// non-positive radius yield `None`: the path passes straight through `corner`.
pub fn corner_arc(
    dir_in: Option<Direction>,
    dir_out: Option<Direction>,
    corner: Point,
    radius: f64,
) -> Option<CornerArc> {
    let (dir_in, dir_out) = (dir_in?, dir_out?);
    if radius.is_nan() || radius <= 0.0 {
        return None;
    }
    let sweep = match (dir_in, dir_out) {
        (Direction::Up, Direction::Right) => Sweep::Clockwise,
        (Direction::Up, Direction::Left) => Sweep::CounterClockwise,
        (Direction::Down, Direction::Right) => Sweep::CounterClockwise,
        (Direction::Down, Direction::Left) => Sweep::Clockwise,
        (Direction::Right, Direction::Down) => Sweep::Clockwise,
        (Direction::Right, Direction::Up) => Sweep::CounterClockwise,
        (Direction::Left, Direction::Down) => Sweep::CounterClockwise,
        (Direction::Left, Direction::Up) => Sweep::Clockwise,
        _ => return None,
    };
    Some(CornerArc {
        before: corner - dir_in.unit() * radius,
        after: corner + dir_out.unit() * radius,
        radius,
        sweep,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/corner.rs"]
mod tests;
