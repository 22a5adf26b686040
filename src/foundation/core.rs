pub use kurbo::{BezPath, Point, Vec2};

/// Device class the roadmap is laid out for.
///
/// Computed once from the measured container and threaded explicitly into
/// layout and animation configuration.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ViewportClass {
    /// Narrow viewport (phones).
    Mobile,
    /// Wide viewport.
    #[default]
    Desktop,
}

impl ViewportClass {
    /// Classify a container width against a breakpoint; widths strictly below it are mobile.
    pub fn from_width(width: f64, breakpoint: f64) -> Self {
        if width < breakpoint {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    /// Map a plain `is_mobile` flag to a class.
    pub fn from_mobile_flag(is_mobile: bool) -> Self {
        if is_mobile { Self::Mobile } else { Self::Desktop }
    }

    /// `true` for [`ViewportClass::Mobile`].
    pub fn is_mobile(self) -> bool {
        matches!(self, Self::Mobile)
    }
}

/// Approximate point equality, used where curves are compared after cubic approximation.
pub fn points_close(a: Point, b: Point, eps: f64) -> bool {
    (a.x - b.x).abs() <= eps && (a.y - b.y).abs() <= eps
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
