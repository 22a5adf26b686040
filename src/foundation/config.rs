use crate::{
    animation::ease::Ease,
    foundation::core::ViewportClass,
    foundation::error::{RoadmapError, RoadmapResult},
};

/// Storage key under which the progress snapshot is persisted.
pub const DEFAULT_STORAGE_KEY: &str = "roadmapProgress";

/// Engine-wide tunables. Every field has a default, so a partial JSON file is valid.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoadmapConfig {
    /// Node placement constants.
    pub layout: LayoutConfig,
    /// Zig-zag path shape.
    pub path: PathConfig,
    /// Avatar animation timing.
    pub animation: AnimationConfig,
    /// Delay between a checkpoint click and navigation to its lesson.
    pub navigation_delay_ms: u64,
    /// Durable storage key for the progress snapshot.
    pub storage_key: String,
    /// Reject clicks on checkpoints beyond the next one.
    pub sequential: bool,
}

impl Default for RoadmapConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            path: PathConfig::default(),
            animation: AnimationConfig::default(),
            navigation_delay_ms: 1000,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            sequential: true,
        }
    }
}

/// Node placement constants.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Metrics for phones.
    pub mobile: ClassMetrics,
    /// Metrics for wide viewports.
    pub desktop: ClassMetrics,
    /// Inset of interior checkpoints from the container edges.
    pub horizontal_padding: f64,
    /// Container widths below this are laid out as mobile.
    pub mobile_breakpoint: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mobile: ClassMetrics {
                vertical_spacing: 150.0,
                default_width: 300.0,
            },
            desktop: ClassMetrics {
                vertical_spacing: 200.0,
                default_width: 480.0,
            },
            horizontal_padding: 60.0,
            mobile_breakpoint: 768.0,
        }
    }
}

impl LayoutConfig {
    /// Metrics for `class`.
    pub fn metrics(&self, class: ViewportClass) -> &ClassMetrics {
        match class {
            ViewportClass::Mobile => &self.mobile,
            ViewportClass::Desktop => &self.desktop,
        }
    }
}

/// Per-device-class layout metrics.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassMetrics {
    /// Vertical distance between consecutive checkpoints.
    pub vertical_spacing: f64,
    /// Width used before the container has been measured.
    pub default_width: f64,
}

/// Zig-zag path shape.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathConfig {
    /// Quarter-arc radius at rounded corners.
    pub corner_radius: f64,
    /// Distance of the two horizontal legs from the vertical midpoint.
    pub zigzag_offset: f64,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            corner_radius: 20.0,
            zigzag_offset: 40.0,
        }
    }
}

/// Avatar animation timing.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationConfig {
    /// Length of one animation session.
    pub duration_ms: u64,
    /// Timing curve applied to every session.
    pub ease: Ease,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: 1000,
            ease: Ease::InOutCubic,
        }
    }
}

impl RoadmapConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json(s: &str) -> RoadmapResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values the layout, geometry or storage cannot work with.
    pub fn validate(&self) -> RoadmapResult<()> {
        for (name, m) in [("mobile", &self.layout.mobile), ("desktop", &self.layout.desktop)] {
            if !(m.vertical_spacing.is_finite() && m.vertical_spacing > 0.0) {
                return Err(RoadmapError::validation(format!(
                    "layout.{name}.vertical_spacing must be finite and > 0"
                )));
            }
            if !(m.default_width.is_finite() && m.default_width > 0.0) {
                return Err(RoadmapError::validation(format!(
                    "layout.{name}.default_width must be finite and > 0"
                )));
            }
        }
        if !(self.layout.horizontal_padding.is_finite() && self.layout.horizontal_padding >= 0.0) {
            return Err(RoadmapError::validation(
                "layout.horizontal_padding must be finite and >= 0",
            ));
        }
        if !(self.layout.mobile_breakpoint.is_finite() && self.layout.mobile_breakpoint > 0.0) {
            return Err(RoadmapError::validation(
                "layout.mobile_breakpoint must be finite and > 0",
            ));
        }
        if !(self.path.corner_radius.is_finite() && self.path.corner_radius >= 0.0) {
            return Err(RoadmapError::validation(
                "path.corner_radius must be finite and >= 0",
            ));
        }
        if !(self.path.zigzag_offset.is_finite() && self.path.zigzag_offset > 0.0) {
            return Err(RoadmapError::validation(
                "path.zigzag_offset must be finite and > 0",
            ));
        }
        if self.animation.duration_ms == 0 {
            return Err(RoadmapError::validation("animation.duration_ms must be > 0"));
        }
        if self.storage_key.trim().is_empty() {
            return Err(RoadmapError::validation("storage_key must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
