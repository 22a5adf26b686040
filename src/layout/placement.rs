use crate::{
    foundation::config::LayoutConfig,
    foundation::core::{Point, ViewportClass},
};

/// Measured container, or the absence of a measurement.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Measured container width; `None` before the first measurement.
    pub container_width: Option<f64>,
    /// Device class the layout is computed for.
    pub class: ViewportClass,
}

impl Viewport {
    /// Viewport with an explicit class.
    pub fn new(container_width: Option<f64>, class: ViewportClass) -> Self {
        Self {
            container_width,
            class,
        }
    }

    /// Viewport for a measured width, classifying it against the configured breakpoint.
    pub fn measured(width: f64, layout: &LayoutConfig) -> Self {
        Self::new(
            Some(width),
            ViewportClass::from_width(width, layout.mobile_breakpoint),
        )
    }

    /// Usable width: the measurement when it is a positive finite number, else the class default.
    pub fn effective_width(&self, layout: &LayoutConfig) -> f64 {
        self.container_width
            .filter(|w| w.is_finite() && *w > 0.0)
            .unwrap_or(layout.metrics(self.class).default_width)
    }
}

/// Pixel position of every checkpoint.
///
/// First and last nodes are centered; interior nodes alternate between the left
/// (even index) and right (odd index) padding lines.
pub fn node_positions(viewport: Viewport, count: usize, layout: &LayoutConfig) -> Vec<Point> {
    let width = viewport.effective_width(layout);
    let spacing = layout.metrics(viewport.class).vertical_spacing;
    let pad = layout.horizontal_padding;
    (0..count)
        .map(|i| {
            let x = if i == 0 || i + 1 == count {
                width * 0.5
            } else if i % 2 == 0 {
                pad
            } else {
                width - pad
            };
            Point::new(x, i as f64 * spacing)
        })
        .collect()
}

/// Height spanned by the node centers.
pub fn drawable_height(class: ViewportClass, count: usize, layout: &LayoutConfig) -> f64 {
    layout.metrics(class).vertical_spacing * count.saturating_sub(1) as f64
}

/// Cached placement, recomputed whenever the viewport changes.
#[derive(Clone, Debug)]
pub struct RoadmapLayout {
    config: LayoutConfig,
    count: usize,
    viewport: Viewport,
    points: Vec<Point>,
}

impl RoadmapLayout {
    /// Layout before the first measurement: desktop defaults.
    pub fn new(config: LayoutConfig, count: usize) -> Self {
        let viewport = Viewport::new(None, ViewportClass::Desktop);
        let points = node_positions(viewport, count, &config);
        Self {
            config,
            count,
            viewport,
            points,
        }
    }

    /// Apply a new measurement. Returns `true` when any node moved.
    pub fn measure(&mut self, viewport: Viewport) -> bool {
        self.viewport = viewport;
        let points = node_positions(viewport, self.count, &self.config);
        if points == self.points {
            return false;
        }
        tracing::debug!(
            width = viewport.effective_width(&self.config),
            class = ?viewport.class,
            "roadmap layout recomputed"
        );
        self.points = points;
        true
    }

    /// One point per checkpoint, in traversal order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Position of checkpoint `index`.
    pub fn point(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// Viewport of the last measurement.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Width the points were laid out in.
    pub fn width(&self) -> f64 {
        self.viewport.effective_width(&self.config)
    }

    /// Height spanned by the node centers.
    pub fn drawable_height(&self) -> f64 {
        drawable_height(self.viewport.class, self.count, &self.config)
    }

    /// Layout constants in use.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/placement.rs"]
mod tests;
