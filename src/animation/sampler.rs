use kurbo::{ParamCurve as _, ParamCurveArclen as _, PathEl, PathSeg};

use crate::foundation::core::{BezPath, Point};

/// Accuracy (in pixels) of arc-length measurement and inversion.
const ARCLEN_ACCURACY: f64 = 1e-3;

/// Maps a normalized progress value to a point by distance traveled along a curve.
#[derive(Clone, Debug)]
pub struct ArcLengthSampler {
    start: Option<Point>,
    segs: Vec<PathSeg>,
    // Running total of segment lengths; `cumulative[i]` is the length through `segs[i]`.
    cumulative: Vec<f64>,
}

impl ArcLengthSampler {
    /// Measure every segment of `curve` once.
    pub fn new(curve: &BezPath) -> Self {
        let start = curve.elements().first().and_then(|el| match el {
            PathEl::MoveTo(p) => Some(*p),
            _ => None,
        });
        let segs: Vec<PathSeg> = curve.segments().collect();
        let mut total = 0.0;
        let cumulative = segs
            .iter()
            .map(|seg| {
                total += seg.arclen(ARCLEN_ACCURACY);
                total
            })
            .collect();
        Self {
            start,
            segs,
            cumulative,
        }
    }

    /// Arc length of the whole curve.
    pub fn total_length(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// `true` when the curve has no starting point.
    pub fn is_empty(&self) -> bool {
        self.start.is_none()
    }

    /// Point at `progress * total_length` along the curve. `None` for an empty curve.
    pub fn position_at(&self, progress: f64) -> Option<Point> {
        let start = self.start?;
        if self.segs.is_empty() {
            return Some(start);
        }
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        let target = progress * self.total_length();
        let idx = self
            .cumulative
            .partition_point(|&len| len < target)
            .min(self.segs.len() - 1);
        let seg = self.segs[idx];
        let seg_start = if idx == 0 { 0.0 } else { self.cumulative[idx - 1] };
        let seg_len = self.cumulative[idx] - seg_start;
        let local = (target - seg_start).clamp(0.0, seg_len);
        let t = if seg_len <= 0.0 {
            0.0
        } else if local >= seg_len {
            1.0
        } else {
            seg.inv_arclen(local, ARCLEN_ACCURACY)
        };
        Some(seg.eval(t))
    }
}

/// One-shot sampling of `curve` at `progress` in `[0, 1]`.
pub fn position(progress: f64, curve: &BezPath) -> Option<Point> {
    ArcLengthSampler::new(curve).position_at(progress)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/sampler.rs"]
mod tests;
