use crate::{
    animation::ease::Ease,
    animation::sampler::ArcLengthSampler,
    foundation::config::AnimationConfig,
    foundation::core::Point,
    geometry::command::PathSegment,
    geometry::zigzag::ZigZag,
};

/// Which curve a session travels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveKind {
    /// Whole route from the first checkpoint, replayed once after load.
    FullRoute,
    /// From the last rendered checkpoint to the new target.
    Segment,
}

/// Whether a session is in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimatorState {
    /// Marker resting on the last rendered checkpoint.
    Idle,
    /// A session is advancing the marker.
    Animating,
}

/// One in-flight traversal.
#[derive(Clone, Debug)]
pub struct AnimationSession {
    /// Checkpoint the curve starts at.
    pub from_index: usize,
    /// Checkpoint the curve ends at.
    pub to_index: usize,
    /// Full-route replay or single segment.
    pub kind: CurveKind,
    curve: PathSegment,
    sampler: ArcLengthSampler,
    elapsed_ms: f64,
}

impl AnimationSession {
    fn new(from_index: usize, to_index: usize, kind: CurveKind, curve: PathSegment) -> Self {
        let sampler = ArcLengthSampler::new(&curve.to_bez_path());
        Self {
            from_index,
            to_index,
            kind,
            curve,
            sampler,
            elapsed_ms: 0.0,
        }
    }

    /// Draw list being traveled.
    pub fn curve(&self) -> &PathSegment {
        &self.curve
    }

    /// Arc length of the curve in pixels.
    pub fn total_length(&self) -> f64 {
        self.sampler.total_length()
    }

    /// Time spent in this session so far.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }
}

/// Drives the avatar marker along the roadmap.
///
/// Idle: the marker rests on `last_rendered`. Animating: a session is active and the
/// marker is resampled on every tick. Targets arriving mid-session are held until the
/// session completes.
#[derive(Clone, Debug)]
pub struct AvatarAnimator {
    duration_ms: f64,
    ease: Ease,
    shape: ZigZag,
    last_rendered: usize,
    // Set until the first request after load; that request may replay the whole route.
    replay_pending: bool,
    session: Option<AnimationSession>,
    deferred_target: Option<usize>,
    progress: f64,
    position: Option<Point>,
}

impl AvatarAnimator {
    /// Idle animator at checkpoint 0 that will replay the route on its first request.
    pub fn new(config: &AnimationConfig, shape: ZigZag) -> Self {
        Self {
            duration_ms: config.duration_ms as f64,
            ease: config.ease,
            shape,
            last_rendered: 0,
            replay_pending: true,
            session: None,
            deferred_target: None,
            progress: 0.0,
            position: None,
        }
    }

    /// Idle or animating.
    pub fn state(&self) -> AnimatorState {
        if self.session.is_some() {
            AnimatorState::Animating
        } else {
            AnimatorState::Idle
        }
    }

    /// Checkpoint the marker last arrived at.
    pub fn last_rendered_index(&self) -> usize {
        self.last_rendered
    }

    /// Eased progress of the current session; held at its final value while idle.
    pub fn progress_value(&self) -> f64 {
        self.progress
    }

    /// Marker position, once a layout has been seen.
    pub fn position(&self) -> Option<Point> {
        self.position
    }

    /// The in-flight session, if any.
    pub fn session(&self) -> Option<&AnimationSession> {
        self.session.as_ref()
    }

    /// Target held until the current session completes.
    pub fn deferred_target(&self) -> Option<usize> {
        self.deferred_target
    }

    /// Ask the avatar to travel to `target`.
    ///
    /// Returns `true` when a session started. Targets at or behind the last rendered
    /// checkpoint are ignored; targets arriving mid-session are deferred. The first
    /// request after load travels the full route from checkpoint 0.
    pub fn request(&mut self, target: usize, points: &[Point]) -> bool {
        let Some(last) = points.len().checked_sub(1) else {
            return false;
        };
        let target = target.min(last);
        if self.session.is_some() {
            if target > self.deferred_target.unwrap_or(0) {
                tracing::debug!(target, "avatar target deferred until the current session ends");
                self.deferred_target = Some(target);
            }
            return false;
        }
        let replay = std::mem::take(&mut self.replay_pending);
        if target <= self.last_rendered {
            return false;
        }

        let (from, kind) = if replay {
            (0, CurveKind::FullRoute)
        } else {
            (self.last_rendered, CurveKind::Segment)
        };
        let curve = self.shape.between(points, from, target);
        let session = AnimationSession::new(from, target, kind, curve);
        tracing::debug!(
            from,
            to = target,
            ?kind,
            length = session.total_length(),
            "avatar animation started"
        );
        self.position = session.sampler.position_at(0.0).or(self.position);
        self.progress = 0.0;
        self.session = Some(session);
        true
    }

    /// Advance the active session by `dt_ms`.
    ///
    /// Returns the checkpoint index reached when a session completes.
    pub fn tick(&mut self, dt_ms: f64, points: &[Point]) -> Option<usize> {
        let session = self.session.as_mut()?;
        session.elapsed_ms += dt_ms.max(0.0);
        let linear = (session.elapsed_ms / self.duration_ms).min(1.0);
        self.progress = self.ease.progress(session.elapsed_ms, self.duration_ms);
        if let Some(p) = session.sampler.position_at(self.progress) {
            self.position = Some(p);
        }
        if linear < 1.0 {
            return None;
        }

        let reached = session.to_index;
        self.session = None;
        self.last_rendered = reached;
        self.progress = 1.0;
        self.position = points.get(reached).copied().or(self.position);
        tracing::debug!(index = reached, "avatar animation completed");

        if let Some(next) = self.deferred_target.take() {
            self.request(next, points);
        }
        Some(reached)
    }

    /// Cancel any session and jump to `index` without animating.
    pub fn snap_to(&mut self, index: usize, points: &[Point]) {
        if let Some(session) = self.session.take() {
            tracing::debug!(
                from = session.from_index,
                to = session.to_index,
                "avatar animation cancelled"
            );
        }
        self.deferred_target = None;
        let index = index.min(points.len().saturating_sub(1));
        self.last_rendered = index;
        self.replay_pending = false;
        self.progress = 0.0;
        self.position = points.get(index).copied();
    }

    /// Re-anchor after the node positions changed.
    ///
    /// An active session is rebuilt on the new points and keeps its progress.
    pub fn relayout(&mut self, points: &[Point]) {
        match self.session.take() {
            Some(old) => {
                let curve = self.shape.between(points, old.from_index, old.to_index);
                let mut session =
                    AnimationSession::new(old.from_index, old.to_index, old.kind, curve);
                session.elapsed_ms = old.elapsed_ms;
                self.position = session
                    .sampler
                    .position_at(self.progress)
                    .or(self.position);
                self.session = Some(session);
            }
            None => {
                let index = self.last_rendered.min(points.len().saturating_sub(1));
                self.position = points.get(index).copied();
            }
        }
    }

    /// Drop any in-flight session without moving the marker.
    pub fn stop(&mut self) {
        self.session = None;
        self.deferred_target = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/avatar.rs"]
mod tests;
