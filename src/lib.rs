//! Roadmap is the engine behind an interactive learning roadmap.
//!
//! A course is a short ordered list of checkpoints drawn top to bottom and joined by a
//! rounded zig-zag path. An avatar marker travels that path toward the next incomplete
//! checkpoint; clicking a checkpoint marks it complete, persists progress and navigates to
//! its lesson after a short delay.
//!
//! # Pipeline overview
//!
//! 1. **Layout**: `Viewport + checkpoint count -> Vec<Point>` ([`RoadmapLayout`])
//! 2. **Geometry**: consecutive points -> rounded zig-zag draw lists ([`ZigZag`])
//! 3. **Animation**: draw list -> arc-length sampled avatar position ([`AvatarAnimator`])
//! 4. **Page**: clicks, timers and persistence wired together ([`RoadmapPage`])
//! 5. **Render** (optional): [`Scene`] snapshot -> standalone SVG ([`render_svg`])
//!
//! The design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Explicit time**: nothing reads a clock; callers drive [`RoadmapPage::tick`].
//! - **Storage is best effort**: unreadable progress falls back to all-incomplete and a
//!   failed write never loses the in-memory update.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod content;
mod foundation;
mod geometry;
mod layout;
mod page;
mod progress;
mod render;

pub use animation::avatar::{AnimationSession, AnimatorState, AvatarAnimator, CurveKind};
pub use animation::ease::Ease;
pub use animation::sampler::{ArcLengthSampler, position};
pub use content::catalog::{Catalog, Checkpoint};
pub use content::lesson::LessonView;
pub use content::route::Route;
pub use foundation::config::{
    AnimationConfig, ClassMetrics, DEFAULT_STORAGE_KEY, LayoutConfig, PathConfig, RoadmapConfig,
};
pub use foundation::core::{BezPath, Point, Vec2, ViewportClass, points_close};
pub use foundation::error::{RoadmapError, RoadmapResult};
pub use geometry::command::{DrawCmd, PathSegment};
pub use geometry::corner::{CornerArc, Sweep, corner_arc};
pub use geometry::direction::{Direction, segment_direction};
pub use geometry::zigzag::{
    DEFAULT_ZIGZAG_OFFSET, ZigZag, concatenated_path, path_between, zig_zag_path,
};
pub use layout::placement::{RoadmapLayout, Viewport, drawable_height, node_positions};
pub use page::controller::{ClickOutcome, Lifecycle, NodeStatus, NodeView, RoadmapPage};
pub use page::navigate::{Navigator, RecordingNavigator};
pub use page::notify::{
    LogNotifier, Notifier, RecordingNotifier, Toast, ToastId, TrackedMessages, track,
};
pub use page::schedule::{DeferredQueue, Task};
pub use progress::state::ProgressState;
pub use progress::storage::{FileStorage, KeyValueStorage, MemoryStorage, UnavailableStorage};
pub use progress::store::{MarkOutcome, ProgressStore, SaveOutcome};
pub use render::scene::{Scene, SceneNode};
pub use render::svg::render_svg;
