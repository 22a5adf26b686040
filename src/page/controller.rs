use crate::{
    animation::avatar::{AnimatorState, AvatarAnimator},
    content::catalog::{Catalog, Checkpoint},
    content::route::Route,
    foundation::config::RoadmapConfig,
    foundation::core::Point,
    foundation::error::RoadmapResult,
    geometry::zigzag::ZigZag,
    layout::placement::{RoadmapLayout, Viewport},
    page::navigate::Navigator,
    page::notify::{Notifier, TrackedMessages, track},
    page::schedule::{DeferredQueue, Task},
    progress::storage::KeyValueStorage,
    progress::store::{MarkOutcome, ProgressStore, SaveOutcome},
    render::scene::{Scene, SceneNode},
};

/// Mount state of a [`RoadmapPage`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    /// Built but not yet measured.
    Created,
    /// Measured and reacting to input.
    Mounted,
    /// Torn down; every call is a no-op.
    Unmounted,
}

/// Result of clicking a checkpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Newly completed; navigation scheduled.
    Marked,
    /// Already complete; navigation scheduled, progress untouched.
    Revisited,
    /// Beyond the next checkpoint while sequential completion is enforced.
    Locked,
    /// No checkpoint at that index.
    OutOfRange,
    /// The page is not mounted.
    Inactive,
}

/// How a checkpoint should be drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeStatus {
    /// Marked complete.
    Completed,
    /// Where the avatar is headed.
    Current,
    /// Clickable but not complete.
    Available,
    /// Not clickable yet.
    Locked,
}

impl NodeStatus {
    /// Lowercase name, used as a CSS class.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Current => "current",
            Self::Available => "available",
            Self::Locked => "locked",
        }
    }
}

/// One checkpoint joined with its position and status.
#[derive(Clone, Debug)]
pub struct NodeView<'a> {
    /// Traversal position.
    pub index: usize,
    /// Content of the checkpoint.
    pub checkpoint: &'a Checkpoint,
    /// Node center.
    pub position: Point,
    /// Display status.
    pub status: NodeStatus,
}

/// The interactive roadmap.
///
/// Single writer of progress: only [`RoadmapPage::click`] and [`RoadmapPage::reset`]
/// mutate the store; the animator reads derived targets. Time enters through
/// [`RoadmapPage::tick`] only.
pub struct RoadmapPage<S, N, V> {
    config: RoadmapConfig,
    catalog: Catalog,
    layout: RoadmapLayout,
    store: ProgressStore<S>,
    animator: AvatarAnimator,
    queue: DeferredQueue,
    notifier: N,
    navigator: V,
    lifecycle: Lifecycle,
}

impl<S, N, V> RoadmapPage<S, N, V>
where
    S: KeyValueStorage,
    N: Notifier,
    V: Navigator,
{
    /// Validate the config and load persisted progress.
    pub fn new(
        config: RoadmapConfig,
        catalog: Catalog,
        storage: S,
        notifier: N,
        navigator: V,
    ) -> RoadmapResult<Self> {
        config.validate()?;
        let store = ProgressStore::open(storage, config.storage_key.clone(), catalog.len());
        let layout = RoadmapLayout::new(config.layout.clone(), catalog.len());
        let animator = AvatarAnimator::new(&config.animation, ZigZag::from(config.path));
        Ok(Self {
            config,
            catalog,
            layout,
            store,
            animator,
            queue: DeferredQueue::new(),
            notifier,
            navigator,
            lifecycle: Lifecycle::Created,
        })
    }

    /// Initial measurement; may start the full-route replay for a returning user.
    #[tracing::instrument(skip(self))]
    pub fn mount(&mut self, viewport: Viewport) {
        if self.lifecycle != Lifecycle::Created {
            tracing::warn!(lifecycle = ?self.lifecycle, "mount ignored");
            return;
        }
        self.lifecycle = Lifecycle::Mounted;
        self.layout.measure(viewport);
        self.animator.relayout(self.layout.points());
        self.sync_avatar();
    }

    /// Re-measure after the container changed size.
    pub fn on_resize(&mut self, viewport: Viewport) {
        if self.lifecycle != Lifecycle::Mounted {
            return;
        }
        if self.layout.measure(viewport) {
            self.animator.relayout(self.layout.points());
        }
    }

    /// Mark the checkpoint complete, announce it and schedule navigation to its lesson.
    ///
    /// Progress is written before any animation or navigation step.
    #[tracing::instrument(skip(self))]
    pub fn click(&mut self, index: usize) -> ClickOutcome {
        if self.lifecycle != Lifecycle::Mounted {
            return ClickOutcome::Inactive;
        }
        let Some(checkpoint) = self.catalog.get(index) else {
            tracing::debug!("click outside the roadmap");
            return ClickOutcome::OutOfRange;
        };
        let next = self.store.next_index();
        if self.config.sequential && index > next && !self.store.state().is_complete(index) {
            tracing::info!(next, "checkpoint is locked");
            return ClickOutcome::Locked;
        }
        let title = checkpoint.title.clone();
        let target = Route::lesson(checkpoint.slug.as_str()).path();

        let outcome = match self.store.mark_complete(index) {
            MarkOutcome::Marked(_) => ClickOutcome::Marked,
            MarkOutcome::AlreadyComplete => ClickOutcome::Revisited,
            MarkOutcome::OutOfRange => return ClickOutcome::OutOfRange,
        };
        self.notifier.success(&format!("Navigating to {title}..."));
        self.queue
            .schedule(self.config.navigation_delay_ms, Task::Navigate(target));
        self.sync_avatar();
        outcome
    }

    /// Clear all progress and snap the avatar home without animating.
    #[tracing::instrument(skip(self))]
    pub fn reset(&mut self) -> SaveOutcome {
        if self.lifecycle != Lifecycle::Mounted {
            return SaveOutcome::NotPersisted;
        }
        let messages = TrackedMessages::new(
            "Resetting progress...",
            "Progress reset!",
            "Progress was reset but could not be saved.",
        );
        let store = &mut self.store;
        let saved = track(&mut self.notifier, &messages, || match store.reset_all() {
            SaveOutcome::Persisted => Ok(()),
            SaveOutcome::NotPersisted => Err(()),
        });
        self.animator.snap_to(0, self.layout.points());
        if saved.is_ok() {
            SaveOutcome::Persisted
        } else {
            SaveOutcome::NotPersisted
        }
    }

    /// Advance the animation clock and fire due timers.
    ///
    /// Returns the checkpoint the avatar reached, if a session completed.
    pub fn tick(&mut self, dt_ms: f64) -> Option<usize> {
        if self.lifecycle != Lifecycle::Mounted {
            return None;
        }
        let reached = self.animator.tick(dt_ms, self.layout.points());
        for task in self.queue.advance(dt_ms) {
            match task {
                Task::Navigate(target) => {
                    tracing::info!(%target, "navigating");
                    self.navigator.navigate(&target);
                }
            }
        }
        reached
    }

    /// Tick at `frame_ms` until the avatar is idle and no timers remain.
    ///
    /// Returns the number of frames run; stops after `max_frames`.
    pub fn run_until_settled(&mut self, frame_ms: f64, max_frames: usize) -> usize {
        let mut frames = 0;
        while frames < max_frames && !self.is_settled() {
            self.tick(frame_ms);
            frames += 1;
        }
        frames
    }

    /// `true` when nothing is animating and no timer is pending.
    pub fn is_settled(&self) -> bool {
        self.lifecycle != Lifecycle::Mounted
            || (self.animator.state() == AnimatorState::Idle && self.queue.is_empty())
    }

    /// Stop listening for resizes, cancel animation and drop pending timers.
    pub fn unmount(&mut self) {
        if self.lifecycle == Lifecycle::Unmounted {
            return;
        }
        self.lifecycle = Lifecycle::Unmounted;
        self.animator.stop();
        self.queue.clear();
        tracing::debug!("roadmap unmounted");
    }

    fn sync_avatar(&mut self) {
        let target = self.store.next_index();
        self.animator.request(target, self.layout.points());
    }

    /// Display status of checkpoint `index`.
    pub fn status_of(&self, index: usize) -> NodeStatus {
        let next = self.store.next_index();
        if self.store.state().is_complete(index) {
            NodeStatus::Completed
        } else if index == next {
            NodeStatus::Current
        } else if index < next || !self.config.sequential {
            NodeStatus::Available
        } else {
            NodeStatus::Locked
        }
    }

    /// Every checkpoint with its position and status.
    pub fn nodes(&self) -> Vec<NodeView<'_>> {
        self.catalog
            .iter()
            .zip(self.layout.points())
            .enumerate()
            .map(|(index, (checkpoint, &position))| NodeView {
                index,
                checkpoint,
                position,
                status: self.status_of(index),
            })
            .collect()
    }

    /// Snapshot for rendering.
    pub fn scene(&self) -> Scene {
        let points = self.layout.points();
        let shape = ZigZag::from(self.config.path);
        let last = points.len().saturating_sub(1);
        let reached = self.animator.last_rendered_index();
        Scene {
            width: self.layout.width(),
            height: self.layout.drawable_height(),
            traveled: shape.concatenated(points, reached),
            remaining: shape.between(points, reached, last),
            nodes: self
                .nodes()
                .into_iter()
                .map(|n| SceneNode {
                    index: n.index,
                    title: n.checkpoint.title.clone(),
                    position: n.position,
                    status: n.status,
                })
                .collect(),
            avatar: self.animator.position(),
        }
    }

    /// Current avatar marker position.
    pub fn avatar_position(&self) -> Option<Point> {
        self.animator.position()
    }

    /// Mount state.
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Configuration in use.
    pub fn config(&self) -> &RoadmapConfig {
        &self.config
    }

    /// Checkpoints shown.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current node placement.
    pub fn layout(&self) -> &RoadmapLayout {
        &self.layout
    }

    /// Progress owner.
    pub fn store(&self) -> &ProgressStore<S> {
        &self.store
    }

    /// Avatar state machine.
    pub fn animator(&self) -> &AvatarAnimator {
        &self.animator
    }

    /// Number of timers not yet fired.
    pub fn pending_tasks(&self) -> usize {
        self.queue.len()
    }

    /// Notification sink.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Navigation sink.
    pub fn navigator(&self) -> &V {
        &self.navigator
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/controller.rs"]
mod tests;
