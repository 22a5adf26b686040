use super::*;
use crate::foundation::core::ViewportClass;
use crate::page::navigate::RecordingNavigator;
use crate::page::notify::{RecordingNotifier, Toast, ToastId};
use crate::progress::storage::{MemoryStorage, UnavailableStorage};
use crate::animation::avatar::CurveKind;

type TestPage<S> = RoadmapPage<S, RecordingNotifier, RecordingNavigator>;

const KEY: &str = "roadmapProgress";

fn page_with<S: KeyValueStorage>(storage: S, config: RoadmapConfig) -> TestPage<S> {
    RoadmapPage::new(
        config,
        Catalog::builtin(),
        storage,
        RecordingNotifier::new(),
        RecordingNavigator::new(),
    )
    .unwrap()
}

fn page(storage: MemoryStorage) -> TestPage<MemoryStorage> {
    page_with(storage, RoadmapConfig::default())
}

fn desktop(width: f64) -> Viewport {
    Viewport::new(Some(width), ViewportClass::Desktop)
}

#[test]
fn fresh_load_waits_at_the_first_checkpoint() {
    let mut p = page(MemoryStorage::new());
    p.mount(desktop(480.0));
    assert_eq!(p.store().state().as_slice(), &[false; 5]);
    assert_eq!(p.store().next_index(), 0);
    assert_eq!(p.animator().state(), AnimatorState::Idle);
    assert_eq!(p.avatar_position(), Some(Point::new(240.0, 0.0)));
    assert_eq!(p.status_of(0), NodeStatus::Current);
    assert_eq!(p.status_of(1), NodeStatus::Locked);
}

#[test]
fn click_marks_notifies_animates_then_navigates() {
    let mut p = page(MemoryStorage::new());
    p.mount(desktop(480.0));

    assert_eq!(p.click(0), ClickOutcome::Marked);
    assert_eq!(
        p.store().state().as_slice(),
        &[true, false, false, false, false]
    );
    assert_eq!(p.store().last_completed_index(), Some(0));
    assert_eq!(p.store().next_index(), 1);
    assert_eq!(
        p.notifier().toasts(),
        &[Toast::Success(
            "Navigating to Introduction to Python...".to_string()
        )]
    );

    let s = p.animator().session().unwrap();
    assert_eq!((s.from_index, s.to_index, s.kind), (0, 1, CurveKind::Segment));
    let pts = p.layout().points();
    assert_eq!(s.curve(), &ZigZag::default().build(pts[0], pts[1]));

    assert!(p.navigator().visited().is_empty());
    p.run_until_settled(16.0, 1000);
    assert_eq!(p.navigator().visited(), &["/courses/python-intro".to_string()]);
    assert_eq!(p.animator().last_rendered_index(), 1);
    assert_eq!(p.avatar_position(), Some(p.layout().points()[1]));
}

#[test]
fn returning_user_replays_the_traveled_route() {
    let storage = MemoryStorage::new().with_entry(KEY, "[true,true,false,false,false]");
    let mut p = page(storage);
    p.mount(desktop(480.0));
    let s = p.animator().session().unwrap();
    assert_eq!(s.kind, CurveKind::FullRoute);
    assert_eq!((s.from_index, s.to_index), (0, 2));
    assert_eq!(
        s.curve(),
        &ZigZag::default().concatenated(p.layout().points(), 2)
    );
}

#[test]
fn resize_moves_interior_nodes_and_keeps_ends_centered() {
    let mut p = page(MemoryStorage::new());
    p.mount(desktop(480.0));
    p.on_resize(desktop(300.0));
    let pts = p.layout().points();
    assert_eq!(pts[0].x, 150.0);
    assert_eq!(pts[4].x, 150.0);
    assert_eq!(pts[1].x, 240.0);
    assert_eq!(pts[2].x, 60.0);
    assert_eq!(p.avatar_position(), Some(Point::new(150.0, 0.0)));
}

#[test]
fn reset_snaps_home_with_a_tracked_toast() {
    let storage = MemoryStorage::new().with_entry(KEY, "[true,true,true,false,false]");
    let mut p = page(storage);
    p.mount(desktop(480.0));
    p.tick(200.0);
    assert_eq!(p.animator().state(), AnimatorState::Animating);

    assert_eq!(p.reset(), SaveOutcome::Persisted);
    assert_eq!(p.store().state().as_slice(), &[false; 5]);
    assert_eq!(p.animator().state(), AnimatorState::Idle);
    assert_eq!(p.avatar_position(), Some(p.layout().points()[0]));
    assert_eq!(p.animator().progress_value(), 0.0);
    assert_eq!(
        p.notifier().toasts(),
        &[
            Toast::Pending(ToastId(0), "Resetting progress...".to_string()),
            Toast::Resolved(ToastId(0), "Progress reset!".to_string()),
        ]
    );
    assert_eq!(
        p.store().storage().get(KEY),
        Some("[false,false,false,false,false]")
    );
}

#[test]
fn reset_on_broken_storage_reports_failure_but_clears_memory() {
    let mut p = page_with(UnavailableStorage, RoadmapConfig::default());
    p.mount(desktop(480.0));
    p.click(0);
    assert_eq!(p.reset(), SaveOutcome::NotPersisted);
    assert_eq!(p.store().completed_count(), 0);
    assert!(matches!(
        p.notifier().toasts().last(),
        Some(Toast::Rejected(_, _))
    ));
}

#[test]
fn sequential_mode_locks_future_checkpoints() {
    let mut p = page(MemoryStorage::new());
    p.mount(desktop(480.0));
    assert_eq!(p.click(3), ClickOutcome::Locked);
    assert_eq!(p.store().completed_count(), 0);
    assert!(p.notifier().toasts().is_empty());
    assert_eq!(p.pending_tasks(), 0);
}

#[test]
fn free_mode_jumps_with_a_multi_leg_curve() {
    let config = RoadmapConfig {
        sequential: false,
        ..RoadmapConfig::default()
    };
    let mut p = page_with(MemoryStorage::new(), config);
    p.mount(desktop(480.0));
    assert_eq!(p.status_of(3), NodeStatus::Available);
    assert_eq!(p.click(2), ClickOutcome::Marked);
    let s = p.animator().session().unwrap();
    assert_eq!((s.from_index, s.to_index), (0, 3));
    assert_eq!(p.status_of(0), NodeStatus::Available);
    assert_eq!(p.status_of(2), NodeStatus::Completed);
}

#[test]
fn revisiting_navigates_without_touching_progress() {
    let storage = MemoryStorage::new().with_entry(KEY, "[true,false,false,false,false]");
    let mut p = page(storage);
    p.mount(desktop(480.0));
    p.run_until_settled(16.0, 1000);
    assert_eq!(p.click(0), ClickOutcome::Revisited);
    assert_eq!(p.store().completed_count(), 1);
    p.run_until_settled(16.0, 1000);
    assert_eq!(p.navigator().visited(), &["/courses/python-intro".to_string()]);
}

#[test]
fn rapid_clicks_are_recorded_in_order() {
    let mut p = page(MemoryStorage::new());
    p.mount(desktop(480.0));
    assert_eq!(p.click(0), ClickOutcome::Marked);
    assert_eq!(p.click(1), ClickOutcome::Marked);
    assert_eq!(p.store().next_index(), 2);
    assert_eq!(p.animator().deferred_target(), Some(2));
    p.run_until_settled(16.0, 1000);
    assert_eq!(p.animator().last_rendered_index(), 2);
    assert_eq!(
        p.navigator().visited(),
        &[
            "/courses/python-intro".to_string(),
            "/courses/python-data-structures".to_string()
        ]
    );
}

#[test]
fn unmount_stops_everything() {
    let mut p = page(MemoryStorage::new());
    p.mount(desktop(480.0));
    p.click(0);
    p.unmount();
    assert_eq!(p.lifecycle(), Lifecycle::Unmounted);
    assert_eq!(p.animator().state(), AnimatorState::Idle);
    assert_eq!(p.pending_tasks(), 0);
    assert_eq!(p.tick(5000.0), None);
    assert!(p.navigator().visited().is_empty());
    assert_eq!(p.click(1), ClickOutcome::Inactive);

    let before = p.layout().points().to_vec();
    p.on_resize(desktop(300.0));
    assert_eq!(p.layout().points(), before.as_slice());
    assert!(p.is_settled());
}

#[test]
fn clicks_before_mount_and_out_of_range_are_ignored() {
    let mut p = page(MemoryStorage::new());
    assert_eq!(p.click(0), ClickOutcome::Inactive);
    p.mount(desktop(480.0));
    p.mount(desktop(300.0));
    assert_eq!(p.layout().width(), 480.0);
    assert_eq!(p.click(17), ClickOutcome::OutOfRange);
}

#[test]
fn scene_splits_traveled_and_remaining_route() {
    let storage = MemoryStorage::new().with_entry(KEY, "[true,false,false,false,false]");
    let mut p = page(storage);
    p.mount(desktop(480.0));
    p.run_until_settled(16.0, 1000);
    let scene = p.scene();
    let pts = p.layout().points();
    assert_eq!(scene.traveled.end(), Some(pts[1]));
    assert_eq!(scene.remaining.start(), Some(pts[1]));
    assert_eq!(scene.remaining.end(), Some(pts[4]));
    assert_eq!(scene.nodes.len(), 5);
    assert_eq!(scene.nodes[0].status, NodeStatus::Completed);
    assert_eq!(scene.nodes[1].status, NodeStatus::Current);
    assert_eq!(scene.avatar, Some(pts[1]));
    assert_eq!(scene.height, 800.0);
}

#[test]
fn invalid_config_is_rejected_up_front() {
    let mut config = RoadmapConfig::default();
    config.animation.duration_ms = 0;
    let res = RoadmapPage::new(
        config,
        Catalog::builtin(),
        MemoryStorage::new(),
        RecordingNotifier::new(),
        RecordingNavigator::new(),
    );
    assert!(res.is_err());
}
