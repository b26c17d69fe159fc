use std::cell::Cell;
use std::rc::Rc;

use gridsnap_common::{GridConfig, Millis, Rect, Viewport, WindowId};

use super::*;
use crate::host::{Appearance, HeadlessHost, HostCommand, HostEvent, WindowHost};
use crate::persist::UrlStateStore;
use crate::state::WindowState;

type Controller<V> = SnapController<HeadlessHost, V, UrlStateStore>;

fn controller() -> Controller<Viewport> {
    SnapController::new(
        HeadlessHost::new(),
        Viewport::new(1600.0, 960.0),
        UrlStateStore::new("/"),
        PageState::default(),
    )
}

fn open<V: ViewportSource>(ctrl: &mut Controller<V>, id: &str) -> WindowId {
    let id = WindowId::from(id);
    ctrl.open_window_as(id.clone(), "example.com").unwrap();
    ctrl.host_mut().clear_commands();
    id
}

/// Deliver every queued host echo back to the controller.
fn pump<V: ViewportSource>(ctrl: &mut Controller<V>, now: Millis) {
    for event in ctrl.host_mut().drain_events() {
        ctrl.dispatch(event, now).unwrap();
    }
}

fn user_move<V: ViewportSource>(ctrl: &mut Controller<V>, id: &WindowId, x: f64, y: f64, now: Millis) {
    let event = ctrl.host_mut().user_move(id, x, y).unwrap();
    ctrl.dispatch(event, now).unwrap();
}

fn user_resize<V: ViewportSource>(
    ctrl: &mut Controller<V>,
    id: &WindowId,
    width: f64,
    height: f64,
    now: Millis,
) {
    let event = ctrl.host_mut().user_resize(id, width, height).unwrap();
    ctrl.dispatch(event, now).unwrap();
}

#[test]
fn already_aligned_far_edge_sends_no_command() {
    let mut ctrl = controller();
    let id = open(&mut ctrl, "w1");
    ctrl.host_mut().user_resize(&id, 82.0, 60.0);
    user_move(&mut ctrl, &id, 38.0, 90.0, Millis(0));

    ctrl.tick(Millis(200)).unwrap();

    assert!(ctrl.host().commands().is_empty());
    let w = ctrl.state().window(&id).unwrap();
    assert_eq!((w.x, w.y), (38.0, 90.0));
    assert_eq!(
        ctrl.axis_phase(&id, Axis::Position, Millis(200)),
        AxisPhase::Settled
    );
    assert_eq!(ctrl.sink().writes(), 2);
}

#[test]
fn off_grid_move_snaps_and_ignores_echo() {
    let mut ctrl = controller();
    let id = open(&mut ctrl, "w1");
    user_move(&mut ctrl, &id, 12.0, 95.0, Millis(0));
    assert_eq!(
        ctrl.axis_phase(&id, Axis::Position, Millis(0)),
        AxisPhase::PendingDebounce { due: Millis(200) }
    );

    ctrl.tick(Millis(200)).unwrap();
    assert_eq!(
        ctrl.host().commands(),
        &[HostCommand::Move {
            id: id.clone(),
            x: 0.0,
            y: 90.0
        }]
    );

    pump(&mut ctrl, Millis(200));
    assert_eq!(ctrl.next_deadline(), None);
    assert_eq!(
        ctrl.axis_phase(&id, Axis::Position, Millis(200)),
        AxisPhase::Snapping {
            until: Millis(400)
        }
    );
    assert_eq!(
        ctrl.axis_phase(&id, Axis::Position, Millis(400)),
        AxisPhase::Settled
    );

    let w = ctrl.state().window(&id).unwrap();
    assert_eq!((w.x, w.y), (0.0, 90.0));
    assert_eq!((w.grid_x, w.grid_y), (Some(0.0), Some(3.0)));
}

#[test]
fn notifications_after_guard_are_accepted() {
    let mut ctrl = controller();
    let id = open(&mut ctrl, "w1");
    user_move(&mut ctrl, &id, 12.0, 95.0, Millis(0));
    ctrl.tick(Millis(200)).unwrap();
    pump(&mut ctrl, Millis(250));

    user_move(&mut ctrl, &id, 13.0, 95.0, Millis(450));
    assert_eq!(ctrl.next_deadline(), Some(Millis(650)));
}

#[test]
fn later_notification_supersedes_pending_timer() {
    let mut ctrl = controller();
    let id = open(&mut ctrl, "w1");
    user_move(&mut ctrl, &id, 12.0, 95.0, Millis(0));
    user_move(&mut ctrl, &id, 52.0, 95.0, Millis(150));
    assert_eq!(ctrl.next_deadline(), Some(Millis(350)));

    ctrl.tick(Millis(200)).unwrap();
    assert!(ctrl.host().commands().is_empty());

    ctrl.tick(Millis(350)).unwrap();
    assert_eq!(
        ctrl.host().commands(),
        &[HostCommand::Move {
            id: id.clone(),
            x: 40.0,
            y: 90.0
        }]
    );
}

#[test]
fn axes_are_debounced_independently() {
    let mut ctrl = controller();
    let id = open(&mut ctrl, "w1");
    user_move(&mut ctrl, &id, 12.0, 95.0, Millis(0));
    assert_eq!(
        ctrl.axis_phase(&id, Axis::Dimension, Millis(0)),
        AxisPhase::Idle
    );
    user_resize(&mut ctrl, &id, 410.0, 300.0, Millis(100));
    assert_eq!(
        ctrl.axis_phase(&id, Axis::Dimension, Millis(100)),
        AxisPhase::PendingDebounce { due: Millis(300) }
    );
    assert_eq!(ctrl.next_deadline(), Some(Millis(200)));
}

#[test]
fn move_within_snap_tolerance_keeps_live_position() {
    let mut ctrl = controller();
    let id = open(&mut ctrl, "w1");
    user_move(&mut ctrl, &id, 41.0, 90.0, Millis(0));
    ctrl.tick(Millis(200)).unwrap();

    assert!(ctrl.host().commands().is_empty());
    let w = ctrl.state().window(&id).unwrap();
    assert_eq!((w.x, w.y), (41.0, 90.0));
    assert_eq!(
        ctrl.axis_phase(&id, Axis::Position, Millis(200)),
        AxisPhase::Settled
    );
}

#[test]
fn move_just_past_snap_tolerance_is_snapped() {
    let mut ctrl = controller();
    let id = open(&mut ctrl, "w1");
    user_move(&mut ctrl, &id, 41.5, 90.0, Millis(0));
    ctrl.tick(Millis(200)).unwrap();

    assert_eq!(
        ctrl.host().commands(),
        &[HostCommand::Move {
            id: id.clone(),
            x: 40.0,
            y: 90.0
        }]
    );
    assert_eq!(ctrl.state().window(&id).unwrap().x, 40.0);
}

#[test]
fn resize_within_snap_tolerance_keeps_live_size() {
    let mut ctrl = controller();
    let id = open(&mut ctrl, "w1");
    user_resize(&mut ctrl, &id, 401.0, 300.0, Millis(0));
    ctrl.tick(Millis(200)).unwrap();

    assert!(ctrl.host().commands().is_empty());
    let w = ctrl.state().window(&id).unwrap();
    assert_eq!((w.width, w.height), (401.0, 300.0));
}

#[test]
fn one_axis_near_fullscreen_is_still_snapped() {
    let mut ctrl = controller();
    let wide = open(&mut ctrl, "wide");
    let tall = open(&mut ctrl, "tall");
    user_resize(&mut ctrl, &wide, 1595.0, 500.0, Millis(0));
    user_resize(&mut ctrl, &tall, 500.0, 955.0, Millis(0));
    ctrl.tick(Millis(200)).unwrap();

    let commands = ctrl.host().commands();
    assert!(commands.contains(&HostCommand::Resize {
        id: wide.clone(),
        width: 1600.0,
        height: 510.0
    }));
    assert!(commands.contains(&HostCommand::Resize {
        id: tall.clone(),
        width: 520.0,
        height: 960.0
    }));
}

#[test]
fn near_fullscreen_resize_is_not_snapped() {
    let mut ctrl = controller();
    let id = open(&mut ctrl, "w1");
    user_resize(&mut ctrl, &id, 1595.0, 955.0, Millis(0));
    ctrl.tick(Millis(200)).unwrap();

    assert!(ctrl.host().commands().is_empty());
    let w = ctrl.state().window(&id).unwrap();
    assert_eq!((w.width, w.height), (1595.0, 955.0));
    assert_eq!(
        ctrl.axis_phase(&id, Axis::Dimension, Millis(200)),
        AxisPhase::Settled
    );
}

#[test]
fn resize_outside_fullscreen_tolerance_is_snapped() {
    let mut ctrl = controller();
    let id = open(&mut ctrl, "w1");
    user_resize(&mut ctrl, &id, 1585.0, 945.0, Millis(0));
    ctrl.tick(Millis(200)).unwrap();

    assert_eq!(
        ctrl.host().commands(),
        &[HostCommand::Resize {
            id: id.clone(),
            width: 1600.0,
            height: 960.0
        }]
    );
    let w = ctrl.state().window(&id).unwrap();
    assert_eq!((w.width, w.height), (1600.0, 960.0));
}

#[test]
fn close_drops_pending_timers() {
    let mut ctrl = controller();
    let id = open(&mut ctrl, "w1");
    user_move(&mut ctrl, &id, 12.0, 95.0, Millis(0));
    assert!(ctrl.next_deadline().is_some());

    ctrl.dispatch(HostEvent::Closed(id.clone()), Millis(50)).unwrap();
    assert_eq!(ctrl.next_deadline(), None);
    assert!(ctrl.state().is_empty());

    ctrl.tick(Millis(200)).unwrap();
    ctrl.on_move(&id, Rect::new(0.0, 0.0, 1.0, 1.0), Millis(300))
        .unwrap();
    assert_eq!(ctrl.next_deadline(), None);
    assert!(ctrl.host().commands().is_empty());
}

#[test]
fn close_window_tells_host_and_ignores_echo() {
    let mut ctrl = controller();
    let a = open(&mut ctrl, "a");
    let _b = open(&mut ctrl, "b");

    ctrl.close_window(&a).unwrap();
    assert_eq!(ctrl.host().window_count(), 1);
    assert_eq!(ctrl.host().commands(), &[HostCommand::Close(a.clone())]);

    let writes = ctrl.sink().writes();
    pump(&mut ctrl, Millis(0));
    assert_eq!(ctrl.state().len(), 1);
    assert_eq!(ctrl.sink().writes(), writes);
}

#[test]
fn minimize_then_restore_reproduces_geometry() {
    let mut ctrl = controller();
    let id = open(&mut ctrl, "w1");
    ctrl.host_mut().user_move(&id, 40.0, 60.0);
    let before = Rect::new(40.0, 60.0, 400.0, 300.0);

    ctrl.dispatch(HostEvent::Minimized(id.clone()), Millis(0))
        .unwrap();
    {
        let host_window = ctrl.host().window(&id).unwrap();
        assert_eq!(host_window.content, None);
        assert_eq!(host_window.appearance, Appearance::Minimized);
        let w = ctrl.state().window(&id).unwrap();
        assert!(w.is_minimized);
        assert_eq!(w.saved_before_minimize, Some(before));
        assert_eq!(w.saved_url, "http://example.com");
    }

    // The widget collapses the window while minimized.
    ctrl.host_mut().user_resize(&id, 400.0, 30.0);
    ctrl.host_mut().user_move(&id, 0.0, 930.0);

    ctrl.dispatch(HostEvent::Restored(id.clone()), Millis(50))
        .unwrap();
    assert_eq!(ctrl.host().frame(&id), Some(before));
    assert_eq!(ctrl.host().content(&id).as_deref(), Some("http://example.com"));
    assert_eq!(
        ctrl.host().window(&id).unwrap().appearance,
        Appearance::Normal
    );

    let w = ctrl.state().window(&id).unwrap();
    assert!(!w.is_minimized && !w.is_maximized);
    assert_eq!(w.frame(), before);
    assert_eq!(w.saved_before_minimize, None);

    pump(&mut ctrl, Millis(50));
    assert_eq!(ctrl.next_deadline(), None);
}

#[test]
fn maximize_after_minimize_restores_content() {
    let mut ctrl = controller();
    let id = open(&mut ctrl, "w1");
    ctrl.on_minimize(&id).unwrap();
    ctrl.on_maximize(&id).unwrap();

    let w = ctrl.state().window(&id).unwrap();
    assert!(w.is_maximized);
    assert!(!w.is_minimized);
    assert_eq!(ctrl.host().content(&id).as_deref(), Some("http://example.com"));
    assert_eq!(
        ctrl.host().window(&id).unwrap().appearance,
        Appearance::Normal
    );
}

#[test]
fn repeated_minimize_keeps_first_saved_geometry() {
    let mut ctrl = controller();
    let id = open(&mut ctrl, "w1");
    ctrl.on_minimize(&id).unwrap();
    ctrl.host_mut().user_move(&id, 500.0, 500.0);
    ctrl.on_minimize(&id).unwrap();
    assert_eq!(
        ctrl.state().window(&id).unwrap().saved_before_minimize,
        Some(Rect::new(10.0, 10.0, 400.0, 300.0))
    );
}

#[test]
fn reset_returns_to_original_size() {
    let mut ctrl = controller();
    let id = open(&mut ctrl, "w1");
    user_resize(&mut ctrl, &id, 600.0, 450.0, Millis(0));
    ctrl.tick(Millis(200)).unwrap();
    assert!(ctrl.host().commands().is_empty());
    assert_eq!(ctrl.state().window(&id).unwrap().width, 600.0);

    ctrl.reset_size(&id, Millis(300)).unwrap();
    assert_eq!(
        ctrl.host().commands(),
        &[HostCommand::Resize {
            id: id.clone(),
            width: 400.0,
            height: 300.0
        }]
    );
    let w = ctrl.state().window(&id).unwrap();
    assert_eq!((w.width, w.height), (400.0, 300.0));
    assert_eq!(
        ctrl.axis_phase(&id, Axis::Dimension, Millis(300)),
        AxisPhase::Snapping {
            until: Millis(500)
        }
    );
}

#[test]
fn unknown_window_notifications_are_no_ops() {
    let mut ctrl = controller();
    let _id = open(&mut ctrl, "w1");
    let writes = ctrl.sink().writes();
    let ghost = WindowId::from("ghost");

    for event in [
        HostEvent::Moved(ghost.clone(), Rect::new(1.0, 2.0, 3.0, 4.0)),
        HostEvent::Resized(ghost.clone(), 3.0, 4.0),
        HostEvent::Minimized(ghost.clone()),
        HostEvent::Maximized(ghost.clone()),
        HostEvent::Restored(ghost.clone()),
        HostEvent::Closed(ghost.clone()),
    ] {
        ctrl.dispatch(event, Millis(0)).unwrap();
    }
    ctrl.reset_size(&ghost, Millis(0)).unwrap();
    ctrl.close_window(&ghost).unwrap();

    assert_eq!(ctrl.next_deadline(), None);
    assert!(ctrl.host().commands().is_empty());
    assert_eq!(ctrl.sink().writes(), writes);
}

#[test]
fn timer_without_live_frame_is_a_no_op() {
    let mut state = PageState::default();
    let id = WindowId::from("offscreen");
    state.insert(WindowState::new(
        id.clone(),
        "http://example.com",
        Rect::new(12.0, 95.0, 400.0, 300.0),
    ));
    let mut ctrl = SnapController::new(
        HeadlessHost::new(),
        Viewport::new(1600.0, 960.0),
        UrlStateStore::new("/"),
        state,
    );

    ctrl.on_move(&id, Rect::new(12.0, 95.0, 400.0, 300.0), Millis(0))
        .unwrap();
    ctrl.tick(Millis(200)).unwrap();
    assert!(ctrl.host().commands().is_empty());
    assert_eq!(ctrl.sink().writes(), 0);
}

#[test]
fn open_window_cascades_and_normalizes() {
    let mut ctrl = controller();
    let ids: Vec<WindowId> = (0..3)
        .map(|_| ctrl.open_window("a.example").unwrap())
        .collect();

    let origins: Vec<(f64, f64)> = ids
        .iter()
        .map(|id| {
            let frame = ctrl.host().frame(id).unwrap();
            (frame.x, frame.y)
        })
        .collect();
    assert_eq!(origins, vec![(10.0, 10.0), (30.0, 30.0), (50.0, 50.0)]);
    assert_ne!(ids[0], ids[1]);

    let first = ctrl.state().window(&ids[0]).unwrap();
    assert_eq!(first.url, "http://a.example");
    assert_eq!((first.width, first.height), (400.0, 300.0));
    assert_eq!(first.original_size(), (400.0, 300.0));
    assert_eq!(first.grid_x, Some(0.25));
    assert_eq!(ctrl.sink().writes(), 3);
}

#[test]
fn open_window_without_url_fails() {
    let mut ctrl = controller();
    assert!(ctrl.open_window("   ").is_err());
    assert!(ctrl.state().is_empty());
    assert_eq!(ctrl.host().window_count(), 0);
}

#[test]
fn open_window_with_existing_id_is_rejected() {
    let mut ctrl = controller();
    let id = open(&mut ctrl, "w1");
    assert!(ctrl.open_window_as(id, "other.example").is_err());
    assert_eq!(ctrl.state().len(), 1);
}

#[test]
fn attach_all_replays_flags() {
    let mut state = PageState::default();
    let normal = WindowId::from("normal");
    let minimized = WindowId::from("min");
    let maximized = WindowId::from("max");

    let mut w = WindowState::new(
        normal.clone(),
        "http://normal.example",
        Rect::new(0.0, 0.0, 400.0, 300.0),
    );
    w.saved_url = "http://saved.example".into();
    state.insert(w);
    let mut w = WindowState::new(
        minimized.clone(),
        "http://min.example",
        Rect::new(40.0, 30.0, 400.0, 300.0),
    );
    w.is_minimized = true;
    state.insert(w);
    let mut w = WindowState::new(
        maximized.clone(),
        "http://max.example",
        Rect::new(80.0, 60.0, 400.0, 300.0),
    );
    w.is_maximized = true;
    w.saved_url = "http://max.example/deep".into();
    state.insert(w);

    let mut ctrl = SnapController::new(
        HeadlessHost::new(),
        Viewport::new(1600.0, 960.0),
        UrlStateStore::new("/"),
        state,
    );
    ctrl.attach_all().unwrap();
    pump(&mut ctrl, Millis(0));

    let host = ctrl.host();
    assert_eq!(host.window_count(), 3);
    assert_eq!(host.content(&normal).as_deref(), Some("http://saved.example"));
    let min_window = host.window(&minimized).unwrap();
    assert!(min_window.minimized);
    assert_eq!(min_window.content, None);
    assert_eq!(min_window.appearance, Appearance::Minimized);
    assert!(host.window(&maximized).unwrap().maximized);
    assert_eq!(
        host.content(&maximized).as_deref(),
        Some("http://max.example/deep")
    );

    assert_eq!(
        ctrl.state().window(&minimized).unwrap().saved_url,
        "http://min.example"
    );
    assert!(ctrl.state().window(&minimized).unwrap().is_minimized);
    assert_eq!(ctrl.sink().writes(), 1);
}

#[test]
fn attach_all_skips_window_the_host_refuses() {
    let mut state = PageState::default();
    for id in ["a", "b"] {
        state.insert(WindowState::new(
            WindowId::from(id),
            format!("http://{id}.example"),
            Rect::new(40.0, 30.0, 400.0, 300.0),
        ));
    }
    let mut host = HeadlessHost::new();
    let a = WindowId::from("a");
    host.open(&a, Rect::new(0.0, 0.0, 100.0, 100.0), "http://stale.example")
        .unwrap();

    let mut ctrl = SnapController::new(
        host,
        Viewport::new(1600.0, 960.0),
        UrlStateStore::new("/"),
        state,
    );
    ctrl.attach_all().unwrap();

    assert_eq!(ctrl.host().window_count(), 2);
    assert!(ctrl.host().frame(&WindowId::from("b")).is_some());
    assert_eq!(ctrl.state().len(), 2);
    assert_eq!(ctrl.sink().writes(), 1);
}

#[test]
fn link_with_repeated_ids_attaches_every_window() {
    let json = r#"{"windows":[
        {"id":"a","url":"http://a","x":40,"y":30},
        {"id":"a","url":"http://a2","x":80,"y":60},
        {"id":"b","url":"http://b","x":120,"y":90}
    ]}"#;
    let store = UrlStateStore::from_url(&format!("/?pageState={}", urlencoding::encode(json)));
    let state = store.load(GridConfig::default());
    let mut ctrl = SnapController::new(
        HeadlessHost::new(),
        Viewport::new(1600.0, 960.0),
        store,
        state,
    );
    ctrl.attach_all().unwrap();

    assert_eq!(ctrl.host().window_count(), 2);
    assert_eq!(
        ctrl.host().frame(&WindowId::from("a")),
        Some(Rect::new(40.0, 30.0, 400.0, 300.0))
    );
    assert!(ctrl.host().frame(&WindowId::from("b")).is_some());
}

#[test]
fn restore_uses_per_component_saved_geometry() {
    let json = r#"{"windows":[{"id":"m","url":"http://m.example",
        "x":0,"y":900,"width":200,"height":30,"isMinimized":true,
        "_savedXBeforeMinimize":120,"_savedYBeforeMinimize":90,
        "_savedWidthBeforeMinimize":400,"_savedHeightBeforeMinimize":300}]}"#;
    let state: PageState = serde_json::from_str(json).unwrap();
    let mut ctrl = SnapController::new(
        HeadlessHost::new(),
        Viewport::new(1600.0, 960.0),
        UrlStateStore::new("/"),
        state,
    );
    ctrl.attach_all().unwrap();
    pump(&mut ctrl, Millis(0));

    let id = WindowId::from("m");
    ctrl.dispatch(HostEvent::Restored(id.clone()), Millis(10))
        .unwrap();
    assert_eq!(
        ctrl.host().frame(&id),
        Some(Rect::new(120.0, 90.0, 400.0, 300.0))
    );
    assert_eq!(ctrl.host().content(&id).as_deref(), Some("http://m.example"));
    assert!(!ctrl.state().window(&id).unwrap().is_minimized);
}

#[test]
fn attach_all_fills_missing_values() {
    let store = UrlStateStore::from_url(
        "/?pageState=%7B%22windows%22%3A%5B%7B%22id%22%3A%22a%22%2C%22url%22%3A%22http%3A%2F%2Fa%22%2C%22x%22%3A40%2C%22y%22%3A30%2C%22width%22%3A0%7D%5D%7D",
    );
    let state = store.load(GridConfig::default());
    assert_eq!(state.len(), 1);

    let mut ctrl = SnapController::new(
        HeadlessHost::new(),
        Viewport::new(1600.0, 960.0),
        store,
        state,
    );
    ctrl.attach_all().unwrap();

    let id = WindowId::from("a");
    assert_eq!(
        ctrl.host().frame(&id),
        Some(Rect::new(40.0, 30.0, 400.0, 300.0))
    );
    let w = ctrl.state().window(&id).unwrap();
    assert_eq!((w.grid_x, w.grid_y), (Some(1.0), Some(1.0)));
    assert_eq!(w.original_size(), (400.0, 300.0));
}

#[test]
fn viewport_change_reflows_from_grid_units() {
    let viewport = Rc::new(Cell::new(Viewport::new(1600.0, 960.0)));
    let mut ctrl = SnapController::new(
        HeadlessHost::new(),
        Rc::clone(&viewport),
        UrlStateStore::new("/"),
        PageState::default(),
    );
    let id = open(&mut ctrl, "w1");
    ctrl.host_mut().user_move(&id, 400.0, 300.0);
    ctrl.host_mut().user_resize(&id, 400.0, 300.0);
    let event = HostEvent::Moved(id.clone(), Rect::new(400.0, 300.0, 400.0, 300.0));
    ctrl.dispatch(event, Millis(0)).unwrap();
    ctrl.tick(Millis(200)).unwrap();

    viewport.set(Viewport::new(800.0, 480.0));
    ctrl.on_viewport_changed(Millis(1000)).unwrap();
    assert_eq!(
        ctrl.host().frame(&id),
        Some(Rect::new(200.0, 150.0, 200.0, 150.0))
    );
    pump(&mut ctrl, Millis(1000));
    assert_eq!(ctrl.next_deadline(), None);

    viewport.set(Viewport::new(1600.0, 960.0));
    ctrl.on_viewport_changed(Millis(2000)).unwrap();
    assert_eq!(
        ctrl.host().frame(&id),
        Some(Rect::new(400.0, 300.0, 400.0, 300.0))
    );
    assert_eq!(
        ctrl.state().window(&id).unwrap().frame(),
        Rect::new(400.0, 300.0, 400.0, 300.0)
    );
}

#[test]
fn viewport_shrink_clamps_to_margin() {
    let viewport = Rc::new(Cell::new(Viewport::new(1600.0, 960.0)));
    let mut ctrl = SnapController::new(
        HeadlessHost::new(),
        Rc::clone(&viewport),
        UrlStateStore::new("/"),
        PageState::default(),
    );
    let id = open(&mut ctrl, "full");
    ctrl.host_mut().user_move(&id, 0.0, 0.0);
    user_resize(&mut ctrl, &id, 1600.0, 960.0, Millis(0));
    ctrl.dispatch(
        HostEvent::Moved(id.clone(), Rect::new(0.0, 0.0, 1600.0, 960.0)),
        Millis(0),
    )
    .unwrap();
    ctrl.tick(Millis(200)).unwrap();

    viewport.set(Viewport::new(800.0, 600.0));
    ctrl.on_viewport_changed(Millis(1000)).unwrap();
    assert_eq!(
        ctrl.host().frame(&id),
        Some(Rect::new(0.0, 0.0, 780.0, 580.0))
    );
    assert_eq!(ctrl.state().window(&id).unwrap().grid_width, Some(39.0));
}

#[test]
fn empty_viewport_skips_reflow() {
    let mut ctrl = SnapController::new(
        HeadlessHost::new(),
        Viewport::new(0.0, 0.0),
        UrlStateStore::new("/"),
        PageState::default(),
    );
    assert!(ctrl.cell_size().is_none());
    assert!(ctrl.overlay().is_none());
    ctrl.on_viewport_changed(Millis(0)).unwrap();
    assert_eq!(ctrl.sink().writes(), 0);
}

#[test]
fn persisted_url_reloads_window_list() {
    let mut ctrl = controller();
    let id = open(&mut ctrl, "w1");
    user_move(&mut ctrl, &id, 12.0, 95.0, Millis(0));
    ctrl.tick(Millis(200)).unwrap();

    let reloaded = UrlStateStore::from_url(&ctrl.sink().url()).load(GridConfig::default());
    let w = reloaded.window(&id).unwrap();
    assert_eq!((w.x, w.y), (0.0, 90.0));
    assert_eq!(w.url, "http://example.com");
}

#[test]
fn custom_settings_change_debounce() {
    let mut ctrl = controller().with_settings(SnapSettings {
        debounce: std::time::Duration::from_millis(50),
        ..SnapSettings::default()
    });
    let id = open(&mut ctrl, "w1");
    user_move(&mut ctrl, &id, 12.0, 95.0, Millis(0));
    assert_eq!(ctrl.next_deadline(), Some(Millis(50)));
}

#[test]
fn custom_placement_changes_cascade() {
    let mut ctrl = controller().with_placement(PlacementDefaults {
        width: 320.0,
        height: 240.0,
        origin: 0.0,
        cascade_step: 40.0,
    });
    open(&mut ctrl, "a");
    let b = open(&mut ctrl, "b");
    assert_eq!(
        ctrl.host().frame(&b),
        Some(Rect::new(40.0, 40.0, 320.0, 240.0))
    );
}
