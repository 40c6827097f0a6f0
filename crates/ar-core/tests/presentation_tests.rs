// Host-side tests for the presentation state machine driven through AppState.

use ar_core::*;
use glam::{Mat4, Vec2, Vec3};

/// Renderer stand-in: every ray hits or none does.
struct FixedTarget(bool);

impl RaycastTarget for FixedTarget {
    fn intersect(&self, _ray: &Ray, _recursive: bool) -> RayHits {
        let mut hits = RayHits::new();
        if self.0 {
            hits.push(RayHit { distance: 1.0 });
        }
        hits
    }
}

const HIT: FixedTarget = FixedTarget(true);
const MISS: FixedTarget = FixedTarget(false);

fn pick(target: &FixedTarget) -> PickContext<'_> {
    PickContext {
        viewport: Viewport {
            left: 0.0,
            top: 0.0,
            width: 640.0,
            height: 480.0,
        },
        camera: CameraPose::new(
            Mat4::from_translation(Vec3::new(0.0, 0.0, 3.0)),
            Mat4::perspective_rh(1.0, 640.0 / 480.0, 0.1, 100.0),
        ),
        target: Some(target),
    }
}

fn ready_app() -> AppState {
    let mut app = AppState::new(&ExperienceConfig::default()).unwrap();
    app.session_started();
    app.model_loaded();
    app
}

fn tap_sequence(app: &mut AppState, target: &FixedTarget) -> Effects {
    let down = PointerSample {
        pointer_id: 1,
        kind: PointerKind::Touch,
        position: Vec2::new(320.0, 240.0),
        timestamp: 0.0,
    };
    app.pointer_down(down);
    let up = PointerSample {
        timestamp: 80.0,
        ..down
    };
    app.pointer_up(up, &pick(target))
}

fn assert_mode_invariants(app: &AppState) {
    if app.tracking() == AnchorTrackingState::NotTracked {
        assert_eq!(app.mode(), PresentationMode::Hidden);
    }
    let panel_visible = app.presentation().panel().map_or(false, |p| p.visible);
    let callout_visible = app
        .presentation()
        .callout()
        .sprite()
        .map_or(false, |s| s.visible);
    assert!(!(panel_visible && callout_visible));
}

#[test]
fn scenario_a_target_found_shows_callout() {
    let mut app = ready_app();
    assert_eq!(app.mode(), PresentationMode::Hidden);
    let effects = app.target_found();
    assert_eq!(app.mode(), PresentationMode::CalloutShown);
    assert_eq!(app.tracking(), AnchorTrackingState::Tracked);
    assert!(effects.contains(&SceneEffect::SetCalloutVisible(true)));
    assert!(app.presentation().callout().is_armed());
}

#[test]
fn scenario_b_tap_on_model_shows_panel_and_hides_callout() {
    let mut app = ready_app();
    app.target_found();
    let effects = tap_sequence(&mut app, &HIT);
    assert_eq!(app.mode(), PresentationMode::PanelShown);
    let panel = *app.presentation().panel().unwrap();
    assert!(panel.visible);
    assert!(matches!(
        effects.first(),
        Some(SceneEffect::BuildPanel { slide: 0, .. })
    ));
    assert!(effects.contains(&SceneEffect::SetControlsVisible(true)));
    assert!(effects.contains(&SceneEffect::SetCalloutVisible(false)));
    assert!(!app.presentation().callout().sprite().unwrap().visible);
    assert_mode_invariants(&app);
}

#[test]
fn scenario_c_close_returns_to_callout() {
    let mut app = ready_app();
    app.target_found();
    tap_sequence(&mut app, &HIT);
    let effects = app.close_panel();
    assert_eq!(app.mode(), PresentationMode::CalloutShown);
    assert_eq!(
        effects.as_slice(),
        &[
            SceneEffect::SetPanelVisible(false),
            SceneEffect::SetControlsVisible(false),
            SceneEffect::SetCalloutVisible(true),
        ]
    );
    assert!(app.presentation().callout().is_armed());
}

#[test]
fn scenario_d_prev_wraps_backwards() {
    let mut app = ready_app();
    app.target_found();
    tap_sequence(&mut app, &HIT);
    let effects = app.prev_slide();
    assert_eq!(app.presentation().slideshow().current_index(), 2);
    assert_eq!(effects.as_slice(), &[SceneEffect::ShowSlide(2)]);
    assert_eq!(app.presentation().panel().unwrap().shown_slide, 2);
}

#[test]
fn scenario_e_target_lost_hides_panel_but_keeps_slide_index() {
    let mut app = ready_app();
    app.target_found();
    tap_sequence(&mut app, &HIT);
    app.next_slide();
    app.target_lost();
    assert_eq!(app.mode(), PresentationMode::Hidden);
    assert_eq!(app.tracking(), AnchorTrackingState::NotTracked);
    assert!(!app.presentation().panel().unwrap().visible);
    assert_eq!(app.presentation().slideshow().current_index(), 1);
    assert_mode_invariants(&app);
}

#[test]
fn scenario_f_missed_tap_changes_nothing() {
    let mut app = ready_app();
    app.target_found();
    let effects = tap_sequence(&mut app, &MISS);
    assert!(effects.is_empty());
    assert_eq!(app.mode(), PresentationMode::CalloutShown);
    assert!(app.presentation().panel().is_none());
}

#[test]
fn missed_tap_does_not_dismiss_open_panel() {
    let mut app = ready_app();
    app.target_found();
    tap_sequence(&mut app, &HIT);
    tap_sequence(&mut app, &MISS);
    assert_eq!(app.mode(), PresentationMode::PanelShown);
}

#[test]
fn panel_is_built_once_and_reshown_with_current_slide() {
    let mut app = ready_app();
    app.target_found();
    tap_sequence(&mut app, &HIT);
    app.next_slide();
    app.close_panel();
    let effects = tap_sequence(&mut app, &HIT);
    assert!(!effects
        .iter()
        .any(|e| matches!(e, SceneEffect::BuildPanel { .. })));
    assert!(effects.contains(&SceneEffect::SetPanelVisible(true)));
    assert!(effects.contains(&SceneEffect::ShowSlide(1)));
    assert_eq!(app.registry().count(DecorationKind::PanelGroup), 1);
}

#[test]
fn tap_needs_tracking_and_a_loaded_model() {
    let mut app = AppState::new(&ExperienceConfig::default()).unwrap();
    app.target_found();
    // model still loading
    assert!(tap_sequence(&mut app, &HIT).is_empty());
    assert_eq!(app.mode(), PresentationMode::CalloutShown);

    app.model_loaded();
    app.target_lost();
    assert!(tap_sequence(&mut app, &HIT).is_empty());
    assert_eq!(app.mode(), PresentationMode::Hidden);
}

#[test]
fn drag_that_ends_on_model_is_not_a_tap() {
    let mut app = ready_app();
    app.target_found();
    let down = PointerSample {
        pointer_id: 3,
        kind: PointerKind::Mouse,
        position: Vec2::new(300.0, 240.0),
        timestamp: 0.0,
    };
    app.pointer_down(down);
    app.pointer_move(PointerSample {
        position: Vec2::new(340.0, 240.0),
        timestamp: 30.0,
        ..down
    });
    let effects = app.pointer_up(
        PointerSample {
            position: Vec2::new(340.0, 240.0),
            timestamp: 60.0,
            ..down
        },
        &pick(&HIT),
    );
    assert!(effects.is_empty());
    assert_eq!(app.mode(), PresentationMode::CalloutShown);
}

#[test]
fn navigation_and_close_are_ignored_without_panel() {
    let mut app = ready_app();
    app.target_found();
    assert!(app.next_slide().is_empty());
    assert!(app.prev_slide().is_empty());
    assert!(app.close_panel().is_empty());
    assert_eq!(app.presentation().slideshow().current_index(), 0);
    assert_eq!(app.mode(), PresentationMode::CalloutShown);
}

#[test]
fn repeated_target_found_keeps_panel_open() {
    let mut app = ready_app();
    app.target_found();
    tap_sequence(&mut app, &HIT);
    app.target_found();
    assert_eq!(app.mode(), PresentationMode::PanelShown);
}

#[test]
fn invariants_hold_across_event_mix() {
    let mut app = ready_app();
    let steps: [fn(&mut AppState); 8] = [
        |a| {
            a.target_found();
        },
        |a| {
            tap_sequence(a, &HIT);
        },
        |a| {
            a.next_slide();
        },
        |a| {
            a.target_lost();
        },
        |a| {
            tap_sequence(a, &HIT);
        },
        |a| {
            a.target_found();
        },
        |a| {
            a.close_panel();
        },
        |a| {
            tap_sequence(a, &MISS);
        },
    ];
    for round in 0..3 {
        for (i, step) in steps.iter().enumerate() {
            if (i + round) % 3 == 0 {
                continue;
            }
            step(&mut app);
            assert_mode_invariants(&app);
        }
    }
}

#[test]
fn failed_panel_build_falls_back_to_callout_and_reports() {
    let mut app = ready_app();
    app.target_found();
    let effects = tap_sequence(&mut app, &HIT);
    let id = effects
        .iter()
        .find_map(|e| match e {
            SceneEffect::BuildPanel { id, .. } => Some(*id),
            _ => None,
        })
        .expect("panel requested");

    let effects = app.panel_build_failed(id, "no 2d context".to_string());
    assert_eq!(app.mode(), PresentationMode::CalloutShown);
    assert!(app.presentation().panel().is_none());
    assert!(!app.presentation().panel_available());
    assert_eq!(app.registry().count(DecorationKind::PanelGroup), 0);
    assert!(effects.contains(&SceneEffect::SetControlsVisible(false)));
    assert!(effects.contains(&SceneEffect::SetCalloutVisible(true)));
    assert!(app.banners().error);
    assert!(matches!(
        app.failures().last(),
        Some(FailureReport::PanelBuild { .. })
    ));
    assert_mode_invariants(&app);

    // not retried
    assert!(tap_sequence(&mut app, &HIT).is_empty());
    assert_eq!(app.mode(), PresentationMode::CalloutShown);
}
