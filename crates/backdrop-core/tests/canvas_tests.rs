// Host-side tests for the background canvas: navigation requests, frame
// orchestration and resize handling, drawn onto a recording surface.

mod support;

use backdrop_core::*;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use support::{Op, RecordingSurface};

fn config() -> BackdropConfig {
    let mut config = BackdropConfig::default();
    config.field.seed = Some(7);
    config.navigation.duration_ms = 1000.0;
    config
}

fn canvas() -> BackgroundCanvas<RecordingSurface> {
    BackgroundCanvas::new(
        RecordingSurface::new(1000.0, 800.0),
        SectionGraph::reference(),
        config(),
    )
    .unwrap()
}

fn path(sections: &[Section]) -> SectionPath {
    sections.iter().copied().collect()
}

#[test]
fn starts_at_home_with_a_populated_field() {
    let c = canvas();
    assert_eq!(c.current_section(), Section::Home);
    assert!(!c.is_navigating());
    assert_eq!(c.field().len(), PARTICLE_COUNT);
    assert_eq!(c.viewport(), Vec2::new(1000.0, 800.0));
}

#[test]
fn zero_size_surface_is_rejected() {
    let err = BackgroundCanvas::new(
        RecordingSurface::new(0.0, 0.0),
        SectionGraph::reference(),
        config(),
    )
    .err();
    assert_eq!(
        err,
        Some(NavError::InvalidViewport {
            width: 0.0,
            height: 0.0
        })
    );
}

#[test]
fn navigation_runs_to_completion_and_notifies_once() {
    let mut c = canvas();
    let heard = Rc::new(RefCell::new(Vec::new()));
    let sink = heard.clone();
    c.on_section_change(move |s| sink.borrow_mut().push(s));

    let outcome = c.request_section_change("about", 0.0).unwrap();
    assert_eq!(
        outcome,
        NavigationOutcome::Started {
            path: path(&[Section::Home, Section::About])
        }
    );

    let first = c.frame(0.0);
    assert_eq!(first.navigator, Some(Vec2::new(500.0, 400.0)));
    assert_eq!(first.completed, None);

    let mid = c.frame(500.0);
    let nav = mid.navigator.unwrap();
    assert!((nav - Vec2::new(281.25, 575.0)).length() < 1e-2, "{nav:?}");
    assert!(c.is_navigating());
    assert_eq!(c.current_section(), Section::Home);

    let done = c.frame(1000.0);
    assert_eq!(done.completed, Some(Section::About));
    assert_eq!(done.navigator, None);
    assert_eq!(c.current_section(), Section::About);
    assert_eq!(*heard.borrow(), vec![Section::About]);

    for t in [1016.0, 1033.0, 2000.0] {
        assert_eq!(c.frame(t).completed, None);
    }
    assert_eq!(heard.borrow().len(), 1);
    assert_eq!(c.current_section(), Section::About);
}

#[test]
fn requests_during_a_run_are_dropped() {
    let mut c = canvas();
    c.request_section(Section::Music, 0.0);
    c.frame(0.0);
    assert_eq!(c.request_section(Section::Contact, 100.0), NavigationOutcome::Busy);

    c.frame(1000.0);
    assert_eq!(c.current_section(), Section::Music);
}

#[test]
fn unknown_id_leaves_state_alone() {
    let mut c = canvas();
    assert_eq!(
        c.request_section_change("gallery", 0.0),
        Err(NavError::UnknownSection("gallery".to_string()))
    );
    assert!(!c.is_navigating());
    assert_eq!(c.current_section(), Section::Home);
}

#[test]
fn ids_are_case_insensitive() {
    let mut c = canvas();
    assert!(matches!(
        c.request_section_change("  Shows ", 0.0),
        Ok(NavigationOutcome::Started { .. })
    ));
}

#[test]
fn requesting_the_current_section_is_a_no_op() {
    let mut c = canvas();
    assert_eq!(
        c.request_section_change("home", 0.0),
        Ok(NavigationOutcome::AlreadyThere)
    );
    assert!(!c.is_navigating());
}

#[test]
fn resize_cancels_the_run_and_rebuilds_the_field() {
    let mut c = canvas();
    let heard = Rc::new(RefCell::new(0));
    let sink = heard.clone();
    c.on_section_change(move |_| *sink.borrow_mut() += 1);

    c.request_section(Section::Contact, 0.0);
    c.frame(0.0);
    c.resize(600.0, 400.0).unwrap();
    assert!(!c.is_navigating());

    let report = c.frame(2000.0);
    assert_eq!(report.completed, None);
    assert_eq!(*heard.borrow(), 0);
    assert_eq!(c.current_section(), Section::Home);
    assert_eq!(c.viewport(), Vec2::new(600.0, 400.0));
    assert_eq!(c.field().bounds(), Vec2::new(600.0, 400.0));
    assert_eq!(c.field().len(), PARTICLE_COUNT);
    for p in c.field().particles() {
        assert!(p.in_bounds(c.field().bounds()));
    }
}

#[test]
fn failed_resize_still_cancels() {
    let mut c = canvas();
    c.request_section(Section::Shows, 0.0);
    assert!(c.resize(0.0, 400.0).is_err());
    assert!(!c.is_navigating());
    assert_eq!(c.viewport(), Vec2::new(1000.0, 800.0));
}

#[test]
fn cancelled_run_never_completes() {
    let mut c = canvas();
    let heard = Rc::new(RefCell::new(0));
    let sink = heard.clone();
    c.on_section_change(move |_| *sink.borrow_mut() += 1);

    c.request_section(Section::About, 0.0);
    c.frame(300.0);
    assert!(c.cancel_navigation());
    assert!(!c.cancel_navigation());

    let report = c.frame(2000.0);
    assert_eq!(report.completed, None);
    assert_eq!(report.navigator, None);
    assert_eq!(report.camera_offset, Vec2::ZERO);
    assert_eq!(*heard.borrow(), 0);
    assert_eq!(c.current_section(), Section::Home);
}

#[test]
fn camera_offset_only_moves_during_a_run() {
    let mut c = canvas();
    assert_eq!(c.frame(0.0).camera_offset, Vec2::ZERO);

    c.request_section(Section::About, 0.0);
    let mid = c.frame(500.0);
    assert!(mid.camera_offset.length() > 0.0);
    // opposite to the direction of travel
    assert!(mid.camera_offset.x > 0.0);
    assert!(mid.camera_offset.y < 0.0);

    let end = c.frame(1000.0);
    assert_eq!(end.camera_offset, Vec2::ZERO);
}

#[test]
fn camera_offset_tracks_navigator_travel() {
    let mut c = canvas();
    let parallax = c.config().camera_parallax;
    c.request_section(Section::About, 0.0);

    let mut largest = 0.0_f32;
    for step in 0..100 {
        let report = c.frame(step as f64 * 10.0);
        let nav = report.navigator.unwrap();
        let expected = (Vec2::new(500.0, 400.0) - nav) * parallax;
        assert!((report.camera_offset - expected).length() < 1e-3, "t={}", step * 10);
        if step == 50 {
            let halfway = Vec2::new(218.75, -175.0) * parallax;
            assert!((report.camera_offset - halfway).length() < 1e-2);
        }
        largest = largest.max(report.camera_offset.length());
    }

    // home (500, 400) -> about (250, 600) is ~320 px
    assert!(largest > 320.0 * parallax * 0.9, "largest offset {largest}");
}

#[test]
fn frame_delta_is_clamped() {
    let mut c = canvas();
    assert_eq!(c.frame(0.0).delta_ms, 0.0);
    assert_eq!(c.frame(16.0).delta_ms, 16.0);
    assert_eq!(c.frame(5_000.0).delta_ms, MAX_FRAME_DELTA_MS);
    assert_eq!(c.frame(4_000.0).delta_ms, 0.0);
}

#[test]
fn fade_washes_instead_of_clearing() {
    let wash = Rgba::new(245, 245, 245, 0.2);
    let mut cfg = config();
    cfg.fade = Some(wash);
    let mut c = BackgroundCanvas::new(
        RecordingSurface::new(1000.0, 800.0),
        SectionGraph::reference(),
        cfg,
    )
    .unwrap();
    c.frame(0.0);
    assert_eq!(c.surface().ops.first(), Some(&Op::Wash(wash)));
    assert!(!c.surface().ops.contains(&Op::Clear));

    let mut plain = canvas();
    plain.frame(0.0);
    assert_eq!(plain.surface().ops.first(), Some(&Op::Clear));
}

#[test]
fn graph_overlay_labels_every_section() {
    let mut c = canvas();
    c.frame(0.0);
    let labels = c.surface().texts();
    for s in Section::ALL {
        assert!(labels.iter().any(|l| l == s.label()), "missing {}", s.label());
    }
}

#[test]
fn graph_overlay_can_be_hidden() {
    let mut cfg = config();
    cfg.show_graph = false;
    let mut c = BackgroundCanvas::new(
        RecordingSurface::new(1000.0, 800.0),
        SectionGraph::reference(),
        cfg,
    )
    .unwrap();
    c.frame(0.0);
    assert!(c.surface().texts().is_empty());
}

#[test]
fn navigator_path_is_drawn_while_running() {
    let mut c = canvas();
    c.request_section(Section::Music, 0.0);
    c.surface_mut().ops.clear();
    c.frame(200.0);
    let polyline = c
        .surface()
        .ops
        .iter()
        .find_map(|op| match op {
            Op::Polyline(points) => Some(points.clone()),
            _ => None,
        })
        .unwrap();
    assert_eq!(polyline, vec![Vec2::new(500.0, 400.0), Vec2::new(250.0, 200.0)]);
}

#[test]
fn hit_test_and_hover_follow_the_viewport() {
    let mut c = canvas();
    assert_eq!(c.hit_test(Vec2::new(252.0, 198.0)), Some(Section::Music));
    c.set_hovered(Some(Section::Music));
    assert_eq!(c.hovered(), Some(Section::Music));

    c.resize(500.0, 400.0).unwrap();
    assert_eq!(c.hit_test(Vec2::new(125.0, 100.0)), Some(Section::Music));
}
