// Host-side tests for pointer normalization, ray picking and popup state.

use globe_core::{
    normalize_pointer, parse_countries, AppState, NumberFormat, SceneParams, Viewport,
    DIM_OPACITY, HIGHLIGHT_OPACITY,
};
use glam::Vec2;

const WIDE: Viewport = Viewport {
    inner_width: 1000.0,
    inner_height: 800.0,
    container_top: 0.0,
};

const STACKED: Viewport = Viewport {
    inner_width: 400.0,
    inner_height: 800.0,
    container_top: 100.0,
};

// One marker facing the camera, one on the far side of the globe on the
// same line of sight.
const TWO_ON_AXIS: &str = r#"[
  {"name": {"common": "Near"}, "population": 1000000000, "latlng": [0.0, 0.0],
   "flags": ["https://flagcdn.com/near.svg"]},
  {"name": {"common": "Far"}, "population": 2000000000, "latlng": [0.0, 180.0],
   "flags": ["https://flagcdn.com/far.svg"]}
]"#;

fn close(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < 1e-5
}

fn scene(json: &str) -> AppState {
    let records = parse_countries(json).expect("valid json");
    let params = SceneParams {
        pulse_enabled: false,
        ..Default::default()
    };
    AppState::from_records(params, &records, &NumberFormat::EN_US, 42, 1.0)
}

#[test]
fn wide_layout_maps_the_right_half() {
    let at = |x, y| normalize_pointer(x, y, &WIDE).expect("non-empty window");
    assert!(close(at(750.0, 400.0), Vec2::ZERO));
    assert!(close(at(1000.0, 0.0), Vec2::new(1.0, 1.0)));
    assert!(close(at(500.0, 800.0), Vec2::new(-1.0, -1.0)));
    // The left half lies beyond -1.
    assert!(at(250.0, 400.0).x < -1.0);
}

#[test]
fn stacked_layout_offsets_by_container_top() {
    assert!(STACKED.is_stacked());
    assert!(!WIDE.is_stacked());
    let at = |x, y| normalize_pointer(x, y, &STACKED).expect("non-empty window");
    assert!(close(at(200.0, 500.0), Vec2::ZERO));
    assert!(close(at(400.0, 100.0), Vec2::new(1.0, 1.0)));
    assert!(close(at(0.0, 900.0), Vec2::new(-1.0, -1.0)));
}

#[test]
fn breakpoint_width_counts_as_stacked() {
    let vp = Viewport {
        inner_width: 500.0,
        ..STACKED
    };
    assert!(vp.is_stacked());
    let vp = Viewport {
        inner_width: 501.0,
        ..STACKED
    };
    assert!(!vp.is_stacked());
}

#[test]
fn empty_window_yields_no_pointer() {
    let vp = Viewport {
        inner_width: 0.0,
        ..WIDE
    };
    assert_eq!(normalize_pointer(10.0, 10.0, &vp), None);
}

#[test]
fn nothing_is_highlighted_before_the_pointer_moves() {
    let mut s = scene(TWO_ON_AXIS);
    s.frame(0.0);
    assert!(!s.popup.visible);
    assert!(s.popup.content.is_none());
    assert!(s.highlighted.is_empty());
    assert!(s.markers.iter().all(|m| m.opacity == DIM_OPACITY));
}

#[test]
fn pointer_moves_update_ndc_and_popup_position() {
    let mut s = scene(TWO_ON_AXIS);
    s.pointer_moved(750.0, 400.0, &WIDE);
    assert_eq!(s.pointer.ndc(), Some(Vec2::ZERO));
    assert_eq!((s.popup.screen_x, s.popup.screen_y), (750.0, 400.0));
}

#[test]
fn all_hits_light_up_and_the_farthest_fills_the_popup() {
    let mut s = scene(TWO_ON_AXIS);
    s.pointer_moved(750.0, 400.0, &WIDE);
    s.frame(0.0);

    assert_eq!(s.highlighted.len(), 2);
    assert_eq!(s.highlighted[0].index, 0);
    assert_eq!(s.highlighted[1].index, 1);
    assert!(s.highlighted[0].distance < s.highlighted[1].distance);
    // Near box tip at z = 5.8, far box base at z = -5.
    assert!((s.highlighted[0].distance - 9.2).abs() < 1e-3);
    assert!((s.highlighted[1].distance - 20.0).abs() < 1e-3);

    assert!(s.markers.iter().all(|m| m.opacity == HIGHLIGHT_OPACITY));
    assert!(s.popup.visible);
    let content = s.popup.content.as_ref().expect("popup content");
    assert_eq!(content.country, "Far");
    assert_eq!(content.population_display, "2,000,000,000");
    assert_eq!(content.flag_url.as_deref(), Some("https://flagcdn.com/far.svg"));
}

#[test]
fn picking_is_stable_across_frames() {
    let mut s = scene(TWO_ON_AXIS);
    s.pointer_moved(750.0, 400.0, &WIDE);
    s.frame(0.0);
    let popup = s.popup.clone();
    let opacities: Vec<f32> = s.markers.iter().map(|m| m.opacity).collect();
    for i in 1..5 {
        s.frame(i as f32 / 60.0);
        assert_eq!(s.popup, popup);
        let now: Vec<f32> = s.markers.iter().map(|m| m.opacity).collect();
        assert_eq!(now, opacities);
    }
}

#[test]
fn moving_off_the_markers_clears_the_highlight() {
    let mut s = scene(TWO_ON_AXIS);
    s.pointer_moved(750.0, 400.0, &WIDE);
    s.frame(0.0);
    assert!(s.popup.visible);

    s.pointer_moved(1000.0, 0.0, &WIDE);
    s.frame(0.1);
    assert!(!s.popup.visible);
    assert!(s.popup.content.is_none());
    assert!(s.markers.iter().all(|m| m.opacity == DIM_OPACITY));
}

#[test]
fn unpickable_markers_are_ignored() {
    let mut s = scene(TWO_ON_AXIS);
    s.markers[1].pickable = false;
    s.pointer_moved(750.0, 400.0, &WIDE);
    s.frame(0.0);
    assert_eq!(s.highlighted.len(), 1);
    assert_eq!(s.markers[0].opacity, HIGHLIGHT_OPACITY);
    assert_eq!(s.markers[1].opacity, DIM_OPACITY);
    let content = s.popup.content.as_ref().expect("popup content");
    assert_eq!(content.country, "Near");
}

#[test]
fn empty_dataset_renders_no_popup() {
    let mut s = scene("[]");
    s.pointer_moved(750.0, 400.0, &WIDE);
    s.frame(0.0);
    assert!(s.markers.is_empty());
    assert!(!s.popup.visible);
}
