//! End-to-end panel interaction: pointer gestures and field edits driving
//! the same bounded rectangle.

use proptest::prelude::*;
use rectpanel_core::{Axis, ClampBasis, Dimensions, PanelConfig, Zone};
use rectpanel_widgets::{DragOutcome, PointerEvent, ResizablePanel};

fn drag(panel: &mut ResizablePanel, from: (f64, f64), to: (f64, f64)) -> DragOutcome {
    let started = panel.pointer(PointerEvent::Down { x: from.0, y: from.1 });
    panel.pointer(PointerEvent::Move { x: to.0, y: to.1 });
    panel.pointer(PointerEvent::Up { x: to.0, y: to.1 });
    started
}

#[test]
fn east_then_north_west_scenario() {
    let mut panel = ResizablePanel::default();

    assert_eq!(
        drag(&mut panel, (99.0, 50.0), (149.0, 50.0)),
        DragOutcome::Started { zone: Zone::East }
    );
    assert_eq!(panel.rect().live(), Dimensions::new(0.0, 0.0, 150.0, 100.0));
    assert_eq!(panel.bounds(), Dimensions::new(0.0, 0.0, 150.0, 100.0));

    assert_eq!(
        drag(&mut panel, (0.5, 0.5), (-19.5, -19.5)),
        DragOutcome::Started { zone: Zone::NorthWest }
    );
    assert_eq!(panel.rect().live(), Dimensions::new(-20.0, -20.0, 170.0, 120.0));
    assert_eq!(panel.bounds(), Dimensions::new(0.0, 0.0, 170.0, 120.0));
    assert_eq!(
        panel.readout_lines(),
        vec!["x: 0", "y: 0", "w: 170", "h: 120"]
    );
}

#[test]
fn edited_width_is_clamped_to_container() {
    let mut panel = ResizablePanel::default();
    panel.type_into(Axis::W, "300").expect("numeric edit");
    assert_eq!(panel.rect().live().w, 300.0);
    assert_eq!(panel.bounds().w, 250.0);
    assert_eq!(panel.readout_lines()[2], "w: 250");
}

#[test]
fn south_handle_collapses_to_zero_height() {
    let mut panel = ResizablePanel::default();
    drag(&mut panel, (50.0, 99.0), (50.0, -9_901.0));
    assert_eq!(panel.rect().live().h, -9_900.0);
    assert_eq!(panel.bounds().h, 0.0);
}

#[test]
fn dragging_origin_out_and_back_shows_hysteresis() {
    let mut panel = ResizablePanel::default();
    panel.pointer(PointerEvent::Down { x: 0.5, y: 50.0 });
    panel.pointer(PointerEvent::Move { x: -99.5, y: 50.0 });
    assert_eq!(panel.bounds().x, 0.0);
    // Halfway back the live origin is still negative.
    panel.pointer(PointerEvent::Move { x: -49.5, y: 50.0 });
    assert_eq!(panel.bounds().x, 0.0);
    panel.pointer(PointerEvent::Up { x: 10.5, y: 50.0 });
    assert_eq!(panel.bounds().x, 10.0);
    assert_eq!(panel.rect().drift(), (0.0, 0.0));
}

#[test]
fn displayed_basis_panel_never_overflows() {
    let config = PanelConfig::default().clamp_basis(ClampBasis::DisplayedOrigin);
    let mut panel = ResizablePanel::new(config).expect("valid config");
    drag(&mut panel, (0.5, 50.0), (-39.5, 50.0));
    panel.type_into(Axis::W, "900").expect("numeric edit");
    assert_eq!(panel.bounds(), Dimensions::new(0.0, 0.0, 250.0, 100.0));
}

#[test]
fn body_drag_is_constrained_to_container() {
    let mut panel = ResizablePanel::default();
    assert_eq!(
        drag(&mut panel, (50.0, 50.0), (450.0, 450.0)),
        DragOutcome::Started { zone: Zone::Body }
    );
    assert_eq!(panel.bounds(), Dimensions::new(150.0, 150.0, 100.0, 100.0));
}

fn pointer_strategy() -> impl Strategy<Value = Vec<(f64, f64)>> {
    proptest::collection::vec((-300.0f64..600.0, -300.0f64..600.0), 1..24)
}

proptest! {
    #[test]
    fn any_gesture_keeps_bounds_inside(
        press in (0.0f64..100.0, 0.0f64..100.0),
        moves in pointer_strategy(),
    ) {
        let mut panel = ResizablePanel::default();
        panel.pointer(PointerEvent::Down { x: press.0, y: press.1 });
        for (x, y) in moves {
            panel.pointer(PointerEvent::Move { x, y });
            let b = panel.bounds();
            prop_assert!(b.x >= 0.0 && b.x <= 250.0);
            prop_assert!(b.y >= 0.0 && b.y <= 250.0);
            prop_assert!(b.w >= 0.0 && b.h >= 0.0);
        }
        panel.pointer(PointerEvent::Up { x: 0.0, y: 0.0 });
        prop_assert!(!panel.is_dragging());
    }
}
