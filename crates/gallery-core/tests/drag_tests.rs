// Host-side tests for the drag session lifecycle and easing convergence.

use gallery_core::{
    clamp_to_surface, DragAnimator, Figure, PointerKind, Surface, DRAG_MIN_VISIBLE_PX,
    DRAG_OVERSHOOT_PX,
};
use glam::Vec2;

fn test_surface() -> Surface {
    // Two overlapping-ish figures on a 1000x800 surface
    Surface::new(
        [
            Figure::new(
                Vec2::new(100.0, 100.0),
                Vec2::new(250.0, 180.0),
                "wandering beam",
            ),
            Figure::new(
                Vec2::new(600.0, 400.0),
                Vec2::new(350.0, 260.0),
                "the sick garden",
            ),
        ],
        Vec2::new(1000.0, 800.0),
    )
}

#[test]
fn begin_drag_hit_starts_exactly_one_session() {
    let mut anim = DragAnimator::new(test_surface(), 0.2);
    let hit = anim.begin_drag(Vec2::new(110.0, 110.0), PointerKind::Mouse);
    assert_eq!(hit, Some(0));
    assert!(anim.is_dragging());

    // A second begin while a session is active is ignored, even over the
    // other figure
    let second = anim.begin_drag(Vec2::new(650.0, 450.0), PointerKind::Touch);
    assert_eq!(second, None);
    assert_eq!(anim.session().unwrap().figure, 0);
}

#[test]
fn begin_drag_miss_is_a_silent_noop() {
    let mut anim = DragAnimator::new(test_surface(), 0.2);
    let before: Vec<Vec2> = anim.surface.figures.iter().map(|f| f.displayed).collect();

    let hit = anim.begin_drag(Vec2::new(5.0, 5.0), PointerKind::Mouse);
    assert_eq!(hit, None);
    assert!(!anim.is_dragging());
    assert!(!anim.tick(), "no session means no animation");

    for (f, b) in anim.surface.figures.iter().zip(&before) {
        assert_eq!(f.displayed, *b);
        assert_eq!(f.target, *b);
    }
}

#[test]
fn moves_after_end_drag_are_ignored() {
    let mut anim = DragAnimator::new(test_surface(), 0.2);
    anim.begin_drag(Vec2::new(110.0, 110.0), PointerKind::Mouse);
    anim.pointer_moved(Vec2::new(200.0, 150.0));

    let released = anim.end_drag();
    assert_eq!(released, Some(0));
    assert!(!anim.is_dragging());

    // A move racing ahead of listener removal must not retarget anything
    let target_before = anim.surface.figures[0].target;
    anim.pointer_moved(Vec2::new(900.0, 700.0));
    assert_eq!(anim.surface.figures[0].target, target_before);

    // And the loop stays stopped
    assert!(!anim.tick());
    assert_eq!(anim.surface.figures[0].target, target_before);

    // end_drag is idempotent
    assert_eq!(anim.end_drag(), None);
}

#[test]
fn easing_follows_geometric_decay() {
    let k = 0.2_f32;
    let mut anim = DragAnimator::new(test_surface(), k);
    anim.begin_drag(Vec2::new(110.0, 110.0), PointerKind::Mouse);
    anim.pointer_moved(Vec2::new(500.0, 300.0));

    let initial = anim.surface.figures[0].displayed;
    let target = anim.surface.figures[0].target;

    let n = 10;
    for _ in 0..n {
        assert!(anim.tick());
    }
    let expected = target - (target - initial) * (1.0 - k).powi(n);
    let got = anim.surface.figures[0].displayed;
    assert!((got - expected).length() < 1e-3, "got {got:?}, expected {expected:?}");

    // Convergence is asymptotic: never exactly on target, but within a small
    // epsilon after enough ticks
    for _ in 0..60 {
        anim.tick();
    }
    let remaining = anim.surface.figures[0].remaining().length();
    assert!(remaining > 0.0);
    assert!(remaining < 0.01, "remaining {remaining}");
    assert!(anim.surface.figures[0].settled());
}

#[test]
fn worked_example_offset_target_and_first_tick() {
    // Surface at the viewport origin, figure at (100,100); grab at (110,110)
    let mut anim = DragAnimator::new(test_surface(), 0.2);
    anim.begin_drag(Vec2::new(110.0, 110.0), PointerKind::Mouse);

    let session = anim.session().unwrap();
    assert_eq!(session.grab_offset, Vec2::new(10.0, 10.0));

    // Move to (200,150): target = pointer - offset = (190,140)
    anim.pointer_moved(Vec2::new(200.0, 150.0));
    assert_eq!(anim.surface.figures[0].target, Vec2::new(190.0, 140.0));

    // One tick at k=0.2: displayed = (100 + 0.2*90, 100 + 0.2*40)
    anim.tick();
    let d = anim.surface.figures[0].displayed;
    assert!((d.x - 118.0).abs() < 1e-4);
    assert!((d.y - 108.0).abs() < 1e-4);
}

#[test]
fn far_out_targets_pin_at_the_margin_boundary() {
    let bounds = Vec2::new(1000.0, 800.0);
    let mut anim = DragAnimator::new(test_surface(), 0.2);
    anim.begin_drag(Vec2::new(110.0, 110.0), PointerKind::Touch);

    // Way past the top-left
    anim.pointer_moved(Vec2::new(-5000.0, -5000.0));
    assert_eq!(
        anim.surface.figures[0].target,
        Vec2::new(-DRAG_OVERSHOOT_PX, -DRAG_OVERSHOOT_PX)
    );

    // Way past the bottom-right
    anim.pointer_moved(Vec2::new(9000.0, 9000.0));
    assert_eq!(
        anim.surface.figures[0].target,
        Vec2::new(
            bounds.x - DRAG_MIN_VISIBLE_PX,
            bounds.y - DRAG_MIN_VISIBLE_PX
        )
    );
}

#[test]
fn clamp_handles_degenerate_surfaces() {
    // Surface narrower than the visibility margin: the whole axis range
    // collapses to the low bound instead of inverting (f32::clamp would
    // panic on min > max)
    let tiny = Vec2::new(10.0, 10.0);
    let clamped = clamp_to_surface(Vec2::new(500.0, 500.0), tiny);
    assert_eq!(clamped, Vec2::new(-DRAG_OVERSHOOT_PX, -DRAG_OVERSHOOT_PX));

    // Below-zero extents collapse the same way
    let clamped = clamp_to_surface(Vec2::new(500.0, 500.0), Vec2::ZERO);
    assert_eq!(clamped, Vec2::new(-DRAG_OVERSHOOT_PX, -DRAG_OVERSHOOT_PX));

    // At exactly the margin the usable range is a single point, zero
    let edge = Vec2::new(DRAG_MIN_VISIBLE_PX, DRAG_MIN_VISIBLE_PX);
    let clamped = clamp_to_surface(Vec2::new(500.0, 500.0), edge);
    assert_eq!(clamped, Vec2::ZERO);

    // Mixed axes clamp independently
    let clamped = clamp_to_surface(Vec2::new(500.0, 500.0), Vec2::new(10.0, 800.0));
    assert_eq!(clamped, Vec2::new(-DRAG_OVERSHOOT_PX, 500.0));
}

#[test]
fn touch_and_mouse_sessions_carry_their_kind() {
    let mut anim = DragAnimator::new(test_surface(), 0.2);
    anim.begin_drag(Vec2::new(110.0, 110.0), PointerKind::Touch);
    assert_eq!(anim.session().unwrap().kind, PointerKind::Touch);
    anim.end_drag();

    anim.begin_drag(Vec2::new(650.0, 450.0), PointerKind::Mouse);
    assert_eq!(anim.session().unwrap().kind, PointerKind::Mouse);
}
