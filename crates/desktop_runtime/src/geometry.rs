//! Window geometry engine: pure placement, clamping, and transition-target helpers.
//!
//! Nothing here owns state. Every function takes the current [`Viewport`] (full browser size,
//! taskbar band included) and always produces a result, even for degenerate inputs such as a
//! window larger than the viewport.

use crate::model::{
    Point, Size, TransitionKind, Viewport, WindowGeometry, WindowRecord, WindowTransition,
    TASKBAR_HEIGHT,
};

/// Leftmost x of the collapse anchor used by the minimize transition.
pub const MINIMIZE_TARGET_MIN_X: i32 = 100;
/// Distance kept between the collapse anchor and the right viewport edge.
pub const MINIMIZE_TARGET_RIGHT_MARGIN: i32 = 200;
/// Height above the taskbar band at which windows collapse.
pub const MINIMIZE_TARGET_OFFSET: i32 = 10;
pub const MINIMIZE_TARGET_SIZE: Size = Size::new(1, 1);
pub const CASCADE_ORIGIN: i32 = 100;
pub const CASCADE_STEP: i32 = 30;
/// Smallest origin a centered window is placed at.
pub const CENTERED_MIN_ORIGIN: i32 = 100;

/// Height available to windows once the taskbar band is reserved.
pub fn work_area_height(viewport: Viewport) -> i32 {
    viewport.height - TASKBAR_HEIGHT
}

/// Pins a proposed drag position into the work area.
///
/// The result lies in `[0, viewport.width - size.width] x [0, work_area_height - size.height]`.
/// Windows wider or taller than the work area pin to `0` on that axis.
pub fn clamp_drag(proposed: Point, size: Size, viewport: Viewport) -> Point {
    let max_x = viewport.width - size.width;
    let max_y = work_area_height(viewport) - size.height;
    // `i32::clamp` panics when max < min, which is exactly the oversized-window case.
    Point {
        x: proposed.x.min(max_x).max(0),
        y: proposed.y.min(max_y).max(0),
    }
}

/// Rectangle a maximized window occupies: the full viewport minus the taskbar band.
pub fn maximized_rect(viewport: Viewport) -> WindowGeometry {
    WindowGeometry {
        position: Point::new(0, 0),
        size: Size::new(viewport.width.max(0), work_area_height(viewport).max(0)),
    }
}

/// Approximate taskbar-button anchor a minimizing window collapses toward.
///
/// Only drives the visual collapse; it is never stored as the window's resting geometry.
pub fn minimize_target(current: Point, viewport: Viewport) -> WindowGeometry {
    let x = current
        .x
        .min(viewport.width - MINIMIZE_TARGET_RIGHT_MARGIN)
        .max(MINIMIZE_TARGET_MIN_X);
    WindowGeometry {
        position: Point::new(x, work_area_height(viewport) - MINIMIZE_TARGET_OFFSET),
        size: MINIMIZE_TARGET_SIZE,
    }
}

/// Staggered default position for the next window given how many are already open.
pub fn cascade_position(open_count: usize) -> Point {
    let step = i32::try_from(open_count)
        .unwrap_or(i32::MAX)
        .saturating_mul(CASCADE_STEP);
    Point::new(
        CASCADE_ORIGIN.saturating_add(step),
        CASCADE_ORIGIN.saturating_add(step),
    )
}

/// Centers a window of `size` in the viewport, never closer than [`CENTERED_MIN_ORIGIN`].
pub fn centered_position(size: Size, viewport: Viewport) -> Point {
    Point::new(
        ((viewport.width - size.width) / 2).max(CENTERED_MIN_ORIGIN),
        ((viewport.height - size.height) / 2).max(CENTERED_MIN_ORIGIN),
    )
}

/// Geometry a window renderer should draw right now, or `None` when the window is hidden.
///
/// A minimized window stays visible at its collapse target until its minimize transition
/// completes.
pub fn presented_geometry(
    record: &WindowRecord,
    transition: Option<&WindowTransition>,
    viewport: Viewport,
) -> Option<WindowGeometry> {
    if !record.is_minimized {
        return Some(record.geometry());
    }
    match transition.map(|t| t.kind) {
        Some(TransitionKind::Minimizing) => Some(minimize_target(record.position, viewport)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::WindowId;

    const VIEWPORT: Viewport = Viewport::new(1280, 800);

    fn record(minimized: bool) -> WindowRecord {
        WindowRecord {
            id: WindowId::from("resume"),
            title: "Resume.pdf".to_string(),
            is_minimized: minimized,
            is_maximized: false,
            z_index: 1001,
            position: Point::new(40, 60),
            size: Size::new(600, 400),
            saved_position: None,
            saved_size: None,
        }
    }

    #[test]
    fn clamp_drag_pins_far_out_of_bounds_positions_to_edges() {
        let size = Size::new(600, 400);
        assert_eq!(
            clamp_drag(Point::new(-5_000, -5_000), size, VIEWPORT),
            Point::new(0, 0)
        );
        assert_eq!(
            clamp_drag(Point::new(i32::MAX, i32::MAX), size, VIEWPORT),
            Point::new(680, 360)
        );
        assert_eq!(
            clamp_drag(Point::new(200, 150), size, VIEWPORT),
            Point::new(200, 150)
        );
    }

    #[test]
    fn clamp_drag_never_panics_for_windows_larger_than_viewport() {
        let size = Size::new(2_000, 2_000);
        assert_eq!(
            clamp_drag(Point::new(300, 300), size, VIEWPORT),
            Point::new(0, 0)
        );
    }

    #[test]
    fn clamp_drag_bounds_hold_for_a_sweep_of_inputs() {
        let size = Size::new(500, 400);
        for x in (-3_000..3_000).step_by(137) {
            for y in (-3_000..3_000).step_by(151) {
                let pinned = clamp_drag(Point::new(x, y), size, VIEWPORT);
                assert!((0..=VIEWPORT.width - size.width).contains(&pinned.x));
                assert!((0..=VIEWPORT.height - TASKBAR_HEIGHT - size.height).contains(&pinned.y));
            }
        }
    }

    #[test]
    fn maximized_rect_reserves_taskbar_band() {
        assert_eq!(
            maximized_rect(VIEWPORT),
            WindowGeometry {
                position: Point::new(0, 0),
                size: Size::new(1280, 760),
            }
        );
    }

    #[test]
    fn minimize_target_clamps_anchor_between_margins() {
        let near_left = minimize_target(Point::new(10, 300), VIEWPORT);
        assert_eq!(near_left.position, Point::new(100, 750));
        assert_eq!(near_left.size, MINIMIZE_TARGET_SIZE);

        let far_right = minimize_target(Point::new(1_250, 300), VIEWPORT);
        assert_eq!(far_right.position.x, 1_080);

        let middle = minimize_target(Point::new(500, 0), VIEWPORT);
        assert_eq!(middle.position.x, 500);
    }

    #[test]
    fn cascade_and_center_placement() {
        assert_eq!(cascade_position(0), Point::new(100, 100));
        assert_eq!(cascade_position(3), Point::new(190, 190));
        assert_eq!(
            centered_position(Size::new(500, 400), VIEWPORT),
            Point::new(390, 200)
        );
        assert_eq!(
            centered_position(Size::new(500, 400), Viewport::new(600, 450)),
            Point::new(100, 100)
        );
    }

    #[test]
    fn minimized_window_is_presented_only_while_collapsing() {
        let visible = record(false);
        assert_eq!(
            presented_geometry(&visible, None, VIEWPORT),
            Some(visible.geometry())
        );

        let hidden = record(true);
        assert_eq!(presented_geometry(&hidden, None, VIEWPORT), None);

        let collapsing = WindowTransition {
            window_id: hidden.id.clone(),
            kind: TransitionKind::Minimizing,
            token: 1,
        };
        assert_eq!(
            presented_geometry(&hidden, Some(&collapsing), VIEWPORT),
            Some(minimize_target(hidden.position, VIEWPORT))
        );
    }
}
