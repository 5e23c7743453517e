//! Scroll-viewport view state.
//!
//! The map image is larger than the viewport; the viewport shows a window
//! onto it controlled by a scroll position. Dragging the pointer moves the
//! window against the drag direction. Everything here is pure so the drag
//! state machine can be exercised without a browser.

/// Largest legal scroll offsets for a map shown through a viewport.
/// Never negative: a viewport larger than the map pins that axis to zero.
pub fn scroll_bounds(map_w: f64, map_h: f64, viewport_w: f64, viewport_h: f64) -> (f64, f64) {
    ((map_w - viewport_w).max(0.0), (map_h - viewport_h).max(0.0))
}

/// Clamp a scroll position into `[0, max_x] x [0, max_y]`.
pub fn clamp_scroll(x: f64, y: f64, max_x: f64, max_y: f64) -> (f64, f64) {
    (x.clamp(0.0, max_x), y.clamp(0.0, max_y))
}

/// Scroll position the viewer starts at: the floored map midpoint.
pub fn initial_scroll(map_w: f64, map_h: f64) -> (f64, f64) {
    ((map_w / 2.0).floor(), (map_h / 2.0).floor())
}

/// Apply a pointer delta to a scroll position. The map moves with the
/// pointer, so the scroll offset moves against it.
pub fn apply_drag(
    scroll_x: f64,
    scroll_y: f64,
    dx: f64,
    dy: f64,
    max_x: f64,
    max_y: f64,
) -> (f64, f64) {
    clamp_scroll(scroll_x - dx, scroll_y - dy, max_x, max_y)
}

/// Pointer-drag state machine.
///
/// Every pointer move is fed through [`DragState::motion`], which always
/// records the new position but only yields a delta while a drag is active.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    pub last_x: f64,
    pub last_y: f64,
    pub dragging: bool,
}

impl DragState {
    /// Begin a drag at the given pointer position.
    pub fn press(&mut self, x: f64, y: f64) {
        self.last_x = x;
        self.last_y = y;
        self.dragging = true;
    }

    /// End the drag. Safe to call when no drag is active.
    pub fn release(&mut self) {
        self.dragging = false;
    }

    /// Record a pointer move. Returns the pointer delta since the last
    /// recorded position if a drag is active.
    pub fn motion(&mut self, x: f64, y: f64) -> Option<(f64, f64)> {
        let delta = (x - self.last_x, y - self.last_y);
        self.last_x = x;
        self.last_y = y;
        self.dragging.then_some(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_bounds_viewport_smaller_than_map() {
        assert_eq!(scroll_bounds(1000.0, 800.0, 400.0, 300.0), (600.0, 500.0));
    }

    #[test]
    fn test_scroll_bounds_viewport_larger_than_map() {
        // No scrollable range on either axis
        assert_eq!(scroll_bounds(300.0, 200.0, 400.0, 300.0), (0.0, 0.0));
    }

    #[test]
    fn test_clamp_scroll_inside_bounds_unchanged() {
        assert_eq!(clamp_scroll(250.0, 125.0, 600.0, 500.0), (250.0, 125.0));
    }

    #[test]
    fn test_clamp_scroll_negative_pins_to_zero() {
        assert_eq!(clamp_scroll(-10.0, -0.5, 600.0, 500.0), (0.0, 0.0));
    }

    #[test]
    fn test_clamp_scroll_overshoot_pins_to_max() {
        assert_eq!(clamp_scroll(700.0, 9999.0, 600.0, 500.0), (600.0, 500.0));
    }

    #[test]
    fn test_initial_scroll_is_floored_midpoint() {
        assert_eq!(initial_scroll(1001.0, 800.0), (500.0, 400.0));
    }

    #[test]
    fn test_drag_scenario_from_design() {
        // Map 1000x800 behind a 400x300 viewport; pointer moves from
        // (100,100) to (60,80) mid-drag: scroll gains (40,20).
        let (max_x, max_y) = scroll_bounds(1000.0, 800.0, 400.0, 300.0);
        let mut drag = DragState::default();
        drag.press(100.0, 100.0);
        let (dx, dy) = drag.motion(60.0, 80.0).expect("drag is active");
        assert_eq!((dx, dy), (-40.0, -20.0));
        let next = apply_drag(200.0, 150.0, dx, dy, max_x, max_y);
        assert_eq!(next, (240.0, 170.0));
    }

    #[test]
    fn test_drag_clamps_at_bounds() {
        let (max_x, max_y) = scroll_bounds(1000.0, 800.0, 400.0, 300.0);
        let mut drag = DragState::default();
        drag.press(0.0, 0.0);
        let (dx, dy) = drag.motion(-5000.0, 3000.0).expect("drag is active");
        let next = apply_drag(100.0, 100.0, dx, dy, max_x, max_y);
        assert_eq!(next, (max_x, 0.0));
    }

    #[test]
    fn test_motion_without_press_records_but_yields_nothing() {
        let mut drag = DragState::default();
        assert_eq!(drag.motion(50.0, 60.0), None);
        assert_eq!((drag.last_x, drag.last_y), (50.0, 60.0));
        // A later drag measures its delta from the recorded position
        drag.press(50.0, 60.0);
        assert_eq!(drag.motion(55.0, 61.0), Some((5.0, 1.0)));
    }

    #[test]
    fn test_release_stops_deltas() {
        let mut drag = DragState::default();
        drag.press(10.0, 10.0);
        drag.release();
        assert_eq!(drag.motion(30.0, 30.0), None);
    }

    #[test]
    fn test_release_is_idempotent() {
        let mut drag = DragState::default();
        drag.release();
        drag.release();
        assert!(!drag.dragging);
    }

    #[test]
    fn test_drag_sequence_stays_within_bounds() {
        // Arbitrary jittery drag path: every resulting position is in bounds
        let (max_x, max_y) = scroll_bounds(1000.0, 800.0, 400.0, 300.0);
        let mut drag = DragState::default();
        let mut scroll = initial_scroll(1000.0, 800.0);
        drag.press(200.0, 200.0);
        let path = [
            (150.0, 220.0),
            (400.0, -80.0),
            (-900.0, 50.0),
            (30.0, 4000.0),
            (210.0, 190.0),
        ];
        for (x, y) in path {
            if let Some((dx, dy)) = drag.motion(x, y) {
                scroll = apply_drag(scroll.0, scroll.1, dx, dy, max_x, max_y);
            }
            assert!(scroll.0 >= 0.0 && scroll.0 <= max_x, "x out of bounds: {scroll:?}");
            assert!(scroll.1 >= 0.0 && scroll.1 <= max_y, "y out of bounds: {scroll:?}");
        }
    }
}
