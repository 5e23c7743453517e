//! Marker placement.
//!
//! Markers are point annotations pinned to map-space pixel coordinates.
//! A marker's position is computed once, when it is placed, from the click
//! position and the scroll offset at that moment; it is never recomputed.

/// Rendered size of the marker icon in pixels.
pub const MARKER_WIDTH_PX: f64 = 59.0;
pub const MARKER_HEIGHT_PX: f64 = 72.0;

/// Offset from the click point to the icon's top-left corner, chosen so
/// the pin tip of the icon lands on the clicked map position.
pub const MARKER_ANCHOR_X: f64 = 25.0;
pub const MARKER_ANCHOR_Y: f64 = 66.0;

/// Map-space position for a marker placed by a click at
/// `(viewport_x, viewport_y)` relative to the viewport's top-left corner,
/// while the viewport is scrolled to `(scroll_x, scroll_y)`.
pub fn place_marker(
    scroll_x: f64,
    scroll_y: f64,
    viewport_x: f64,
    viewport_y: f64,
) -> (f64, f64) {
    (
        scroll_x + viewport_x - MARKER_ANCHOR_X,
        scroll_y + viewport_y - MARKER_ANCHOR_Y,
    )
}

/// Insertion-ordered collection of placed markers, in map space.
///
/// Unbounded; only [`Markers::clear`] removes entries. Positions are fixed
/// at placement and never recomputed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Markers {
    positions: Vec<(f64, f64)>,
}

impl Markers {
    /// Append a marker at a map-space position.
    pub fn place(&mut self, x: f64, y: f64) {
        self.positions.push((x, y));
    }

    /// Remove every marker.
    pub fn clear(&mut self) {
        self.positions.clear();
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[(f64, f64)] {
        &self.positions
    }
}
