use dioxus::html::input_data::MouseButton;
use dioxus::prelude::*;
use pinmap_shared::marker::{Markers, MARKER_HEIGHT_PX, MARKER_WIDTH_PX};
use pinmap_shared::view::{self, DragState};

use crate::coords;
use crate::images;

const VIEWPORT_ID: &str = "pinmap-viewport";

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Get the scrollable viewport element.
fn viewport_element() -> Option<web_sys::Element> {
    let document = web_sys::window()?.document()?;
    document.get_element_by_id(VIEWPORT_ID)
}

/// Live client dimensions of the viewport, measured at call time.
fn viewport_client_size() -> Option<(f64, f64)> {
    let element = viewport_element()?;
    Some((
        f64::from(element.client_width()),
        f64::from(element.client_height()),
    ))
}

// ---------------------------------------------------------------------------
// Render helpers (pure, easily testable)
// ---------------------------------------------------------------------------

/// Status line shown over the map.
fn info_line(scroll_x: f64, scroll_y: f64, marker_count: usize) -> String {
    format!(
        "Coord: {},{} | Markers: {}",
        scroll_x as i64, scroll_y as i64, marker_count
    )
}

/// Inline style pinning a marker icon to its map-space position.
fn marker_style(x: f64, y: f64) -> String {
    format!("left: {x}px; top: {y}px;")
}

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

#[component]
pub fn MapView(map_width: f64, map_height: f64) -> Element {
    // Scroll starts at the map midpoint. Markers live in map space and are
    // fixed at creation; only reset removes them.
    let mut scroll = use_signal(|| view::initial_scroll(map_width, map_height));
    let mut drag = use_signal(DragState::default);
    let mut markers = use_signal(Markers::default);

    // Imperative scroll sync: the signal owns the truth, the DOM follows.
    use_effect(move || {
        // Read the Signal inside the effect so Dioxus tracks it as a dependency
        let (sx, sy) = *scroll.read();
        if let Some(element) = viewport_element() {
            element.set_scroll_left(sx as i32);
            element.set_scroll_top(sy as i32);
        }
    });

    let (cur_x, cur_y) = *scroll.read();
    let info = info_line(cur_x, cur_y, markers.read().len());
    let dragging = drag.read().dragging;

    let viewport_class = if dragging {
        "viewport dragging"
    } else {
        "viewport"
    };

    let map_w_attr = map_width as i64;
    let map_h_attr = map_height as i64;
    let marker_w_attr = MARKER_WIDTH_PX as i64;
    let marker_h_attr = MARKER_HEIGHT_PX as i64;

    let marker_tags: Vec<(usize, String)> = markers
        .read()
        .positions()
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| (i + 1, marker_style(x, y)))
        .collect();

    rsx! {
        div { class: "wrap",
            button {
                r#type: "button",
                class: "btn-reset",
                title: "Reset markers",
                onclick: move |_| {
                    let count = markers.read().len();
                    tracing::debug!(count, "clearing markers");
                    markers.write().clear();
                },
                "Reset"
            }

            div { class: "info", "{info}" }

            div {
                id: VIEWPORT_ID,
                class: "{viewport_class}",

                onmousedown: move |evt: Event<MouseData>| {
                    // Only the left button starts a drag
                    if evt.trigger_button() != Some(MouseButton::Primary) {
                        return;
                    }
                    evt.prevent_default();
                    let client = evt.client_coordinates();
                    drag.write().press(client.x, client.y);
                },

                onmousemove: move |evt: Event<MouseData>| {
                    let client = evt.client_coordinates();
                    let delta = drag.write().motion(client.x, client.y);
                    if let Some((dx, dy)) = delta {
                        let Some((vw, vh)) = viewport_client_size() else {
                            return;
                        };
                        let (sx, sy) = *scroll.read();
                        let (max_x, max_y) =
                            view::scroll_bounds(map_width, map_height, vw, vh);
                        scroll.set(view::apply_drag(sx, sy, dx, dy, max_x, max_y));
                    }
                },

                onmouseup: move |_| {
                    drag.write().release();
                },

                onmouseleave: move |_| {
                    // Handlers are scoped to the viewport, so a drag that
                    // leaves it would otherwise never see its mouseup.
                    drag.write().release();
                },

                oncontextmenu: move |evt: Event<MouseData>| {
                    evt.prevent_default();
                    let client = evt.client_coordinates();
                    let (sx, sy) = *scroll.read();
                    if let Some((x, y)) = coords::click_to_marker_px(
                        client.x, client.y, VIEWPORT_ID, sx, sy,
                    ) {
                        markers.write().place(x, y);
                    }
                },

                img {
                    class: "map",
                    src: images::MAP_IMAGE_URL,
                    alt: "Map",
                    width: "{map_w_attr}",
                    height: "{map_h_attr}",
                    draggable: "false",
                }

                for (n, style) in marker_tags {
                    img {
                        key: "marker-{n}",
                        class: "marker",
                        src: images::MARKER_IMAGE_URL,
                        alt: "Marker #{n}",
                        width: "{marker_w_attr}",
                        height: "{marker_h_attr}",
                        style: "{style}",
                        draggable: "false",
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_line_floors_coordinates() {
        assert_eq!(info_line(250.7, 125.2, 3), "Coord: 250,125 | Markers: 3");
    }

    #[test]
    fn test_info_line_no_markers() {
        assert_eq!(info_line(0.0, 0.0, 0), "Coord: 0,0 | Markers: 0");
    }

    #[test]
    fn test_marker_style_pins_position() {
        assert_eq!(marker_style(75.0, 34.5), "left: 75px; top: 34.5px;");
    }
}
