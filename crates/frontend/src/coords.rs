use pinmap_shared::marker;

/// Convert client (browser window) coordinates to coordinates relative to
/// the viewport element's top-left corner.
pub fn client_to_viewport(
    client_x: f64,
    client_y: f64,
    rect_left: f64,
    rect_top: f64,
) -> (f64, f64) {
    (client_x - rect_left, client_y - rect_top)
}

/// Pure marker placement: viewport-relative click plus the current scroll
/// offset, anchored so the pin tip sits on the click point. Usable in unit
/// tests (no web_sys dependency).
pub fn marker_map_position(
    scroll_x: f64,
    scroll_y: f64,
    viewport_x: f64,
    viewport_y: f64,
) -> (f64, f64) {
    marker::place_marker(scroll_x, scroll_y, viewport_x, viewport_y)
}

/// Resolve the viewport element's rect with web_sys, then convert a click
/// at client coordinates into a map-space marker position.
pub fn click_to_marker_px(
    client_x: f64,
    client_y: f64,
    viewport_id: &str,
    scroll_x: f64,
    scroll_y: f64,
) -> Option<(f64, f64)> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(viewport_id)?;
    let rect = element.get_bounding_client_rect();

    let (vx, vy) = client_to_viewport(client_x, client_y, rect.left(), rect.top());
    Some(marker_map_position(scroll_x, scroll_y, vx, vy))
}
