use dioxus::prelude::*;

use crate::components::map_view::MapView;
use crate::images;

/// Root page: loads the map image exactly once and renders the viewer only
/// after its natural dimensions are known. Load failure is a visible state
/// rather than a silent hang.
#[component]
pub fn Viewer() -> Element {
    let size_resource = use_resource(|| images::load_map_size(images::MAP_IMAGE_URL));

    let rendered = match &*size_resource.read() {
        None => rsx! {
            div { class: "status", "Loading map..." }
        },
        Some(Err(_)) => rsx! {
            div { class: "status error", "Failed to load map" }
        },
        Some(Ok(size)) => rsx! {
            MapView { map_width: size.width, map_height: size.height }
        },
    };
    rendered
}
