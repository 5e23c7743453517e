use wasm_bindgen_futures::JsFuture;

/// Fixed same-origin asset URLs.
pub const MAP_IMAGE_URL: &str = "/static/images/map.png";
pub const MARKER_IMAGE_URL: &str = "/static/images/marker.png";

/// Natural pixel dimensions of the decoded map image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapSize {
    pub width: f64,
    pub height: f64,
}

/// Fetch and decode `url` once, returning its natural dimensions.
///
/// `HtmlImageElement::decode` resolves after the browser has both loaded
/// and decoded the image, so the dimensions are final when we read them.
pub async fn load_map_size(url: &str) -> Result<MapSize, String> {
    let img = web_sys::HtmlImageElement::new()
        .map_err(|_| "failed to create image element".to_string())?;
    img.set_src(url);

    if JsFuture::from(img.decode()).await.is_err() {
        tracing::warn!(url, "map image failed to load");
        return Err(format!("failed to load {url}"));
    }

    let size = MapSize {
        width: f64::from(img.natural_width()),
        height: f64::from(img.natural_height()),
    };
    if size.width <= 0.0 || size.height <= 0.0 {
        return Err(format!("{url} decoded to an empty image"));
    }
    tracing::debug!(url, width = size.width, height = size.height, "map image loaded");
    Ok(size)
}
