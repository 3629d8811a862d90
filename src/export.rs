use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};
use thiserror::Error;

/// Errors that can occur while exporting the surface
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("failed to write image: {0}")]
    Write(#[from] std::io::Error),

    #[error("browser download failed: {0}")]
    Browser(String),
}

/// Encode the pixels as a PNG file in memory
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, ExportError> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// `{prefix}-{timestamp_millis}.png`
pub fn file_name(prefix: &str, timestamp_millis: u64) -> String {
    format!("{prefix}-{timestamp_millis}.png")
}

/// Encode and write the image into `dir`, returning the path written
pub fn save_to_dir(
    image: &RgbaImage,
    dir: &Path,
    prefix: &str,
    timestamp_millis: u64,
) -> Result<PathBuf, ExportError> {
    let bytes = encode_png(image)?;
    let path = dir.join(file_name(prefix, timestamp_millis));
    std::fs::write(&path, bytes)?;
    log::info!("saved {} ({}x{})", path.display(), image.width(), image.height());
    Ok(path)
}

/// Hand the PNG to the browser as a file download named `name`
#[cfg(target_arch = "wasm32")]
pub fn offer_download(name: &str, png: &[u8]) -> Result<(), ExportError> {
    use eframe::wasm_bindgen::{JsCast as _, JsValue};

    let browser = |err: JsValue| ExportError::Browser(format!("{err:?}"));
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| ExportError::Browser("no document".to_owned()))?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(png));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("image/png");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(browser)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(browser)?;

    let anchor = document
        .create_element("a")
        .map_err(browser)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| ExportError::Browser("not an anchor element".to_owned()))?;
    anchor.set_href(&url);
    anchor.set_download(name);
    anchor.click();
    web_sys::Url::revoke_object_url(&url).map_err(browser)?;

    log::info!("offered {name} for download ({} bytes)", png.len());
    Ok(())
}
