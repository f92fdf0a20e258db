use std::path::Path;

use image::RgbaImage;

use crate::foundation::error::{SpinError, SpinResult};

/// Decode encoded image bytes into straight-alpha RGBA8.
///
/// Sources without an alpha channel are promoted to fully opaque RGBA.
pub fn decode_image(bytes: &[u8]) -> SpinResult<RgbaImage> {
    let dyn_img = image::load_from_memory(bytes).map_err(|e| SpinError::decode(e.to_string()))?;
    let rgba = dyn_img.to_rgba8();
    if rgba.width() == 0 || rgba.height() == 0 {
        return Err(SpinError::decode("image has zero width or height"));
    }
    Ok(rgba)
}

/// Read and decode the source image at `path`.
#[tracing::instrument]
pub fn load_source(path: &Path) -> SpinResult<RgbaImage> {
    let bytes = std::fs::read(path)
        .map_err(|e| SpinError::decode(format!("read '{}': {e}", path.display())))?;
    let img = decode_image(&bytes).map_err(|e| match e {
        SpinError::Decode(msg) => SpinError::decode(format!("'{}': {msg}", path.display())),
        other => other,
    })?;
    tracing::debug!(width = img.width(), height = img.height(), "decoded source");
    Ok(img)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
