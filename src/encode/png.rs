use base64::Engine as _;
use image::{ExtendedColorType, ImageEncoder, codecs::png::PngEncoder};

use crate::{
    foundation::error::{BlockiconError, BlockiconResult},
    render::composite::IconRgba,
};

/// MIME prefix emitted by [`png_data_url`].
pub const DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Encode the sample buffer as a truecolor (RGBA8, no palette) PNG.
///
/// Encoder failures propagate unchanged as [`BlockiconError::Encode`].
pub fn encode_png(icon: &IconRgba) -> BlockiconResult<Vec<u8>> {
    // The png encoder asserts on this internally; check it here so a
    // mismatched buffer is an error, not a panic. Dimensions whose byte
    // count overflows usize can never match a real buffer.
    let expected = (icon.width as usize)
        .checked_mul(icon.height as usize)
        .and_then(|px| px.checked_mul(4));
    if expected != Some(icon.data.len()) {
        return Err(BlockiconError::encode(format!(
            "buffer length {} does not match {}x{} rgba8",
            icon.data.len(),
            icon.width,
            icon.height
        )));
    }

    let mut out = Vec::new();
    PngEncoder::new(&mut out)
        .write_image(&icon.data, icon.width, icon.height, ExtendedColorType::Rgba8)
        .map_err(|e| BlockiconError::encode(e.to_string()))?;
    Ok(out)
}

/// Wrap encoded PNG bytes as a base64 data URL.
pub fn png_data_url(png: &[u8]) -> String {
    format!(
        "{DATA_URL_PREFIX}{}",
        base64::engine::general_purpose::STANDARD.encode(png)
    )
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
