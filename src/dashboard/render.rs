//! Image decoding and fit-to-frame scaling for the viewer.
//!
//! Files are named `.jpg` no matter what the gallery served, so the format
//! is sniffed from the content rather than the extension.

use iced::widget::image::Handle;
use image::{ImageError, ImageReader, RgbaImage, imageops::FilterType};
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, warn};

/// Decode `bytes` and scale to fit inside `width` x `height`, keeping the
/// aspect ratio. Small images are scaled up.
pub fn scale_to_frame(bytes: &[u8], width: u32, height: u32) -> Result<RgbaImage, ImageError> {
    let decoded = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .decode()?;
    Ok(decoded.resize(width, height, FilterType::Lanczos3).to_rgba8())
}

/// Load the image at `path` as a display handle sized for the frame.
///
/// Unreadable or corrupt files give `None`; the frame is then left blank.
pub fn load_scaled(path: &Path, width: u32, height: u32) -> Option<Handle> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Could not read image");
            return None;
        }
    };
    match scale_to_frame(&bytes, width, height) {
        Ok(scaled) => {
            let (w, h) = scaled.dimensions();
            debug!(path = %path.display(), w, h, "Rendered image");
            Some(Handle::from_rgba(w, h, scaled.into_raw()))
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Could not decode image");
            None
        }
    }
}
