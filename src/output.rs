//! Download file naming and image saving.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::LuminaError;

/// Generate the download filename for a produced image.
///
/// Always `lumina-ai-{unix-millis}.png`; the published payload is PNG.
#[must_use]
pub fn download_filename() -> String {
    let millis =
        SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
    format!("lumina-ai-{millis}.png")
}

/// Save raw image bytes to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_image(data: &[u8], output_path: &Path) -> Result<(), LuminaError> {
    std::fs::write(output_path, data).map_err(LuminaError::Io)
}
