use image::{ImageError, ImageFormat, ImageReader};

use crate::error::{Result, ScrivenError};

/// Decode uploaded bytes as an image and re-encode to PNG for the OCR engine.
///
/// Every way the decode can fail maps to [`ScrivenError::InvalidImage`]; the
/// variant carries the concrete cause, which is logged internally and never
/// shown to the caller.
pub fn normalize_image(bytes: &[u8]) -> Result<Vec<u8>> {
    let reader = ImageReader::new(std::io::Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| ScrivenError::InvalidImage(format!("unreadable image header: {e}")))?;

    let img = reader.decode().map_err(|e| {
        let cause = match &e {
            ImageError::Decoding(err) => format!("corrupt image data: {err}"),
            ImageError::Unsupported(err) => format!("unsupported image format: {err}"),
            ImageError::Limits(err) => format!("image exceeds decoder limits: {err}"),
            ImageError::Parameter(err) => format!("invalid decode parameter: {err}"),
            ImageError::IoError(err) => format!("image read failed: {err}"),
            other => format!("image decode failed: {other}"),
        };
        ScrivenError::InvalidImage(cause)
    })?;

    let mut output = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut output), ImageFormat::Png)
        .map_err(|e| ScrivenError::Internal(format!("Failed to encode image: {e}")))?;

    Ok(output)
}
