//! Data URI encoding for selected photos
//!
//! No size or type validation happens here. Whatever the user picked is
//! encoded as-is and any rejection is left to the inference provider.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use iced::widget::image::Handle;
use image::ImageFormat;
use std::path::{Path, PathBuf};

use crate::error::CaptureError;

/// MIME type used when neither the bytes nor the extension say what it is
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// An image payload encoded as a self-describing data URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    mime_type: String,
    base64: String,
}

impl EncodedImage {
    /// Encode raw file bytes. `hint` is the original path, used for the
    /// extension fallback when the magic bytes are not recognized.
    pub fn from_bytes(bytes: &[u8], hint: Option<&Path>) -> Self {
        Self {
            mime_type: detect_mime(bytes, hint),
            base64: STANDARD.encode(bytes),
        }
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Length of the base64 payload in bytes
    pub fn encoded_len(&self) -> usize {
        self.base64.len()
    }

    /// `data:<mime>;base64,<payload>`, ready for inline embedding
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64)
    }
}

/// A photo picked by the user, with everything the UI needs to show it
#[derive(Debug, Clone)]
pub struct SelectedImage {
    /// Where the photo was read from
    pub path: PathBuf,
    /// Payload sent to the inference provider
    pub encoded: EncodedImage,
    /// Decoded lazily by iced for the preview pane
    pub preview: Handle,
}

impl SelectedImage {
    /// Filename only (e.g., "rose.jpg")
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    }
}

/// Read a photo from disk and encode it for the inference request
pub async fn load_image(path: PathBuf) -> Result<SelectedImage, CaptureError> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|source| CaptureError::Read {
            path: path.clone(),
            source,
        })?;

    let encoded = EncodedImage::from_bytes(&bytes, Some(&path));

    log::info!(
        "📷 Loaded {} ({} bytes, {})",
        path.display(),
        bytes.len(),
        encoded.mime_type()
    );

    Ok(SelectedImage {
        path,
        encoded,
        preview: Handle::from_bytes(bytes),
    })
}

/// Sniff magic bytes first, then fall back to the file extension
fn detect_mime(bytes: &[u8], hint: Option<&Path>) -> String {
    if let Ok(format) = image::guess_format(bytes) {
        return format.to_mime_type().to_string();
    }

    hint.and_then(|path| ImageFormat::from_path(path).ok())
        .map(|format| format.to_mime_type().to_string())
        .unwrap_or_else(|| FALLBACK_MIME.to_string())
}
