use rfd::AsyncFileDialog;
use std::path::PathBuf;

/// Extensions offered by default in the picker. "All files" stays available
/// since nothing is rejected before it reaches the inference provider.
const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "webp", "gif", "bmp", "tif", "tiff", "heic", "heif",
];

/// Show the native file picker and wait for the user.
/// Returns `None` when the dialog is cancelled.
pub async fn pick_image_file() -> Option<PathBuf> {
    let handle = AsyncFileDialog::new()
        .set_title("Select a photo of your plant")
        .add_filter("Images", IMAGE_EXTENSIONS)
        .add_filter("All files", &["*"])
        .pick_file()
        .await?;

    Some(handle.path().to_path_buf())
}
