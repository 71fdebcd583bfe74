//! Image capture
//!
//! Getting a photo from the user and turning it into something that can be
//! embedded in an inference request:
//! - Native file picker (picker.rs)
//! - Data URI encoding and MIME sniffing (encode.rs)

pub mod encode;
pub mod picker;

pub use encode::{load_image, EncodedImage, SelectedImage};
pub use picker::pick_image_file;
