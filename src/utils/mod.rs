//! Shared utilities: JSON debug rendering and audio media-type handling.

pub mod json;
pub mod media_type;

pub use media_type::{AudioFormat, is_valid_audio_type, media_type_from_path};
