//! Audio media-type inference and validation.
//!
//! The recognize operation needs a `Content-Type` that names the audio
//! encoding. When the caller does not supply one it is inferred from the
//! file extension; either way the value must parse as an `audio/*` media
//! type before any upload is attempted.

use std::path::Path;

/// Audio formats accepted by the speech recognition endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    /// WAV container (PCM).
    Wav,
    /// FLAC encoded audio.
    Flac,
    /// Opus encoded in OGG container.
    OggOpus,
    /// Raw little-endian 16-bit PCM.
    Raw,
}

impl AudioFormat {
    /// Media type string sent as `Content-Type`.
    pub fn media_type(&self) -> &'static str {
        match self {
            Self::Wav => "audio/wav",
            Self::Flac => "audio/flac",
            Self::OggOpus => "audio/ogg; codecs=opus",
            Self::Raw => "audio/l16; rate=48000",
        }
    }

    /// Map a file extension to its audio format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "wav" => Some(Self::Wav),
            "flac" => Some(Self::Flac),
            "ogg" | "opus" => Some(Self::OggOpus),
            "raw" | "pcm" => Some(Self::Raw),
            _ => None,
        }
    }
}

impl std::fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.media_type())
    }
}

/// Infer the audio media type from a file path's extension.
pub fn media_type_from_path(path: &Path) -> Option<&'static str> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(AudioFormat::from_extension)
        .map(|format| format.media_type())
}

/// Check that a string is a syntactically valid `audio/*` media type.
///
/// Parameters after `;` are ignored; the primary type must be `audio` and
/// the subtype must be a non-empty token.
pub fn is_valid_audio_type(content_type: &str) -> bool {
    let essence = content_type.split(';').next().unwrap_or("").trim();

    let Some((primary, subtype)) = essence.split_once('/') else {
        return false;
    };

    primary.eq_ignore_ascii_case("audio")
        && !subtype.is_empty()
        && subtype
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '+' | '.' | '_'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_media_type_from_known_extensions() {
        assert_eq!(
            media_type_from_path(&PathBuf::from("clip.wav")),
            Some("audio/wav")
        );
        assert_eq!(
            media_type_from_path(&PathBuf::from("clip.FLAC")),
            Some("audio/flac")
        );
        assert_eq!(
            media_type_from_path(&PathBuf::from("clip.ogg")),
            Some("audio/ogg; codecs=opus")
        );
        assert_eq!(
            media_type_from_path(&PathBuf::from("clip.raw")),
            Some("audio/l16; rate=48000")
        );
    }

    #[test]
    fn test_media_type_from_unknown_extension() {
        assert_eq!(media_type_from_path(&PathBuf::from("clip.mp4")), None);
        assert_eq!(media_type_from_path(&PathBuf::from("noextension")), None);
    }

    #[test]
    fn test_valid_audio_types() {
        assert!(is_valid_audio_type("audio/wav"));
        assert!(is_valid_audio_type("audio/l16; rate=16000; channels=1"));
        assert!(is_valid_audio_type("AUDIO/FLAC"));
        assert!(is_valid_audio_type("audio/ogg; codecs=opus"));
    }

    #[test]
    fn test_invalid_audio_types() {
        assert!(!is_valid_audio_type("video/mp4"));
        assert!(!is_valid_audio_type("audio"));
        assert!(!is_valid_audio_type("audio/"));
        assert!(!is_valid_audio_type(""));
        assert!(!is_valid_audio_type("audio/wav extra"));
    }

    #[test]
    fn test_format_display_matches_media_type() {
        assert_eq!(AudioFormat::Wav.to_string(), "audio/wav");
        assert_eq!(AudioFormat::OggOpus.to_string(), "audio/ogg; codecs=opus");
    }
}
