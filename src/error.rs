// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Video(VideoError),
    /// A fixed sequence (headlines, clips) was configured with no entries.
    EmptySequence(&'static str),
    /// The platform opener for an external link could not be spawned.
    Launch(String),
    /// The windowing runtime failed to start or exited with an error.
    Gui(String),
}

/// Reasons a hero clip could not be played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoError {
    /// FFmpeg has no decoder for the clip's codec.
    UnsupportedCodec(String),
    CorruptedFile,
    NoVideoStream,
    DecodingFailed(String),
    /// Missing or unreadable file.
    IoError(String),

    /// No frame arrived before the stall timeout.
    LoadTimedOut,
    Other(String),
}

/// Codec names recognised in FFmpeg error messages.
const KNOWN_CODECS: [&str; 8] = ["h264", "hevc", "h265", "prores", "vp8", "vp9", "av1", "mpeg4"];

impl VideoError {
    /// Sorts a raw FFmpeg or decoder message into a variant.
    pub fn from_message(msg: &str) -> Self {
        let lower = msg.to_lowercase();
        let mentions = |needles: &[&str]| needles.iter().any(|needle| lower.contains(needle));

        // codec messages often say "not found" too, so they go first
        if mentions(&["codec", "decoder"]) {
            if let Some(codec) = KNOWN_CODECS.iter().find(|codec| lower.contains(*codec)) {
                return Self::UnsupportedCodec(codec.to_uppercase());
            }
            if mentions(&["not found", "unsupported"]) {
                return Self::DecodingFailed(msg.to_string());
            }
        }

        if mentions(&["no such file", "permission denied", "i/o error", "not found"]) {
            Self::IoError(msg.to_string())
        } else if mentions(&["no video stream", "no video track", "invalid data found"]) {
            Self::NoVideoStream
        } else if mentions(&["corrupt", "invalid", "malformed"]) {
            Self::CorruptedFile
        } else if mentions(&["packet", "scaling", "decode", "unsupported"]) {
            Self::DecodingFailed(msg.to_string())
        } else {
            Self::Other(msg.to_string())
        }
    }
}

impl fmt::Display for VideoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedCodec(codec) => write!(f, "codec {codec} is not supported"),
            Self::CorruptedFile => f.write_str("clip file is corrupted"),
            Self::NoVideoStream => f.write_str("clip has no video stream"),
            Self::DecodingFailed(msg) => write!(f, "decoding failed: {msg}"),
            Self::IoError(msg) => write!(f, "cannot read clip: {msg}"),
            Self::LoadTimedOut => f.write_str("clip did not start before the stall timeout"),
            Self::Other(msg) => f.write_str(msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Video(e) => write!(f, "Video Error: {}", e),
            Error::EmptySequence(what) => {
                write!(f, "Configuration Error: the {} list must not be empty", what)
            }
            Error::Launch(e) => write!(f, "Launch Error: {}", e),
            Error::Gui(e) => write!(f, "GUI Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<VideoError> for Error {
    fn from(err: VideoError) -> Self {
        Error::Video(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn empty_sequence_names_the_list() {
        let err = Error::EmptySequence("headlines");
        assert_eq!(
            format!("{}", err),
            "Configuration Error: the headlines list must not be empty"
        );
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn video_error_from_message_io() {
        let err = VideoError::from_message("No such file or directory");
        assert!(matches!(err, VideoError::IoError(_)));
    }

    #[test]
    fn video_error_from_message_no_stream() {
        let err = VideoError::from_message("No video stream found in file");
        assert!(matches!(err, VideoError::NoVideoStream));
    }

    #[test]
    fn video_error_from_message_codec() {
        let err = VideoError::from_message("Decoder prores not found");
        assert!(matches!(err, VideoError::UnsupportedCodec(codec) if codec == "PRORES"));
    }

    #[test]
    fn video_error_from_message_corrupted() {
        let err = VideoError::from_message("File is corrupt or invalid");
        assert!(matches!(err, VideoError::CorruptedFile));
    }

    #[test]
    fn video_error_from_message_decoding() {
        let err = VideoError::from_message("Packet send failed: error");
        assert!(matches!(err, VideoError::DecodingFailed(_)));
    }

    #[test]
    fn video_error_converts_into_error() {
        let err: Error = VideoError::LoadTimedOut.into();
        assert!(matches!(err, Error::Video(VideoError::LoadTimedOut)));
    }
}
