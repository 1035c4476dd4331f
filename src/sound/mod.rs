// Sounds - what a picked library file turns into once we want to hear it
// Format detection lives here; the actual decoding/output is in player.rs

pub mod player;

pub use player::{default_loader, silence_backend_stderr, SilencedStderr};
#[cfg(feature = "audio")]
pub use player::{RodioLoader, RodioSound};

use anyhow::Result;
use serde::Serialize;
use std::path::Path;

/// Something that can be played once, start to finish
pub trait Sound {
    /// Blocks until the sound has finished
    fn play(self: Box<Self>) -> Result<()>;
    fn format(&self) -> AudioFormat;
    fn location(&self) -> &Path;
}

/// Opens a file as a `Sound`. The play command depends on this so tests
/// can swap in a fake loader.
pub trait SoundLoader {
    fn load(&self, path: &Path) -> Result<Box<dyn Sound>>;
}

#[derive(Debug, Clone)]
pub struct PlaybackConfig {
    pub volume: f32, // 0.0 to 1.0
    pub tail_ms: u64, // extra wait after the sink drains so the end isn't clipped
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            volume: 1.0,
            tail_ms: 100,
        }
    }
}

impl PlaybackConfig {
    pub fn with_volume(volume: f32) -> Self {
        Self {
            volume: volume.clamp(0.0, 1.0),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AudioFormat {
    Ogg,
    Wav,
    Mp3,
    Flac,
    Unknown,
}

impl AudioFormat {
    /// Every format we know how to decode
    pub fn known() -> [AudioFormat; 4] {
        [AudioFormat::Ogg, AudioFormat::Wav, AudioFormat::Mp3, AudioFormat::Flac]
    }

    pub fn from_extension(ext: &str) -> Self {
        match ext.trim_start_matches('.').to_lowercase().as_str() {
            "ogg" | "oga" => AudioFormat::Ogg,
            "wav" => AudioFormat::Wav,
            "mp3" => AudioFormat::Mp3,
            "flac" => AudioFormat::Flac,
            _ => AudioFormat::Unknown,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(AudioFormat::from_extension)
            .unwrap_or(AudioFormat::Unknown)
    }

    pub fn name(&self) -> &'static str {
        match self {
            AudioFormat::Ogg => "ogg/vorbis",
            AudioFormat::Wav => "wav",
            AudioFormat::Mp3 => "mp3",
            AudioFormat::Flac => "flac",
            AudioFormat::Unknown => "Unknown Audio File",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            AudioFormat::Ogg => ".ogg",
            AudioFormat::Wav => ".wav",
            AudioFormat::Mp3 => ".mp3",
            AudioFormat::Flac => ".flac",
            AudioFormat::Unknown => "UNKNOWN AUDIO FILE",
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, AudioFormat::Unknown)
    }
}
