use super::{PlaybackConfig, Sound, SoundLoader};
#[cfg(feature = "audio")]
use super::AudioFormat;
use anyhow::Result;
#[cfg(feature = "audio")]
use rodio::{Decoder, OutputStream, Sink};
#[cfg(feature = "audio")]
use std::fs::File;
#[cfg(feature = "audio")]
use std::io::BufReader;
#[cfg(feature = "audio")]
use std::path::PathBuf;
use std::path::Path;
#[cfg(feature = "audio")]
use std::time::Duration;
#[cfg(feature = "audio")]
use tracing::{debug, info};

/// A decoded file waiting for an output device
#[cfg(feature = "audio")]
pub struct RodioSound {
    path: PathBuf,
    format: AudioFormat,
    source: Decoder<BufReader<File>>,
    config: PlaybackConfig,
}

#[cfg(feature = "audio")]
impl RodioSound {
    pub fn open(path: &Path, config: PlaybackConfig) -> Result<Self> {
        let file = File::open(path)
            .map_err(|e| anyhow::anyhow!("unable to open audio file {}: {}", path.display(), e))?;

        let format = AudioFormat::from_path(path);
        if !format.is_supported() {
            let extension = path
                .extension()
                .map(|ext| format!(".{}", ext.to_string_lossy()))
                .unwrap_or_default();
            return Err(anyhow::anyhow!("invalid audio file with extension '{}'", extension));
        }

        let source = Decoder::new(BufReader::new(file)).map_err(|e| {
            anyhow::anyhow!("unable to decode audio file {}: {}", path.display(), e)
        })?;

        debug!("Decoded {} as {}", path.display(), format.name());
        Ok(Self {
            path: path.to_path_buf(),
            format,
            source,
            config,
        })
    }
}

#[cfg(feature = "audio")]
impl Sound for RodioSound {
    fn play(self: Box<Self>) -> Result<()> {
        let RodioSound { path, source, config, .. } = *self;

        // Stream has to outlive the sink or playback stops immediately
        let (_stream, stream_handle) = OutputStream::try_default()
            .map_err(|e| anyhow::anyhow!("unable to initialize audio: {}", e))?;
        let sink = Sink::try_new(&stream_handle)
            .map_err(|e| anyhow::anyhow!("unable to initialize audio: {}", e))?;

        sink.set_volume(config.volume);
        sink.append(source);

        info!("Playing {}", path.display());
        sink.sleep_until_end();
        std::thread::sleep(Duration::from_millis(config.tail_ms));
        info!("Finished {}", path.display());

        Ok(())
    }

    fn format(&self) -> AudioFormat {
        self.format
    }

    fn location(&self) -> &Path {
        &self.path
    }
}

/// Loads sounds through rodio's decoders
#[cfg(feature = "audio")]
#[derive(Debug, Clone, Default)]
pub struct RodioLoader {
    config: PlaybackConfig,
}

#[cfg(feature = "audio")]
impl RodioLoader {
    pub fn new(config: PlaybackConfig) -> Self {
        Self { config }
    }
}

#[cfg(feature = "audio")]
impl SoundLoader for RodioLoader {
    fn load(&self, path: &Path) -> Result<Box<dyn Sound>> {
        Ok(Box::new(RodioSound::open(path, self.config.clone())?))
    }
}

/// Stand-in used when the crate is built without `audio`
#[cfg(not(feature = "audio"))]
struct NoAudioLoader;

#[cfg(not(feature = "audio"))]
impl SoundLoader for NoAudioLoader {
    fn load(&self, path: &Path) -> Result<Box<dyn Sound>> {
        Err(anyhow::anyhow!(
            "cannot play {}: audio support not compiled in (enable the `audio` feature)",
            path.display()
        ))
    }
}

pub fn default_loader(config: PlaybackConfig) -> Box<dyn SoundLoader> {
    #[cfg(feature = "audio")]
    {
        Box::new(RodioLoader::new(config))
    }
    #[cfg(not(feature = "audio"))]
    {
        let _ = config;
        Box::new(NoAudioLoader)
    }
}

/// Keeps stderr pointed at /dev/null while alive, so ALSA/JACK chatter doesn't
/// leak into git hook output. The original stderr comes back on drop.
pub struct SilencedStderr {
    #[cfg(unix)]
    backup_fd: libc::c_int,
}

#[cfg(unix)]
pub fn silence_backend_stderr() -> Result<SilencedStderr> {
    unsafe {
        let null_fd = libc::open(
            b"/dev/null\0".as_ptr() as *const libc::c_char,
            libc::O_WRONLY,
        );

        if null_fd == -1 {
            return Err(anyhow::anyhow!("Failed to open /dev/null"));
        }

        // Duplicate stderr so it can be restored later
        let backup_fd = libc::dup(libc::STDERR_FILENO);
        if backup_fd == -1 {
            libc::close(null_fd);
            return Err(anyhow::anyhow!("Failed to backup stderr"));
        }

        if libc::dup2(null_fd, libc::STDERR_FILENO) == -1 {
            libc::close(null_fd);
            libc::close(backup_fd);
            return Err(anyhow::anyhow!("Failed to redirect stderr"));
        }

        libc::close(null_fd);
        Ok(SilencedStderr { backup_fd })
    }
}

#[cfg(not(unix))]
pub fn silence_backend_stderr() -> Result<SilencedStderr> {
    Ok(SilencedStderr {})
}

impl Drop for SilencedStderr {
    fn drop(&mut self) {
        #[cfg(unix)]
        unsafe {
            libc::dup2(self.backup_fd, libc::STDERR_FILENO);
            libc::close(self.backup_fd);
        }
    }
}
