use crate::library::LibraryFactory;
use crate::sound::{silence_backend_stderr, SoundLoader};
use anyhow::Result;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Copy, Default)]
pub struct PlayOptions {
    pub dry_run: bool,
    pub quiet_backend: bool,
}

/// `play`: pick a random file from `libraries` and play it to the end.
/// Returns the file that was picked.
pub fn play_sound(
    base: &Path,
    libraries: &[String],
    open: &LibraryFactory,
    loader: &dyn SoundLoader,
    options: PlayOptions,
    out: &mut dyn Write,
) -> Result<PathBuf> {
    let library = open(base).map_err(|e| anyhow::anyhow!("unable to initialize sound library: {}", e))?;
    let chosen = library.random_file(libraries)?;

    if options.dry_run {
        writeln!(out, "Would play {}", chosen.display())?;
        return Ok(chosen);
    }

    writeln!(out, "Playing {}", chosen.display())?;
    out.flush()?;

    let sound = loader
        .load(&chosen)
        .map_err(|e| anyhow::anyhow!("unable to decode: {}", e))?;
    info!("Loaded {} ({})", sound.location().display(), sound.format().name());

    // The output device is opened inside play(), so this is the noisy part.
    // Stderr log lines emitted while the guard is held are dropped too.
    let _silenced = if options.quiet_backend {
        Some(silence_backend_stderr()?)
    } else {
        None
    };
    sound.play()?;

    Ok(chosen)
}
