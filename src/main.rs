// push-sounds - hook it to post-push and enjoy the airhorn

use anyhow::Result;
use clap::Parser;
use push_sounds::cli::list::{list_libraries, list_library_files};
use push_sounds::cli::play::{play_sound, PlayOptions};
use push_sounds::cli::{Args, Command, ListCommand};
use push_sounds::config::Config;
use push_sounds::library::open_directory_library;
use push_sounds::logging;
use push_sounds::sound::{default_loader, PlaybackConfig};
use std::io;
use tracing::{debug, error};

fn main() -> Result<()> {
    let args = Args::parse();

    // Guard flushes the file writer on drop, keep it for the whole run
    let _log_guard = logging::init(args.verbose, args.log_dir.as_deref())?;
    let logs_to_file = args.log_dir.is_some();

    let result = run(args);
    if let Err(e) = &result {
        // stderr already gets anyhow's report, so only mirror it into the log file
        if logs_to_file {
            error!("{:#}", e);
        }
    }
    result
}

fn run(args: Args) -> Result<()> {
    let config = Config::load()?;
    let base = config.resolve_library_base(args.library_base);
    debug!("Library base: {}", base.display());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Play(play) => {
            let libraries = config.effective_libraries(&play.libraries);
            let loader = default_loader(PlaybackConfig::with_volume(config.effective_volume(play.volume)));
            let options = PlayOptions {
                dry_run: play.dry_run,
                quiet_backend: play.quiet_backend,
            };
            play_sound(&base, &libraries, &open_directory_library, loader.as_ref(), options, &mut out)?;
        }
        Command::List(ListCommand::Libraries { json }) => {
            list_libraries(&base, &open_directory_library, json, &mut out)?;
        }
        Command::List(ListCommand::Library { names, json }) => {
            list_library_files(&base, &names, &open_directory_library, json, &mut out)?;
        }
    }

    Ok(())
}
