// Command line surface - clap does the parsing, the handlers below do the work
// Handlers take the library factory and an output writer so tests can drive them

pub mod list;
pub mod play;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const LIBRARY_ENV_VAR: &str = "PUSH_SOUNDS_LIBRARY";

#[derive(Parser, Debug)]
#[command(name = "push-sounds", version)]
#[command(about = "Play sounds when you git push")]
pub struct Args {
    /// The base directory for libraries. Each library is a directory under this folder.
    #[arg(
        short = 'L',
        long = "library-base",
        visible_alias = "lib",
        env = LIBRARY_ENV_VAR,
        global = true
    )]
    pub library_base: Option<PathBuf>,

    /// More log output (-v info, -vv debug). RUST_LOG overrides this.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Write logs to a daily rotating file in this directory instead of stderr
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one of the sounds from the library
    Play(PlayArgs),

    /// List libraries or audio files in those libraries
    #[command(subcommand)]
    List(ListCommand),
}

#[derive(clap::Args, Debug, Default)]
pub struct PlayArgs {
    /// Libraries you can pull a sound from (repeat or comma-separate)
    #[arg(short, long, value_delimiter = ',', num_args = 1..)]
    pub libraries: Vec<String>,

    /// Playback volume between 0.0 and 1.0
    #[arg(long)]
    pub volume: Option<f32>,

    /// Only print the sound that would be played
    #[arg(long)]
    pub dry_run: bool,

    /// Send stderr to /dev/null while the sound plays, hiding audio backend noise.
    /// Log lines written to stderr during playback are hidden too; use --log-dir to keep them.
    #[arg(long)]
    pub quiet_backend: bool,
}

#[derive(Subcommand, Debug)]
pub enum ListCommand {
    /// List all libraries
    Libraries {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the files in one or more libraries
    Library {
        /// Library names to list
        #[arg(value_name = "LIBRARY")]
        names: Vec<String>,

        /// Print JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
pub(crate) mod fakes {
    use crate::error::{LibraryError, Result as LibraryResult};
    use crate::library::SoundLibrary;
    use crate::sound::{AudioFormat, Sound, SoundLoader};
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::io;
    use std::path::{Path, PathBuf};
    use std::rc::Rc;

    fn planned_error(path: &str) -> LibraryError {
        LibraryError::general(path, io::Error::new(io::ErrorKind::Other, "planned testing error"))
    }

    /// In-memory library. Anything not configured fails with "planned testing error".
    #[derive(Clone, Default)]
    pub struct FakeLibrary {
        libraries: Option<Vec<String>>,
        files: HashMap<String, Vec<PathBuf>>,
        random: Option<PathBuf>,
        pub requested: Rc<RefCell<Vec<Vec<String>>>>,
    }

    impl FakeLibrary {
        pub fn with_libraries(mut self, names: &[&str]) -> Self {
            self.libraries = Some(names.iter().map(|s| s.to_string()).collect());
            self
        }

        pub fn with_files(mut self, library: &str, files: &[&str]) -> Self {
            self.files
                .insert(library.to_string(), files.iter().map(PathBuf::from).collect());
            self
        }

        pub fn with_random(mut self, file: &str) -> Self {
            self.random = Some(PathBuf::from(file));
            self
        }
    }

    impl SoundLibrary for FakeLibrary {
        fn list_libraries(&self) -> LibraryResult<Vec<String>> {
            self.libraries.clone().ok_or_else(|| planned_error("base"))
        }

        fn list_files(&self, library: &str) -> LibraryResult<Vec<PathBuf>> {
            self.files.get(library).cloned().ok_or_else(|| planned_error(library))
        }

        fn random_file(&self, libraries: &[String]) -> LibraryResult<PathBuf> {
            self.requested.borrow_mut().push(libraries.to_vec());
            self.random.clone().ok_or_else(|| LibraryError::NoFilesAvailable {
                libraries: libraries.to_vec(),
            })
        }
    }

    pub fn failing_factory(
        message: &'static str,
    ) -> impl Fn(&Path) -> anyhow::Result<Box<dyn SoundLibrary>> {
        move |_: &Path| -> anyhow::Result<Box<dyn SoundLibrary>> { Err(anyhow::anyhow!(message)) }
    }

    /// Records what it was asked to load and how many sounds got played
    #[derive(Default)]
    pub struct FakeLoader {
        error: Option<String>,
        pub loaded: RefCell<Vec<PathBuf>>,
        pub played: Rc<Cell<usize>>,
    }

    impl FakeLoader {
        pub fn failing(message: &str) -> Self {
            Self {
                error: Some(message.to_string()),
                ..Self::default()
            }
        }
    }

    impl SoundLoader for FakeLoader {
        fn load(&self, path: &Path) -> anyhow::Result<Box<dyn Sound>> {
            self.loaded.borrow_mut().push(path.to_path_buf());
            if let Some(message) = &self.error {
                return Err(anyhow::anyhow!("{}", message));
            }
            Ok(Box::new(FakeSound {
                path: path.to_path_buf(),
                played: Rc::clone(&self.played),
            }))
        }
    }

    struct FakeSound {
        path: PathBuf,
        played: Rc<Cell<usize>>,
    }

    impl Sound for FakeSound {
        fn play(self: Box<Self>) -> anyhow::Result<()> {
            self.played.set(self.played.get() + 1);
            Ok(())
        }

        fn format(&self) -> AudioFormat {
            AudioFormat::from_path(&self.path)
        }

        fn location(&self) -> &Path {
            &self.path
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_are_well_formed() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_play_with_libraries() {
        let args = Args::try_parse_from([
            "push-sounds", "--lib", "/tmp/sounds", "play", "-l", "a,b", "--libraries", "c",
        ])
        .unwrap();

        assert_eq!(args.library_base, Some(PathBuf::from("/tmp/sounds")));
        match args.command {
            Command::Play(play) => {
                assert_eq!(play.libraries, vec!["a", "b", "c"]);
                assert!(!play.dry_run);
            }
            other => panic!("expected play, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_list_library_names() {
        let args = Args::try_parse_from(["push-sounds", "list", "library", "one", "two", "--json"]).unwrap();
        match args.command {
            Command::List(ListCommand::Library { names, json }) => {
                assert_eq!(names, vec!["one", "two"]);
                assert!(json);
            }
            other => panic!("expected list library, got {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from(["push-sounds", "list", "libraries", "-vv", "-L", "base"]).unwrap();
        assert_eq!(args.verbose, 2);
        assert_eq!(args.library_base, Some(PathBuf::from("base")));
    }
}
