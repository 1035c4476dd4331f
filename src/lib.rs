// push-sounds - play a random sound from your library, usually from a git hook
// The library core knows nothing about audio; the CLI glues it to playback

pub mod cli;     // argument parsing + list/play commands
pub mod config;  // optional config file and precedence rules
pub mod error;   // typed errors for the library core
pub mod library; // directory-backed sound libraries
pub mod logging; // tracing subscriber setup
pub mod sound;   // audio formats and playback

// Export the stuff other modules actually use
pub use config::Config;
pub use error::LibraryError;
pub use library::{default_location, DirectoryLibrary, SoundLibrary};
pub use sound::{AudioFormat, Sound, SoundLoader};
