// Sound libraries - a root folder where every subdirectory is a named library
// Everything is read live from disk, nothing is cached between calls

pub mod directory; // the filesystem-backed implementation
pub mod location;  // where the library base lives by default

pub use directory::DirectoryLibrary;
pub use location::{default_location, default_location_from};

use crate::error::Result;
use std::path::{Path, PathBuf};

/// What the CLI needs from a sound library. Commands depend on this trait,
/// so tests can hand them a fake instead of a real directory tree.
pub trait SoundLibrary {
    /// Names of the libraries under the base, in directory order
    fn list_libraries(&self) -> Result<Vec<String>>;

    /// Full paths of the files directly inside `library`
    fn list_files(&self, library: &str) -> Result<Vec<PathBuf>>;

    /// One file picked uniformly from every library in `libraries` that could be read.
    /// Unreadable libraries are skipped; only an empty pool is an error.
    fn random_file(&self, libraries: &[String]) -> Result<PathBuf>;
}

/// Builds a library for a base path. Commands take one of these instead of
/// calling a constructor directly.
pub type LibraryFactory<'a> = dyn Fn(&Path) -> anyhow::Result<Box<dyn SoundLibrary>> + 'a;

/// The factory used outside of tests
pub fn open_directory_library(base: &Path) -> anyhow::Result<Box<dyn SoundLibrary>> {
    Ok(Box::new(DirectoryLibrary::new(base)?))
}
