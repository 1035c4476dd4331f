use super::SoundLibrary;
use crate::error::{LibraryError, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Library backed by a plain directory tree:
/// base -> one directory per library -> sound files
#[derive(Debug, Clone)]
pub struct DirectoryLibrary {
    base_path: PathBuf,
}

impl DirectoryLibrary {
    /// Check the base once up front. Contents are not read until asked for.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Result<Self> {
        let base_path = base_path.as_ref();

        let metadata = match fs::metadata(base_path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(LibraryError::NotFound {
                    path: base_path.to_path_buf(),
                });
            }
            Err(e) => return Err(LibraryError::general(base_path, e)),
        };

        if !metadata.is_dir() {
            return Err(LibraryError::NotADirectory {
                path: base_path.to_path_buf(),
            });
        }

        Ok(Self {
            base_path: base_path.to_path_buf(),
        })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Same as `random_file` but with a caller-supplied generator
    pub fn random_file_with<R: Rng + ?Sized>(&self, libraries: &[String], rng: &mut R) -> Result<PathBuf> {
        let mut files = Vec::new();

        for library in libraries {
            match self.list_files(library) {
                Ok(mut library_files) => files.append(&mut library_files),
                Err(e) => debug!("Skipping library '{}': {}", library, e),
            }
        }

        let Some(chosen) = files.choose(rng).cloned() else {
            // A vanished base is reported as such rather than as "no files"
            fs::read_dir(&self.base_path).map_err(|e| LibraryError::general(&self.base_path, e))?;
            return Err(LibraryError::NoFilesAvailable {
                libraries: libraries.to_vec(),
            });
        };

        debug!("Picked {} out of {} candidates", chosen.display(), files.len());
        Ok(chosen)
    }

    /// `base/library`, with any root or drive prefix in `library` dropped so
    /// an absolute name can't point outside the base
    fn library_path(&self, library: &str) -> PathBuf {
        let mut path = self.base_path.clone();
        for component in Path::new(library).components() {
            match component {
                Component::Normal(part) => path.push(part),
                Component::ParentDir => path.push(".."),
                Component::RootDir | Component::Prefix(_) | Component::CurDir => {}
            }
        }
        path
    }

    /// Read one directory, keeping entries whose directory-ness matches `want_dirs`.
    /// Symlinks are not followed when classifying entries.
    fn read_entries(&self, dir: &Path, want_dirs: bool) -> Result<Vec<fs::DirEntry>> {
        let entries = fs::read_dir(dir).map_err(|e| LibraryError::general(dir, e))?;
        let mut kept = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|e| LibraryError::general(dir, e))?;
            let file_type = entry.file_type().map_err(|e| LibraryError::general(entry.path(), e))?;

            if file_type.is_dir() == want_dirs {
                kept.push(entry);
            }
        }

        Ok(kept)
    }
}

impl SoundLibrary for DirectoryLibrary {
    fn list_libraries(&self) -> Result<Vec<String>> {
        let libraries = self
            .read_entries(&self.base_path, true)?
            .into_iter()
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();

        Ok(libraries)
    }

    fn list_files(&self, library: &str) -> Result<Vec<PathBuf>> {
        let library_path = self.library_path(library);
        let files = self
            .read_entries(&library_path, false)?
            .into_iter()
            .map(|entry| library_path.join(entry.file_name()))
            .collect();

        Ok(files)
    }

    fn random_file(&self, libraries: &[String]) -> Result<PathBuf> {
        self.random_file_with(libraries, &mut rand::thread_rng())
    }
}
