use crate::library::LibraryFactory;
use crate::sound::AudioFormat;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

const NAME_WIDTH: usize = 15;

#[derive(Debug, Serialize)]
struct LibrarySummary {
    name: String,
    files: usize,
}

#[derive(Debug, Serialize)]
struct LibraryListing {
    name: String,
    files: Vec<FileEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct FileEntry {
    path: PathBuf,
    format: AudioFormat,
}

/// `list libraries`: every library with how many files it holds.
/// A library that can't be read counts as empty rather than failing the listing.
pub fn list_libraries(base: &Path, open: &LibraryFactory, json: bool, out: &mut dyn Write) -> Result<()> {
    let library = open(base).map_err(|e| anyhow::anyhow!("unable to initialize sound library: {}", e))?;
    let mut names = library
        .list_libraries()
        .map_err(|e| anyhow::anyhow!("problem listing existing libraries: {}", e))?;
    // read_dir order is filesystem dependent
    names.sort();

    let summaries: Vec<LibrarySummary> = names
        .into_iter()
        .map(|name| {
            let files = match library.list_files(&name) {
                Ok(files) => files.len(),
                Err(e) => {
                    debug!("Counting '{}' as empty: {}", name, e);
                    0
                }
            };
            LibrarySummary { name, files }
        })
        .collect();

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&summaries)?)?;
        return Ok(());
    }

    if summaries.is_empty() {
        writeln!(out, "No libraries found")?;
        return Ok(());
    }

    writeln!(out, "{:<width$} {}", "Name", "Files", width = NAME_WIDTH)?;
    writeln!(out, "{} {}", "-".repeat(NAME_WIDTH), "-".repeat("Files".len()))?;
    for summary in &summaries {
        writeln!(out, "{:<width$} {:>5}", summary.name, summary.files, width = NAME_WIDTH)?;
    }

    Ok(())
}

/// `list library <name>...`: the files in each named library.
/// Per-library failures are reported inline and don't fail the command.
pub fn list_library_files(
    base: &Path,
    names: &[String],
    open: &LibraryFactory,
    json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    if names.is_empty() {
        return Err(anyhow::anyhow!("required library name to list"));
    }

    let library = open(base).map_err(|e| anyhow::anyhow!("unable to initialize sound library: {}", e))?;

    let listings: Vec<LibraryListing> = names
        .iter()
        .map(|name| match library.list_files(name) {
            Ok(mut files) => {
                files.sort();
                LibraryListing {
                    name: name.clone(),
                    files: files
                        .into_iter()
                        .map(|path| FileEntry {
                            format: AudioFormat::from_path(&path),
                            path,
                        })
                        .collect(),
                    error: None,
                }
            }
            Err(e) => LibraryListing {
                name: name.clone(),
                files: Vec::new(),
                error: Some(e.to_string()),
            },
        })
        .collect();

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&listings)?)?;
        return Ok(());
    }

    for listing in &listings {
        writeln!(out, "{}\n{}", listing.name, "=".repeat(listing.name.chars().count()))?;

        if let Some(error) = &listing.error {
            writeln!(out, "Error listing library files: {}\n", error)?;
        } else if listing.files.is_empty() {
            writeln!(out, "No files found\n")?;
        } else {
            for file in &listing.files {
                let file_name = file
                    .path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| file.path.display().to_string());
                writeln!(out, "{}", file_name)?;
            }
            writeln!(out)?;
        }
    }

    Ok(())
}
