// this_file: fontresolve/src/copier.rs
//
// Copying fetched font files and summarizing the result

use crate::Result;
use log::debug;
use serde::Serialize;
use std::{fs, io::Write, path::Path};
use walkdir::WalkDir;

/// Listings longer than this are elided
const MAX_LISTED: usize = 10;

/// Number of names shown in an elided listing
const ELIDED_PREVIEW: usize = 5;

/// Copy every file under `src` into `dest`, creating `dest` and any
/// subdirectories. Existing files are overwritten. Returns the number of
/// files copied.
pub fn copy_font_files(src: &Path, dest: &Path) -> Result<usize> {
    fs::create_dir_all(dest)?;

    let mut copied = 0;
    for entry in WalkDir::new(src).min_depth(1).follow_links(true) {
        let entry = entry?;
        let relative = entry.path().strip_prefix(src).unwrap_or(entry.path());
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }

    debug!("copied {} file(s) from {} to {}", copied, src.display(), dest.display());
    Ok(copied)
}

/// Number of entries sharing a file extension
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionCount {
    /// Lowercased extension with its leading dot, empty for none
    pub extension: String,
    pub count: usize,
}

/// Summary of a font output directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FontSummary {
    /// Entry names, sorted
    pub files: Vec<String>,

    /// Counts per extension, in order of first appearance in `files`
    pub extensions: Vec<ExtensionCount>,
}

impl FontSummary {
    /// List the top-level entries of a directory
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            files.push(entry?.file_name().to_string_lossy().into_owned());
        }
        files.sort();
        Ok(Self::from_names(files))
    }

    pub fn from_names(files: Vec<String>) -> Self {
        let mut extensions: Vec<ExtensionCount> = Vec::new();
        for file in &files {
            let extension = extension_of(file);
            match extensions.iter_mut().find(|e| e.extension == extension) {
                Some(existing) => existing.count += 1,
                None => extensions.push(ExtensionCount { extension, count: 1 }),
            }
        }
        Self { files, extensions }
    }

    pub fn total(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Write the human-readable listing. Nothing is written for an empty
    /// directory.
    pub fn render<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        if self.is_empty() {
            return Ok(());
        }

        writeln!(out, "   Found {} font file(s)", self.total())?;

        if self.total() <= MAX_LISTED {
            for file in &self.files {
                writeln!(out, "   • {}", file)?;
            }
        } else {
            writeln!(
                out,
                "   • First {} files: {}...",
                ELIDED_PREVIEW,
                self.files[..ELIDED_PREVIEW].join(", ")
            )?;
        }

        let types: Vec<String> = self
            .extensions
            .iter()
            .map(|e| format!("{}({})", e.extension, e.count))
            .collect();
        writeln!(out, "   File types: {}", types.join(", "))
    }
}

/// Extension in `.ext` form, lowercased. Dotfiles and names without a dot
/// have none.
fn extension_of(name: &str) -> String {
    Path::new(name)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}
