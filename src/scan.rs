//! Locating chat exports in a message-archive directory tree.
//!
//! Archive downloads place each conversation in its own leaf directory with
//! a single `message.json` inside. [`find_exports`] walks a tree and
//! returns those files as a finite, sorted sequence, decoupled from any
//! reading or aggregation.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{ChatvizError, Result};

/// File name that marks a conversation directory.
pub const EXPORT_FILE_NAME: &str = "message.json";

/// Finds every chat export under `root`.
///
/// A directory matches when it is a leaf (no subdirectories) and contains
/// exactly one file, named [`EXPORT_FILE_NAME`]. Directories with extra
/// files, nested directories, or differently named files are skipped.
///
/// The result is sorted by path, so repeated scans of the same tree are
/// deterministic. Fails with [`NotFound`](ChatvizError::NotFound) if `root`
/// is not a directory.
pub fn find_exports(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(ChatvizError::NotFound {
            path: root.to_path_buf(),
        });
    }

    let mut exports = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| ChatvizError::Io(e.into()))?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let mut subdirs = 0usize;
        let mut files = Vec::new();
        for child in fs::read_dir(entry.path())? {
            let child = child?;
            if child.file_type()?.is_dir() {
                subdirs += 1;
            } else {
                files.push(child.file_name());
            }
        }

        if subdirs == 0 && files.len() == 1 && files[0] == EXPORT_FILE_NAME {
            exports.push(entry.path().join(EXPORT_FILE_NAME));
        }
    }

    exports.sort();
    Ok(exports)
}
