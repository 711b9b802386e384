//! Recursive tree copy
//!
//! Copies a directory tree into a destination that must not exist yet,
//! keeping file permissions and modification times. A per-file hook lets
//! callers replace the plain copy (used to render templates), and entries
//! can be left out by exact name at any depth.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use filetime::FileTime;
use walkdir::{DirEntry, WalkDir};

use crate::error::{Error, Result};

/// Counts from a finished tree copy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    /// Files handed to the copy hook
    pub files: usize,
    /// Directories created, root included
    pub directories: usize,
}

fn is_excluded(entry: &DirEntry, exclude: &[&str]) -> bool {
    entry.depth() > 0
        && exclude
            .iter()
            .any(|name| entry.file_name() == OsStr::new(name))
}

/// Copy the tree at `source` to `destination`, calling `copy_file` for every
/// file with its source and destination paths.
///
/// Entries whose name is in `exclude` are skipped together with their
/// contents. Fails with [`Error::DestinationExists`] if `destination` is
/// already present.
pub fn copy_tree_with<F>(
    source: &Path,
    destination: &Path,
    exclude: &[&str],
    mut copy_file: F,
) -> Result<CopyStats>
where
    F: FnMut(&Path, &Path) -> Result<()>,
{
    if destination.exists() {
        return Err(Error::DestinationExists {
            path: destination.to_path_buf(),
        });
    }

    let mut stats = CopyStats::default();
    let mut directories: Vec<(PathBuf, PathBuf)> = Vec::new();

    let walker = WalkDir::new(source)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_excluded(e, exclude));

    for entry in walker {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| Error::InvalidPath(format!("{e}")))?;
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
            directories.push((entry.path().to_path_buf(), target));
            stats.directories += 1;
        } else {
            tracing::debug!("Copying {} -> {}", entry.path().display(), target.display());
            copy_file(entry.path(), &target)?;
            stats.files += 1;
        }
    }

    // Deepest first, so writing children does not bump a restored parent
    for (src, dst) in directories.iter().rev() {
        let metadata = fs::metadata(src)?;
        filetime::set_file_mtime(dst, FileTime::from_last_modification_time(&metadata))?;
    }

    Ok(stats)
}

/// Copy a single file, keeping its permissions and timestamps
pub fn copy_file_preserving(source: &Path, destination: &Path) -> Result<()> {
    fs::copy(source, destination)?;

    let metadata = fs::metadata(source)?;
    filetime::set_file_times(
        destination,
        FileTime::from_last_access_time(&metadata),
        FileTime::from_last_modification_time(&metadata),
    )?;
    Ok(())
}

/// Copy the tree at `source` to `destination` unmodified
pub fn copy_tree(source: &Path, destination: &Path, exclude: &[&str]) -> Result<CopyStats> {
    copy_tree_with(source, destination, exclude, copy_file_preserving)
}
