//! Target tree assembly
//!
//! The target mod is the build mod minus the raw mission folders, plus the
//! PBO packed from them. Missions are packed from the build tree, which still
//! holds them, and the archive is written into the target tree.

use std::fs;
use std::path::{Path, PathBuf};

use crate::archive::makepbo::ArchiverConfig;
use crate::error::Result;
use crate::layout::{ARCHIVE_OUTPUT_PATH, ARCHIVE_SOURCE_PATH, EXCLUDED_DIRNAME};
use crate::staging::copy_tree;

/// Result of assembling the target mod
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveReport {
    /// Files copied from the build tree
    pub files_copied: usize,
    /// Path of the written PBO
    pub archive_path: PathBuf,
}

/// Copy `build_mod_path` to `target_mod_path` without any `missions`
/// entries, then pack the build tree's missions into the target.
pub fn produce_archive(
    build_mod_path: &Path,
    target_mod_path: &Path,
    archiver: &ArchiverConfig,
) -> Result<ArchiveReport> {
    let files_copied = produce_target_tree(build_mod_path, target_mod_path)?;
    let archive_path = pack_missions(build_mod_path, target_mod_path, archiver)?;

    Ok(ArchiveReport {
        files_copied,
        archive_path,
    })
}

/// Copy the build mod into the target, leaving out every `missions` entry
pub fn produce_target_tree(build_mod_path: &Path, target_mod_path: &Path) -> Result<usize> {
    let stats = copy_tree(build_mod_path, target_mod_path, &[EXCLUDED_DIRNAME])?;
    Ok(stats.files)
}

/// Pack `<build>/addons/missions` into `<target>/addons/missions.pbo`
pub fn pack_missions(
    build_mod_path: &Path,
    target_mod_path: &Path,
    archiver: &ArchiverConfig,
) -> Result<PathBuf> {
    let source = build_mod_path.join(ARCHIVE_SOURCE_PATH);
    let output = target_mod_path.join(ARCHIVE_OUTPUT_PATH);
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }

    tracing::info!("Generating {}", output.display());
    archiver.pack(&source, &output)?;
    Ok(output)
}
