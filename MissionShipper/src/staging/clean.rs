//! Stale output cleanup

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::Result;

/// Remove the directory tree at `path`.
///
/// A missing directory counts as already clean. Returns whether anything
/// was removed.
pub fn remove_dir_if_exists(path: &Path) -> Result<bool> {
    match fs::remove_dir_all(path) {
        Ok(()) => {
            tracing::info!("Cleaning up directory '{}'", path.display());
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_remove_existing_tree() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("@cnto_missions");
        fs::create_dir_all(dir.join("addons/missions")).unwrap();
        fs::write(dir.join("mod.cpp"), "x").unwrap();

        assert!(remove_dir_if_exists(&dir).unwrap());
        assert!(!dir.exists());
    }

    #[test]
    fn test_remove_missing_is_ok() {
        let temp = TempDir::new().unwrap();
        assert!(!remove_dir_if_exists(&temp.path().join("nothing")).unwrap());
    }
}
