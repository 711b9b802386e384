//! Mission folder discovery

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::mission::sqm::{SqmField, read_sqm_fields};
use crate::mission::types::{Mission, is_valid_classname};

/// A mission folder found in the missions source directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionDir {
    /// Folder name, e.g. `co10_foo.Altis`
    pub name: String,
    /// Full path to the folder
    pub path: PathBuf,
}

/// List the mission folders directly under `missions_path`.
///
/// Plain files are skipped. Folders are returned sorted by name so the
/// generated config does not depend on directory listing order.
pub fn find_mission_dirs(missions_path: &Path) -> Result<Vec<MissionDir>> {
    let mut dirs = Vec::new();

    for entry in fs::read_dir(missions_path)? {
        let entry = entry?;
        let path = entry.path();
        // Follows symlinks, like the mod sync does
        if !fs::metadata(&path)?.is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        dirs.push(MissionDir { name, path });
    }

    dirs.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(dirs)
}

/// Build the [`Mission`] for a single folder, reading its `mission.sqm`
pub fn load_mission(dir: &MissionDir) -> Result<Mission> {
    let mut mission = Mission::from_dirname(&dir.name);
    if !is_valid_classname(&mission.classname) {
        tracing::warn!(
            "Mission folder '{}' yields class name '{}', which is not a valid identifier",
            dir.name,
            mission.classname
        );
    }

    let mut fields = read_sqm_fields(&dir.path)?;
    mission.metadata.briefing_name = fields.take(SqmField::BriefingName);
    if mission.metadata.briefing_name.is_none() {
        tracing::warn!("No briefingName found for mission '{}'", dir.name);
    }

    Ok(mission)
}

/// Scan every mission folder under `missions_path`
pub fn scan_missions(missions_path: &Path) -> Result<Vec<Mission>> {
    find_mission_dirs(missions_path)?
        .iter()
        .map(load_mission)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write_mission(root: &Path, name: &str, sqm: &str) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("mission.sqm"), sqm).unwrap();
    }

    #[test]
    fn test_scan_sorted_and_skips_files() {
        let temp = TempDir::new().unwrap();
        write_mission(temp.path(), "zulu-one.Tanoa", "briefingName=\"Zulu\";\n");
        write_mission(temp.path(), "alpha-one.Altis", "version=53;\n");
        fs::write(temp.path().join("README.txt"), "not a mission").unwrap();

        let missions = scan_missions(temp.path()).unwrap();
        let names: Vec<_> = missions.iter().map(|m| m.classname.as_str()).collect();
        assert_eq!(names, vec!["alpha_one", "zulu_one"]);

        assert_eq!(missions[0].metadata.briefing_name, None);
        assert_eq!(missions[1].metadata.briefing_name.as_deref(), Some("\"Zulu\""));
        assert_eq!(
            missions[1].metadata.directory,
            r#""cnto\missions\missions\zulu-one.Tanoa""#
        );
    }

    #[test]
    fn test_scan_fails_without_sqm() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("broken.Altis")).unwrap();

        let err = scan_missions(temp.path()).unwrap_err();
        assert!(matches!(err, Error::MissionDescriptionNotFound { .. }));
    }

    #[test]
    fn test_invalid_classname_is_kept() {
        let temp = TempDir::new().unwrap();
        write_mission(temp.path(), "10-foo.Altis", "briefingName=\"Ten\";\n");

        let missions = scan_missions(temp.path()).unwrap();
        assert_eq!(missions.len(), 1);
        assert_eq!(missions[0].classname, "10_foo");
        assert!(!is_valid_classname(&missions[0].classname));
        assert_eq!(missions[0].metadata.briefing_name.as_deref(), Some("\"Ten\""));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_folder_name_is_read_lossily() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(OsStr::from_bytes(b"co-caf\xe9.Altis"));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("mission.sqm"), "version=53;\n").unwrap();

        let dirs = find_mission_dirs(temp.path()).unwrap();
        assert_eq!(dirs.len(), 1);
        assert_eq!(dirs[0].name, "co-caf\u{FFFD}.Altis");
        assert_eq!(dirs[0].path, dir);
        assert_eq!(load_mission(&dirs[0]).unwrap().classname, "co_caf\u{FFFD}");
    }

    #[test]
    fn test_scan_missing_source_dir() {
        let temp = TempDir::new().unwrap();
        let err = scan_missions(&temp.path().join("nope")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
