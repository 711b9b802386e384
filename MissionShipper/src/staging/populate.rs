//! Mission folder population

use std::path::Path;

use crate::error::Result;
use crate::layout::MISSIONS_DIR_PATH;
use crate::mission::find_mission_dirs;
use crate::staging::copy::copy_tree;

/// Copy every mission folder from `missions_path` into
/// `<build_mod_path>/addons/missions/<name>`, unmodified.
///
/// The build tree is expected to be fresh: a mission folder that already
/// exists in it is an error. Returns the number of missions copied.
pub fn populate_missions(missions_path: &Path, build_mod_path: &Path) -> Result<usize> {
    let missions_dir = build_mod_path.join(MISSIONS_DIR_PATH);
    let dirs = find_mission_dirs(missions_path)?;

    for dir in &dirs {
        tracing::info!("Adding mission '{}'", dir.name);
        copy_tree(&dir.path, &missions_dir.join(&dir.name), &[])?;
    }

    Ok(dirs.len())
}
