//! Run configuration

use std::path::{Path, PathBuf};

use crate::archive::ArchiverConfig;
use crate::layout::MOD_DIRNAME;

/// Default template source directory
pub const DEFAULT_TEMPLATE_PATH: &str = "./templates/";
/// Default raw missions directory
pub const DEFAULT_MISSIONS_PATH: &str = "./missions";
/// Default staging directory
pub const DEFAULT_BUILD_PATH: &str = "./build";
/// Default output directory
pub const DEFAULT_TARGET_PATH: &str = "./";

/// Input and output locations of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipperPaths {
    /// Directory holding the `@cnto_missions` skeleton
    pub template_path: PathBuf,
    /// Directory holding one folder per mission
    pub missions_path: PathBuf,
    /// Staging directory
    pub build_path: PathBuf,
    /// Directory receiving the finished mod
    pub target_path: PathBuf,
}

impl Default for ShipperPaths {
    fn default() -> Self {
        Self {
            template_path: PathBuf::from(DEFAULT_TEMPLATE_PATH),
            missions_path: PathBuf::from(DEFAULT_MISSIONS_PATH),
            build_path: PathBuf::from(DEFAULT_BUILD_PATH),
            target_path: PathBuf::from(DEFAULT_TARGET_PATH),
        }
    }
}

impl ShipperPaths {
    /// `@cnto_missions` inside the template tree
    #[must_use]
    pub fn template_mod_path(&self) -> PathBuf {
        mod_path(&self.template_path)
    }

    /// `@cnto_missions` inside the build tree
    #[must_use]
    pub fn build_mod_path(&self) -> PathBuf {
        mod_path(&self.build_path)
    }

    /// `@cnto_missions` inside the target tree
    #[must_use]
    pub fn target_mod_path(&self) -> PathBuf {
        mod_path(&self.target_path)
    }
}

fn mod_path(root: &Path) -> PathBuf {
    root.join(MOD_DIRNAME)
}

/// Everything a run needs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShipperConfig {
    pub paths: ShipperPaths,
    pub archiver: ArchiverConfig,
}

impl ShipperConfig {
    pub fn new(paths: ShipperPaths, archiver: ArchiverConfig) -> Self {
        Self { paths, archiver }
    }
}
