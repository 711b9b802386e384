//! Mod build pipeline
//!
//! Runs the six stages strictly in order. The first error aborts the run
//! and leaves the build and target trees as they were at that point; the
//! cleanup stages of the next run discard any partial output.

use std::path::PathBuf;

use crate::archive::{pack_missions, produce_target_tree};
use crate::config::ShipperConfig;
use crate::error::Result;
use crate::staging::{merge_templates, populate_missions, remove_dir_if_exists};
use crate::template::{ContextResolver, ContextSources};

/// Progress callback type for pipeline runs
pub type ShipProgressCallback<'a> = &'a dyn Fn(&ShipProgress);

/// Stage of a pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipPhase {
    /// Removing the previous build mod
    CleaningBuild,
    /// Copying and rendering the template tree
    MergingTemplates,
    /// Copying raw mission folders into the build mod
    PopulatingMissions,
    /// Removing the previous target mod
    CleaningTarget,
    /// Copying the build mod to the target, minus raw missions
    CopyingTarget,
    /// Packing the missions PBO with the archiver
    Archiving,
    /// Run finished
    Complete,
}

impl ShipPhase {
    /// Stages reported before [`ShipPhase::Complete`]
    pub const STAGES: usize = 6;

    /// 1-indexed position of this phase
    #[must_use]
    pub fn step(self) -> usize {
        match self {
            Self::CleaningBuild => 1,
            Self::MergingTemplates => 2,
            Self::PopulatingMissions => 3,
            Self::CleaningTarget => 4,
            Self::CopyingTarget => 5,
            Self::Archiving | Self::Complete => 6,
        }
    }

    /// Get a human-readable description of this phase
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CleaningBuild => "Cleaning build directory",
            Self::MergingTemplates => "Generating mod from templates",
            Self::PopulatingMissions => "Adding missions",
            Self::CleaningTarget => "Cleaning target directory",
            Self::CopyingTarget => "Copying mod to target",
            Self::Archiving => "Packing missions.pbo",
            Self::Complete => "Complete",
        }
    }
}

/// Progress information during a pipeline run
#[derive(Debug, Clone)]
pub struct ShipProgress {
    /// Current phase
    pub phase: ShipPhase,
    /// Directory the phase operates on
    pub path: PathBuf,
}

/// Summary of a finished run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipReport {
    /// Mission folders packaged
    pub missions: usize,
    /// Template files copied verbatim
    pub files_copied: usize,
    /// Files generated from templates
    pub files_rendered: usize,
    /// Files in the target mod besides the PBO
    pub target_files: usize,
    /// Path of the written PBO
    pub archive_path: PathBuf,
}

/// Builds the `@cnto_missions` mod
#[derive(Debug, Clone)]
pub struct Shipper {
    config: ShipperConfig,
    resolver: ContextResolver,
}

impl Shipper {
    /// Create a shipper with the default template registry
    pub fn new(config: ShipperConfig) -> Self {
        let resolver = ContextResolver::with_defaults(
            config.paths.template_path.clone(),
            ContextSources {
                missions_path: config.paths.missions_path.clone(),
            },
        );
        Self::with_resolver(config, resolver)
    }

    /// Create a shipper using a custom template registry
    pub fn with_resolver(config: ShipperConfig, resolver: ContextResolver) -> Self {
        Self { config, resolver }
    }

    #[must_use]
    pub fn config(&self) -> &ShipperConfig {
        &self.config
    }

    /// Run the whole pipeline
    pub fn ship(&self, progress: ShipProgressCallback) -> Result<ShipReport> {
        let paths = &self.config.paths;
        let build_mod_path = paths.build_mod_path();
        let target_mod_path = paths.target_mod_path();
        let notify = |phase: ShipPhase, path: &PathBuf| {
            progress(&ShipProgress {
                phase,
                path: path.clone(),
            });
        };

        notify(ShipPhase::CleaningBuild, &build_mod_path);
        remove_dir_if_exists(&build_mod_path)?;

        notify(ShipPhase::MergingTemplates, &build_mod_path);
        let merged = merge_templates(&paths.template_mod_path(), &build_mod_path, &self.resolver)?;

        notify(ShipPhase::PopulatingMissions, &paths.missions_path);
        let missions = populate_missions(&paths.missions_path, &build_mod_path)?;

        notify(ShipPhase::CleaningTarget, &target_mod_path);
        remove_dir_if_exists(&target_mod_path)?;

        notify(ShipPhase::CopyingTarget, &target_mod_path);
        let target_files = produce_target_tree(&build_mod_path, &target_mod_path)?;

        notify(ShipPhase::Archiving, &target_mod_path);
        let archive_path = pack_missions(&build_mod_path, &target_mod_path, &self.config.archiver)?;

        notify(ShipPhase::Complete, &target_mod_path);
        tracing::info!("Packaged {} missions into {}", missions, archive_path.display());

        Ok(ShipReport {
            missions,
            files_copied: merged.copied,
            files_rendered: merged.rendered,
            target_files,
            archive_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::ArchiverConfig;
    use crate::config::ShipperPaths;
    use crate::error::Error;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::TempDir;

    fn paths(root: &std::path::Path) -> ShipperPaths {
        ShipperPaths {
            template_path: root.join("templates"),
            missions_path: root.join("missions"),
            build_path: root.join("build"),
            target_path: root.join("target"),
        }
    }

    #[test]
    fn test_phase_steps() {
        assert_eq!(ShipPhase::CleaningBuild.step(), 1);
        assert_eq!(ShipPhase::CopyingTarget.step(), 5);
        assert_eq!(ShipPhase::Archiving.step(), ShipPhase::STAGES);
    }

    #[test]
    fn test_missing_sqm_aborts_before_target() {
        let temp = TempDir::new().unwrap();
        let paths = paths(temp.path());
        let template_mod = paths.template_mod_path();
        fs::create_dir_all(template_mod.join("addons/missions")).unwrap();
        fs::write(template_mod.join("addons/missions/config.cpp.j2"), "{{ missions | length }}").unwrap();
        fs::create_dir_all(paths.missions_path.join("broken.Altis")).unwrap();
        fs::create_dir_all(paths.target_mod_path()).unwrap();
        fs::write(paths.target_mod_path().join("old.txt"), "stale").unwrap();

        let phases = RefCell::new(Vec::new());
        let shipper = Shipper::new(ShipperConfig::new(paths.clone(), ArchiverConfig::new("true")));
        let err = shipper
            .ship(&|p: &ShipProgress| phases.borrow_mut().push(p.phase))
            .unwrap_err();

        assert!(matches!(err, Error::MissionDescriptionNotFound { .. }));
        assert_eq!(
            phases.into_inner(),
            vec![ShipPhase::CleaningBuild, ShipPhase::MergingTemplates]
        );
        // Target cleanup never ran
        assert!(paths.target_mod_path().join("old.txt").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_phases_in_order() {
        let temp = TempDir::new().unwrap();
        let paths = paths(temp.path());
        let template_mod = paths.template_mod_path();
        fs::create_dir_all(&template_mod).unwrap();
        fs::write(template_mod.join("mod.cpp"), "name = \"x\";").unwrap();
        fs::create_dir_all(&paths.missions_path).unwrap();

        let phases = RefCell::new(Vec::new());
        let shipper = Shipper::new(ShipperConfig::new(paths, ArchiverConfig::new("true")));
        let report = shipper
            .ship(&|p: &ShipProgress| phases.borrow_mut().push(p.phase))
            .unwrap();

        assert_eq!(report.missions, 0);
        assert_eq!(report.files_copied, 1);
        assert_eq!(
            phases.into_inner(),
            vec![
                ShipPhase::CleaningBuild,
                ShipPhase::MergingTemplates,
                ShipPhase::PopulatingMissions,
                ShipPhase::CleaningTarget,
                ShipPhase::CopyingTarget,
                ShipPhase::Archiving,
                ShipPhase::Complete,
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_target_copied_before_archiving() {
        let temp = TempDir::new().unwrap();
        let paths = paths(temp.path());
        let template_mod = paths.template_mod_path();
        fs::create_dir_all(&template_mod).unwrap();
        fs::write(template_mod.join("mod.cpp"), "name = \"x\";").unwrap();
        fs::create_dir_all(&paths.missions_path).unwrap();

        let marker = paths.target_mod_path().join("mod.cpp");
        let seen = RefCell::new(Vec::new());
        let shipper = Shipper::new(ShipperConfig::new(paths, ArchiverConfig::new("true")));
        shipper
            .ship(&|p: &ShipProgress| seen.borrow_mut().push((p.phase, marker.exists())))
            .unwrap();

        let seen = seen.into_inner();
        assert!(seen.contains(&(ShipPhase::CopyingTarget, false)));
        assert!(seen.contains(&(ShipPhase::Archiving, true)));
    }
}
