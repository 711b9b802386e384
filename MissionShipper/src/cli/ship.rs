//! CLI command building the mod

use std::cell::RefCell;
use std::time::Instant;

use anyhow::Context;
use console::Emoji;
use indicatif::ProgressBar;

use super::progress::{BROOM, DOCUMENT, GEAR, PACKAGE, print_done, print_step, simple_spinner};
use crate::config::ShipperConfig;
use crate::pipeline::{ShipPhase, ShipProgress, Shipper};

fn phase_emoji(phase: ShipPhase) -> &'static Emoji<'static, 'static> {
    match phase {
        ShipPhase::CleaningBuild | ShipPhase::CleaningTarget => &BROOM,
        ShipPhase::MergingTemplates | ShipPhase::CopyingTarget => &GEAR,
        ShipPhase::PopulatingMissions => &DOCUMENT,
        ShipPhase::Archiving | ShipPhase::Complete => &PACKAGE,
    }
}

/// Build the mod, printing one step line per stage when `show_progress`
pub fn execute(config: ShipperConfig, show_progress: bool) -> anyhow::Result<()> {
    let start = Instant::now();
    let program = config.archiver.program.display().to_string();
    let spinner: RefCell<Option<ProgressBar>> = RefCell::new(None);

    let on_progress = |progress: &ShipProgress| {
        if !show_progress {
            return;
        }
        if let Some(pb) = spinner.borrow_mut().take() {
            pb.finish_and_clear();
        }
        let phase = progress.phase;
        if phase == ShipPhase::Complete {
            return;
        }

        print_step(
            phase.step(),
            ShipPhase::STAGES,
            phase_emoji(phase),
            &format!("{} ({})", phase.as_str(), progress.path.display()),
        );
        if phase == ShipPhase::Archiving {
            *spinner.borrow_mut() = Some(simple_spinner(&format!("Running {program}...")));
        }
    };

    let result = Shipper::new(config).ship(&on_progress);
    if let Some(pb) = spinner.borrow_mut().take() {
        pb.finish_and_clear();
    }
    let report = result.context("failed to build @cnto_missions")?;

    if show_progress {
        println!(
            "Packaged {} missions ({} files copied, {} generated) into {}",
            report.missions,
            report.files_copied,
            report.files_rendered,
            report.archive_path.display()
        );
        print_done(start.elapsed());
    }

    Ok(())
}
