//! Template tree merge
//!
//! Copies the mod skeleton from the template tree into the build directory.
//! Plain files are copied with their metadata; `.j2` files are rendered and
//! written without the suffix.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::layout::TEMPLATE_EXT;
use crate::staging::copy::{copy_file_preserving, copy_tree_with};
use crate::template::{ContextResolver, render_file};

/// Result of merging the template tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Files copied verbatim
    pub copied: usize,
    /// Files generated from templates
    pub rendered: usize,
}

fn is_template(path: &Path) -> bool {
    path.to_string_lossy().ends_with(TEMPLATE_EXT)
}

/// Destination path of a rendered template: the same name minus `.j2`
fn rendered_path(destination: &Path) -> PathBuf {
    let name = destination
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stripped = name.strip_suffix(TEMPLATE_EXT).unwrap_or(&name);
    destination.with_file_name(stripped)
}

/// Merge `template_mod_path` into `build_mod_path`.
///
/// Every template is resolved through `resolver`; an unregistered template or
/// a failing render aborts the merge.
pub fn merge_templates(
    template_mod_path: &Path,
    build_mod_path: &Path,
    resolver: &ContextResolver,
) -> Result<MergeStats> {
    let mut stats = MergeStats::default();

    copy_tree_with(template_mod_path, build_mod_path, &[], |source, destination| {
        if is_template(source) {
            let target = rendered_path(destination);
            tracing::info!("Generating file '{}' from template", target.display());
            render_file(resolver, source, &target)?;
            stats.rendered += 1;
        } else {
            copy_file_preserving(source, destination)?;
            stats.copied += 1;
        }
        Ok(())
    })?;

    Ok(stats)
}
