//! Build tree staging
//!
//! Assembles the build copy of the mod:
//! - Merge the template tree, rendering `.j2` files
//! - Copy raw mission folders under `addons/missions/`
//! - Clean stale build and target trees between runs

pub mod clean;
pub mod copy;
pub mod merge;
pub mod populate;

pub use clean::remove_dir_if_exists;
pub use copy::{CopyStats, copy_file_preserving, copy_tree, copy_tree_with};
pub use merge::{MergeStats, merge_templates};
pub use populate::populate_missions;
