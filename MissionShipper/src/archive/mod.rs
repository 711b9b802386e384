//! PBO packing and target tree assembly

pub mod makepbo;
pub mod producer;

pub use makepbo::ArchiverConfig;
pub use producer::{ArchiveReport, pack_missions, produce_archive, produce_target_tree};
