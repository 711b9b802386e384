//! Missions - discovery and metadata extraction
//!
//! This module turns the raw mission folders into the values the
//! `config.cpp` template iterates over:
//! - Find mission folders and derive their class names
//! - Pull the briefing name out of each `mission.sqm`

pub mod scan;
pub mod sqm;
pub mod types;

pub use scan::{MissionDir, find_mission_dirs, load_mission, scan_missions};
pub use sqm::{SqmField, SqmFields, read_sqm_fields, scan_sqm};
pub use types::{Mission, MissionMetadata, classname_from_dirname, mission_directory};
