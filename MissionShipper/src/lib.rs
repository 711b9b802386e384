//! # Mission Shipper
//!
//! Builds the `@cnto_missions` Arma 3 mod so that large missions can be
//! shipped through the regular mod distribution channel instead of the
//! server's mission upload.
//!
//! A run goes through six stages:
//!
//! 1. Remove the stale build copy of the mod
//! 2. Copy the template tree into the build directory, rendering `.j2` files
//! 3. Copy every raw mission folder into `addons/missions/`
//! 4. Remove the stale target copy of the mod
//! 5. Copy the build tree to the target (minus raw missions)
//! 6. Pack the missions into `addons/missions.pbo` with `makepbo`
//!
//! ## Quick Start
//!
//! ```no_run
//! use mission_shipper::prelude::*;
//!
//! let config = ShipperConfig::new(ShipperPaths::default(), ArchiverConfig::from_env());
//! let report = Shipper::new(config).ship(&|_: &ShipProgress| {})?;
//! println!("Packaged {} missions", report.missions);
//! # Ok::<(), mission_shipper::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `mission-shipper` command-line binary

pub mod archive;
pub mod config;
pub mod error;
pub mod layout;
pub mod mission;
pub mod pipeline;
pub mod staging;
pub mod template;
pub mod utils;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::archive::{ArchiverConfig, produce_archive};
    pub use crate::config::{ShipperConfig, ShipperPaths};
    pub use crate::error::{Error, Result};
    pub use crate::mission::{Mission, MissionMetadata, scan_missions};
    pub use crate::pipeline::{ShipPhase, ShipProgress, ShipReport, Shipper};
    pub use crate::staging::{merge_templates, populate_missions};
    pub use crate::template::ContextResolver;
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
