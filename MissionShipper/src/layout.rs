//! Fixed filesystem layout of the `@cnto_missions` mod
//!
//! These values are read by the game and by the server's mod sync, so they
//! must not change between releases.

/// Directory name of the mod in the template, build and target trees.
pub const MOD_DIRNAME: &str = "@cnto_missions";

/// Description file inside every mission folder.
pub const MISSION_SQM_PATH: &str = "./mission.sqm";

/// Where raw mission folders live inside the mod.
pub const MISSIONS_DIR_PATH: &str = "./addons/missions/";

/// Suffix marking a file as a Tera template.
pub const TEMPLATE_EXT: &str = ".j2";

/// The only template that needs a render context.
pub const MISSIONS_CONFIG_TEMPLATE: &str = "@cnto_missions/addons/missions/config.cpp.j2";

/// Subtree of the built mod handed to the archiver.
pub const ARCHIVE_SOURCE_PATH: &str = "addons/missions";

/// Archive written into the target mod.
pub const ARCHIVE_OUTPUT_PATH: &str = "addons/missions.pbo";

/// Entry name left out when copying the build tree to the target.
pub const EXCLUDED_DIRNAME: &str = "missions";

/// Must match the addon's `PBOPREFIX`.
pub const MISSION_DIRECTORY_PREFIX: &str = r"cnto\missions\missions\";

/// Environment variable naming the archiver executable.
pub const MAKEPBO_ENV: &str = "MAKEPBO_PATH";

/// Archiver looked up on `PATH` when [`MAKEPBO_ENV`] is unset.
pub const DEFAULT_MAKEPBO: &str = "makepbo";
