//! Mission types handed to the `config.cpp` template

use serde::Serialize;

use crate::layout::MISSION_DIRECTORY_PREFIX;

/// One packaged mission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mission {
    /// `CfgMissions` class name, derived from the folder name
    pub classname: String,
    /// Entries written into the mission's class body
    pub metadata: MissionMetadata,
}

/// Class body entries for a mission.
///
/// Field order is the order the entries are emitted in when a template
/// iterates over the metadata map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissionMetadata {
    /// Quoted `directory` value, e.g. `"cnto\missions\missions\co10_foo.Altis"`
    pub directory: String,
    /// Briefing name as written in `mission.sqm`, quotes included
    #[serde(rename = "briefingName", skip_serializing_if = "Option::is_none")]
    pub briefing_name: Option<String>,
}

impl Mission {
    /// Build a mission from its folder name, without any extracted metadata
    #[must_use]
    pub fn from_dirname(dirname: &str) -> Self {
        Self {
            classname: classname_from_dirname(dirname),
            metadata: MissionMetadata {
                directory: mission_directory(dirname),
                briefing_name: None,
            },
        }
    }
}

/// Derive the `CfgMissions` class name from a mission folder name.
///
/// The class name must match the `directory` entry minus the map suffix, and
/// dashes are not allowed in class names: `co10-foo.Altis` becomes `co10_foo`.
/// A folder name without a map suffix is used as is.
#[must_use]
pub fn classname_from_dirname(dirname: &str) -> String {
    let stem = dirname.rfind('.').map_or(dirname, |idx| &dirname[..idx]);
    stem.replace('-', "_")
}

/// Build the quoted `directory` entry for a mission folder.
#[must_use]
pub fn mission_directory(dirname: &str) -> String {
    format!("\"{MISSION_DIRECTORY_PREFIX}{dirname}\"")
}

/// Whether `name` can be used as a class name in a config file
#[must_use]
pub fn is_valid_classname(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
