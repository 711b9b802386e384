//! Best-effort field extraction from `mission.sqm`
//!
//! SQM is a class-based config format, but missions only need a couple of
//! top-level values out of it, so each line is matched against a small table
//! of key patterns instead of parsing the whole file. The first line matching
//! a key wins; keys without a match are simply absent.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::layout::MISSION_SQM_PATH;

/// A value that can be pulled out of `mission.sqm`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SqmField {
    /// `briefingName="..."`, the title shown in the mission list
    BriefingName,
}

impl SqmField {
    /// Every recognized field
    pub const ALL: [SqmField; 1] = [SqmField::BriefingName];

    /// Key as written in the SQM file
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::BriefingName => "briefingName",
        }
    }

    /// Line pattern; capture group 1 is the raw value
    fn pattern(self) -> &'static str {
        match self {
            Self::BriefingName => r"briefingName=(.*)$",
        }
    }
}

/// Fields found while scanning a description file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SqmFields {
    values: BTreeMap<SqmField, String>,
}

impl SqmFields {
    /// Value of `field`, if a matching line was found
    #[must_use]
    pub fn get(&self, field: SqmField) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    /// Take the value of `field` out of the set
    pub fn take(&mut self, field: SqmField) -> Option<String> {
        self.values.remove(&field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn field_patterns() -> &'static [(SqmField, Regex)] {
    static PATTERNS: OnceLock<Vec<(SqmField, Regex)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        SqmField::ALL
            .iter()
            .map(|&field| {
                let regex = Regex::new(field.pattern()).expect("valid SQM field pattern");
                (field, regex)
            })
            .collect()
    })
}

/// Strip what follows a value on its line: whitespace, then the `;` terminator
fn clean_value(raw: &str) -> &str {
    raw.trim_end().trim_end_matches(';')
}

/// Scan SQM text line by line for the recognized fields
#[must_use]
pub fn scan_sqm(text: &str) -> SqmFields {
    let patterns = field_patterns();
    let mut fields = SqmFields::default();

    for line in text.lines() {
        for (field, regex) in patterns {
            if fields.values.contains_key(field) {
                continue;
            }
            if let Some(captures) = regex.captures(line) {
                let value = captures.get(1).map_or("", |m| m.as_str());
                fields.values.insert(*field, clean_value(value).to_string());
            }
        }
        if fields.values.len() == patterns.len() {
            break;
        }
    }

    fields
}

/// Read and scan the `mission.sqm` of a mission folder.
///
/// Binarized or oddly encoded files are scanned lossily. A folder without a
/// description file is malformed and yields
/// [`Error::MissionDescriptionNotFound`].
pub fn read_sqm_fields(mission_path: &Path) -> Result<SqmFields> {
    let sqm_path = mission_path.join(MISSION_SQM_PATH);
    let bytes = std::fs::read(&sqm_path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::MissionDescriptionNotFound { path: sqm_path.clone() },
        _ => Error::Io(e),
    })?;

    Ok(scan_sqm(&String::from_utf8_lossy(&bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    const SQM: &str = r#"version=53;
class EditorData
{
	moveGridStep=1;
};
class ScenarioData
{
	author="CNTO";
};
class Mission
{
	class Intel
	{
		briefingName="Op Thunder";
		overviewText="Hold the line";
	};
};
"#;

    #[test]
    fn test_briefing_name_keeps_quotes() {
        let fields = scan_sqm(SQM);
        assert_eq!(fields.get(SqmField::BriefingName), Some("\"Op Thunder\""));
    }

    #[test]
    fn test_trailing_whitespace_and_separator() {
        let fields = scan_sqm("briefingName=\"Dusk\";   \r\n");
        assert_eq!(fields.get(SqmField::BriefingName), Some("\"Dusk\""));
    }

    #[test]
    fn test_first_match_wins() {
        let fields = scan_sqm("briefingName=\"First\";\nbriefingName=\"Second\";\n");
        assert_eq!(fields.get(SqmField::BriefingName), Some("\"First\""));
    }

    #[test]
    fn test_missing_field_is_absent() {
        let fields = scan_sqm("version=53;\nclass Mission {};\n");
        assert!(fields.is_empty());
        assert_eq!(fields.get(SqmField::BriefingName), None);
    }

    #[test]
    fn test_read_missing_sqm() {
        let temp = TempDir::new().unwrap();
        let err = read_sqm_fields(temp.path()).unwrap_err();
        assert!(matches!(err, Error::MissionDescriptionNotFound { .. }));
    }

    #[test]
    fn test_read_non_utf8_sqm() {
        let temp = TempDir::new().unwrap();
        let mut bytes = b"\xff\xfe garbage\n".to_vec();
        bytes.extend_from_slice(b"briefingName=\"Raw\";\n");
        fs::write(temp.path().join("mission.sqm"), bytes).unwrap();

        let mut fields = read_sqm_fields(temp.path()).unwrap();
        assert_eq!(fields.take(SqmField::BriefingName).as_deref(), Some("\"Raw\""));
        assert!(fields.is_empty());
    }
}
