//! Path utilities

use std::path::Path;

/// Normalize path separators to forward slashes (for registry keys and logs)
pub fn normalize_path<P: AsRef<Path>>(path: P) -> String {
    path.as_ref().to_string_lossy().replace('\\', "/")
}

/// Get relative path and normalize separators
pub fn relative_path<P: AsRef<Path>, B: AsRef<Path>>(path: P, base: B) -> Option<String> {
    path.as_ref()
        .strip_prefix(base.as_ref())
        .ok()
        .map(normalize_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path_strips_base() {
        let rel = relative_path(
            "templates/@cnto_missions/addons/missions/config.cpp.j2",
            "templates/",
        );
        assert_eq!(
            rel.as_deref(),
            Some("@cnto_missions/addons/missions/config.cpp.j2")
        );
    }

    #[test]
    fn test_relative_path_outside_base() {
        assert_eq!(relative_path("other/file.txt", "templates"), None);
    }

    #[test]
    fn test_normalize_backslashes() {
        assert_eq!(normalize_path(r"addons\missions\config.cpp"), "addons/missions/config.cpp");
    }
}
