use serde::Serialize;
use std::path::Path;

/// JSON shape of `resolve --json`
#[derive(Debug, Serialize)]
pub struct ResolvedPath<'a> {
    pub input: &'a str,
    pub resolved: String,
    pub exists: bool,
}

/// JSON shape of `is-empty-dir --json`
#[derive(Debug, Serialize)]
pub struct EmptyDirReport<'a> {
    pub path: &'a str,
    pub empty: bool,
}

/// Format bytes into human-readable string (KB, MB, GB)
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Format a resolved path for display (human or JSON)
pub fn format_resolved(input: &str, resolved: &Path, json: bool) -> String {
    if json {
        let report = ResolvedPath {
            input,
            resolved: resolved.display().to_string(),
            exists: resolved.exists(),
        };
        serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
    } else {
        resolved.display().to_string()
    }
}

pub fn format_empty_dir(path: &str, empty: bool, json: bool) -> String {
    if json {
        serde_json::to_string_pretty(&EmptyDirReport { path, empty })
            .unwrap_or_else(|_| "{}".to_string())
    } else {
        empty.to_string()
    }
}

/// Summary line printed after a successful shred
pub fn format_shredded(path: &Path, bytes: u64, passes: u32) -> String {
    format!(
        "Shredded {} ({}, {} pass{})",
        path.display(),
        format_bytes(bytes),
        passes,
        if passes == 1 { "" } else { "es" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.00 KB");
        assert_eq!(format_bytes(10 * 1024 * 1024), "10.00 MB");
    }

    #[test]
    fn test_format_resolved_json() {
        let out = format_resolved("~/x", Path::new("/definitely/not/here"), true);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["input"], "~/x");
        assert_eq!(value["resolved"], "/definitely/not/here");
        assert_eq!(value["exists"], false);
    }

    #[test]
    fn test_format_empty_dir() {
        assert_eq!(format_empty_dir("d", true, false), "true");
        let value: serde_json::Value =
            serde_json::from_str(&format_empty_dir("d", false, true)).unwrap();
        assert_eq!(value["empty"], false);
    }

    #[test]
    fn test_format_shredded() {
        assert_eq!(
            format_shredded(Path::new("a.gpg"), 2048, 1),
            "Shredded a.gpg (2.00 KB, 1 pass)"
        );
        assert_eq!(
            format_shredded(Path::new("a.gpg"), 10, 3),
            "Shredded a.gpg (10 B, 3 passes)"
        );
    }
}
