/// Every complete command string the dispatcher understands, in the order
/// suggestions are offered.
pub const CATALOG: &[&str] = &[
    "help",
    "clear",
    "about",
    "neofetch",
    "ssg init",
    "ssg populate",
    "ssg build",
    "ssg dev",
    "ssg deploy",
    "ssg analyze",
    "ca grid init",
    "ca grid step",
    "ca grid info",
    "ca grid export",
    "ca grid import",
    "ca grid query",
    "ca rule load",
    "ca rule validate",
    "ca rule compile",
    "ca rule list",
    "ca cell get",
    "ca cell set",
    "ca region get",
    "ca region assign-rule",
    "ca inject",
    "ca simulate",
    "ca benchmark",
    "ca profile",
    "ca debug",
    "ca query stability",
    "ca query entropy",
    "ca query performance",
    "fs ls",
    "fs cat",
    "fs tree",
    "project list",
];

pub const MAX_SUGGESTIONS: usize = 5;

/// Prefix-matches `partial` (trimmed, case-insensitive) against the catalog.
/// Blank input gives no suggestions.
pub fn autocomplete(partial: &str) -> Vec<String> {
    let needle = partial.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    CATALOG
        .iter()
        .filter(|entry| entry.starts_with(&needle))
        .take(MAX_SUGGESTIONS)
        .map(|entry| entry.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_clears() {
        assert!(autocomplete("").is_empty());
        assert!(autocomplete("   ").is_empty());
    }

    #[test]
    fn caps_at_five_in_catalog_order() {
        assert_eq!(
            autocomplete("ca g"),
            vec!["ca grid init", "ca grid step", "ca grid info", "ca grid export", "ca grid import"]
        );
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(autocomplete("  FS  "), vec!["fs ls", "fs cat", "fs tree"]);
        assert_eq!(autocomplete("Ssg D"), vec!["ssg dev", "ssg deploy"]);
    }

    #[test]
    fn no_match() {
        assert!(autocomplete("rm -rf").is_empty());
    }

    #[test]
    fn catalog_has_no_duplicates() {
        for (i, entry) in CATALOG.iter().enumerate() {
            assert!(!CATALOG[..i].contains(entry), "duplicate catalog entry {}", entry);
        }
    }
}
