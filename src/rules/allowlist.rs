//! Suppression allowlist
//!
//! Secondary patterns that nullify content-rule matches on review-annotated
//! or intentionally-matching lines. The filter is stateless and pattern-only:
//! it knows nothing about the rule that produced the match and applies
//! uniformly to every content match. It never applies to name matches.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ALLOWLIST_PATTERNS: Vec<Regex> = [
        r"// SECURITY: REVIEWED",
        r"# SECURITY: REVIEWED",
        r"TODO.*security",
        r"FIXME.*security",
        r"test.*password",
        r"example.*password",
        r"placeholder.*key",
        r"demo.*secret",
        r"validator|validation",               // validation code
        r#"\.includes\(['"]\.\./['"]"#,        // checks *for* path traversal
        r"error.*contains.*\.\.",              // error messages about traversal
        r"refine.*\.\.",                       // validation refine functions
        r"pattern.*\.\.",                      // pattern definitions
        r"/lib/validators/",                   // validator files
        r"\.test\.|\.spec\.",                  // test files
        r"describe\(|it\(|expect\(",           // test code
    ]
    .iter()
    .map(|p| Regex::new(&format!("(?i){p}")).unwrap())
    .collect();
}

/// Suppression filter applied to content matches before a violation is
/// created.
pub struct Allowlist {
    patterns: &'static [Regex],
}

impl Allowlist {
    /// Allowlist backed by the embedded suppression patterns
    pub fn new() -> Self {
        Self {
            patterns: &ALLOWLIST_PATTERNS,
        }
    }

    /// Check whether a match should be discarded. Patterns are tested
    /// against the lower-cased, trimmed matched line and, independently,
    /// the lower-cased file path; a hit on either axis suppresses.
    pub fn is_suppressed(&self, line: &str, file_path: &str) -> bool {
        let line = line.trim().to_lowercase();
        let path = file_path.to_lowercase();

        self.patterns
            .iter()
            .any(|pattern| pattern.is_match(&line) || pattern.is_match(&path))
    }
}

impl Default for Allowlist {
    fn default() -> Self {
        Self::new()
    }
}
