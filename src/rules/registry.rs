//! Rule definitions and the rule registry
//!
//! A [`Rule`] is one declarative check: a compiled pattern, a severity, the
//! file types it applies to and its polarity. Rules live in `lazy_static`
//! tables ([`super::patterns`]) compiled once per process; the registry only
//! borrows them. [`NamingRules`] are the exception: their patterns come from
//! configuration and are compiled at startup, where a malformed pattern is
//! fatal.

use regex::Regex;

use super::results::Severity;
use crate::config::ScanConfig;
use crate::error::RuleError;
use crate::scanner::file_suffix;

/// Whether a pattern describes an accepted or a flagged shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// A match marks the line as properly formed.
    Valid,
    /// A match is a violation.
    Invalid,
}

/// A single declarative content rule.
pub struct Rule {
    /// Rule identifier used in reports (e.g. "hardcoded-api-key")
    pub name: &'static str,
    /// Compiled pattern, searched against whole file content or a line
    pub regex: Regex,
    /// Severity assigned to matches
    pub severity: Severity,
    /// Whether a match is accepted or flagged
    pub polarity: Polarity,
    /// Human-readable description, used as the violation message
    pub description: &'static str,
    /// File extensions (without dot) the rule applies to; empty = all
    pub file_types: &'static [&'static str],
    /// Carve-out tested against the matched text; a match discards the
    /// candidate (e.g. loopback hosts for the insecure-HTTP rule)
    pub exception: Option<Regex>,
}

impl Rule {
    /// Build an invalid-polarity content rule. Content patterns compile
    /// case-insensitive and multi-line aware.
    pub fn content(
        name: &'static str,
        pattern: &str,
        severity: Severity,
        description: &'static str,
        file_types: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            regex: compile_content_pattern(pattern),
            severity,
            polarity: Polarity::Invalid,
            description,
            file_types,
            exception: None,
        }
    }

    /// Attach an exception pattern to the rule
    pub fn with_exception(mut self, pattern: &str) -> Self {
        self.exception = Some(compile_content_pattern(pattern));
        self
    }

    /// Build a TODO-shape rule. Line patterns compile case-insensitive.
    pub fn todo(
        name: &'static str,
        pattern: &str,
        polarity: Polarity,
        description: &'static str,
        file_types: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            regex: compile_line_pattern(pattern),
            severity: Severity::Warning,
            polarity,
            description,
            file_types,
            exception: None,
        }
    }

    /// Check whether the rule applies to a file extension (without dot)
    pub fn applies_to(&self, extension: &str) -> bool {
        self.file_types.is_empty() || self.file_types.contains(&extension)
    }
}

// Embedded patterns are validated by the rule-set tests; a malformed table
// entry must abort at first use rather than under-scan.
fn compile_content_pattern(pattern: &str) -> Regex {
    Regex::new(&format!("(?im){pattern}")).unwrap()
}

fn compile_line_pattern(pattern: &str) -> Regex {
    Regex::new(&format!("(?i){pattern}")).unwrap()
}

/// Ordered collection of rules applicable to a validator run.
pub struct RuleRegistry {
    rules: Vec<&'static Rule>,
}

impl RuleRegistry {
    /// Registry of security anti-pattern rules
    pub fn security() -> Self {
        Self {
            rules: super::patterns::security::SECURITY_RULES.iter().collect(),
        }
    }

    /// Registry of TODO-format rules: generic rules first, then
    /// file-type-specific ones, so `rules_for` yields them in the order the
    /// scanner must try them.
    pub fn todos() -> Self {
        Self {
            rules: super::patterns::todo::TODO_RULES
                .iter()
                .chain(super::patterns::todo::FILETYPE_TODO_RULES.iter())
                .collect(),
        }
    }

    /// Rules applicable to a file extension (without dot), in registry order
    pub fn rules_for<'a>(&'a self, extension: &'a str) -> impl Iterator<Item = &'static Rule> + 'a {
        self.rules
            .iter()
            .copied()
            .filter(move |rule| rule.applies_to(extension))
    }

    /// Total number of rules in the registry
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry holds no rules
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Name-matching rules for the naming validator, compiled from
/// configuration at startup.
pub struct NamingRules {
    folder_pattern: Regex,
    file_pattern: Regex,
    allowed_extensions: Vec<String>,
}

impl NamingRules {
    /// Compile the configured naming patterns, anchored at the start of
    /// the name.
    pub fn from_config(config: &ScanConfig) -> Result<Self, RuleError> {
        Ok(Self {
            folder_pattern: compile_anchored(&config.folder_patterns.required_prefix)?,
            file_pattern: compile_anchored(&config.file_patterns.required_prefix)?,
            allowed_extensions: config.file_patterns.allowed_extensions.clone(),
        })
    }

    /// Validate a bare folder name against the folder pattern
    pub fn validate_folder_name(&self, name: &str) -> bool {
        self.folder_pattern.is_match(name)
    }

    /// Validate a bare file name: prefix pattern plus extension whitelist
    pub fn validate_file_name(&self, name: &str) -> bool {
        if !self.file_pattern.is_match(name) {
            return false;
        }
        let suffix = file_suffix(name);
        self.allowed_extensions.iter().any(|ext| ext == suffix)
    }
}

fn compile_anchored(pattern: &str) -> Result<Regex, RuleError> {
    Regex::new(&format!(r"\A(?:{pattern})")).map_err(|source| RuleError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}
