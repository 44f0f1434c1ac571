//! TODO format rules
//!
//! Valid-polarity rules describe accepted TODO shapes; invalid-polarity
//! rules describe shapes that are flagged outright. Both are tried on every
//! TODO-bearing line and their outcomes are independent: a line can match a
//! valid shape and still collect violations from invalid shapes.

use lazy_static::lazy_static;
use regex::Regex;

use crate::rules::registry::{Polarity, Rule};

lazy_static! {
    /// Generic TODO rules, applicable to every file type
    pub static ref TODO_RULES: Vec<Rule> = vec![
        // Accepted shapes
        Rule::todo(
            "standard-todo",
            r"(//|#)\s*TODO:\s+[A-Z][^,]*\s+\(Task\s+\d+\)",
            Polarity::Valid,
            "Standard TODO with task reference",
            &[],
        ),
        Rule::todo(
            "author-todo",
            r"(//|#)\s*TODO\([\w\s]+\):\s+[A-Z].*",
            Polarity::Valid,
            "TODO with author attribution",
            &[],
        ),
        Rule::todo(
            "date-todo",
            r"(//|#)\s*TODO\s+\d{4}-\d{2}-\d{2}:\s+[A-Z].*",
            Polarity::Valid,
            "TODO with date",
            &[],
        ),

        // Flagged shapes
        Rule::todo(
            "vague-todo",
            r"(//|#)\s*TODO:?\s+(fix|update|change|improve|refactor|cleanup)\s*$",
            Polarity::Invalid,
            "Vague TODO - be more specific about what needs to be done",
            &[],
        ),
        Rule::todo(
            "no-context-todo",
            r"(//|#)\s*TODO:?\s*$",
            Polarity::Invalid,
            "Empty TODO - add description",
            &[],
        ),
        Rule::todo(
            "informal-todo",
            r"(//|#)\s*(todo|Todo|fix this|fixme|hack|temp)\s+",
            Polarity::Invalid,
            "Informal TODO - use standard format: TODO: Description",
            &[],
        ),
        Rule::todo(
            "outdated-todo",
            r"(//|#)\s*TODO.*(\d{4}.*old|over\s+\d+\s+(months?|years?))",
            Polarity::Invalid,
            "Potentially outdated TODO - review and update",
            &[],
        ),
    ];

    /// File-type-specific TODO rules, tried after the generic rules
    pub static ref FILETYPE_TODO_RULES: Vec<Rule> = vec![
        Rule::todo(
            "python-multiline-todo",
            r#""""\s*TODO:.*?""""#,
            Polarity::Valid,
            "Python docstring TODO",
            &["py"],
        ),
        Rule::todo(
            "markdown-todo",
            r"^\s*-\s*\[\s*\]\s+TODO:",
            Polarity::Valid,
            "Markdown checklist TODO",
            &["md"],
        ),
        Rule::todo(
            "markdown-incomplete",
            r"^\s*-\s*\[\s*\]\s+[a-z]",
            Polarity::Invalid,
            "Markdown TODO should start with capital letter",
            &["md"],
        ),
        Rule::todo(
            "plaintext-todo",
            r"^TODO\s+\d+\.\s+[A-Z].*",
            Polarity::Valid,
            "Plain text numbered TODO",
            &["txt"],
        ),
    ];

    /// Secondary well-formed shape tried before the catch-all fires
    pub static ref WELL_FORMED_TODO: Regex = Regex::new(r"(?i)TODO:\s+[A-Z].*\w").unwrap();
}

/// Rule name and message for the catch-all violation
pub const CATCH_ALL_RULE: &str = "invalid-todo-format";
pub const CATCH_ALL_MESSAGE: &str =
    "TODO doesn't follow standard format - use: TODO: Description (Task #)";
