//! Output formatting module for CLI

pub mod json;
pub mod terminal;

pub use json::JsonOutput;
pub use terminal::TerminalOutput;
