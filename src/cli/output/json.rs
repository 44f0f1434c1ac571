//! JSON output formatting

use serde::Serialize;

use crate::error::RepoGateError;

pub struct JsonOutput;

impl JsonOutput {
    pub fn new() -> Self {
        Self
    }

    /// Render any serializable report as pretty JSON
    pub fn render<T: Serialize>(&self, value: &T) -> Result<String, RepoGateError> {
        Ok(serde_json::to_string_pretty(value)?)
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}
