//! Scope configuration: which file to mock, what it contains, how strict to be.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::error::MockOpenError;

fn default_complain() -> bool {
    true
}

/// Configuration for one mock_open scope.
///
/// Can be built in code or loaded from a TOML fixture:
///
/// ```toml
/// filename = "config/app.toml"
/// contents = "debug = true\n"
/// complain = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MockOpenOptions {
    pub filename: PathBuf,
    #[serde(default)]
    pub contents: Option<String>,
    #[serde(default = "default_complain")]
    pub complain: bool,
}

impl MockOpenOptions {
    /// Mock `filename` as an empty file, complaining on verification failure.
    pub fn new(filename: impl Into<PathBuf>) -> Self {
        Self { filename: filename.into(), contents: None, complain: true }
    }

    pub fn contents(mut self, contents: impl Into<String>) -> Self {
        self.contents = Some(contents.into());
        self
    }

    pub fn complain(mut self, complain: bool) -> Self {
        self.complain = complain;
        self
    }

    /// Text the substitute file starts with; empty when none was given.
    pub fn contents_or_empty(&self) -> &str {
        self.contents.as_deref().unwrap_or("")
    }

    pub fn from_toml_str(source: &str) -> Result<Self, MockOpenError> {
        Ok(toml::from_str(source)?)
    }

    /// Read a fixture from disk. The fixture itself is read with `std::fs`,
    /// never through an interceptor.
    pub fn load(path: &Path) -> Result<Self, MockOpenError> {
        let source = fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}
