use crate::error::{Result, SiftError};
use crate::template::{Parser, ParserOptions};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Pattern file schema - named filename templates plus shared parser options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiftConfig {
    #[serde(default)]
    pub options: ParserOptions,
    /// Pattern name → template
    #[serde(default)]
    pub patterns: BTreeMap<String, String>,
}

impl SiftConfig {
    /// Read a pattern file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SiftError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            patterns = config.patterns.len(),
            "loaded pattern config"
        );
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SiftError::ConfigParseError(e.to_string()))
    }

    /// Write the pattern file
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SiftError::ConfigWriteError(e.to_string()))?;

        std::fs::write(path.as_ref(), content).map_err(SiftError::IoError)?;

        Ok(())
    }

    /// Compile the pattern called `name` with the configured options
    pub fn parser(&self, name: &str) -> Result<Parser> {
        let template = self
            .patterns
            .get(name)
            .ok_or_else(|| SiftError::PatternNotFound(name.to_string()))?;

        Parser::with_options(template, self.options).map_err(|source| SiftError::PatternInvalid {
            name: name.to_string(),
            source,
        })
    }
}
