//! Compiled pattern registry

use super::model::SiftConfig;
use crate::error::{Result, SiftError};
use crate::template::{Fields, Parser};

/// Every pattern of a config, compiled once
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    /// Sorted by name
    parsers: Vec<(String, Parser)>,
}

impl PatternSet {
    /// Compile all patterns; the first template that fails to compile aborts
    pub fn from_config(config: &SiftConfig) -> Result<Self> {
        let parsers = config
            .patterns
            .iter()
            .map(|(name, template)| {
                Parser::with_options(template, config.options)
                    .map(|parser| (name.clone(), parser))
                    .map_err(|source| SiftError::PatternInvalid {
                        name: name.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { parsers })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.parsers.iter().map(|(name, _)| name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&Parser> {
        self.parsers
            .iter()
            .find(|(candidate, _)| candidate == name)
            .map(|(_, parser)| parser)
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }

    /// Render `values` with the pattern called `name`
    pub fn compose(&self, name: &str, values: &Fields) -> Result<String> {
        let parser = self
            .get(name)
            .ok_or_else(|| SiftError::PatternNotFound(name.to_string()))?;
        Ok(parser.compose(values)?)
    }

    /// First pattern (in name order) that parses `input`, with its fields
    pub fn identify(&self, input: &str) -> Option<(&str, Fields)> {
        self.parsers.iter().find_map(|(name, parser)| {
            parser.parse(input).ok().map(|fields| {
                tracing::debug!(pattern = %name, input, "identified input");
                (name.as_str(), fields)
            })
        })
    }
}

impl SiftConfig {
    /// Compile every configured pattern
    pub fn pattern_set(&self) -> Result<PatternSet> {
        PatternSet::from_config(self)
    }
}
