//! Classifier configuration.
//!
//! Configuration is plain data with YAML as its file format:
//!
//! ```yaml
//! variant: naive
//! max-nodes-processed: 100000
//! ```
//!
//! Every key is optional; the defaults are the memoized traversal with no
//! ceiling on processed nodes.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Node-revisit policy of a traversal.
///
/// Parsing, in code and in configuration files, ignores case and accepts
/// `optimized` for [`Variant::Memoized`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Enqueue every reference every time it is encountered.
    ///
    /// A node reachable by `k` paths is processed `k` times, and a reference
    /// cycle never drains the frontier.
    Naive,

    /// Enqueue each identity at most once.
    #[default]
    Memoized,
}

impl Variant {
    /// Both variants, naive first.
    pub const ALL: [Variant; 2] = [Variant::Naive, Variant::Memoized];
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Naive => write!(f, "naive"),
            Self::Memoized => write!(f, "memoized"),
        }
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "naive" => Ok(Self::Naive),
            "memoized" | "optimized" => Ok(Self::Memoized),
            other => Err(Error::Config(format!(
                "unknown traversal variant '{other}' (expected 'naive' or 'memoized')"
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for Variant {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Settings for a [`ProfileClassifier`](crate::ProfileClassifier).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ClassifierConfig {
    /// Traversal variant.
    pub variant: Variant,

    /// Fail once this many nodes have been processed without a result.
    ///
    /// The naive variant needs this to be safe on graphs that may contain a
    /// reference cycle or heavily shared dependencies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_nodes_processed: Option<usize>,
}

impl ClassifierConfig {
    /// Configuration for `variant` with no ceiling.
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            max_nodes_processed: None,
        }
    }

    /// Set the ceiling on processed nodes.
    #[must_use]
    pub fn with_max_nodes_processed(mut self, limit: usize) -> Self {
        self.max_nodes_processed = Some(limit);
        self
    }

    /// Reject settings no run could satisfy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the ceiling is zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_nodes_processed == Some(0) {
            return Err(Error::Config(
                "max-nodes-processed must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate YAML configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for malformed YAML, unknown keys or invalid
    /// values.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, otherwise as
    /// [`ClassifierConfig::from_yaml_str`].
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&content)?;
        tracing::debug!(path = %path.display(), variant = %config.variant, "Loaded classifier config");
        Ok(config)
    }

    /// Render as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if serialization fails.
    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| Error::Config(format!("YAML error: {e}")))
    }
}
