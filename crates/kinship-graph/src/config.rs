//! Configuration for graph construction

use crate::error::{GraphError, Result};
use kinship_domain::{ChartId, RelativeLabels};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// What to do with a relationship that names an unknown person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReferencePolicy {
    /// Log a warning, skip the relationship and keep building
    #[default]
    Skip,
    /// Abort the build with `GraphError::InvalidReference`
    Strict,
}

/// Configuration for building a relationship graph
///
/// # Examples
///
/// ```
/// use kinship_graph::{GraphConfig, ReferencePolicy};
///
/// let config = GraphConfig::from_toml(r#"
/// chart_id = "main"
/// reference_policy = "strict"
///
/// [relative_labels]
/// Cousin = ["Cousin", "Cousin", "Cousin"]
/// "#).unwrap();
///
/// assert_eq!(config.chart_id.as_deref(), Some("main"));
/// assert_eq!(config.reference_policy, ReferencePolicy::Strict);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GraphConfig {
    /// Explicit chart id; when absent each graph takes the next process-wide id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_id: Option<String>,

    /// Handling of relationships that name unknown persons
    #[serde(default)]
    pub reference_policy: ReferencePolicy,

    /// Extra or replacement relative labels: relationship name → 3 or 6 labels
    #[serde(default)]
    pub relative_labels: BTreeMap<String, Vec<String>>,
}

impl GraphConfig {
    /// Strict preset: abort on the first unresolvable reference
    pub fn strict() -> Self {
        Self {
            reference_policy: ReferencePolicy::Strict,
            ..Self::default()
        }
    }

    /// Use an explicit chart id
    pub fn with_chart_id(mut self, chart_id: impl Into<String>) -> Self {
        self.chart_id = Some(chart_id.into());
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(chart_id) = &self.chart_id {
            if chart_id.is_empty() {
                return Err(GraphError::Config("chart_id cannot be empty".to_string()));
            }
        }
        for (name, labels) in &self.relative_labels {
            if labels.len() != 3 && labels.len() != 6 {
                return Err(GraphError::Config(format!(
                    "relative_labels.{} must have 3 or 6 entries, got {}",
                    name,
                    labels.len()
                )));
            }
        }
        Ok(())
    }

    /// Chart id for a new graph: the configured one, or the next process-wide id
    pub fn resolve_chart_id(&self) -> ChartId {
        match &self.chart_id {
            Some(id) => ChartId::new(id.clone()),
            None => ChartId::next(),
        }
    }

    /// Standard relative labels with this configuration's overrides applied
    pub fn relative_labels(&self) -> Result<RelativeLabels> {
        let mut labels = RelativeLabels::standard();
        for (name, set) in &self.relative_labels {
            labels
                .insert(name.clone(), set)
                .map_err(|e| GraphError::Config(format!("relative_labels.{}: {}", name, e)))?;
        }
        Ok(labels)
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: GraphConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| GraphError::Config(format!("Failed to serialize config: {}", e)))
    }
}
