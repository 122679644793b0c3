//! Configuration for shape checks and reporting.
//!
//! Load order: `.shapecheck/config.toml` → environment variables → defaults.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Top-level shapecheck configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapecheckConfig {
    pub graph: GraphConfig,
    pub tree: TreeConfig,
    pub report: ReportConfig,
}

/// Graph check configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Which cycle query backs acyclicity checks.
    pub cycle_detection: CycleDetection,
}

/// Tree check configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Which binary-shape query backs binary checks.
    pub binary_shape: BinaryShape,
    /// Upper bound on depth enforced by tree checks. Unset means unbounded.
    pub max_depth: Option<usize>,
}

/// Report configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Stop at the first failed check instead of collecting all outcomes.
    pub fail_fast: bool,
    pub format: ReportFormat,
}

/// Cycle semantics for undirected graphs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleDetection {
    /// `Graph::has_cycle`: any undirected edge counts as a cycle.
    #[default]
    Legacy,
    /// `Graph::has_simple_cycle`: the arriving edge is not walked back.
    Simple,
}

/// Source of a tree's binary shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryShape {
    /// `Tree::is_binary_tree`: shape declared by the construction mapping.
    #[default]
    Declared,
    /// `Tree::is_structurally_binary`: shape of the assembled nodes.
    Structural,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl CycleDetection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Simple => "simple",
        }
    }
}

impl BinaryShape {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Declared => "declared",
            Self::Structural => "structural",
        }
    }
}

impl FromStr for CycleDetection {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "simple" => Ok(Self::Simple),
            other => anyhow::bail!("unknown cycle detection mode: {other} (expected legacy|simple)"),
        }
    }
}

impl FromStr for BinaryShape {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "declared" => Ok(Self::Declared),
            "structural" => Ok(Self::Structural),
            other => anyhow::bail!("unknown binary shape mode: {other} (expected declared|structural)"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("unknown report format: {other} (expected text|json)"),
        }
    }
}

/// Helper to parse an env var and apply it to a config field.
fn env_override<T: FromStr>(var: &str, target: &mut T) {
    if let Ok(v) = std::env::var(var)
        && let Ok(parsed) = v.parse()
    {
        *target = parsed;
    }
}

impl ShapecheckConfig {
    /// Load config from `.shapecheck/config.toml` in the project root, with
    /// env var overrides. Falls back to defaults if no config file exists.
    pub fn load(project_root: &Path) -> Result<Self> {
        let config_path = project_root.join(".shapecheck").join("config.toml");

        let config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content)?
        } else {
            Self::default()
        };

        config.with_env_overrides().validated()
    }

    /// Apply `SHAPECHECK_*` environment variables on top of this config.
    pub fn with_env_overrides(mut self) -> Self {
        env_override(
            "SHAPECHECK_CYCLE_DETECTION",
            &mut self.graph.cycle_detection,
        );
        env_override("SHAPECHECK_BINARY_SHAPE", &mut self.tree.binary_shape);
        env_override("SHAPECHECK_FAIL_FAST", &mut self.report.fail_fast);
        env_override("SHAPECHECK_REPORT_FORMAT", &mut self.report.format);
        if let Ok(v) = std::env::var("SHAPECHECK_MAX_DEPTH")
            && let Ok(n) = v.parse()
        {
            self.tree.max_depth = Some(n);
        }
        self
    }

    pub fn validated(self) -> Result<Self> {
        if self.tree.max_depth == Some(0) {
            anyhow::bail!("tree.max_depth must be at least 1 when set");
        }
        Ok(self)
    }
}
