//! Scoring configuration
//!
//! Every weight the scorer applies lives here. Defaults reproduce the
//! canonical scoring rules; a TOML file may override any subset:
//!
//! ```toml
//! [scoring]
//! base_multiplier = 10
//! critical_tags = ["blocker", "critical", "urgent"]
//!
//! [scoring.priority_weights]
//! urgent = 8
//!
//! [scoring.due]
//! overdue = 50
//! ```
//!
//! Lookup order: explicit path, then `TASKRANK_CONFIG`, then `.taskrank.toml`
//! in the working directory, then defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "TASKRANK_CONFIG";

/// Config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = ".taskrank.toml";

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Scoring weights
    #[serde(default)]
    pub scoring: ScoringConfig,
}

/// Weights and thresholds used by the scorer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Multiplier applied to the priority weight
    pub base_multiplier: i64,
    /// Tags that trigger the tag boost
    pub critical_tags: Vec<String>,
    /// Boost for carrying any critical tag (applied once)
    pub tag_boost: i64,
    /// Boost for tasks touched within `recency_window_days`
    pub recency_boost: i64,
    /// Whole days since update below which the recency boost applies
    pub recency_window_days: i64,
    // Tables last so the TOML form stays valid
    /// Weight per priority level
    pub priority_weights: PriorityWeights,
    /// Deadline bands
    pub due: DueBonuses,
    /// Status adjustments
    pub status: StatusAdjustments,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_multiplier: 10,
            critical_tags: ["blocker", "critical", "urgent"].map(String::from).to_vec(),
            tag_boost: 8,
            recency_boost: 5,
            recency_window_days: 1,
            priority_weights: PriorityWeights::default(),
            due: DueBonuses::default(),
            status: StatusAdjustments::default(),
        }
    }
}

/// Weight per priority level; unrecognized priorities weigh 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityWeights {
    /// Low
    pub low: i64,
    /// Medium
    pub medium: i64,
    /// High
    pub high: i64,
    /// Urgent
    pub urgent: i64,
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            low: 1,
            medium: 2,
            high: 4,
            urgent: 6,
        }
    }
}

/// Bonus per deadline band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DueBonuses {
    /// Past due
    pub overdue: i64,
    /// Due within the current whole day
    pub today: i64,
    /// Due in 1..=`soon_days` days
    pub soon: i64,
    /// Upper bound of the "soon" band, in days
    pub soon_days: i64,
    /// Due in (`soon_days`, `week_days`] days
    pub within_week: i64,
    /// Upper bound of the "within week" band, in days
    pub week_days: i64,
}

impl Default for DueBonuses {
    fn default() -> Self {
        Self {
            overdue: 35,
            today: 20,
            soon: 15,
            soon_days: 2,
            within_week: 10,
            week_days: 7,
        }
    }
}

/// Adjustment per status; other statuses get 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusAdjustments {
    /// Done
    pub done: i64,
    /// Review
    pub review: i64,
}

impl Default for StatusAdjustments {
    fn default() -> Self {
        Self {
            done: -50,
            review: -15,
        }
    }
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Render configuration as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from a file
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loading config from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Resolve the config file to use, if any
    #[must_use]
    pub fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
            return Some(PathBuf::from(path));
        }
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        local.is_file().then_some(local)
    }

    /// Load the config named by [`Config::locate`], or defaults if none
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        Self::locate(explicit).map_or_else(|| Ok(Self::default()), |path| Self::from_path(&path))
    }
}
