//! Animator configuration and its builder.

use crate::animator::Animator;
use crate::core::Result;
use crate::model::Model;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Settings that shape an animator's bookkeeping.
///
/// None of these affect tick semantics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimatorConfig {
    /// Record every tick that fires into the history
    pub record_history: bool,

    /// Keep at most this many history records, dropping the oldest
    pub history_limit: Option<usize>,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            record_history: true,
            history_limit: None,
        }
    }
}

impl AnimatorConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Builder for creating animators.
///
/// # Example
///
/// ```rust
/// use grafcet_animator::builder::{AnimatorBuilder, ModelBuilder};
///
/// let model = ModelBuilder::new().initial_step(1).build().unwrap();
/// let animator = AnimatorBuilder::new()
///     .history_limit(100)
///     .build(model)
///     .unwrap();
///
/// assert_eq!(animator.config().history_limit, Some(100));
/// ```
#[derive(Clone, Debug, Default)]
pub struct AnimatorBuilder {
    config: AnimatorConfig,
}

impl AnimatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn with_config(config: AnimatorConfig) -> Self {
        Self { config }
    }

    /// Enable or disable tick history
    pub fn record_history(mut self, enabled: bool) -> Self {
        self.config.record_history = enabled;
        self
    }

    /// Bound the number of retained history records
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.config.history_limit = Some(limit);
        self
    }

    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    /// Build an animator for the model.
    pub fn build(self, model: impl Into<Arc<Model>>) -> Result<Animator> {
        Animator::with_config(model, self.config)
    }
}
