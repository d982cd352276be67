use std::sync::mpsc;

use serde::{Serialize, Deserialize};

use crate::error::{PerceptronError, Result};
use crate::train::batch_stats::BatchStats;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `num_batches`   — batches to run; the loop never stops before this
/// - `learning_rate` — multiplier on every delta-rule correction
/// - `progress_tx`   — optional channel sender; one `BatchStats` is sent per
///                     completed batch. Not serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub num_batches: usize,
    pub learning_rate: f64,
    #[serde(skip)]
    pub progress_tx: Option<mpsc::Sender<BatchStats>>,
}

impl TrainConfig {
    pub fn new(num_batches: usize, learning_rate: f64) -> Self {
        TrainConfig {
            num_batches,
            learning_rate,
            progress_tx: None,
        }
    }

    pub fn with_progress(mut self, tx: mpsc::Sender<BatchStats>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    /// Parses a JSON object such as `{"num_batches": 20, "learning_rate": 0.1}`.
    /// Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: TrainConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure_finite_rate(self.learning_rate)
    }
}

/// Rejects NaN and infinite learning rates, which would poison every weight.
pub fn ensure_finite_rate(learning_rate: f64) -> Result<()> {
    if !learning_rate.is_finite() {
        return Err(PerceptronError::InvalidConfig(format!(
            "learning_rate must be finite, got {}",
            learning_rate
        )));
    }
    Ok(())
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(10, 1.0)
    }
}
