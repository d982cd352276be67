use serde::{Serialize, Deserialize};

/// Per-batch trace emitted by `train_loop`.
///
/// When a `progress_tx` channel is configured in `TrainConfig`, the loop
/// sends one `BatchStats` value after every completed batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchStats {
    /// 1-based batch number.
    pub batch: usize,
    /// Total batches requested for this run.
    pub total_batches: usize,
    /// Outputs of every example against the weights at the start of the batch.
    pub outputs: Vec<u8>,
    /// Number of outputs that differ from their label.
    pub misclassified: usize,
    /// `outputs` equals the label vector.
    pub converged: bool,
    /// Weights after this batch's updates.
    pub weights: Vec<f64>,
}

/// Outcome of a training run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainReport {
    pub weights: Vec<f64>,
    pub batches_run: usize,
    /// First batch (1-based) whose outputs matched every label, if any.
    pub converged_at: Option<usize>,
    /// Outputs observed in the last batch that ran.
    pub last_outputs: Vec<u8>,
}

impl TrainReport {
    pub fn converged(&self) -> bool {
        self.converged_at.is_some()
    }
}
