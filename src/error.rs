use thiserror::Error;

/// Errors surfaced by evaluation, weight adjustment and training.
///
/// Non-convergence is not an error: a perceptron that never reproduces its
/// labels (e.g. on XOR) finishes its batches normally.
#[derive(Debug, Error)]
pub enum PerceptronError {
    /// An example's feature count differs from the weight vector's length.
    #[error("dimension mismatch: weight vector has {expected} entries, example has {found} features")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("label count mismatch: {examples} examples but {labels} labels")]
    LabelCountMismatch { examples: usize, labels: usize },

    #[error("label {label} at index {index} is not 0 or 1")]
    InvalidLabel { index: usize, label: u8 },

    #[error("training set is empty")]
    EmptyDataset,

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PerceptronError>;
