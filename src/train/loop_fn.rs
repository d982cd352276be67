use log::{debug, info, warn};

use crate::data::dataset;
use crate::error::{PerceptronError, Result};
use crate::train::batch_stats::{BatchStats, TrainReport};
use crate::train::train_config::{TrainConfig, ensure_finite_rate};
use crate::unit::perceptron::Perceptron;

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Trains `perceptron` for exactly `config.num_batches` batches and returns
/// the final weights together with what was observed along the way.
///
/// # Arguments
/// - `perceptron` — mutable reference to the unit; its weights are modified in place
/// - `inputs`     — training examples, each of length `perceptron.dimension()`
/// - `labels`     — expected outputs in {0, 1}, same length as `inputs`
/// - `config`     — batch budget, learning rate, optional progress channel
///
/// Reaching convergence does not end the run early; `converged_at` only
/// records the first batch whose outputs matched the labels.
///
/// # Errors
/// All validation happens before the first update, so on error the weights
/// are untouched.
pub fn train_loop(
    perceptron: &mut Perceptron,
    inputs: &[Vec<f64>],
    labels: &[u8],
    config: &TrainConfig,
) -> Result<TrainReport> {
    config.validate()?;
    check_inputs(perceptron, inputs, labels)?;

    let mut converged_at = None;
    let mut last_outputs = Vec::new();
    let mut sink_open = config.progress_tx.is_some();

    for batch in 1..=config.num_batches {
        let outputs = run_one_batch(perceptron, inputs, labels, config.learning_rate)?;

        let misclassified = count_misclassified(&outputs, labels);
        let converged = misclassified == 0;
        if converged && converged_at.is_none() {
            converged_at = Some(batch);
        }

        debug!(
            "batch {}/{}: outputs={:?} misclassified={} weights={:?}",
            batch, config.num_batches, outputs, misclassified, perceptron.weights
        );

        if sink_open {
            if let Some(ref tx) = config.progress_tx {
                let stats = BatchStats {
                    batch,
                    total_batches: config.num_batches,
                    outputs: outputs.clone(),
                    misclassified,
                    converged,
                    weights: perceptron.weights.clone(),
                };
                // A dropped receiver only silences the trace.
                if tx.send(stats).is_err() {
                    warn!("progress receiver dropped at batch {}; continuing without trace", batch);
                    sink_open = false;
                }
            }
        }

        last_outputs = outputs;
    }

    match converged_at {
        Some(batch) => info!("converged at batch {} of {}", batch, config.num_batches),
        None => info!("did not converge in {} batches", config.num_batches),
    }

    Ok(TrainReport {
        weights: perceptron.weights.clone(),
        batches_run: config.num_batches,
        converged_at,
        last_outputs,
    })
}

/// Runs a single batch and returns the outputs computed before the updates.
///
/// Every example is first evaluated against the current weights; then the
/// delta rule is applied example by example, each update building on the
/// weights left by the previous one.
pub fn train_batch(
    perceptron: &mut Perceptron,
    inputs: &[Vec<f64>],
    labels: &[u8],
    learning_rate: f64,
) -> Result<Vec<u8>> {
    ensure_finite_rate(learning_rate)?;
    check_inputs(perceptron, inputs, labels)?;
    run_one_batch(perceptron, inputs, labels, learning_rate)
}

/// True when a batch's outputs reproduce the labels exactly.
pub fn has_converged(outputs: &[u8], labels: &[u8]) -> bool {
    outputs == labels
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn run_one_batch(
    perceptron: &mut Perceptron,
    inputs: &[Vec<f64>],
    labels: &[u8],
    learning_rate: f64,
) -> Result<Vec<u8>> {
    let outputs = perceptron.predict_all(inputs)?;

    for ((input, &expected), &observed) in inputs.iter().zip(labels.iter()).zip(outputs.iter()) {
        perceptron.adjust(observed, expected, input, learning_rate)?;
    }

    Ok(outputs)
}

fn check_inputs(perceptron: &Perceptron, inputs: &[Vec<f64>], labels: &[u8]) -> Result<()> {
    if perceptron.threshold().is_nan() {
        return Err(PerceptronError::InvalidConfig("threshold must not be NaN".into()));
    }
    dataset::validate(inputs, labels)?;
    let found = inputs[0].len();
    if found != perceptron.dimension() {
        return Err(PerceptronError::DimensionMismatch {
            expected: perceptron.dimension(),
            found,
        });
    }
    Ok(())
}

fn count_misclassified(outputs: &[u8], labels: &[u8]) -> usize {
    outputs.iter().zip(labels.iter()).filter(|(o, l)| o != l).count()
}
