use log::info;

use crate::error::Result;
use crate::train::batch_stats::TrainReport;
use crate::train::loop_fn::{train_loop, train_batch, has_converged};
use crate::train::train_config::{TrainConfig, ensure_finite_rate};
use crate::unit::perceptron::Perceptron;

/// Trains a fresh perceptron from `initial_weights` for `num_batches`
/// batches and returns the final weights.
///
/// `bias` is held fixed for the whole run. The caller's weight slice is
/// never modified.
pub fn train(
    examples: &[Vec<f64>],
    labels: &[u8],
    initial_weights: &[f64],
    bias: f64,
    threshold: f64,
    num_batches: usize,
    learning_rate: f64,
) -> Result<Vec<f64>> {
    let mut perceptron = Perceptron::new(initial_weights.to_vec(), bias, threshold);
    let config = TrainConfig::new(num_batches, learning_rate);
    let report = train_loop(&mut perceptron, examples, labels, &config)?;
    Ok(report.weights)
}

/// Runs batches until the outputs reproduce the labels or `max_batches` is
/// reached, whichever comes first.
///
/// The converging batch makes no corrections, so the returned weights are
/// the ones that reproduce the labels.
pub fn train_until_converged(
    perceptron: &mut Perceptron,
    inputs: &[Vec<f64>],
    labels: &[u8],
    learning_rate: f64,
    max_batches: usize,
) -> Result<TrainReport> {
    ensure_finite_rate(learning_rate)?;

    let mut converged_at = None;
    let mut last_outputs = Vec::new();
    let mut batches_run = 0;

    for batch in 1..=max_batches {
        last_outputs = train_batch(perceptron, inputs, labels, learning_rate)?;
        batches_run = batch;
        if has_converged(&last_outputs, labels) {
            converged_at = Some(batch);
            break;
        }
    }

    match converged_at {
        Some(batch) => info!("stopped early: converged at batch {}", batch),
        None => info!("no convergence within {} batches", max_batches),
    }

    Ok(TrainReport {
        weights: perceptron.weights.clone(),
        batches_run,
        converged_at,
        last_outputs,
    })
}
