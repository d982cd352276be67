use serde::{Serialize, Deserialize};

use crate::activation::step::Step;
use crate::error::Result;
use crate::math::vector;

/// Thresholded linear output for one example: 1 if `w·x + bias >= threshold`, else 0.
pub fn evaluate(example: &[f64], weights: &[f64], bias: f64, threshold: f64) -> Result<u8> {
    let sum = vector::dot(weights, example)? + bias;
    Ok(Step::new(threshold).function(sum))
}

/// Linear delta rule. Returns a new weight vector where
/// `new[i] = weights[i] + (expected - observed) * example[i] * learning_rate`.
///
/// The bias is not touched; fold it into the features as a constant input if
/// it needs to be learned.
pub fn adjust(
    observed: u8,
    expected: u8,
    example: &[f64],
    weights: &[f64],
    learning_rate: f64,
) -> Result<Vec<f64>> {
    vector::ensure_same_len(weights, example)?;
    let error = f64::from(expected) - f64::from(observed);
    Ok(weights.iter().zip(example.iter())
        .map(|(w, x)| w + error * x * learning_rate)
        .collect())
}

/// A single linear threshold unit: one weight per feature, a fixed bias and a
/// step activation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Perceptron {
    pub weights: Vec<f64>,
    pub bias: f64,
    pub activation: Step,
}

impl Perceptron {
    pub fn new(weights: Vec<f64>, bias: f64, threshold: f64) -> Perceptron {
        Perceptron { weights, bias, activation: Step::new(threshold) }
    }

    pub fn zeros(dimension: usize, bias: f64, threshold: f64) -> Perceptron {
        Perceptron::new(vector::zeros(dimension), bias, threshold)
    }

    /// Weights drawn uniformly from `[0, 1)`.
    pub fn random(dimension: usize, bias: f64, threshold: f64) -> Perceptron {
        Perceptron::new(vector::random(dimension), bias, threshold)
    }

    pub fn random_seeded(dimension: usize, seed: u64, bias: f64, threshold: f64) -> Perceptron {
        Perceptron::new(vector::random_seeded(dimension, seed), bias, threshold)
    }

    pub fn dimension(&self) -> usize {
        self.weights.len()
    }

    pub fn threshold(&self) -> f64 {
        self.activation.threshold
    }

    /// `w·x + bias`, before the step is applied.
    pub fn weighted_sum(&self, example: &[f64]) -> Result<f64> {
        Ok(vector::dot(&self.weights, example)? + self.bias)
    }

    pub fn evaluate(&self, example: &[f64]) -> Result<u8> {
        evaluate(example, &self.weights, self.bias, self.threshold())
    }

    /// Evaluates every example against the current weights, in order.
    pub fn predict_all(&self, examples: &[Vec<f64>]) -> Result<Vec<u8>> {
        examples.iter().map(|x| self.evaluate(x)).collect()
    }

    /// Replaces the weights with the delta-rule update for one example.
    pub fn adjust(&mut self, observed: u8, expected: u8, example: &[f64], learning_rate: f64) -> Result<()> {
        self.weights = adjust(observed, expected, example, &self.weights, learning_rate)?;
        Ok(())
    }
}
