use rand::prelude::*;
use rand::rngs::StdRng;

use crate::error::{PerceptronError, Result};

/// Fails with `DimensionMismatch` unless `example` has one feature per weight.
pub fn ensure_same_len(weights: &[f64], example: &[f64]) -> Result<()> {
    if weights.len() != example.len() {
        return Err(PerceptronError::DimensionMismatch {
            expected: weights.len(),
            found: example.len(),
        });
    }
    Ok(())
}

/// Inner product of two equal-length vectors.
pub fn dot(weights: &[f64], example: &[f64]) -> Result<f64> {
    ensure_same_len(weights, example)?;
    Ok(weights.iter().zip(example.iter()).map(|(w, x)| w * x).sum())
}

pub fn zeros(len: usize) -> Vec<f64> {
    vec![0.0; len]
}

/// Uniform weights in `[0, 1)` drawn from the thread RNG.
pub fn random(len: usize) -> Vec<f64> {
    random_with(&mut rand::thread_rng(), len)
}

/// Uniform weights in `[0, 1)` from a fixed seed, for reproducible runs.
pub fn random_seeded(len: usize, seed: u64) -> Vec<f64> {
    random_with(&mut StdRng::seed_from_u64(seed), len)
}

pub fn random_with<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.gen::<f64>()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_of_matching_vectors() {
        let d = dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap();
        assert_eq!(d, 32.0);
    }

    #[test]
    fn dot_rejects_length_mismatch() {
        let err = dot(&[1.0, 2.0], &[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(
            err,
            PerceptronError::DimensionMismatch { expected: 2, found: 3 }
        ));
    }

    #[test]
    fn seeded_weights_are_reproducible_and_in_range() {
        let a = random_seeded(8, 42);
        let b = random_seeded(8, 42);
        assert_eq!(a, b);
        assert!(a.iter().all(|w| (0.0..1.0).contains(w)));
    }

    #[test]
    fn zeros_has_requested_length() {
        assert_eq!(zeros(3), vec![0.0, 0.0, 0.0]);
    }
}
