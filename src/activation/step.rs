use serde::{Serialize, Deserialize};

/// Heaviside step activation with a configurable threshold.
///
/// The unit fires (returns 1) when the weighted sum is greater than or equal
/// to `threshold`, and returns 0 otherwise. A NaN sum never fires.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub threshold: f64,
}

impl Step {
    pub fn new(threshold: f64) -> Step {
        Step { threshold }
    }

    pub fn function(&self, x: f64) -> u8 {
        if x >= self.threshold { 1 } else { 0 }
    }
}

impl Default for Step {
    fn default() -> Self {
        Step { threshold: 0.5 }
    }
}
