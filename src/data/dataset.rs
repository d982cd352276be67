use serde::{Serialize, Deserialize};

use crate::error::{PerceptronError, Result};

/// Labelled training examples: `inputs[i]` is expected to produce `labels[i]`.
///
/// Construction through [`Dataset::new`] or deserialization guarantees equal
/// counts, binary labels and a single feature dimensionality across all
/// examples. The fields stay public, so code that edits them directly must
/// keep those properties; training re-validates either way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDataset")]
pub struct Dataset {
    pub inputs: Vec<Vec<f64>>,
    pub labels: Vec<u8>,
}

#[derive(Deserialize)]
struct RawDataset {
    inputs: Vec<Vec<f64>>,
    labels: Vec<u8>,
}

impl TryFrom<RawDataset> for Dataset {
    type Error = PerceptronError;

    fn try_from(raw: RawDataset) -> Result<Dataset> {
        Dataset::new(raw.inputs, raw.labels)
    }
}

impl Dataset {
    pub fn new(inputs: Vec<Vec<f64>>, labels: Vec<u8>) -> Result<Dataset> {
        validate(&inputs, &labels)?;
        Ok(Dataset { inputs, labels })
    }

    /// Feature count per example.
    pub fn dimension(&self) -> usize {
        self.inputs.first().map(|x| x.len()).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Prepends `value` as an extra leading feature to every example, so the
    /// matching weight acts as a learnable bias.
    pub fn with_constant_feature(&self, value: f64) -> Dataset {
        let inputs = self.inputs.iter()
            .map(|x| {
                let mut row = Vec::with_capacity(x.len() + 1);
                row.push(value);
                row.extend_from_slice(x);
                row
            })
            .collect();
        Dataset { inputs, labels: self.labels.clone() }
    }

    pub fn logical_or() -> Dataset {
        truth_table([0, 1, 1, 1])
    }

    pub fn logical_and() -> Dataset {
        truth_table([0, 0, 0, 1])
    }

    pub fn logical_nand() -> Dataset {
        truth_table([1, 1, 1, 0])
    }

    /// Not linearly separable: a single unit can never reproduce it.
    pub fn logical_xor() -> Dataset {
        truth_table([0, 1, 1, 0])
    }
}

/// Two boolean inputs in the order `00, 01, 10, 11`.
fn truth_table(labels: [u8; 4]) -> Dataset {
    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    Dataset { inputs, labels: labels.to_vec() }
}

/// Checks a training batch before any weights are touched.
pub fn validate(inputs: &[Vec<f64>], labels: &[u8]) -> Result<()> {
    if inputs.len() != labels.len() {
        return Err(PerceptronError::LabelCountMismatch {
            examples: inputs.len(),
            labels: labels.len(),
        });
    }
    if inputs.is_empty() {
        return Err(PerceptronError::EmptyDataset);
    }
    if let Some((index, &label)) = labels.iter().enumerate().find(|&(_, &l)| l > 1) {
        return Err(PerceptronError::InvalidLabel { index, label });
    }
    let dimension = inputs[0].len();
    if let Some(bad) = inputs.iter().find(|x| x.len() != dimension) {
        return Err(PerceptronError::DimensionMismatch {
            expected: dimension,
            found: bad.len(),
        });
    }
    Ok(())
}
