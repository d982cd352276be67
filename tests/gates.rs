use perceptron_lab::{
    Dataset, Perceptron, PerceptronError, TrainConfig,
    adjust, evaluate, train, train_loop, train_until_converged,
};

fn batches_to_converge(data: &Dataset, initial: &[f64], learning_rate: f64) -> Option<usize> {
    let mut unit = Perceptron::new(initial.to_vec(), 0.0, 0.5);
    let config = TrainConfig::new(200, learning_rate);
    train_loop(&mut unit, &data.inputs, &data.labels, &config)
        .unwrap()
        .converged_at
}

#[test]
fn reference_example_fires() {
    let weights = [0.2, 0.12, 0.4, 0.6, 0.9];
    let example = [1.0, 0.2, 0.1, 0.05, 0.2];
    assert_eq!(evaluate(&example, &weights, 0.2, 0.5).unwrap(), 1);
}

#[test]
fn reference_adjustment_is_exact() {
    let weights = [0.2, 0.12, 0.4, 0.6, 0.9];
    let example = [1.0, 0.2, 0.1, 0.05, 0.2];
    let updated = adjust(1, 0, &example, &weights, 1.0).unwrap();
    let golden = [-0.8, -0.08, 0.3, 0.55, 0.7];
    for (got, want) in updated.iter().zip(golden.iter()) {
        assert!((got - want).abs() < 1e-12, "got {got}, want {want}");
    }
}

#[test]
fn or_converges_within_two_batches_at_unit_rate() {
    let or = Dataset::logical_or();
    for initial in [[0.01, 0.01], [0.1, 0.1], [0.3, 0.2], [0.45, 0.1], [0.2, 0.49]] {
        let at = batches_to_converge(&or, &initial, 1.0);
        assert!(matches!(at, Some(b) if b <= 2), "initial {initial:?} converged at {at:?}");
    }
}

#[test]
fn or_learns_slower_with_smaller_rate() {
    let or = Dataset::logical_or();
    let initial = [0.1, 0.1];
    let fast = batches_to_converge(&or, &initial, 1.0).unwrap();
    let medium = batches_to_converge(&or, &initial, 0.2).unwrap();
    let slow = batches_to_converge(&or, &initial, 0.05).unwrap();
    assert!(slow > fast);
    assert!(slow >= medium && medium >= fast);
}

#[test]
fn xor_never_converges() {
    let xor = Dataset::logical_xor();
    for learning_rate in [0.05, 0.1, 0.5, 1.0, 2.0] {
        for initial in [[0.0, 0.0], [0.1, 0.1], [0.7, 0.3], [-0.4, 0.9]] {
            assert_eq!(batches_to_converge(&xor, &initial, learning_rate), None);
        }
    }
}

#[test]
fn xor_with_learned_bias_still_never_converges() {
    let xor = Dataset::logical_xor().with_constant_feature(1.0);
    let mut unit = Perceptron::random_seeded(xor.dimension(), 3, 0.0, 0.5);
    let report = train_until_converged(&mut unit, &xor.inputs, &xor.labels, 0.5, 500).unwrap();
    assert!(!report.converged());
}

#[test]
fn nand_needs_a_learned_bias() {
    // With a fixed zero bias and positive threshold, 00 can never fire.
    let nand = Dataset::logical_nand();
    assert_eq!(batches_to_converge(&nand, &[0.1, 0.1], 1.0), None);

    let augmented = nand.with_constant_feature(1.0);
    let mut unit = Perceptron::zeros(augmented.dimension(), 0.0, 0.5);
    let report = train_until_converged(&mut unit, &augmented.inputs, &augmented.labels, 0.1, 500).unwrap();
    assert!(report.converged());
}

#[test]
fn and_converges() {
    let and = Dataset::logical_and();
    assert!(batches_to_converge(&and, &[0.1, 0.1], 0.1).is_some());
}

#[test]
fn train_returns_separating_weights_for_or() {
    let or = Dataset::logical_or();
    let weights = train(&or.inputs, &or.labels, &[0.1, 0.1], 0.0, 0.5, 4, 1.0).unwrap();
    let unit = Perceptron::new(weights, 0.0, 0.5);
    assert_eq!(unit.predict_all(&or.inputs).unwrap(), or.labels);
}

#[test]
fn mismatch_is_reported_not_recovered() {
    let err = evaluate(&[1.0, 2.0, 3.0], &[0.5, 0.5], 0.0, 0.5).unwrap_err();
    assert!(matches!(err, PerceptronError::DimensionMismatch { expected: 2, found: 3 }));
    assert_eq!(
        err.to_string(),
        "dimension mismatch: weight vector has 2 entries, example has 3 features"
    );
}
